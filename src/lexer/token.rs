use serde::{Deserialize, Serialize};

/// A single token from the source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// Opening parenthesis `(`
    LeftBracket,
    /// Closing parenthesis `)`
    RightBracket,
    /// A maximal run of non-whitespace, non-parenthesis characters;
    /// semantically either an operation name or a numeral
    Literal(String),
}
