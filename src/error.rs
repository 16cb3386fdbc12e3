//! Error types for the calculator pipeline

use thiserror::Error;

/// Calculator errors
///
/// Scanning is total, so every error here comes from tree construction or
/// evaluation. The first error encountered aborts the whole computation;
/// there is no recovery or partial result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Tree construction errors
    /// The token stream was empty
    ///
    /// **Triggered by:** Input containing only whitespace
    #[error("No tokens to build a tree from")]
    NoTokens,

    /// The entire input was a single parenthesis
    ///
    /// **Triggered by:** `(` or `)` with nothing else
    #[error("Input is a single unmatched parenthesis")]
    SingleBracket,

    /// A closing parenthesis appeared with no open group to close
    ///
    /// **Triggered by:** Too many closing parentheses
    /// **Example:** `(+ 1 2))`
    #[error("Unexpected closing parenthesis with no open group")]
    UnexpectedRightBracket,

    /// Input ended while a group was still open
    ///
    /// **Triggered by:** A missing closing parenthesis
    /// **Example:** `(+ 1 2`
    #[error("Unexpected end of input inside an unclosed group")]
    UnexpectedEndOfStream,

    // Evaluation errors
    /// A group has no children to interpret
    ///
    /// **Example:** `()`
    #[error("Cannot evaluate an empty group")]
    EmptyGroup,

    /// The operation position of a group holds another group, not a name
    ///
    /// **Example:** `((+ 1 2) 3 4)`
    #[error("Operation position holds a group, not a literal")]
    OperationNotALiteral,

    /// A recognized operation was applied to the wrong number of operands
    #[error("Operation `{operation}` expects {expected} operands, got {got}")]
    IncorrectArgumentCount {
        /// Operation name
        operation: String,
        /// Required operand count
        expected: usize,
        /// Actual operand count
        got: usize,
    },

    /// The operation name is not one the evaluator knows
    ///
    /// **Example:** `(foo 1 2)` — only `+` and `*` are supported
    #[error("Unknown operation: `{name}`")]
    UnknownOperation {
        /// The unrecognized operation name
        name: String,
    },

    /// A literal in operand position is not a valid numeral
    ///
    /// **Example:** `(+ 1 banana)`
    #[error("Cannot parse `{text}` as a number")]
    NumeralParseError {
        /// The literal text that failed to parse
        text: String,
    },
}

/// Result type for calculator operations
pub type Result<T> = std::result::Result<T, Error>;
