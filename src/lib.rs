//! # lispcalc - A Tiny LISP-Style Arithmetic Calculator
//!
//! A small but complete interpreter for parenthesized arithmetic
//! expressions: `(* 2 (+ 3 4))` evaluates to `14`. Top-level tokens are
//! implicitly grouped, so `* (+ 12 3) 81` works without outer parentheses.
//!
//! ## Quick Start
//!
//! ```rust
//! use lispcalc::{Evaluator, Scanner, TreeBuilder};
//!
//! # fn main() -> lispcalc::Result<()> {
//! // Tokenize (scan)
//! let mut scanner = Scanner::new("(* 2 (+ 3 4))");
//! let tokens = scanner.scan_tokens();
//!
//! // Build the expression tree
//! let mut builder = TreeBuilder::new(tokens);
//! let tree = builder.build()?;
//!
//! // Evaluate
//! let result = Evaluator::new().evaluate(&tree)?;
//! assert_eq!(result, 14.0);
//! # Ok(())
//! # }
//! ```
//!
//! Or use the top-level convenience functions:
//!
//! ```rust
//! # fn main() -> lispcalc::Result<()> {
//! let tree = lispcalc::parse("(+ 1 2)")?;
//! assert_eq!(lispcalc::evaluate(&tree)?, 3.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! A strict three-stage pipeline with no feedback between stages:
//!
//! ```text
//! Source Text → Scanner → Tokens → TreeBuilder → Tree → Evaluator → f64
//! ```
//!
//! ### Main Components
//!
//! - [`Scanner`] - Tokenizes source text into tokens; never fails
//! - [`TreeBuilder`] - Builds tokens into a nested expression tree,
//!   tracking parenthesis depth
//! - [`Evaluator`] - Walks the tree and reduces it to a number
//! - [`Node`] - The expression tree, with [`Node::render`] for diagnostic
//!   display
//! - [`Error`] - One variant per malformed-input case
//!
//! ## Error Handling
//!
//! Tree construction and evaluation fail fast: the first error anywhere in
//! the recursive descent aborts the computation.
//!
//! ```rust
//! use lispcalc::Error;
//!
//! let err = lispcalc::parse("(+ 1 2").unwrap_err();
//! assert_eq!(err, Error::UnexpectedEndOfStream);
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod runtime;

pub use error::{Error, Result};
pub use lexer::{Scanner, Token};
pub use parser::{Node, TreeBuilder};
pub use runtime::Evaluator;

/// Version of the lispcalc interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scans `source` and builds it into an expression tree
pub fn parse(source: &str) -> Result<Node> {
    let mut scanner = Scanner::new(source);
    let tokens = scanner.scan_tokens();
    tracing::debug!("scanned {} tokens", tokens.len());

    let mut builder = TreeBuilder::new(tokens);
    builder.build()
}

/// Evaluates an expression tree to a number
pub fn evaluate(tree: &Node) -> Result<f64> {
    Evaluator::new().evaluate(tree)
}
