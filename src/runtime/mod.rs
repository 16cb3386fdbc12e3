//! Expression tree evaluation
//!
//! Walks a finished tree and reduces it to a single floating-point number.

mod evaluator;

pub use evaluator::Evaluator;
