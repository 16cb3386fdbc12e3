use crate::error::{Error, Result};
use crate::parser::Node;

/// Evaluator for expression trees
///
/// Recursively interprets the first child of each group as an operation
/// name and the remaining children as operands. Evaluation is pure: the
/// tree is only read, and the evaluator itself holds no state between
/// calls.
#[derive(Debug, Default)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator
    pub fn new() -> Self {
        Evaluator
    }

    /// Evaluates an expression tree to a number
    pub fn evaluate(&self, node: &Node) -> Result<f64> {
        match node {
            Node::Literal(text) => self.eval_numeral(text),
            Node::Group(children) => self.eval_group(children),
        }
    }

    fn eval_group(&self, children: &[Node]) -> Result<f64> {
        match children {
            [] => Err(Error::EmptyGroup),

            // A group of one is transparent. The implicit top-level group
            // around a fully bracketed expression lands here.
            [only] => self.evaluate(only),

            [operation, operands @ ..] => {
                let name = match operation {
                    Node::Literal(text) => text,
                    Node::Group(_) => return Err(Error::OperationNotALiteral),
                };
                self.apply(name, operands)
            }
        }
    }

    /// Dispatches a named operation over its operands
    fn apply(&self, name: &str, operands: &[Node]) -> Result<f64> {
        match name {
            "+" => {
                let (left, right) = self.binary_operands(name, operands)?;
                Ok(left + right)
            }
            "*" => {
                let (left, right) = self.binary_operands(name, operands)?;
                Ok(left * right)
            }
            _ => Err(Error::UnknownOperation {
                name: name.to_string(),
            }),
        }
    }

    /// Evaluates exactly two operands, both fully, before combining
    fn binary_operands(&self, name: &str, operands: &[Node]) -> Result<(f64, f64)> {
        if operands.len() != 2 {
            return Err(Error::IncorrectArgumentCount {
                operation: name.to_string(),
                expected: 2,
                got: operands.len(),
            });
        }

        let left = self.evaluate(&operands[0])?;
        let right = self.evaluate(&operands[1])?;
        Ok((left, right))
    }

    fn eval_numeral(&self, text: &str) -> Result<f64> {
        text.parse::<f64>().map_err(|_| Error::NumeralParseError {
            text: text.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(text: &str) -> Node {
        Node::Literal(text.to_string())
    }

    fn group(children: Vec<Node>) -> Node {
        Node::Group(children)
    }

    fn eval(node: &Node) -> Result<f64> {
        Evaluator::new().evaluate(node)
    }

    #[test]
    fn test_literal_numeral() {
        assert_eq!(eval(&lit("42")).unwrap(), 42.0);
        assert_eq!(eval(&lit("-1.5")).unwrap(), -1.5);
    }

    #[test]
    fn test_addition() {
        let tree = group(vec![lit("+"), lit("1"), lit("2")]);
        assert_eq!(eval(&tree).unwrap(), 3.0);
    }

    #[test]
    fn test_multiplication() {
        let tree = group(vec![lit("*"), lit("6"), lit("7")]);
        assert_eq!(eval(&tree).unwrap(), 42.0);
    }

    #[test]
    fn test_nested_operations() {
        // (* 2 (+ 3 4))
        let tree = group(vec![
            lit("*"),
            lit("2"),
            group(vec![lit("+"), lit("3"), lit("4")]),
        ]);
        assert_eq!(eval(&tree).unwrap(), 14.0);
    }

    #[test]
    fn test_singleton_group_is_transparent() {
        let tree = group(vec![group(vec![lit("+"), lit("1"), lit("2")])]);
        assert_eq!(eval(&tree).unwrap(), 3.0);

        let tree = group(vec![lit("42")]);
        assert_eq!(eval(&tree).unwrap(), 42.0);
    }

    #[test]
    fn test_empty_group_fails() {
        assert_eq!(eval(&group(Vec::new())).unwrap_err(), Error::EmptyGroup);
    }

    #[test]
    fn test_group_in_operation_position_fails() {
        let tree = group(vec![
            group(vec![lit("+"), lit("1"), lit("2")]),
            lit("3"),
            lit("4"),
        ]);
        assert_eq!(eval(&tree).unwrap_err(), Error::OperationNotALiteral);
    }

    #[test]
    fn test_wrong_operand_count_fails() {
        let too_many = group(vec![lit("+"), lit("1"), lit("2"), lit("3")]);
        assert_eq!(
            eval(&too_many).unwrap_err(),
            Error::IncorrectArgumentCount {
                operation: "+".to_string(),
                expected: 2,
                got: 3,
            }
        );

        let too_few = group(vec![lit("*"), lit("1")]);
        assert_eq!(
            eval(&too_few).unwrap_err(),
            Error::IncorrectArgumentCount {
                operation: "*".to_string(),
                expected: 2,
                got: 1,
            }
        );
    }

    #[test]
    fn test_unknown_operation_fails() {
        let tree = group(vec![lit("foo"), lit("1"), lit("2")]);
        assert_eq!(
            eval(&tree).unwrap_err(),
            Error::UnknownOperation {
                name: "foo".to_string(),
            }
        );
    }

    #[test]
    fn test_bad_numeral_fails() {
        let tree = group(vec![lit("+"), lit("1"), lit("banana")]);
        assert_eq!(
            eval(&tree).unwrap_err(),
            Error::NumeralParseError {
                text: "banana".to_string(),
            }
        );
    }

    #[test]
    fn test_error_in_operand_propagates() {
        // The left operand fails; the error propagates immediately
        let tree = group(vec![
            lit("+"),
            group(vec![lit("nope"), lit("1"), lit("2")]),
            lit("3"),
        ]);
        assert_eq!(
            eval(&tree).unwrap_err(),
            Error::UnknownOperation {
                name: "nope".to_string(),
            }
        );
    }
}
