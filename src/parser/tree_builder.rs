use super::ast::Node;
use crate::error::{Error, Result};
use crate::lexer::Token;

/// Recursive-descent builder from a token stream to an expression tree
///
/// One cursor is shared across all recursive calls; the nesting depth rides
/// along as a parameter so mismatched parentheses surface as distinct
/// errors depending on which side is missing.
pub struct TreeBuilder {
    tokens: Vec<Token>,
    current: usize,
}

impl TreeBuilder {
    /// Creates a new tree builder over a token stream
    pub fn new(tokens: Vec<Token>) -> Self {
        TreeBuilder { tokens, current: 0 }
    }

    /// Builds the expression tree, consuming every token
    ///
    /// A single-token stream is returned directly: a literal becomes a bare
    /// [`Node::Literal`], a lone bracket is an error. Anything longer is
    /// wrapped in the implicit top-level group.
    pub fn build(&mut self) -> Result<Node> {
        if self.tokens.is_empty() {
            return Err(Error::NoTokens);
        }

        if self.tokens.len() == 1 {
            return match &self.tokens[0] {
                Token::Literal(text) => Ok(Node::Literal(text.clone())),
                Token::LeftBracket | Token::RightBracket => Err(Error::SingleBracket),
            };
        }

        self.build_group(0)
    }

    /// Collects children until the current group closes
    ///
    /// `depth` is the number of open parentheses enclosing the cursor. The
    /// top-level call runs at depth 0 and closes only at end of input; any
    /// deeper call must be closed by a matching right bracket.
    fn build_group(&mut self, depth: usize) -> Result<Node> {
        let mut children = Vec::new();

        while !self.is_at_end() {
            match self.advance() {
                Token::Literal(text) => children.push(Node::Literal(text)),
                Token::LeftBracket => children.push(self.build_group(depth + 1)?),
                Token::RightBracket => {
                    if depth == 0 {
                        return Err(Error::UnexpectedRightBracket);
                    }
                    return Ok(Node::Group(children));
                }
            }
        }

        if depth > 0 {
            return Err(Error::UnexpectedEndOfStream);
        }

        Ok(Node::Group(children))
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.tokens.len()
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.current].clone();
        self.current += 1;
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Scanner;

    fn build_str(source: &str) -> Result<Node> {
        let mut scanner = Scanner::new(source);
        let tokens = scanner.scan_tokens();
        let mut builder = TreeBuilder::new(tokens);
        builder.build()
    }

    fn lit(text: &str) -> Node {
        Node::Literal(text.to_string())
    }

    #[test]
    fn test_bracketed_expression_keeps_implicit_root() {
        let tree = build_str("(+ 1 2)").unwrap();

        // The bracketed group sits inside the implicit top-level group, so
        // tree nesting mirrors parenthesis nesting
        assert_eq!(
            tree,
            Node::Group(vec![Node::Group(vec![lit("+"), lit("1"), lit("2")])])
        );
    }

    #[test]
    fn test_top_level_tokens_implicitly_grouped() {
        let tree = build_str("* (+ 12 3) 81").unwrap();

        assert_eq!(
            tree,
            Node::Group(vec![
                lit("*"),
                Node::Group(vec![lit("+"), lit("12"), lit("3")]),
                lit("81"),
            ])
        );
    }

    #[test]
    fn test_single_literal_is_bare_node() {
        assert_eq!(build_str("42").unwrap(), lit("42"));
    }

    #[test]
    fn test_nested_groups() {
        let tree = build_str("(* 2 (+ 3 4))").unwrap();

        assert_eq!(
            tree,
            Node::Group(vec![Node::Group(vec![
                lit("*"),
                lit("2"),
                Node::Group(vec![lit("+"), lit("3"), lit("4")]),
            ])])
        );
    }

    #[test]
    fn test_empty_input_fails() {
        assert_eq!(build_str("").unwrap_err(), Error::NoTokens);
        assert_eq!(build_str("  \n ").unwrap_err(), Error::NoTokens);
    }

    #[test]
    fn test_single_bracket_fails() {
        assert_eq!(build_str("(").unwrap_err(), Error::SingleBracket);
        assert_eq!(build_str(")").unwrap_err(), Error::SingleBracket);
    }

    #[test]
    fn test_unclosed_group_fails() {
        assert_eq!(
            build_str("(+ 1 2").unwrap_err(),
            Error::UnexpectedEndOfStream
        );
        assert_eq!(build_str("((").unwrap_err(), Error::UnexpectedEndOfStream);
    }

    #[test]
    fn test_stray_right_bracket_fails() {
        assert_eq!(
            build_str("(+ 1 2))").unwrap_err(),
            Error::UnexpectedRightBracket
        );
        assert_eq!(build_str(") (").unwrap_err(), Error::UnexpectedRightBracket);
    }

    #[test]
    fn test_empty_group_parses() {
        let tree = build_str("()").unwrap();
        assert_eq!(tree, Node::Group(vec![Node::Group(Vec::new())]));
    }
}
