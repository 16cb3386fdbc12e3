use serde::{Deserialize, Serialize};
use std::fmt;

/// A node in the expression tree
///
/// Every node exclusively owns its text or its children; the tree is built
/// bottom-up and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A literal: either an operation name or a numeral
    Literal(String),
    /// An ordered group of child nodes, from an explicit parenthesized
    /// form or the implicit top-level grouping
    Group(Vec<Node>),
}

impl Node {
    /// Renders the tree as an indented multi-line outline, one node per
    /// line, for diagnostic display
    ///
    /// `indent` is the starting indentation level; each nesting level adds
    /// two spaces.
    pub fn render(&self, indent: usize) -> String {
        let pad = "  ".repeat(indent);
        match self {
            Node::Literal(text) => format!("{}{}", pad, text),
            Node::Group(children) => {
                let mut out = format!("{}(", pad);
                for child in children {
                    out.push('\n');
                    out.push_str(&child.render(indent + 1));
                }
                out.push('\n');
                out.push_str(&pad);
                out.push(')');
                out
            }
        }
    }
}

impl fmt::Display for Node {
    /// Compact single-line s-expression form
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Literal(text) => write!(f, "{}", text),
            Node::Group(children) => {
                write!(f, "(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}
