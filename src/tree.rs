//! Parse tree types
//!
//! A successful match folds into an ordered tree: named rules contribute a
//! [`ParseTree::Node`] tagged with the rule name, terminals contribute a
//! bare [`ParseTree::Leaf`] holding the matched text, and anonymous
//! composites splice their children directly into the parent. `Empty`
//! matches fold away and never appear in the tree.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One node of a parse tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseTree {
    /// Result of a named rule: the rule name and its ordered children
    Node {
        /// The rule name bound at registration time
        name: String,
        /// Sub-matches in input order
        children: Vec<ParseTree>,
    },

    /// Matched terminal text
    Leaf(String),
}

impl ParseTree {
    /// Create a named node
    #[inline]
    pub fn node(name: impl Into<String>, children: Vec<ParseTree>) -> Self {
        ParseTree::Node {
            name: name.into(),
            children,
        }
    }

    /// Create a terminal leaf
    #[inline]
    pub fn leaf(text: impl Into<String>) -> Self {
        ParseTree::Leaf(text.into())
    }

    /// The rule name, if this is a named node
    #[inline]
    pub fn name(&self) -> Option<&str> {
        match self {
            ParseTree::Node { name, .. } => Some(name),
            ParseTree::Leaf(_) => None,
        }
    }

    /// The children of a named node (empty slice for leaves)
    #[inline]
    pub fn children(&self) -> &[ParseTree] {
        match self {
            ParseTree::Node { children, .. } => children,
            ParseTree::Leaf(_) => &[],
        }
    }

    /// The matched text, if this is a leaf
    #[inline]
    pub fn leaf_text(&self) -> Option<&str> {
        match self {
            ParseTree::Leaf(text) => Some(text),
            ParseTree::Node { .. } => None,
        }
    }

    /// Concatenate all leaf text in tree order
    ///
    /// For a successful parse this reproduces the consumed input prefix
    /// exactly, including any padding captured by padded terminals.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            ParseTree::Leaf(text) => out.push_str(text),
            ParseTree::Node { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Find the first descendant node (depth-first, self included) with
    /// the given rule name
    pub fn find(&self, rule: &str) -> Option<&ParseTree> {
        if self.name() == Some(rule) {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find(rule))
    }
}

impl fmt::Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseTree::Leaf(text) => write!(f, "'{}'", text),
            ParseTree::Node { name, children } => {
                write!(f, "({}", name)?;
                for child in children {
                    write!(f, ", {}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// One full top-level match: a parse tree and the input offset it reached
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The parse tree for this match
    pub tree: ParseTree,
    /// Byte offset just past the consumed prefix
    pub end: usize,
}

impl Candidate {
    /// Create a new candidate
    #[inline]
    pub fn new(tree: ParseTree, end: usize) -> Self {
        Self { tree, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParseTree {
        ParseTree::node(
            "expression",
            vec![
                ParseTree::node(
                    "operand",
                    vec![ParseTree::node("variable", vec![ParseTree::leaf("a")])],
                ),
                ParseTree::node("operator", vec![ParseTree::leaf(" + ")]),
                ParseTree::node(
                    "operand",
                    vec![ParseTree::node("variable", vec![ParseTree::leaf("b")])],
                ),
            ],
        )
    }

    #[test]
    fn test_text_round_trip() {
        assert_eq!(sample().text(), "a + b");
    }

    #[test]
    fn test_display_tuple_form() {
        assert_eq!(
            sample().to_string(),
            "(expression, (operand, (variable, 'a')), (operator, ' + '), (operand, (variable, 'b')))"
        );
    }

    #[test]
    fn test_find() {
        let tree = sample();
        let op = tree.find("operator").unwrap();
        assert_eq!(op.text(), " + ");
        assert!(tree.find("missing").is_none());
    }

    #[test]
    fn test_accessors() {
        let tree = sample();
        assert_eq!(tree.name(), Some("expression"));
        assert_eq!(tree.children().len(), 3);
        assert_eq!(tree.leaf_text(), None);
        assert_eq!(ParseTree::leaf("x").leaf_text(), Some("x"));
    }

    #[test]
    fn test_json_round_trip() {
        let tree = sample();
        let json = serde_json::to_string(&tree).unwrap();
        let back: ParseTree = serde_json::from_str(&json).unwrap();
        assert_eq!(tree, back);
    }
}
