//! Grammar construction DSL
//!
//! Free combinator functions plus a [`GrammarBuilder`] for defining
//! grammars fluently in Rust.
//!
//! # Example
//!
//! ```rust
//! use grammatch::dsl::*;
//!
//! let grammar = GrammarBuilder::new()
//!     .rule("constant", re(r"[\d]+\.?[\d]*"))
//!     .rule("variable", re("[A-Za-z]+"))
//!     .rule("operator", padded(r"[\+\-\*\/]"))
//!     .rule("operand", choice([r("constant"), r("variable")]))
//!     .rule("expression", seq([r("operand"), r("operator"), r("operand")]))
//!     .build();
//!
//! assert!(grammar.is_valid("expression", "a + b").unwrap());
//! ```

use crate::grammar::Grammar;
use crate::pattern::{Pattern, RuleRef};

/// Match a regex pattern
#[inline]
pub fn re(pattern: impl Into<String>) -> Pattern {
    Pattern::terminal(pattern)
}

/// Match a regex pattern allowing surrounding whitespace
#[inline]
pub fn padded(pattern: impl AsRef<str>) -> Pattern {
    Pattern::padded(pattern)
}

/// Always match zero-width
#[inline]
pub fn empty() -> Pattern {
    Pattern::empty()
}

/// Match all items in order
#[inline]
pub fn seq(items: impl IntoIterator<Item = RuleRef>) -> Pattern {
    Pattern::sequence(items.into_iter().collect())
}

/// Match any one of the items
#[inline]
pub fn choice(items: impl IntoIterator<Item = RuleRef>) -> Pattern {
    Pattern::alternation(items.into_iter().collect())
}

/// Match the item zero or more times
#[inline]
pub fn star(item: impl Into<RuleRef>) -> Pattern {
    Pattern::zero_or_more(item)
}

/// Match the item one or more times
#[inline]
pub fn plus(item: impl Into<RuleRef>) -> Pattern {
    Pattern::one_or_more(item)
}

/// Reference a rule by name
#[inline]
pub fn r(name: &str) -> RuleRef {
    RuleRef::ByName(name.to_string())
}

/// Builder for constructing grammars
///
/// Thin chainable wrapper over [`Grammar`] registration; rules may
/// forward-reference rules added later, since names resolve at match time.
#[derive(Debug, Default)]
pub struct GrammarBuilder {
    grammar: Grammar,
}

impl GrammarBuilder {
    /// Create a new grammar builder
    pub fn new() -> Self {
        Self {
            grammar: Grammar::new(),
        }
    }

    /// Add a rule to the grammar
    pub fn rule(mut self, name: &str, pattern: Pattern) -> Self {
        self.grammar.add_rule(name, pattern);
        self
    }

    /// Build the final grammar
    pub fn build(self) -> Grammar {
        self.grammar
    }
}
