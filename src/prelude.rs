//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from
//! grammatch. Importing it with a wildcard brings the core API into scope:
//!
//! ```
//! use grammatch::prelude::*;
//!
//! let grammar = Grammar::new().rule("word", re("[a-z]+"));
//! assert!(grammar.is_valid("word", "hello").unwrap());
//! ```
//!
//! # Re-exported Items
//!
//! ## Core Types
//! - [`Grammar`] - Rule registry and parse driver
//! - [`Pattern`] / [`PatternKind`] - Pattern variants
//! - [`RuleRef`] - Name-or-direct rule reference
//! - [`ParseTree`] / [`Candidate`] - Match results
//! - [`Error`] - All failure kinds
//! - [`MatchConfig`] - Engine limits
//!
//! ## Construction DSL
//! - [`re()`](re) - Match a regex pattern
//! - [`padded()`](padded) - Regex with surrounding whitespace
//! - [`empty()`](empty) - Zero-width match
//! - [`seq()`](seq) - Sequence of items
//! - [`choice()`](choice) - One of several items
//! - [`star()`](star) / [`plus()`](plus) - Repetition
//! - [`r()`](r) - Rule reference by name
//! - [`GrammarBuilder`] - Chainable grammar construction

// ============================================================================
// Core Types
// ============================================================================

pub use crate::error::Error;
pub use crate::grammar::Grammar;
pub use crate::matcher::MatchConfig;
pub use crate::pattern::{Pattern, PatternKind, RuleRef};
pub use crate::tree::{Candidate, ParseTree};

// ============================================================================
// Construction DSL
// ============================================================================

pub use crate::dsl::{choice, empty, padded, plus, r, re, seq, star, GrammarBuilder};
