//! Grammatch - Backtracking Grammar-Matching Engine
//!
//! A small library for deciding whether an input string conforms to a named
//! grammar rule, producing a parse tree that records which sub-rules matched
//! which substrings. It provides:
//! - A closed pattern hierarchy: terminal, empty, sequence, alternation,
//!   zero-or-more, one-or-more
//! - One shared backtracking match algorithm with full cross-product
//!   enumeration of ambiguous sub-matches
//! - Feedback-driven lazy alternative generation for repetition, so the
//!   unbounded enumeration terminates after the first failing chain length
//! - A name→pattern registry supporting forward references and recursion
//! - A two-kind error model: match failure (`BadState`) with
//!   deepest-failure diagnostics, and grammar ambiguity (`BadGrammar`)
//! - JSON-serializable grammars and a Rust construction DSL
//!
//! ## Quick Start
//!
//! ```rust
//! use grammatch::{Grammar, Pattern};
//!
//! let grammar = Grammar::new()
//!     .rule("constant", Pattern::terminal(r"[\d]+\.?[\d]*"))
//!     .rule("variable", Pattern::terminal("[A-Za-z]+"))
//!     .rule("operator", Pattern::padded(r"[\+\-\*\/]"))
//!     .rule("operand", Pattern::alternation(vec!["constant".into(), "variable".into()]))
//!     .rule(
//!         "expression",
//!         Pattern::sequence(vec!["operand".into(), "operator".into(), "operand".into()]),
//!     );
//!
//! let tree = grammar.parse("expression", "5 * 4").unwrap();
//! assert_eq!(
//!     tree.to_string(),
//!     "(expression, (operand, (constant, '5')), (operator, ' * '), (operand, (constant, '4')))"
//! );
//! ```
//!
//! ## Using the DSL
//!
//! ```rust
//! use grammatch::dsl::*;
//!
//! let grammar = GrammarBuilder::new()
//!     .rule("greeting", seq([re("hello").into(), padded(",").into(), re("world").into()]))
//!     .build();
//!
//! assert!(grammar.is_valid("greeting", "hello, world").unwrap());
//! ```
//!
//! ## End-of-input anchoring
//!
//! `parse` does not implicitly anchor to the end of the input: a match may
//! stop early, and repetitions enumerate every chain length they can match.
//! Grammars that must consume the whole input include an explicit
//! end-of-input terminal (regex `$`). This keeps accepted-language
//! semantics identical for ported grammars.
//!
//! ## Feature Flags
//!
//! - `logging` - Enable debug logging using the `log` crate

// Lint configuration for production quality
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

// Prelude module for convenient imports
pub mod prelude;

pub mod dsl;
pub mod error;
pub mod grammar;
pub mod matcher;
pub mod pattern;
pub mod regex_cache;
pub mod tree;

/// Re-export commonly used types for convenience
pub use error::Error;
pub use grammar::Grammar;
pub use matcher::MatchConfig;
pub use pattern::{Pattern, PatternKind, RuleRef};
pub use tree::{Candidate, ParseTree};
