//! Error types for grammar matching
//!
//! Two kinds of failure matter to callers: [`Error::BadState`] (the input
//! does not conform to the grammar) and [`Error::BadGrammar`] (the grammar
//! itself is ambiguous for the given input). `BadState` doubles as the
//! internal backtracking signal: composite patterns catch it from their
//! sub-matches and try the next alternative, and it only becomes a surfaced
//! failure when it escapes the outermost `parse` call.
//!
//! The remaining variants are defensive limits and construction-time
//! problems; none of them are ever recovered from.

use crate::tree::Candidate;
use std::fmt;

/// Errors produced during grammar construction and matching
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A pattern failed to match at a position
    ///
    /// Inside the engine this drives backtracking. When it escapes a
    /// top-level parse it carries the rule that was expected, the full
    /// input, and the furthest offset the match reached.
    BadState {
        /// Description of the pattern that was expected
        expected: String,
        /// The input being matched
        input: String,
        /// Byte offset where the match failed
        position: usize,
    },

    /// The grammar is ambiguous for this input
    ///
    /// Raised when a top-level parse yields more than one distinct full
    /// match. This is a grammar-authoring defect and always propagates.
    BadGrammar {
        /// Every distinct full match that was produced
        candidates: Vec<Candidate>,
    },

    /// A rule name was looked up but never registered
    RuleNotFound {
        /// The missing rule name
        name: String,
    },

    /// A terminal's regex pattern failed to compile
    InvalidRegex {
        /// The offending pattern source
        pattern: String,
    },

    /// Recursion depth limit exceeded
    RecursionLimitExceeded {
        /// Current recursion depth
        depth: usize,
        /// Maximum allowed depth
        max_depth: usize,
    },

    /// Candidate set grew past the configured limit
    ///
    /// Guards against ambiguity explosion and non-advancing repetitions
    /// (e.g. `ZeroOrMore` over a zero-width pattern).
    CandidateLimitExceeded {
        /// Number of candidates accumulated
        count: usize,
        /// Maximum allowed candidates
        max_candidates: usize,
    },
}

impl Error {
    /// Create a `BadState` at a position
    #[inline]
    pub fn bad_state(expected: impl Into<String>, input: impl Into<String>, position: usize) -> Self {
        Error::BadState {
            expected: expected.into(),
            input: input.into(),
            position,
        }
    }

    /// Whether composite patterns may recover from this error by trying
    /// another alternative
    ///
    /// True only for [`Error::BadState`]; every other kind is fatal and
    /// propagates out of the engine unchanged.
    #[inline]
    pub fn is_backtrack(&self) -> bool {
        matches!(self, Error::BadState { .. })
    }

    /// The failure offset, if this error carries one
    #[inline]
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::BadState { position, .. } => Some(*position),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BadState {
                expected,
                input,
                position,
            } => {
                let consumed = &input[..(*position).min(input.len())];
                let rest = &input[(*position).min(input.len())..];
                write!(
                    f,
                    "expected {} but got '{}' >>> '{}'",
                    expected,
                    consumed.replace('\'', "\\'"),
                    rest.replace('\'', "\\'")
                )
            }
            Error::BadGrammar { candidates } => {
                write!(
                    f,
                    "ambiguous grammar: {} distinct full matches",
                    candidates.len()
                )
            }
            Error::RuleNotFound { name } => {
                write!(f, "rule not found: '{}'", name)
            }
            Error::InvalidRegex { pattern } => {
                write!(f, "invalid regex pattern: '{}'", pattern)
            }
            Error::RecursionLimitExceeded { depth, max_depth } => {
                write!(
                    f,
                    "recursion limit exceeded: depth {} exceeds limit of {}",
                    depth, max_depth
                )
            }
            Error::CandidateLimitExceeded {
                count,
                max_candidates,
            } => {
                write!(
                    f,
                    "candidate limit exceeded: {} candidates exceeds limit of {}",
                    count, max_candidates
                )
            }
        }
    }
}

impl std::error::Error for Error {}
