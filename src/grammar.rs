//! Grammar registry and parse driver
//!
//! A [`Grammar`] maps rule names to patterns. Registration binds the name
//! onto the pattern, so its matches fold into a tagged tree node; rules may
//! reference each other by name, including forward references and
//! (non-immediately-recursive) self-reference.
//!
//! The driver methods fully drain the engine's match enumeration and apply
//! the ambiguity policy: exactly one distinct full match is returned as a
//! tree, zero fails with [`Error::BadState`], more than one fails with
//! [`Error::BadGrammar`].
//!
//! `parse` does not anchor to end-of-input. A grammar that must consume the
//! whole input includes an explicit end-of-input terminal (regex `$`), the
//! same way a ported grammar would.

use crate::error::Error;
use crate::matcher::{MatchConfig, Matcher};
use crate::pattern::{Pattern, RuleRef};
use crate::tree::{Candidate, ParseTree};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A registry of named pattern rules
///
/// # Example
///
/// ```rust
/// use grammatch::{Grammar, Pattern};
///
/// let grammar = Grammar::new()
///     .rule("constant", Pattern::terminal(r"[\d]+\.?[\d]*"))
///     .rule("variable", Pattern::terminal("[A-Za-z]+"))
///     .rule("operator", Pattern::padded(r"[\+\-\*\/]"))
///     .rule("operand", Pattern::alternation(vec!["constant".into(), "variable".into()]))
///     .rule(
///         "expression",
///         Pattern::sequence(vec!["operand".into(), "operator".into(), "operand".into()]),
///     );
///
/// let tree = grammar.parse("expression", "a + b").unwrap();
/// assert_eq!(tree.text(), "a + b");
/// assert!(!grammar.is_valid("expression", "$any").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Grammar {
    /// Registered rules by name
    rules: HashMap<String, Pattern>,
}

impl Grammar {
    /// Create an empty grammar
    #[inline]
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Register a rule, builder style
    ///
    /// Binds `name` onto the pattern. Registering the same name again
    /// replaces the previous rule.
    pub fn rule(mut self, name: &str, pattern: Pattern) -> Self {
        self.add_rule(name, pattern);
        self
    }

    /// Register a rule in place
    pub fn add_rule(&mut self, name: &str, mut pattern: Pattern) {
        pattern.set_name(name);
        self.rules.insert(name.to_string(), pattern);
    }

    /// Look up a registered rule by name
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.rules.get(name)
    }

    /// Whether a rule name is registered
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Number of registered rules
    #[inline]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Resolve a rule reference to a pattern
    ///
    /// Direct references pass through unchanged (anonymous sub-patterns
    /// are held by value); named references are looked up or fail with
    /// [`Error::RuleNotFound`].
    pub fn resolve<'a>(&'a self, rref: &'a RuleRef) -> Result<&'a Pattern, Error> {
        match rref {
            RuleRef::Direct(pattern) => Ok(pattern),
            RuleRef::ByName(name) => self.rules.get(name).ok_or_else(|| Error::RuleNotFound {
                name: name.clone(),
            }),
        }
    }

    /// Every distinct full match of a named rule against the input
    ///
    /// Fully drains the engine's lazy enumeration. The candidate end
    /// positions are wherever each match stopped consuming; there is no
    /// implicit end-of-input anchoring.
    pub fn candidates(&self, name: &str, input: &str) -> Result<Vec<Candidate>, Error> {
        self.candidates_with_config(name, input, MatchConfig::default())
    }

    /// [`Grammar::candidates`] with explicit engine limits
    pub fn candidates_with_config(
        &self,
        name: &str,
        input: &str,
        config: MatchConfig,
    ) -> Result<Vec<Candidate>, Error> {
        if !self.rules.contains_key(name) {
            return Err(Error::RuleNotFound {
                name: name.to_string(),
            });
        }

        let root = RuleRef::ByName(name.to_string());
        let mut matcher = Matcher::new(self, input, config);
        let fragments = matcher.match_ref(&root, 0)?;

        let mut distinct: Vec<Candidate> = Vec::new();
        for fragment in fragments {
            let mut forest = fragment.forest;
            // A registered root is named, so the forest holds one node
            let tree = if forest.len() == 1 {
                forest.remove(0)
            } else {
                ParseTree::node(name, forest)
            };
            let candidate = Candidate::new(tree, fragment.end);
            if !distinct.contains(&candidate) {
                distinct.push(candidate);
            }
        }
        Ok(distinct)
    }

    /// Parse the input against a named rule, returning its parse tree
    ///
    /// # Errors
    /// - [`Error::BadState`] if the input does not conform to the rule,
    ///   carrying the furthest failure offset reached
    /// - [`Error::BadGrammar`] if the grammar is ambiguous for this input
    ///   (more than one distinct full match)
    /// - [`Error::RuleNotFound`] if `name` is not registered
    pub fn parse(&self, name: &str, input: &str) -> Result<ParseTree, Error> {
        self.parse_with_config(name, input, MatchConfig::default())
    }

    /// [`Grammar::parse`] with explicit engine limits
    pub fn parse_with_config(
        &self,
        name: &str,
        input: &str,
        config: MatchConfig,
    ) -> Result<ParseTree, Error> {
        let mut candidates = self.candidates_with_config(name, input, config)?;
        match candidates.len() {
            0 => Err(Error::bad_state(name, input, 0)),
            1 => Ok(candidates.remove(0).tree),
            _ => Err(Error::BadGrammar { candidates }),
        }
    }

    /// Whether the input conforms to a named rule
    ///
    /// `Ok(false)` only for a match failure (`BadState`). Ambiguity is a
    /// grammar-authoring defect, not an ordinary rejection, so
    /// [`Error::BadGrammar`] propagates as `Err`, as do rule-lookup and
    /// limit errors.
    pub fn is_valid(&self, name: &str, input: &str) -> Result<bool, Error> {
        self.is_valid_with_config(name, input, MatchConfig::default())
    }

    /// [`Grammar::is_valid`] with explicit engine limits
    pub fn is_valid_with_config(
        &self,
        name: &str,
        input: &str,
        config: MatchConfig,
    ) -> Result<bool, Error> {
        match self.parse_with_config(name, input, config) {
            Ok(_) => Ok(true),
            Err(Error::BadState { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Serialize to JSON
    #[inline]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON
    #[inline]
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::PatternKind;

    #[test]
    fn test_registration_binds_name() {
        let grammar = Grammar::new().rule("digits", Pattern::terminal("[0-9]+"));
        assert_eq!(grammar.get("digits").unwrap().name(), Some("digits"));
        assert_eq!(grammar.rule_count(), 1);
        assert!(grammar.contains("digits"));
        assert!(!grammar.contains("letters"));
    }

    #[test]
    fn test_resolve_by_name() {
        let grammar = Grammar::new().rule("digits", Pattern::terminal("[0-9]+"));
        let rref = RuleRef::from("digits");
        let pattern = grammar.resolve(&rref).unwrap();
        assert_eq!(pattern.name(), Some("digits"));
    }

    #[test]
    fn test_resolve_direct_is_identity() {
        let grammar = Grammar::new();
        let rref = RuleRef::from(Pattern::empty());
        let pattern = grammar.resolve(&rref).unwrap();
        assert_eq!(*pattern.kind(), PatternKind::Empty);
    }

    #[test]
    fn test_resolve_missing_rule() {
        let grammar = Grammar::new();
        let rref = RuleRef::from("missing");
        match grammar.resolve(&rref) {
            Err(Error::RuleNotFound { name }) => assert_eq!(name, "missing"),
            other => panic!("expected RuleNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_unknown_rule() {
        let grammar = Grammar::new();
        assert!(matches!(
            grammar.parse("missing", "abc"),
            Err(Error::RuleNotFound { .. })
        ));
        // RuleNotFound is not swallowed by is_valid
        assert!(grammar.is_valid("missing", "abc").is_err());
    }

    #[test]
    fn test_json_round_trip_preserves_names() {
        let grammar = Grammar::new()
            .rule("word", Pattern::terminal("[a-z]+"))
            .rule("words", Pattern::one_or_more("word"));

        let json = grammar.to_json().unwrap();
        let back = Grammar::from_json(&json).unwrap();

        assert_eq!(grammar, back);
        assert_eq!(back.get("words").unwrap().name(), Some("words"));
        assert_eq!(back.parse("word", "hello").unwrap().text(), "hello");
    }

    #[test]
    fn test_reregistration_replaces_rule() {
        let mut grammar = Grammar::new();
        grammar.add_rule("x", Pattern::terminal("a"));
        grammar.add_rule("x", Pattern::terminal("b"));

        assert_eq!(grammar.rule_count(), 1);
        assert!(grammar.parse("x", "b").is_ok());
        assert!(grammar.parse("x", "a").is_err());
    }
}
