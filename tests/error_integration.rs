//! Integration tests for error reporting
//!
//! These tests cover the two-kind failure model (backtrackable match
//! failure vs fatal errors), diagnostic formatting, and how construction
//! problems surface through the driver.

use grammatch::{Error, Grammar, MatchConfig, Pattern};

// =============================================================================
// BadState diagnostics
// =============================================================================

#[test]
fn test_bad_state_carries_input_and_position() {
    let grammar = Grammar::new()
        .rule("digits", Pattern::terminal("[0-9]+"))
        .rule("word", Pattern::terminal("[a-z]+"))
        .rule(
            "pair",
            Pattern::sequence(vec!["word".into(), "digits".into()]),
        );

    match grammar.parse("pair", "abc???") {
        Err(Error::BadState {
            expected,
            input,
            position,
        }) => {
            assert_eq!(expected, "digits");
            assert_eq!(input, "abc???");
            assert_eq!(position, 3);
        }
        other => panic!("expected BadState, got {:?}", other),
    }
}

#[test]
fn test_bad_state_display_splits_input_at_position() {
    let grammar = Grammar::new()
        .rule("digits", Pattern::terminal("[0-9]+"))
        .rule("word", Pattern::terminal("[a-z]+"))
        .rule(
            "pair",
            Pattern::sequence(vec!["word".into(), "digits".into()]),
        );

    let err = grammar.parse("pair", "abc???").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("expected digits"));
    assert!(msg.contains("'abc'"));
    assert!(msg.contains(">>> '???'"));
}

#[test]
fn test_expected_describes_anonymous_patterns_structurally() {
    let grammar = Grammar::new().rule(
        "pair",
        Pattern::sequence(vec![
            Pattern::terminal("a").into(),
            Pattern::terminal("b").into(),
        ]),
    );

    match grammar.parse("pair", "ax") {
        Err(Error::BadState { expected, .. }) => {
            assert_eq!(expected, "Terminal('b')");
        }
        other => panic!("expected BadState, got {:?}", other),
    }
}

// =============================================================================
// Fatal errors are never swallowed
// =============================================================================

#[test]
fn test_invalid_regex_aborts_instead_of_backtracking() {
    // The broken terminal comes first; a backtracking engine would skip to
    // the good alternative, but compilation failure is fatal
    let grammar = Grammar::new()
        .rule("bad", Pattern::terminal("[unclosed"))
        .rule("good", Pattern::terminal("[a-z]+"))
        .rule(
            "either",
            Pattern::alternation(vec!["bad".into(), "good".into()]),
        );

    match grammar.parse("either", "hello") {
        Err(Error::InvalidRegex { pattern }) => assert_eq!(pattern, "[unclosed"),
        other => panic!("expected InvalidRegex, got {:?}", other),
    }
    assert!(grammar.is_valid("either", "hello").is_err());
}

#[test]
fn test_rule_not_found_inside_composite() {
    let grammar = Grammar::new().rule("top", Pattern::sequence(vec!["ghost".into()]));

    match grammar.parse("top", "anything") {
        Err(Error::RuleNotFound { name }) => assert_eq!(name, "ghost"),
        other => panic!("expected RuleNotFound, got {:?}", other),
    }
    assert!(grammar.is_valid("top", "anything").is_err());
}

#[test]
fn test_rule_not_found_at_top_level() {
    let grammar = Grammar::new();
    assert!(matches!(
        grammar.parse("missing", ""),
        Err(Error::RuleNotFound { .. })
    ));
}

#[test]
fn test_limit_errors_carry_their_bounds() {
    let grammar = Grammar::new().rule("forever", Pattern::sequence(vec!["forever".into()]));
    let config = MatchConfig::new().with_max_recursion_depth(10);

    match grammar.parse_with_config("forever", "x", config) {
        Err(Error::RecursionLimitExceeded { depth, max_depth }) => {
            assert_eq!(max_depth, 10);
            assert!(depth > max_depth);
        }
        other => panic!("expected RecursionLimitExceeded, got {:?}", other),
    }
}

// =============================================================================
// The BadState / everything-else partition
// =============================================================================

#[test]
fn test_is_valid_swallows_only_bad_state() {
    let ambiguous = Grammar::new()
        .rule("a", Pattern::terminal("x"))
        .rule("b", Pattern::terminal("x"))
        .rule(
            "either",
            Pattern::alternation(vec!["a".into(), "b".into()]),
        );

    // Ordinary rejection folds to false
    assert!(!ambiguous.is_valid("a", "zzz").unwrap());
    // Ambiguity propagates
    assert!(matches!(
        ambiguous.is_valid("either", "x"),
        Err(Error::BadGrammar { .. })
    ));
}

#[test]
fn test_bad_grammar_candidates_are_full_matches() {
    let grammar = Grammar::new()
        .rule("a", Pattern::terminal("xy"))
        .rule("b", Pattern::terminal("xy"))
        .rule(
            "either",
            Pattern::alternation(vec!["a".into(), "b".into()]),
        );

    match grammar.parse("either", "xyz") {
        Err(Error::BadGrammar { candidates }) => {
            assert_eq!(candidates.len(), 2);
            for candidate in &candidates {
                assert_eq!(candidate.end, 2);
                assert_eq!(candidate.tree.text(), "xy");
            }
        }
        other => panic!("expected BadGrammar, got {:?}", other),
    }
}
