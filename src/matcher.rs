//! The backtracking match engine
//!
//! One recursive algorithm serves every pattern variant. A match attempt
//! returns the full set of [`Fragment`]s a pattern can produce at a
//! position: the eager materialization of the lazy candidate stream,
//! finite per call because repetition enumeration terminates.
//!
//! Sequences compute the cross-product of continuations over their items'
//! fragments. Alternations pull candidate sub-patterns from an
//! [`AlternativeSource`] and feed back whether each one matched; a fixed
//! alternation ignores the feedback and enumerates its list, while
//! `ZeroOrMore`/`OneOrMore` use it to stop growing their repetition chain
//! on the first failure. `BadState` is the only recoverable error and only
//! within this module; everything else aborts the match.

use crate::error::Error;
use crate::grammar::Grammar;
use crate::pattern::{Pattern, PatternKind, RuleRef};
use crate::regex_cache;
use crate::tree::ParseTree;

/// Logging macro - no-op when the logging feature is disabled
#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Logging macro - uses the log crate when the logging feature is enabled
#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

/// Default maximum recursion depth
pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 1000;

/// Default maximum candidate-set size
pub const DEFAULT_MAX_CANDIDATES: usize = 10_000;

/// Configuration options for the match engine
///
/// A pathological grammar (a rule referencing itself without consuming
/// input, or a repetition over a zero-width pattern) can otherwise recurse
/// or enumerate without termination; these limits turn that into an error
/// instead of a hang. Zero disables a limit.
///
/// # Example
///
/// ```rust
/// use grammatch::matcher::MatchConfig;
///
/// let config = MatchConfig::new()
///     .with_max_recursion_depth(200)
///     .with_max_candidates(500);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MatchConfig {
    /// Maximum allowed pattern-nesting depth (0 = unlimited)
    pub max_recursion_depth: usize,

    /// Maximum candidates a single pattern may accumulate (0 = unlimited)
    pub max_candidates: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

impl MatchConfig {
    /// Create a config with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum recursion depth
    pub fn with_max_recursion_depth(mut self, depth: usize) -> Self {
        self.max_recursion_depth = depth;
        self
    }

    /// Set the maximum candidate-set size
    pub fn with_max_candidates(mut self, candidates: usize) -> Self {
        self.max_candidates = candidates;
        self
    }
}

/// One partial match: accumulated tree fragments and the position reached
///
/// Named patterns fold the forest into a single tagged node; anonymous
/// patterns pass it through, so their children splice into the parent.
/// `Empty` produces an empty forest and thus no node at all.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Fragment {
    /// Tree nodes produced so far, in input order
    pub forest: Vec<ParseTree>,
    /// Byte offset just past the matched text
    pub end: usize,
}

impl Fragment {
    /// A zero-width fragment at a position
    #[inline]
    fn empty_at(end: usize) -> Self {
        Self {
            forest: Vec::new(),
            end,
        }
    }
}

/// Producer of alternative sub-patterns for an alternation
///
/// The producer, not the matching loop, decides when to stop offering
/// alternatives. After each attempt it is told whether the previous
/// alternative produced at least one match; the first call receives
/// `true`. Fixed alternations ignore the feedback; repetition chains stop
/// on the first `false`.
pub(crate) trait AlternativeSource {
    /// Offer the next alternative, or `None` when exhausted
    fn next(&mut self, previous_matched: bool) -> Option<RuleRef>;
}

/// Enumerates a fixed list of alternatives, ignoring feedback
struct FixedAlternatives<'a> {
    items: std::slice::Iter<'a, RuleRef>,
}

impl<'a> FixedAlternatives<'a> {
    fn new(items: &'a [RuleRef]) -> Self {
        Self {
            items: items.iter(),
        }
    }
}

impl AlternativeSource for FixedAlternatives<'_> {
    fn next(&mut self, _previous_matched: bool) -> Option<RuleRef> {
        self.items.next().cloned()
    }
}

/// Grows a repetition one copy at a time: `Empty`, `p`, `p p`, `p p p`, …
///
/// Offers each chain as an anonymous sequence and stops as soon as the
/// feedback signal reports a failure, which bounds the enumeration to at
/// most k+1 attempts for k consecutive matches of the repeated item.
struct RepetitionChain {
    item: RuleRef,
    chain: Vec<RuleRef>,
    started: bool,
}

impl RepetitionChain {
    /// Chain starting from zero copies (an empty sequence matches zero-width)
    fn zero_or_more(item: RuleRef) -> Self {
        Self {
            item,
            chain: Vec::new(),
            started: false,
        }
    }

    /// Chain starting from one copy
    fn one_or_more(item: RuleRef) -> Self {
        let chain = vec![item.clone()];
        Self {
            item,
            chain,
            started: false,
        }
    }
}

impl AlternativeSource for RepetitionChain {
    fn next(&mut self, previous_matched: bool) -> Option<RuleRef> {
        if !self.started {
            self.started = true;
        } else if previous_matched {
            self.chain.push(self.item.clone());
        } else {
            return None;
        }
        Some(RuleRef::Direct(Box::new(Pattern::sequence(
            self.chain.clone(),
        ))))
    }
}

/// The match engine: borrows a grammar and an input, tracks nesting depth
pub(crate) struct Matcher<'g, 'i> {
    grammar: &'g Grammar,
    input: &'i str,
    config: MatchConfig,
    depth: usize,
}

impl<'g, 'i> Matcher<'g, 'i> {
    /// Create a matcher for one match invocation
    pub fn new(grammar: &'g Grammar, input: &'i str, config: MatchConfig) -> Self {
        Self {
            grammar,
            input,
            config,
            depth: 0,
        }
    }

    /// Match a rule reference at a position, yielding every fragment it
    /// can produce
    ///
    /// `Err(BadState)` means this branch does not match; composite callers
    /// recover from it. Any other error is fatal.
    pub fn match_ref(&mut self, rref: &RuleRef, start: usize) -> Result<Vec<Fragment>, Error> {
        let pattern = self.grammar.resolve(rref)?;
        self.match_pattern(pattern, start)
    }

    fn match_pattern(&mut self, pattern: &Pattern, start: usize) -> Result<Vec<Fragment>, Error> {
        self.enter()?;
        let result = self.match_kind(pattern, start);
        self.exit();
        let fragments = result?;
        Ok(fold_name(pattern, fragments))
    }

    fn match_kind(&mut self, pattern: &Pattern, start: usize) -> Result<Vec<Fragment>, Error> {
        log_debug!("match {} at {}", pattern, start);
        match pattern.kind() {
            PatternKind::Terminal { pattern: source } => {
                self.match_terminal(pattern, source, start)
            }
            PatternKind::Empty => Ok(vec![Fragment::empty_at(start)]),
            PatternKind::Sequence { items } => self.match_sequence(pattern, items, start),
            PatternKind::Alternation { items } => {
                let mut source = FixedAlternatives::new(items);
                self.match_alternatives(pattern, &mut source, start)
            }
            PatternKind::ZeroOrMore { item } => {
                let mut source = RepetitionChain::zero_or_more((**item).clone());
                self.match_alternatives(pattern, &mut source, start)
            }
            PatternKind::OneOrMore { item } => {
                let mut source = RepetitionChain::one_or_more((**item).clone());
                self.match_alternatives(pattern, &mut source, start)
            }
        }
    }

    /// Anchored regex attempt at `start`; at most one fragment
    fn match_terminal(
        &self,
        pattern: &Pattern,
        source: &str,
        start: usize,
    ) -> Result<Vec<Fragment>, Error> {
        let regex = regex_cache::get_or_compile(source).ok_or_else(|| Error::InvalidRegex {
            pattern: source.to_string(),
        })?;

        match regex.find(&self.input[start..]) {
            Some(m) => Ok(vec![Fragment {
                forest: vec![ParseTree::leaf(m.as_str())],
                end: start + m.end(),
            }]),
            None => Err(Error::bad_state(pattern.to_string(), self.input, start)),
        }
    }

    /// Cross-product continuation over the items of a sequence
    ///
    /// The working list starts with one empty fragment at `start`; each
    /// item replaces it with every continuation of every surviving
    /// fragment. An empty working list fails with the last failure
    /// recorded at that step, which reflects the furthest progress into
    /// the input.
    fn match_sequence(
        &mut self,
        pattern: &Pattern,
        items: &[RuleRef],
        start: usize,
    ) -> Result<Vec<Fragment>, Error> {
        let mut work = vec![Fragment::empty_at(start)];

        for item in items {
            let mut next = Vec::new();
            let mut last_failure: Option<Error> = None;

            for fragment in &work {
                match self.match_ref(item, fragment.end) {
                    Ok(continuations) => {
                        for continuation in continuations {
                            let mut forest = fragment.forest.clone();
                            forest.extend(continuation.forest);
                            next.push(Fragment {
                                forest,
                                end: continuation.end,
                            });
                        }
                    }
                    Err(e) if e.is_backtrack() => last_failure = Some(e),
                    Err(e) => return Err(e),
                }
            }

            if next.is_empty() {
                return Err(last_failure
                    .unwrap_or_else(|| Error::bad_state(pattern.to_string(), self.input, start)));
            }
            self.check_candidates(next.len())?;
            work = next;
        }

        Ok(work)
    }

    /// Union of candidates over produced alternatives
    ///
    /// Fails only if no offered alternative ever matched.
    fn match_alternatives<S: AlternativeSource>(
        &mut self,
        pattern: &Pattern,
        source: &mut S,
        start: usize,
    ) -> Result<Vec<Fragment>, Error> {
        let mut out = Vec::new();
        let mut matched_any = false;
        let mut last_failure: Option<Error> = None;
        let mut previous_matched = true;

        while let Some(alternative) = source.next(previous_matched) {
            match self.match_ref(&alternative, start) {
                Ok(fragments) => {
                    matched_any = true;
                    previous_matched = true;
                    out.extend(fragments);
                    self.check_candidates(out.len())?;
                }
                Err(e) if e.is_backtrack() => {
                    previous_matched = false;
                    last_failure = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        if matched_any {
            Ok(out)
        } else {
            Err(last_failure
                .unwrap_or_else(|| Error::bad_state(pattern.to_string(), self.input, start)))
        }
    }

    #[inline]
    fn enter(&mut self) -> Result<(), Error> {
        self.depth += 1;
        if self.config.max_recursion_depth > 0 && self.depth > self.config.max_recursion_depth {
            return Err(Error::RecursionLimitExceeded {
                depth: self.depth,
                max_depth: self.config.max_recursion_depth,
            });
        }
        Ok(())
    }

    #[inline]
    fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    #[inline]
    fn check_candidates(&self, count: usize) -> Result<(), Error> {
        if self.config.max_candidates > 0 && count > self.config.max_candidates {
            return Err(Error::CandidateLimitExceeded {
                count,
                max_candidates: self.config.max_candidates,
            });
        }
        Ok(())
    }
}

/// Wrap each fragment's forest in a tagged node if the pattern is named
fn fold_name(pattern: &Pattern, fragments: Vec<Fragment>) -> Vec<Fragment> {
    let Some(name) = pattern.name() else {
        return fragments;
    };
    fragments
        .into_iter()
        .map(|fragment| Fragment {
            forest: vec![ParseTree::node(name, fragment.forest)],
            end: fragment.end,
        })
        .collect()
}
