//! Pattern types for grammar rules
//!
//! A [`Pattern`] is a matching unit: a variant tag ([`PatternKind`]) plus an
//! optional name. Names are bound by [`Grammar`](crate::grammar::Grammar) at
//! registration time; a named pattern folds its match result into a tagged
//! tree node, an anonymous pattern's result is spliced transparently into
//! its parent.
//!
//! Composites reference their children through [`RuleRef`], which is either
//! a registered rule name resolved at match time (forward references and
//! recursion work) or a direct anonymous sub-pattern.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to a sub-pattern: by registered name, or directly by value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleRef {
    /// A registered rule name, resolved against the grammar at match time
    ByName(String),
    /// An anonymous sub-pattern held directly
    Direct(Box<Pattern>),
}

impl From<&str> for RuleRef {
    #[inline]
    fn from(name: &str) -> Self {
        RuleRef::ByName(name.to_string())
    }
}

impl From<String> for RuleRef {
    #[inline]
    fn from(name: String) -> Self {
        RuleRef::ByName(name)
    }
}

impl From<Pattern> for RuleRef {
    #[inline]
    fn from(pattern: Pattern) -> Self {
        RuleRef::Direct(Box::new(pattern))
    }
}

impl fmt::Display for RuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleRef::ByName(name) => write!(f, "{}", name),
            RuleRef::Direct(pattern) => write!(f, "{}", pattern),
        }
    }
}

/// The variant tag of a pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatternKind {
    /// Match a regex pattern anchored at the current position
    ///
    /// Holds the regex source; compilation goes through the thread-local
    /// [`regex_cache`](crate::regex_cache). Yields at most one match.
    Terminal {
        /// The regex pattern source
        pattern: String,
    },

    /// Always match zero-width at the current position
    Empty,

    /// Match every item consecutively; ambiguity multiplies
    Sequence {
        /// Items in match order
        items: Vec<RuleRef>,
    },

    /// Match any one item; ambiguity unions
    Alternation {
        /// The alternatives, tried in order
        items: Vec<RuleRef>,
    },

    /// Match the item zero or more times (greedy enumeration of all counts)
    ZeroOrMore {
        /// The repeated item
        item: Box<RuleRef>,
    },

    /// Match the item one or more times
    OneOrMore {
        /// The repeated item
        item: Box<RuleRef>,
    },
}

/// A named or anonymous matching unit in a grammar
///
/// Immutable once constructed, except that registration in a `Grammar`
/// binds the rule name onto the pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    /// Name bound at registration time, if any
    name: Option<String>,
    /// The variant tag
    kind: PatternKind,
}

impl Pattern {
    /// Create an anonymous pattern from a kind
    #[inline]
    pub fn new(kind: PatternKind) -> Self {
        Self { name: None, kind }
    }

    /// Match a regex pattern at the current position
    #[inline]
    pub fn terminal(pattern: impl Into<String>) -> Self {
        Self::new(PatternKind::Terminal {
            pattern: pattern.into(),
        })
    }

    /// Match a regex pattern allowing surrounding whitespace
    ///
    /// Wraps the pattern in `\s*…\s*`; the padding is captured as part of
    /// the matched text.
    #[inline]
    pub fn padded(pattern: impl AsRef<str>) -> Self {
        Self::terminal(format!(r"\s*{}\s*", pattern.as_ref()))
    }

    /// Always match zero-width
    #[inline]
    pub fn empty() -> Self {
        Self::new(PatternKind::Empty)
    }

    /// Match all items in order
    ///
    /// An empty item list matches zero-width, like [`Pattern::empty`].
    #[inline]
    pub fn sequence(items: Vec<RuleRef>) -> Self {
        Self::new(PatternKind::Sequence { items })
    }

    /// Match any one of the items
    #[inline]
    pub fn alternation(items: Vec<RuleRef>) -> Self {
        Self::new(PatternKind::Alternation { items })
    }

    /// Match the item zero or more times
    #[inline]
    pub fn zero_or_more(item: impl Into<RuleRef>) -> Self {
        Self::new(PatternKind::ZeroOrMore {
            item: Box::new(item.into()),
        })
    }

    /// Match the item one or more times
    #[inline]
    pub fn one_or_more(item: impl Into<RuleRef>) -> Self {
        Self::new(PatternKind::OneOrMore {
            item: Box::new(item.into()),
        })
    }

    /// The bound rule name, if registered
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The variant tag
    #[inline]
    pub fn kind(&self) -> &PatternKind {
        &self.kind
    }

    /// Bind a name, builder style
    #[inline]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Bind a name in place (used by `Grammar` at registration)
    #[inline]
    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            return write!(f, "{}", name);
        }
        match &self.kind {
            PatternKind::Terminal { pattern } => write!(f, "Terminal('{}')", pattern),
            PatternKind::Empty => write!(f, "Empty"),
            PatternKind::Sequence { items } => write_items(f, "Sequence", items),
            PatternKind::Alternation { items } => write_items(f, "Alternation", items),
            PatternKind::ZeroOrMore { item } => write!(f, "ZeroOrMore({})", item),
            PatternKind::OneOrMore { item } => write!(f, "OneOrMore({})", item),
        }
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, label: &str, items: &[RuleRef]) -> fmt::Result {
    write!(f, "{}(", label)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, ")")
}
