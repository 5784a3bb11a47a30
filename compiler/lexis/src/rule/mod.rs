//! Matching primitives.
//!
//! Every primitive is a pure function from the remaining input to a match
//! length counted in characters. `None` means no match. Primitives hold no
//! mutable state, so one [`Lexicon`](crate::Lexicon) can serve any number
//! of concurrent scans.

use std::fmt;

use lexis_core::char_class::{has_ident_prefix, has_operator_prefix};
use regex::Regex;

/// User-supplied matcher: remaining input to match length in characters.
pub type CustomMatch = Box<dyn Fn(&str) -> Option<usize> + Send + Sync>;

/// How a rule recognizes input.
pub enum Matcher {
    /// Exact text.
    Literal(String),
    /// Exact text not followed by an identifier-continuation character.
    ///
    /// A keyword rule for `if` does not match the start of `ifx`.
    Keyword(String),
    /// Regex anchored at the start of the remaining input.
    ///
    /// The regex is stored already wrapped as `^(?:pattern)`. Alternation is
    /// leftmost-first, not longest: `a|ab` matches only `a` of `ab`.
    ///
    /// Perl classes are Unicode-aware, so `\d` also matches `٣` and `\w`
    /// matches `é`. Write `[0-9]` or `(?-u:\d)` for ASCII only.
    Pattern(Regex),
    /// Exact operator text not followed by another operator character.
    ///
    /// Keeps a built-in `.` tried before a custom `.^.` from splitting it.
    Operator(String),
    /// Arbitrary closure.
    Custom(CustomMatch),
}

impl Matcher {
    /// Length in characters of the match at the start of `rest`.
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        match self {
            Matcher::Literal(text) => rest.starts_with(text.as_str()).then(|| char_len(text)),
            Matcher::Keyword(word) => {
                let after = rest.strip_prefix(word.as_str())?;
                (!has_ident_prefix(after)).then(|| char_len(word))
            }
            Matcher::Pattern(regex) => regex.find(rest).map(|m| char_len(m.as_str())),
            Matcher::Operator(op) => {
                let after = rest.strip_prefix(op.as_str())?;
                (!has_operator_prefix(after)).then(|| char_len(op))
            }
            Matcher::Custom(matcher) => matcher(rest),
        }
    }

    /// Short name of the primitive, for diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            Matcher::Literal(_) => "literal",
            Matcher::Keyword(_) => "keyword",
            Matcher::Pattern(_) => "pattern",
            Matcher::Operator(_) => "operator",
            Matcher::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Matcher::Keyword(word) => f.debug_tuple("Keyword").field(word).finish(),
            Matcher::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
            Matcher::Operator(op) => f.debug_tuple("Operator").field(op).finish(),
            Matcher::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Compile `pattern` so that it only matches at the start of the haystack.
pub(crate) fn anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{pattern})"))
}

#[inline]
fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// A matcher bound to a token kind and a keep/discard flag.
#[derive(Debug)]
pub struct Rule<K> {
    kind: K,
    keep: bool,
    matcher: Matcher,
}

impl<K> Rule<K> {
    /// A rule that keeps its matches.
    pub fn new(kind: K, matcher: Matcher) -> Self {
        Rule {
            kind,
            keep: true,
            matcher,
        }
    }

    /// Token kind produced by this rule.
    #[inline]
    pub fn kind(&self) -> &K {
        &self.kind
    }

    /// Whether matches become tokens (`true`) or are dropped as trivia.
    #[inline]
    pub fn keeps(&self) -> bool {
        self.keep
    }

    #[inline]
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    #[inline]
    pub fn match_len(&self, rest: &str) -> Option<usize> {
        self.matcher.match_len(rest)
    }

    pub(crate) fn set_keep(&mut self, keep: bool) {
        self.keep = keep;
    }
}
