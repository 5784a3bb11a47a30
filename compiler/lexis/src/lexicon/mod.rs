//! Ordered rule registry.
//!
//! A [`Lexicon`] is built exactly once through [`Lexicon::build`]: the
//! callback appends rules to a [`LexiconBuilder`] in priority order, and
//! the result is frozen. Declaration order is the only disambiguation
//! mechanism there is. The first rule to match wins, regardless of length.
//!
//! Configuration errors (empty literal text, invalid or empty-matching
//! patterns) surface from the builder methods, before any input is scanned.

use std::fmt;

use lexis_core::char_class::is_ident_op;
use tracing::debug;

use crate::rule::{anchored, Matcher, Rule};
use crate::LexiconError;

/// Index of a rule within its lexicon, in declaration order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(usize);

impl RuleId {
    pub(crate) const fn new(index: usize) -> Self {
        RuleId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule #{}", self.0)
    }
}

/// Frozen, ordered set of lexical rules.
///
/// Immutable after [`build`](Self::build). `Send + Sync` whenever the token
/// kind is, so one lexicon can back many concurrent [`Lexer`](crate::Lexer)s
/// through an `Arc`.
#[derive(Debug)]
pub struct Lexicon<K> {
    rules: Vec<Rule<K>>,
}

impl<K> Lexicon<K> {
    /// Build a lexicon by running `configure` against a fresh builder.
    ///
    /// Any error returned by the callback aborts the build.
    pub fn build<F>(configure: F) -> Result<Self, LexiconError>
    where
        F: FnOnce(&mut LexiconBuilder<K>) -> Result<(), LexiconError>,
    {
        let mut builder = LexiconBuilder::new();
        configure(&mut builder)?;
        let lexicon = builder.finish();
        debug!(rules = lexicon.len(), "lexicon built");
        Ok(lexicon)
    }

    /// Rules in priority order.
    #[inline]
    pub fn rules(&self) -> &[Rule<K>] {
        &self.rules
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule with the given id.
    pub fn rule(&self, id: RuleId) -> Option<&Rule<K>> {
        self.rules.get(id.0)
    }

    /// First rule, in declaration order, that matches the start of `rest`.
    ///
    /// Returns the rule's id and the match length in characters.
    pub fn first_match(&self, rest: &str) -> Option<(RuleId, usize)> {
        self.first_rule(rest).map(|(id, _, len)| (id, len))
    }

    /// Like [`first_match`](Self::first_match), also handing back the rule.
    pub(crate) fn first_rule(&self, rest: &str) -> Option<(RuleId, &Rule<K>, usize)> {
        self.rules.iter().enumerate().find_map(|(i, rule)| {
            rule.match_len(rest).map(|len| (RuleId::new(i), rule, len))
        })
    }
}

/// Mutable, append-only rule list used while building a [`Lexicon`].
///
/// Every append returns a [`RuleMut`] handle so the rule can be marked as
/// trivia right away:
///
/// ```
/// # use lexis::Lexicon;
/// let lexicon = Lexicon::build(|lx| {
///     lx.pattern("num", r"\d+")?;
///     lx.literal("comma", ",")?.discard();
///     Ok(())
/// })?;
/// assert!(!lexicon.rules()[1].keeps());
/// # Ok::<(), lexis::LexiconError>(())
/// ```
#[derive(Debug)]
pub struct LexiconBuilder<K> {
    rules: Vec<Rule<K>>,
}

impl<K> Default for LexiconBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> LexiconBuilder<K> {
    pub fn new() -> Self {
        LexiconBuilder { rules: Vec::new() }
    }

    /// Match `text` exactly.
    pub fn literal(
        &mut self,
        kind: K,
        text: impl Into<String>,
    ) -> Result<RuleMut<'_, K>, LexiconError> {
        let text = self.non_empty(text.into(), "literal")?;
        Ok(self.push(kind, Matcher::Literal(text)))
    }

    /// Match `word` when it is not immediately followed by an identifier
    /// character.
    pub fn keyword(
        &mut self,
        kind: K,
        word: impl Into<String>,
    ) -> Result<RuleMut<'_, K>, LexiconError> {
        let word = self.non_empty(word.into(), "keyword")?;
        Ok(self.push(kind, Matcher::Keyword(word)))
    }

    /// Match a regex anchored at the current position.
    ///
    /// Fails if the regex does not compile or if it matches the empty
    /// string, since a zero-length match would never advance the scan.
    pub fn pattern(&mut self, kind: K, pattern: &str) -> Result<RuleMut<'_, K>, LexiconError> {
        let rule = self.next_id();
        let regex = anchored(pattern).map_err(|err| LexiconError::InvalidPattern {
            rule,
            pattern: pattern.to_owned(),
            message: err.to_string(),
        })?;
        if regex.is_match("") {
            return Err(LexiconError::PatternMatchesEmpty {
                rule,
                pattern: pattern.to_owned(),
            });
        }
        Ok(self.push(kind, Matcher::Pattern(regex)))
    }

    /// Match operator text `op` when it is not immediately followed by
    /// another operator character.
    ///
    /// Use this for built-in operators that must not split a longer
    /// user-defined operator sharing their prefix.
    pub fn raw_operator(
        &mut self,
        kind: K,
        op: impl Into<String>,
    ) -> Result<RuleMut<'_, K>, LexiconError> {
        let op = self.non_empty(op.into(), "operator")?;
        Ok(self.push(kind, Matcher::Operator(op)))
    }

    /// Match an operator, choosing the boundary check from its spelling.
    ///
    /// Word operators such as `and` get keyword semantics; symbolic ones
    /// get [`raw_operator`](Self::raw_operator) semantics.
    pub fn operator(
        &mut self,
        kind: K,
        op: impl Into<String>,
    ) -> Result<RuleMut<'_, K>, LexiconError> {
        let op = op.into();
        if is_ident_op(&op) {
            self.keyword(kind, op)
        } else {
            self.raw_operator(kind, op)
        }
    }

    /// Match with an arbitrary closure returning a length in characters.
    ///
    /// The closure must be pure. A zero length or a length past the end of
    /// the input is reported as a syntax error when scanning.
    pub fn custom<F>(&mut self, kind: K, matcher: F) -> RuleMut<'_, K>
    where
        F: Fn(&str) -> Option<usize> + Send + Sync + 'static,
    {
        self.push(kind, Matcher::Custom(Box::new(matcher)))
    }

    /// Set the keep flag of an already appended rule.
    pub fn set_keep(&mut self, id: RuleId, keep: bool) -> Result<(), LexiconError> {
        let rule = self
            .rules
            .get_mut(id.0)
            .ok_or(LexiconError::UnknownRule { rule: id })?;
        rule.set_keep(keep);
        Ok(())
    }

    /// Number of rules appended so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Freeze the rule list.
    pub fn finish(self) -> Lexicon<K> {
        Lexicon { rules: self.rules }
    }

    fn next_id(&self) -> RuleId {
        RuleId::new(self.rules.len())
    }

    fn non_empty(&self, text: String, primitive: &'static str) -> Result<String, LexiconError> {
        if text.is_empty() {
            Err(LexiconError::EmptyText {
                rule: self.next_id(),
                primitive,
            })
        } else {
            Ok(text)
        }
    }

    fn push(&mut self, kind: K, matcher: Matcher) -> RuleMut<'_, K> {
        let id = self.next_id();
        self.rules.push(Rule::new(kind, matcher));
        RuleMut {
            builder: self,
            id,
        }
    }
}

/// Handle to the rule just appended to a [`LexiconBuilder`].
#[derive(Debug)]
pub struct RuleMut<'a, K> {
    builder: &'a mut LexiconBuilder<K>,
    id: RuleId,
}

impl<K> RuleMut<'_, K> {
    #[inline]
    pub fn id(&self) -> RuleId {
        self.id
    }

    /// Consume matches without emitting tokens (whitespace, comments).
    pub fn discard(self) -> RuleId {
        self.keep(false)
    }

    /// Set whether matches are emitted.
    pub fn keep(self, keep: bool) -> RuleId {
        if let Some(rule) = self.builder.rules.get_mut(self.id.0) {
            rule.set_keep(keep);
        }
        self.id
    }
}

#[cfg(test)]
mod tests;
