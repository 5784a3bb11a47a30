//! The scanning engine.
//!
//! A [`Lexer`] binds a shared [`Lexicon`] to one scan at a time. Each scan
//! decodes the input once, then repeatedly:
//!
//! 1. stops successfully when the whole input has been consumed;
//! 2. tries every rule in declaration order on the remaining input and
//!    takes the first that matches (first match, not longest match);
//! 3. advances the position once per consumed character and emits a token
//!    if the rule keeps its matches;
//! 4. stops with a [`SyntaxError`] when no rule matches.
//!
//! Every accepted match consumes at least one character, so a scan always
//! terminates. Zero-length matches are reported as errors instead of
//! looping.

use std::fmt;
use std::iter::FusedIterator;
use std::sync::Arc;

use lexis_core::{Position, SourceChars};
use tracing::{debug, trace};

use crate::{
    ColorMode, Lexicon, LexiconBuilder, LexiconError, ScanFailure, SyntaxError, SyntaxErrorKind,
    Token,
};

/// Scanner state for one input at a time.
///
/// The lexicon is shared; the decoded input and position are owned and
/// reset by every call to [`scan`](Self::scan) or [`tokens`](Self::tokens).
/// Run concurrent scans with one `Lexer` per thread over a cloned
/// `Arc<Lexicon<K>>`.
#[derive(Debug)]
pub struct Lexer<K> {
    lexicon: Arc<Lexicon<K>>,
    position: Position,
    source: SourceChars,
}

/// Outcome of a single rule application.
enum Step<K> {
    /// Input exhausted.
    Done,
    /// A rule consumed input. `None` when the rule is trivia.
    Matched(Option<Token<K>>),
    Failed(SyntaxError),
}

impl<K> Lexer<K> {
    pub fn new(lexicon: impl Into<Arc<Lexicon<K>>>) -> Self {
        Lexer {
            lexicon: lexicon.into(),
            position: Position::START,
            source: SourceChars::default(),
        }
    }

    /// Build a lexicon with `configure` and bind a lexer to it.
    pub fn build<F>(configure: F) -> Result<Self, LexiconError>
    where
        F: FnOnce(&mut LexiconBuilder<K>) -> Result<(), LexiconError>,
    {
        Lexicon::build(configure).map(Self::new)
    }

    #[inline]
    pub fn lexicon(&self) -> &Arc<Lexicon<K>> {
        &self.lexicon
    }

    /// Current scan position. After a failed scan this is where it stopped.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    fn reset(&mut self, input: &str) {
        self.source.reload(input);
        self.position.reset();
    }

    fn error(&self, kind: SyntaxErrorKind) -> SyntaxError {
        SyntaxError {
            position: self.position,
            kind,
        }
    }
}

impl<K: Clone + fmt::Debug> Lexer<K> {
    /// Lazily scan `input`, yielding kept tokens.
    ///
    /// The iterator yields at most one error and then ends.
    pub fn tokens(&mut self, input: &str) -> Tokens<'_, K> {
        self.reset(input);
        Tokens {
            lexer: self,
            state: State::Scanning,
        }
    }

    /// Scan `input` to completion.
    ///
    /// On failure the tokens kept before the error are returned alongside
    /// it in [`ScanFailure`].
    #[tracing::instrument(level = "debug", skip_all, fields(chars = input.chars().count()))]
    pub fn scan(&mut self, input: &str) -> Result<Vec<Token<K>>, ScanFailure<K>> {
        let mut tokens = Vec::new();
        for item in self.tokens(input) {
            match item {
                Ok(token) => tokens.push(token),
                Err(error) => return Err(ScanFailure { tokens, error }),
            }
        }
        debug!(tokens = tokens.len(), "scan complete");
        Ok(tokens)
    }

    /// Scan `input`, panicking with a rendered diagnostic on failure.
    ///
    /// For callers that treat a syntax error as a bug, such as tests and
    /// fixed embedded grammars.
    pub fn must_scan(&mut self, input: &str) -> Vec<Token<K>> {
        match self.scan(input) {
            Ok(tokens) => tokens,
            Err(failure) => panic!("{}", failure.error.render(input, ColorMode::Never, false)),
        }
    }

    fn step(&mut self) -> Step<K> {
        let start = self.position;
        let remaining = self.source.len().saturating_sub(start.offset);
        if remaining == 0 {
            return Step::Done;
        }

        let rest = self.source.rest(start.offset);
        let Some((id, rule, len)) = self.lexicon.first_rule(rest) else {
            let found = rest.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
            return Step::Failed(self.error(SyntaxErrorKind::NoMatch { found }));
        };
        if len == 0 {
            return Step::Failed(self.error(SyntaxErrorKind::EmptyMatch { rule: id }));
        }
        if len > remaining {
            return Step::Failed(self.error(SyntaxErrorKind::Overrun {
                rule: id,
                len,
                remaining,
            }));
        }

        let end = start.offset + len;
        let lexeme = self.source.slice(start.offset, end);
        self.position.advance_str(lexeme);
        trace!(
            rule = id.index(),
            kind = ?rule.kind(),
            matcher = rule.matcher().describe(),
            len,
            keep = rule.keeps(),
            "rule matched"
        );
        Step::Matched(rule.keeps().then(|| Token {
            kind: rule.kind().clone(),
            lexeme: lexeme.to_owned(),
            start,
            end,
        }))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Scanning,
    Terminated,
}

/// Iterator over the kept tokens of one scan. See [`Lexer::tokens`].
#[derive(Debug)]
pub struct Tokens<'a, K> {
    lexer: &'a mut Lexer<K>,
    state: State,
}

impl<K> Tokens<'_, K> {
    /// Current scan position.
    pub fn position(&self) -> Position {
        self.lexer.position
    }
}

impl<K: Clone + fmt::Debug> Iterator for Tokens<'_, K> {
    type Item = Result<Token<K>, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.state == State::Scanning {
            match self.lexer.step() {
                Step::Done => self.state = State::Terminated,
                Step::Failed(err) => {
                    debug!(%err, "scan failed");
                    self.state = State::Terminated;
                    return Some(Err(err));
                }
                Step::Matched(Some(token)) => return Some(Ok(token)),
                Step::Matched(None) => {}
            }
        }
        None
    }
}

impl<K: Clone + fmt::Debug> FusedIterator for Tokens<'_, K> {}
