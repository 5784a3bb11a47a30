//! Error types.
//!
//! Two classes, surfaced at different times:
//! - [`LexiconError`]: bad rule configuration, returned while building.
//! - [`SyntaxError`]: no usable rule at some position, returned while
//!   scanning. [`ScanFailure`] pairs it with the tokens produced before it.
//!
//! The scanner never recovers or resynchronizes; that is left to callers.

use lexis_core::Position;

use crate::{RuleId, Token};

/// Invalid rule configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexiconError {
    /// A literal, keyword or operator rule was given empty text.
    #[error("{rule}: {primitive} text must not be empty")]
    EmptyText {
        rule: RuleId,
        primitive: &'static str,
    },
    /// A pattern rule's regex failed to compile.
    #[error("{rule}: invalid pattern `{pattern}`: {message}")]
    InvalidPattern {
        rule: RuleId,
        pattern: String,
        message: String,
    },
    /// A pattern rule matches the empty string and could stall the scan.
    #[error("{rule}: pattern `{pattern}` matches the empty string")]
    PatternMatchesEmpty { rule: RuleId, pattern: String },
    /// A rule id that was never handed out by this builder.
    #[error("{rule} does not exist")]
    UnknownRule { rule: RuleId },
}

/// Scanning stopped at `position`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("syntax error at {position}: {kind}")]
pub struct SyntaxError {
    /// Where the scan stopped. Nothing at or after this offset was consumed.
    pub position: Position,
    pub kind: SyntaxErrorKind,
}

/// Why scanning stopped.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxErrorKind {
    /// No rule matches the remaining input.
    #[error("no rule matches {found:?}")]
    NoMatch { found: char },
    /// A rule reported a zero-length match, which would never advance.
    #[error("{rule} matched zero characters")]
    EmptyMatch { rule: RuleId },
    /// A custom rule reported more characters than remain.
    #[error("{rule} claimed {len} characters but only {remaining} remain")]
    Overrun {
        rule: RuleId,
        len: usize,
        remaining: usize,
    },
}

impl SyntaxError {
    /// Short message without the position prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// A failed scan: the error plus every token kept before it.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{error}")]
pub struct ScanFailure<K> {
    /// Tokens produced before the failure, in order.
    pub tokens: Vec<Token<K>>,
    #[source]
    pub error: SyntaxError,
}

impl<K> ScanFailure<K> {
    /// Split into the partial token list and the error.
    pub fn into_parts(self) -> (Vec<Token<K>>, SyntaxError) {
        (self.tokens, self.error)
    }
}
