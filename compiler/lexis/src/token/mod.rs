//! Scanned tokens.

use std::fmt;
use std::ops::Range;

use lexis_core::Position;

/// A kept match: kind, exact matched text and location.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token<K> {
    pub kind: K,
    /// Exact matched substring of the input.
    pub lexeme: String,
    /// Position of the first character.
    pub start: Position,
    /// Character offset one past the last character.
    pub end: usize,
}

impl<K> Token<K> {
    /// Length in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start.offset
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.start.offset
    }

    /// Character offsets covered by this token.
    #[inline]
    pub fn offsets(&self) -> Range<usize> {
        self.start.offset..self.end
    }
}

impl<K: fmt::Debug> fmt::Display for Token<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<'{}', {:?}>", self.lexeme, self.kind)
    }
}
