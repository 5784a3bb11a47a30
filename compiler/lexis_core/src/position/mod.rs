//! Scan progress tracking.
//!
//! A [`Position`] is advanced one code point at a time. Line and column are
//! derived purely from the sequence of characters consumed, so replaying the
//! same prefix always yields the same position.

use std::fmt;

/// Location of the scan head: characters consumed plus 1-based line/column.
///
/// Only `'\n'` terminates a line. A `'\r'` is counted as an ordinary
/// character, so `"\r\n"` produces exactly one line break.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Number of characters consumed so far.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, in characters.
    pub column: usize,
}

impl Position {
    /// Position before any input has been consumed.
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };

    /// Consume one character.
    #[inline]
    pub fn advance(&mut self, ch: char) {
        self.offset += 1;
        if ch == '\n' {
            self.line += 1;
            self.column = Self::START.column;
        } else {
            self.column += 1;
        }
    }

    /// Consume every character of `text`, in order.
    pub fn advance_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.advance(ch);
        }
    }

    /// Reset to [`Position::START`].
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::START;
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
