//! Input decoded once into code points.
//!
//! Scanning addresses the input by character index. Re-encoding the suffix
//! at every step would make a scan quadratic, so the buffer keeps the
//! original UTF-8 text together with the byte index at which every character
//! starts. Suffixes and lexemes are then plain `&str` slices.
//!
//! # Layout
//!
//! ```text
//! text:   "a", "é" (2 bytes), "b"
//! starts: [0, 1, 3, 4]
//!                   ^ trailing entry == text.len()
//! ```

/// Owned source text with a character-index to byte-index table.
///
/// The buffer is reusable: [`reload`](Self::reload) replaces the contents
/// while keeping both allocations.
#[derive(Clone, Debug, Default)]
pub struct SourceChars {
    text: String,
    /// `starts[i]` is the byte index of character `i`; the final entry is
    /// `text.len()`, so `starts.len() == char_count + 1`.
    starts: Vec<usize>,
}

impl SourceChars {
    /// Decode `text` into a new buffer.
    pub fn new(text: &str) -> Self {
        let mut source = Self::default();
        source.reload(text);
        source
    }

    /// Replace the buffer contents with `text`.
    pub fn reload(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.starts.clear();
        self.starts.reserve(text.len() + 1);
        self.starts.extend(text.char_indices().map(|(i, _)| i));
        self.starts.push(text.len());
    }

    /// Number of characters (code points) in the source.
    #[inline]
    pub fn len(&self) -> usize {
        self.starts.len().saturating_sub(1)
    }

    /// Returns `true` if the source has no characters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The whole source text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Byte index at which character `idx` starts.
    ///
    /// `idx == len()` yields the text length. Indices past the end clamp to
    /// the text length.
    #[inline]
    pub fn byte_offset(&self, idx: usize) -> usize {
        self.starts.get(idx).copied().unwrap_or(self.text.len())
    }

    /// Character at index `idx`, or `None` past the end.
    pub fn char_at(&self, idx: usize) -> Option<char> {
        if idx >= self.len() {
            return None;
        }
        self.rest(idx).chars().next()
    }

    /// The suffix of the source starting at character `idx`.
    #[inline]
    pub fn rest(&self, idx: usize) -> &str {
        &self.text[self.byte_offset(idx)..]
    }

    /// The characters in `start..end`, as a string slice.
    ///
    /// Out-of-range bounds clamp to the end of the source.
    pub fn slice(&self, start: usize, end: usize) -> &str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        let lo = self.byte_offset(start);
        let hi = self.byte_offset(end).max(lo);
        &self.text[lo..hi]
    }
}
