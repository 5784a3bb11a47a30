//! Character classes for boundary checks.
//!
//! Keyword and operator rules must not match a prefix of a longer word or
//! a longer operator. Those checks are explicit character tests here rather
//! than regex lookahead, which not every pattern engine supports.

/// Characters that may appear in a user-defined operator.
pub const OPERATOR_CHARS: &str = "!#$%&*+-./:<=>?@\\^|~";

/// Returns `true` if `ch` can continue an identifier.
///
/// ASCII letters and digits, underscore, and Unicode letters. Digits and
/// letter-numbers outside ASCII (`٣`, `Ⅻ`) do not count.
///
/// Combining marks with the `Alphabetic` property, such as the Devanagari
/// vowel sign in `कि`, are treated as letters.
#[inline]
pub fn is_ident_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || (ch.is_alphabetic() && !ch.is_numeric())
}

/// Returns `true` if `ch` belongs to [`OPERATOR_CHARS`].
#[inline]
pub fn is_operator_char(ch: char) -> bool {
    matches!(
        ch,
        '!' | '#'
            | '$'
            | '%'
            | '&'
            | '*'
            | '+'
            | '-'
            | '.'
            | '/'
            | ':'
            | '<'
            | '='
            | '>'
            | '?'
            | '@'
            | '\\'
            | '^'
            | '|'
            | '~'
    )
}

/// Returns `true` if `text` is a word-like operator such as `and` or `mod`.
///
/// Empty text is not an identifier operator.
pub fn is_ident_op(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_ident_continue)
}

/// Returns `true` if `text` starts with an operator character.
#[inline]
pub fn has_operator_prefix(text: &str) -> bool {
    text.chars().next().is_some_and(is_operator_char)
}

/// Returns `true` if `text` starts with an identifier-continuation character.
#[inline]
pub fn has_ident_prefix(text: &str) -> bool {
    text.chars().next().is_some_and(is_ident_continue)
}
