//! Low-level building blocks for the `lexis` scanning engine.
//!
//! This crate has no `lexis_*` dependencies. It provides:
//!
//! - [`Position`]: offset/line/column tracking over code points
//! - [`SourceChars`]: input decoded once into code points, sliceable by
//!   character index without re-encoding
//! - [`char_class`]: the character classes behind keyword and operator
//!   boundary checks
//!
//! All offsets in this crate count Unicode scalar values, never bytes.

pub mod char_class;
mod position;
mod source_chars;

pub use position::Position;
pub use source_chars::SourceChars;
