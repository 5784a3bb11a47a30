//! Rule-driven lexical scanner.
//!
//! A [`Lexicon`] is an ordered list of rules built once through a callback.
//! A [`Lexer`] applies those rules to input text and produces [`Token`]s.
//!
//! ```
//! use lexis::{Lexer, Lexicon};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Kind { If, Ident, Space }
//!
//! let lexicon = Lexicon::build(|lx| {
//!     lx.keyword(Kind::If, "if")?;
//!     lx.pattern(Kind::Ident, r"[a-zA-Z]\w*")?;
//!     lx.pattern(Kind::Space, r"\s+")?.discard();
//!     Ok(())
//! })?;
//!
//! let tokens = Lexer::new(lexicon).scan("if ifx").map_err(|f| f.error)?;
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(kinds, [Kind::If, Kind::Ident]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # First Match Wins
//!
//! Rules are tried in the order they were declared and the first rule that
//! matches is taken, even when a later rule would match more characters.
//! Declare specific rules before general ones.
//!
//! # Logging
//!
//! Scanning emits `tracing` events: `debug` per scan, `trace` per matched
//! rule. Call [`init_tracing`] and set `RUST_LOG=lexis=trace` to see them.

mod error;
mod lexer;
mod lexicon;
mod render;
mod rule;
mod token;

use std::sync::Once;

pub use error::{LexiconError, ScanFailure, SyntaxError, SyntaxErrorKind};
pub use lexer::{Lexer, Tokens};
pub use lexicon::{Lexicon, LexiconBuilder, RuleId, RuleMut};
pub use lexis_core::{char_class, Position};
pub use render::ColorMode;
pub use rule::{CustomMatch, Matcher, Rule};
pub use token::Token;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber driven by `RUST_LOG`.
///
/// Call this once at startup. Safe to call multiple times.
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=lexis=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
