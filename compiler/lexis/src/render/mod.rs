//! Human-readable rendering of syntax errors.
//!
//! ```text
//! error: no rule matches 'a'
//!  --> 1:3
//!   |
//! 1 | 12a
//!   |   ^
//! ```

use std::fmt::Write;

use crate::SyntaxError;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const GUTTER: &str = "\x1b[1;34m"; // Bold blue
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for rendered errors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors when stderr is a terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean.
    ///
    /// For `Auto`, `is_tty` decides. Ignored for `Always` and `Never`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

struct Painter {
    colors: bool,
}

impl Painter {
    fn paint(&self, out: &mut String, text: &str, color: &str) {
        if self.colors {
            let _ = write!(out, "{color}{text}{}", colors::RESET);
        } else {
            out.push_str(text);
        }
    }
}

impl SyntaxError {
    /// Render this error against the `source` it was produced from.
    ///
    /// Shows the offending line with a caret under the column where the
    /// scan stopped. Columns count characters, so the caret lines up for
    /// multibyte text as long as each character is one cell wide.
    ///
    /// `is_tty` resolves [`ColorMode::Auto`]; the caller knows where the
    /// output is going.
    pub fn render(&self, source: &str, mode: ColorMode, is_tty: bool) -> String {
        let painter = Painter {
            colors: mode.should_use_colors(is_tty),
        };
        let line_no = self.position.line.to_string();
        let gutter = " ".repeat(line_no.len());
        let line_text = source
            .split('\n')
            .nth(self.position.line.saturating_sub(1))
            .unwrap_or("");
        let line_text = line_text.strip_suffix('\r').unwrap_or(line_text);

        let mut out = String::new();
        painter.paint(&mut out, "error", colors::ERROR);
        painter.paint(&mut out, &format!(": {}", self.kind), colors::BOLD);
        out.push('\n');

        let _ = writeln!(out, "{gutter}--> {}", self.position);
        painter.paint(&mut out, &format!("{gutter} |"), colors::GUTTER);
        out.push('\n');

        painter.paint(&mut out, &format!("{line_no} |"), colors::GUTTER);
        let _ = writeln!(out, " {line_text}");

        painter.paint(&mut out, &format!("{gutter} |"), colors::GUTTER);
        let pad = " ".repeat(self.position.column.saturating_sub(1));
        let _ = write!(out, " {pad}");
        painter.paint(&mut out, "^", colors::ERROR);
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests;
