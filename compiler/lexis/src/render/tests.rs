use super::*;
use crate::SyntaxErrorKind;
use lexis_core::Position;
use pretty_assertions::assert_eq;

fn error_at(source: &str, offset: usize) -> SyntaxError {
    let mut position = Position::START;
    let mut found = '\0';
    for (i, ch) in source.chars().enumerate() {
        if i == offset {
            found = ch;
            break;
        }
        position.advance(ch);
    }
    SyntaxError {
        position,
        kind: SyntaxErrorKind::NoMatch { found },
    }
}

#[test]
fn should_use_colors() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}

#[test]
fn renders_caret_under_column() {
    let source = "12a";
    let rendered = error_at(source, 2).render(source, ColorMode::Never, false);
    assert_eq!(
        rendered,
        "error: no rule matches 'a'\n --> 1:3\n  |\n1 | 12a\n  |   ^\n"
    );
}

#[test]
fn renders_only_the_failing_line() {
    let source = "ok\nfine\r\n  $bad\nlater";
    let rendered = error_at(source, 11).render(source, ColorMode::Never, false);
    assert_eq!(
        rendered,
        "error: no rule matches '$'\n --> 3:3\n  |\n3 |   $bad\n  |   ^\n"
    );
}

#[test]
fn wide_line_numbers_widen_gutter() {
    let source = format!("{}?", "\n".repeat(11));
    let rendered = error_at(&source, 11).render(&source, ColorMode::Never, false);
    assert_eq!(
        rendered,
        "error: no rule matches '?'\n  --> 12:1\n   |\n12 | ?\n   | ^\n"
    );
}

#[test]
fn caret_counts_chars_not_bytes() {
    let source = "é世!";
    let rendered = error_at(source, 2).render(source, ColorMode::Never, false);
    assert!(rendered.ends_with("1 | é世!\n  |   ^\n"), "{rendered}");
}

#[test]
fn always_mode_emits_ansi() {
    let source = "x";
    let rendered = error_at(source, 0).render(source, ColorMode::Always, false);
    assert!(rendered.contains(colors::ERROR));
    assert!(rendered.contains(colors::RESET));
}

#[test]
fn auto_mode_follows_caller_tty_flag() {
    let source = "x";
    let err = error_at(source, 0);

    let tty = err.render(source, ColorMode::Auto, true);
    assert!(tty.contains(colors::ERROR));
    assert!(tty.contains(colors::RESET));

    let piped = err.render(source, ColorMode::Auto, false);
    assert!(!piped.contains('\x1b'));
    assert_eq!(piped, err.render(source, ColorMode::Never, true));
}
