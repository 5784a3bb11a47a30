#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Number,
    Ident,
    Dot,
    Custom,
    And,
    Space,
}

// === Ordering ===

#[test]
fn rules_keep_declaration_order() {
    let lexicon = Lexicon::build(|lx| {
        lx.pattern(Kind::Number, r"\d+")?;
        lx.pattern(Kind::Ident, r"[a-z]+")?;
        lx.literal(Kind::Dot, ".")?;
        Ok(())
    })
    .unwrap();

    let kinds: Vec<Kind> = lexicon.rules().iter().map(|r| *r.kind()).collect();
    assert_eq!(kinds, vec![Kind::Number, Kind::Ident, Kind::Dot]);
    assert_eq!(lexicon.len(), 3);
    assert!(!lexicon.is_empty());
}

#[test]
fn first_match_prefers_earlier_rule() {
    let lexicon = Lexicon::build(|lx| {
        lx.pattern(Kind::Ident, "[a-z]")?;
        lx.pattern(Kind::Ident, "[a-z]+")?;
        Ok(())
    })
    .unwrap();

    let (id, len) = lexicon.first_match("abc").unwrap();
    assert_eq!(id.index(), 0);
    assert_eq!(len, 1);
    assert_eq!(lexicon.first_match("123"), None);
}

#[test]
fn first_rule_hands_back_the_matching_rule() {
    let lexicon = Lexicon::build(|lx| {
        lx.pattern(Kind::Number, r"\d+")?;
        lx.pattern(Kind::Space, r"\s+")?.discard();
        Ok(())
    })
    .unwrap();

    let (id, rule, len) = lexicon.first_rule("  7").unwrap();
    assert_eq!(id.index(), 1);
    assert_eq!(rule.kind(), &Kind::Space);
    assert!(!rule.keeps());
    assert_eq!(len, 2);
    assert!(lexicon.first_rule("x").is_none());
}

#[test]
fn empty_lexicon_matches_nothing() {
    let lexicon: Lexicon<Kind> = Lexicon::build(|_| Ok(())).unwrap();
    assert!(lexicon.is_empty());
    assert_eq!(lexicon.first_match("anything"), None);
}

// === Keep / Discard ===

#[test]
fn discard_marks_rule_as_trivia() {
    let lexicon = Lexicon::build(|lx| {
        lx.pattern(Kind::Number, r"\d+")?;
        let id = lx.pattern(Kind::Space, r"\s+")?.discard();
        assert_eq!(id.index(), 1);
        Ok(())
    })
    .unwrap();

    assert!(lexicon.rules()[0].keeps());
    assert!(!lexicon.rules()[1].keeps());
}

#[test]
fn set_keep_by_id() {
    let lexicon = Lexicon::build(|lx| {
        let space = lx.pattern(Kind::Space, r"\s+")?.id();
        lx.pattern(Kind::Number, r"\d+")?;
        lx.set_keep(space, false)?;
        lx.set_keep(space, true)?;
        lx.set_keep(space, false)?;
        Ok(())
    })
    .unwrap();

    let space = lexicon.rule(RuleId(0)).unwrap();
    assert_eq!(*space.kind(), Kind::Space);
    assert!(!space.keeps());
}

#[test]
fn set_keep_unknown_rule_fails() {
    let mut builder: LexiconBuilder<Kind> = LexiconBuilder::new();
    let err = builder.set_keep(RuleId(3), false).unwrap_err();
    assert_eq!(err, LexiconError::UnknownRule { rule: RuleId(3) });
}

#[test]
fn keep_handle_can_reenable() {
    let mut builder = LexiconBuilder::new();
    builder.literal(Kind::Dot, ".").unwrap().keep(false);
    builder.set_keep(RuleId(0), true).unwrap();
    let lexicon = builder.finish();
    assert!(lexicon.rules()[0].keeps());
}

// === Operator Dispatch ===

#[test]
fn word_operator_becomes_keyword() {
    let lexicon = Lexicon::build(|lx| {
        lx.operator(Kind::And, "and")?;
        lx.operator(Kind::Dot, ".")?;
        Ok(())
    })
    .unwrap();

    assert!(matches!(lexicon.rules()[0].matcher(), Matcher::Keyword(w) if w == "and"));
    assert!(matches!(lexicon.rules()[1].matcher(), Matcher::Operator(o) if o == "."));
    assert_eq!(lexicon.first_match("andy"), None);
    assert_eq!(lexicon.first_match("and y").map(|(_, len)| len), Some(3));
    assert_eq!(lexicon.first_match(".^."), None);
}

// === Configuration Errors ===

#[test]
fn invalid_pattern_fails_at_build() {
    let err = Lexicon::build(|lx| {
        lx.literal(Kind::Dot, ".")?;
        lx.pattern(Kind::Number, r"(\d+")?;
        Ok(())
    })
    .unwrap_err();

    match err {
        LexiconError::InvalidPattern { rule, pattern, .. } => {
            assert_eq!(rule, RuleId(1));
            assert_eq!(pattern, r"(\d+");
        }
        other => panic!("expected InvalidPattern, got {other:?}"),
    }
}

#[test]
fn pattern_matching_empty_fails_at_build() {
    let err = Lexicon::build(|lx| {
        lx.pattern(Kind::Space, r"\s*")?;
        Ok(())
    })
    .unwrap_err();

    assert_eq!(
        err,
        LexiconError::PatternMatchesEmpty {
            rule: RuleId(0),
            pattern: r"\s*".to_owned(),
        }
    );
}

#[test]
fn empty_text_fails_at_build() {
    let mut builder: LexiconBuilder<Kind> = LexiconBuilder::new();
    assert_eq!(
        builder.literal(Kind::Dot, "").unwrap_err(),
        LexiconError::EmptyText {
            rule: RuleId(0),
            primitive: "literal"
        }
    );
    assert!(builder.keyword(Kind::And, "").is_err());
    assert!(builder.raw_operator(Kind::Dot, "").is_err());
    assert!(builder.operator(Kind::Dot, "").is_err());
    assert!(builder.is_empty());
}

#[test]
fn custom_rule_is_appended() {
    let lexicon = Lexicon::build(|lx| {
        lx.custom(Kind::Custom, |rest: &str| rest.starts_with('#').then_some(1))
            .discard();
        Ok(())
    })
    .unwrap();

    assert_eq!(lexicon.first_match("#x"), Some((RuleId(0), 1)));
    assert!(!lexicon.rules()[0].keeps());
}

// === Sharing ===

#[test]
fn lexicon_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Lexicon<Kind>>();
}

#[test]
fn rule_id_display() {
    assert_eq!(RuleId(4).to_string(), "rule #4");
}
