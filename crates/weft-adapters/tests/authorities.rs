//! End-to-end tests: core sessions driven through the shipped authorities.

use weft_adapters::{ConstAuthority, MaskingAuthority, RecordingAuthority, StyleAuthority};
use weft_core::prelude::*;

#[test]
fn const_formatter_overrides_every_value_shape() {
    let authority = ConstAuthority::new("<X>");
    let mut out = String::new();
    let mut session = Composer::open_with(&mut out, &authority);

    session.append_value(Operand::Absent).unwrap();
    session.append_value(Operand::formattable(&255i32)).unwrap();
    session.append_value(Operand::display(&"anything")).unwrap();

    assert_eq!(out, "<X><X><X>");
    assert_eq!(authority.formatter().call_count(), 3);
}

#[test]
fn capability_lookup_happens_once_per_session() {
    let authority = RecordingAuthority::new(ConstAuthority::new("#"));
    let mut out = String::new();
    let mut session = Composer::open_with(&mut out, &authority);
    for _ in 0..10 {
        session.append_value(Operand::display(&0)).unwrap();
    }
    assert_eq!(authority.lookup_count(), 1);
    assert_eq!(out, "#".repeat(10));
}

#[test]
fn each_session_probes_again() {
    let authority = RecordingAuthority::new(ConstAuthority::new("#"));
    let mut out = String::new();
    {
        let _first = Composer::open_with(&mut out, &authority);
    }
    {
        let _second = Composer::open_with(&mut out, &authority);
    }
    assert_eq!(authority.lookup_count(), 2);
}

#[test]
fn raw_text_never_reaches_the_formatter() {
    let authority = ConstAuthority::new("<X>");
    let mut out = String::new();
    let mut session = Composer::open_with(&mut out, &authority);
    session.append_text("pre-rendered");
    session.append_text_aligned("cell", 6);
    assert_eq!(out, "pre-rendered  cell");
    assert_eq!(authority.formatter().call_count(), 0);
}

#[test]
fn style_authority_restyles_without_intercepting() {
    let authority = RecordingAuthority::new(
        StyleAuthority::default()
            .with_group_separator(Some('\u{202f}'))
            .with_decimal_separator(','),
    );

    let text = compose_with(&authority, |c| {
        c.append_formatted(Operand::formattable(&1_234_567i64), Some("n"), 0)?;
        c.append_literal(" → ");
        c.append_formatted(Operand::formattable(&0.5f64), Some("f1"), 0)
    })
    .unwrap();

    assert_eq!(text, "1\u{202f}234\u{202f}567 → 0,5");
    // A style-only authority is still probed for the capability, once.
    assert_eq!(authority.lookup_count(), 1);
}

#[test]
fn masking_composes_into_audit_safe_lines() {
    let authority = MaskingAuthority::new();
    let text = compose_with(&authority, |c| {
        c.append_literal("user=");
        c.append_value(Operand::display(&"alice"))?;
        c.append_literal(" token=");
        c.append_formatted(Operand::display(&"tok-9f31c2d744"), Some("last4"), 0)?;
        c.append_literal(" password=");
        c.append_formatted(Operand::display(&"hunter2"), Some("mask"), 0)
    })
    .unwrap();
    assert_eq!(text, "user=alice token=**********d744 password=********");
}

#[test]
fn style_from_config_drives_a_session() {
    let nf: NumberFormat = serde_json::from_str(r#"{"group_separator": "'"}"#).unwrap();
    let authority = StyleAuthority::new(nf);
    let text = compose_with(&authority, |c| {
        c.append_formatted(Operand::formattable(&20_000_000i64), Some("n"), 14)
    })
    .unwrap();
    assert_eq!(text, "    20'000'000");
}
