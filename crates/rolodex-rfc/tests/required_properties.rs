//! Documents that must be rejected for card structure.

use rolodex_rfc::rfc::vcard::{ParseErrorKind, parse};

fn structural_line(input: &str) -> usize {
    let err = parse(input).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Structural, "{err}");
    err.line
}

#[test_log::test]
fn fails_if_begin_is_missing() {
    assert_eq!(structural_line("VERSION:4.0\r\nFN:John Doe\r\nEND:VCARD"), 1);
}

#[test]
fn fails_if_end_is_missing() {
    assert_eq!(structural_line("BEGIN:VCARD\r\nFN:John Doe\r\nVERSION:4.0"), 3);
}

#[test]
fn fails_if_begin_precedes_end_of_previous_card() {
    let input = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:John Doe\r\nBEGIN:VCARD\r\nFN:John Doe\r\nVERSION:4.0\r\nEND:VCARD";
    assert_eq!(structural_line(input), 4);
}

#[test]
fn fails_if_end_precedes_begin() {
    let input = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:John Doe\r\nEND:VCARD\r\nEND:VCARD";
    assert_eq!(structural_line(input), 5);
}

#[test]
fn fails_if_version_is_missing() {
    let err = parse("BEGIN:VCARD\r\nFN:John Doe\r\nEND:VCARD").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Structural);
    assert_eq!(err.line, 3);
    assert!(err.message.contains("VERSION"));
    assert!(!err.message.contains("FN"));
}

#[test]
fn fails_if_fn_is_missing() {
    let err = parse("BEGIN:VCARD\r\nVERSION:4.0\r\nEND:VCARD").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Structural);
    assert!(err.message.contains("FN"));
}

#[test]
fn later_card_failure_discards_earlier_cards() {
    let input = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:A\r\nEND:VCARD\r\nBEGIN:VCARD\r\nVERSION:4.0\r\nEND:VCARD";
    assert_eq!(structural_line(input), 7);
}

#[test]
fn property_after_last_card() {
    let input = "BEGIN:VCARD\r\nVERSION:4.0\r\nFN:A\r\nEND:VCARD\r\nNOTE:stray";
    assert_eq!(structural_line(input), 5);
}
