//! Checks the escape tables and lexical classes against the notation rules.

use ion_text::classify::{
    is_digit, is_identifier_part, is_identifier_start, is_numeric_stop, is_operator_part,
    is_whitespace, OPERATOR_CHARS,
};
use ion_text::{escape, Context, EscapeTable};

const NAMED: [(u8, &str); 11] = [
    (0x00, "\\0"),
    (0x07, "\\a"),
    (0x08, "\\b"),
    (0x09, "\\t"),
    (0x0A, "\\n"),
    (0x0B, "\\v"),
    (0x0C, "\\f"),
    (0x0D, "\\r"),
    (b'\\', "\\\\"),
    (b'"', "\\\""),
    (0x7F, "\\x7f"),
];

#[test]
fn test_short_string_table() {
    for (byte, expected) in NAMED {
        assert_eq!(escape::lookup(Context::ShortString, byte), Some(expected), "{byte:#x}");
    }
    assert_eq!(escape::lookup(Context::ShortString, 0x01), Some("\\x01"));
    assert_eq!(escape::lookup(Context::ShortString, 0x1F), Some("\\x1f"));
    assert_eq!(escape::lookup(Context::ShortString, 0xE9), Some("\\xe9"));
    assert_eq!(escape::lookup(Context::ShortString, b'\''), None);
    for byte in 0x20..0x7F_u8 {
        if byte != b'"' && byte != b'\\' {
            assert_eq!(escape::lookup(Context::ShortString, byte), None, "{byte:#x}");
        }
    }
}

#[test]
fn test_derived_tables() {
    assert_eq!(escape::lookup(Context::LongString, b'\n'), None);
    assert_eq!(escape::lookup(Context::LongString, b'"'), None);
    assert_eq!(escape::lookup(Context::LongString, b'\''), Some("\\'"));
    assert_eq!(escape::lookup(Context::LongString, b'\r'), Some("\\r"));

    assert_eq!(escape::lookup(Context::Symbol, b'"'), None);
    assert_eq!(escape::lookup(Context::Symbol, b'\''), Some("\\'"));
    assert_eq!(escape::lookup(Context::Symbol, b'\n'), Some("\\n"));

    let string = EscapeTable::for_context(Context::ShortString);
    let clob = EscapeTable::for_context(Context::Clob);
    for byte in 0..=255_u8 {
        assert_eq!(string.lookup(byte), clob.lookup(byte), "{byte:#x}");
    }
}

#[test]
fn test_json_table() {
    assert_eq!(escape::lookup(Context::Json, 0x00), Some("\\u0000"));
    assert_eq!(escape::lookup(Context::Json, 0x07), Some("\\u0007"));
    assert_eq!(escape::lookup(Context::Json, 0x0B), Some("\\u000b"));
    assert_eq!(escape::lookup(Context::Json, 0x1B), Some("\\u001b"));
    assert_eq!(escape::lookup(Context::Json, 0xFF), Some("\\u00ff"));
    assert_eq!(escape::lookup(Context::Json, b'\t'), Some("\\t"));
    assert_eq!(escape::lookup(Context::Json, b'"'), Some("\\\""));
    assert_eq!(escape::lookup(Context::Json, b'\''), None);
    assert_eq!(escape::lookup(Context::Json, b'/'), None);
}

#[test]
fn test_every_high_byte_is_escaped() {
    for context in [
        Context::ShortString,
        Context::LongString,
        Context::Symbol,
        Context::Clob,
        Context::Json,
    ] {
        let table = EscapeTable::for_context(context);
        for byte in 0x7F..=0xFF_u8 {
            assert!(table.needs_escape(byte), "{context:?} {byte:#x}");
        }
    }
}

#[test]
fn test_identifier_classes() {
    assert!(is_identifier_start(u32::from('$')));
    assert!(is_identifier_start(u32::from('_')));
    assert!(!is_identifier_start(u32::from('7')));
    assert!(is_identifier_part(u32::from('7')));
    assert!(!is_identifier_part(u32::from('-')));
    assert!(!is_identifier_start(0xE9));
    assert!(!is_identifier_part(0x1F600));
}

#[test]
fn test_operator_characters() {
    assert_eq!(OPERATOR_CHARS.len(), 19);
    for &c in &OPERATOR_CHARS {
        assert!(is_operator_part(u32::from(c)), "{}", char::from(c));
        assert!(!is_identifier_part(u32::from(c)));
    }
    for c in ['\'', '"', ',', '(', '{', '[', ':', '\\', ' '] {
        assert!(!is_operator_part(u32::from(c)), "{c:?}");
    }
}

#[test]
fn test_numeric_stops() {
    assert!(is_numeric_stop(None));
    for c in "{}[](),\"' \t\n\r".chars() {
        assert!(is_numeric_stop(Some(u32::from(c))), "{c:?}");
    }
    for c in "/0a.:".chars() {
        assert!(!is_numeric_stop(Some(u32::from(c))), "{c:?}");
    }
}

#[test]
fn test_whitespace_and_digits() {
    assert!(is_whitespace(u32::from(' ')));
    assert!(!is_whitespace(0x0B));
    assert!(is_digit(u32::from('7'), 8));
    assert!(!is_digit(u32::from('8'), 8));
    assert!(is_digit(u32::from('F'), 16));
    assert!(is_digit(u32::from('f'), 16));
    assert!(!is_digit(u32::from('g'), 16));
    assert!(!is_digit(u32::from('a'), 10));
}
