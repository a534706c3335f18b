//! Tests for `DocblockTokenKind` helpers and literal value parsing.

use crate::smallvec;
use crate::token::DocblockTokenKind;
use std::borrow::Cow;

// =============================================================================
// Punctuators
// =============================================================================

/// Verifies that every punctuator renders as its source character and that
/// non-punctuators return `None`.
#[test]
fn punctuator_strings() {
    let cases = [
        (DocblockTokenKind::At, "@"),
        (DocblockTokenKind::Colon, ":"),
        (DocblockTokenKind::Comma, ","),
        (DocblockTokenKind::CurlyBraceClose, "}"),
        (DocblockTokenKind::CurlyBraceOpen, "{"),
        (DocblockTokenKind::Equals, "="),
        (DocblockTokenKind::Minus, "-"),
        (DocblockTokenKind::NamespaceSeparator, "\\"),
        (DocblockTokenKind::ParenClose, ")"),
        (DocblockTokenKind::ParenOpen, "("),
    ];
    for (kind, expected) in cases {
        assert_eq!(kind.as_punctuator_str(), Some(expected));
        assert!(kind.is_punctuator());
    }

    assert_eq!(DocblockTokenKind::identifier_borrowed("Foo").as_punctuator_str(), None);
    assert_eq!(DocblockTokenKind::True.as_punctuator_str(), None);
    assert_eq!(DocblockTokenKind::Eof.as_punctuator_str(), None);
}

// =============================================================================
// Names
// =============================================================================

/// Reserved words can appear where a name is expected (e.g. as a named
/// argument `null = 1`), so they count as name-like.
#[test]
fn reserved_words_are_name_like() {
    assert_eq!(DocblockTokenKind::True.name_text(), Some("true"));
    assert_eq!(DocblockTokenKind::False.name_text(), Some("false"));
    assert_eq!(DocblockTokenKind::Null.name_text(), Some("null"));
    assert!(DocblockTokenKind::Null.is_name_like());

    let ident = DocblockTokenKind::identifier_owned("Foo\\Bar".to_string());
    assert_eq!(ident.name_text(), Some("Foo\\Bar"));
    assert!(!DocblockTokenKind::integer_borrowed("1").is_name_like());
}

#[test]
fn display_renders_source_text() {
    assert_eq!(DocblockTokenKind::string_borrowed("\"x\"").display(), "\"x\"");
    assert_eq!(DocblockTokenKind::ParenClose.display(), ")");
    assert_eq!(DocblockTokenKind::Eof.display(), "end of string");
    assert_eq!(
        DocblockTokenKind::error("Unterminated string literal", smallvec![]).display(),
        "tokenization error: Unterminated string literal",
    );
}

// =============================================================================
// Numeric values
// =============================================================================

#[test]
fn parse_integer_value_handles_signs() {
    assert_eq!(DocblockTokenKind::integer_borrowed("1234").parse_integer_value(), Some(Ok(1234)));
    assert_eq!(DocblockTokenKind::integer_borrowed("-12").parse_integer_value(), Some(Ok(-12)));
    assert_eq!(DocblockTokenKind::integer_borrowed("+7").parse_integer_value(), Some(Ok(7)));
    assert_eq!(DocblockTokenKind::True.parse_integer_value(), None);
}

/// Values beyond `i64` are reported as a parse failure rather than
/// silently wrapping.
#[test]
fn parse_integer_value_overflow_is_error() {
    let kind = DocblockTokenKind::integer_borrowed("99999999999999999999");
    assert!(matches!(kind.parse_integer_value(), Some(Err(_))));
}

#[test]
fn parse_float_value() {
    let kind = DocblockTokenKind::float_borrowed("-1234.345");
    assert_eq!(kind.parse_float_value(), Some(Ok(-1234.345)));

    let kind = DocblockTokenKind::float_borrowed("1e3");
    assert_eq!(kind.parse_float_value(), Some(Ok(1000.0)));

    assert_eq!(DocblockTokenKind::integer_borrowed("1").parse_float_value(), None);
}

// =============================================================================
// String values
// =============================================================================

#[test]
fn parse_string_value_strips_quotes() {
    let kind = DocblockTokenKind::String(Cow::Borrowed("\"hello\""));
    assert_eq!(kind.parse_string_value().as_deref(), Some("hello"));

    let kind = DocblockTokenKind::String(Cow::Borrowed("\"\""));
    assert_eq!(kind.parse_string_value().as_deref(), Some(""));
}

/// A doubled quote is the only escape sequence; backslashes are literal.
#[test]
fn parse_string_value_unescapes_doubled_quotes() {
    let kind = DocblockTokenKind::string_borrowed("\"say \"\"hi\"\"\"");
    assert_eq!(kind.parse_string_value().as_deref(), Some("say \"hi\""));

    let kind = DocblockTokenKind::string_borrowed("\"C:\\path\\n\"");
    assert_eq!(kind.parse_string_value().as_deref(), Some("C:\\path\\n"));
}

#[test]
fn parse_string_value_on_non_string_is_none() {
    assert_eq!(DocblockTokenKind::identifier_borrowed("x").parse_string_value(), None);
}
