//! Tests for DocblockTokenStream.

use crate::tests::utils;
use crate::token::DocblockTokenKind;
use crate::token_source::StrDocblockTokenSource;
use crate::DocblockTokenStream;

// =============================================================================
// Basic functionality tests
// =============================================================================

/// Verifies that peek() returns the next token without consuming it.
#[test]
fn peek_without_consuming() {
    let tokens = vec![
        utils::mock_identifier_token("Route"),
        utils::mock_identifier_token("name"),
        utils::mock_eof_token(),
    ];
    let mut stream = DocblockTokenStream::new(utils::MockTokenSource::new(tokens));

    let first_peek = stream.peek().map(|t| t.kind.clone());
    let second_peek = stream.peek().map(|t| t.kind.clone());
    assert_eq!(first_peek, second_peek);
    assert!(matches!(first_peek, Some(DocblockTokenKind::Identifier(ref n)) if n == "Route"));

    let consumed = stream.consume().map(|t| t.kind);
    assert_eq!(first_peek, consumed);
}

#[test]
fn consume_advances() {
    let tokens = vec![
        utils::mock_identifier_token("a"),
        utils::mock_identifier_token("b"),
        utils::mock_eof_token(),
    ];
    let mut stream = DocblockTokenStream::new(utils::MockTokenSource::new(tokens));

    stream.consume();
    let next = stream.peek().map(|t| t.kind.clone());
    assert!(matches!(next, Some(DocblockTokenKind::Identifier(n)) if n == "b"));
}

/// `peek_nth` buffers exactly as many tokens as needed.
#[test]
fn peek_nth_fills_buffer_lazily() {
    let mut stream = DocblockTokenStream::new(StrDocblockTokenSource::new("@A(x = 1)"));
    assert_eq!(stream.current_buffer_len(), 0);

    assert_eq!(stream.peek_nth(3).map(|t| t.kind.clone()), Some(DocblockTokenKind::identifier_borrowed("x")));
    assert_eq!(stream.current_buffer_len(), 4);

    assert_eq!(stream.peek().map(|t| t.kind.clone()), Some(DocblockTokenKind::At));
    assert_eq!(stream.current_buffer_len(), 4);
}

#[test]
fn peek_past_end_is_none() {
    let mut stream = DocblockTokenStream::new(utils::MockTokenSource::new(vec![
        utils::mock_eof_token(),
    ]));
    assert!(stream.peek_nth(1).is_none());
    assert!(stream.peek().is_some());
}

// =============================================================================
// End-of-stream detection
// =============================================================================

#[test]
fn is_at_end_on_eof_token() {
    let mut stream = DocblockTokenStream::new(utils::MockTokenSource::new(vec![
        utils::mock_error_token("boom"),
        utils::mock_eof_token(),
    ]));
    assert!(!stream.is_at_end());
    stream.consume();
    assert!(stream.is_at_end());
    stream.consume();
    assert!(stream.is_at_end());
    assert!(stream.consume().is_none());
}
