//! Tests for `DocblockToken` construction and adjacency.

use crate::token::DocblockToken;
use crate::token::DocblockTokenKind;
use crate::DocblockSourceSpan;
use crate::SourcePosition;

fn span(start: usize, end: usize) -> DocblockSourceSpan {
    DocblockSourceSpan::new(
        SourcePosition::new(0, start, start),
        SourcePosition::new(0, end, end),
    )
}

/// `DocblockToken::new()` is the convenience constructor for tokens that
/// follow whitespace.
#[test]
fn new_marks_token_as_following_separator() {
    let token = DocblockToken::new(DocblockTokenKind::At, span(0, 1));
    assert!(token.follows_separator);
    assert_eq!(token.span, span(0, 1));
}

#[test]
fn adjacency_is_byte_exact() {
    let name = DocblockToken::new(DocblockTokenKind::identifier_borrowed("foo"), span(1, 4));
    let dash = DocblockToken::new(DocblockTokenKind::Minus, span(4, 5));
    let spaced_dash = DocblockToken::new(DocblockTokenKind::Minus, span(5, 6));

    assert!(name.is_adjacent_to(&dash));
    assert!(!name.is_adjacent_to(&spaced_dash));
}
