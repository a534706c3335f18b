//! Tests for line/column/byte bookkeeping in `StrDocblockTokenSource`,
//! including the fast skip over leading prose.

use crate::token::DocblockToken;
use crate::token::DocblockTokenKind;
use crate::token_source::StrDocblockTokenSource;

fn first_at(source: &str) -> DocblockToken<'_> {
    StrDocblockTokenSource::new(source)
        .find(|t| t.kind == DocblockTokenKind::At)
        .expect("source should contain a directive")
}

fn position(token: &DocblockToken<'_>) -> (usize, usize, usize) {
    let start = &token.span.start_inclusive;
    (start.line(), start.col_utf8(), start.byte_offset())
}

#[test]
fn directive_at_start_of_input() {
    assert_eq!(position(&first_at("@Foo")), (0, 0, 0));
}

/// The skipped prefix `/**\n * ` ends on line 1 at column 3.
#[test]
fn directive_after_skipped_prose() {
    assert_eq!(position(&first_at("/**\n * @Foo\n */")), (1, 3, 7));
}

#[test]
fn crlf_counts_as_one_line_break() {
    assert_eq!(position(&first_at("/**\r\n * @Foo")), (1, 3, 8));
    assert_eq!(position(&first_at("/**\r\r * @Foo")), (2, 3, 8));
}

/// Columns count characters, not bytes.
#[test]
fn columns_count_characters() {
    let at = first_at("/** héllo wörld @Foo */");
    assert_eq!(at.span.start_inclusive.col_utf8(), 16);
    assert_eq!(at.span.start_inclusive.byte_offset(), 18);
}

#[test]
fn positions_after_first_directive() {
    let toks: Vec<_> = StrDocblockTokenSource::new("@Foo\n  @Bar").collect();
    let bar_at = &toks[2];
    assert_eq!(bar_at.kind, DocblockTokenKind::At);
    assert_eq!(position(bar_at), (1, 2, 7));
    assert_eq!(toks[3].span.end_exclusive.col_utf8(), 6);
}

#[test]
fn eof_span_is_at_end_of_input() {
    let toks: Vec<_> = StrDocblockTokenSource::new("@A\n").collect();
    let eof = toks.last().expect("eof token");
    assert_eq!(eof.kind, DocblockTokenKind::Eof);
    assert_eq!(position(eof), (1, 0, 3));
    assert_eq!(eof.span.byte_len(), 0);
}
