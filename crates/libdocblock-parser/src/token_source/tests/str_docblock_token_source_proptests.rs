//! Property tests: the lexer must terminate, stay on char boundaries and
//! produce monotonically increasing spans for arbitrary input.

use crate::token::DocblockTokenKind;
use crate::token_source::StrDocblockTokenSource;
use proptest::prelude::*;

proptest! {
    #[test]
    fn lexing_always_ends_with_a_single_eof(source in any::<String>()) {
        let kinds: Vec<_> = StrDocblockTokenSource::new(&source).map(|t| t.kind).collect();
        prop_assert_eq!(kinds.last(), Some(&DocblockTokenKind::Eof));
        prop_assert_eq!(
            kinds.iter().filter(|k| **k == DocblockTokenKind::Eof).count(),
            1
        );
    }

    #[test]
    fn spans_are_ordered_and_on_char_boundaries(
        source in "[ *@a-zA-Z0-9_\\\\:(){}=,\"\\-+.\n\ré]{0,64}"
    ) {
        let mut prev_end = 0;
        for token in StrDocblockTokenSource::new(&source) {
            let start = token.span.start_inclusive.byte_offset();
            let end = token.span.end_exclusive.byte_offset();
            prop_assert!(start >= prev_end);
            prop_assert!(end >= start);
            prop_assert!(source.is_char_boundary(start));
            prop_assert!(source.is_char_boundary(end));
            prev_end = end;
        }
    }

    /// Literal tokens borrow exactly the source text they span.
    #[test]
    fn literal_text_matches_span(
        source in "@A\\((-?[0-9]{1,6}(\\.[0-9]{1,3})?|\"[a-z \"]{0,8}\"|[A-Za-z_]{1,8})(, ?(-?[0-9]{1,6}|[A-Za-z_]{1,8}))*\\)"
    ) {
        for token in StrDocblockTokenSource::new(&source) {
            let text = &source[token.span.start_inclusive.byte_offset()..token.span.end_exclusive.byte_offset()];
            match &token.kind {
                DocblockTokenKind::Identifier(s)
                | DocblockTokenKind::Integer(s)
                | DocblockTokenKind::Float(s)
                | DocblockTokenKind::String(s) => prop_assert_eq!(s.as_ref(), text),
                _ => {},
            }
        }
    }
}
