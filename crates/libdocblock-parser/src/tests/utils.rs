//! Various test utils.

use crate::smallvec;
use crate::token::DocblockToken;
use crate::token::DocblockTokenKind;
use crate::DocblockSourceSpan;
use crate::SourcePosition;

/// Creates a mock token with the given kind and a zero-width span.
///
/// Uses `'static` lifetime since test tokens use owned strings.
pub fn mock_token(kind: DocblockTokenKind<'static>) -> DocblockToken<'static> {
    DocblockToken::new(kind, DocblockSourceSpan::empty_at(SourcePosition::start()))
}

pub fn mock_identifier_token(name: &str) -> DocblockToken<'static> {
    mock_token(DocblockTokenKind::identifier_owned(name.to_string()))
}

pub fn mock_eof_token() -> DocblockToken<'static> {
    mock_token(DocblockTokenKind::Eof)
}

pub fn mock_error_token(message: &str) -> DocblockToken<'static> {
    mock_token(DocblockTokenKind::error(message, smallvec![]))
}

/// A mock token source that produces tokens from a Vec.
pub struct MockTokenSource {
    tokens: std::vec::IntoIter<DocblockToken<'static>>,
}

impl MockTokenSource {
    pub fn new(tokens: Vec<DocblockToken<'static>>) -> Self {
        Self {
            tokens: tokens.into_iter(),
        }
    }
}

impl Iterator for MockTokenSource {
    type Item = DocblockToken<'static>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next()
    }
}
