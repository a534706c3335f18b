use crate::token::DocblockTokenKind;
use crate::DocblockSourceSpan;

/// A docblock token with location (span) information.
#[derive(Clone, Debug, PartialEq)]
pub struct DocblockToken<'src> {
    /// The kind of token (including Error for lexer errors).
    pub kind: DocblockTokenKind<'src>,

    /// The source location span of this token.
    pub span: DocblockSourceSpan,

    /// Whether this token is preceded by whitespace, a `*`, or the start of
    /// the input.
    ///
    /// A top-level `@` only starts a directive when this is `true`, which is
    /// how `user@example.com` in prose is told apart from `@Example`.
    pub follows_separator: bool,
}

impl<'src> DocblockToken<'src> {
    /// Convenience constructor for a token that follows a separator.
    pub fn new(kind: DocblockTokenKind<'src>, span: DocblockSourceSpan) -> Self {
        Self {
            kind,
            span,
            follows_separator: true,
        }
    }

    /// Returns `true` if `next` starts exactly where this token ends.
    pub fn is_adjacent_to(&self, next: &DocblockToken<'_>) -> bool {
        self.span.is_immediately_followed_by(&next.span)
    }
}
