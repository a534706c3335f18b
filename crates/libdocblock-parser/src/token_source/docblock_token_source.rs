use crate::token::DocblockToken;

/// Marker trait for [`DocblockToken`] lexers (iterators that generate
/// [`DocblockToken`]).
///
/// [`StrDocblockTokenSource`](crate::token_source::StrDocblockTokenSource)
/// is the lexer over `&str` docblock text. Tests and tools can feed a
/// [`DocblockTokenStream`](crate::DocblockTokenStream) from any other
/// iterator of tokens (e.g. a pre-lexed `Vec<DocblockToken>`).
///
/// Lexers are responsible for:
/// - Skipping prose, whitespace and comment decoration
/// - Emitting [`DocblockTokenKind::Error`](crate::token::DocblockTokenKind::Error)
///   for lexer errors
/// - Emitting a final [`DocblockTokenKind::Eof`](crate::token::DocblockTokenKind::Eof)
///   token
pub trait DocblockTokenSource<'src>: Iterator<Item = DocblockToken<'src>> {}

impl<'src, T> DocblockTokenSource<'src> for T where T: Iterator<Item = DocblockToken<'src>> {}
