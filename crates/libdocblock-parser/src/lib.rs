//! The lexing layer of the docblock directive toolchain.
//!
//! This crate turns free-form comment text into a stream of positioned
//! [`DocblockToken`](token::DocblockToken)s. Prose, comment decoration
//! (`/**`, `*`, `*/`) and any `@` that does not look like the start of a
//! directive are skipped, so a consumer only ever sees the tokens that make
//! up `@Name(...)` directives and their argument values.
//!
//! The recursive descent grammar that consumes these tokens lives in
//! `libdocblock-core`, next to the name resolution and schema validation it
//! has to interleave with.

mod docblock_error_note;
mod docblock_error_note_kind;
mod docblock_parse_error;
mod docblock_parse_error_kind;
mod docblock_source_span;
mod docblock_token_stream;
mod source_position;
pub mod token;
pub mod token_source;

pub use docblock_error_note::DocblockErrorNote;
pub use docblock_error_note::DocblockErrorNotes;
pub use docblock_error_note_kind::DocblockErrorNoteKind;
pub use docblock_parse_error::DocblockParseError;
pub use docblock_parse_error_kind::DocblockParseErrorKind;
pub use docblock_source_span::DocblockSourceSpan;
pub use docblock_token_stream::DocblockTokenStream;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;

#[cfg(test)]
mod tests;
