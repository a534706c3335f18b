use crate::DocblockErrorNoteKind;
use crate::DocblockSourceSpan;
use crate::SmallVec;

/// An error note providing additional context about an error.
///
/// Notes augment the primary error message with explanatory context, an
/// actionable suggestion, or a related source location (e.g. where an
/// unterminated string was opened).
#[derive(Debug, Clone, PartialEq)]
pub struct DocblockErrorNote {
    /// The kind of note (determines rendering prefix).
    pub kind: DocblockErrorNoteKind,

    /// The note message.
    pub message: String,

    /// Optional span pointing to a related location.
    pub span: Option<DocblockSourceSpan>,
}

impl DocblockErrorNote {
    /// Creates a general note without a span.
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            kind: DocblockErrorNoteKind::General,
            message: message.into(),
            span: None,
        }
    }

    /// Creates a general note with a span.
    pub fn general_with_span(message: impl Into<String>, span: DocblockSourceSpan) -> Self {
        Self {
            kind: DocblockErrorNoteKind::General,
            message: message.into(),
            span: Some(span),
        }
    }

    /// Creates a help note without a span.
    pub fn help(message: impl Into<String>) -> Self {
        Self {
            kind: DocblockErrorNoteKind::Help,
            message: message.into(),
            span: None,
        }
    }
}

/// Type alias for error notes.
///
/// Uses SmallVec since most errors have 0-2 notes, avoiding heap
/// allocation in the common case.
pub type DocblockErrorNotes = SmallVec<[DocblockErrorNote; 2]>;
