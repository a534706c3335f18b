use crate::SourcePosition;

/// Represents a span of docblock text from start to end position.
///
/// The span is a half-open interval: `[start_inclusive, end_exclusive)`.
/// - `start_inclusive`: Position of the first character of the source text
/// - `end_exclusive`: Position immediately after the last character
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DocblockSourceSpan {
    pub start_inclusive: SourcePosition,
    pub end_exclusive: SourcePosition,
}

impl DocblockSourceSpan {
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self {
            start_inclusive: start,
            end_exclusive: end,
        }
    }

    /// A zero-width span at `pos`.
    pub fn empty_at(pos: SourcePosition) -> Self {
        Self {
            start_inclusive: pos.clone(),
            end_exclusive: pos,
        }
    }

    /// Length of the spanned text in bytes.
    pub fn byte_len(&self) -> usize {
        self.end_exclusive.byte_offset() - self.start_inclusive.byte_offset()
    }

    /// Returns `true` if `other` starts exactly where this span ends (no
    /// characters of any kind in between).
    pub fn is_immediately_followed_by(&self, other: &DocblockSourceSpan) -> bool {
        self.end_exclusive.byte_offset() == other.start_inclusive.byte_offset()
    }
}
