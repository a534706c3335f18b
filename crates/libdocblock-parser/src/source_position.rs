/// Source position information for lexing and parsing.
///
/// This is a pure data struct with no mutation methods. Lexers are
/// responsible for computing position values as they scan input.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the docblock
/// - `col_utf8`: UTF-8 character count within the current line
/// - `byte_offset`: byte offset within the whole docblock text
///
/// Error messages that follow the classic "at position N" convention report
/// `byte_offset`; human-facing diagnostics add 1 to `line` and `col_utf8`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SourcePosition {
    /// Line number (0-based: first line is 0)
    line: usize,

    /// UTF-8 character count within current line (0-based)
    col_utf8: usize,

    /// Byte offset from start of the docblock (0-based)
    byte_offset: usize,
}

impl SourcePosition {
    /// Create a new SourcePosition.
    pub fn new(line: usize, col_utf8: usize, byte_offset: usize) -> Self {
        Self {
            line,
            col_utf8,
            byte_offset,
        }
    }

    /// The position of the very first character of a document.
    pub fn start() -> Self {
        Self::new(0, 0, 0)
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based (UTF-8) character count within the current line.
    ///
    /// This increments by 1 for each character regardless of byte
    /// representation.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based byte offset from the start of the docblock.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
