use crate::DocblockErrorNote;
use crate::DocblockErrorNoteKind;
use crate::DocblockErrorNotes;
use crate::DocblockParseErrorKind;
use crate::DocblockSourceSpan;

/// A lexical or syntax error with location information and contextual
/// notes.
///
/// This structure provides error information for both human-readable CLI
/// output and programmatic handling by tools.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct DocblockParseError {
    /// Human-readable primary error message.
    ///
    /// Examples: "Expected `)`, got `name`", "Unterminated string"
    message: String,

    /// The primary span where the error was detected.
    ///
    /// - For "unexpected token" errors: the unexpected token's span
    /// - For "expected X" errors at the end of input: a zero-width span at
    ///   the end of the last consumed token
    span: DocblockSourceSpan,

    /// Categorized error kind for programmatic handling.
    kind: DocblockParseErrorKind,

    /// Additional notes providing context, suggestions, and related
    /// locations.
    notes: DocblockErrorNotes,
}

impl DocblockParseError {
    /// Creates a new parse error with no notes.
    pub fn new(
        message: impl Into<String>,
        span: DocblockSourceSpan,
        kind: DocblockParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind,
            notes: DocblockErrorNotes::new(),
        }
    }

    /// Creates a parse error from a lexer error token, preserving the
    /// lexer's message and notes.
    pub fn from_lexer_error(
        message: impl Into<String>,
        span: DocblockSourceSpan,
        lexer_notes: DocblockErrorNotes,
    ) -> Self {
        Self {
            message: message.into(),
            span,
            kind: DocblockParseErrorKind::LexerError,
            notes: lexer_notes,
        }
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the primary span where the error was detected.
    pub fn span(&self) -> &DocblockSourceSpan {
        &self.span
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &DocblockParseErrorKind {
        &self.kind
    }

    /// Returns the additional notes for this error.
    pub fn notes(&self) -> &DocblockErrorNotes {
        &self.notes
    }

    /// The byte offset of the error within the docblock.
    pub fn position(&self) -> usize {
        self.span.start_inclusive.byte_offset()
    }

    /// Adds a general note without a span.
    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(DocblockErrorNote::general(message));
    }

    /// Adds a help note without a span.
    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(DocblockErrorNote::help(message));
    }

    /// Formats this error as a diagnostic string for CLI output.
    ///
    /// Produces output like:
    /// ```text
    /// error: expected `)`, found `name`
    ///   --> 3:20
    ///    |
    ///  3 |  * @Route("/path" name="x")
    ///    |                   ^^^^
    ///    = help: separate arguments with `,`
    /// ```
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');

        let line = self.span.start_inclusive.line() + 1;
        let column = self.span.start_inclusive.col_utf8() + 1;
        output.push_str(&format!("  --> {line}:{column}\n"));

        if let Some(src) = source
            && let Some(snippet) = self.format_source_snippet(src)
        {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            let prefix = match note.kind {
                DocblockErrorNoteKind::General => "note",
                DocblockErrorNoteKind::Help => "help",
            };
            output.push_str(&format!("   = {prefix}: {}\n", note.message));
        }

        output
    }

    /// Formats this error as a single-line summary.
    ///
    /// Produces output like:
    /// ```text
    /// 3:20: error: expected `)`, found `name`
    /// ```
    pub fn format_oneline(&self) -> String {
        let line = self.span.start_inclusive.line() + 1;
        let column = self.span.start_inclusive.col_utf8() + 1;
        format!("{line}:{column}: error: {}", self.message)
    }

    fn format_source_snippet(&self, source: &str) -> Option<String> {
        let lines: Vec<&str> = source.lines().collect();
        let line_num = self.span.start_inclusive.line();
        if line_num >= lines.len() {
            return None;
        }

        let line_content = lines[line_num];
        let display_line_num = line_num + 1;
        let line_num_width = display_line_num.to_string().len().max(2);

        let mut output = String::new();
        output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
        output.push_str(&format!(
            "{display_line_num:>line_num_width$} | {line_content}\n"
        ));

        let col_start = self.span.start_inclusive.col_utf8();
        let col_end = if self.span.end_exclusive.line() == line_num {
            self.span.end_exclusive.col_utf8()
        } else {
            col_start + 1
        };
        let underline_len = if col_end > col_start {
            col_end - col_start
        } else {
            1
        };
        output.push_str(&format!(
            "{:>width$} | {:>padding$}{}\n",
            "",
            "",
            "^".repeat(underline_len),
            width = line_num_width,
            padding = col_start
        ));

        Some(output)
    }
}
