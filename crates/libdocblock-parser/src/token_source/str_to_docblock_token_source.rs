//! A [`DocblockTokenSource`](crate::token_source::DocblockTokenSource) that
//! lexes from a `&str` docblock.
//!
//! Docblocks are mostly prose. The lexer only produces tokens for the
//! characters that can take part in a directive and silently skips the rest
//! (whitespace, `/**`, leading `*`, sentence punctuation, non-ASCII text).
//! Everything before the first plausible directive start is skipped in a
//! single `memchr` scan.
//!
//! # Usage
//!
//! ```rust
//! use libdocblock_parser::token_source::StrDocblockTokenSource;
//!
//! let source = "/** Some prose. @Route(\"/home\") */";
//! for token in StrDocblockTokenSource::new(source) {
//!     println!("{:?}", token.kind);
//! }
//! // Output:
//! // At
//! // Identifier(Borrowed("Route"))
//! // ParenOpen
//! // String(Borrowed("\"/home\""))
//! // ParenClose
//! // Eof
//! ```

use crate::smallvec;
use crate::token::DocblockToken;
use crate::token::DocblockTokenKind;
use crate::DocblockErrorNote;
use crate::DocblockSourceSpan;
use crate::SourcePosition;

/// A lexer over `&str` docblock text producing zero-copy
/// [`DocblockToken`]s.
///
/// See module documentation for details.
pub struct StrDocblockTokenSource<'src> {
    /// The full docblock text being lexed.
    source: &'src str,

    /// Current byte offset from the start of `source`.
    curr_byte_offset: usize,

    /// Current 0-based line number.
    curr_line: usize,

    /// Current UTF-8 character column (0-based).
    curr_col_utf8: usize,

    /// Whether the previous character was `\r` (so a following `\n` does not
    /// start a second line).
    last_char_was_cr: bool,

    /// Whether the leading prose has already been skipped.
    started: bool,

    /// Whether the EOF token has been emitted.
    finished: bool,
}

impl<'src> StrDocblockTokenSource<'src> {
    /// Creates a new token source from a string slice.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 0,
            curr_col_utf8: 0,
            last_char_was_cr: false,
            started: false,
            finished: false,
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.curr_byte_offset..]
    }

    fn curr_position(&self) -> SourcePosition {
        SourcePosition::new(self.curr_line, self.curr_col_utf8, self.curr_byte_offset)
    }

    fn peek_char(&self) -> Option<char> {
        self.peek_char_nth(0)
    }

    fn peek_char_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes the next character and updates position tracking.
    ///
    /// `\n`, `\r` and `\r\n` each count as a single line break.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;

        if ch == '\n' {
            if self.last_char_was_cr {
                self.last_char_was_cr = false;
            } else {
                self.curr_line += 1;
                self.curr_col_utf8 = 0;
            }
        } else if ch == '\r' {
            self.curr_line += 1;
            self.curr_col_utf8 = 0;
            self.last_char_was_cr = true;
        } else {
            self.curr_col_utf8 += 1;
            self.last_char_was_cr = false;
        }

        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    fn make_span(&self, start: SourcePosition) -> DocblockSourceSpan {
        DocblockSourceSpan::new(start, self.curr_position())
    }

    /// Returns `true` if the character right before `byte_offset` is
    /// whitespace or `*`, or if `byte_offset` is the start of input.
    fn is_after_separator(&self, byte_offset: usize) -> bool {
        match self.source[..byte_offset].chars().next_back() {
            None => true,
            Some(ch) => ch == '*' || ch.is_whitespace(),
        }
    }

    fn make_token(
        &self,
        kind: DocblockTokenKind<'src>,
        start: SourcePosition,
    ) -> DocblockToken<'src> {
        let follows_separator = self.is_after_separator(start.byte_offset());
        DocblockToken {
            kind,
            span: self.make_span(start),
            follows_separator,
        }
    }

    // =========================================================================
    // Leading prose
    // =========================================================================

    /// Jumps to the first `@` that could start a top-level directive, or to
    /// the end of input if there is none.
    fn skip_leading_prose(&mut self) {
        let bytes = self.source.as_bytes();
        let target = memchr::memchr_iter(b'@', bytes)
            .find(|&idx| {
                self.is_after_separator(idx)
                    && self.source[idx + 1..]
                        .chars()
                        .next()
                        .is_some_and(|ch| ch == '\\' || is_identifier_start(ch))
            })
            .unwrap_or(bytes.len());
        self.advance_to(target);
    }

    /// Moves the cursor forward to `target` without producing tokens,
    /// keeping line and column bookkeeping accurate.
    fn advance_to(&mut self, target: usize) {
        let skipped = &self.source[self.curr_byte_offset..target];
        if skipped.is_empty() {
            return;
        }
        let bytes = skipped.as_bytes();

        let mut last_line_start = None;
        for idx in memchr::memchr2_iter(b'\n', b'\r', bytes) {
            let prev_was_cr = if idx == 0 {
                self.last_char_was_cr
            } else {
                bytes[idx - 1] == b'\r'
            };
            if !(bytes[idx] == b'\n' && prev_was_cr) {
                self.curr_line += 1;
            }
            last_line_start = Some(idx + 1);
        }

        match last_line_start {
            Some(line_start) => {
                self.curr_col_utf8 = skipped[line_start..].chars().count();
            },
            None => {
                self.curr_col_utf8 += skipped.chars().count();
            },
        }
        self.last_char_was_cr = bytes.last() == Some(&b'\r');
        self.curr_byte_offset = target;
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn next_token(&mut self) -> DocblockToken<'src> {
        if !self.started {
            self.started = true;
            self.skip_leading_prose();
        }

        loop {
            let start = self.curr_position();

            match self.peek_char() {
                None => return self.make_token(DocblockTokenKind::Eof, start),

                Some('@') => {
                    let starts_name = self
                        .peek_char_nth(1)
                        .is_some_and(|ch| ch == '\\' || is_identifier_start(ch));
                    self.consume();
                    if starts_name {
                        return self.make_token(DocblockTokenKind::At, start);
                    }
                },

                Some('(') => return self.lex_punctuator(DocblockTokenKind::ParenOpen, start),
                Some(')') => return self.lex_punctuator(DocblockTokenKind::ParenClose, start),
                Some('{') => return self.lex_punctuator(DocblockTokenKind::CurlyBraceOpen, start),
                Some('}') => return self.lex_punctuator(DocblockTokenKind::CurlyBraceClose, start),
                Some(',') => return self.lex_punctuator(DocblockTokenKind::Comma, start),
                Some('=') => return self.lex_punctuator(DocblockTokenKind::Equals, start),
                Some(':') => return self.lex_punctuator(DocblockTokenKind::Colon, start),

                Some('"') => return self.lex_string(start),

                Some('\\') => {
                    if self.peek_char_nth(1).is_some_and(is_identifier_start) {
                        return self.lex_identifier(start);
                    }
                    return self.lex_punctuator(DocblockTokenKind::NamespaceSeparator, start);
                },

                Some(ch) if is_identifier_start(ch) => return self.lex_identifier(start),

                Some(ch) if ch.is_ascii_digit() => return self.lex_number(start),

                Some(sign @ ('-' | '+')) => {
                    if self.peek_char_nth(1).is_some_and(|ch| ch.is_ascii_digit()) {
                        return self.lex_number(start);
                    }
                    if sign == '-' {
                        return self.lex_punctuator(DocblockTokenKind::Minus, start);
                    }
                    self.consume();
                },

                // Prose, decoration and whitespace.
                Some(_) => {
                    self.consume();
                },
            }
        }
    }

    fn lex_punctuator(
        &mut self,
        kind: DocblockTokenKind<'src>,
        start: SourcePosition,
    ) -> DocblockToken<'src> {
        self.consume();
        self.make_token(kind, start)
    }

    // =========================================================================
    // Identifier lexing
    // =========================================================================

    /// Lexes an identifier or reserved word.
    ///
    /// Identifiers match `[A-Za-z_\\][A-Za-z0-9_\\]*`, and a `::` followed by
    /// an identifier-start character continues the identifier so that
    /// `Foo::BAR` and `Foo::class` come out as a single token.
    fn lex_identifier(&mut self, start: SourcePosition) -> DocblockToken<'src> {
        let ident_start = self.curr_byte_offset;
        self.consume();

        loop {
            match self.peek_char() {
                Some(ch) if is_identifier_continue(ch) => {
                    self.consume();
                },
                Some(':')
                    if self.peek_char_nth(1) == Some(':')
                        && self.peek_char_nth(2).is_some_and(is_identifier_start) =>
                {
                    self.consume();
                    self.consume();
                },
                _ => break,
            }
        }

        let ident = &self.source[ident_start..self.curr_byte_offset];
        let kind = if ident.eq_ignore_ascii_case("true") {
            DocblockTokenKind::True
        } else if ident.eq_ignore_ascii_case("false") {
            DocblockTokenKind::False
        } else if ident.eq_ignore_ascii_case("null") {
            DocblockTokenKind::Null
        } else {
            DocblockTokenKind::identifier_borrowed(ident)
        };

        self.make_token(kind, start)
    }

    // =========================================================================
    // Number lexing
    // =========================================================================

    /// Lexes an integer or float literal.
    ///
    /// Handles:
    /// - Optional sign: `+` or `-`
    /// - Integer digits: `[0-9]+`
    /// - Optional decimal part: `.[0-9]+`
    /// - Optional exponent: `[eE][+-]?[0-9]+`
    ///
    /// The literal is a float iff it has a decimal part or an exponent.
    fn lex_number(&mut self, start: SourcePosition) -> DocblockToken<'src> {
        let num_start = self.curr_byte_offset;
        let mut is_float = false;

        if matches!(self.peek_char(), Some('-' | '+')) {
            self.consume();
        }
        self.consume_digits();

        if self.peek_char() == Some('.') && self.peek_char_nth(1).is_some_and(|ch| ch.is_ascii_digit()) {
            is_float = true;
            self.consume();
            self.consume_digits();
        }

        if matches!(self.peek_char(), Some('e' | 'E')) {
            let exponent_digits_at = match self.peek_char_nth(1) {
                Some('+' | '-') => 2,
                _ => 1,
            };
            if self.peek_char_nth(exponent_digits_at).is_some_and(|ch| ch.is_ascii_digit()) {
                is_float = true;
                for _ in 0..exponent_digits_at {
                    self.consume();
                }
                self.consume_digits();
            }
        }

        let num_text = &self.source[num_start..self.curr_byte_offset];
        let kind = if is_float {
            DocblockTokenKind::float_borrowed(num_text)
        } else {
            DocblockTokenKind::integer_borrowed(num_text)
        };

        self.make_token(kind, start)
    }

    fn consume_digits(&mut self) {
        while self.peek_char().is_some_and(|ch| ch.is_ascii_digit()) {
            self.consume();
        }
    }

    // =========================================================================
    // String lexing
    // =========================================================================

    /// Lexes a `"..."` string literal in which `""` stands for one `"`.
    ///
    /// Strings may span lines. An unterminated string produces an error
    /// token covering just the opening quote; lexing resumes right after it
    /// so that a stray quote in prose does not swallow later directives.
    fn lex_string(&mut self, start: SourcePosition) -> DocblockToken<'src> {
        let str_start = self.curr_byte_offset;
        let rest = &self.source[str_start + 1..];

        let mut search_from = 0;
        let closing_quote = loop {
            match memchr::memchr(b'"', &rest.as_bytes()[search_from..]) {
                None => break None,
                Some(rel) => {
                    let idx = search_from + rel;
                    if rest.as_bytes().get(idx + 1) == Some(&b'"') {
                        search_from = idx + 2;
                    } else {
                        break Some(idx);
                    }
                },
            }
        };

        match closing_quote {
            Some(idx) => {
                let str_end = str_start + 1 + idx + 1;
                self.consume();
                self.advance_to(str_end - 1);
                self.consume();
                let string_text = &self.source[str_start..str_end];
                self.make_token(DocblockTokenKind::string_borrowed(string_text), start)
            },
            None => {
                self.consume();
                let span = self.make_span(start.clone());
                DocblockToken {
                    kind: DocblockTokenKind::error(
                        "Unterminated string literal",
                        smallvec![
                            DocblockErrorNote::general_with_span("String started here", span),
                            DocblockErrorNote::help("Add closing `\"` (write `\"\"` for a literal quote)"),
                        ],
                    ),
                    span: self.make_span(start.clone()),
                    follows_separator: self.is_after_separator(start.byte_offset()),
                }
            },
        }
    }
}

// =============================================================================
// Iterator implementation
// =============================================================================

impl<'src> Iterator for StrDocblockTokenSource<'src> {
    type Item = DocblockToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();

        if matches!(token.kind, DocblockTokenKind::Eof) {
            self.finished = true;
        }

        Some(token)
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Returns `true` if `ch` can start an identifier (the leading `\` of a
/// fully-qualified name is handled separately).
fn is_identifier_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

/// Returns `true` if `ch` can continue an identifier.
fn is_identifier_continue(ch: char) -> bool {
    ch == '_' || ch == '\\' || ch.is_ascii_alphanumeric()
}
