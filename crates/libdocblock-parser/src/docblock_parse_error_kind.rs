/// Categorizes lexical and syntax errors for programmatic handling.
///
/// Each variant contains minimal data needed for programmatic decisions.
/// Human-readable context belongs in the `notes` field of
/// [`DocblockParseError`](crate::DocblockParseError).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DocblockParseErrorKind {
    /// Expected specific token(s) but found something else.
    ///
    /// # Example
    /// ```text
    /// @Route("/path" name="x")
    ///                ^^^^ expected `)`, found `name`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        /// What was expected (e.g. `["PlainValue"]`, `[")"]`).
        expected: Vec<String>,
        /// Description of what was found.
        found: String,
    },

    /// The docblock ended before a directive was complete.
    ///
    /// # Example
    /// ```text
    /// @Route("/path",
    ///                ^ expected `)`, found end of docblock
    /// ```
    #[error("unexpected end of docblock")]
    UnexpectedEof {
        /// What was expected when the end was reached.
        expected: Vec<String>,
    },

    /// The lexer produced an error token (e.g. an unterminated string).
    ///
    /// The lexer's message and notes are preserved in the parent error.
    #[error("lexer error")]
    LexerError,

    /// A literal could not be converted to its value (e.g. an integer that
    /// overflows `i64`).
    #[error("invalid value: `{raw}`")]
    InvalidValue {
        /// The raw source text of the literal.
        raw: String,
    },

    /// Directives and arrays nested deeper than the parser allows.
    #[error("maximum nesting depth exceeded")]
    NestingTooDeep,
}
