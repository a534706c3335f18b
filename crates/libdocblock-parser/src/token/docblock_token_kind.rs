use crate::DocblockErrorNotes;
use std::borrow::Cow;
use std::num::ParseFloatError;
use std::num::ParseIntError;

/// The kind of a docblock token.
///
/// Literal values (`Integer`, `Float`, `String`) store only the raw source
/// text. The `'src` lifetime enables zero-copy lexing:
/// [`StrDocblockTokenSource`](crate::token_source::StrDocblockTokenSource)
/// borrows slices directly from the docblock via `Cow::Borrowed`.
///
/// # Signed numeric literals
///
/// `-12`, `+12` and `-1.5e3` are lexed as single numeric tokens. A `-` that
/// does not start a number is lexed as [`Minus`](Self::Minus), which the
/// parser uses to discard prose such as `@foo-bar`.
#[derive(Clone, Debug, PartialEq)]
pub enum DocblockTokenKind<'src> {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `@` immediately followed by an identifier-start character or `\`
    At,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `}`
    CurlyBraceClose,
    /// `{`
    CurlyBraceOpen,
    /// `=`
    Equals,
    /// `-` not followed by a digit
    Minus,
    /// A `\` that is not part of an identifier
    NamespaceSeparator,
    /// `)`
    ParenClose,
    /// `(`
    ParenOpen,

    // =========================================================================
    // Literals (raw source text only)
    // =========================================================================
    /// An identifier, possibly namespace-qualified (`Foo\Bar`, `\Foo`) and
    /// possibly carrying a member suffix (`Foo::BAR`, `Foo::class`).
    Identifier(Cow<'src, str>),

    /// Raw source text of an integer literal including an optional sign
    /// (e.g. `"-123"`, `"+4"`).
    Integer(Cow<'src, str>),

    /// Raw source text of a float literal including an optional sign
    /// (e.g. `"-1234.345"`, `"1e5"`).
    Float(Cow<'src, str>),

    /// Raw source text of a string literal, including the surrounding
    /// quotes (e.g. `"\"say \"\"hi\"\"\""`).
    ///
    /// Use [`parse_string_value()`](Self::parse_string_value) to get the
    /// unescaped content.
    String(Cow<'src, str>),

    // =========================================================================
    // Reserved words (case-insensitive in source)
    // =========================================================================
    True,
    False,
    Null,

    // =========================================================================
    // End of input
    // =========================================================================
    Eof,

    // =========================================================================
    // Lexer error
    // =========================================================================
    /// A lexer error (e.g. an unterminated string).
    Error {
        /// A human-readable error message.
        message: String,
        /// Optional notes providing additional context or suggestions.
        error_notes: DocblockErrorNotes,
    },
}

impl<'src> DocblockTokenKind<'src> {
    #[inline]
    pub fn identifier_borrowed(s: &'src str) -> Self {
        DocblockTokenKind::Identifier(Cow::Borrowed(s))
    }

    #[inline]
    pub fn identifier_owned(s: String) -> Self {
        DocblockTokenKind::Identifier(Cow::Owned(s))
    }

    #[inline]
    pub fn integer_borrowed(s: &'src str) -> Self {
        DocblockTokenKind::Integer(Cow::Borrowed(s))
    }

    #[inline]
    pub fn float_borrowed(s: &'src str) -> Self {
        DocblockTokenKind::Float(Cow::Borrowed(s))
    }

    #[inline]
    pub fn string_borrowed(s: &'src str) -> Self {
        DocblockTokenKind::String(Cow::Borrowed(s))
    }

    #[inline]
    pub fn error(message: impl Into<String>, error_notes: DocblockErrorNotes) -> Self {
        DocblockTokenKind::Error {
            message: message.into(),
            error_notes,
        }
    }

    /// Returns the string representation of this token if it is a
    /// punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            DocblockTokenKind::At => Some("@"),
            DocblockTokenKind::Colon => Some(":"),
            DocblockTokenKind::Comma => Some(","),
            DocblockTokenKind::CurlyBraceClose => Some("}"),
            DocblockTokenKind::CurlyBraceOpen => Some("{"),
            DocblockTokenKind::Equals => Some("="),
            DocblockTokenKind::Minus => Some("-"),
            DocblockTokenKind::NamespaceSeparator => Some("\\"),
            DocblockTokenKind::ParenClose => Some(")"),
            DocblockTokenKind::ParenOpen => Some("("),

            DocblockTokenKind::Identifier(_)
            | DocblockTokenKind::Integer(_)
            | DocblockTokenKind::Float(_)
            | DocblockTokenKind::String(_)
            | DocblockTokenKind::True
            | DocblockTokenKind::False
            | DocblockTokenKind::Null
            | DocblockTokenKind::Eof
            | DocblockTokenKind::Error { .. } => None,
        }
    }

    /// Returns `true` if this token is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Returns `true` if this token can name a directive or a namespace
    /// segment: an identifier or one of the reserved words.
    pub fn is_name_like(&self) -> bool {
        matches!(
            self,
            DocblockTokenKind::Identifier(_)
                | DocblockTokenKind::True
                | DocblockTokenKind::False
                | DocblockTokenKind::Null
        )
    }

    /// Returns the text of a name-like token (see
    /// [`is_name_like()`](Self::is_name_like)).
    pub fn name_text(&self) -> Option<&str> {
        match self {
            DocblockTokenKind::Identifier(s) => Some(s.as_ref()),
            DocblockTokenKind::True => Some("true"),
            DocblockTokenKind::False => Some("false"),
            DocblockTokenKind::Null => Some("null"),
            _ => None,
        }
    }

    /// Returns `true` if this token represents a lexer error.
    pub fn is_error(&self) -> bool {
        matches!(self, DocblockTokenKind::Error { .. })
    }

    /// Human-readable rendering used in "expected X, got Y" messages.
    pub fn display(&self) -> String {
        match self {
            DocblockTokenKind::Identifier(s)
            | DocblockTokenKind::Integer(s)
            | DocblockTokenKind::Float(s)
            | DocblockTokenKind::String(s) => s.to_string(),
            DocblockTokenKind::True => "true".to_string(),
            DocblockTokenKind::False => "false".to_string(),
            DocblockTokenKind::Null => "null".to_string(),
            DocblockTokenKind::Eof => "end of string".to_string(),
            DocblockTokenKind::Error { message, .. } => {
                format!("tokenization error: {message}")
            },
            punct => punct.as_punctuator_str().unwrap_or_default().to_string(),
        }
    }

    /// Parse an `Integer`'s raw text to `i64`.
    ///
    /// Returns `None` if this is not an `Integer`, or `Some(Err(...))` if
    /// parsing fails (overflow).
    pub fn parse_integer_value(&self) -> Option<Result<i64, ParseIntError>> {
        match self {
            DocblockTokenKind::Integer(raw) => Some(raw.parse()),
            _ => None,
        }
    }

    /// Parse a `Float`'s raw text to `f64`.
    pub fn parse_float_value(&self) -> Option<Result<f64, ParseFloatError>> {
        match self {
            DocblockTokenKind::Float(raw) => Some(raw.parse()),
            _ => None,
        }
    }

    /// Strip the surrounding quotes of a `String` and collapse each doubled
    /// `""` into a single `"`.
    pub fn parse_string_value(&self) -> Option<String> {
        match self {
            DocblockTokenKind::String(raw) => {
                let inner = raw
                    .strip_prefix('"')
                    .and_then(|s| s.strip_suffix('"'))
                    .unwrap_or(raw.as_ref());
                Some(inner.replace("\"\"", "\""))
            },
            _ => None,
        }
    }
}
