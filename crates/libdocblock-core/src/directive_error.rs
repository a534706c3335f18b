use libdocblock_parser::DocblockParseError;

pub type Result<T> = std::result::Result<T, DirectiveError>;

/// Every way parsing, resolving, validating or constructing a directive can
/// fail.
///
/// Each message embeds the caller-supplied `context` (e.g.
/// `property Foo::$bar`) so errors are locatable without a source map.
#[derive(Clone, Debug, thiserror::Error)]
pub enum DirectiveError {
    #[error("[Lexical Error] {message} at position {position}{}.", in_context(context))]
    Lexical {
        message: String,
        position: usize,
        context: String,
        detail: Box<DocblockParseError>,
    },

    #[error(
        "[Syntax Error] Expected {expected}, got {}{}.",
        describe_found(found.as_deref(), *position),
        in_context(context),
    )]
    Syntax {
        expected: String,
        /// `None` when the docblock ended.
        found: Option<String>,
        position: usize,
        context: String,
        detail: Box<DocblockParseError>,
    },

    #[error(
        "[Semantical Error] The directive \"@{name}\" in {context} was never imported. \
        Did you maybe forget to add an import for this directive?"
    )]
    NeverImported {
        name: String,
        context: String,
    },

    #[error(
        "[Semantical Error] The directive \"@{name}\" in {context} does not exist, or could not \
        be loaded."
    )]
    NotFound {
        name: String,
        context: String,
    },

    #[error(
        "[Semantical Error] The type \"{type_name}\" is not marked with @Annotation. Are you \
        sure this type can be used as a directive? If so, add @Annotation to the docblock of \
        \"{type_name}\". If it is not a directive, add \"{name}\" to the ignored names used \
        for {context}."
    )]
    NotADirectiveType {
        name: String,
        type_name: String,
        context: String,
    },

    #[error(
        "[Semantical Error] Directive @{name} is not allowed to be declared on {context}. You \
        may only use this directive on these code elements: {allowed}."
    )]
    TargetNotAllowed {
        name: String,
        context: String,
        allowed: String,
    },

    #[error(
        "[Creation Error] The directive @{directive} declared on {context} does not have a \
        property named \"{field}\". Available properties: {}",
        available.join(", "),
    )]
    UnknownField {
        directive: String,
        field: String,
        context: String,
        available: Vec<String>,
    },

    #[error(
        "[Type Error] Attribute \"{field}\" of @{directive} declared on {context} expects \
        {expected}. This value should not be null."
    )]
    RequiredField {
        directive: String,
        field: String,
        context: String,
        expected: String,
    },

    #[error(
        "[Type Error] Attribute \"{field}\" of @{directive} declared on {context} expects \
        {expected}, but got {actual}."
    )]
    TypeMismatch {
        directive: String,
        field: String,
        context: String,
        expected: String,
        actual: String,
    },

    #[error(
        "[Enum Error] Attribute \"{field}\" of @{directive} declared on {context} accepts only \
        [{}], but got {given}.",
        allowed.join(", "),
    )]
    EnumMismatch {
        directive: String,
        field: String,
        context: String,
        allowed: Vec<String>,
        given: String,
    },

    #[error(
        "[Creation Error] The directive @{directive} declared on {context} does not accept any \
        values, but got {given}."
    )]
    AcceptsNoValues {
        directive: String,
        context: String,
        given: String,
    },

    #[error("[Semantical Error] Couldn't find constant {name}{}.", in_context(context))]
    UnknownConstant {
        name: String,
        context: String,
    },

    #[error("[Semantical Error] Invalid directive type \"{type_name}\": {message}")]
    InvalidSchema {
        type_name: String,
        message: String,
    },

    #[error(
        "[Semantical Error] Directive type \"{type_name}\" refers to itself while its schema is \
        being built: {}",
        chain.join(" -> "),
    )]
    CyclicSchemaDefinition {
        type_name: String,
        chain: Vec<String>,
    },

    #[error("[Creation Error] Could not construct @{directive} declared on {context}: {message}")]
    Factory {
        directive: String,
        context: String,
        message: String,
    },
}
impl DirectiveError {
    /// The positioned lexer/parser error behind a `Lexical` or `Syntax`
    /// error, for snippet rendering.
    pub fn parse_error(&self) -> Option<&DocblockParseError> {
        match self {
            Self::Lexical { detail, .. } | Self::Syntax { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// Whether this is an unresolved-name or not-a-directive error, i.e. one
    /// that ignored names can suppress.
    pub fn is_suppressible(&self) -> bool {
        matches!(
            self,
            Self::NeverImported { .. } | Self::NotFound { .. } | Self::NotADirectiveType { .. }
        )
    }
}

fn in_context(context: &str) -> String {
    if context.is_empty() {
        String::new()
    } else {
        format!(" in {context}")
    }
}

fn describe_found(found: Option<&str>, position: usize) -> String {
    match found {
        None => "end of string".to_string(),
        Some(found) => format!("'{found}' at position {position}"),
    }
}
