use crate::builder::DirectiveBuilder;
use crate::host::TypeCatalog;
use crate::parser::DirectiveArguments;
use crate::parser::DirectiveReference;
use crate::parser::ParserOptions;
use crate::parser::MAX_NESTING_DEPTH;
use crate::resolve::ImportTable;
use crate::resolve::NameResolver;
use crate::resolve::ResolveFailure;
use crate::schema::SchemaLookup;
use crate::schema::SchemaRegistry;
use crate::value::next_map_index;
use crate::DirectiveError;
use crate::DirectiveInstance;
use crate::DirectiveTarget;
use crate::Result;
use crate::Session;
use crate::Value;
use indexmap::IndexMap;
use libdocblock_parser::token::DocblockToken;
use libdocblock_parser::token::DocblockTokenKind;
use libdocblock_parser::token_source::StrDocblockTokenSource;
use libdocblock_parser::DocblockParseError;
use libdocblock_parser::DocblockParseErrorKind;
use libdocblock_parser::DocblockSourceSpan;
use libdocblock_parser::DocblockTokenStream;
use libdocblock_parser::SourcePosition;

/// Extracts, resolves, validates and constructs the directives of a
/// docblock.
///
/// A parser is cheap to create and holds no cursor state: every call to
/// [`parse()`](Self::parse) lexes its docblock with a fresh token stream, so
/// the nested parses the schema registry runs while an outer parse is
/// mid-stream never share tokens with it.
pub struct DocblockParser<'a> {
    session: &'a Session,
    catalog: &'a dyn TypeCatalog,
    options: ParserOptions,
    schema_chain: Vec<String>,
}
impl<'a> DocblockParser<'a> {
    pub fn new(session: &'a Session, catalog: &'a dyn TypeCatalog) -> Self {
        Self {
            session,
            catalog,
            options: ParserOptions::default(),
            schema_chain: vec![],
        }
    }

    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    /// The directive types whose schemas are being built by the parses that
    /// (transitively) created this parser.
    pub(crate) fn with_schema_chain(mut self, schema_chain: Vec<String>) -> Self {
        self.schema_chain = schema_chain;
        self
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parses every directive in `docblock`, as declared on a `target`
    /// element. `context` (e.g. `property App\Entity::$name`) is embedded in
    /// error messages.
    pub fn parse(
        &self,
        docblock: &str,
        imports: &ImportTable,
        target: DirectiveTarget,
        context: &str,
    ) -> Result<Vec<DirectiveInstance>> {
        ParseRun::new(self, docblock, imports, target, context).parse_directives()
    }

    /// Parses the first directive in `docblock` as if it appeared inside
    /// another directive's arguments.
    ///
    /// Returns [`Value::Null`] if that directive is ignored.
    pub fn parse_nested(
        &self,
        docblock: &str,
        imports: &ImportTable,
        context: &str,
    ) -> Result<Value> {
        ParseRun::new(self, docblock, imports, DirectiveTarget::NestedDirective, context)
            .parse_first_nested()
    }

    fn is_ignored(&self, name: &str) -> bool {
        self.session.is_ignored(name) || self.options.ignores(name)
    }
}

/// The state of one [`DocblockParser::parse()`] call.
struct ParseRun<'p, 'a, 'src> {
    parser: &'p DocblockParser<'a>,
    imports: &'p ImportTable,
    context: &'p str,
    target: DirectiveTarget,
    tokens: DocblockTokenStream<'src, StrDocblockTokenSource<'src>>,
    depth: usize,
    last_end: SourcePosition,
}
impl<'p, 'a, 'src> ParseRun<'p, 'a, 'src> {
    fn new(
        parser: &'p DocblockParser<'a>,
        docblock: &'src str,
        imports: &'p ImportTable,
        target: DirectiveTarget,
        context: &'p str,
    ) -> Self {
        Self {
            parser,
            imports,
            context,
            target,
            tokens: DocblockTokenStream::new(StrDocblockTokenSource::new(docblock)),
            depth: 0,
            last_end: SourcePosition::start(),
        }
    }

    // =========================================================================
    // Directives
    // =========================================================================

    fn parse_directives(mut self) -> Result<Vec<DirectiveInstance>> {
        let mut directives = vec![];
        loop {
            let (at_end, at_directive) = match self.tokens.peek() {
                None => (true, false),
                Some(token) => (
                    matches!(token.kind, DocblockTokenKind::Eof),
                    matches!(token.kind, DocblockTokenKind::At) && token.follows_separator,
                ),
            };
            if at_end {
                return Ok(directives);
            }

            if at_directive && self.peek_nth_matches(1, DocblockTokenKind::is_name_like) {
                if let Some(directive) = self.parse_directive(false)? {
                    directives.push(directive);
                }
            } else {
                // Prose, or a lexer error outside of any directive.
                self.bump();
            }
        }
    }

    fn parse_first_nested(mut self) -> Result<Value> {
        loop {
            if self.peek_matches(|k| matches!(k, DocblockTokenKind::Eof)) || self.tokens.peek().is_none() {
                return Err(self.unexpected("directive"));
            }
            if self.peek_matches(|k| matches!(k, DocblockTokenKind::At))
                && self.peek_nth_matches(1, DocblockTokenKind::is_name_like)
            {
                break;
            }
            self.bump();
        }
        Ok(self
            .parse_directive(true)?
            .map(Value::from)
            .unwrap_or(Value::Null))
    }

    /// Parses one directive starting at its `@`.
    ///
    /// Returns `None` for directives that are dropped: prose like
    /// `@foo-bar`, and ignored names that either do not resolve or resolve
    /// to ordinary types.
    fn parse_directive(&mut self, nested: bool) -> Result<Option<DirectiveInstance>> {
        let at = self.expect("'@'", |k| matches!(k, DocblockTokenKind::At))?;
        let (name, name_span) = self.parse_name()?;

        let followed_by_dash = self.tokens.peek().is_some_and(|token| {
            matches!(token.kind, DocblockTokenKind::Minus)
                && name_span.is_immediately_followed_by(&token.span)
        });
        if followed_by_dash {
            log::trace!("Skipping `@{name}-`: not a directive.");
            return Ok(None);
        }

        let ignored = self.parser.is_ignored(&name);
        let resolver = NameResolver::new(self.parser.catalog, self.imports);
        let qualified_name = match resolver.resolve(&name, !ignored) {
            Ok(qualified_name) => qualified_name,
            Err(failure) => {
                if ignored || self.parser.options.ignores_not_imported() {
                    log::trace!("Dropping unresolved directive `@{name}` in {}.", self.context);
                    self.skip_balanced_arguments();
                    return Ok(None);
                }
                return Err(match failure {
                    ResolveFailure::NeverImported => DirectiveError::NeverImported {
                        name,
                        context: self.context.to_string(),
                    },
                    ResolveFailure::NotFound { qualified } => DirectiveError::NotFound {
                        name: qualified,
                        context: self.context.to_string(),
                    },
                });
            },
        };

        let registry = SchemaRegistry::new(self.parser.session, self.parser.catalog)
            .with_building_chain(self.parser.schema_chain.clone());
        let schema = match registry.schema(&qualified_name)? {
            SchemaLookup::Directive(schema) => schema,
            SchemaLookup::NotADirectiveType => {
                if ignored || self.parser.is_ignored(&qualified_name) {
                    log::trace!("Dropping `@{name}` in {}: `{qualified_name}` is not a directive type.", self.context);
                    self.skip_balanced_arguments();
                    return Ok(None);
                }
                return Err(DirectiveError::NotADirectiveType {
                    name,
                    type_name: qualified_name,
                    context: self.context.to_string(),
                });
            },
        };

        let effective_target = if nested {
            DirectiveTarget::NestedDirective
        } else {
            self.target
        };
        if !schema.target.allows(effective_target) {
            return Err(DirectiveError::TargetNotAllowed {
                name,
                context: self.context.to_string(),
                allowed: schema.target.describe(),
            });
        }

        let mut arguments = DirectiveArguments::new();
        let mut end = name_span.end_exclusive;
        if self.peek_matches(|k| matches!(k, DocblockTokenKind::ParenOpen)) {
            self.bump();
            if !self.peek_matches(|k| matches!(k, DocblockTokenKind::ParenClose)) {
                self.parse_arguments(&mut arguments)?;
            }
            let close = self.expect("')'", |k| matches!(k, DocblockTokenKind::ParenClose))?;
            end = close.span.end_exclusive;
        }

        let reference = DirectiveReference {
            name,
            qualified_name,
            arguments,
            nested,
            span: DocblockSourceSpan::new(at.span.start_inclusive, end),
        };
        DirectiveBuilder::new(self.parser.catalog)
            .build(&schema, reference, self.context)
            .map(Some)
    }

    /// The lexer folds `\` separators into identifiers, so a name is always a
    /// single token.
    fn parse_name(&mut self) -> Result<(String, DocblockSourceSpan)> {
        let token = self.expect("namespace separator or identifier", DocblockTokenKind::is_name_like)?;
        let name = token.kind.name_text().unwrap_or_default().to_string();
        Ok((name, token.span))
    }

    /// Consumes a `( ... )` following a dropped directive, if there is one.
    fn skip_balanced_arguments(&mut self) {
        if !self.peek_matches(|k| matches!(k, DocblockTokenKind::ParenOpen)) {
            return;
        }
        let mut open = 0usize;
        loop {
            let Some(kind) = self.tokens.peek().map(|token| token.kind.clone()) else {
                return;
            };
            match kind {
                DocblockTokenKind::Eof => return,
                DocblockTokenKind::ParenOpen => open += 1,
                DocblockTokenKind::ParenClose => open = open.saturating_sub(1),
                _ => (),
            }
            self.bump();
            if open == 0 {
                return;
            }
        }
    }

    // =========================================================================
    // Arguments and values
    // =========================================================================

    fn parse_arguments(&mut self, arguments: &mut DirectiveArguments) -> Result<()> {
        loop {
            if self.peek_nth_matches(1, |k| matches!(k, DocblockTokenKind::Equals)) {
                let name = self.expect("Identifier", |k| matches!(k, DocblockTokenKind::Identifier(_)))?;
                self.bump();
                let value = self.parse_plain_value()?;
                arguments.set_named(name.kind.display(), value);
            } else {
                let span = self.peek_span();
                let value = self.parse_plain_value()?;
                if !arguments.push_positional(value) {
                    return Err(self.index_overflow(span));
                }
            }

            if !self.peek_matches(|k| matches!(k, DocblockTokenKind::Comma)) {
                return Ok(());
            }
            self.bump();
            if self.peek_matches(|k| matches!(k, DocblockTokenKind::ParenClose)) {
                return Ok(());
            }
        }
    }

    fn parse_plain_value(&mut self) -> Result<Value> {
        let Some(kind) = self.tokens.peek().map(|token| token.kind.clone()) else {
            return Err(self.unexpected("PlainValue"));
        };
        match kind {
            DocblockTokenKind::CurlyBraceOpen => {
                self.enter_nesting()?;
                let array = self.parse_array()?;
                self.depth -= 1;
                Ok(array)
            },
            DocblockTokenKind::At => {
                self.enter_nesting()?;
                let directive = self.parse_directive(true)?;
                self.depth -= 1;
                Ok(directive.map(Value::from).unwrap_or(Value::Null))
            },
            DocblockTokenKind::Identifier(_) => self.parse_constant(),
            DocblockTokenKind::String(_) => {
                self.bump();
                Ok(Value::String(kind.parse_string_value().unwrap_or_default()))
            },
            DocblockTokenKind::Integer(ref raw) => match kind.parse_integer_value() {
                Some(Ok(int)) => {
                    self.bump();
                    Ok(Value::Int(int))
                },
                _ => Err(self.invalid_value(raw)),
            },
            DocblockTokenKind::Float(ref raw) => match kind.parse_float_value() {
                Some(Ok(float)) => {
                    self.bump();
                    Ok(Value::Float(float))
                },
                _ => Err(self.invalid_value(raw)),
            },
            DocblockTokenKind::True => {
                self.bump();
                Ok(Value::Bool(true))
            },
            DocblockTokenKind::False => {
                self.bump();
                Ok(Value::Bool(false))
            },
            DocblockTokenKind::Null => {
                self.bump();
                Ok(Value::Null)
            },
            _ => Err(self.unexpected("PlainValue")),
        }
    }

    /// `{}` is an empty list. Arrays without keyed entries are lists; any
    /// keyed entry makes the whole array a map, with unkeyed entries taking
    /// the next free integer key.
    fn parse_array(&mut self) -> Result<Value> {
        self.expect("'{'", |k| matches!(k, DocblockTokenKind::CurlyBraceOpen))?;

        let mut entries = vec![];
        if !self.peek_matches(|k| matches!(k, DocblockTokenKind::CurlyBraceClose)) {
            loop {
                let span = self.peek_span();
                let (key, value) = self.parse_array_entry()?;
                entries.push((key, value, span));
                if !self.peek_matches(|k| matches!(k, DocblockTokenKind::Comma)) {
                    break;
                }
                self.bump();
                if self.peek_matches(|k| matches!(k, DocblockTokenKind::CurlyBraceClose)) {
                    break;
                }
            }
        }
        self.expect("'}'", |k| matches!(k, DocblockTokenKind::CurlyBraceClose))?;

        if entries.iter().all(|(key, _, _)| key.is_none()) {
            return Ok(Value::List(entries.into_iter().map(|(_, value, _)| value).collect()));
        }
        let mut map = IndexMap::new();
        for (key, value, span) in entries {
            let key = match key {
                Some(key) => key,
                None => match next_map_index(&map) {
                    Some(idx) => idx.to_string(),
                    None => return Err(self.index_overflow(span)),
                },
            };
            map.insert(key, value);
        }
        Ok(Value::Map(map))
    }

    fn parse_array_entry(&mut self) -> Result<(Option<String>, Value)> {
        let keyed = self.peek_nth_matches(1, |k| {
            matches!(k, DocblockTokenKind::Equals | DocblockTokenKind::Colon)
        });
        if !keyed {
            return Ok((None, self.parse_plain_value()?));
        }

        let Some(kind) = self.tokens.peek().map(|token| token.kind.clone()) else {
            return Err(self.unexpected("Integer or String"));
        };
        let key = match kind {
            DocblockTokenKind::Identifier(_) => {
                let key_token_span = self.peek_span();
                let constant = self.parse_constant()?;
                match array_key(&constant) {
                    Some(key) => key,
                    None => return Err(self.syntax_error_at(
                        "Integer or String",
                        Some(constant.to_string()),
                        key_token_span,
                    )),
                }
            },
            DocblockTokenKind::Integer(ref raw) => match kind.parse_integer_value() {
                Some(Ok(int)) => {
                    self.bump();
                    int.to_string()
                },
                _ => return Err(self.invalid_value(raw)),
            },
            DocblockTokenKind::String(_) => {
                self.bump();
                kind.parse_string_value().unwrap_or_default()
            },
            _ => return Err(self.unexpected("Integer or String")),
        };
        self.expect("'=' or ':'", |k| {
            matches!(k, DocblockTokenKind::Equals | DocblockTokenKind::Colon)
        })?;
        Ok((Some(key), self.parse_plain_value()?))
    }

    /// `Name::class` is the qualified type name, `Name::CONST` a class
    /// constant and a bare `NAME` a global constant.
    fn parse_constant(&mut self) -> Result<Value> {
        let (identifier, _) = self.parse_name()?;
        let resolver = NameResolver::new(self.parser.catalog, self.imports);
        let qualify = |type_name: &str| match resolver.resolve(type_name, true) {
            Ok(qualified) | Err(ResolveFailure::NotFound { qualified }) => qualified,
            Err(ResolveFailure::NeverImported) => type_name.trim_start_matches('\\').to_string(),
        };

        let lookup_name = match identifier.split_once("::") {
            Some((type_name, member)) if member.eq_ignore_ascii_case("class") => {
                return Ok(Value::String(qualify(type_name)));
            },
            Some((type_name, member)) => format!("{}::{member}", qualify(type_name)),
            None => identifier.trim_start_matches('\\').to_string(),
        };

        self.parser
            .catalog
            .constant(&lookup_name)
            .ok_or_else(|| DirectiveError::UnknownConstant {
                name: identifier,
                context: self.context.to_string(),
            })
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    fn bump(&mut self) -> Option<DocblockToken<'src>> {
        let token = self.tokens.consume()?;
        self.last_end = token.span.end_exclusive.clone();
        Some(token)
    }

    fn peek_matches(&mut self, predicate: impl FnOnce(&DocblockTokenKind<'src>) -> bool) -> bool {
        self.tokens.peek().is_some_and(|token| predicate(&token.kind))
    }

    fn peek_nth_matches(
        &mut self,
        n: usize,
        predicate: impl FnOnce(&DocblockTokenKind<'src>) -> bool,
    ) -> bool {
        self.tokens.peek_nth(n).is_some_and(|token| predicate(&token.kind))
    }

    fn peek_span(&mut self) -> DocblockSourceSpan {
        match self.tokens.peek() {
            Some(token) => token.span.clone(),
            None => DocblockSourceSpan::empty_at(self.last_end.clone()),
        }
    }

    fn expect(
        &mut self,
        expected: &str,
        predicate: impl FnOnce(&DocblockTokenKind<'src>) -> bool,
    ) -> Result<DocblockToken<'src>> {
        if self.peek_matches(predicate)
            && let Some(token) = self.bump()
        {
            return Ok(token);
        }
        Err(self.unexpected(expected))
    }

    fn enter_nesting(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth <= MAX_NESTING_DEPTH {
            return Ok(());
        }
        let span = self.peek_span();
        let found = self.tokens.peek().map(|token| token.kind.display());
        let detail = DocblockParseError::new(
            format!("Directives and arrays may nest at most {MAX_NESTING_DEPTH} levels deep"),
            span.clone(),
            DocblockParseErrorKind::NestingTooDeep,
        );
        Err(DirectiveError::Syntax {
            expected: format!("at most {MAX_NESTING_DEPTH} levels of nesting"),
            found,
            position: span.start_inclusive.byte_offset(),
            context: self.context.to_string(),
            detail: Box::new(detail),
        })
    }

    // =========================================================================
    // Errors
    // =========================================================================

    /// The error for the next token not being `expected`: a lexical error if
    /// the lexer failed there, otherwise a syntax error.
    fn unexpected(&mut self, expected: &str) -> DirectiveError {
        let token = self.tokens.peek().cloned();
        match token {
            Some(DocblockToken {
                kind: DocblockTokenKind::Error { message, error_notes },
                span,
                ..
            }) => DirectiveError::Lexical {
                position: span.start_inclusive.byte_offset(),
                context: self.context.to_string(),
                detail: Box::new(DocblockParseError::from_lexer_error(
                    message.clone(),
                    span,
                    error_notes,
                )),
                message,
            },
            Some(token) if !matches!(token.kind, DocblockTokenKind::Eof) => {
                self.syntax_error_at(expected, Some(token.kind.display()), token.span)
            },
            Some(token) => self.syntax_error_at(expected, None, token.span),
            None => {
                let span = DocblockSourceSpan::empty_at(self.last_end.clone());
                self.syntax_error_at(expected, None, span)
            },
        }
    }

    fn syntax_error_at(
        &self,
        expected: &str,
        found: Option<String>,
        span: DocblockSourceSpan,
    ) -> DirectiveError {
        let detail = match &found {
            Some(found) => DocblockParseError::new(
                format!("Expected {expected}, got '{found}'"),
                span.clone(),
                DocblockParseErrorKind::UnexpectedToken {
                    expected: vec![expected.to_string()],
                    found: found.clone(),
                },
            ),
            None => DocblockParseError::new(
                format!("Expected {expected}, got end of string"),
                span.clone(),
                DocblockParseErrorKind::UnexpectedEof {
                    expected: vec![expected.to_string()],
                },
            ),
        };
        DirectiveError::Syntax {
            expected: expected.to_string(),
            found,
            position: span.start_inclusive.byte_offset(),
            context: self.context.to_string(),
            detail: Box::new(detail),
        }
    }

    fn invalid_value(&mut self, raw: &str) -> DirectiveError {
        let span = self.peek_span();
        DirectiveError::Syntax {
            expected: "a number in the 64-bit range".to_string(),
            found: Some(raw.to_string()),
            position: span.start_inclusive.byte_offset(),
            context: self.context.to_string(),
            detail: Box::new(DocblockParseError::new(
                format!("Number literal `{raw}` is out of range"),
                span,
                DocblockParseErrorKind::InvalidValue { raw: raw.to_string() },
            )),
        }
    }

    /// An unkeyed entry following the integer key `i64::MAX`.
    fn index_overflow(&self, span: DocblockSourceSpan) -> DirectiveError {
        let raw = format!("{}", i128::from(i64::MAX) + 1);
        DirectiveError::Syntax {
            expected: "an array index in the 64-bit range".to_string(),
            found: Some(raw.clone()),
            position: span.start_inclusive.byte_offset(),
            context: self.context.to_string(),
            detail: Box::new(DocblockParseError::new(
                format!("Array index `{raw}` is out of range"),
                span,
                DocblockParseErrorKind::InvalidValue { raw },
            )),
        }
    }
}

/// The map key a constant used as an array key stands for.
fn array_key(value: &Value) -> Option<String> {
    match value {
        Value::Int(int) => Some(int.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(if *b { "1" } else { "0" }.to_string()),
        Value::Float(float) => Some((float.trunc() as i64).to_string()),
        Value::Null => Some(String::new()),
        Value::List(_) | Value::Map(_) | Value::Directive(_) => None,
    }
}
