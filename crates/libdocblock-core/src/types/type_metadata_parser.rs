use crate::types::TypeMetadata;
use crate::Value;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("Unable to parse type `{text}`: {message}")]
pub struct TypeParseError {
    pub text: String,
    pub message: String,
}

type Result<T> = std::result::Result<T, TypeParseError>;

/// Recursive-descent parser for free-text type annotations.
///
/// ```text
/// Union        ::= Intersection ("|" Intersection)*
/// Intersection ::= Postfix ("&" Postfix)*
/// Postfix      ::= Primary ("[]")*
/// Primary      ::= "(" Union ")" | "array" ["<" Union ["," Union] ">"]
///                | StringLiteral | NumberLiteral | Word
/// ```
pub(super) struct TypeMetadataParser<'a> {
    text: &'a str,
    pos: usize,
}
impl<'a> TypeMetadataParser<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    pub fn parse(mut self) -> Result<TypeMetadata> {
        self.skip_whitespace();
        if self.peek().is_none() {
            return Err(self.error("the type is empty"));
        }
        let parsed = self.parse_union()?;
        self.skip_whitespace();
        match self.peek() {
            None => Ok(parsed),
            Some(ch) => Err(self.error(format!("unexpected `{ch}` at offset {}", self.pos))),
        }
    }

    fn error(&self, message: impl Into<String>) -> TypeParseError {
        TypeParseError {
            text: self.text.to_string(),
            message: message.into(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        if self.eat(expected) {
            return Ok(());
        }
        Err(match self.peek() {
            Some(ch) => self.error(format!("expected `{expected}`, found `{ch}`")),
            None => self.error(format!("expected `{expected}`, found end of type")),
        })
    }

    fn parse_union(&mut self) -> Result<TypeMetadata> {
        let mut members = vec![];
        push_flattened(&mut members, self.parse_intersection()?, |t| match t {
            TypeMetadata::Union(inner) => Ok(inner),
            other => Err(other),
        });
        while self.eat('|') {
            push_flattened(&mut members, self.parse_intersection()?, |t| match t {
                TypeMetadata::Union(inner) => Ok(inner),
                other => Err(other),
            });
        }
        Ok(collapse(members, TypeMetadata::Union))
    }

    fn parse_intersection(&mut self) -> Result<TypeMetadata> {
        let mut members = vec![];
        push_flattened(&mut members, self.parse_postfix()?, |t| match t {
            TypeMetadata::Intersection(inner) => Ok(inner),
            other => Err(other),
        });
        while self.eat('&') {
            push_flattened(&mut members, self.parse_postfix()?, |t| match t {
                TypeMetadata::Intersection(inner) => Ok(inner),
                other => Err(other),
            });
        }
        Ok(collapse(members, TypeMetadata::Intersection))
    }

    fn parse_postfix(&mut self) -> Result<TypeMetadata> {
        let mut parsed = self.parse_primary()?;
        loop {
            self.skip_whitespace();
            if self.text[self.pos..].starts_with("[]") {
                self.pos += 2;
                parsed = TypeMetadata::array_of(parsed);
            } else {
                return Ok(parsed);
            }
        }
    }

    fn parse_primary(&mut self) -> Result<TypeMetadata> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(self.error("expected a type, found end of type")),
            Some('(') => {
                self.bump();
                let inner = self.parse_union()?;
                self.expect(')')?;
                Ok(inner)
            },
            Some(quote @ ('"' | '\'')) => self.parse_string_literal(quote),
            Some(ch) if ch.is_ascii_digit() || ch == '-' => self.parse_number_literal(),
            Some(ch) if is_word_char(ch) => self.parse_word(),
            Some(ch) => Err(self.error(format!("unexpected `{ch}` at offset {}", self.pos))),
        }
    }

    fn parse_string_literal(&mut self, quote: char) -> Result<TypeMetadata> {
        self.bump();
        let start = self.pos;
        while let Some(ch) = self.bump() {
            if ch == quote {
                let literal = &self.text[start..self.pos - 1];
                return Ok(TypeMetadata::ConstantLiteral(Value::String(literal.to_string())));
            }
        }
        Err(self.error("unterminated string literal"))
    }

    fn parse_number_literal(&mut self) -> Result<TypeMetadata> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.bump();
        }
        while self.peek().is_some_and(|ch| ch.is_ascii_digit() || ch == '.') {
            self.bump();
        }
        let raw = &self.text[start..self.pos];
        if let Ok(int) = raw.parse::<i64>() {
            return Ok(TypeMetadata::ConstantLiteral(Value::Int(int)));
        }
        raw.parse::<f64>()
            .map(|float| TypeMetadata::ConstantLiteral(Value::Float(float)))
            .map_err(|_| self.error(format!("invalid number literal `{raw}`")))
    }

    fn parse_word(&mut self) -> Result<TypeMetadata> {
        let start = self.pos;
        while self.peek().is_some_and(is_word_char) {
            self.bump();
        }
        let word = &self.text[start..self.pos];

        Ok(match word.to_ascii_lowercase().as_str() {
            "mixed" => TypeMetadata::Mixed,
            "bool" | "boolean" => TypeMetadata::Boolean,
            "int" | "integer" => TypeMetadata::Integer,
            "float" | "double" => TypeMetadata::Float,
            "string" => TypeMetadata::String,
            "object" => TypeMetadata::Object(None),
            "true" => TypeMetadata::ConstantLiteral(Value::Bool(true)),
            "false" => TypeMetadata::ConstantLiteral(Value::Bool(false)),
            "null" => TypeMetadata::ConstantLiteral(Value::Null),
            "array" => self.parse_array_parameters()?,
            _ => TypeMetadata::object(word),
        })
    }

    /// Parses the optional `<V>` / `<K, V>` following `array`.
    fn parse_array_parameters(&mut self) -> Result<TypeMetadata> {
        if !self.eat('<') {
            return Ok(TypeMetadata::array_of(TypeMetadata::Mixed));
        }
        let first = self.parse_union()?;
        let parsed = if self.eat(',') {
            let value = self.parse_union()?;
            TypeMetadata::Array {
                key: Box::new(first),
                value: Box::new(value),
            }
        } else {
            TypeMetadata::array_of(first)
        };
        self.expect('>')?;
        Ok(parsed)
    }
}

fn is_word_char(ch: char) -> bool {
    ch == '_' || ch == '\\' || ch.is_ascii_alphanumeric()
}

fn push_flattened(
    members: &mut Vec<TypeMetadata>,
    parsed: TypeMetadata,
    unwrap_same_kind: impl Fn(TypeMetadata) -> std::result::Result<Vec<TypeMetadata>, TypeMetadata>,
) {
    match unwrap_same_kind(parsed) {
        Ok(inner) => members.extend(inner),
        Err(single) => members.push(single),
    }
}

fn collapse(
    mut members: Vec<TypeMetadata>,
    make: fn(Vec<TypeMetadata>) -> TypeMetadata,
) -> TypeMetadata {
    if members.len() == 1 {
        members.remove(0)
    } else {
        make(members)
    }
}
