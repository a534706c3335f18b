use crate::types::type_metadata_parser::TypeMetadataParser;
use crate::types::TypeParseError;
use crate::Value;

/// Describes the set of values a directive field accepts.
///
/// Variants compose, so `array<int|string>` is
/// `Array { key: Mixed, value: Union([Integer, String]) }`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeMetadata {
    Mixed,
    Boolean,
    Integer,
    Float,
    String,
    Array {
        key: Box<TypeMetadata>,
        value: Box<TypeMetadata>,
    },
    /// An instance of the named directive type (or any of its subtypes).
    /// `None` accepts any directive instance.
    Object(Option<String>),
    Union(Vec<TypeMetadata>),
    Intersection(Vec<TypeMetadata>),
    ConstantLiteral(Value),
}
impl TypeMetadata {
    /// `array<value>` with a mixed key type.
    pub fn array_of(value: TypeMetadata) -> Self {
        Self::Array {
            key: Box::new(Self::Mixed),
            value: Box::new(value),
        }
    }

    pub fn object(name: impl AsRef<str>) -> Self {
        Self::Object(Some(name.as_ref().trim_start_matches('\\').to_string()))
    }

    /// Parses a free-text type annotation such as `string`, `array<int>`,
    /// `Foo[]`, `int|null` or `(A&B)`.
    pub fn parse(text: &str) -> Result<TypeMetadata, TypeParseError> {
        TypeMetadataParser::new(text).parse()
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array { .. })
    }

    /// The element type of an array type.
    pub fn array_value_type(&self) -> Option<&TypeMetadata> {
        if let Self::Array { value, .. } = self {
            Some(value)
        } else {
            None
        }
    }

    pub fn validate(&self, value: &Value) -> bool {
        match self {
            Self::Mixed => true,
            Self::Boolean => matches!(value, Value::Bool(_)),
            Self::Integer => matches!(value, Value::Int(_)),
            Self::Float => matches!(value, Value::Float(_)),
            Self::String => matches!(value, Value::String(_)),

            Self::Array { key, value: value_type } => match value {
                Value::List(items) => items.iter().enumerate().all(|(idx, item)| {
                    key.validate(&Value::Int(idx as i64)) && value_type.validate(item)
                }),
                Value::Map(entries) => entries.iter().all(|(k, item)| {
                    key.validate(&Value::map_key_as_value(k)) && value_type.validate(item)
                }),
                _ => false,
            },

            Self::Object(None) => matches!(value, Value::Directive(_)),
            Self::Object(Some(name)) => value
                .as_directive()
                .is_some_and(|instance| instance.is_instance_of(name)),

            Self::Union(members) => members.iter().any(|m| m.validate(value)),
            Self::Intersection(members) => members.iter().all(|m| m.validate(value)),

            Self::ConstantLiteral(literal) => literal == value,
        }
    }

    /// Human-readable form of this type, e.g. `array<int>`, `Foo|Bar` or
    /// `(Countable&JsonSerializable)`.
    pub fn describe(&self) -> String {
        match self {
            Self::Mixed => "mixed".to_string(),
            Self::Boolean => "bool".to_string(),
            Self::Integer => "int".to_string(),
            Self::Float => "float".to_string(),
            Self::String => "string".to_string(),

            Self::Array { key, value } => match (key.as_ref(), value.as_ref()) {
                (Self::Mixed, Self::Mixed) => "array".to_string(),
                (Self::Mixed, value) => format!("array<{}>", value.describe()),
                (key, value) => format!("array<{}, {}>", key.describe(), value.describe()),
            },

            Self::Object(None) => "object".to_string(),
            Self::Object(Some(name)) => name.clone(),

            Self::Union(members) => members
                .iter()
                .map(|m| m.describe())
                .collect::<Vec<_>>()
                .join("|"),
            Self::Intersection(members) => format!(
                "({})",
                members.iter().map(|m| m.describe()).collect::<Vec<_>>().join("&"),
            ),

            Self::ConstantLiteral(literal) => literal.to_string(),
        }
    }
}

impl std::fmt::Display for TypeMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}
