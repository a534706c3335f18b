use crate::types::TypeMetadata;
use crate::Value;

/// One declared field of a directive type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct FieldMetadata {
    pub name: String,
    pub field_type: TypeMetadata,
    pub required: bool,

    /// Receives the collapsed positional arguments (`value`) when the field
    /// is not named explicitly.
    pub is_default_field: bool,

    pub enum_constraint: Option<EnumConstraint>,

    /// The type annotation as written, e.g. `array<string>`.
    pub declared_type: String,

    /// Starting value of the field on an injected instance.
    pub default_value: Value,
}
impl FieldMetadata {
    pub fn new(name: impl Into<String>, field_type: TypeMetadata) -> Self {
        let declared_type = field_type.describe();
        Self {
            name: name.into(),
            field_type,
            required: false,
            is_default_field: false,
            enum_constraint: None,
            declared_type,
            default_value: Value::Null,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn as_default_field(mut self) -> Self {
        self.is_default_field = true;
        self
    }

    pub fn with_enum(mut self, constraint: EnumConstraint) -> Self {
        self.enum_constraint = Some(constraint);
        self
    }

    pub fn with_declared_type(mut self, declared_type: impl Into<String>) -> Self {
        self.declared_type = declared_type.into();
        self
    }

    pub fn with_default_value(mut self, value: Value) -> Self {
        self.default_value = value;
        self
    }
}

/// The closed set of values an `@Enum` field accepts.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumConstraint {
    pub allowed_values: Vec<Value>,

    /// How each allowed value is listed in error messages.
    pub display_literals: Vec<String>,
}
impl EnumConstraint {
    /// A constraint whose values are listed as themselves.
    pub fn new(allowed_values: Vec<Value>) -> Self {
        let display_literals = allowed_values.iter().map(Value::to_message_string).collect();
        Self {
            allowed_values,
            display_literals,
        }
    }

    pub fn with_display_literals(mut self, display_literals: Vec<String>) -> Self {
        self.display_literals = display_literals;
        self
    }

    pub fn allows(&self, value: &Value) -> bool {
        self.allowed_values.contains(value)
    }
}
