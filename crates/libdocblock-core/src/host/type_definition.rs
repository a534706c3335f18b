use crate::Value;
use indexmap::IndexMap;

/// What the host knows about one type: its definition-level docblock and
/// the members the schema registry derives fields from.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct TypeDefinition {
    /// Fully-qualified name, without a leading `\`.
    pub name: String,

    #[serde(default)]
    pub docblock: String,

    /// Parameter names of the type's constructor. A non-empty list makes the
    /// type factory-constructed.
    #[serde(default)]
    pub constructor_parameters: Vec<String>,

    /// Public properties in declaration order.
    #[serde(default)]
    pub properties: Vec<PropertyDefinition>,

    /// Direct supertypes (parent type and implemented interfaces).
    #[serde(default)]
    pub supertypes: Vec<String>,

    #[serde(default)]
    pub constants: IndexMap<String, Value>,
}
impl TypeDefinition {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().trim_start_matches('\\').to_string(),
            ..Default::default()
        }
    }

    pub fn with_docblock(mut self, docblock: impl Into<String>) -> Self {
        self.docblock = docblock.into();
        self
    }

    pub fn with_constructor_parameter(mut self, name: impl Into<String>) -> Self {
        self.constructor_parameters.push(name.into());
        self
    }

    pub fn with_property(mut self, property: PropertyDefinition) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_supertype(mut self, name: impl AsRef<str>) -> Self {
        self.supertypes
            .push(name.as_ref().trim_start_matches('\\').to_string());
        self
    }

    pub fn with_constant(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.constants.insert(name.into(), value.into());
        self
    }

    pub fn has_constructor(&self) -> bool {
        !self.constructor_parameters.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct PropertyDefinition {
    pub name: String,

    #[serde(default)]
    pub docblock: String,

    /// The value an injected instance starts with when the directive does
    /// not set this property.
    #[serde(default)]
    pub default_value: Value,
}
impl PropertyDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_docblock(mut self, docblock: impl Into<String>) -> Self {
        self.docblock = docblock.into();
        self
    }

    pub fn with_default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = value.into();
        self
    }
}
