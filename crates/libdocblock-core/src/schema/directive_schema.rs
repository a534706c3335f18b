use crate::schema::FieldMetadata;
use crate::DirectiveError;
use crate::Result;
use crate::TargetSet;
use indexmap::IndexMap;

/// How the builder turns validated arguments into a
/// [`DirectiveInstance`](crate::DirectiveInstance).
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ConstructionStrategy {
    /// The type has a constructor: the full argument map is handed to its
    /// [`DirectiveFactory`](crate::host::DirectiveFactory).
    ViaFactory,

    /// Fields are assigned one at a time onto a bare instance.
    ViaFieldInjection,
}

/// Everything the parser and builder need to know about one directive type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveSchema {
    /// Fully-qualified type name.
    pub name: String,

    pub target: TargetSet,

    /// The `@Target` literals as written, if the type declared any.
    pub target_literal: Option<String>,

    /// Declared fields, in declaration order.
    pub fields: IndexMap<String, FieldMetadata>,

    pub default_field: Option<String>,

    pub construction: ConstructionStrategy,
}
impl DirectiveSchema {
    /// Assembles a schema, deriving `default_field` from the fields.
    ///
    /// Fails if more than one field is marked as the default field.
    pub fn try_new(
        name: impl Into<String>,
        target: TargetSet,
        target_literal: Option<String>,
        fields: IndexMap<String, FieldMetadata>,
        construction: ConstructionStrategy,
    ) -> Result<Self> {
        let name = name.into();
        let default_fields: Vec<&str> = fields
            .values()
            .filter(|field| field.is_default_field)
            .map(|field| field.name.as_str())
            .collect();
        if default_fields.len() > 1 {
            return Err(DirectiveError::InvalidSchema {
                type_name: name,
                message: format!(
                    "at most one field may be the default field, found {}",
                    default_fields.join(", "),
                ),
            });
        }
        let default_field = default_fields.first().map(|field| field.to_string());

        Ok(Self {
            name,
            target,
            target_literal,
            fields,
            default_field,
            construction,
        })
    }

    pub fn field(&self, name: &str) -> Option<&FieldMetadata> {
        self.fields.get(name)
    }

    pub fn field_names(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }

    pub fn constructs_via_factory(&self) -> bool {
        self.construction == ConstructionStrategy::ViaFactory
    }
}
