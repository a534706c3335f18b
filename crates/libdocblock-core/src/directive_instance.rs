use crate::Value;
use indexmap::IndexMap;

/// The constructed value of one directive occurrence.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct DirectiveInstance {
    /// Fully-qualified name of the directive type (no leading `\`).
    pub type_name: String,

    /// `type_name` followed by every supertype the host declares for it,
    /// transitively. `Object(name)` type checks match against this.
    pub type_lineage: Vec<String>,

    /// Field values in assignment order.
    pub fields: IndexMap<String, Value>,
}
impl DirectiveInstance {
    pub fn new(type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        Self {
            type_lineage: vec![type_name.clone()],
            type_name,
            fields: IndexMap::new(),
        }
    }

    pub fn with_lineage(mut self, lineage: Vec<String>) -> Self {
        self.type_lineage = lineage;
        self
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Whether this instance is of type `type_name` or one of its subtypes.
    /// A leading `\` on `type_name` is ignored.
    pub fn is_instance_of(&self, type_name: &str) -> bool {
        let type_name = type_name.trim_start_matches('\\');
        self.type_lineage.iter().any(|t| t == type_name)
    }

    /// The unqualified part of `type_name`.
    pub fn short_name(&self) -> &str {
        self.type_name.rsplit('\\').next().unwrap_or(&self.type_name)
    }
}
