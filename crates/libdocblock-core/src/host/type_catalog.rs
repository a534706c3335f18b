use crate::host::DirectiveFactory;
use crate::host::TypeDefinition;
use crate::Value;
use std::collections::HashSet;

/// The host object model, as seen by name resolution, the schema registry
/// and the builder.
///
/// Type names passed in are fully qualified and never carry a leading `\`.
pub trait TypeCatalog: Send + Sync {
    fn type_exists(&self, name: &str) -> bool;

    fn type_definition(&self, name: &str) -> Option<&TypeDefinition>;

    /// Whether `name` is meant to be used as a directive. Types that exist
    /// but are not marked are ordinary types.
    fn is_marked_as_directive_type(&self, name: &str) -> bool {
        self.type_definition(name)
            .is_some_and(|definition| definition.docblock.contains("@Annotation"))
    }

    /// Looks up `Type::CONSTANT` (class constants) or `CONSTANT` (global
    /// constants).
    fn constant(&self, name: &str) -> Option<Value> {
        let (type_name, constant_name) = name.rsplit_once("::")?;
        self.type_definition(type_name)?
            .constants
            .get(constant_name)
            .cloned()
    }

    /// Direct supertypes of `name`.
    fn supertypes(&self, name: &str) -> Vec<String> {
        self.type_definition(name)
            .map(|definition| definition.supertypes.clone())
            .unwrap_or_default()
    }

    fn factory(&self, _name: &str) -> Option<&dyn DirectiveFactory> {
        None
    }
}

/// `name` followed by all of its supertypes, transitively, without
/// duplicates.
pub fn type_lineage(catalog: &dyn TypeCatalog, name: &str) -> Vec<String> {
    let mut lineage = vec![name.to_string()];
    let mut seen: HashSet<String> = HashSet::from([name.to_string()]);
    let mut idx = 0;
    while idx < lineage.len() {
        for supertype in catalog.supertypes(&lineage[idx]) {
            let supertype = supertype.trim_start_matches('\\').to_string();
            if seen.insert(supertype.clone()) {
                lineage.push(supertype);
            }
        }
        idx += 1;
    }
    lineage
}
