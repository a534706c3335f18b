use crate::output_utils;
use anyhow::Context;
use indexmap::IndexMap;
use libdocblock::host::InMemoryTypeCatalog;
use libdocblock::host::PropertyDefinition;
use libdocblock::host::TypeDefinition;
use std::path::Path;

/// The JSON description of the host types that directives may name.
///
/// ```json
/// {
///   "types": [{
///     "name": "App\\Annotations\\Route",
///     "docblock": "/** @Annotation @Target(\"METHOD\") */",
///     "properties": [
///       {"name": "path", "docblock": "/** @var string @Required */"},
///       {"name": "methods", "docblock": "/** @var array<string> */", "default": ["GET"]}
///     ]
///   }],
///   "constants": {"MAX_TTL": 3600}
/// }
/// ```
#[derive(Debug, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct CatalogFile {
    #[serde(default)]
    types: Vec<TypeEntry>,

    /// Global constants.
    #[serde(default)]
    constants: IndexMap<String, serde_json::Value>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct TypeEntry {
    name: String,
    #[serde(default)]
    docblock: String,
    #[serde(default)]
    constructor_parameters: Vec<String>,
    #[serde(default)]
    properties: Vec<PropertyEntry>,
    #[serde(default)]
    supertypes: Vec<String>,
    #[serde(default)]
    constants: IndexMap<String, serde_json::Value>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct PropertyEntry {
    name: String,
    #[serde(default)]
    docblock: String,
    #[serde(default)]
    default: serde_json::Value,
}

impl CatalogFile {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {path:?}"))?;
        let catalog = Self::from_json(&json)
            .with_context(|| format!("Failed to parse catalog file {path:?}"))?;
        log::debug!("Loaded {} type definitions from {path:?}.", catalog.types.len());
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn into_catalog(self) -> InMemoryTypeCatalog {
        let mut catalog = InMemoryTypeCatalog::new();
        for entry in self.types {
            let mut definition = TypeDefinition::new(&entry.name).with_docblock(entry.docblock);
            for parameter in entry.constructor_parameters {
                definition = definition.with_constructor_parameter(parameter);
            }
            for property in entry.properties {
                definition = definition.with_property(
                    PropertyDefinition::new(property.name)
                        .with_docblock(property.docblock)
                        .with_default_value(output_utils::json_to_value(property.default)),
                );
            }
            for supertype in entry.supertypes {
                definition = definition.with_supertype(supertype);
            }
            for (name, value) in entry.constants {
                definition = definition.with_constant(name, output_utils::json_to_value(value));
            }
            catalog.add_type(definition);
        }
        for (name, value) in self.constants {
            catalog.add_global_constant(name, output_utils::json_to_value(value));
        }
        catalog
    }
}
