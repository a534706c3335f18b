//! Structural descriptions of directive types and the registry that derives
//! them from a type's own docblock.

mod directive_schema;
mod field_metadata;
pub mod meta_directives;
mod schema_registry;
mod schema_store;

pub use directive_schema::ConstructionStrategy;
pub use directive_schema::DirectiveSchema;
pub use field_metadata::EnumConstraint;
pub use field_metadata::FieldMetadata;
pub use schema_registry::SchemaLookup;
pub use schema_registry::SchemaRegistry;
pub use schema_store::SchemaStore;
pub use schema_store::SchemaStoreError;

#[cfg(test)]
mod tests;
