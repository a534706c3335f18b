//! The capabilities the directive pipeline needs from the host's object
//! model: whether a type exists, its definition-level docblock and members,
//! constants, supertypes and how to construct factory-built directives.

mod directive_factory;
mod in_memory_type_catalog;
mod type_catalog;
mod type_definition;

pub use directive_factory::DirectiveFactory;
pub use in_memory_type_catalog::InMemoryTypeCatalog;
pub use type_catalog::type_lineage;
pub use type_catalog::TypeCatalog;
pub use type_definition::PropertyDefinition;
pub use type_definition::TypeDefinition;

#[cfg(test)]
mod tests;
