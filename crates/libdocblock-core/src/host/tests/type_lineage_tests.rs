use crate::host::type_lineage;
use crate::host::InMemoryTypeCatalog;
use crate::host::TypeDefinition;

#[test]
fn unknown_type_is_its_own_lineage() {
    let catalog = InMemoryTypeCatalog::new();
    assert_eq!(type_lineage(&catalog, "Missing"), vec!["Missing".to_string()]);
}

#[test]
fn lineage_is_breadth_first_and_deduplicated() {
    let catalog = InMemoryTypeCatalog::new()
        .with_type(
            TypeDefinition::new("Route")
                .with_supertype("BaseRoute")
                .with_supertype("\\Countable"),
        )
        .with_type(TypeDefinition::new("BaseRoute").with_supertype("Countable"))
        .with_type(TypeDefinition::new("Countable"));

    assert_eq!(
        type_lineage(&catalog, "Route"),
        vec!["Route".to_string(), "BaseRoute".to_string(), "Countable".to_string()],
    );
}

#[test]
fn cyclic_supertypes_terminate() {
    let catalog = InMemoryTypeCatalog::new()
        .with_type(TypeDefinition::new("A").with_supertype("B"))
        .with_type(TypeDefinition::new("B").with_supertype("A"));

    assert_eq!(type_lineage(&catalog, "A"), vec!["A".to_string(), "B".to_string()]);
}
