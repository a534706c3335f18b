use crate::host::InMemoryTypeCatalog;
use crate::host::PropertyDefinition;
use crate::host::TypeDefinition;
use crate::Value;
use indexmap::IndexMap;

fn catalog() -> InMemoryTypeCatalog {
    InMemoryTypeCatalog::new()
        .with_type(
            TypeDefinition::new("\\App\\Route")
                .with_docblock("/**\n * @Annotation\n */")
                .with_property(PropertyDefinition::new("path"))
                .with_constant("GET", "GET"),
        )
        .with_type(TypeDefinition::new("App\\Plain").with_docblock("/** A plain type */"))
        .with_global_constant("PHP_EOL", "\n")
}

#[test]
fn leading_separator_is_ignored_on_lookup_and_insert() {
    let catalog = catalog();
    assert!(catalog.type_exists("App\\Route"));
    assert!(catalog.type_exists("\\App\\Route"));
    assert_eq!(
        catalog.type_definition("\\App\\Route").map(|d| d.name.as_str()),
        Some("App\\Route"),
    );
}

#[test]
fn type_names_are_case_sensitive() {
    assert!(!catalog().type_exists("app\\route"));
}

#[test]
fn directive_marker_comes_from_the_docblock() {
    let catalog = catalog();
    assert!(catalog.is_marked_as_directive_type("App\\Route"));
    assert!(!catalog.is_marked_as_directive_type("App\\Plain"));
    assert!(!catalog.is_marked_as_directive_type("App\\Missing"));
}

#[test]
fn class_and_global_constants() {
    let catalog = catalog();
    assert_eq!(catalog.constant("App\\Route::GET"), Some(Value::from("GET")));
    assert_eq!(catalog.constant("App\\Route::POST"), None);
    assert_eq!(catalog.constant("PHP_EOL"), Some(Value::from("\n")));
    assert_eq!(catalog.constant("\\PHP_EOL"), Some(Value::from("\n")));
    assert_eq!(catalog.constant("Missing::GET"), None);
}

#[test]
fn closures_register_as_factories() {
    let catalog = catalog().with_factory(
        "App\\Route",
        |_: &str, args: &IndexMap<String, Value>| -> Result<IndexMap<String, Value>, String> {
            let mut fields = IndexMap::new();
            fields.insert("argument_count".to_string(), Value::Int(args.len() as i64));
            Ok(fields)
        },
    );

    let factory = catalog.factory("\\App\\Route").expect("factory registered");
    let mut args = IndexMap::new();
    args.insert("value".to_string(), Value::from("/"));
    let fields = factory.construct("App\\Route", &args).unwrap();
    assert_eq!(fields.get("argument_count"), Some(&Value::Int(1)));

    assert!(catalog.factory("App\\Plain").is_none());
}
