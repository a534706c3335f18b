use crate::resolve::ImportTable;

#[test]
fn aliases_match_case_insensitively() {
    let imports = ImportTable::new().with_import("ORM", "\\Doctrine\\ORM\\Mapping");
    assert_eq!(imports.alias("orm"), Some("Doctrine\\ORM\\Mapping"));
    assert_eq!(imports.alias("Orm"), Some("Doctrine\\ORM\\Mapping"));
    assert_eq!(imports.alias("Mapping"), None);
}

#[test]
fn later_imports_replace_earlier_ones() {
    let imports = ImportTable::new()
        .with_import("Route", "A\\Route")
        .with_import("route", "B\\Route");
    assert_eq!(imports.alias("Route"), Some("B\\Route"));
    assert_eq!(imports.aliases().count(), 1);
}

#[test]
fn namespaces_are_trimmed() {
    let imports = ImportTable::new()
        .with_current_namespace("\\App\\Controller\\")
        .with_fallback_namespace("\\Vendor\\Directives");
    assert_eq!(imports.current_namespace(), Some("App\\Controller"));
    assert_eq!(imports.fallback_namespaces(), &["Vendor\\Directives".to_string()]);
}

#[test]
fn global_namespace_is_no_namespace() {
    let imports = ImportTable::new().with_current_namespace("\\");
    assert_eq!(imports.current_namespace(), None);
}
