use crate::schema::SchemaLookup;
use crate::schema::SchemaRegistry;
use crate::schema::SchemaStore;
use crate::schema::SchemaStoreError;
use crate::test::fixtures;
use crate::Session;

#[test]
fn exported_schemas_warm_a_new_session() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = fixtures::catalog();
    let session = Session::new();
    let registry = SchemaRegistry::new(&session, &catalog);
    for name in [fixtures::ROUTE, fixtures::COLUMN, fixtures::CACHE] {
        registry.schema(name)?;
    }
    let bytes = SchemaStore::export(&session)?;

    let warmed = Session::new();
    assert_eq!(SchemaStore::import(&warmed, &bytes)?, 3);
    assert_eq!(warmed.schema_count(), 3);
    for name in [fixtures::ROUTE, fixtures::COLUMN, fixtures::CACHE] {
        assert_eq!(warmed.schema(name), session.schema(name), "{name}");
    }

    // Imported schemas are served without consulting the type's docblock.
    let SchemaLookup::Directive(route) = SchemaRegistry::new(&warmed, &catalog).schema(fixtures::ROUTE)? else {
        panic!("expected a directive schema");
    };
    assert_eq!(Some(route), warmed.schema(fixtures::ROUTE));
    Ok(())
}

#[test]
fn import_keeps_schemas_the_session_already_has() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = fixtures::catalog();
    let session = Session::new();
    SchemaRegistry::new(&session, &catalog).schema(fixtures::ROUTE)?;
    let bytes = SchemaStore::export(&session)?;

    let existing = session.schema(fixtures::ROUTE);
    assert_eq!(SchemaStore::import(&session, &bytes)?, 0);
    let after = session.schema(fixtures::ROUTE);
    assert!(std::sync::Arc::ptr_eq(&existing.unwrap(), &after.unwrap()));
    Ok(())
}

#[test]
fn garbage_fails_to_decode() {
    let session = Session::new();
    let result = SchemaStore::import(&session, &[0xff, 0xff, 0xff]);
    assert!(matches!(result, Err(SchemaStoreError::Decode(_))), "{result:?}");
    assert_eq!(session.schema_count(), 0);
}
