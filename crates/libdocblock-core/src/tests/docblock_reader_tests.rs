use crate::parser::ParserOptions;
use crate::test::fixtures;
use crate::DirectiveError;
use crate::DocblockReader;
use crate::Session;
use crate::Value;

const CONTROLLER: &str = "App\\Controller\\ItemController";

fn reader_fixture() -> (Session, crate::host::InMemoryTypeCatalog) {
    (Session::with_default_ignored_names(), fixtures::catalog())
}

#[test]
fn reads_each_declaration_kind_at_its_target() -> crate::Result<()> {
    let (session, catalog) = reader_fixture();
    let reader = DocblockReader::new(&session, &catalog);
    let imports = fixtures::imports();

    let class = reader.read_class(
        "/** @Table(name=\"items\") */",
        &imports,
        &format!("class {CONTROLLER}"),
    )?;
    assert_eq!(class[0].type_name, fixtures::TABLE);

    let method = reader.read_method(
        concat!(
            "/**\n",
            " * Shows one item.\n",
            " *\n",
            " * @param int $id\n",
            " * @return Response\n",
            " * @Route(\"/items/{id}\", methods={\"GET\", \"HEAD\"})\n",
            " * @Cache(ttl=MAX_TTL)\n",
            " */",
        ),
        &imports,
        &format!("method {CONTROLLER}::show()"),
    )?;
    assert_eq!(
        method.iter().map(|d| d.type_name.as_str()).collect::<Vec<_>>(),
        vec![fixtures::ROUTE, fixtures::CACHE],
    );
    assert_eq!(method[1].field("ttl_ms"), Some(&Value::Int(3_600_000)));

    let property = reader.read_property(
        "/** @var string\n * @Column(type=\"string\", length=64) */",
        &imports,
        &format!("property {CONTROLLER}::$name"),
    )?;
    assert_eq!(property[0].field("length"), Some(&Value::Int(64)));
    assert_eq!(property[0].field("nullable"), Some(&Value::Bool(false)));
    Ok(())
}

#[test]
fn target_is_checked_per_declaration_kind() {
    let (session, catalog) = reader_fixture();
    let reader = DocblockReader::new(&session, &catalog);

    let result = reader.read_property(
        "/** @Cache(ttl=1) */",
        &fixtures::imports(),
        &format!("property {CONTROLLER}::$cache"),
    );
    let Err(err) = result else {
        panic!("@Cache is a method-only directive");
    };
    assert_eq!(
        err.to_string(),
        format!(
            "[Semantical Error] Directive @Cache is not allowed to be declared on property \
            {CONTROLLER}::$cache. You may only use this directive on these code elements: METHOD.",
        ),
    );
}

#[test]
fn read_nested_returns_one_value() -> crate::Result<()> {
    let (session, catalog) = reader_fixture();
    let reader = DocblockReader::new(&session, &catalog);

    let index = reader.read_nested(
        "/** @Index({\"email\"}, name=\"by_email\") */",
        &fixtures::imports(),
        "nested directive",
    )?;
    let Some(index) = index.as_directive() else {
        panic!("expected a directive, got {index:?}");
    };
    assert_eq!(index.field("columns"), Some(&Value::List(vec![Value::from("email")])));
    assert_eq!(index.field("name"), Some(&Value::from("by_email")));
    Ok(())
}

#[test]
fn options_apply_to_every_read() -> crate::Result<()> {
    let (session, catalog) = reader_fixture();
    let reader = DocblockReader::new(&session, &catalog)
        .with_options(ParserOptions::new().ignore_not_imported(true));

    let directives = reader.read_class(
        "/** @Unknown(1) @Marker */",
        &fixtures::imports(),
        &format!("class {CONTROLLER}"),
    )?;
    assert_eq!(directives.len(), 1);
    assert_eq!(directives[0].type_name, fixtures::MARKER);

    let strict = DocblockReader::new(&session, &catalog);
    let result = strict.read_class("/** @Unknown */", &fixtures::imports(), "class X");
    assert!(matches!(result, Err(DirectiveError::NeverImported { .. })), "{result:?}");
    Ok(())
}
