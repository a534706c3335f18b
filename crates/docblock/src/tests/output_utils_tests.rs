use crate::output_utils;
use indexmap::IndexMap;
use libdocblock::DirectiveError;
use libdocblock::DirectiveInstance;
use libdocblock::Value;

#[test]
fn directives_render_as_nested_json() {
    let mut index = DirectiveInstance::new("App\\Index");
    index.fields.insert("columns".to_string(), Value::List(vec![Value::from("id")]));

    let mut options = IndexMap::new();
    options.insert("0".to_string(), Value::Float(f64::NAN));
    options.insert("engine".to_string(), Value::from("InnoDB"));

    let mut table = DirectiveInstance::new("App\\Table");
    table.fields.insert("indexes".to_string(), Value::List(vec![index.into()]));
    table.fields.insert("options".to_string(), Value::Map(options));
    table.fields.insert("temporary".to_string(), Value::Bool(false));

    assert_eq!(
        output_utils::directive_to_json(&table),
        serde_json::json!({
            "type": "App\\Table",
            "fields": {
                "indexes": [{"type": "App\\Index", "fields": {"columns": ["id"]}}],
                "options": {"0": null, "engine": "InnoDB"},
                "temporary": false,
            },
        }),
    );
}

#[test]
fn json_numbers_keep_their_kind() {
    let value = output_utils::json_to_value(serde_json::json!([1, -2, 2.5, "x", null, {"k": true}]));
    let mut map = IndexMap::new();
    map.insert("k".to_string(), Value::Bool(true));
    assert_eq!(
        value,
        Value::List(vec![
            Value::Int(1),
            Value::Int(-2),
            Value::Float(2.5),
            Value::from("x"),
            Value::Null,
            Value::Map(map),
        ]),
    );
}

#[test]
fn semantic_errors_render_without_snippet() {
    let err = DirectiveError::NotFound {
        name: "App\\Missing".to_string(),
        context: "class App\\Home".to_string(),
    };
    assert_eq!(output_utils::render_error(&err, "/** @Missing */"), err.to_string());
}
