use libdocblock::DirectiveError;
use libdocblock::DirectiveInstance;
use libdocblock::Value;

pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274c}";

/// `{"type": ..., "fields": {...}}`. Nested directives render the same way.
pub(crate) fn directive_to_json(instance: &DirectiveInstance) -> serde_json::Value {
    let fields: serde_json::Map<String, serde_json::Value> = instance
        .fields
        .iter()
        .map(|(name, value)| (name.clone(), value_to_json(value)))
        .collect();
    serde_json::json!({
        "type": instance.type_name,
        "fields": fields,
    })
}

pub(crate) fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(i) => serde_json::Value::from(*i),
        // NaN and infinities have no JSON form.
        Value::Float(x) => serde_json::Number::from_f64(*x)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::List(items) => items.iter().map(value_to_json).collect(),
        Value::Map(entries) => serde_json::Value::Object(
            entries
                .iter()
                .map(|(key, item)| (key.clone(), value_to_json(item)))
                .collect(),
        ),
        Value::Directive(instance) => directive_to_json(instance),
    }
}

/// Converts catalog constants and property defaults written as JSON.
pub(crate) fn json_to_value(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => n
            .as_i64()
            .map(Value::Int)
            .or_else(|| n.as_f64().map(Value::Float))
            .unwrap_or_default(),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(items) => {
            Value::List(items.into_iter().map(json_to_value).collect())
        },
        serde_json::Value::Object(entries) => Value::Map(
            entries
                .into_iter()
                .map(|(key, item)| (key, json_to_value(item)))
                .collect(),
        ),
    }
}

/// The error message, followed by a source snippet for lexical and syntax
/// errors.
pub(crate) fn render_error(err: &DirectiveError, docblock: &str) -> String {
    match err.parse_error() {
        Some(detail) => format!("{err}\n{}", detail.format_detailed(Some(docblock))),
        None => err.to_string(),
    }
}
