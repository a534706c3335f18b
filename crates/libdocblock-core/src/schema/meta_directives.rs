//! The four built-in meta-directives a directive type uses to describe
//! itself: `@Target`, `@Attributes`, `@Attribute` and `@Enum`.
//!
//! They are factory-constructed and never looked up in the host catalog.

use crate::host::DirectiveFactory;
use crate::resolve::ImportTable;
use crate::schema::ConstructionStrategy;
use crate::schema::DirectiveSchema;
use crate::schema::FieldMetadata;
use crate::types::TypeMetadata;
use crate::TargetSet;
use crate::Value;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::OnceLock;

pub const TARGET: &str = "Libdocblock\\Meta\\Target";
pub const ATTRIBUTES: &str = "Libdocblock\\Meta\\Attributes";
pub const ATTRIBUTE: &str = "Libdocblock\\Meta\\Attribute";
pub const ENUM: &str = "Libdocblock\\Meta\\Enum";

type BuiltinFactory =
    fn(&str, &IndexMap<String, Value>) -> Result<IndexMap<String, Value>, String>;

static TARGET_FACTORY: BuiltinFactory = construct_target;
static ATTRIBUTES_FACTORY: BuiltinFactory = construct_attributes;
static ATTRIBUTE_FACTORY: BuiltinFactory = construct_attribute;
static ENUM_FACTORY: BuiltinFactory = construct_enum;

pub fn is_builtin(name: &str) -> bool {
    builtin_schemas().contains_key(name)
}

pub fn builtin_schema(name: &str) -> Option<Arc<DirectiveSchema>> {
    builtin_schemas().get(name).cloned()
}

pub(crate) fn builtin_factory(name: &str) -> Option<&'static dyn DirectiveFactory> {
    let factory: &'static dyn DirectiveFactory = match name {
        TARGET => &TARGET_FACTORY,
        ATTRIBUTES => &ATTRIBUTES_FACTORY,
        ATTRIBUTE => &ATTRIBUTE_FACTORY,
        ENUM => &ENUM_FACTORY,
        _ => return None,
    };
    Some(factory)
}

/// The only names visible while a directive type's own docblock is parsed.
pub fn bootstrap_imports() -> &'static ImportTable {
    static BOOTSTRAP_IMPORTS: OnceLock<ImportTable> = OnceLock::new();
    BOOTSTRAP_IMPORTS.get_or_init(|| {
        ImportTable::new()
            .with_import("target", TARGET)
            .with_import("attributes", ATTRIBUTES)
            .with_import("attribute", ATTRIBUTE)
            .with_import("enum", ENUM)
    })
}

fn builtin_schemas() -> &'static HashMap<&'static str, Arc<DirectiveSchema>> {
    static BUILTIN_SCHEMAS: OnceLock<HashMap<&'static str, Arc<DirectiveSchema>>> =
        OnceLock::new();
    BUILTIN_SCHEMAS.get_or_init(|| {
        HashMap::from([
            (
                TARGET,
                builtin(
                    TARGET,
                    TargetSet::CLASS,
                    [FieldMetadata::new("value", TypeMetadata::array_of(TypeMetadata::String))
                        .required(true)],
                ),
            ),
            (
                ATTRIBUTES,
                builtin(
                    ATTRIBUTES,
                    TargetSet::CLASS,
                    [FieldMetadata::new(
                        "value",
                        TypeMetadata::array_of(TypeMetadata::object(ATTRIBUTE)),
                    )
                    .required(true)],
                ),
            ),
            (
                ATTRIBUTE,
                builtin(
                    ATTRIBUTE,
                    TargetSet::NESTED,
                    [
                        FieldMetadata::new("name", TypeMetadata::String)
                            .required(true)
                            .as_default_field(),
                        FieldMetadata::new("type", TypeMetadata::String).required(true),
                        FieldMetadata::new("required", TypeMetadata::Boolean)
                            .with_default_value(Value::Bool(false)),
                    ],
                ),
            ),
            (
                ENUM,
                builtin(
                    ENUM,
                    TargetSet::PROPERTY,
                    [
                        FieldMetadata::new("value", TypeMetadata::array_of(TypeMetadata::Mixed))
                            .required(true),
                        FieldMetadata::new("literal", TypeMetadata::array_of(TypeMetadata::Mixed)),
                    ],
                ),
            ),
        ])
    })
}

fn builtin<const N: usize>(
    name: &str,
    target: TargetSet,
    fields: [FieldMetadata; N],
) -> Arc<DirectiveSchema> {
    let default_field = fields
        .iter()
        .find(|field| field.is_default_field)
        .map(|field| field.name.clone());
    Arc::new(DirectiveSchema {
        name: name.to_string(),
        target,
        target_literal: Some(target.describe()),
        fields: fields
            .into_iter()
            .map(|field| (field.name.clone(), field))
            .collect(),
        default_field,
        construction: ConstructionStrategy::ViaFactory,
    })
}

fn construct_target(
    _type_name: &str,
    arguments: &IndexMap<String, Value>,
) -> Result<IndexMap<String, Value>, String> {
    let literals = match arguments.get("value") {
        Some(Value::String(literal)) => vec![literal.clone()],
        Some(Value::List(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(literal) => Ok(literal.clone()),
                other => Err(format!(
                    "@Target expects either a string value, or an array of strings, \"{other}\" given."
                )),
            })
            .collect::<Result<Vec<_>, _>>()?,
        other => {
            return Err(format!(
                "@Target expects either a string value, or an array of strings, \"{}\" given.",
                other.cloned().unwrap_or_default(),
            ));
        },
    };

    let mut targets = TargetSet::NONE;
    for literal in &literals {
        let Some(target) = TargetSet::from_literal(literal) else {
            return Err(format!(
                "Invalid Target \"{literal}\". Available targets: [{}]",
                TargetSet::AVAILABLE_LITERALS.join(", "),
            ));
        };
        if targets.contains(target) {
            log::debug!("@Target literal `{literal}` is already covered and has no effect.");
        }
        targets |= target;
    }

    let mut fields = IndexMap::new();
    fields.insert(
        "value".to_string(),
        Value::List(literals.iter().cloned().map(Value::String).collect()),
    );
    fields.insert("targets".to_string(), Value::Int(i64::from(targets.bits())));
    fields.insert("literal".to_string(), Value::String(literals.join(", ")));
    Ok(fields)
}

fn construct_attributes(
    _type_name: &str,
    arguments: &IndexMap<String, Value>,
) -> Result<IndexMap<String, Value>, String> {
    let mut fields = IndexMap::new();
    fields.insert(
        "value".to_string(),
        arguments.get("value").cloned().unwrap_or(Value::List(vec![])),
    );
    Ok(fields)
}

fn construct_attribute(
    _type_name: &str,
    arguments: &IndexMap<String, Value>,
) -> Result<IndexMap<String, Value>, String> {
    let mut fields = IndexMap::new();
    for name in ["name", "type"] {
        fields.insert(name.to_string(), arguments.get(name).cloned().unwrap_or_default());
    }
    if let Some(type_text) = arguments.get("type").and_then(Value::as_str) {
        TypeMetadata::parse(type_text).map_err(|err| err.to_string())?;
    }
    let required = match arguments.get("required") {
        None | Some(Value::Null) => Value::Bool(false),
        Some(required) => required.clone(),
    };
    fields.insert("required".to_string(), required);
    Ok(fields)
}

fn construct_enum(
    _type_name: &str,
    arguments: &IndexMap<String, Value>,
) -> Result<IndexMap<String, Value>, String> {
    let values = arguments.get("value").cloned().unwrap_or(Value::List(vec![]));
    for value in values.array_values() {
        if !value.is_scalar() {
            return Err(format!("@Enum supports only scalar values \"{value}\" given."));
        }
    }

    let literal = match arguments.get("literal") {
        None | Some(Value::Null) => Value::Map(IndexMap::new()),
        Some(literal) => literal.clone(),
    };
    let allowed = values.array_values();
    let literal_keys: Vec<(Value, &Value)> = match &literal {
        Value::Map(entries) => entries
            .iter()
            .map(|(key, display)| (Value::map_key_as_value(key), display))
            .collect(),
        Value::List(items) => items
            .iter()
            .enumerate()
            .map(|(idx, display)| (Value::Int(idx as i64), display))
            .collect(),
        _ => vec![],
    };
    for (key, display) in literal_keys {
        if !allowed.contains(&&key) {
            return Err(format!(
                "Undefined enumerator value \"{}\" for literal \"{}\".",
                key.to_message_string(),
                display.to_message_string(),
            ));
        }
    }

    let mut fields = IndexMap::new();
    fields.insert("value".to_string(), values);
    fields.insert("literal".to_string(), literal);
    Ok(fields)
}
