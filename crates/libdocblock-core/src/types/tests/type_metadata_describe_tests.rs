use crate::types::TypeMetadata;
use crate::Value;

#[test]
fn scalars_describe_with_short_names() {
    assert_eq!(TypeMetadata::Mixed.describe(), "mixed");
    assert_eq!(TypeMetadata::Boolean.describe(), "bool");
    assert_eq!(TypeMetadata::Integer.describe(), "int");
    assert_eq!(TypeMetadata::Float.describe(), "float");
    assert_eq!(TypeMetadata::String.describe(), "string");
}

#[test]
fn untyped_array_describes_as_plain_array() {
    assert_eq!(TypeMetadata::array_of(TypeMetadata::Mixed).describe(), "array");
}

#[test]
fn array_of_int_describes_its_element_type() {
    assert_eq!(TypeMetadata::array_of(TypeMetadata::Integer).describe(), "array<int>");
}

#[test]
fn keyed_array_describes_both_type_parameters() {
    let map = TypeMetadata::Array {
        key: Box::new(TypeMetadata::String),
        value: Box::new(TypeMetadata::Integer),
    };
    assert_eq!(map.describe(), "array<string, int>");
}

#[test]
fn union_joins_members_with_pipe() {
    let union = TypeMetadata::Union(vec![
        TypeMetadata::object("Foo"),
        TypeMetadata::object("\\Bar"),
    ]);
    assert_eq!(union.describe(), "Foo|Bar");
}

#[test]
fn intersection_is_parenthesized() {
    let intersection = TypeMetadata::Intersection(vec![
        TypeMetadata::object("Countable"),
        TypeMetadata::object("JsonSerializable"),
    ]);
    assert_eq!(intersection.describe(), "(Countable&JsonSerializable)");
}

#[test]
fn objects_describe_as_their_name() {
    assert_eq!(TypeMetadata::Object(None).describe(), "object");
    assert_eq!(TypeMetadata::object("Vendor\\Route").describe(), "Vendor\\Route");
}

#[test]
fn constant_literals_describe_in_source_form() {
    assert_eq!(TypeMetadata::ConstantLiteral(Value::from("foo")).describe(), "\"foo\"");
    assert_eq!(TypeMetadata::ConstantLiteral(Value::Int(12)).describe(), "12");
    assert_eq!(TypeMetadata::ConstantLiteral(Value::Bool(true)).describe(), "true");
    assert_eq!(TypeMetadata::ConstantLiteral(Value::Null).describe(), "null");
}

#[test]
fn display_matches_describe() {
    let t = TypeMetadata::array_of(TypeMetadata::Union(vec![
        TypeMetadata::Integer,
        TypeMetadata::String,
    ]));
    assert_eq!(t.to_string(), "array<int|string>");
}
