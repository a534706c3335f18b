use crate::host::TypeCatalog;
use crate::host::TypeDefinition;
use crate::parser::DocblockParser;
use crate::parser::ParserOptions;
use crate::schema::meta_directives;
use crate::schema::ConstructionStrategy;
use crate::schema::DirectiveSchema;
use crate::schema::EnumConstraint;
use crate::schema::FieldMetadata;
use crate::types::TypeMetadata;
use crate::DirectiveError;
use crate::DirectiveInstance;
use crate::DirectiveTarget;
use crate::Result;
use crate::Session;
use crate::TargetSet;
use crate::Value;
use indexmap::IndexMap;
use std::sync::Arc;

/// Outcome of a schema lookup for a type that exists.
#[derive(Clone, Debug)]
pub enum SchemaLookup {
    Directive(Arc<DirectiveSchema>),

    /// The type exists but is not marked as a directive type.
    NotADirectiveType,
}

/// Computes [`DirectiveSchema`]s from a type's definition-level docblock and
/// memoizes them in the [`Session`].
///
/// Building a schema parses the type's own docblock with a fresh
/// [`DocblockParser`] that only sees the built-in meta-directives. That
/// parse can in turn need the schema of another type, so each registry
/// carries the chain of types currently being built and rejects a type that
/// shows up in its own chain.
pub struct SchemaRegistry<'a> {
    session: &'a Session,
    catalog: &'a dyn TypeCatalog,
    building: Vec<String>,
}
impl<'a> SchemaRegistry<'a> {
    pub fn new(session: &'a Session, catalog: &'a dyn TypeCatalog) -> Self {
        Self {
            session,
            catalog,
            building: vec![],
        }
    }

    pub(crate) fn with_building_chain(mut self, building: Vec<String>) -> Self {
        self.building = building;
        self
    }

    pub fn schema(&self, qualified_name: &str) -> Result<SchemaLookup> {
        let name = qualified_name.trim_start_matches('\\');

        if let Some(schema) = meta_directives::builtin_schema(name) {
            return Ok(SchemaLookup::Directive(schema));
        }
        if let Some(schema) = self.session.schema(name) {
            log::trace!("Directive schema cache hit for `{name}`.");
            return Ok(SchemaLookup::Directive(schema));
        }
        if self.session.is_known_non_directive_type(name) {
            return Ok(SchemaLookup::NotADirectiveType);
        }

        if self.building.iter().any(|building| building == name) {
            let mut chain = self.building.clone();
            chain.push(name.to_string());
            return Err(DirectiveError::CyclicSchemaDefinition {
                type_name: name.to_string(),
                chain,
            });
        }

        if !self.catalog.is_marked_as_directive_type(name) {
            log::debug!("`{name}` is not marked as a directive type.");
            self.session.mark_non_directive_type(name);
            return Ok(SchemaLookup::NotADirectiveType);
        }

        log::debug!("Building directive schema for `{name}`...");
        let schema = self.build_schema(name)?;
        log::debug!(
            "Built directive schema for `{name}` with {} field(s), targets: {}.",
            schema.fields.len(),
            schema.target,
        );
        Ok(SchemaLookup::Directive(self.session.insert_schema(schema)))
    }

    fn build_schema(&self, name: &str) -> Result<DirectiveSchema> {
        let definition = self.catalog.type_definition(name);
        let docblock = definition.map(|d| d.docblock.as_str()).unwrap_or_default();

        let mut chain = self.building.clone();
        chain.push(name.to_string());
        let parser = DocblockParser::new(self.session, self.catalog)
            .with_options(ParserOptions::new().ignore_not_imported(true))
            .with_schema_chain(chain);

        let mut target = TargetSet::ALL;
        let mut target_literal = None;
        let mut attribute_fields = IndexMap::new();

        let type_directives = parser
            .parse(
                docblock,
                meta_directives::bootstrap_imports(),
                DirectiveTarget::Class,
                &format!("class @{name}"),
            )
            .map_err(|err| into_schema_error(name, err))?;
        for directive in type_directives {
            if directive.is_instance_of(meta_directives::TARGET) {
                if let Some(Value::Int(bits)) = directive.field("targets") {
                    target = TargetSet::from_bits(*bits as u8);
                }
                target_literal = directive.field("literal").and_then(Value::as_str).map(str::to_string);
            } else if directive.is_instance_of(meta_directives::ATTRIBUTES) {
                let attributes = directive.field("value").map(Value::array_values).unwrap_or_default();
                for attribute in attributes.into_iter().filter_map(Value::as_directive) {
                    let field = field_from_attribute(name, attribute)?;
                    attribute_fields.insert(field.name.clone(), field);
                }
            }
        }

        if definition.is_some_and(TypeDefinition::has_constructor) {
            return DirectiveSchema::try_new(
                name,
                target,
                target_literal,
                attribute_fields,
                ConstructionStrategy::ViaFactory,
            );
        }

        let properties = definition.map(|d| d.properties.as_slice()).unwrap_or_default();
        let mut fields = IndexMap::new();
        for (idx, property) in properties.iter().enumerate() {
            let mut field = attribute_fields
                .get(&property.name)
                .cloned()
                .unwrap_or_else(|| FieldMetadata::new(&property.name, TypeMetadata::Mixed));

            if !property.docblock.is_empty() {
                let declared_type = var_annotation(&property.docblock).unwrap_or("mixed");
                field.field_type = parse_field_type(name, declared_type)?;
                field.declared_type = declared_type.to_string();
                field.required = property.docblock.contains("@Required");

                if property.docblock.contains("@Enum") {
                    let property_directives = parser
                        .parse(
                            &property.docblock,
                            meta_directives::bootstrap_imports(),
                            DirectiveTarget::Property,
                            &format!("property {name}::${}", property.name),
                        )
                        .map_err(|err| into_schema_error(name, err))?;
                    if let Some(directive) = property_directives
                        .iter()
                        .find(|d| d.is_instance_of(meta_directives::ENUM))
                    {
                        field.enum_constraint = Some(enum_constraint(directive));
                    }
                }
            }

            field.is_default_field = idx == 0;
            field.default_value = property.default_value.clone();
            fields.insert(property.name.clone(), field);
        }

        DirectiveSchema::try_new(
            name,
            target,
            target_literal,
            fields,
            ConstructionStrategy::ViaFieldInjection,
        )
    }
}

/// Meta-directive factories reject malformed declarations (an unknown
/// `@Target` literal, a non-scalar `@Enum` value); those are schema errors
/// of the type being built.
fn into_schema_error(type_name: &str, err: DirectiveError) -> DirectiveError {
    match err {
        DirectiveError::Factory { message, .. } => DirectiveError::InvalidSchema {
            type_name: type_name.to_string(),
            message,
        },
        other => other,
    }
}

fn field_from_attribute(type_name: &str, attribute: &DirectiveInstance) -> Result<FieldMetadata> {
    let text_field = |field: &str| {
        attribute.field(field).and_then(Value::as_str).ok_or_else(|| DirectiveError::InvalidSchema {
            type_name: type_name.to_string(),
            message: format!("@Attribute requires a string `{field}`"),
        })
    };
    let name = text_field("name")?;
    let declared_type = text_field("type")?;
    let required = matches!(attribute.field("required"), Some(Value::Bool(true)));

    Ok(FieldMetadata::new(name, parse_field_type(type_name, declared_type)?)
        .with_declared_type(declared_type)
        .required(required))
}

fn parse_field_type(type_name: &str, declared_type: &str) -> Result<TypeMetadata> {
    TypeMetadata::parse(declared_type).map_err(|err| DirectiveError::InvalidSchema {
        type_name: type_name.to_string(),
        message: err.to_string(),
    })
}

/// The type following the first `@var` that is followed by whitespace.
fn var_annotation(docblock: &str) -> Option<&str> {
    docblock.match_indices("@var").find_map(|(idx, tag)| {
        let rest = &docblock[idx + tag.len()..];
        let trimmed = rest.trim_start();
        if trimmed.len() == rest.len() {
            return None;
        }
        trimmed.split_whitespace().next()
    })
}

fn enum_constraint(directive: &DirectiveInstance) -> EnumConstraint {
    let values: Vec<Value> = directive
        .field("value")
        .map(|v| v.array_values().into_iter().cloned().collect())
        .unwrap_or_default();
    let display_literals: Vec<String> = directive
        .field("literal")
        .map(|literal| literal.array_values().into_iter().map(Value::to_message_string).collect())
        .unwrap_or_default();

    let constraint = EnumConstraint::new(values);
    if display_literals.is_empty() {
        constraint
    } else {
        constraint.with_display_literals(display_literals)
    }
}
