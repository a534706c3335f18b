use crate::host::type_lineage;
use crate::host::DirectiveFactory;
use crate::host::TypeCatalog;
use crate::parser::DirectiveArguments;
use crate::parser::DirectiveReference;
use crate::schema::meta_directives;
use crate::schema::DirectiveSchema;
use crate::schema::FieldMetadata;
use crate::DirectiveError;
use crate::DirectiveInstance;
use crate::Result;
use crate::Value;
use indexmap::IndexMap;

/// Validates a parsed [`DirectiveReference`] against its type's
/// [`DirectiveSchema`] and constructs the resulting [`DirectiveInstance`].
pub struct DirectiveBuilder<'a> {
    catalog: &'a dyn TypeCatalog,
}
impl<'a> DirectiveBuilder<'a> {
    pub fn new(catalog: &'a dyn TypeCatalog) -> Self {
        Self { catalog }
    }

    /// Runs the field checks in declaration order, then constructs the
    /// instance with the schema's [`ConstructionStrategy`].
    ///
    /// `null` arguments count as absent for the required and type checks.
    ///
    /// [`ConstructionStrategy`]: crate::schema::ConstructionStrategy
    pub fn build(
        &self,
        schema: &DirectiveSchema,
        reference: DirectiveReference,
        context: &str,
    ) -> Result<DirectiveInstance> {
        let mut arguments = reference.arguments.into_map();
        move_value_to_default_field(schema, &mut arguments);

        for field in schema.fields.values() {
            self.check_field(schema, field, &mut arguments, context)?;
        }
        // With the default field also named explicitly, `value` still lands
        // on it during injection and must pass the same checks.
        if let Some(default_field) = explicitly_named_default_field(schema, &arguments)
            && let Some(value) = arguments
                .get_mut(DirectiveArguments::DEFAULT_KEY)
                .filter(|value| !value.is_null())
        {
            self.check_value(schema, default_field, value, context)?;
        }

        let fields = if schema.constructs_via_factory() {
            self.construct(schema, arguments, context)?
        } else {
            inject_fields(schema, arguments, context)?
        };

        log::trace!("Built @{} declared on {context}.", schema.name);
        Ok(DirectiveInstance {
            type_name: schema.name.clone(),
            type_lineage: type_lineage(self.catalog, &schema.name),
            fields,
        })
    }

    fn check_field(
        &self,
        schema: &DirectiveSchema,
        field: &FieldMetadata,
        arguments: &mut IndexMap<String, Value>,
        context: &str,
    ) -> Result<()> {
        let Some(value) = arguments.get_mut(&field.name).filter(|value| !value.is_null()) else {
            if field.required {
                return Err(DirectiveError::RequiredField {
                    directive: schema.name.clone(),
                    field: field.name.clone(),
                    context: context.to_string(),
                    expected: format!("a(n) {}", field.field_type),
                });
            }
            return Ok(());
        };
        self.check_value(schema, field, value, context)
    }

    fn check_value(
        &self,
        schema: &DirectiveSchema,
        field: &FieldMetadata,
        value: &mut Value,
        context: &str,
    ) -> Result<()> {
        // `@Foo(roles="ADMIN")` for an array field means `{"ADMIN"}`.
        if field.field_type.is_array() && !value.is_array() {
            let single = std::mem::take(value);
            *value = Value::List(vec![single]);
        }

        if let Some(constraint) = &field.enum_constraint {
            let offending = if value.is_array() {
                value.array_values().into_iter().find(|item| !constraint.allows(item))
            } else {
                Some(&*value).filter(|value| !constraint.allows(value))
            };
            if let Some(offending) = offending {
                return Err(DirectiveError::EnumMismatch {
                    directive: schema.name.clone(),
                    field: field.name.clone(),
                    context: context.to_string(),
                    allowed: constraint.display_literals.clone(),
                    given: offending.to_string(),
                });
            }
        }

        if let Some(item_type) = field.field_type.array_value_type()
            && let Some(culprit) = value
                .array_values()
                .into_iter()
                .find(|item| !item_type.validate(item))
        {
            let item_type = item_type.describe();
            return Err(DirectiveError::TypeMismatch {
                directive: schema.name.clone(),
                field: field.name.clone(),
                context: context.to_string(),
                expected: format!("either a(n) {item_type}, or an array of {item_type}s"),
                actual: culprit.kind_description(),
            });
        }

        if !field.field_type.validate(value) {
            return Err(DirectiveError::TypeMismatch {
                directive: schema.name.clone(),
                field: field.name.clone(),
                context: context.to_string(),
                expected: format!("a(n) {}", field.field_type),
                actual: value.kind_description(),
            });
        }
        Ok(())
    }

    fn construct(
        &self,
        schema: &DirectiveSchema,
        arguments: IndexMap<String, Value>,
        context: &str,
    ) -> Result<IndexMap<String, Value>> {
        let factory: Option<&dyn DirectiveFactory> =
            match meta_directives::builtin_factory(&schema.name) {
                Some(factory) => Some(factory),
                None => self.catalog.factory(&schema.name),
            };
        let Some(factory) = factory else {
            return Ok(arguments);
        };
        factory
            .construct(&schema.name, &arguments)
            .map_err(|message| DirectiveError::Factory {
                directive: schema.name.clone(),
                context: context.to_string(),
                message,
            })
    }
}

/// When the default field was not named explicitly, the collapsed
/// positional arguments under `value` are its input.
fn move_value_to_default_field(schema: &DirectiveSchema, arguments: &mut IndexMap<String, Value>) {
    let Some(default_field) = schema.default_field.as_deref() else {
        return;
    };
    if default_field == DirectiveArguments::DEFAULT_KEY
        || arguments.get(default_field).is_some_and(|value| !value.is_null())
    {
        return;
    }
    if let Some(value) = arguments
        .shift_remove(DirectiveArguments::DEFAULT_KEY)
        .filter(|value| !value.is_null())
    {
        arguments.insert(default_field.to_string(), value);
    }
}

fn explicitly_named_default_field<'s>(
    schema: &'s DirectiveSchema,
    arguments: &IndexMap<String, Value>,
) -> Option<&'s FieldMetadata> {
    let name = schema.default_field.as_deref()?;
    if schema.fields.contains_key(DirectiveArguments::DEFAULT_KEY)
        || !arguments.contains_key(DirectiveArguments::DEFAULT_KEY)
    {
        return None;
    }
    schema.fields.get(name)
}

/// Starts from every field's default value and assigns the arguments one at
/// a time.
fn inject_fields(
    schema: &DirectiveSchema,
    arguments: IndexMap<String, Value>,
    context: &str,
) -> Result<IndexMap<String, Value>> {
    for key in arguments.keys() {
        if schema.fields.contains_key(key) {
            continue;
        }
        if key != DirectiveArguments::DEFAULT_KEY {
            return Err(DirectiveError::UnknownField {
                directive: schema.name.clone(),
                field: key.clone(),
                context: context.to_string(),
                available: schema.field_names(),
            });
        }
        if schema.default_field.is_none() {
            return Err(DirectiveError::AcceptsNoValues {
                directive: schema.name.clone(),
                context: context.to_string(),
                given: Value::Map(arguments.clone()).to_string(),
            });
        }
    }

    let mut fields: IndexMap<String, Value> = schema
        .fields
        .values()
        .map(|field| (field.name.clone(), field.default_value.clone()))
        .collect();
    for (key, value) in arguments {
        let name = match (schema.fields.contains_key(&key), &schema.default_field) {
            (false, Some(default_field)) => default_field.clone(),
            _ => key,
        };
        fields.insert(name, value);
    }
    Ok(fields)
}
