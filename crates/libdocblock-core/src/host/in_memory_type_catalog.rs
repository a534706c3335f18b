use crate::host::DirectiveFactory;
use crate::host::TypeCatalog;
use crate::host::TypeDefinition;
use crate::Value;
use std::collections::HashMap;

/// A [`TypeCatalog`] backed by plain maps.
///
/// ```
/// use libdocblock_core::host::InMemoryTypeCatalog;
/// use libdocblock_core::host::TypeDefinition;
///
/// let catalog = InMemoryTypeCatalog::new()
///     .with_type(TypeDefinition::new("App\\Route").with_docblock("/** @Annotation */"));
/// assert!(catalog.type_exists("App\\Route"));
/// ```
#[derive(Default)]
pub struct InMemoryTypeCatalog {
    types: HashMap<String, TypeDefinition>,
    global_constants: HashMap<String, Value>,
    factories: HashMap<String, Box<dyn DirectiveFactory>>,
}

impl std::fmt::Debug for InMemoryTypeCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryTypeCatalog")
            .field("types", &self.types.keys().collect::<Vec<_>>())
            .field("global_constants", &self.global_constants.keys().collect::<Vec<_>>())
            .field("factories", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl InMemoryTypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_type(&mut self, definition: TypeDefinition) {
        let name = normalize(&definition.name).to_string();
        self.types.insert(name, definition);
    }

    pub fn with_type(mut self, definition: TypeDefinition) -> Self {
        self.add_type(definition);
        self
    }

    pub fn add_global_constant(&mut self, name: impl AsRef<str>, value: impl Into<Value>) {
        self.global_constants
            .insert(normalize(name.as_ref()).to_string(), value.into());
    }

    pub fn with_global_constant(mut self, name: impl AsRef<str>, value: impl Into<Value>) -> Self {
        self.add_global_constant(name, value);
        self
    }

    pub fn add_factory(&mut self, type_name: impl AsRef<str>, factory: impl DirectiveFactory + 'static) {
        self.factories
            .insert(normalize(type_name.as_ref()).to_string(), Box::new(factory));
    }

    pub fn with_factory(
        mut self,
        type_name: impl AsRef<str>,
        factory: impl DirectiveFactory + 'static,
    ) -> Self {
        self.add_factory(type_name, factory);
        self
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[inherent::inherent]
impl TypeCatalog for InMemoryTypeCatalog {
    pub fn type_exists(&self, name: &str) -> bool {
        self.types.contains_key(normalize(name))
    }

    pub fn type_definition(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(normalize(name))
    }

    pub fn is_marked_as_directive_type(&self, name: &str) -> bool {
        self.type_definition(name)
            .is_some_and(|definition| definition.docblock.contains("@Annotation"))
    }

    pub fn constant(&self, name: &str) -> Option<Value> {
        match name.rsplit_once("::") {
            Some((type_name, constant_name)) => self
                .type_definition(type_name)?
                .constants
                .get(constant_name)
                .cloned(),
            None => self.global_constants.get(normalize(name)).cloned(),
        }
    }

    pub fn supertypes(&self, name: &str) -> Vec<String> {
        self.type_definition(name)
            .map(|definition| definition.supertypes.clone())
            .unwrap_or_default()
    }

    pub fn factory(&self, name: &str) -> Option<&dyn DirectiveFactory> {
        self.factories.get(normalize(name)).map(|factory| factory.as_ref())
    }
}

fn normalize(name: &str) -> &str {
    name.trim_start_matches('\\')
}
