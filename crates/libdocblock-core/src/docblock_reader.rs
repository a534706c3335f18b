use crate::host::TypeCatalog;
use crate::parser::DocblockParser;
use crate::parser::ParserOptions;
use crate::resolve::ImportTable;
use crate::DirectiveInstance;
use crate::DirectiveTarget;
use crate::Result;
use crate::Session;
use crate::Value;

/// Reads the directives of declaration docblocks.
///
/// ```
/// use libdocblock_core::host::InMemoryTypeCatalog;
/// use libdocblock_core::host::TypeDefinition;
/// use libdocblock_core::resolve::ImportTable;
/// use libdocblock_core::DocblockReader;
/// use libdocblock_core::Session;
///
/// let catalog = InMemoryTypeCatalog::new().with_type(
///     TypeDefinition::new("App\\Route")
///         .with_docblock("/** @Annotation */")
///         .with_constructor_parameter("values"),
/// );
/// let session = Session::with_default_ignored_names();
/// let reader = DocblockReader::new(&session, &catalog);
///
/// let imports = ImportTable::new().with_import("Route", "App\\Route");
/// let directives = reader
///     .read_method("/** @param int $id\n * @Route(\"/users\") */", &imports, "method Users::show()")
///     .unwrap();
/// assert_eq!(directives.len(), 1);
/// assert_eq!(directives[0].type_name, "App\\Route");
/// ```
pub struct DocblockReader<'a> {
    session: &'a Session,
    catalog: &'a dyn TypeCatalog,
    options: ParserOptions,
}
impl<'a> DocblockReader<'a> {
    pub fn new(session: &'a Session, catalog: &'a dyn TypeCatalog) -> Self {
        Self {
            session,
            catalog,
            options: ParserOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    pub fn read_class(
        &self,
        docblock: &str,
        imports: &ImportTable,
        context: &str,
    ) -> Result<Vec<DirectiveInstance>> {
        self.parser().parse(docblock, imports, DirectiveTarget::Class, context)
    }

    pub fn read_method(
        &self,
        docblock: &str,
        imports: &ImportTable,
        context: &str,
    ) -> Result<Vec<DirectiveInstance>> {
        self.parser().parse(docblock, imports, DirectiveTarget::Method, context)
    }

    pub fn read_property(
        &self,
        docblock: &str,
        imports: &ImportTable,
        context: &str,
    ) -> Result<Vec<DirectiveInstance>> {
        self.parser().parse(docblock, imports, DirectiveTarget::Property, context)
    }

    /// Reads the first directive of `docblock` as a nested directive.
    pub fn read_nested(&self, docblock: &str, imports: &ImportTable, context: &str) -> Result<Value> {
        self.parser().parse_nested(docblock, imports, context)
    }

    fn parser(&self) -> DocblockParser<'a> {
        DocblockParser::new(self.session, self.catalog).with_options(self.options.clone())
    }
}
