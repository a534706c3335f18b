use crate::parser::DirectiveArguments;
use libdocblock_parser::DocblockSourceSpan;

/// One parsed directive occurrence, before the builder turns it into a
/// [`DirectiveInstance`](crate::DirectiveInstance).
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveReference {
    /// The name as written, e.g. `ORM\Column`.
    pub name: String,

    pub qualified_name: String,

    pub arguments: DirectiveArguments,

    /// Whether the directive appeared inside another directive's arguments.
    pub nested: bool,

    /// From the `@` to the end of the name or the closing `)`.
    pub span: DocblockSourceSpan,
}
