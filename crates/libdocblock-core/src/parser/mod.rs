//! The recursive-descent directive parser.
//!
//! ```text
//! Directives  ::= { Directive | skipped-text }*
//! Directive   ::= "@" Name [ "(" [ Arguments ] ")" ]
//! Arguments   ::= Argument { "," Argument } [ "," ]
//! Argument    ::= Identifier "=" PlainValue | PlainValue
//! PlainValue  ::= String | Integer | Float | true | false | null
//!               | Array | Directive | Constant
//! Array       ::= "{" [ ArrayEntry { "," ArrayEntry } [ "," ] ] "}"
//! ArrayEntry  ::= ( Constant | Integer | String ) ( "=" | ":" ) PlainValue
//!               | PlainValue
//! Constant    ::= Name [ "::" Identifier ]
//! ```

mod directive_arguments;
mod directive_reference;
mod docblock_parser;
mod parser_options;

pub use directive_arguments::DirectiveArguments;
pub use directive_reference::DirectiveReference;
pub use docblock_parser::DocblockParser;
pub use parser_options::ParserOptions;

/// Directives and arrays may nest at most this deep.
pub const MAX_NESTING_DEPTH: usize = 64;

#[cfg(test)]
mod tests;
