//! Directive semantics for docblocks.
//!
//! [`DocblockReader`] (or the lower level
//! [`DocblockParser`](parser::DocblockParser)) takes comment text and the
//! names visible at a declaration, resolves every `@Name(...)` directive to
//! a type known to the host [`TypeCatalog`](host::TypeCatalog), validates
//! its arguments against the schema derived from that type, and returns one
//! [`DirectiveInstance`] per directive. Schemas are memoized in a
//! [`Session`] that can be shared across threads.

mod builder;
mod directive_error;
mod directive_instance;
mod docblock_reader;
pub mod host;
pub mod parser;
pub mod resolve;
pub mod schema;
mod session;
mod target_set;
pub mod types;
mod value;

pub use builder::DirectiveBuilder;
pub use directive_error::DirectiveError;
pub use directive_error::Result;
pub use directive_instance::DirectiveInstance;
pub use docblock_reader::DocblockReader;
pub use session::Session;
pub use target_set::DirectiveTarget;
pub use target_set::TargetSet;
pub use value::Value;

#[cfg(test)]
mod test;
#[cfg(test)]
mod tests;
