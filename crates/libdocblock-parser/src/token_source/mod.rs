//! Token source trait and implementations.

mod docblock_token_source;
mod str_to_docblock_token_source;

pub use docblock_token_source::DocblockTokenSource;
pub use str_to_docblock_token_source::StrDocblockTokenSource;

#[cfg(test)]
mod tests;
