//! This module provides the core token types produced by docblock lexers
//! and consumed by the directive parser.

mod docblock_token;
mod docblock_token_kind;

pub use docblock_token::DocblockToken;
pub use docblock_token_kind::DocblockTokenKind;

#[cfg(test)]
mod tests;
