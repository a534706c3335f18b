pub use libdocblock_core::*;

/// The lexing layer: tokens, the `&str` lexer, positions and parse errors.
pub mod lexer {
    pub use libdocblock_parser::*;
}
