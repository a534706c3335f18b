mod type_metadata;
mod type_metadata_parser;

pub use type_metadata::TypeMetadata;
pub use type_metadata_parser::TypeParseError;

#[cfg(test)]
mod tests;
