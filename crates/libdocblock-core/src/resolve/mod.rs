mod import_table;
mod name_resolver;

pub use import_table::ImportTable;
pub use name_resolver::NameResolver;
pub use name_resolver::ResolveFailure;

#[cfg(test)]
mod tests;
