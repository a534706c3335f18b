use crate::session::normalize_prefix;
use std::collections::HashSet;

/// Per-parse settings layered on top of the [`Session`](crate::Session).
#[derive(Clone, Debug, Default)]
pub struct ParserOptions {
    ignore_not_imported: bool,
    ignored_names: HashSet<String>,
    ignored_namespace_prefixes: Vec<String>,
}
impl ParserOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Silently drop directives whose names cannot be resolved instead of
    /// failing.
    pub fn ignore_not_imported(mut self, ignore: bool) -> Self {
        self.ignore_not_imported = ignore;
        self
    }

    pub fn with_ignored_name(mut self, name: impl Into<String>) -> Self {
        self.ignored_names.insert(name.into());
        self
    }

    pub fn with_ignored_namespace_prefix(mut self, prefix: impl AsRef<str>) -> Self {
        self.ignored_namespace_prefixes
            .push(normalize_prefix(prefix.as_ref()));
        self
    }

    pub fn ignores_not_imported(&self) -> bool {
        self.ignore_not_imported
    }

    pub(crate) fn ignores(&self, name: &str) -> bool {
        if self.ignored_names.contains(name) {
            return true;
        }
        let candidate = normalize_prefix(name);
        self.ignored_namespace_prefixes
            .iter()
            .any(|prefix| candidate.starts_with(prefix.as_str()))
    }
}
