use crate::schema::DirectiveSchema;
use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;

/// Tags commonly found in documentation comments that are never
/// directives, plus the markers the schema registry reads as plain text.
const DEFAULT_IGNORED_NAMES: &[&str] = &[
    // Meta markers
    "Annotation", "Attribute", "Attributes", "Required", "Target",
    // Documentation tags
    "abstract", "access", "api", "author", "category", "code", "codeCoverageIgnore",
    "codeCoverageIgnoreEnd", "codeCoverageIgnoreStart", "copyright", "deprecated",
    "endcode", "example", "exception", "filesource", "final", "fixme", "global",
    "ignore", "inheritDoc", "inheritdoc", "internal", "license", "link", "method",
    "override", "package", "param", "private", "property", "property-read",
    "property-write", "return", "see", "since", "source", "static", "staticvar",
    "subpackage", "throw", "throws", "todo", "TODO", "usedby", "uses", "var",
    "version",
];

/// The process-wide, append-only state shared by every parse: computed
/// schemas, types known not to be directives, and the names and namespaces
/// whose unresolvable or non-directive uses are silently dropped.
///
/// All caches only ever grow. Schema insertion is insert-if-absent, so
/// concurrent builders of the same schema all end up with the first
/// inserted [`Arc`].
#[derive(Debug, Default)]
pub struct Session {
    schemas: RwLock<HashMap<String, Arc<DirectiveSchema>>>,
    non_directive_types: RwLock<HashSet<String>>,
    ignored_names: RwLock<HashSet<String>>,
    ignored_namespace_prefixes: RwLock<Vec<String>>,
}
impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session that already ignores common documentation tags such as
    /// `@param`, `@return` or `@author`.
    pub fn with_default_ignored_names() -> Self {
        let session = Self::new();
        for name in DEFAULT_IGNORED_NAMES {
            session.add_ignored_name(*name);
        }
        session
    }

    pub fn schema(&self, name: &str) -> Option<Arc<DirectiveSchema>> {
        read(&self.schemas).get(name).cloned()
    }

    /// Caches `schema` unless a schema of the same name is already cached,
    /// and returns whichever one is cached afterwards.
    pub fn insert_schema(&self, schema: DirectiveSchema) -> Arc<DirectiveSchema> {
        let mut schemas = write(&self.schemas);
        if let Some(existing) = schemas.get(&schema.name) {
            log::debug!("Discarding duplicate schema build for `{}`.", schema.name);
            return existing.clone();
        }
        let schema = Arc::new(schema);
        schemas.insert(schema.name.clone(), schema.clone());
        schema
    }

    pub fn schema_count(&self) -> usize {
        read(&self.schemas).len()
    }

    /// Every cached schema, ordered by name.
    pub fn schemas(&self) -> Vec<Arc<DirectiveSchema>> {
        let mut schemas: Vec<_> = read(&self.schemas).values().cloned().collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    pub fn is_known_non_directive_type(&self, name: &str) -> bool {
        read(&self.non_directive_types).contains(name)
    }

    pub fn mark_non_directive_type(&self, name: &str) {
        write(&self.non_directive_types).insert(name.to_string());
    }

    pub fn add_ignored_name(&self, name: impl Into<String>) {
        write(&self.ignored_names).insert(name.into());
    }

    /// Ignores every name inside `prefix` (a namespace, compared
    /// case-insensitively).
    pub fn add_ignored_namespace_prefix(&self, prefix: impl AsRef<str>) {
        let prefix = normalize_prefix(prefix.as_ref());
        let mut prefixes = write(&self.ignored_namespace_prefixes);
        if !prefixes.contains(&prefix) {
            prefixes.push(prefix);
        }
    }

    /// Whether `name` is an ignored name, or lies inside an ignored
    /// namespace.
    pub fn is_ignored(&self, name: &str) -> bool {
        if read(&self.ignored_names).contains(name) {
            return true;
        }
        let candidate = normalize_prefix(name);
        read(&self.ignored_namespace_prefixes)
            .iter()
            .any(|prefix| candidate.starts_with(prefix.as_str()))
    }
}

/// `Foo\Bar` and `\foo\bar\` both become `foo\bar\`.
pub(crate) fn normalize_prefix(name: &str) -> String {
    format!("{}\\", name.trim_matches('\\').to_lowercase())
}

// Every write is a single insert, so a poisoned lock still guards a
// consistent cache.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
