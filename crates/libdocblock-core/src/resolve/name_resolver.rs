use crate::host::TypeCatalog;
use crate::resolve::ImportTable;
use crate::schema::meta_directives;

/// Why a directive name could not be qualified.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResolveFailure {
    /// No alias matched and no implicit candidate exists.
    NeverImported,

    /// The name was fully qualified, or matched an alias, but the resulting
    /// type does not exist.
    NotFound { qualified: String },
}

/// Qualifies directive (and constant owner) names against an
/// [`ImportTable`].
///
/// Candidates are tried in this order, first success wins:
///
/// 1. a name starting with `\` is already fully qualified;
/// 2. the first segment matched against the import aliases (the result is
///    final, whether or not the type exists);
/// 3. each fallback namespace prefixed onto the name;
/// 4. the current namespace prefixed onto the name;
/// 5. the name as a global type.
///
/// Steps 4 and 5 are skipped when `allow_implicit` is `false`, which is how
/// ignored names avoid accidentally resolving to a same-named type.
pub struct NameResolver<'a> {
    catalog: &'a dyn TypeCatalog,
    imports: &'a ImportTable,
}
impl<'a> NameResolver<'a> {
    pub fn new(catalog: &'a dyn TypeCatalog, imports: &'a ImportTable) -> Self {
        Self { catalog, imports }
    }

    pub fn resolve(&self, name: &str, allow_implicit: bool) -> Result<String, ResolveFailure> {
        if let Some(qualified) = name.strip_prefix('\\') {
            return self.existing(qualified.to_string());
        }

        let (first_segment, rest) = match name.find('\\') {
            Some(idx) => (&name[..idx], &name[idx..]),
            None => (name, ""),
        };
        if let Some(imported) = self.imports.alias(first_segment) {
            return self.existing(format!("{imported}{rest}"));
        }

        for namespace in self.imports.fallback_namespaces() {
            let candidate = join(namespace, name);
            if self.type_exists(&candidate) {
                return Ok(candidate);
            }
        }

        if allow_implicit {
            if let Some(namespace) = self.imports.current_namespace() {
                let candidate = join(namespace, name);
                if self.type_exists(&candidate) {
                    return Ok(candidate);
                }
            }
            if self.type_exists(name) {
                return Ok(name.to_string());
            }
        }

        Err(ResolveFailure::NeverImported)
    }

    fn existing(&self, qualified: String) -> Result<String, ResolveFailure> {
        if self.type_exists(&qualified) {
            Ok(qualified)
        } else {
            Err(ResolveFailure::NotFound { qualified })
        }
    }

    fn type_exists(&self, qualified: &str) -> bool {
        meta_directives::is_builtin(qualified) || self.catalog.type_exists(qualified)
    }
}

fn join(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}\\{name}")
    }
}
