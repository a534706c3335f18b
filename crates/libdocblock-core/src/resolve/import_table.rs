use indexmap::IndexMap;

/// The names visible at one declaration: `use` style aliases, the
/// enclosing namespace and any extra namespaces to search.
///
/// Aliases are matched case-insensitively. Qualified names are stored
/// without a leading `\`.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ImportTable {
    aliases: IndexMap<String, String>,
    current_namespace: Option<String>,
    fallback_namespaces: Vec<String>,
}
impl ImportTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_import(&mut self, alias: impl AsRef<str>, qualified_name: impl AsRef<str>) {
        self.aliases.insert(
            alias.as_ref().to_lowercase(),
            normalize_namespace(qualified_name.as_ref()),
        );
    }

    pub fn with_import(mut self, alias: impl AsRef<str>, qualified_name: impl AsRef<str>) -> Self {
        self.add_import(alias, qualified_name);
        self
    }

    pub fn with_current_namespace(mut self, namespace: impl AsRef<str>) -> Self {
        let namespace = normalize_namespace(namespace.as_ref());
        self.current_namespace = (!namespace.is_empty()).then_some(namespace);
        self
    }

    pub fn with_fallback_namespace(mut self, namespace: impl AsRef<str>) -> Self {
        self.fallback_namespaces
            .push(normalize_namespace(namespace.as_ref()));
        self
    }

    /// The qualified name imported under `alias`, compared
    /// case-insensitively.
    pub fn alias(&self, alias: &str) -> Option<&str> {
        self.aliases.get(&alias.to_lowercase()).map(String::as_str)
    }

    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn current_namespace(&self) -> Option<&str> {
        self.current_namespace.as_deref()
    }

    pub fn fallback_namespaces(&self) -> &[String] {
        &self.fallback_namespaces
    }
}

fn normalize_namespace(name: &str) -> String {
    name.trim_matches('\\').to_string()
}
