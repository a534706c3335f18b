use crate::value::next_map_index;
use crate::Value;
use indexmap::IndexMap;

/// The argument map of one directive occurrence.
///
/// Named arguments are stored under their name. Positional arguments
/// collapse onto [`DEFAULT_KEY`](Self::DEFAULT_KEY):
///
/// | arguments            | `value`          |
/// |----------------------|------------------|
/// | `(1)`                | `1`              |
/// | `(1, 2, "three")`    | `{1, 2, "three"}`|
/// | `({1, 2}, 3)`        | `{1, 2, 3}`      |
/// | `(value=1, 2)`       | `{1, 2}`         |
/// | `(1, value=2)`       | `2`              |
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DirectiveArguments {
    entries: IndexMap<String, Value>,
}
impl DirectiveArguments {
    pub const DEFAULT_KEY: &'static str = "value";

    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument. Returns `false`, leaving the arguments
    /// unchanged, when the collapsed `value` is a map with no integer key
    /// left for it.
    pub fn push_positional(&mut self, value: Value) -> bool {
        match self.entries.get_mut(Self::DEFAULT_KEY) {
            None => {
                self.entries.insert(Self::DEFAULT_KEY.to_string(), value);
            },
            Some(Value::List(items)) => items.push(value),
            Some(Value::Map(entries)) => {
                let Some(idx) = next_map_index(entries) else {
                    return false;
                };
                entries.insert(idx.to_string(), value);
            },
            Some(existing) => {
                let first = std::mem::take(existing);
                *existing = Value::List(vec![first, value]);
            },
        }
        true
    }

    /// Sets a named argument. A repeated name overwrites the earlier value.
    pub fn set_named(&mut self, name: impl Into<String>, value: Value) {
        self.entries.insert(name.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn into_map(self) -> IndexMap<String, Value> {
        self.entries
    }
}

impl From<IndexMap<String, Value>> for DirectiveArguments {
    fn from(entries: IndexMap<String, Value>) -> Self {
        Self { entries }
    }
}
