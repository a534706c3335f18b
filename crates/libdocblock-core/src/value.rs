use crate::DirectiveInstance;
use indexmap::IndexMap;

/// A fully-evaluated directive argument value.
///
/// Constant references (`Foo::BAR`, `Foo::class`, `SOME_GLOBAL`) are
/// resolved while parsing, so they show up here as the literal they denote.
///
/// Arrays written with at least one `key = value` (or `key: value`) entry
/// are [`Map`](Self::Map)s. Integer keys are stored in their decimal form
/// (see [`Value::map_key_as_value`]).
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(IndexMap<String, Value>),
    Directive(Box<DirectiveInstance>),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        if let Self::List(items) = self {
            Some(items.as_slice())
        } else {
            None
        }
    }

    pub fn as_directive(&self) -> Option<&DirectiveInstance> {
        if let Self::Directive(instance) = self {
            Some(instance)
        } else {
            None
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// `true` for lists and maps.
    pub fn is_array(&self) -> bool {
        matches!(self, Self::List(_) | Self::Map(_))
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Bool(_) | Self::Int(_) | Self::Float(_) | Self::String(_))
    }

    /// The elements of a list or map, in order.
    pub fn array_values(&self) -> Vec<&Value> {
        match self {
            Self::List(items) => items.iter().collect(),
            Self::Map(entries) => entries.values().collect(),
            _ => vec![],
        }
    }

    /// Interprets a map key the way it was written: keys that are the
    /// canonical decimal form of an integer are integers, all others are
    /// strings.
    pub fn map_key_as_value(key: &str) -> Value {
        match key.parse::<i64>() {
            Ok(int) if int.to_string() == key => Value::Int(int),
            _ => Value::String(key.to_string()),
        }
    }

    /// The kind of value used in "expects X, but got Y" messages.
    pub fn kind_description(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Bool(_) => "boolean".to_string(),
            Self::Int(_) => "integer".to_string(),
            Self::Float(_) => "float".to_string(),
            Self::String(_) => "string".to_string(),
            Self::List(_) | Self::Map(_) => "array".to_string(),
            Self::Directive(instance) => format!("an instance of {}", instance.type_name),
        }
    }

    /// Renders the value for messages: strings unquoted, everything else in
    /// its literal form.
    pub fn to_message_string(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// The integer key an unkeyed entry appended to `entries` receives: one past
/// the largest integer key, or `0`.
///
/// `None` when the largest integer key is already `i64::MAX`.
pub(crate) fn next_map_index(entries: &IndexMap<String, Value>) -> Option<i64> {
    let largest = entries
        .keys()
        .filter_map(|key| match Value::map_key_as_value(key) {
            Value::Int(idx) => Some(idx),
            _ => None,
        })
        .max();
    match largest {
        Some(idx) => idx.checked_add(1).map(|next| next.max(0)),
        None => Some(0),
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::String(s) => write!(f, "\"{}\"", s.replace('"', "\"\"")),
            Self::List(items) => {
                write!(f, "{{")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "}}")
            },
            Self::Map(entries) => {
                write!(f, "{{")?;
                for (idx, (key, item)) in entries.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {item}", Value::map_key_as_value(key))?;
                }
                write!(f, "}}")
            },
            Self::Directive(instance) => write!(f, "@{}", instance.type_name),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl From<DirectiveInstance> for Value {
    fn from(value: DirectiveInstance) -> Self {
        Self::Directive(Box::new(value))
    }
}
