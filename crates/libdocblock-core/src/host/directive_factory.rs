use crate::Value;
use indexmap::IndexMap;

/// Constructs the field values of a directive whose type builds itself from
/// its full argument map (a type with a constructor).
///
/// The returned map becomes the
/// [`DirectiveInstance::fields`](crate::DirectiveInstance::fields). An
/// `Err` message is surfaced as a
/// [`DirectiveError::Factory`](crate::DirectiveError::Factory).
pub trait DirectiveFactory: Send + Sync {
    fn construct(
        &self,
        type_name: &str,
        arguments: &IndexMap<String, Value>,
    ) -> Result<IndexMap<String, Value>, String>;
}

impl<F> DirectiveFactory for F
where
    F: Fn(&str, &IndexMap<String, Value>) -> Result<IndexMap<String, Value>, String>
        + Send
        + Sync,
{
    fn construct(
        &self,
        type_name: &str,
        arguments: &IndexMap<String, Value>,
    ) -> Result<IndexMap<String, Value>, String> {
        self(type_name, arguments)
    }
}
