use crate::parser::DocblockParser;
use crate::parser::ParserOptions;
use crate::resolve::ImportTable;
use crate::test::fixtures;
use crate::DirectiveInstance;
use crate::DirectiveTarget;
use crate::Session;
use crate::Value;

pub(super) const CONTEXT: &str = "class App\\Controller\\HomeController";

pub(super) fn parse_with(
    session: &Session,
    options: ParserOptions,
    imports: &ImportTable,
    docblock: &str,
    target: DirectiveTarget,
) -> crate::Result<Vec<DirectiveInstance>> {
    let catalog = fixtures::catalog();
    DocblockParser::new(session, &catalog)
        .with_options(options)
        .parse(docblock, imports, target, CONTEXT)
}

/// Parses with the fixture imports and the default ignored names.
pub(super) fn parse_at(
    docblock: &str,
    target: DirectiveTarget,
) -> crate::Result<Vec<DirectiveInstance>> {
    parse_with(
        &Session::with_default_ignored_names(),
        ParserOptions::new(),
        &fixtures::imports(),
        docblock,
        target,
    )
}

pub(super) fn parse(docblock: &str) -> crate::Result<Vec<DirectiveInstance>> {
    parse_at(docblock, DirectiveTarget::Class)
}

/// Parses a docblock expected to hold exactly one directive.
pub(super) fn parse_single(docblock: &str) -> crate::Result<DirectiveInstance> {
    let mut directives = parse(docblock)?;
    assert_eq!(directives.len(), 1, "{directives:?}");
    Ok(directives.remove(0))
}

/// The `value` field of the single `@Loose` directive in `docblock`.
pub(super) fn loose_value(docblock: &str) -> crate::Result<Value> {
    let directive = parse_single(docblock)?;
    assert_eq!(directive.type_name, fixtures::LOOSE);
    Ok(directive.field("value").cloned().unwrap_or_default())
}

pub(super) fn list(items: impl IntoIterator<Item = Value>) -> Value {
    Value::List(items.into_iter().collect())
}

pub(super) fn map<'a>(entries: impl IntoIterator<Item = (&'a str, Value)>) -> Value {
    Value::Map(entries.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
}
