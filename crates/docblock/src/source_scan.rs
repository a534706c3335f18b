//! Light-weight extraction of docblocks, and the names in scope for them,
//! from source files.

use libdocblock::DirectiveTarget;
use libdocblock::resolve::ImportTable;

/// One `/** ... */` comment and the declaration that follows it.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SourceDocblock<'a> {
    pub text: &'a str,

    /// 1-based line of the opening `/**`.
    pub line: usize,

    /// The first line of code after the comment, trimmed.
    pub declaration: &'a str,

    pub target: DirectiveTarget,
}

pub(crate) fn find_docblocks(source: &str) -> Vec<SourceDocblock<'_>> {
    let mut found = vec![];
    let mut offset = 0;
    while let Some(start) = source[offset..].find("/**").map(|idx| offset + idx) {
        // `/**/` is an empty plain comment.
        if source[start..].starts_with("/**/") {
            offset = start + 4;
            continue;
        }
        let Some(end) = source[start + 3..].find("*/").map(|idx| start + 3 + idx + 2) else {
            break;
        };
        let declaration = next_declaration(&source[end..]);
        found.push(SourceDocblock {
            text: &source[start..end],
            line: source[..start].matches('\n').count() + 1,
            declaration,
            target: declaration_target(declaration),
        });
        offset = end;
    }
    found
}

fn next_declaration(rest: &str) -> &str {
    rest.lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with("#["))
        .unwrap_or_default()
}

/// Classifies a declaration line such as `public function show($id)` or
/// `private ?string $name = null;`.
pub(crate) fn declaration_target(declaration: &str) -> DirectiveTarget {
    let words: Vec<&str> = declaration
        .split(|ch: char| ch.is_whitespace() || ch == '(')
        .filter(|word| !word.is_empty())
        .collect();
    if words.contains(&"function") {
        DirectiveTarget::Method
    } else if words
        .iter()
        .any(|word| matches!(*word, "class" | "interface" | "trait" | "enum"))
    {
        DirectiveTarget::Class
    } else if declaration.contains('$') {
        DirectiveTarget::Property
    } else {
        DirectiveTarget::Class
    }
}

/// Reads the file-level `namespace` and `use` statements that precede the
/// first `{`.
pub(crate) fn file_imports(source: &str) -> ImportTable {
    let mut imports = ImportTable::new();
    for line in source.lines().map(str::trim) {
        if line.contains('{') && !line.starts_with("namespace") {
            break;
        }
        if let Some(namespace) = line.strip_prefix("namespace ") {
            let namespace = namespace.trim_end_matches(['{', ';', ' ']).trim();
            imports = imports.with_current_namespace(namespace);
        } else if let Some(statement) = line.strip_prefix("use ") {
            if statement.starts_with("function ") || statement.starts_with("const ") {
                continue;
            }
            for clause in statement.trim_end_matches(';').split(',') {
                let (name, alias) = match clause.split_once(" as ") {
                    Some((name, alias)) => (name.trim(), alias.trim()),
                    None => {
                        let name = clause.trim();
                        (name, name.rsplit('\\').next().unwrap_or(name))
                    },
                };
                if !name.is_empty() && !alias.is_empty() {
                    imports.add_import(alias, name);
                }
            }
        }
    }
    imports
}
