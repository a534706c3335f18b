use crate::source_scan;
use libdocblock::DirectiveTarget;

const SOURCE: &str = concat!(
    "<?php\n",
    "namespace App\\Controller;\n",
    "\n",
    "use App\\Annotations\\Route;\n",
    "use App\\Annotations as ORM;\n",
    "use function strlen;\n",
    "\n",
    "/**\n",
    " * @ORM\\Table(name=\"items\")\n",
    " */\n",
    "final class ItemController\n",
    "{\n",
    "    /** @ORM\\Column(type=\"string\") */\n",
    "    private ?string $name = null;\n",
    "\n",
    "    /**/\n",
    "    /**\n",
    "     * @Route(\"/items\")\n",
    "     */\n",
    "    #[Deprecated]\n",
    "    public function index() {}\n",
    "}\n",
);

#[test]
fn finds_docblocks_and_their_declarations() {
    let docblocks = source_scan::find_docblocks(SOURCE);
    let summary: Vec<_> = docblocks
        .iter()
        .map(|d| (d.line, d.declaration, d.target))
        .collect();
    assert_eq!(summary, vec![
        (8, "final class ItemController", DirectiveTarget::Class),
        (13, "private ?string $name = null;", DirectiveTarget::Property),
        (17, "public function index() {}", DirectiveTarget::Method),
    ]);
    assert_eq!(docblocks[1].text, "/** @ORM\\Column(type=\"string\") */");
}

#[test]
fn unterminated_docblock_ends_the_scan() {
    let docblocks = source_scan::find_docblocks("/** @A */ class A {}\n/** @B");
    assert_eq!(docblocks.len(), 1);
    assert_eq!(docblocks[0].declaration, "class A {}");
}

#[test]
fn declaration_targets() {
    let cases = [
        ("abstract class Base", DirectiveTarget::Class),
        ("interface HasRoutes", DirectiveTarget::Class),
        ("public static function create(): self", DirectiveTarget::Method),
        ("function(", DirectiveTarget::Method),
        ("protected $items = [];", DirectiveTarget::Property),
        ("", DirectiveTarget::Class),
    ];
    for (declaration, expected) in cases {
        assert_eq!(source_scan::declaration_target(declaration), expected, "{declaration}");
    }
}

#[test]
fn file_imports_read_namespace_and_use_statements() {
    let imports = source_scan::file_imports(SOURCE);
    assert_eq!(imports.current_namespace(), Some("App\\Controller"));
    assert_eq!(imports.alias("Route"), Some("App\\Annotations\\Route"));
    assert_eq!(imports.alias("orm"), Some("App\\Annotations"));
    assert_eq!(imports.alias("strlen"), None);
}
