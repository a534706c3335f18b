use crate::commands::parse_import;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libdocblock::parser::ParserOptions;
use libdocblock::resolve::ImportTable;
use libdocblock::DocblockReader;
use std::io::Read;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum TargetArg {
    Class,
    Method,
    Property,
    Nested,
}

#[derive(Debug, clap::Args)]
pub(crate) struct ParseCmd {
    #[arg(
        default_value="class",
        help="The kind of declaration the docblock is attached to.",
        long,
        value_enum,
    )]
    target: TargetArg,

    #[arg(
        help="The namespace the docblock is declared in.",
        long,
    )]
    namespace: Option<String>,

    #[arg(
        help="An import visible to the docblock, as `Alias=Fully\\Qualified\\Name`.",
        long="import",
        value_parser=parse_import,
    )]
    imports: Vec<(String, String)>,

    #[arg(
        help="A directive name to silently drop. May be repeated.",
        long="ignore",
    )]
    ignored_names: Vec<String>,

    #[arg(
        help="Drop directives whose names cannot be resolved instead of failing.",
        long,
    )]
    ignore_not_imported: bool,

    #[arg(
        help="File containing the docblock. Reads stdin when omitted.",
        name="FILE",
    )]
    file: Option<PathBuf>,
}
impl ParseCmd {
    fn read_docblock(&self) -> std::io::Result<String> {
        match &self.file {
            Some(path) => std::fs::read_to_string(path),
            None => {
                let mut docblock = String::new();
                std::io::stdin().read_to_string(&mut docblock)?;
                Ok(docblock)
            },
        }
    }

    fn import_table(&self) -> ImportTable {
        let mut imports = ImportTable::new();
        if let Some(namespace) = &self.namespace {
            imports = imports.with_current_namespace(namespace);
        }
        for (alias, name) in &self.imports {
            imports.add_import(alias, name);
        }
        imports
    }

    fn parser_options(&self) -> ParserOptions {
        self.ignored_names.iter().fold(
            ParserOptions::new().ignore_not_imported(self.ignore_not_imported),
            |options, name| options.with_ignored_name(name.clone()),
        )
    }
}

#[inherent::inherent]
impl RunnableCommand for ParseCmd {
    pub async fn run(self, cli: &Cli) -> CommandResult {
        let catalog = match cli.load_catalog() {
            Ok(catalog) => catalog,
            Err(e) => return CommandResult::error(&e),
        };

        let docblock = match self.read_docblock() {
            Ok(docblock) => docblock,
            Err(e) => {
                let e = anyhow::Error::new(e).context("Failed to read the docblock");
                return CommandResult::error(&e);
            },
        };

        let session = cli.new_session();
        let reader = DocblockReader::new(&session, &catalog)
            .with_options(self.parser_options());
        let imports = self.import_table();
        let context = match &self.file {
            Some(path) => format!("{}", path.display()),
            None => "<stdin>".to_string(),
        };

        log::debug!("Parsing {context} as a {:?} docblock.", self.target);
        let to_json = |directives: Vec<libdocblock::DirectiveInstance>| {
            directives
                .iter()
                .map(output_utils::directive_to_json)
                .collect::<serde_json::Value>()
        };
        let parsed = match self.target {
            TargetArg::Class => reader.read_class(&docblock, &imports, &context).map(to_json),
            TargetArg::Method => reader.read_method(&docblock, &imports, &context).map(to_json),
            TargetArg::Property => reader.read_property(&docblock, &imports, &context).map(to_json),
            TargetArg::Nested => reader
                .read_nested(&docblock, &imports, &context)
                .map(|value| output_utils::value_to_json(&value)),
        };

        match parsed.map(|json| serde_json::to_string_pretty(&json)) {
            Ok(Ok(json)) => CommandResult::stdout(format_args!("{json}")),
            Ok(Err(e)) => CommandResult::error(
                &anyhow::Error::new(e).context("Failed to render the directives as JSON"),
            ),
            Err(e) => CommandResult::invalid(format_args!(
                "{}",
                output_utils::render_error(&e, &docblock),
            )),
        }
    }
}
