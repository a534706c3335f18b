use crate::output_utils;
use crate::source_scan;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libdocblock::parser::ParserOptions;
use libdocblock::schema::SchemaStore;
use libdocblock::DirectiveTarget;
use libdocblock::DocblockReader;
use libdocblock::Session;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_values_t=["php".to_string()],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    source_file_exts: Vec<String>,

    #[arg(
        help="A directive name to silently drop. May be repeated.",
        long="ignore",
    )]
    ignored_names: Vec<String>,

    #[arg(
        help="A namespace whose directives are silently dropped. May be repeated.",
        long="ignore-namespace",
    )]
    ignored_namespaces: Vec<String>,

    #[arg(
        help="Load computed directive schemas from this file before checking, \
             and write them back afterwards.",
        long,
    )]
    schema_cache: Option<PathBuf>,

    #[arg(
        help="Paths to one or more source files or directories containing \
             source files whose docblocks need to be checked.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl CheckCmd {
    fn find_source_files(&self, errors: &mut Vec<String>) -> Vec<PathBuf> {
        // Normalize the set of file extensions to filter with
        let exts: HashSet<String> = self
            .source_file_exts
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();

        log::debug!("Scanning {} input paths...", self.file_or_dir_paths.len());
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        if let Some(ext) = path.extension().map(|s| s.to_string_lossy())
                            && exts.contains(ext.as_ref())
                        {
                            log::trace!("Found file at {path:#?}.");
                            file_paths.push(path.to_path_buf());
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(e.to_string());
                    },
                }
            }
        }

        // A single file passed explicitly is checked whatever its extension.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file()
        {
            log::warn!(
                "Proceeding to check {first_arg_path:#?} even though it doesn't \
                match any of the --source-file-exts.",
            );
            file_paths.push(first_arg_path.clone());
        }
        file_paths
    }

    fn parser_options(&self) -> ParserOptions {
        let options = self
            .ignored_names
            .iter()
            .fold(ParserOptions::new(), |options, name| options.with_ignored_name(name.clone()));
        self.ignored_namespaces
            .iter()
            .fold(options, |options, prefix| options.with_ignored_namespace_prefix(prefix))
    }

    fn warm_session(&self, session: &Session) {
        let Some(cache_path) = &self.schema_cache else {
            return;
        };
        let bytes = match std::fs::read(cache_path) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::debug!("No schema cache loaded from {cache_path:#?}: {e}");
                return;
            },
        };
        match SchemaStore::import(session, &bytes) {
            Ok(count) => log::debug!("Loaded {count} cached schemas from {cache_path:#?}."),
            Err(e) => log::warn!("Ignoring unreadable schema cache {cache_path:#?}: {e}"),
        }
    }

    fn save_session(&self, session: &Session) {
        let Some(cache_path) = &self.schema_cache else {
            return;
        };
        let saved = SchemaStore::export(session)
            .map_err(|e| e.to_string())
            .and_then(|bytes| std::fs::write(cache_path, bytes).map_err(|e| e.to_string()));
        match saved {
            Ok(()) => log::debug!(
                "Saved {} schemas to {cache_path:#?}.",
                session.schema_count(),
            ),
            Err(e) => log::warn!("Failed to save the schema cache to {cache_path:#?}: {e}"),
        }
    }
}

/// Checks every docblock of one file, returning the number of directives
/// found.
fn check_file(
    reader: &DocblockReader<'_>,
    path: &Path,
    errors: &mut Vec<String>,
) -> usize {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            errors.push(format!("{}: {e}", path.display()));
            return 0;
        },
    };
    let imports = source_scan::file_imports(&source);

    let mut num_directives = 0;
    for docblock in source_scan::find_docblocks(&source) {
        let context = format!("`{}` at {}:{}", docblock.declaration, path.display(), docblock.line);
        let read = match docblock.target {
            DirectiveTarget::Method => reader.read_method(docblock.text, &imports, &context),
            DirectiveTarget::Property => reader.read_property(docblock.text, &imports, &context),
            _ => reader.read_class(docblock.text, &imports, &context),
        };
        match read {
            Ok(directives) => num_directives += directives.len(),
            Err(e) => errors.push(output_utils::render_error(&e, docblock.text)),
        }
    }
    num_directives
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, cli: &Cli) -> CommandResult {
        let catalog = match cli.load_catalog() {
            Ok(catalog) => catalog,
            Err(e) => return CommandResult::error(&e),
        };

        let mut errors: Vec<String> = vec![];
        let file_paths = self.find_source_files(&mut errors);
        log::debug!("Found {} source files to be checked.", file_paths.len());

        let session = cli.new_session();
        self.warm_session(&session);
        let reader = DocblockReader::new(&session, &catalog)
            .with_options(self.parser_options());

        let mut num_directives = 0;
        for path in &file_paths {
            num_directives += check_file(&reader, path, &mut errors);
        }
        self.save_session(&session);

        if !errors.is_empty() {
            return CommandResult::invalid(format_args!(
                "{} docblock errors:\n\n{}",
                errors.len(),
                errors.join("\n\n"),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All docblocks checked successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Validated {} directives.\n",
                "  * Used {} directive schemas.",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_directives,
            session.schema_count(),
        ))
    }
}
