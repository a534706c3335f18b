use crate::catalog_file::CatalogFile;
use crate::commands;
use anyhow::Context;
use clap::CommandFactory;
use libdocblock::host::InMemoryTypeCatalog;
use libdocblock::Session;
use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(name = "docblock", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        global=true,
        help="Path to a JSON catalog describing the types directives may name.",
        long,
    )]
    pub catalog: Option<PathBuf>,

    #[arg(
        global=true,
        help="Report standard documentation tags such as `@param` and \
             `@return` instead of dropping them.",
        long,
    )]
    pub keep_doc_tags: bool,

    #[arg(
        global=true,
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) fn load_catalog(&self) -> anyhow::Result<InMemoryTypeCatalog> {
        let path = self
            .catalog
            .as_deref()
            .context("A type catalog is required; pass it with `--catalog <PATH>`")?;
        Ok(CatalogFile::load(path)?.into_catalog())
    }

    pub(crate) fn new_session(&self) -> Session {
        if self.keep_doc_tags {
            Session::new()
        } else {
            Session::with_default_ignored_names()
        }
    }

    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
