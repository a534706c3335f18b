use crate::Cli;
use crate::CommandResult;

/// A subcommand. The global options (catalog, session setup, verbosity) stay
/// on the [`Cli`] it borrows.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: &Cli) -> CommandResult;
}
