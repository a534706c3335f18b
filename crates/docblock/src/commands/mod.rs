mod check;
mod parse;

use crate::Cli;
use crate::CommandResult;
use check::CheckCmd;
use parse::ParseCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "docblock")]
pub(crate) enum CommandEnum {
    /// Parse one docblock and print its directives as JSON.
    Parse(Box<ParseCmd>),

    /// Validate every docblock in a set of source files.
    Check(Box<CheckCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: &Cli) -> CommandResult {
        match self {
            Self::Parse(cmd) => cmd.run(cli).await,
            Self::Check(cmd) => cmd.run(cli).await,
        }
    }
}

/// Parses an `--import` argument of the form `Alias=Fully\Qualified\Name`.
pub(crate) fn parse_import(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((alias, name)) if !alias.trim().is_empty() && !name.trim().is_empty() => {
            Ok((alias.trim().to_string(), name.trim().to_string()))
        },
        _ => Err(format!("expected `Alias=Fully\\Qualified\\Name`, got `{arg}`")),
    }
}
