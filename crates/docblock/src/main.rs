mod catalog_file;
mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;
mod source_scan;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    if let Some(command) = cli.cmd.take() {
        let result = command.run(&cli).await;
        if let Some(stdout) = result.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = result.stderr {
            eprintln!("{stderr}")
        }
        result.exit_code
    } else if let Err(e) = cli.run_default().await {
        eprintln!("{e:#}");
        std::process::ExitCode::FAILURE
    } else {
        std::process::ExitCode::SUCCESS
    }
}

fn setup_logger(cli: &Cli) {
    let env_val = std::env::var("LOG_LEVEL").ok();
    let env_level = env_val.as_deref().map(|value| (value, parse_log_level(value)));
    let log_level = match env_level {
        _ if cli.verbose => tracing::Level::DEBUG,
        Some((_, Some(level))) => level,
        Some((_, None)) | None => DEFAULT_LOG_LEVEL,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some((value, None)) = env_level {
        log::warn!("Invalid `LOG_LEVEL` environment variable value: `{value}`");
    }
}

/// Reads a `LOG_LEVEL` value: any `tracing` level name (case-insensitive),
/// or `verbose` for debug output.
fn parse_log_level(value: &str) -> Option<tracing::Level> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("verbose") {
        return Some(tracing::Level::DEBUG);
    }
    value.parse().ok()
}

#[cfg(test)]
mod tests;
