use crate::output_utils;
use std::process::ExitCode;

/// Exit status for docblocks that failed validation.
const EXIT_INVALID_DOCBLOCKS: u8 = 1;

/// Exit status for a run that could not get as far as validating, e.g. an
/// unreadable catalog or input file.
const EXIT_USAGE: u8 = 2;

#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    /// The input held invalid docblocks; `report` describes each of them.
    pub fn invalid(report: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::from(EXIT_INVALID_DOCBLOCKS),
            stderr: Some(format!("{} {report}", output_utils::RED_X)),
            stdout: None,
        }
    }

    /// The command could not run to completion.
    pub fn error(err: &anyhow::Error) -> Self {
        Self {
            exit_code: ExitCode::from(EXIT_USAGE),
            stderr: Some(format!("{} {err:#}", output_utils::RED_X)),
            stdout: None,
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }
}
