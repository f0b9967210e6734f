use std::process::ExitCode;

use super::commands::{CommandResult, CommandSummary, InitSummary};

/// Exit status for CLI commands, following common conventions for linter tools.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// No error-severity diagnostics.
    Success,
    /// Error-severity diagnostics were found, or `init` found an existing config.
    Failure,
    /// The command itself failed (bad config, unreadable path, ...).
    Error,
}

impl ExitStatus {
    pub fn from_result(result: &CommandResult) -> Self {
        match &result.summary {
            CommandSummary::Init(InitSummary { created: false }) => ExitStatus::Failure,
            _ if result.error_count > 0 => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
