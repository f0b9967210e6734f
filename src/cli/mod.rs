use std::{path::Path, process::ExitCode};

use anyhow::Result;

pub mod args;
pub mod commands;
mod exit_status;
pub mod report;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use commands::{CommandResult, CommandSummary, check::check, init::init};

pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let verbose = args.verbose();

    let Some(Arguments {
        command: Some(command),
    }) = args.with_command_or_help()
    else {
        return Ok(ExitStatus::Success.into());
    };

    let result = run(command)?;
    report::print(&result, verbose);

    Ok(ExitStatus::from_result(&result).into())
}

/// Dispatch to the command handler.
pub fn run(command: Command) -> Result<CommandResult> {
    match command {
        Command::Check(cmd) => check(cmd),
        Command::Rules => Ok(CommandResult::empty(CommandSummary::Rules)),
        Command::Init => init(Path::new(".")),
    }
}
