//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Check exported semantic models for ICG001/ICG002 violations
//! - `rules`: List the diagnostics this tool can report
//! - `init`: Initialize an icg configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Rules) | Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments for commands that read model files.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Model files or directories to check (overrides config `includes`)
    pub paths: Vec<PathBuf>,

    /// Project root: config search start and base for relative paths
    #[arg(long, env = "ICG_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Cargo-style human readable output
    #[default]
    Text,
    /// JSON array of diagnostics
    Json,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Rules to run (default: all enabled)
    /// Can be specified multiple times: --rule call-site --rule declaration
    #[arg(long = "rule", value_enum)]
    pub rules: Vec<CheckRule>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check semantic models for misuse of interface-constrained generic methods
    Check(CheckCommand),
    /// List supported diagnostics
    Rules,
    /// Initialize a new .icgrc.json configuration file
    Init,
}
