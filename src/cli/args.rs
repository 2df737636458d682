//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

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
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Root directory to scan for source files
    pub root: PathBuf,

    /// Destination path for the extracted catalog
    #[arg(short, long)]
    pub output: PathBuf,

    /// Glob pattern for candidate files, relative to the root
    /// (default: all TypeScript sources under any src directory)
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Drop keys starting with this prefix
    #[arg(short = 'x', long)]
    pub exclude: Option<String>,

    /// Destination path for the error log
    /// (errors are always echoed on stderr)
    #[arg(short, long)]
    pub logs: Option<PathBuf>,

    /// Merge into the existing catalog instead of overwriting it
    #[arg(short, long)]
    pub merge: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract localization keys from source files into a JSON catalog
    Extract(ExtractCommand),
}
