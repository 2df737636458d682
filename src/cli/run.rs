//! Main entry point for the nlsx CLI.
//!
//! Dispatches to the appropriate command handler based on the parsed
//! arguments and prints the run summary.

use anyhow::Result;
use colored::Colorize;

use super::args::{Arguments, Command, ExtractCommand};
use super::exit_status::ExitStatus;
use crate::core::{ExtractOptions, extract};

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Extract(cmd)) => run_extract(cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn run_extract(cmd: ExtractCommand) -> Result<ExitStatus> {
    let options = ExtractOptions {
        root: cmd.root,
        output: cmd.output,
        pattern: cmd.pattern,
        exclude: cmd.exclude,
        logs: cmd.logs,
        merge: cmd.merge,
    };

    let summary = extract(&options)?;

    println!(
        "{} {} keys from {} files -> {}",
        "extracted".bold().green(),
        summary.keys,
        summary.files,
        options.output.display()
    );
    if summary.errors > 0 {
        println!(
            "{} {} call sites skipped (see errors above)",
            "warning:".bold().yellow(),
            summary.errors
        );
        return Ok(ExitStatus::Failure);
    }
    Ok(ExitStatus::Success)
}
