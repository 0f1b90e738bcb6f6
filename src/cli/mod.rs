//! Command-line interface layer.
//!
//! - `args`: clap argument definitions
//! - `exit_status`: process exit codes
//! - `report`: text and JSON rendering
//! - `run`: merges arguments with config and drives a finder run

use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;

pub mod args;
mod exit_status;
pub mod report;
pub mod run;

pub use args::{Arguments, Command, FindArgs};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    match args.command {
        Some(Command::Init { root }) => {
            let dir = root.unwrap_or_else(|| PathBuf::from("."));
            let path = run::init(&dir)?;
            println!("{} Created {}", report::SUCCESS_MARK.green(), path.display());
            Ok(ExitStatus::Success)
        }
        None => {
            let find = args.find;
            let result = run::run(&find)?;
            report::print(&result, find.json, find.verbose)?;
            Ok(ExitStatus::from_unused_count(
                result.report.unused_count,
                find.strict,
            ))
        }
    }
}
