//! Command dispatch for the restyle CLI.
//!
//! Dispatches to the appropriate command handler based on the parsed
//! arguments. Returns `Ok(CommandResult)` with issue counts and exit
//! behavior, or `Err` if the command fails (unreadable file, parse error,
//! invalid selection).

use std::{fs, path::Path};

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, CommandSummary, InitSummary, analyze::analyze, clean::clean,
        consolidate::consolidate, copy::copy, duplicates::duplicates, extract::extract,
    },
};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Analyze(cmd)) => analyze(cmd),
        Some(Command::Clean(cmd)) => clean(cmd),
        Some(Command::Duplicates(cmd)) => duplicates(cmd),
        Some(Command::Consolidate(cmd)) => consolidate(cmd),
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Copy(cmd)) => copy(cmd),
        Some(Command::Init) => {
            init()?;
            Ok(CommandResult {
                summary: CommandSummary::Init(InitSummary { created: true }),
                issue_count: 0,
                exit_on_errors: true,
                parse_error_count: 0,
                source_files_checked: 0,
            })
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
