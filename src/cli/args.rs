//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all restyle
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `analyze`: List stylesheets and per-entry usage counts
//! - `clean`: Remove unused style entries from component files
//! - `duplicates`: Report repeated inline `style={{...}}` literals
//! - `consolidate`: Merge repeated inline literals into named entries
//! - `extract`: Move an inline style selection into a stylesheet
//! - `copy`: Print the style declarations referenced in a selection
//! - `init`: Initialize a restyle configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::Position;

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

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Analyze(cmd)) => cmd.common.verbose,
            Some(Command::Clean(cmd)) => cmd.common.verbose,
            Some(Command::Duplicates(cmd)) => cmd.common.verbose,
            Some(Command::Consolidate(cmd)) => cmd.common.verbose,
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::Copy(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct AnalyzeCommand {
    /// Component file to analyze
    pub file: PathBuf,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    /// Component file or directory to clean
    pub path: PathBuf,

    /// Actually delete unused entries (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct DuplicatesCommand {
    /// Component file to inspect
    pub file: PathBuf,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ConsolidateCommand {
    /// Component file to rewrite
    pub file: PathBuf,

    /// Actually rewrite the file (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Name prefix for generated entries (overrides config file)
    #[arg(long)]
    pub prefix: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Component file containing the selection
    pub file: PathBuf,

    /// Selection start as LINE:COL (1-indexed line, 0-indexed column)
    #[arg(long, value_parser = parse_position)]
    pub start: Position,

    /// Selection end as LINE:COL (1-indexed line, 0-indexed column)
    #[arg(long, value_parser = parse_position)]
    pub end: Position,

    /// Name for the new style entry
    #[arg(long)]
    pub name: String,

    /// Stylesheet root to extend when the file declares several
    #[arg(long)]
    pub target: Option<String>,

    /// Actually rewrite the file (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CopyCommand {
    /// Component file containing the selection
    pub file: PathBuf,

    /// Selection start as LINE:COL (1-indexed line, 0-indexed column)
    #[arg(long, value_parser = parse_position)]
    pub start: Position,

    /// Selection end as LINE:COL (1-indexed line, 0-indexed column)
    #[arg(long, value_parser = parse_position)]
    pub end: Position,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List stylesheets and how often each entry is used
    Analyze(AnalyzeCommand),
    /// Remove style entries with no usages from component files
    Clean(CleanCommand),
    /// Report duplicated inline style literals
    Duplicates(DuplicatesCommand),
    /// Merge duplicated inline style literals into named stylesheet entries
    Consolidate(ConsolidateCommand),
    /// Move an inline style selection into a stylesheet entry
    Extract(ExtractCommand),
    /// Print the stylesheet declarations referenced within a selection
    Copy(CopyCommand),
    /// Initialize a new .restylerc.json configuration file
    Init,
}

fn parse_position(value: &str) -> Result<Position, String> {
    let (line, column) = value
        .split_once(':')
        .ok_or_else(|| format!("expected LINE:COL, got \"{}\"", value))?;
    let line = line
        .parse()
        .map_err(|_| format!("invalid line number \"{}\"", line))?;
    let column = column
        .parse()
        .map_err(|_| format!("invalid column \"{}\"", column))?;
    if line == 0 {
        return Err("line numbers start at 1".to_string());
    }
    Ok(Position::new(line, column))
}
