use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use rayon::prelude::*;

use super::{CleanSummary, CommandResult, CommandSummary, UnusedStyleReport};
use crate::cli::args::CleanCommand;
use crate::config::load_config;
use crate::core::{Document, StyleError, extract_styles, plan_remove_unused};
use crate::scanner::scan_source_files;

struct FileOutcome {
    reports: Vec<UnusedStyleReport>,
    had_groups: bool,
    cleaned: bool,
}

pub fn clean(cmd: CleanCommand) -> Result<CommandResult> {
    let verbose = cmd.common.verbose;

    if cmd.path.is_dir() {
        clean_directory(&cmd.path, cmd.apply, verbose)
    } else {
        clean_single_file(&cmd.path, cmd.apply)
    }
}

fn clean_single_file(path: &Path, apply: bool) -> Result<CommandResult> {
    let outcome = clean_file(path, apply)?;
    if !outcome.had_groups {
        return Err(StyleError::NothingToDelete)
            .with_context(|| format!("Nothing to clean in {}", path.display()));
    }

    Ok(summarize(vec![outcome], 1, apply, 0))
}

fn clean_directory(base: &Path, apply: bool, verbose: bool) -> Result<CommandResult> {
    let config = load_config(base)?.config;
    let scan = scan_source_files(base, &config.ignores, verbose);
    let file_count = scan.files.len();

    let results: Vec<(PathBuf, Result<FileOutcome>)> = scan
        .files
        .into_par_iter()
        .map(|file| {
            let outcome = clean_file(&file, apply);
            (file, outcome)
        })
        .collect();

    let mut outcomes = Vec::new();
    let mut parse_error_count = 0;
    for (file, result) in results {
        match result {
            Ok(outcome) => outcomes.push(outcome),
            Err(err) => {
                // Unparseable files are skipped, not fatal, in batch mode.
                parse_error_count += 1;
                if verbose {
                    eprintln!(
                        "{} Skipping {}: {:#}",
                        "warning:".bold().yellow(),
                        file.display(),
                        err
                    );
                }
            }
        }
    }

    Ok(summarize(outcomes, file_count, apply, parse_error_count))
}

fn clean_file(path: &Path, apply: bool) -> Result<FileOutcome> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let groups = extract_styles(&text)
        .with_context(|| format!("Failed to analyze {}", path.display()))?;
    let doc = Document::new(text);

    let reports = groups
        .iter()
        .flat_map(|group| {
            group
                .entries
                .iter()
                .filter(|entry| entry.usage_count == 0)
                .map(|entry| UnusedStyleReport {
                    file_path: path.display().to_string(),
                    line: entry.location.start.line,
                    col: entry.location.start.column + 1,
                    root_name: group.root_name.clone(),
                    name: entry.name.clone(),
                    source_line: doc.line(entry.location.start.line).unwrap_or("").to_string(),
                })
        })
        .collect::<Vec<_>>();

    let mut cleaned = false;
    if apply && !reports.is_empty() {
        let edits = plan_remove_unused(&groups);
        let new_text = doc
            .apply(&edits)
            .with_context(|| format!("Failed to rewrite {}", path.display()))?;
        fs::write(path, new_text)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        cleaned = true;
    }

    Ok(FileOutcome {
        reports,
        had_groups: !groups.is_empty(),
        cleaned,
    })
}

fn summarize(
    outcomes: Vec<FileOutcome>,
    file_count: usize,
    is_apply: bool,
    parse_error_count: usize,
) -> CommandResult {
    let source_files_checked = outcomes.len();
    let cleaned_file_count = outcomes.iter().filter(|o| o.cleaned).count();
    let mut reports: Vec<UnusedStyleReport> = outcomes
        .into_iter()
        .flat_map(|o| o.reports)
        .collect();
    reports.sort_by(|a, b| {
        a.file_path
            .cmp(&b.file_path)
            .then_with(|| a.line.cmp(&b.line))
            .then_with(|| a.col.cmp(&b.col))
    });

    CommandResult {
        issue_count: reports.len(),
        summary: CommandSummary::Clean(CleanSummary {
            unused_count: reports.len(),
            file_count,
            cleaned_file_count,
            is_apply,
            reports,
        }),
        exit_on_errors: !is_apply,
        parse_error_count,
        source_files_checked,
    }
}
