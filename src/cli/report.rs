//! Report formatting and printing utilities.
//!
//! Unused styles are displayed in cargo-style format with the source line and
//! a caret. Kept separate from the command handlers so restyle can be used as
//! a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    AnalyzeSummary, CleanSummary, CommandResult, CommandSummary, ConsolidateSummary,
    DuplicatesSummary, ExtractSummary, InitSummary, UnusedStyleReport,
};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Analyze(summary) => print_analyze(summary),
        CommandSummary::Clean(summary) => print_clean(summary),
        CommandSummary::Duplicates(summary) => print_duplicates(summary),
        CommandSummary::Consolidate(summary) => print_consolidate(summary),
        CommandSummary::Extract(summary) => print_extract(summary),
        CommandSummary::Copy(summary) => print!("{}", summary.text),
        CommandSummary::Init(summary) => print_init(summary),
    }

    print_parse_warning(result.parse_error_count, verbose);
}

/// Print cargo-style warnings for unused styles to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_unused_to<W: Write>(reports: &[UnusedStyleReport], writer: &mut W) {
    if reports.is_empty() {
        return;
    }

    // Align the gutter on the widest line number
    let max_line_width = reports
        .iter()
        .map(|r| r.line.to_string().len())
        .max()
        .unwrap_or(1);

    for report in reports {
        print_unused(report, writer, max_line_width);
    }
}

fn print_unused<W: Write>(report: &UnusedStyleReport, writer: &mut W, max_line_width: usize) {
    let _ = writeln!(
        writer,
        "{}: \"{}.{}\" is never used  {}",
        "warning".bold().yellow(),
        report.root_name,
        report.name,
        "unused-style".dimmed().cyan()
    );
    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        report.file_path,
        report.line,
        report.col
    );

    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        report.line.to_string().blue(),
        "|".blue(),
        report.source_line,
        width = max_line_width
    );

    // Caret pointing to the column (col is 1-based)
    let prefix: String = report
        .source_line
        .chars()
        .take(report.col.saturating_sub(1))
        .collect();
    let caret_padding = UnicodeWidthStr::width(prefix.as_str());
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}",
        "",
        "|".blue(),
        "",
        "^".yellow(),
        width = max_line_width,
        padding = caret_padding
    );

    let _ = writeln!(writer);
}

/// Print a success message when no issues are found.
fn print_success(source_files: usize) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {} - no issues found",
            source_files,
            if source_files == 1 { "file" } else { "files" }
        )
        .green()
    );
}

/// Print a warning about files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    if count > 0 && !verbose {
        eprintln!(
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

// ============================================================
// Per-command output
// ============================================================

fn print_analyze(summary: &AnalyzeSummary) {
    if summary.json {
        match serde_json::to_string_pretty(&summary.groups) {
            Ok(json) => println!("{}", json),
            Err(err) => eprintln!("{} {}", "error:".bold().red(), err),
        }
        return;
    }

    if summary.groups.is_empty() {
        println!("No stylesheets found in {}", summary.file_path);
        return;
    }

    let mut unused_count = 0;
    for group in &summary.groups {
        println!(
            "{} [{}] {}:{}",
            group.root_name.bold(),
            match group.kind {
                crate::core::StyleKind::Plain => "plain",
                crate::core::StyleKind::Factory => "factory",
            },
            summary.file_path,
            group.location.start.line
        );
        for entry in &group.entries {
            if entry.usage_count == 0 {
                unused_count += 1;
                println!(
                    "  {}: {} {}",
                    entry.name,
                    "0 usages".yellow(),
                    "unused".bold().yellow()
                );
            } else {
                println!(
                    "  {}: {} usage{}",
                    entry.name,
                    entry.usage_count,
                    if entry.usage_count == 1 { "" } else { "s" }
                );
            }
        }
        println!();
    }

    if unused_count > 0 {
        println!(
            "{} {} unused style{}",
            FAILURE_MARK.red(),
            unused_count,
            if unused_count == 1 { "" } else { "s" }
        );
    } else {
        print_success(1);
    }
}

fn print_clean(summary: &CleanSummary) {
    if !summary.is_apply {
        report_unused_to(&summary.reports, &mut io::stdout().lock());
    }

    if summary.unused_count == 0 {
        print_success(summary.file_count);
        return;
    }

    if summary.is_apply {
        println!(
            "{} {} style(s) in {} file(s).",
            "Deleted".green().bold(),
            summary.unused_count,
            summary.cleaned_file_count
        );
    } else {
        println!(
            "{} {} style(s) in {} file(s).",
            "Would delete".yellow().bold(),
            summary.unused_count,
            summary.file_count
        );
        println!("Run with {} to delete these styles.", "--apply".cyan());
    }
}

fn print_duplicates(summary: &DuplicatesSummary) {
    if summary.json {
        match serde_json::to_string_pretty(&summary.groups) {
            Ok(json) => println!("{}", json),
            Err(err) => eprintln!("{} {}", "error:".bold().red(), err),
        }
        return;
    }

    if summary.groups.is_empty() {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("No duplicated inline styles in {}", summary.file_path).green()
        );
        return;
    }

    println!(
        "{} {} duplicated inline style group(s) in {}:",
        FAILURE_MARK.red(),
        summary.groups.len(),
        summary.file_path
    );
    println!();
    for group in &summary.groups {
        println!(
            "  {} occurrence(s): {}",
            group.occurrences.len(),
            group.occurrences[0]
        );
    }
}

fn print_consolidate(summary: &ConsolidateSummary) {
    if summary.groups_merged == 0 {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            "No duplicated inline styles found".green()
        );
        return;
    }

    if summary.is_apply {
        println!(
            "{} {} group(s), replaced {} literal(s).",
            "Merged".green().bold(),
            summary.groups_merged,
            summary.occurrences_replaced
        );
    } else {
        println!(
            "{} {} group(s), replacing {} literal(s).",
            "Would merge".yellow().bold(),
            summary.groups_merged,
            summary.occurrences_replaced
        );
        println!("Run with {} to rewrite the file.", "--apply".cyan());
    }
}

fn print_extract(summary: &ExtractSummary) {
    print!("{}", summary.entry_preview);
    if summary.is_apply {
        println!(
            "{} style \"{}\" in {}.",
            "Extracted".green().bold(),
            summary.name,
            summary.file_path
        );
    } else {
        println!(
            "{} style \"{}\" in {}.",
            "Would extract".yellow().bold(),
            summary.name,
            summary.file_path
        );
        println!("Run with {} to rewrite the file.", "--apply".cyan());
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
