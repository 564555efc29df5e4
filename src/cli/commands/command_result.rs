use crate::core::{InlineStyleGroup, StyleGroup};

#[derive(Debug)]
pub enum CommandSummary {
    Analyze(AnalyzeSummary),
    Clean(CleanSummary),
    Duplicates(DuplicatesSummary),
    Consolidate(ConsolidateSummary),
    Extract(ExtractSummary),
    Copy(CopySummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct AnalyzeSummary {
    pub file_path: String,
    pub groups: Vec<StyleGroup>,
    pub json: bool,
}

/// One unused style entry, with enough context for cargo-style output.
#[derive(Debug)]
pub struct UnusedStyleReport {
    pub file_path: String,
    /// 1-indexed line of the entry declaration.
    pub line: usize,
    /// 1-indexed column, for display.
    pub col: usize,
    pub root_name: String,
    pub name: String,
    pub source_line: String,
}

#[derive(Debug)]
pub struct CleanSummary {
    pub unused_count: usize,
    pub file_count: usize,
    pub cleaned_file_count: usize,
    pub is_apply: bool,
    pub reports: Vec<UnusedStyleReport>,
}

#[derive(Debug)]
pub struct DuplicatesSummary {
    pub file_path: String,
    pub groups: Vec<InlineStyleGroup>,
    pub json: bool,
}

#[derive(Debug)]
pub struct ConsolidateSummary {
    pub groups_merged: usize,
    pub occurrences_replaced: usize,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub file_path: String,
    pub name: String,
    /// Formatted entry body that was (or would be) inserted.
    pub entry_preview: String,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct CopySummary {
    /// Concatenated declaration text, ready for the clipboard.
    pub text: String,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running restyle commands.
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Issues found: unused entries for analyze/clean, duplicate groups for
    /// duplicates. Zero for rewrite commands.
    pub issue_count: usize,
    /// If true, exit code 1 should be returned when issue_count > 0.
    /// If false, always exit 0 (used for rewrite commands that report work done).
    pub exit_on_errors: bool,
    /// Number of files that failed to parse (batch clean only).
    pub parse_error_count: usize,
    /// Number of source files that were analyzed.
    pub source_files_checked: usize,
}
