use std::fs;

use anyhow::{Context, Result};

use super::{AnalyzeSummary, CommandResult, CommandSummary};
use crate::cli::args::AnalyzeCommand;
use crate::core::extract_styles;

pub fn analyze(cmd: AnalyzeCommand) -> Result<CommandResult> {
    let text = fs::read_to_string(&cmd.file)
        .with_context(|| format!("Failed to read {}", cmd.file.display()))?;
    let groups = extract_styles(&text)
        .with_context(|| format!("Failed to analyze {}", cmd.file.display()))?;

    let unused_count = groups
        .iter()
        .flat_map(|g| &g.entries)
        .filter(|e| e.usage_count == 0)
        .count();

    Ok(CommandResult {
        summary: CommandSummary::Analyze(AnalyzeSummary {
            file_path: cmd.file.display().to_string(),
            groups,
            json: cmd.json,
        }),
        issue_count: unused_count,
        exit_on_errors: true,
        parse_error_count: 0,
        source_files_checked: 1,
    })
}
