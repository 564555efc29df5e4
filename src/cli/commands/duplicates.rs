use std::fs;

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, DuplicatesSummary};
use crate::cli::args::DuplicatesCommand;
use crate::core::detect_duplicate_inline_styles;

pub fn duplicates(cmd: DuplicatesCommand) -> Result<CommandResult> {
    let text = fs::read_to_string(&cmd.file)
        .with_context(|| format!("Failed to read {}", cmd.file.display()))?;
    let groups = detect_duplicate_inline_styles(&text);

    Ok(CommandResult {
        issue_count: groups.len(),
        summary: CommandSummary::Duplicates(DuplicatesSummary {
            file_path: cmd.file.display().to_string(),
            groups,
            json: cmd.json,
        }),
        exit_on_errors: true,
        parse_error_count: 0,
        source_files_checked: 1,
    })
}
