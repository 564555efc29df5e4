use std::fs;

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, ExtractSummary};
use crate::cli::args::ExtractCommand;
use crate::core::{
    Document, Span, check_selection_is_valid_style, extract_styles, format_for_pasting,
    plan_extract,
};

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let text = fs::read_to_string(&cmd.file)
        .with_context(|| format!("Failed to read {}", cmd.file.display()))?;
    let doc = Document::new(text.clone());

    let selection = Span::new(cmd.start, cmd.end);
    let selected = doc.slice(selection).to_string();
    if !check_selection_is_valid_style(&selected) {
        anyhow::bail!("Selection is not an inline style literal: {:?}", selected);
    }

    let groups = extract_styles(&text)
        .with_context(|| format!("Failed to analyze {}", cmd.file.display()))?;
    let edits = plan_extract(&doc, &groups, selection, &cmd.name, cmd.target.as_deref())?;
    let new_text = doc.apply(&edits)?;

    if cmd.apply {
        fs::write(&cmd.file, new_text)
            .with_context(|| format!("Failed to write {}", cmd.file.display()))?;
    }

    Ok(CommandResult {
        summary: CommandSummary::Extract(ExtractSummary {
            file_path: cmd.file.display().to_string(),
            entry_preview: format_for_pasting(&selected, &cmd.name),
            name: cmd.name,
            is_apply: cmd.apply,
        }),
        issue_count: 0,
        exit_on_errors: false,
        parse_error_count: 0,
        source_files_checked: 1,
    })
}
