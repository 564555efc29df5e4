use std::fs;

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, CopySummary};
use crate::cli::args::CopyCommand;
use crate::core::{Document, Span, extract_styles, plan_copy};

pub fn copy(cmd: CopyCommand) -> Result<CommandResult> {
    let text = fs::read_to_string(&cmd.file)
        .with_context(|| format!("Failed to read {}", cmd.file.display()))?;
    let doc = Document::new(text.clone());

    let selection = Span::new(cmd.start, cmd.end);
    let fragment = doc.slice(selection).to_string();

    let groups = extract_styles(&text)
        .with_context(|| format!("Failed to analyze {}", cmd.file.display()))?;
    let spans = plan_copy(&groups, &fragment)?;

    let mut out = String::new();
    for span in spans {
        out.push_str(doc.slice(span));
    }

    Ok(CommandResult {
        summary: CommandSummary::Copy(CopySummary { text: out }),
        issue_count: 0,
        exit_on_errors: false,
        parse_error_count: 0,
        source_files_checked: 1,
    })
}
