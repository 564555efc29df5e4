use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::{CommandResult, CommandSummary, ConsolidateSummary};
use crate::cli::args::ConsolidateCommand;
use crate::config::load_config;
use crate::core::{consolidate_inline_styles, is_valid_object_key};

pub fn consolidate(cmd: ConsolidateCommand) -> Result<CommandResult> {
    let base = cmd.file.parent().unwrap_or(Path::new("."));
    let config = load_config(base)?.config;
    let prefix = cmd.prefix.unwrap_or(config.consolidated_style_prefix);
    if !is_valid_object_key(&prefix) {
        anyhow::bail!("Invalid style name prefix: \"{}\"", prefix);
    }

    let text = fs::read_to_string(&cmd.file)
        .with_context(|| format!("Failed to read {}", cmd.file.display()))?;
    let outcome = consolidate_inline_styles(&text, &prefix)
        .with_context(|| format!("Failed to consolidate {}", cmd.file.display()))?;

    if cmd.apply && outcome.groups_merged > 0 {
        fs::write(&cmd.file, &outcome.text)
            .with_context(|| format!("Failed to write {}", cmd.file.display()))?;
    }

    Ok(CommandResult {
        summary: CommandSummary::Consolidate(ConsolidateSummary {
            groups_merged: outcome.groups_merged,
            occurrences_replaced: outcome.occurrences_replaced,
            is_apply: cmd.apply,
        }),
        issue_count: 0,
        exit_on_errors: false,
        parse_error_count: 0,
        source_files_checked: 1,
    })
}
