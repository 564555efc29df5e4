//! Edit planning for the rewrite operations.
//!
//! Planners never mutate text; they return [`PendingEdit`] batches (or spans,
//! for copy) that the caller applies through [`Document::apply`]. Deletes are
//! line-granular: an entry removal covers column 0 of its first line through
//! column 0 of the line after its last, taking the trailing comma and newline
//! with it.

use crate::core::document::Document;
use crate::core::error::StyleError;
use crate::core::extract::extract_styles;
use crate::core::format::{format_for_pasting, is_valid_object_key};
use crate::core::inline::detect_duplicate_inline_styles;
use crate::core::model::{Position, Span, StyleGroup};
use crate::core::usage::find_usages;

/// One pending text change, positioned in (line, column) coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingEdit {
    Insert { at: Position, text: String },
    Delete { range: Span },
    Replace { range: Span, text: String },
}

/// Result of consolidating duplicate inline styles in one buffer.
#[derive(Debug)]
pub struct ConsolidateOutcome {
    /// The rewritten buffer.
    pub text: String,
    /// How many duplicate groups were merged into named entries.
    pub groups_merged: usize,
    /// How many inline literals were replaced by references.
    pub occurrences_replaced: usize,
}

/// Plan moving an inline-style selection into a stylesheet entry.
///
/// The selection text must already have passed
/// [`check_selection_is_valid_style`](crate::core::format::check_selection_is_valid_style).
/// With several stylesheets in the file a `target_root` is required; with
/// none, a fresh `const styles = StyleSheet.create({...})` is appended at the
/// end of the buffer.
pub fn plan_extract(
    doc: &Document,
    groups: &[StyleGroup],
    selection: Span,
    new_name: &str,
    target_root: Option<&str>,
) -> Result<Vec<PendingEdit>, StyleError> {
    if !is_valid_object_key(new_name) {
        return Err(StyleError::InvalidName(new_name.to_string()));
    }
    let literal = doc.slice(selection).to_string();
    let formatted = format_for_pasting(&literal, new_name);

    let target = match (target_root, groups) {
        (Some(root), _) => Some(
            groups
                .iter()
                .find(|g| g.root_name == root)
                .ok_or_else(|| StyleError::UnknownTarget(root.to_string()))?,
        ),
        (None, []) => None,
        (None, [single]) => Some(single),
        (None, _) => return Err(StyleError::AmbiguousTarget),
    };

    let mut edits = Vec::with_capacity(2);
    let root_name = match target {
        Some(group) => {
            edits.push(plan_append_entry(doc, group, formatted));
            group.root_name.as_str()
        }
        None => {
            edits.push(PendingEdit::Insert {
                at: doc.end_position(),
                text: format!("\n\nconst styles = StyleSheet.create({{\n{}}});\n", formatted),
            });
            "styles"
        }
    };
    edits.push(PendingEdit::Replace {
        range: selection,
        text: format!("style={{{}.{}}}", root_name, new_name),
    });
    Ok(edits)
}

/// Plan inserting an already-formatted entry body into a stylesheet.
///
/// Multi-line declarations take the entry at column 0 of their closing line;
/// single-line declarations take it just before the final `})`, pushed onto
/// its own line.
fn plan_append_entry(doc: &Document, group: &StyleGroup, formatted: String) -> PendingEdit {
    let end = group.location.end;
    if group.location.start.line == end.line {
        let line = doc.line(end.line).unwrap_or("");
        if let Some(idx) = line.rfind("})") {
            return PendingEdit::Insert {
                at: Position::new(end.line, line[..idx].chars().count()),
                text: format!("\n{}", formatted),
            };
        }
    }
    PendingEdit::Insert {
        at: Position::new(end.line, 0),
        text: formatted,
    }
}

/// Plan deleting every style entry with a usage count of zero.
pub fn plan_remove_unused(groups: &[StyleGroup]) -> Vec<PendingEdit> {
    let mut edits = Vec::new();
    for group in groups {
        for entry in &group.entries {
            if entry.usage_count == 0 {
                edits.push(PendingEdit::Delete {
                    range: Span::new(
                        Position::new(entry.location.start.line, 0),
                        Position::new(entry.location.end.line + 1, 0),
                    ),
                });
            }
        }
    }
    edits
}

/// Spans of the entry declarations referenced inside `fragment`, whole lines.
pub fn plan_copy(groups: &[StyleGroup], fragment: &str) -> Result<Vec<Span>, StyleError> {
    let matches = find_usages(groups, fragment);
    if matches.is_empty() {
        return Err(StyleError::NoStylesInSelection);
    }
    Ok(matches
        .iter()
        .map(|m| {
            Span::new(
                Position::new(m.location.start.line, 0),
                Position::new(m.location.end.line + 1, 0),
            )
        })
        .collect())
}

/// Merge every duplicated inline-style literal into a named stylesheet entry.
///
/// Duplicate groups are detected once against the original buffer, then merged
/// one at a time: each round appends an entry named `{prefix}_{n}` to the
/// file's first stylesheet (creating one when the file has none) and replaces
/// every textual occurrence of the group's literals with a reference. The
/// buffer is re-analyzed between rounds so stylesheet positions stay accurate.
pub fn consolidate_inline_styles(
    text: &str,
    prefix: &str,
) -> Result<ConsolidateOutcome, StyleError> {
    let duplicates = detect_duplicate_inline_styles(text);
    let mut current = text.to_string();
    let mut occurrences_replaced = 0;

    for (index, duplicate) in duplicates.iter().enumerate() {
        let name = format!("{}_{}", prefix, index + 1);
        let mut groups = extract_styles(&current)?;
        if groups.is_empty() {
            current.push_str("\n\nconst styles = StyleSheet.create({\n});\n");
            groups = extract_styles(&current)?;
        }
        let target = &groups[0];
        let doc = Document::new(current.clone());

        let mut edits = vec![plan_append_entry(
            &doc,
            target,
            format_for_pasting(&duplicate.occurrences[0], &name),
        )];
        let reference = format!("style={{{}.{}}}", target.root_name, name);

        // Textually identical occurrences are located in one pass.
        let mut unique: Vec<&str> = Vec::new();
        for occurrence in &duplicate.occurrences {
            if !unique.contains(&occurrence.as_str()) {
                unique.push(occurrence);
            }
        }
        for occurrence in unique {
            for span in doc.find_all(occurrence) {
                edits.push(PendingEdit::Replace {
                    range: span,
                    text: reference.clone(),
                });
                occurrences_replaced += 1;
            }
        }
        current = doc.apply(&edits)?;
    }

    Ok(ConsolidateOutcome {
        text: current,
        groups_merged: duplicates.len(),
        occurrences_replaced,
    })
}
