//! A source-text snapshot with a (line, column) position model.
//!
//! Positions use 1-indexed lines and 0-indexed character columns, consistent
//! with how the parser reports locations. Positions past the end of a line or
//! past the last line clamp to the end of the buffer, matching editor
//! semantics for line-granular deletes that run off the final line.

use crate::core::error::StyleError;
use crate::core::model::{Position, Span};

use super::edit::PendingEdit;

pub struct Document {
    text: String,
    /// Byte offset of the start of each line.
    line_starts: Vec<usize>,
}

impl Document {
    pub fn new(text: String) -> Self {
        let mut line_starts = vec![0];
        for (idx, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(idx + 1);
            }
        }
        Self { text, line_starts }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Content of a 1-indexed line, without its trailing newline.
    pub fn line(&self, line: usize) -> Option<&str> {
        if line == 0 || line > self.line_starts.len() {
            return None;
        }
        let start = self.line_starts[line - 1];
        let end = self
            .line_starts
            .get(line)
            .map(|next| next - 1)
            .unwrap_or(self.text.len());
        Some(&self.text[start..end])
    }

    /// Byte offset of a position, clamped to the buffer.
    pub fn offset_at(&self, pos: Position) -> usize {
        if pos.line == 0 {
            return 0;
        }
        if pos.line > self.line_starts.len() {
            return self.text.len();
        }
        let line_start = self.line_starts[pos.line - 1];
        let line = self.line(pos.line).unwrap_or("");
        let column_bytes: usize = line
            .chars()
            .take(pos.column)
            .map(|c| c.len_utf8())
            .sum();
        line_start + column_bytes
    }

    /// Position of a byte offset (must lie on a char boundary).
    pub fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.text.len());
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let column = self.text[self.line_starts[line_idx]..offset].chars().count();
        Position::new(line_idx + 1, column)
    }

    /// Position just past the last character of the buffer.
    pub fn end_position(&self) -> Position {
        self.position_at(self.text.len())
    }

    pub fn slice(&self, span: Span) -> &str {
        let start = self.offset_at(span.start);
        let end = self.offset_at(span.end).max(start);
        &self.text[start..end]
    }

    /// All non-overlapping occurrences of `needle`, in document order.
    pub fn find_all(&self, needle: &str) -> Vec<Span> {
        if needle.is_empty() {
            return Vec::new();
        }
        self.text
            .match_indices(needle)
            .map(|(start, matched)| {
                Span::new(
                    self.position_at(start),
                    self.position_at(start + matched.len()),
                )
            })
            .collect()
    }

    /// Apply a batch of edits, all-or-nothing, returning the new text.
    ///
    /// Edits must not overlap; insertions at the same offset are applied in
    /// the order given. The document itself is never mutated.
    pub fn apply(&self, edits: &[PendingEdit]) -> Result<String, StyleError> {
        let mut resolved: Vec<(usize, usize, &str)> = edits
            .iter()
            .map(|edit| match edit {
                PendingEdit::Insert { at, text } => {
                    let offset = self.offset_at(*at);
                    (offset, offset, text.as_str())
                }
                PendingEdit::Delete { range } => {
                    (self.offset_at(range.start), self.offset_at(range.end), "")
                }
                PendingEdit::Replace { range, text } => (
                    self.offset_at(range.start),
                    self.offset_at(range.end),
                    text.as_str(),
                ),
            })
            .collect();

        for (start, end, _) in &resolved {
            if start > end {
                return Err(StyleError::InvalidRange);
            }
        }

        resolved.sort_by_key(|(start, _, _)| *start);
        for window in resolved.windows(2) {
            if window[0].1 > window[1].0 {
                return Err(StyleError::InvalidRange);
            }
        }

        let mut result = self.text.clone();
        for (start, end, text) in resolved.into_iter().rev() {
            result.replace_range(start..end, text);
        }
        Ok(result)
    }
}
