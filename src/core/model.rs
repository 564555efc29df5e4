//! Data model for style analysis results.
//!
//! All results are transient values recomputed on every analysis pass and
//! serializable to JSON for transport to any UI layer.

use std::collections::BTreeMap;

use serde::Serialize;

/// A position in a source buffer. Lines are 1-indexed, columns 0-indexed,
/// matching how the parser reports source locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A half-open span between two positions in a source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

/// How a stylesheet was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleKind {
    /// `const styles = StyleSheet.create({...})`
    Plain,
    /// `const styles = (width) => StyleSheet.create({...})`, referenced as
    /// `styles(WIDTH).entry`.
    Factory,
}

/// One named style inside a stylesheet, with its computed usage count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleEntry {
    pub name: String,
    /// Number of textual references found in the scanned text. Recomputed
    /// from scratch on every analysis pass.
    pub usage_count: usize,
    /// Span of this entry's key/value in the source. This is the unit
    /// deleted when the entry is unused.
    pub location: Span,
}

/// One recognized `StyleSheet.create(...)` declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleGroup {
    /// Identifier the created style object is bound to.
    pub root_name: String,
    pub kind: StyleKind,
    /// Span of the entire declaration.
    pub location: Span,
    /// Entries in source order; names are unique within a group.
    pub entries: Vec<StyleEntry>,
}

/// One style entry matched inside a text fragment. The location is the
/// entry's declaration span, not a position within the fragment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMatch {
    pub root_name: String,
    pub name: String,
    pub location: Span,
}

/// A parsed inline-style property value.
///
/// Values containing a single quote are strings (quotes stripped); everything
/// else is coerced to a number. Text that fails to parse becomes NaN, which
/// never compares equal, so literals holding such values never group together.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Str(String),
    Num(f64),
}

/// A class of textually-distinct inline `style={{...}}` literals that parse
/// to the same property map. Only groups with two or more occurrences are
/// reported as duplicates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineStyleGroup {
    pub properties: BTreeMap<String, StyleValue>,
    /// Raw literal texts, in order of first appearance.
    pub occurrences: Vec<String>,
}
