//! Detection of repeated inline `style={{...}}` literals.
//!
//! Matching is textual and shallow: the literal body must contain no nested
//! braces, pairs are split on bare commas, and values compare by parsed
//! content rather than spelling, so `{flex: 1}` and `{ flex: 1.0 }` land in
//! the same group. Unquoted non-numeric values parse to NaN, which never
//! compares equal, so literals carrying identifiers or expressions are never
//! grouped together.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::core::model::{InlineStyleGroup, StyleValue};

static INLINE_STYLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"style=\{\{([^{}]*)\}\}").expect("pattern is valid"));

/// Find every inline-style literal that appears, semantically, more than once.
///
/// Groups are returned in order of first occurrence; each group carries the
/// raw occurrence texts exactly as they appear in the source.
pub fn detect_duplicate_inline_styles(text: &str) -> Vec<InlineStyleGroup> {
    let mut groups: Vec<InlineStyleGroup> = Vec::new();
    for captures in INLINE_STYLE.captures_iter(text) {
        let whole = captures.get(0).expect("group 0 always present");
        let inner = &captures[1];
        let properties = parse_properties(inner);
        if properties.is_empty() {
            continue;
        }
        match groups.iter_mut().find(|g| g.properties == properties) {
            Some(group) => group.occurrences.push(whole.as_str().to_string()),
            None => groups.push(InlineStyleGroup {
                properties,
                occurrences: vec![whole.as_str().to_string()],
            }),
        }
    }
    groups.retain(|g| g.occurrences.len() >= 2);
    groups
}

fn parse_properties(inner: &str) -> BTreeMap<String, StyleValue> {
    let mut properties = BTreeMap::new();
    for segment in inner.split(',') {
        if segment.trim().is_empty() {
            continue;
        }
        let Some((key, value)) = segment.split_once(':') else {
            continue;
        };
        properties.insert(key.trim().to_string(), parse_value(value.trim()));
    }
    properties
}

fn parse_value(raw: &str) -> StyleValue {
    if raw.contains('\'') {
        StyleValue::Str(raw.replace('\'', ""))
    } else {
        StyleValue::Num(raw.parse().unwrap_or(f64::NAN))
    }
}
