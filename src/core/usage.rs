//! Locating style usages inside a text fragment.

use crate::core::extract::usage_pattern;
use crate::core::model::{StyleGroup, UsageMatch};

/// Return one match per style entry that appears somewhere in `fragment`.
///
/// The reported location is the entry's declaration span, not the position
/// inside the fragment; callers use this to jump from a usage back to where
/// the style is defined.
pub fn find_usages(groups: &[StyleGroup], fragment: &str) -> Vec<UsageMatch> {
    let mut matches = Vec::new();
    for group in groups {
        for entry in &group.entries {
            let pattern = usage_pattern(&group.root_name, group.kind, &entry.name);
            if pattern.is_match(fragment) {
                matches.push(UsageMatch {
                    root_name: group.root_name.clone(),
                    name: entry.name.clone(),
                    location: entry.location,
                });
            }
        }
    }
    matches
}
