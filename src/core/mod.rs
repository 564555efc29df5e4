//! Style analysis and edit-planning engine.
//!
//! Everything in this module is a pure function from a source-text snapshot
//! (plus an optional selection) to structured results or an edit plan. The
//! caller owns the text, applies returned edits, and re-runs analysis after
//! any change; no state survives between calls.

pub mod document;
pub mod edit;
pub mod error;
pub mod extract;
pub mod format;
pub mod inline;
pub mod model;
pub mod parser;
pub mod usage;

pub use document::Document;
pub use edit::{
    ConsolidateOutcome, PendingEdit, consolidate_inline_styles, plan_copy, plan_extract,
    plan_remove_unused,
};
pub use error::StyleError;
pub use extract::extract_styles;
pub use format::{
    check_selection_is_valid_style, format_for_pasting, get_style_contents, is_valid_object_key,
};
pub use inline::detect_duplicate_inline_styles;
pub use model::{
    InlineStyleGroup, Position, Span, StyleEntry, StyleGroup, StyleKind, StyleValue, UsageMatch,
};
pub use usage::find_usages;
