//! Error taxonomy for the analysis core.
//!
//! All failures are values returned to the caller; the CLI layer is
//! responsible for user-facing messaging. A parse failure is distinguishable
//! from "no stylesheets found": the former is `StyleError::Parse`, the latter
//! an empty result list.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StyleError {
    /// The source text could not be parsed as JS/TS/JSX.
    #[error("failed to parse source: {0}")]
    Parse(String),

    /// A proposed style entry name is not a valid object key.
    #[error("invalid style name: {0:?}")]
    InvalidName(String),

    /// Several stylesheets exist and no target root name was supplied.
    #[error("multiple stylesheets found; a target root name is required")]
    AmbiguousTarget,

    /// The supplied target root name matches no stylesheet in the file.
    #[error("no stylesheet named {0:?} in this file")]
    UnknownTarget(String),

    /// A copy/extract selection references no known style.
    #[error("no styles referenced within the selection")]
    NoStylesInSelection,

    /// A delete was requested but the file declares no stylesheets.
    #[error("no stylesheet declarations to clean")]
    NothingToDelete,

    /// An edit plan is inconsistent with the document it targets.
    #[error("edit ranges overlap or exceed the document")]
    InvalidRange,
}
