pub mod analyze;
pub mod clean;
pub mod consolidate;
pub mod copy;
pub mod duplicates;
pub mod extract;

mod command_result;

pub use command_result::{
    AnalyzeSummary, CleanSummary, CommandResult, CommandSummary, ConsolidateSummary, CopySummary,
    DuplicatesSummary, ExtractSummary, InitSummary, UnusedStyleReport,
};
