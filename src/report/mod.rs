//! Report rendering and export.
//!
//! Console output for humans, JSON export for pipelines.

mod console;
mod json;

// Re-export public API
pub use console::{print_batch_summary, print_site_report};
pub use json::{write_json_report, BatchReport, BatchSummary, UrlFailure};
