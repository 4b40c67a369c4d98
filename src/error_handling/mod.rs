//! Error handling and batch failure statistics.
//!
//! This module provides:
//! - Error type definitions and categorization
//! - Per-kind fetch-failure counters and end-of-run reporting
//!
//! Fetch failures are per-URL: one becomes a failure record in the batch
//! report and a counter tick here, never a reason to stop the batch.
//! Calibration and initialization errors are fatal at startup.

mod stats;
mod types;

// Re-export public API
pub use stats::{log_failure_statistics, BatchStats};
pub use types::{
    categorize_reqwest_error, CalibrationError, FetchError, FetchErrorKind, InitializationError,
};
