//! Batch-run support modules.
//!
//! This module provides URL validation and progress logging used by the
//! batch orchestrator.

pub mod logging;
pub mod url;

// Re-export public API
pub use logging::log_progress;
pub use url::validate_and_normalize_url;
