//! Batch failure statistics tracking.
//!
//! Thread-safe counters for fetch failures by kind, accumulated while the
//! batch runs and summarized once at the end.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::info;
use strum::IntoEnumIterator;

use super::types::FetchErrorKind;

/// Thread-safe fetch-failure statistics tracker.
///
/// Every [`FetchErrorKind`] gets an atomic counter at construction, so
/// incrementing from concurrent tasks needs no locking. Shared across
/// tasks via `Arc`.
pub struct BatchStats {
    failures: HashMap<FetchErrorKind, AtomicUsize>,
}

impl BatchStats {
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for kind in FetchErrorKind::iter() {
            failures.insert(kind, AtomicUsize::new(0));
        }
        BatchStats { failures }
    }

    /// Increment the counter for a failure kind.
    ///
    /// Never panics: every kind is inserted in `new()`, so a missing
    /// counter indicates an initialization bug and is logged instead.
    pub fn increment(&self, kind: FetchErrorKind) {
        if let Some(counter) = self.failures.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "No counter for failure kind {:?}; BatchStats was not fully initialized",
                kind
            );
        }
    }

    /// Get the count for a failure kind.
    pub fn count(&self, kind: FetchErrorKind) -> usize {
        self.failures
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total failures across all kinds.
    pub fn total(&self) -> usize {
        FetchErrorKind::iter().map(|k| self.count(k)).sum()
    }
}

impl Default for BatchStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Logs a per-kind breakdown of fetch failures.
///
/// Silent when the run had no failures; otherwise one line per kind that
/// actually occurred.
pub fn log_failure_statistics(stats: &BatchStats) {
    let total = stats.total();
    if total == 0 {
        return;
    }

    info!("Fetch failures ({} total):", total);
    for kind in FetchErrorKind::iter() {
        let count = stats.count(kind);
        if count > 0 {
            info!("   {}: {}", kind.as_str(), count);
        }
    }
}
