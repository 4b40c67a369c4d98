//! Progress logging utilities.

use log::info;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Logs progress information while a batch is being graded.
///
/// # Arguments
///
/// * `start_time` - The start time of the batch
/// * `completed` - Atomic counter of successfully graded URLs
/// * `failed` - Atomic counter of failed URLs
pub fn log_progress(
    start_time: std::time::Instant,
    completed: &Arc<AtomicUsize>,
    failed: &Arc<AtomicUsize>,
) {
    let elapsed = start_time.elapsed();
    let graded = completed.load(Ordering::SeqCst);
    let failures = failed.load(Ordering::SeqCst);
    let elapsed_secs = elapsed.as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        (graded + failures) as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Graded {} sites ({} failed) in {:.2} seconds (~{:.2} sites/sec)",
        graded, failures, elapsed_secs, rate
    );
}
