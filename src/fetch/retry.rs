//! Retry schedule for transient fetch failures.

use std::time::Duration;

use tokio_retry::strategy::ExponentialBackoff;

use crate::config::{
    RETRY_FACTOR, RETRY_INITIAL_DELAY_MS, RETRY_MAX_ATTEMPTS, RETRY_MAX_DELAY_SECS,
};

/// Creates the exponential backoff schedule for fetch retries.
///
/// Returns a retry strategy configured with:
/// - Initial delay: `RETRY_INITIAL_DELAY_MS` milliseconds
/// - Backoff factor: `RETRY_FACTOR` (doubles delay each retry)
/// - Maximum delay: `RETRY_MAX_DELAY_SECS` seconds
/// - Total attempts: `RETRY_MAX_ATTEMPTS` (initial attempt + retries)
///
/// # Returns
///
/// A delay iterator ready for use with `tokio_retry::RetryIf`.
pub fn get_retry_strategy() -> impl Iterator<Item = Duration> {
    // ExponentialBackoff raises its base to the attempt number, so a
    // doubling sequence starting at the initial delay needs base 2 with
    // the initial delay folded into the factor
    ExponentialBackoff::from_millis(RETRY_FACTOR)
        .factor(RETRY_INITIAL_DELAY_MS / RETRY_FACTOR)
        .max_delay(Duration::from_secs(RETRY_MAX_DELAY_SECS))
        // Delays sit between attempts: n-1 delays bound n attempts
        .take(RETRY_MAX_ATTEMPTS - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delays_double_from_the_initial_value() {
        let delays: Vec<Duration> = get_retry_strategy().collect();
        assert_eq!(
            delays,
            vec![Duration::from_millis(500), Duration::from_millis(1000)]
        );
    }

    #[test]
    fn test_attempt_budget() {
        // Two delays means three attempts total
        assert_eq!(get_retry_strategy().count(), RETRY_MAX_ATTEMPTS - 1);
    }

    #[test]
    fn test_longer_schedules_respect_the_delay_cap() {
        let delays: Vec<Duration> = ExponentialBackoff::from_millis(RETRY_FACTOR)
            .factor(RETRY_INITIAL_DELAY_MS / RETRY_FACTOR)
            .max_delay(Duration::from_secs(RETRY_MAX_DELAY_SECS))
            .take(12)
            .collect();

        assert!(delays
            .iter()
            .all(|d| *d <= Duration::from_secs(RETRY_MAX_DELAY_SECS)));
        // The cap is actually reached, not just never exceeded
        assert_eq!(
            delays.last(),
            Some(&Duration::from_secs(RETRY_MAX_DELAY_SECS))
        );
    }
}
