//! Page-speed scoring from the measured load latency.

use crate::engine::calibration::SpeedBucket;
use crate::engine::category::Category;
use crate::engine::result::CategoryResult;
use crate::engine::snapshot::Snapshot;

pub(crate) const ISSUE_SLIGHTLY_SLOW: &str = "Page load is slightly slower than ideal";
pub(crate) const ISSUE_NOTICEABLY_SLOW: &str = "Page load is noticeably slow";
pub(crate) const ISSUE_SLOW: &str = "Page load is slow enough to lose visitors";
pub(crate) const ISSUE_CRITICALLY_SLOW: &str = "Page load is critically slow";

pub(crate) fn analyze(snapshot: &Snapshot, buckets: &[SpeedBucket]) -> CategoryResult {
    let mut result = CategoryResult::new(Category::PageSpeed);
    let latency = snapshot.response_latency();

    // First bucket whose bound the latency beats wins. Bounds are strict:
    // a load sitting exactly on one falls through to the next bucket.
    let percent = buckets
        .iter()
        .find(|bucket| latency < bucket.under_seconds)
        .map(|bucket| bucket.percent)
        .unwrap_or(0);

    let max = result.max_score;
    result.score = (f64::from(percent) * f64::from(max) / 100.0).round() as u32;

    // Issue strings are banded by earned percent so calibrated bucket
    // tables still map onto the fixed suggestion templates.
    if percent >= 100 {
        result.strengths.push("Fast page load".to_string());
    } else if percent >= 75 {
        result.flag(ISSUE_SLIGHTLY_SLOW);
    } else if percent >= 50 {
        result.flag(ISSUE_NOTICEABLY_SLOW);
    } else if percent > 0 {
        result.flag(ISSUE_SLOW);
    } else {
        result.flag(ISSUE_CRITICALLY_SLOW);
    }

    result
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::engine::calibration::default_speed_buckets;
    use crate::engine::snapshot::SnapshotParams;

    fn snapshot_with_latency(latency: f64) -> Snapshot {
        Snapshot::new(SnapshotParams {
            url: "https://example.com".to_string(),
            raw_markup: "<html></html>".to_string(),
            final_status_code: 200,
            response_latency: latency,
            tls_present: true,
            tls_valid: Some(true),
            response_headers: Vec::new(),
            fetched_at: Utc::now(),
        })
    }

    #[test]
    fn test_sub_second_load_earns_ceiling() {
        let buckets = default_speed_buckets();
        let result = analyze(&snapshot_with_latency(0.99), &buckets);
        assert_eq!(result.score, 15);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_bucket_bounds_are_strict() {
        // Exactly 1.0s is not under 1.0s, so it lands in the 75% bucket.
        let buckets = default_speed_buckets();
        let result = analyze(&snapshot_with_latency(1.0), &buckets);
        assert_eq!(result.score, 11);
        assert_eq!(result.issues, vec![ISSUE_SLIGHTLY_SLOW]);
    }

    #[test]
    fn test_half_credit_rounds_half_away_from_zero() {
        // 50% of 15 is 7.5 and must round to 8.
        let buckets = default_speed_buckets();
        let result = analyze(&snapshot_with_latency(2.5), &buckets);
        assert_eq!(result.score, 8);
        assert_eq!(result.issues, vec![ISSUE_NOTICEABLY_SLOW]);
    }

    #[test]
    fn test_quarter_credit() {
        let buckets = default_speed_buckets();
        let result = analyze(&snapshot_with_latency(4.2), &buckets);
        assert_eq!(result.score, 4);
        assert_eq!(result.issues, vec![ISSUE_SLOW]);
    }

    #[test]
    fn test_past_last_bucket_earns_nothing() {
        let buckets = default_speed_buckets();
        let result = analyze(&snapshot_with_latency(6.0), &buckets);
        assert_eq!(result.score, 0);
        assert_eq!(result.issues, vec![ISSUE_CRITICALLY_SLOW]);
    }

    #[test]
    fn test_calibrated_buckets_respected() {
        let buckets = vec![SpeedBucket {
            under_seconds: 0.5,
            percent: 100,
        }];
        let fast = analyze(&snapshot_with_latency(0.4), &buckets);
        assert_eq!(fast.score, 15);

        let slow = analyze(&snapshot_with_latency(0.6), &buckets);
        assert_eq!(slow.score, 0);
        assert_eq!(slow.issues, vec![ISSUE_CRITICALLY_SLOW]);
    }
}
