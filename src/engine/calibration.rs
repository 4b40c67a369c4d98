//! Scoring calibration: weights, buckets, and thresholds.
//!
//! Everything an operator may retune without a code change lives here.
//! Defaults reproduce the canonical scoring tables; a JSON calibration
//! file (`--calibration`) overrides any subset of fields. The merged
//! configuration is validated once at startup so a miscalibrated engine
//! never scores a URL.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::category::Category;
use crate::error_handling::CalibrationError;

/// Per-category aggregation weights.
///
/// Defaults equal the category ceilings, so out of the box the total is
/// the plain sum of category scores. Overriding a weight rebalances the
/// total without touching the analyzers' internal point shares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[allow(missing_docs)] // Field names mirror the category keys.
pub struct WeightTable {
    pub ssl: u32,
    pub mobile: u32,
    pub page_speed: u32,
    pub tech_stack: u32,
    pub ui_quality: u32,
    pub seo: u32,
    pub security: u32,
    pub accessibility: u32,
    pub content: u32,
}

impl Default for WeightTable {
    fn default() -> Self {
        WeightTable {
            ssl: Category::Ssl.max_score(),
            mobile: Category::Mobile.max_score(),
            page_speed: Category::PageSpeed.max_score(),
            tech_stack: Category::TechStack.max_score(),
            ui_quality: Category::UiQuality.max_score(),
            seo: Category::Seo.max_score(),
            security: Category::Security.max_score(),
            accessibility: Category::Accessibility.max_score(),
            content: Category::Content.max_score(),
        }
    }
}

impl WeightTable {
    /// The weight assigned to one category.
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Ssl => self.ssl,
            Category::Mobile => self.mobile,
            Category::PageSpeed => self.page_speed,
            Category::TechStack => self.tech_stack,
            Category::UiQuality => self.ui_quality,
            Category::Seo => self.seo,
            Category::Security => self.security,
            Category::Accessibility => self.accessibility,
            Category::Content => self.content,
        }
    }

    /// Sum of all nine weights. Must be exactly 100 to validate.
    pub fn sum(&self) -> u32 {
        self.ssl
            + self.mobile
            + self.page_speed
            + self.tech_stack
            + self.ui_quality
            + self.seo
            + self.security
            + self.accessibility
            + self.content
    }
}

/// One page-speed bucket: loads strictly under `under_seconds` earn
/// `percent` of the category ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpeedBucket {
    /// Exclusive upper bound on load time, in seconds.
    pub under_seconds: f64,
    /// Percentage of the page-speed ceiling this bucket earns.
    pub percent: u32,
}

pub(crate) fn default_speed_buckets() -> Vec<SpeedBucket> {
    vec![
        SpeedBucket {
            under_seconds: 1.0,
            percent: 100,
        },
        SpeedBucket {
            under_seconds: 2.0,
            percent: 75,
        },
        SpeedBucket {
            under_seconds: 3.0,
            percent: 50,
        },
        SpeedBucket {
            under_seconds: 5.0,
            percent: 25,
        },
    ]
}

/// Inclusive lower bounds of the named tiers; anything below `outdated`
/// is Poor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[allow(missing_docs)] // Field names mirror the tier names.
pub struct TierThresholds {
    pub excellent: u32,
    pub good: u32,
    pub average: u32,
    pub outdated: u32,
}

impl Default for TierThresholds {
    fn default() -> Self {
        TierThresholds {
            excellent: 80,
            good: 65,
            average: 50,
            outdated: 35,
        }
    }
}

/// Inclusive lower bounds of the remediation-effort buckets; anything
/// below `moderate_rebuild` is a full redesign.
///
/// Deliberately a separate field from [`TierThresholds`] even though the
/// defaults coincide: outreach teams retune effort estimates without
/// moving the published tier bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[allow(missing_docs)] // Field names mirror the estimate names.
pub struct WorkThresholds {
    pub minor_tweaks: u32,
    pub moderate_rebuild: u32,
}

impl Default for WorkThresholds {
    fn default() -> Self {
        WorkThresholds {
            minor_tweaks: 65,
            moderate_rebuild: 35,
        }
    }
}

/// The full scoring calibration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Per-category aggregation weights.
    pub weights: WeightTable,
    /// Load-time buckets, fastest first.
    pub speed_buckets: Vec<SpeedBucket>,
    /// Tier boundaries for classification.
    pub tiers: TierThresholds,
    /// Effort-estimate boundaries for the lead verdict.
    pub work: WorkThresholds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            weights: WeightTable::default(),
            speed_buckets: default_speed_buckets(),
            tiers: TierThresholds::default(),
            work: WorkThresholds::default(),
        }
    }
}

impl ScoringConfig {
    /// Loads a calibration file and validates the merged configuration.
    ///
    /// Fields absent from the file keep their defaults; unknown fields are
    /// rejected so a typoed key cannot silently leave a default in place.
    ///
    /// # Errors
    ///
    /// Returns a [`CalibrationError`] if the file cannot be read or
    /// parsed, or if the merged configuration violates a structural
    /// invariant.
    pub fn from_file(path: &Path) -> Result<Self, CalibrationError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ScoringConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks every structural invariant.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant: weights not summing to 100,
    /// unordered or out-of-range speed buckets, non-descending tier or
    /// work thresholds.
    pub fn validate(&self) -> Result<(), CalibrationError> {
        let sum = self.weights.sum();
        if sum != 100 {
            return Err(CalibrationError::WeightSum { sum });
        }

        for pair in self.speed_buckets.windows(2) {
            if pair[1].under_seconds <= pair[0].under_seconds || pair[1].percent >= pair[0].percent
            {
                return Err(CalibrationError::UnorderedSpeedBuckets);
            }
        }
        for bucket in &self.speed_buckets {
            if bucket.percent > 100 {
                return Err(CalibrationError::BucketPercentOutOfRange {
                    percent: bucket.percent,
                });
            }
            if !bucket.under_seconds.is_finite() || bucket.under_seconds <= 0.0 {
                return Err(CalibrationError::UnorderedSpeedBuckets);
            }
        }

        let t = &self.tiers;
        if t.excellent > 100 || t.excellent <= t.good || t.good <= t.average || t.average <= t.outdated
        {
            return Err(CalibrationError::NonDescendingTiers);
        }

        let w = &self.work;
        if w.minor_tweaks > 100 || w.minor_tweaks <= w.moderate_rebuild {
            return Err(CalibrationError::NonDescendingWorkThresholds);
        }

        Ok(())
    }
}
