//! The scoring engine.
//!
//! Takes a fetched [`Snapshot`], runs the nine category analyzers over
//! it, aggregates the weighted total, classifies the result, and derives
//! the lead verdict and improvement suggestions. The whole pipeline is
//! pure: no clock reads, no network, no randomness, so the same snapshot
//! always produces the same [`AnalysisResult`].

mod analyzers;
mod calibration;
mod category;
mod classify;
mod page;
mod result;
mod score;
mod signatures;
mod snapshot;
mod suggest;

pub use calibration::{ScoringConfig, SpeedBucket, TierThresholds, WeightTable, WorkThresholds};
pub use category::Category;
pub use classify::Tier;
pub use result::{AnalysisResult, CategoryResult, LeadPriority, LeadQuality, WorkEstimate};
pub use snapshot::{Snapshot, SnapshotParams};

use crate::error_handling::CalibrationError;
use page::PageSignals;

/// A validated scoring configuration plus the analysis pipeline.
///
/// Construction validates the calibration so a bad weight table cannot
/// surface halfway through a batch. Cheap to clone and safe to share
/// across tasks.
#[derive(Debug, Clone)]
pub struct Grader {
    config: ScoringConfig,
}

impl Grader {
    /// Builds a grader after validating the calibration.
    ///
    /// # Errors
    ///
    /// Returns a [`CalibrationError`] if the configuration violates a
    /// structural invariant.
    pub fn new(config: ScoringConfig) -> Result<Self, CalibrationError> {
        config.validate()?;
        Ok(Grader { config })
    }

    /// Scores one fetched snapshot.
    pub fn analyze(&self, snapshot: &Snapshot) -> AnalysisResult {
        let page = PageSignals::extract(snapshot.raw_markup());
        let categories = analyzers::analyze_all(snapshot, &page, &self.config);
        let total_score = score::aggregate_total(&categories, &self.config.weights);
        let classification = classify::classify(total_score, &self.config.tiers);
        let lead_quality_score =
            classify::lead_quality(classification, total_score, &categories, &self.config.work);
        let improvement_opportunities = suggest::improvement_opportunities(&categories);

        AnalysisResult {
            url: snapshot.url().to_string(),
            total_score,
            classification,
            lead_quality_score,
            categories,
            improvement_opportunities,
            load_time: snapshot.response_latency(),
            status_code: snapshot.final_status_code(),
            timestamp: snapshot.fetched_at(),
        }
    }

    /// The validated calibration in effect.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }
}
