//! Result records produced by the engine.
//!
//! Field names here are a wire contract: downstream consumers
//! pattern-match on the serialized keys, so renames are breaking changes.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::engine::category::Category;
use crate::engine::classify::Tier;

/// One category's verdict: points earned, the ceiling, and the evidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryResult {
    /// Which category this belongs to. Skipped in serialization: the
    /// enclosing map already carries the key.
    #[serde(skip)]
    pub category: Category,
    /// Points earned, in `[0, max_score]`.
    pub score: u32,
    /// The category ceiling.
    pub max_score: u32,
    /// What the page did right, one line per passed sub-check.
    pub strengths: Vec<String>,
    /// What was missing or wrong, one line per failed sub-check.
    pub issues: Vec<String>,
}

impl CategoryResult {
    pub(crate) fn new(category: Category) -> Self {
        CategoryResult {
            category,
            score: 0,
            max_score: category.max_score(),
            strengths: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Records one sub-check: points and a strength when the signal is
    /// present, an issue when it is missing.
    pub(crate) fn credit(&mut self, present: bool, points: u32, strength: &str, issue: &str) {
        if present {
            self.award(points, strength);
        } else {
            self.flag(issue);
        }
    }

    /// Awards points with a strength note.
    pub(crate) fn award(&mut self, points: u32, strength: &str) {
        self.score += points;
        self.strengths.push(strength.to_string());
    }

    /// Records an issue without touching the score.
    pub(crate) fn flag(&mut self, issue: &str) {
        self.issues.push(issue.to_string());
    }

    /// Subtracts penalty points (saturating at zero) and records why.
    pub(crate) fn penalize(&mut self, points: u32, issue: &str) {
        self.score = self.score.saturating_sub(points);
        self.flag(issue);
    }

    /// Caps the score at the category ceiling.
    ///
    /// Only the tech-stack analyzer can overshoot (signature points sum
    /// past the ceiling on a well-built page); everyone else's shares sum
    /// to it exactly.
    pub(crate) fn clamp_to_ceiling(&mut self) {
        self.score = self.score.min(self.max_score);
    }

    /// Fraction of the ceiling earned, in [0, 1].
    pub fn ratio(&self) -> f64 {
        if self.max_score == 0 {
            0.0
        } else {
            self.score as f64 / self.max_score as f64
        }
    }
}

/// The sales verdict attached to every result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadQuality {
    /// How urgently this site is worth contacting.
    pub priority: LeadPriority,
    /// One sentence naming the score, tier, and weakest category.
    pub reason: String,
    /// Rough effort to bring the site up to standard.
    pub estimated_work: WorkEstimate,
}

/// Outreach priority, inverse to site quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LeadPriority {
    /// Scored below 50: a strong prospect.
    #[serde(rename = "High-Priority Lead")]
    High,
    /// Scored 50 to 64: worth a follow-up.
    #[serde(rename = "Potential Lead")]
    Potential,
    /// Scored 65 to 79: upkeep work only.
    #[serde(rename = "Maintenance Lead")]
    Maintenance,
    /// Scored 80 or above: little to sell.
    #[serde(rename = "Low-Priority Lead")]
    Low,
}

impl LeadPriority {
    /// The human-readable label, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadPriority::High => "High-Priority Lead",
            LeadPriority::Potential => "Potential Lead",
            LeadPriority::Maintenance => "Maintenance Lead",
            LeadPriority::Low => "Low-Priority Lead",
        }
    }
}

impl std::fmt::Display for LeadPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse remediation-effort estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WorkEstimate {
    /// Targeted fixes on an otherwise sound site.
    #[serde(rename = "Minor tweaks")]
    MinorTweaks,
    /// Substantial rework of several weak areas.
    #[serde(rename = "Moderate rebuild")]
    ModerateRebuild,
    /// Start over.
    #[serde(rename = "Full redesign")]
    FullRedesign,
}

impl WorkEstimate {
    /// The human-readable label, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkEstimate::MinorTweaks => "Minor tweaks",
            WorkEstimate::ModerateRebuild => "Moderate rebuild",
            WorkEstimate::FullRedesign => "Full redesign",
        }
    }
}

impl std::fmt::Display for WorkEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The complete analysis of one URL.
///
/// Constructed once per analysis, immutable afterwards. Maps are ordered
/// (`BTreeMap` keyed by the canonical category order) so serializing the
/// same result twice is byte-identical.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// The URL that was graded.
    pub url: String,
    /// Weighted total, 0 to 100.
    pub total_score: u32,
    /// Tier the total falls in.
    pub classification: Tier,
    /// Sales verdict derived from the total and the weakest category.
    pub lead_quality_score: LeadQuality,
    /// Per-category verdicts, keyed in canonical order.
    pub categories: BTreeMap<Category, CategoryResult>,
    /// Sparse: categories without issues are absent, not empty.
    pub improvement_opportunities: BTreeMap<Category, Vec<String>>,
    /// Seconds between request start and the final body byte.
    pub load_time: f64,
    /// HTTP status of the final response after redirects.
    pub status_code: u16,
    /// When the page was fetched.
    pub timestamp: DateTime<Utc>,
}
