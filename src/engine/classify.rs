//! Tier classification and lead-quality derivation.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::engine::calibration::{TierThresholds, WorkThresholds};
use crate::engine::category::Category;
use crate::engine::result::{CategoryResult, LeadPriority, LeadQuality, WorkEstimate};

/// Quality tier for a total score.
///
/// Boundaries are inclusive lower bounds: a total sitting exactly on one
/// classifies into the higher tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tier {
    /// 80 and above under default thresholds.
    Excellent,
    /// 65 to 79.
    Good,
    /// 50 to 64.
    Average,
    /// 35 to 49.
    Outdated,
    /// Below 35.
    Poor,
}

impl Tier {
    /// The tier name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent",
            Tier::Good => "Good",
            Tier::Average => "Average",
            Tier::Outdated => "Outdated",
            Tier::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a total score onto the tier ladder.
pub(crate) fn classify(total: u32, tiers: &TierThresholds) -> Tier {
    if total >= tiers.excellent {
        Tier::Excellent
    } else if total >= tiers.good {
        Tier::Good
    } else if total >= tiers.average {
        Tier::Average
    } else if total >= tiers.outdated {
        Tier::Outdated
    } else {
        Tier::Poor
    }
}

/// Derives the sales verdict from the tier, total, and category results.
///
/// The reason always names the weakest category so an outreach email can
/// lead with it.
pub(crate) fn lead_quality(
    tier: Tier,
    total: u32,
    categories: &BTreeMap<Category, CategoryResult>,
    work: &WorkThresholds,
) -> LeadQuality {
    let priority = match tier {
        Tier::Excellent => LeadPriority::Low,
        Tier::Good => LeadPriority::Maintenance,
        Tier::Average | Tier::Outdated => LeadPriority::Potential,
        Tier::Poor => LeadPriority::High,
    };

    let estimated_work = if total >= work.minor_tweaks {
        WorkEstimate::MinorTweaks
    } else if total >= work.moderate_rebuild {
        WorkEstimate::ModerateRebuild
    } else {
        WorkEstimate::FullRedesign
    };

    let reason = match weakest_category(categories) {
        Some(weakest) => format!(
            "Scored {}/100 ({}); weakest area is {} at {}/{} points",
            total,
            tier,
            weakest.category.label(),
            weakest.score,
            weakest.max_score
        ),
        None => format!("Scored {total}/100 ({tier})"),
    };

    LeadQuality {
        priority,
        reason,
        estimated_work,
    }
}

/// Finds the category with the lowest earned fraction of its ceiling.
///
/// Ties break toward the earlier category in canonical order, which is
/// the map's iteration order, so the scan is a plain strict-minimum pass.
fn weakest_category(
    categories: &BTreeMap<Category, CategoryResult>,
) -> Option<&CategoryResult> {
    let mut weakest: Option<&CategoryResult> = None;
    for result in categories.values() {
        match weakest {
            Some(current) if result.ratio() >= current.ratio() => {}
            _ => weakest = Some(result),
        }
    }
    weakest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_tiers() -> TierThresholds {
        TierThresholds::default()
    }

    fn default_work() -> WorkThresholds {
        WorkThresholds::default()
    }

    #[test]
    fn test_classify_boundaries_round_up() {
        // A score exactly on a boundary lands in the higher tier.
        let tiers = default_tiers();
        assert_eq!(classify(100, &tiers), Tier::Excellent);
        assert_eq!(classify(80, &tiers), Tier::Excellent);
        assert_eq!(classify(79, &tiers), Tier::Good);
        assert_eq!(classify(65, &tiers), Tier::Good);
        assert_eq!(classify(64, &tiers), Tier::Average);
        assert_eq!(classify(50, &tiers), Tier::Average);
        assert_eq!(classify(49, &tiers), Tier::Outdated);
        assert_eq!(classify(35, &tiers), Tier::Outdated);
        assert_eq!(classify(34, &tiers), Tier::Poor);
        assert_eq!(classify(0, &tiers), Tier::Poor);
    }

    #[test]
    fn test_priority_tracks_tier() {
        let categories = BTreeMap::new();
        let work = default_work();

        let excellent = lead_quality(Tier::Excellent, 90, &categories, &work);
        assert_eq!(excellent.priority, LeadPriority::Low);

        let good = lead_quality(Tier::Good, 70, &categories, &work);
        assert_eq!(good.priority, LeadPriority::Maintenance);

        let average = lead_quality(Tier::Average, 55, &categories, &work);
        assert_eq!(average.priority, LeadPriority::Potential);

        let outdated = lead_quality(Tier::Outdated, 40, &categories, &work);
        assert_eq!(outdated.priority, LeadPriority::Potential);

        let poor = lead_quality(Tier::Poor, 20, &categories, &work);
        assert_eq!(poor.priority, LeadPriority::High);
    }

    #[test]
    fn test_work_estimate_buckets() {
        let categories = BTreeMap::new();
        let work = default_work();

        assert_eq!(
            lead_quality(Tier::Good, 65, &categories, &work).estimated_work,
            WorkEstimate::MinorTweaks
        );
        assert_eq!(
            lead_quality(Tier::Average, 64, &categories, &work).estimated_work,
            WorkEstimate::ModerateRebuild
        );
        assert_eq!(
            lead_quality(Tier::Outdated, 35, &categories, &work).estimated_work,
            WorkEstimate::ModerateRebuild
        );
        assert_eq!(
            lead_quality(Tier::Poor, 34, &categories, &work).estimated_work,
            WorkEstimate::FullRedesign
        );
    }

    #[test]
    fn test_reason_names_weakest_category() {
        let mut categories = BTreeMap::new();
        let mut security = CategoryResult::new(Category::Security);
        security.award(2, "One header");
        categories.insert(Category::Security, security);
        let mut seo = CategoryResult::new(Category::Seo);
        seo.award(4, "Mostly fine");
        categories.insert(Category::Seo, seo);

        let quality = lead_quality(Tier::Average, 55, &categories, &default_work());
        // security earned 2/10 = 0.2, seo 4/5 = 0.8
        assert!(quality.reason.contains("Security Headers"));
        assert!(quality.reason.contains("2/10"));
    }

    #[test]
    fn test_weakest_tie_breaks_to_earlier_category() {
        // ssl 0/10 and security 0/10 tie at ratio 0; ssl comes first in
        // canonical order and must win.
        let mut categories = BTreeMap::new();
        categories.insert(Category::Security, CategoryResult::new(Category::Security));
        categories.insert(Category::Ssl, CategoryResult::new(Category::Ssl));

        let quality = lead_quality(Tier::Poor, 10, &categories, &default_work());
        assert!(quality.reason.contains("SSL/TLS"));
    }

    #[test]
    fn test_tier_serializes_as_plain_name() {
        assert_eq!(serde_json::to_string(&Tier::Excellent).unwrap(), "\"Excellent\"");
        assert_eq!(serde_json::to_string(&Tier::Poor).unwrap(), "\"Poor\"");
    }
}
