//! Category analyzers.
//!
//! One module per scoring category. Each analyzer reads the fetch
//! snapshot and the parsed page signals, applies its fixed point table,
//! and returns a `CategoryResult`. Issue strings are fixed constants so
//! the suggestion templates can key off them exactly.

pub(crate) mod accessibility;
pub(crate) mod content;
pub(crate) mod mobile;
pub(crate) mod page_speed;
pub(crate) mod security;
pub(crate) mod seo;
pub(crate) mod ssl;
pub(crate) mod tech_stack;
pub(crate) mod ui_quality;

use std::collections::BTreeMap;

use regex::Regex;
use strum::IntoEnumIterator;

use crate::engine::calibration::ScoringConfig;
use crate::engine::category::Category;
use crate::engine::page::PageSignals;
use crate::engine::result::CategoryResult;
use crate::engine::snapshot::Snapshot;

/// Helper function to safely compile a regex pattern, panicking with a
/// detailed error message if compilation fails. Used for static patterns
/// that are compile-time constants.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

/// Runs a single category's analyzer.
pub(crate) fn analyze_category(
    category: Category,
    snapshot: &Snapshot,
    page: &PageSignals,
    config: &ScoringConfig,
) -> CategoryResult {
    match category {
        Category::Ssl => ssl::analyze(snapshot),
        Category::Mobile => mobile::analyze(snapshot, page),
        Category::PageSpeed => page_speed::analyze(snapshot, &config.speed_buckets),
        Category::TechStack => tech_stack::analyze(snapshot),
        Category::UiQuality => ui_quality::analyze(snapshot, page),
        Category::Seo => seo::analyze(snapshot, page),
        Category::Security => security::analyze(snapshot),
        Category::Accessibility => accessibility::analyze(snapshot, page),
        Category::Content => content::analyze(snapshot, page),
    }
}

/// Runs every analyzer, keyed in canonical category order.
pub(crate) fn analyze_all(
    snapshot: &Snapshot,
    page: &PageSignals,
    config: &ScoringConfig,
) -> BTreeMap<Category, CategoryResult> {
    Category::iter()
        .map(|category| (category, analyze_category(category, snapshot, page, config)))
        .collect()
}
