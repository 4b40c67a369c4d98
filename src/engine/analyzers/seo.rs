//! SEO scoring. Five one-point checks.

use std::sync::LazyLock;

use regex::Regex;

use crate::engine::category::Category;
use crate::engine::page::PageSignals;
use crate::engine::result::CategoryResult;
use crate::engine::snapshot::Snapshot;

use super::compile_regex_unsafe;

pub(crate) const ISSUE_TITLE: &str = "Page title is missing or poorly sized";
pub(crate) const ISSUE_DESCRIPTION: &str = "Meta description is missing or poorly sized";
pub(crate) const ISSUE_HEADINGS: &str = "Heading structure is missing or skips levels";
pub(crate) const ISSUE_ALT_TEXT: &str = "Many images are missing alt text";
pub(crate) const ISSUE_CANONICAL: &str = "No canonical URL or sitemap reference";

const TITLE_LENGTH: std::ops::RangeInclusive<usize> = 10..=60;
const DESCRIPTION_LENGTH: std::ops::RangeInclusive<usize> = 50..=160;
const ALT_COVERAGE_FLOOR: f64 = 0.8;

static SITEMAP_HINT: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"(?i)sitemap\.xml", "sitemap hint"));

pub(crate) fn analyze(snapshot: &Snapshot, page: &PageSignals) -> CategoryResult {
    let mut result = CategoryResult::new(Category::Seo);

    let title_ok = page
        .title
        .as_deref()
        .is_some_and(|title| TITLE_LENGTH.contains(&title.chars().count()));
    result.credit(title_ok, 1, "Title tag is well-sized", ISSUE_TITLE);

    let description_ok = page
        .meta_description
        .as_deref()
        .is_some_and(|description| DESCRIPTION_LENGTH.contains(&description.chars().count()));
    result.credit(
        description_ok,
        1,
        "Meta description is well-sized",
        ISSUE_DESCRIPTION,
    );

    result.credit(
        headings_are_structured(&page.heading_counts),
        1,
        "Logical heading structure",
        ISSUE_HEADINGS,
    );

    result.credit(
        page.alt_coverage() >= ALT_COVERAGE_FLOOR,
        1,
        "Most images have alt text",
        ISSUE_ALT_TEXT,
    );

    let canonical_ok = page.has_canonical || SITEMAP_HINT.is_match(snapshot.raw_markup());
    result.credit(
        canonical_ok,
        1,
        "Canonical URL or sitemap signals present",
        ISSUE_CANONICAL,
    );

    result
}

/// Exactly one h1 and no skipped levels on the way to the deepest
/// heading in use.
fn headings_are_structured(counts: &[usize; 6]) -> bool {
    if counts[0] != 1 {
        return false;
    }
    let deepest = counts.iter().rposition(|&count| count > 0).unwrap_or(0);
    counts[..=deepest].iter().all(|&count| count > 0)
}
