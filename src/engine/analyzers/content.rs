//! Content-quality scoring.
//!
//! Point shares: freshness 2, text density 2, captioned media 1.
//! Freshness is judged against the snapshot's fetch time, never the
//! wall clock, so re-analyzing a stored snapshot is deterministic.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Utc};
use regex::Regex;

use crate::config::HEADER_LAST_MODIFIED;
use crate::engine::category::Category;
use crate::engine::page::PageSignals;
use crate::engine::result::CategoryResult;
use crate::engine::snapshot::Snapshot;

use super::compile_regex_unsafe;

pub(crate) const ISSUE_STALE: &str = "No signs of recent content updates";
pub(crate) const ISSUE_THIN_CONTENT: &str = "Thin text content relative to page size";
pub(crate) const ISSUE_NO_MEDIA: &str = "No images or media on the page";
pub(crate) const ISSUE_UNCAPTIONED_MEDIA: &str = "Media lacks captions or alt text";

/// Visible-text-to-markup ratio below this reads as boilerplate.
const TEXT_RATIO_FLOOR: f64 = 0.10;

/// How many years back a mentioned year still counts as recent.
const FRESH_YEAR_WINDOW: i32 = 2;

static YEAR: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"\b(?:19|20)\d{2}\b", "year"));

pub(crate) fn analyze(snapshot: &Snapshot, page: &PageSignals) -> CategoryResult {
    let mut result = CategoryResult::new(Category::Content);

    let fresh = snapshot.has_header(HEADER_LAST_MODIFIED)
        || mentions_recent_year(&page.visible_text, snapshot.fetched_at());
    result.credit(fresh, 2, "Content shows recent updates", ISSUE_STALE);

    let markup_len = snapshot.raw_markup().len().max(1);
    let ratio = page.text_chars as f64 / markup_len as f64;
    result.credit(
        ratio >= TEXT_RATIO_FLOOR,
        2,
        "Healthy text-to-markup ratio",
        ISSUE_THIN_CONTENT,
    );

    let captioned = page.has_figcaption
        || (page.image_count > 0 && page.images_with_alt == page.image_count);
    if captioned {
        result.award(1, "Media carries captions or alt text");
    } else if !page.has_media {
        result.flag(ISSUE_NO_MEDIA);
    } else {
        result.flag(ISSUE_UNCAPTIONED_MEDIA);
    }

    result
}

fn mentions_recent_year(text: &str, fetched_at: DateTime<Utc>) -> bool {
    let current = fetched_at.year();
    YEAR.find_iter(text).any(|found| {
        found
            .as_str()
            .parse::<i32>()
            .is_ok_and(|year| (current - FRESH_YEAR_WINDOW..=current).contains(&year))
    })
}
