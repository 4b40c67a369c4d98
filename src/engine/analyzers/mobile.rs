//! Mobile-friendliness scoring.
//!
//! Point shares: viewport tag 4, viewport configuration 2, media
//! queries 4, flexible layout 3, readable font sizes 2.

use std::sync::LazyLock;

use regex::Regex;

use crate::engine::category::Category;
use crate::engine::page::PageSignals;
use crate::engine::result::CategoryResult;
use crate::engine::snapshot::Snapshot;

use super::compile_regex_unsafe;

pub(crate) const ISSUE_NO_VIEWPORT: &str = "No viewport meta tag";
pub(crate) const ISSUE_VIEWPORT_UNCONFIGURED: &str =
    "Viewport meta tag is not configured for device width";
pub(crate) const ISSUE_NO_MEDIA_QUERIES: &str = "No responsive media queries found";
pub(crate) const ISSUE_FIXED_LAYOUT: &str = "Layout relies on fixed pixel sizing";
pub(crate) const ISSUE_TINY_FONTS: &str =
    "Text smaller than 12px is hard to read on mobile";

static MEDIA_QUERY: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"@media", "media query"));

/// Flex/grid layout or relative units. Digit-prefixed unit suffixes keep
/// prose like "them" from matching.
static FLEXIBLE_LAYOUT: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r"(?i)display\s*:\s*(?:flex|grid)|grid-template|flex-wrap|\b\d+(?:\.\d+)?(?:r?em|vw|vh)\b",
        "flexible layout",
    )
});

/// Declared font sizes under 12px.
static TINY_FONT: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(r"(?i)font-size\s*:\s*(?:[0-9]|1[01])px", "tiny font")
});

pub(crate) fn analyze(snapshot: &Snapshot, page: &PageSignals) -> CategoryResult {
    let mut result = CategoryResult::new(Category::Mobile);
    let markup = snapshot.raw_markup();

    match &page.viewport {
        Some(content) => {
            result.award(4, "Viewport meta tag present");
            let configured =
                content.contains("device-width") && content.contains("initial-scale");
            result.credit(
                configured,
                2,
                "Viewport configured for device width",
                ISSUE_VIEWPORT_UNCONFIGURED,
            );
        }
        // The configuration share is unreachable without the tag, so a
        // missing viewport records one issue, not two.
        None => result.flag(ISSUE_NO_VIEWPORT),
    }

    result.credit(
        MEDIA_QUERY.is_match(markup),
        4,
        "Uses responsive media queries",
        ISSUE_NO_MEDIA_QUERIES,
    );
    result.credit(
        FLEXIBLE_LAYOUT.is_match(markup),
        3,
        "Flexible layout with relative units",
        ISSUE_FIXED_LAYOUT,
    );
    result.credit(
        !TINY_FONT.is_match(markup),
        2,
        "Readable base font sizes",
        ISSUE_TINY_FONTS,
    );

    result
}
