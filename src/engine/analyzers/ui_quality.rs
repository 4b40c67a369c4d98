//! UI-quality scoring.
//!
//! Point shares: favicon 1, restrained typography 3, restrained color
//! palette 3, interactive affordances 2, modern layout 1. Typography and
//! palette are judged from raw markup, so external stylesheets are out
//! of reach; inline and embedded styles are the signal.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::engine::category::Category;
use crate::engine::page::PageSignals;
use crate::engine::result::CategoryResult;
use crate::engine::snapshot::Snapshot;

use super::compile_regex_unsafe;

pub(crate) const ISSUE_NO_FAVICON: &str = "No favicon";
pub(crate) const ISSUE_FONT_SOUP: &str = "Too many font families";
pub(crate) const ISSUE_COLOR_SOUP: &str = "Too many distinct colors";
pub(crate) const ISSUE_NO_AFFORDANCES: &str =
    "Interactive elements lack hover or focus styling";
pub(crate) const ISSUE_DATED_LAYOUT: &str = "Layout techniques look dated";

const MAX_FONT_FAMILIES: usize = 3;
const MAX_DISTINCT_COLORS: usize = 10;

static FONT_FAMILY: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(r#"(?i)font-family\s*:\s*([^;}"'<]+)"#, "font family")
});

static COLOR: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(r"(?i)#[0-9a-f]{3,8}\b|\brgba?\([^)]*\)", "color")
});

static AFFORDANCE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r"(?i):hover|:focus|transition", "affordance"));

/// One regex per modern layout feature; two distinct hits earn the share.
static LAYOUT_FEATURES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)display\s*:\s*flex|flex-wrap|flex-direction",
        r"(?i)display\s*:\s*grid|grid-template",
        r"--[a-zA-Z][\w-]*\s*:",
        r"(?i)\bclamp\(",
        r"(?i)aspect-ratio\s*:",
    ]
    .iter()
    .map(|pattern| compile_regex_unsafe(pattern, "layout feature"))
    .collect()
});

pub(crate) fn analyze(snapshot: &Snapshot, page: &PageSignals) -> CategoryResult {
    let mut result = CategoryResult::new(Category::UiQuality);
    let markup = snapshot.raw_markup();

    result.credit(page.has_favicon, 1, "Favicon present", ISSUE_NO_FAVICON);

    result.credit(
        distinct_font_families(markup) <= MAX_FONT_FAMILIES,
        3,
        "Consistent typography",
        ISSUE_FONT_SOUP,
    );

    result.credit(
        distinct_colors(markup) <= MAX_DISTINCT_COLORS,
        3,
        "Restrained color palette",
        ISSUE_COLOR_SOUP,
    );

    let has_affordances =
        (page.has_buttons || page.has_forms) && AFFORDANCE.is_match(markup);
    result.credit(
        has_affordances,
        2,
        "Interactive elements with hover or focus styling",
        ISSUE_NO_AFFORDANCES,
    );

    let layout_features = LAYOUT_FEATURES
        .iter()
        .filter(|feature| feature.is_match(markup))
        .count();
    result.credit(
        layout_features >= 2,
        1,
        "Modern CSS layout in use",
        ISSUE_DATED_LAYOUT,
    );

    result
}

fn distinct_font_families(markup: &str) -> usize {
    let mut families: HashSet<String> = HashSet::new();
    for capture in FONT_FAMILY.captures_iter(markup) {
        if let Some(value) = capture.get(1) {
            let normalized = value
                .as_str()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .to_ascii_lowercase();
            families.insert(normalized);
        }
    }
    families.len()
}

fn distinct_colors(markup: &str) -> usize {
    COLOR
        .find_iter(markup)
        .map(|color| color.as_str().to_ascii_lowercase())
        .collect::<HashSet<String>>()
        .len()
}
