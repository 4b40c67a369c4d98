//! Accessibility scoring. Five one-point checks.

use std::sync::LazyLock;

use regex::Regex;

use crate::engine::category::Category;
use crate::engine::page::PageSignals;
use crate::engine::result::CategoryResult;
use crate::engine::snapshot::Snapshot;

use super::compile_regex_unsafe;

pub(crate) const ISSUE_LANG: &str = "Missing lang attribute on the html element";
pub(crate) const ISSUE_ALT_TEXT: &str = "Images are missing alt text";
pub(crate) const ISSUE_ARIA: &str = "No ARIA attributes found";
pub(crate) const ISSUE_LANDMARKS: &str = "Few or no semantic landmark regions";
pub(crate) const ISSUE_CONTRAST: &str = "Light gray text risks low contrast";

const MIN_LANDMARK_KINDS: usize = 3;

static ARIA: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(r#"(?i)\baria-[a-z]+\s*=|\brole\s*=\s*["']"#, "aria")
});

/// Inline text colors in the light-gray range (#ccc through #eee). Pure
/// white is excluded: it is the normal text color on dark buttons. The
/// leading class keeps `background-color` declarations from matching;
/// the regex crate has no lookbehind.
static LOW_CONTRAST: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(
        r"(?i)(?:^|[^-])color\s*:\s*#(?:[cde]{3}|[cde]{6})\b",
        "low contrast",
    )
});

pub(crate) fn analyze(snapshot: &Snapshot, page: &PageSignals) -> CategoryResult {
    let mut result = CategoryResult::new(Category::Accessibility);
    let markup = snapshot.raw_markup();

    let lang_ok = page
        .html_lang
        .as_deref()
        .is_some_and(|lang| !lang.trim().is_empty());
    result.credit(lang_ok, 1, "Document language declared", ISSUE_LANG);

    // Stricter than the SEO share: every image needs alt text here.
    result.credit(
        page.images_with_alt == page.image_count,
        1,
        "All images have alt text",
        ISSUE_ALT_TEXT,
    );

    result.credit(
        ARIA.is_match(markup),
        1,
        "ARIA attributes in use",
        ISSUE_ARIA,
    );

    result.credit(
        page.landmark_kinds >= MIN_LANDMARK_KINDS,
        1,
        "Semantic landmark regions present",
        ISSUE_LANDMARKS,
    );

    result.credit(
        !LOW_CONTRAST.is_match(markup),
        1,
        "No obvious low-contrast text",
        ISSUE_CONTRAST,
    );

    result
}
