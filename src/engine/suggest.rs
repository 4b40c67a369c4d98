//! Improvement suggestions.
//!
//! A fixed template table keyed on the analyzers' fixed issue strings.
//! Every recorded issue maps to exactly one suggestion; unknown issues
//! fall back to a generic line rather than being dropped.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use crate::engine::analyzers::{
    accessibility, content, mobile, page_speed, security, seo, ssl, tech_stack, ui_quality,
};
use crate::engine::category::Category;
use crate::engine::result::CategoryResult;

const GENERIC_SUGGESTION: &str =
    "Address the flagged issue to improve this category's score";

static SUGGESTION_TEMPLATES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        HashMap::from([
            // ssl
            (
                ssl::ISSUE_PLAIN_HTTP,
                "Install a TLS certificate and serve all pages over HTTPS",
            ),
            (
                ssl::ISSUE_INVALID_CERT,
                "Replace or renew the TLS certificate so browsers can validate it",
            ),
            (
                ssl::ISSUE_UNVERIFIED_CERT,
                "Verify the TLS certificate chain is complete and trusted",
            ),
            (
                ssl::ISSUE_MIXED_CONTENT,
                "Serve all embedded resources over HTTPS to avoid mixed-content warnings",
            ),
            // mobile
            (
                mobile::ISSUE_NO_VIEWPORT,
                "Add a viewport meta tag so the page scales on phones",
            ),
            (
                mobile::ISSUE_VIEWPORT_UNCONFIGURED,
                "Set the viewport to width=device-width with initial-scale=1",
            ),
            (
                mobile::ISSUE_NO_MEDIA_QUERIES,
                "Add media queries so the layout adapts to small screens",
            ),
            (
                mobile::ISSUE_FIXED_LAYOUT,
                "Move fixed pixel widths to flexible units or flex/grid layout",
            ),
            (
                mobile::ISSUE_TINY_FONTS,
                "Raise small font sizes to at least 12px for mobile readability",
            ),
            // page_speed
            (
                page_speed::ISSUE_SLIGHTLY_SLOW,
                "Trim render-blocking resources to get load time under a second",
            ),
            (
                page_speed::ISSUE_NOTICEABLY_SLOW,
                "Compress images and defer non-critical scripts to speed up loading",
            ),
            (
                page_speed::ISSUE_SLOW,
                "Audit page weight; load times this long cost visitors",
            ),
            (
                page_speed::ISSUE_CRITICALLY_SLOW,
                "Rework hosting and asset delivery; load time needs a step change",
            ),
            // tech_stack
            (
                tech_stack::ISSUE_NO_FRAMEWORK,
                "Consider rebuilding on a modern JavaScript framework",
            ),
            (
                tech_stack::ISSUE_NO_OPTIMIZATIONS,
                "Adopt lazy loading, code splitting, or a service worker",
            ),
            (
                tech_stack::ISSUE_MIXED_STACK,
                "Finish the migration off legacy libraries to simplify the stack",
            ),
            (
                "Legacy technology detected: jQuery",
                "Replace jQuery patterns with native DOM APIs or a modern framework",
            ),
            (
                "Legacy technology detected: Bootstrap 3/4",
                "Upgrade from Bootstrap 3/4 to a current CSS framework",
            ),
            (
                "Legacy technology detected: WordPress theming",
                "Modernize the WordPress theme or move to a headless build",
            ),
            (
                "Legacy technology detected: PHP pages",
                "Migrate server-rendered PHP pages to a modern rendering pipeline",
            ),
            (
                "Legacy technology detected: ASP.NET WebForms",
                "Migrate ASP.NET WebForms to a supported web stack",
            ),
            // ui_quality
            (
                ui_quality::ISSUE_NO_FAVICON,
                "Add a favicon so the site is recognizable in tabs and bookmarks",
            ),
            (
                ui_quality::ISSUE_FONT_SOUP,
                "Consolidate typography to at most three font families",
            ),
            (
                ui_quality::ISSUE_COLOR_SOUP,
                "Reduce the palette to a small set of brand colors",
            ),
            (
                ui_quality::ISSUE_NO_AFFORDANCES,
                "Add hover and focus styles so interactive elements respond visibly",
            ),
            (
                ui_quality::ISSUE_DATED_LAYOUT,
                "Adopt flexbox or grid with modern CSS features for layout",
            ),
            // seo
            (
                seo::ISSUE_TITLE,
                "Write a descriptive page title between 10 and 60 characters",
            ),
            (
                seo::ISSUE_DESCRIPTION,
                "Write a meta description between 50 and 160 characters",
            ),
            (
                seo::ISSUE_HEADINGS,
                "Use exactly one h1 and keep heading levels sequential",
            ),
            (
                seo::ISSUE_ALT_TEXT,
                "Add alt text to images so search engines can index them",
            ),
            (
                seo::ISSUE_CANONICAL,
                "Add a canonical link tag and publish a sitemap.xml",
            ),
            // security
            (
                security::ISSUE_HSTS,
                "Send Strict-Transport-Security to enforce HTTPS",
            ),
            (
                security::ISSUE_CSP,
                "Send a Content-Security-Policy header to restrict script sources",
            ),
            (
                security::ISSUE_CONTENT_TYPE_OPTIONS,
                "Send X-Content-Type-Options: nosniff",
            ),
            (
                security::ISSUE_FRAME_OPTIONS,
                "Send X-Frame-Options to prevent clickjacking",
            ),
            (
                security::ISSUE_XSS_REFERRER,
                "Send a Referrer-Policy header, plus X-XSS-Protection for older browsers",
            ),
            // accessibility
            (
                accessibility::ISSUE_LANG,
                "Declare the document language with a lang attribute on the html tag",
            ),
            (
                accessibility::ISSUE_ALT_TEXT,
                "Add alt text to every image for screen readers",
            ),
            (
                accessibility::ISSUE_ARIA,
                "Add ARIA roles and labels to interactive regions",
            ),
            (
                accessibility::ISSUE_LANDMARKS,
                "Structure the page with header, nav, main, and footer landmarks",
            ),
            (
                accessibility::ISSUE_CONTRAST,
                "Darken light gray text to meet contrast guidelines",
            ),
            // content
            (
                content::ISSUE_STALE,
                "Publish fresh content or surface recent update dates",
            ),
            (
                content::ISSUE_THIN_CONTENT,
                "Add substantive text content; the page is mostly markup",
            ),
            (
                content::ISSUE_NO_MEDIA,
                "Add images or media to support the written content",
            ),
            (
                content::ISSUE_UNCAPTIONED_MEDIA,
                "Caption media with figcaption or descriptive alt text",
            ),
        ])
    });

/// Looks up the suggestion for one issue string.
pub(crate) fn suggestion_for(issue: &str) -> &'static str {
    SUGGESTION_TEMPLATES
        .get(issue)
        .copied()
        .unwrap_or(GENERIC_SUGGESTION)
}

/// Builds the sparse per-category suggestion map: one suggestion per
/// recorded issue, in issue order. Categories without issues are absent
/// from the map entirely, never present with an empty list.
pub(crate) fn improvement_opportunities(
    categories: &BTreeMap<Category, CategoryResult>,
) -> BTreeMap<Category, Vec<String>> {
    let mut opportunities = BTreeMap::new();
    for (category, result) in categories {
        if result.issues.is_empty() {
            continue;
        }
        let suggestions = result
            .issues
            .iter()
            .map(|issue| suggestion_for(issue).to_string())
            .collect();
        opportunities.insert(*category, suggestions);
    }
    opportunities
}
