//! The nine scoring categories.

use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;

/// One of the nine independent quality dimensions a site is scored on.
///
/// Declaration order is the canonical order: it drives report layout,
/// serialized map ordering, and tie-breaking when scanning for the weakest
/// category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, EnumIterMacro,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Transport security: HTTPS and certificate validity.
    Ssl,
    /// Mobile friendliness: viewport, responsive markup, touch targets.
    Mobile,
    /// Load performance: latency buckets, payload weight, lazy loading.
    PageSpeed,
    /// Technology stack: frameworks, modern syntax, legacy penalties.
    TechStack,
    /// Visual quality proxies: fonts, palette, layout primitives.
    UiQuality,
    /// Search optimization: title, description, canonical, structure.
    Seo,
    /// Response security headers.
    Security,
    /// Accessibility: lang, alt text, landmarks, labels.
    Accessibility,
    /// Content quality: substance, freshness, contact signals.
    Content,
}

impl Category {
    /// The category's point ceiling.
    ///
    /// These are structural constants: each analyzer's sub-check shares
    /// sum to its ceiling, and the nine ceilings sum to exactly 100. The
    /// calibration weight table defaults to the same values.
    pub const fn max_score(&self) -> u32 {
        match self {
            Category::Ssl => 10,
            Category::Mobile => 15,
            Category::PageSpeed => 15,
            Category::TechStack => 25,
            Category::UiQuality => 10,
            Category::Seo => 5,
            Category::Security => 10,
            Category::Accessibility => 5,
            Category::Content => 5,
        }
    }

    /// The serialized map key for this category.
    pub const fn key(&self) -> &'static str {
        match self {
            Category::Ssl => "ssl",
            Category::Mobile => "mobile",
            Category::PageSpeed => "page_speed",
            Category::TechStack => "tech_stack",
            Category::UiQuality => "ui_quality",
            Category::Seo => "seo",
            Category::Security => "security",
            Category::Accessibility => "accessibility",
            Category::Content => "content",
        }
    }

    /// Human-readable name used in reports and verdict text.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::Ssl => "SSL/TLS",
            Category::Mobile => "Mobile Friendliness",
            Category::PageSpeed => "Page Speed",
            Category::TechStack => "Technology Stack",
            Category::UiQuality => "UI Quality",
            Category::Seo => "SEO",
            Category::Security => "Security Headers",
            Category::Accessibility => "Accessibility",
            Category::Content => "Content Quality",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
