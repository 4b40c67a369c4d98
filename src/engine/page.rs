//! One-pass HTML signal extraction.
//!
//! Parses the snapshot markup once and pulls out every DOM-level fact the
//! analyzers share. Parsing is lenient: malformed markup yields whatever
//! the parser can recover, never an error. Text-pattern signals (CSS
//! snippets, technology signatures) are matched by the analyzers directly
//! against the raw markup and do not live here.

use std::sync::LazyLock;

use scraper::{Html, Node, Selector};

/// Cap on the retained visible-text sample.
///
/// The full text length is counted before capping, so the text-to-markup
/// ratio stays honest on very large pages; only the retained sample (used
/// for substring scans) is bounded.
const MAX_TEXT_SAMPLE_CHARS: usize = 50_000;

fn selector(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("title", "page signals"));
static META_DESCRIPTION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| selector("meta[name='description']", "page signals"));
static META_VIEWPORT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| selector("meta[name='viewport']", "page signals"));
static IMG_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("img", "page signals"));
static CANONICAL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| selector("link[rel='canonical']", "page signals"));
static ICON_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| selector("link[rel*='icon']", "page signals"));
static MANIFEST_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| selector("link[rel='manifest']", "page signals"));
static FIGCAPTION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| selector("figcaption", "page signals"));
static MEDIA_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| selector("img, video, audio, iframe", "page signals"));
static FORM_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("form", "page signals"));
static BUTTON_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    selector(
        "button, input[type='submit'], input[type='button'], [role='button'], [class*='btn']",
        "page signals",
    )
});
static HTML_SELECTOR: LazyLock<Selector> = LazyLock::new(|| selector("html", "page signals"));

static HEADING_SELECTORS: LazyLock<[Selector; 6]> = LazyLock::new(|| {
    [
        selector("h1", "page signals"),
        selector("h2", "page signals"),
        selector("h3", "page signals"),
        selector("h4", "page signals"),
        selector("h5", "page signals"),
        selector("h6", "page signals"),
    ]
});

/// Landmark and sectioning tags considered by the accessibility analyzer.
static LANDMARK_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    ["header", "nav", "main", "footer", "article", "aside", "section"]
        .iter()
        .map(|tag| selector(tag, "page signals"))
        .collect()
});

/// DOM-level facts shared by the analyzers, extracted in one parse.
#[derive(Debug, Clone, Default)]
pub(crate) struct PageSignals {
    pub title: Option<String>,
    pub meta_description: Option<String>,
    /// Content of the viewport meta tag, if any.
    pub viewport: Option<String>,
    /// Number of h1..h6 elements, indexed by level - 1.
    pub heading_counts: [usize; 6],
    pub image_count: usize,
    /// Images carrying a non-empty `alt` attribute.
    pub images_with_alt: usize,
    pub has_canonical: bool,
    pub has_favicon: bool,
    pub has_manifest_link: bool,
    /// How many distinct landmark/sectioning tag kinds appear.
    pub landmark_kinds: usize,
    pub has_figcaption: bool,
    pub has_media: bool,
    pub has_forms: bool,
    pub has_buttons: bool,
    pub html_lang: Option<String>,
    /// Full visible-text length in characters (uncapped).
    pub text_chars: usize,
    /// Whitespace-collapsed visible text, capped for substring scans.
    pub visible_text: String,
}

impl PageSignals {
    /// Extracts all DOM signals from raw markup.
    pub(crate) fn extract(markup: &str) -> Self {
        let document = Html::parse_document(markup);

        let title = document
            .select(&TITLE_SELECTOR)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty());

        let meta_description = document
            .select(&META_DESCRIPTION_SELECTOR)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        let viewport = document
            .select(&META_VIEWPORT_SELECTOR)
            .next()
            .and_then(|el| el.value().attr("content"))
            .map(|c| c.to_string());

        let mut heading_counts = [0usize; 6];
        for (level, sel) in HEADING_SELECTORS.iter().enumerate() {
            heading_counts[level] = document.select(sel).count();
        }

        let mut image_count = 0usize;
        let mut images_with_alt = 0usize;
        for img in document.select(&IMG_SELECTOR) {
            image_count += 1;
            if img
                .value()
                .attr("alt")
                .is_some_and(|alt| !alt.trim().is_empty())
            {
                images_with_alt += 1;
            }
        }

        let landmark_kinds = LANDMARK_SELECTORS
            .iter()
            .filter(|sel| document.select(sel).next().is_some())
            .count();

        let html_lang = document
            .select(&HTML_SELECTOR)
            .next()
            .and_then(|el| el.value().attr("lang"))
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());

        let mut text = String::new();
        let mut sample_chars = 0usize;
        let mut text_chars = 0usize;
        for node in document.root_element().descendants() {
            if let Node::Text(text_node) = node.value() {
                // Script and style bodies are text nodes to the parser
                // but are never rendered, so they do not count here.
                let hidden = node
                    .parent()
                    .and_then(|parent| parent.value().as_element())
                    .is_some_and(|el| {
                        matches!(el.name(), "script" | "style" | "noscript" | "template")
                    });
                if hidden {
                    continue;
                }
                if text_node.trim().is_empty() {
                    continue;
                }
                // Collapse runs of whitespace so substring scans are not
                // defeated by source formatting.
                let collapsed = text_node.split_whitespace().collect::<Vec<_>>().join(" ");
                let count = collapsed.chars().count();
                text_chars += count + 1;
                if sample_chars < MAX_TEXT_SAMPLE_CHARS {
                    if !text.is_empty() {
                        text.push(' ');
                    }
                    text.push_str(&collapsed);
                    sample_chars += count + 1;
                }
            }
        }

        PageSignals {
            title,
            meta_description,
            viewport,
            heading_counts,
            image_count,
            images_with_alt,
            has_canonical: document.select(&CANONICAL_SELECTOR).next().is_some(),
            has_favicon: document.select(&ICON_SELECTOR).next().is_some(),
            has_manifest_link: document.select(&MANIFEST_SELECTOR).next().is_some(),
            landmark_kinds,
            has_figcaption: document.select(&FIGCAPTION_SELECTOR).next().is_some(),
            has_media: document.select(&MEDIA_SELECTOR).next().is_some(),
            has_forms: document.select(&FORM_SELECTOR).next().is_some(),
            has_buttons: document.select(&BUTTON_SELECTOR).next().is_some(),
            html_lang,
            text_chars,
            visible_text: text,
        }
    }

    /// Share of images carrying alt text, in [0, 1]; 1.0 when there are
    /// no images at all (nothing to get wrong).
    pub(crate) fn alt_coverage(&self) -> f64 {
        if self.image_count == 0 {
            1.0
        } else {
            self.images_with_alt as f64 / self.image_count as f64
        }
    }
}
