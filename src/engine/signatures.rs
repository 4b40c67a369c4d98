//! Technology signature catalog.
//!
//! Fixed regex signatures matched against raw markup to detect the
//! frameworks, language features, delivery optimizations, and legacy
//! markers the tech-stack analyzer scores. Loaded once per process and
//! never mutated.

use std::sync::LazyLock;

use regex::Regex;

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

/// How a matched signature contributes to the tech-stack score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SignatureKind {
    /// A modern JavaScript framework. Points vary by class (full-stack
    /// frameworks earn 5, view-layer frameworks 4).
    ModernFramework,
    /// A modern language or platform feature (TypeScript, ES6+ syntax,
    /// Web Components, build tooling).
    ModernFeature,
    /// A delivery optimization (lazy loading, code splitting, service
    /// worker, installable manifest).
    Optimization,
    /// A dated-technology marker. Scores nothing and records an issue;
    /// combined with a modern framework it triggers the mixing penalty.
    Legacy,
}

/// One entry in the signature catalog.
pub(crate) struct TechSignature {
    pub name: &'static str,
    pub kind: SignatureKind,
    pub points: u32,
    pattern: Regex,
}

impl TechSignature {
    fn new(name: &'static str, kind: SignatureKind, points: u32, pattern: &str) -> Self {
        TechSignature {
            name,
            kind,
            points,
            pattern: compile_regex_unsafe(pattern, name),
        }
    }
}

/// The full signature catalog.
///
/// Patterns run over raw markup (scripts, attributes, and inline code
/// included), so they are written against source text rather than DOM
/// structure. Loose by design: a heuristic match beats a missed stack.
pub(crate) static TECH_SIGNATURES: LazyLock<Vec<TechSignature>> = LazyLock::new(|| {
    use SignatureKind::*;

    vec![
        // Full-stack frameworks
        TechSignature::new(
            "Next.js",
            ModernFramework,
            5,
            r"__NEXT_DATA__|_next/static|next/router",
        ),
        TechSignature::new("Nuxt", ModernFramework, 5, r"__NUXT__|/_nuxt/"),
        TechSignature::new(
            "Remix",
            ModernFramework,
            5,
            r"__remixContext|remix-run",
        ),
        // View-layer frameworks
        TechSignature::new(
            "React",
            ModernFramework,
            4,
            r"react\.production|react\.development|react-dom|data-reactroot",
        ),
        TechSignature::new(
            "Vue",
            ModernFramework,
            4,
            r"vue\.runtime|vue@3|data-v-app|__vue__",
        ),
        TechSignature::new(
            "Angular",
            ModernFramework,
            4,
            r"ng-version|angular(?:\.min)?\.js",
        ),
        TechSignature::new("Svelte", ModernFramework, 4, r"svelte-|__svelte"),
        TechSignature::new("Gatsby", ModernFramework, 4, r"___gatsby|gatsby-"),
        // Modern features
        TechSignature::new(
            "TypeScript",
            ModernFeature,
            5,
            r#"(?i)typescript|\.tsx?["']"#,
        ),
        TechSignature::new(
            "ES6+ syntax",
            ModernFeature,
            5,
            r"\b(?:const|let)\s+\w+\s*=|=>|\basync\b|\bawait\b",
        ),
        TechSignature::new(
            "Web Components",
            ModernFeature,
            5,
            r"customElements\.define|attachShadow|shadowRoot",
        ),
        TechSignature::new(
            "Build tooling",
            ModernFeature,
            2,
            r"(?i)\b(?:webpack|vite|parcel|rollup)\b",
        ),
        // Delivery optimizations
        TechSignature::new(
            "Lazy loading",
            Optimization,
            2,
            r#"loading=["']lazy|React\.lazy|IntersectionObserver"#,
        ),
        TechSignature::new(
            "Code splitting",
            Optimization,
            2,
            r"import\(|\.chunk\.js|webpackChunk",
        ),
        TechSignature::new(
            "Service worker",
            Optimization,
            2,
            r"serviceWorker|workbox",
        ),
        TechSignature::new(
            "Web app manifest",
            Optimization,
            2,
            r#"rel=["']manifest|manifest\.(?:json|webmanifest)"#,
        ),
        // Legacy markers
        TechSignature::new("jQuery", Legacy, 0, r"(?i)jquery"),
        TechSignature::new(
            "Bootstrap 3/4",
            Legacy,
            0,
            r"(?i)bootstrap[-/@.]?[34][./]",
        ),
        TechSignature::new(
            "WordPress theming",
            Legacy,
            0,
            r"(?i)wp-content|wp-includes|wordpress",
        ),
        TechSignature::new("PHP pages", Legacy, 0, r#"\.php["'?]"#),
        TechSignature::new(
            "ASP.NET WebForms",
            Legacy,
            0,
            r"(?i)\.aspx|__VIEWSTATE|\bwebform",
        ),
    ]
});

/// Matches the catalog against raw markup, in catalog order.
pub(crate) fn detect_signatures(markup: &str) -> Vec<&'static TechSignature> {
    TECH_SIGNATURES
        .iter()
        .filter(|sig| sig.pattern.is_match(markup))
        .collect()
}
