// Shared fixtures for the integration tests.
//
// The polished page is a small but complete site that earns every point in
// every category when captured over valid HTTPS. Served over plain HTTP it
// loses exactly the SSL points and nothing else, which keeps expected
// totals easy to reason about in the tests that use it.

use std::path::PathBuf;

use chrono::{TimeZone, Utc};

use site_grader::{Config, LogFormat, LogLevel, Snapshot, SnapshotParams};

/// Markup that earns full marks in every category.
#[allow(dead_code)] // Used by other test files
pub fn polished_markup() -> &'static str {
    r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Harbor Bakery | Fresh Sourdough in Portland</title>
<meta name="description" content="Neighborhood bakery serving naturally leavened sourdough, pastries, and espresso. Order online for same-day pickup at our Portland waterfront shop.">
<link rel="canonical" href="https://harborbakery.example/">
<link rel="icon" href="/favicon.ico">
<link rel="manifest" href="/site.webmanifest">
<style>
:root { --brand: #1a5276; --accent: #f5b041; }
body { font-family: Inter, sans-serif; font-size: 16px; color: #1b2631; }
main { display: grid; gap: 1.5rem; }
nav { display: flex; }
button { background: var(--brand); color: #ffffff; transition: background 0.2s; }
button:hover { background: #154360; }
@media (max-width: 600px) { main { display: block; } }
</style>
<script id="__NEXT_DATA__" type="application/json">{"page":"/"}</script>
<script type="module" src="/assets/app.tsx"></script>
</head>
<body>
<header><h1>Harbor Bakery</h1></header>
<nav aria-label="Main"><a href="/menu">Menu</a> <a href="/order">Order</a> <a href="/sitemap.xml">Sitemap</a></nav>
<main>
<h2>Baked every morning</h2>
<p>Our bakers start before dawn so the first sourdough loaves come out of the oven as the doors open. Everything is naturally leavened, shaped by hand, and baked on the stone hearth in small batches through the morning.</p>
<h2>Visit the shop</h2>
<p>Find us on the waterfront at 18 Harbor Lane, seven days a week from seven until two. Updated March 2025 with our spring menu, wholesale pricing, and weekend baking classes for beginners.</p>
<figure>
<img src="/images/hearth-loaves.jpg" alt="Sourdough loaves cooling on the hearth" loading="lazy">
<figcaption>The first batch of the day, fresh off the stone.</figcaption>
</figure>
<form action="/subscribe"><label>Email <input type="email" name="email"></label><button type="submit">Get the weekly bake list</button></form>
</main>
<footer><p>Harbor Bakery, 18 Harbor Lane, Portland. Copyright 2025.</p></footer>
<script>
class BakeList extends HTMLElement {}
customElements.define("bake-list", BakeList);
async function refresh() { await fetch("/api/menu"); }
if ("serviceWorker" in navigator) { navigator.serviceWorker.register("/sw.js"); }
</script>
</body>
</html>
"#
}

/// The response headers the polished page ships with: every security
/// header the analyzer checks plus a freshness signal.
#[allow(dead_code)] // Used by other test files
pub fn polished_headers() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "Strict-Transport-Security",
            "max-age=31536000; includeSubDomains",
        ),
        ("Content-Security-Policy", "default-src 'self'"),
        ("X-Content-Type-Options", "nosniff"),
        ("X-Frame-Options", "DENY"),
        ("Referrer-Policy", "strict-origin-when-cross-origin"),
        ("Last-Modified", "Tue, 01 Apr 2025 10:00:00 GMT"),
    ]
}

/// A capture of the polished page over validated HTTPS. Scores 100.
#[allow(dead_code)] // Used by other test files
pub fn polished_snapshot() -> Snapshot {
    Snapshot::new(SnapshotParams {
        url: "https://harborbakery.example/".to_string(),
        raw_markup: polished_markup().to_string(),
        final_status_code: 200,
        response_latency: 0.5,
        tls_present: true,
        tls_valid: Some(true),
        response_headers: polished_headers()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect(),
        // Fixed fetch time keeps the freshness window deterministic.
        fetched_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
    })
}

/// A quiet test config pointed at the given URL file.
#[allow(dead_code)] // Used by other test files
pub fn test_config(file: PathBuf) -> Config {
    Config {
        file,
        log_level: LogLevel::Error, // Reduce log noise
        log_format: LogFormat::Plain,
        max_concurrency: 4,
        timeout_seconds: 5,
        ..Config::default()
    }
}
