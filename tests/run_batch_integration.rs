//! Batch pipeline integration tests.
//!
//! These drive `run_batch` end to end: a URL file on disk, a mock HTTP
//! server standing in for the sites, and assertions on the returned
//! `BatchReport` and the exported JSON file. No real network access.

mod helpers;

use std::path::PathBuf;

use httptest::{matchers::*, responders::*, Expectation, Server};
use tempfile::TempDir;

use site_grader::{run_batch, Category, Tier};

fn write_url_file(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("urls.txt");
    std::fs::write(&path, contents).expect("Failed to write URL file");
    path
}

/// One reachable site and one dead endpoint: the batch grades the first,
/// records the second as a failure, and the summary reconciles both.
#[tokio::test]
async fn test_batch_grades_reachable_sites_and_records_failures() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/")).respond_with(
            status_code(200)
                .append_header(
                    "Strict-Transport-Security",
                    "max-age=31536000; includeSubDomains",
                )
                .append_header("Content-Security-Policy", "default-src 'self'")
                .append_header("X-Content-Type-Options", "nosniff")
                .append_header("X-Frame-Options", "DENY")
                .append_header("Referrer-Policy", "strict-origin-when-cross-origin")
                .append_header("Last-Modified", "Tue, 01 Apr 2025 10:00:00 GMT")
                .body(helpers::polished_markup()),
        ),
    );
    // Client errors are terminal: exactly one request, no retries.
    server.expect(
        Expectation::matching(request::method_path("GET", "/missing"))
            .times(1)
            .respond_with(status_code(404)),
    );

    let dir = TempDir::new().expect("Failed to create temp directory");
    let contents = format!(
        "# staging candidates\n{}\n\n{}\n",
        server.url_str("/"),
        server.url_str("/missing")
    );
    let file = write_url_file(&dir, &contents);

    let report = run_batch(helpers::test_config(file))
        .await
        .expect("batch should complete");

    assert_eq!(report.results.len(), 1);
    let result = &report.results[0];
    // A localhost capture of the polished page earns full marks everywhere
    // except SSL, which costs its 10 points over plain HTTP.
    assert_eq!(result.total_score, 90);
    assert_eq!(result.classification, Tier::Excellent);
    assert_eq!(result.categories[&Category::Ssl].score, 0);
    assert_eq!(
        result.categories[&Category::Ssl].issues,
        vec!["Site is served over plain HTTP"]
    );
    assert_eq!(result.categories[&Category::Security].score, 10);

    assert_eq!(report.failures.len(), 1);
    let failure = &report.failures[0];
    assert!(failure.url.ends_with("/missing"), "url: {}", failure.url);
    assert!(!failure.success);
    assert_eq!(failure.error, "HTTP status 404");

    assert_eq!(report.summary.attempted, 2);
    assert_eq!(report.summary.succeeded, 1);
    assert_eq!(report.summary.failed, 1);
    assert_eq!(report.summary.average_score, Some(90.0));
}

/// Comments, blank lines, and unparsable lines are skipped before the
/// fetch stage; they never become requests or failure records.
#[tokio::test]
async fn test_junk_lines_never_reach_the_fetch_stage() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/"))
            .times(1)
            .respond_with(status_code(200).body(helpers::polished_markup())),
    );

    let dir = TempDir::new().expect("Failed to create temp directory");
    let contents = format!(
        "# comment up top\n\n   \n{}\nnot a url at all!!!\n# trailing comment\n",
        server.url_str("/")
    );
    let file = write_url_file(&dir, &contents);

    let report = run_batch(helpers::test_config(file))
        .await
        .expect("batch should complete");

    assert_eq!(report.summary.attempted, 1);
    assert_eq!(report.summary.succeeded, 1);
    assert!(report.failures.is_empty());
}

/// With `--output` set the full report lands on disk as parseable JSON,
/// failure records included.
#[tokio::test]
async fn test_json_report_is_written_to_the_output_path() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/gone"))
            .times(1)
            .respond_with(status_code(410)),
    );

    let dir = TempDir::new().expect("Failed to create temp directory");
    let file = write_url_file(&dir, &format!("{}\n", server.url_str("/gone")));
    let output = dir.path().join("report.json");

    let mut config = helpers::test_config(file);
    config.output = Some(output.clone());

    let report = run_batch(config).await.expect("batch should complete");
    assert_eq!(report.summary.failed, 1);

    let raw = std::fs::read_to_string(&output).expect("report file should exist");
    let parsed: serde_json::Value = serde_json::from_str(&raw).expect("report should parse");

    assert!(parsed["results"]
        .as_array()
        .expect("results array")
        .is_empty());
    assert_eq!(parsed["failures"][0]["success"], false);
    assert_eq!(parsed["failures"][0]["error"], "HTTP status 410");
    assert_eq!(parsed["summary"]["attempted"], 1);
    // Nothing graded, so the average is absent entirely.
    assert!(parsed["summary"].get("average_score").is_none());
}

/// A calibration file reweights the aggregation for the whole batch.
#[tokio::test]
async fn test_calibration_file_rebalances_the_total() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/")).respond_with(
            status_code(200)
                .append_header(
                    "Strict-Transport-Security",
                    "max-age=31536000; includeSubDomains",
                )
                .append_header("Content-Security-Policy", "default-src 'self'")
                .append_header("X-Content-Type-Options", "nosniff")
                .append_header("X-Frame-Options", "DENY")
                .append_header("Referrer-Policy", "strict-origin-when-cross-origin")
                .append_header("Last-Modified", "Tue, 01 Apr 2025 10:00:00 GMT")
                .body(helpers::polished_markup()),
        ),
    );

    let dir = TempDir::new().expect("Failed to create temp directory");
    let file = write_url_file(&dir, &format!("{}\n", server.url_str("/")));

    // Shift five points of weight from ssl to seo; the table still sums
    // to 100 so it validates.
    let calibration = dir.path().join("weights.json");
    std::fs::write(&calibration, r#"{"weights": {"ssl": 5, "seo": 10}}"#)
        .expect("Failed to write calibration file");

    let mut config = helpers::test_config(file);
    config.calibration = Some(calibration);

    let report = run_batch(config).await.expect("batch should complete");

    // Plain-HTTP capture: every category perfect except ssl at zero, so
    // the total is 100 minus the reweighted ssl share.
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].total_score, 95);
}

/// A calibration file that violates the weight invariant stops the run
/// before any URL is fetched.
#[tokio::test]
async fn test_invalid_calibration_fails_the_run_before_fetching() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let file = write_url_file(&dir, "example.com\n");

    let calibration = dir.path().join("weights.json");
    std::fs::write(&calibration, r#"{"weights": {"ssl": 50}}"#)
        .expect("Failed to write calibration file");

    let mut config = helpers::test_config(file);
    config.calibration = Some(calibration);

    let error = run_batch(config).await.expect_err("bad weights must fail");
    let chain = format!("{error:#}");
    assert!(chain.contains("Failed to load calibration"), "got: {chain}");
    assert!(chain.contains("sum to 100"), "got: {chain}");
}

/// A missing URL file is a startup error, not an empty batch.
#[tokio::test]
async fn test_missing_url_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let config = helpers::test_config(dir.path().join("does_not_exist.txt"));

    let error = run_batch(config).await.expect_err("missing file must fail");
    assert!(format!("{error:#}").contains("Failed to open URL file"));
}
