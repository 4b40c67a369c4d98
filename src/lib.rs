//! site_grader library: website quality scoring.
//!
//! This library fetches websites and grades each one across nine quality
//! dimensions (SSL/TLS, mobile readiness, page speed, technology stack,
//! UI quality, SEO, security headers, accessibility, content), aggregates
//! the category scores into a 0-100 total, classifies the site into a
//! tier, and derives a sales-oriented lead verdict with concrete
//! improvement suggestions.
//!
//! # Example
//!
//! ```no_run
//! use site_grader::{run_batch, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: std::path::PathBuf::from("urls.txt"),
//!     max_concurrency: 8,
//!     ..Default::default()
//! };
//!
//! let report = run_batch(config).await?;
//! println!(
//!     "Graded {} sites ({} failed)",
//!     report.results.len(),
//!     report.failures.len()
//! );
//! # Ok(())
//! # }
//! ```
//!
//! The engine itself is synchronous and pure: [`Grader::analyze`] turns a
//! fetched [`Snapshot`] into an [`AnalysisResult`] with no I/O, so library
//! callers who bring their own fetching can use it without a runtime. The
//! fetch and batch layers require Tokio.

#![warn(missing_docs)]

mod app;
pub mod config;
mod engine;
mod error_handling;
mod fetch;
pub mod initialization;
pub mod report;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use engine::{
    AnalysisResult, Category, CategoryResult, Grader, LeadPriority, LeadQuality, ScoringConfig,
    Snapshot, SnapshotParams, SpeedBucket, Tier, TierThresholds, WeightTable, WorkEstimate,
    WorkThresholds,
};
pub use error_handling::{CalibrationError, FetchError, FetchErrorKind, InitializationError};
pub use fetch::{fetch_snapshot, FetchClients};
pub use run::run_batch;

// Internal run module (contains the batch orchestration logic)
mod run {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use anyhow::{Context, Result};
    use futures::stream::FuturesUnordered;
    use futures::StreamExt;
    use log::{info, warn};
    use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

    use crate::app::{log_progress, validate_and_normalize_url};
    use crate::config::{Config, LOGGING_INTERVAL, URL_PROCESSING_TIMEOUT};
    use crate::engine::{AnalysisResult, Grader, ScoringConfig};
    use crate::error_handling::{log_failure_statistics, BatchStats, FetchError};
    use crate::fetch::{fetch_snapshot, FetchClients};
    use crate::initialization::init_semaphore;
    use crate::report::{print_batch_summary, print_site_report, write_json_report};
    use crate::report::{BatchReport, UrlFailure};

    /// Grades every URL in the configured input and returns the batch report.
    ///
    /// This is the main entry point for the library. It reads URLs from the
    /// input file (or stdin when the file is `-`), fetches and analyzes them
    /// concurrently, prints a per-site report and a batch summary to stdout,
    /// and optionally writes the full report to a JSON file.
    ///
    /// One URL's failure never short-circuits the rest of the batch: fetch
    /// failures become per-URL failure records in the report and the
    /// remaining URLs keep grading.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the run (input file, concurrency,
    ///   timeouts, output path, calibration overrides)
    ///
    /// # Returns
    ///
    /// Returns a [`BatchReport`] holding every graded site, every failure
    /// record, and the run summary.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The input file cannot be opened
    /// - The calibration file cannot be loaded or fails validation
    /// - The HTTP clients cannot be constructed
    /// - The JSON report cannot be written
    ///
    /// # Example
    ///
    /// ```no_run
    /// use site_grader::{run_batch, Config};
    /// use std::path::PathBuf;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = Config {
    ///     file: PathBuf::from("urls.txt"),
    ///     output: Some(PathBuf::from("report.json")),
    ///     ..Default::default()
    /// };
    /// let report = run_batch(config).await?;
    /// println!("Average score: {:?}", report.summary.average_score);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_batch(config: Config) -> Result<BatchReport> {
        let scoring = match config.calibration.as_deref() {
            Some(path) => ScoringConfig::from_file(path)
                .with_context(|| format!("Failed to load calibration from {}", path.display()))?,
            None => ScoringConfig::default(),
        };
        let grader = Grader::new(scoring).context("Invalid scoring calibration")?;

        let clients = FetchClients::init(&config)
            .await
            .context("Failed to initialize HTTP clients")?;
        let semaphore = init_semaphore(config.max_concurrency);
        let stats = Arc::new(BatchStats::new());

        let mut lines = url_lines(&config).await?;

        let start_time = std::time::Instant::now();
        let completed_urls = Arc::new(AtomicUsize::new(0));
        let failed_urls = Arc::new(AtomicUsize::new(0));

        let logging_task = {
            let completed = Arc::clone(&completed_urls);
            let failed = Arc::clone(&failed_urls);
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(LOGGING_INTERVAL));
                // The first tick completes immediately; skip it so the first
                // progress line carries a real interval's worth of work.
                interval.tick().await;
                loop {
                    interval.tick().await;
                    log_progress(start_time, &completed, &failed);
                }
            })
        };

        let mut tasks = FuturesUnordered::new();

        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    warn!("Failed to read line from input: {e}");
                    continue;
                }
            };

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let Some(url) = validate_and_normalize_url(trimmed) else {
                continue;
            };

            let permit = Arc::clone(&semaphore)
                .acquire_owned()
                .await
                .context("Semaphore closed while queueing URLs")?;

            let clients = clients.clone();
            let grader = grader.clone();
            let completed = Arc::clone(&completed_urls);
            let failed = Arc::clone(&failed_urls);
            let stats = Arc::clone(&stats);

            tasks.push(tokio::spawn(async move {
                let _permit = permit;

                let outcome = grade_url(&clients, &grader, &url).await;
                match &outcome {
                    Ok(result) => {
                        completed.fetch_add(1, Ordering::SeqCst);
                        info!("Graded {url}: {}/100", result.total_score);
                    }
                    Err(error) => {
                        failed.fetch_add(1, Ordering::SeqCst);
                        stats.increment(error.kind());
                        warn!("Failed to grade {url}: {error}");
                    }
                }
                (url, outcome)
            }));
        }

        let mut results: Vec<AnalysisResult> = Vec::new();
        let mut failures: Vec<UrlFailure> = Vec::new();

        while let Some(task_result) = tasks.next().await {
            match task_result {
                Ok((_url, Ok(result))) => {
                    print_site_report(&result);
                    results.push(result);
                }
                Ok((url, Err(error))) => {
                    failures.push(UrlFailure::new(url, error.to_string()));
                }
                Err(join_error) => {
                    failed_urls.fetch_add(1, Ordering::SeqCst);
                    warn!("Grading task panicked: {join_error:?}");
                }
            }
        }

        logging_task.abort();

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        print_batch_summary(&results, failed_urls.load(Ordering::SeqCst), elapsed_seconds);
        log_failure_statistics(&stats);

        let report = BatchReport::new(results, failures, elapsed_seconds);
        if let Some(path) = &config.output {
            write_json_report(&report, path)
                .with_context(|| format!("Failed to write JSON report to {}", path.display()))?;
            info!("Wrote JSON report to {}", path.display());
        }

        Ok(report)
    }

    /// Opens the configured URL source as a line stream; `-` means stdin.
    async fn url_lines(config: &Config) -> Result<Lines<Box<dyn AsyncBufRead + Unpin + Send>>> {
        let reader: Box<dyn AsyncBufRead + Unpin + Send> = if config.file.as_os_str() == "-" {
            info!("Reading URLs from stdin");
            Box::new(BufReader::new(tokio::io::stdin()))
        } else {
            let file = tokio::fs::File::open(&config.file)
                .await
                .with_context(|| format!("Failed to open URL file {}", config.file.display()))?;
            Box::new(BufReader::new(file))
        };
        Ok(reader.lines())
    }

    /// Fetches and analyzes one URL under the per-URL wall-clock ceiling.
    ///
    /// The ceiling covers the fetch, its retries, and the analysis; on
    /// expiry the URL fails with a timeout record and the analysis never
    /// runs on a half-fetched snapshot.
    async fn grade_url(
        clients: &FetchClients,
        grader: &Grader,
        url: &str,
    ) -> Result<AnalysisResult, FetchError> {
        let graded = tokio::time::timeout(URL_PROCESSING_TIMEOUT, async {
            let snapshot = fetch_snapshot(clients, url).await?;
            Ok(grader.analyze(&snapshot))
        })
        .await;

        match graded {
            Ok(outcome) => outcome,
            Err(_) => Err(FetchError::ProcessTimeout(URL_PROCESSING_TIMEOUT.as_secs())),
        }
    }
}
