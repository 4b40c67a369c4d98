//! JSON batch report export.
//!
//! The batch report bundles every graded site, every failure record, and a
//! run summary into one document. The file is written atomically (temp
//! file in the target directory, then rename) so an interrupted run never
//! leaves a half-written report behind.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::engine::AnalysisResult;

/// One failed URL in the batch report.
#[derive(Debug, Clone, Serialize)]
pub struct UrlFailure {
    /// The URL as queued for fetching
    pub url: String,
    /// Always false. Present so consumers can discriminate result and
    /// failure records by the same field.
    pub success: bool,
    /// Human-readable description of what went wrong
    pub error: String,
}

impl UrlFailure {
    /// Builds a failure record for one URL.
    pub fn new(url: String, error: String) -> Self {
        UrlFailure {
            url,
            success: false,
            error,
        }
    }
}

/// Aggregate counts for one batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    /// URLs that reached the fetch stage
    pub attempted: usize,
    /// URLs graded successfully
    pub succeeded: usize,
    /// URLs that failed to fetch
    pub failed: usize,
    /// Wall-clock duration of the batch in seconds
    pub elapsed_seconds: f64,
    /// Mean total score across graded sites, absent when nothing graded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_score: Option<f64>,
}

/// The complete output of one batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    /// Every successfully graded site
    pub results: Vec<AnalysisResult>,
    /// Every URL that failed to fetch
    pub failures: Vec<UrlFailure>,
    /// Aggregate counts derived from the other two fields
    pub summary: BatchSummary,
}

impl BatchReport {
    /// Assembles the report and derives the summary from its contents.
    pub fn new(
        results: Vec<AnalysisResult>,
        failures: Vec<UrlFailure>,
        elapsed_seconds: f64,
    ) -> Self {
        let succeeded = results.len();
        let failed = failures.len();
        let average_score = if succeeded > 0 {
            let sum: u32 = results.iter().map(|r| r.total_score).sum();
            // One decimal is plenty for a summary figure
            Some((sum as f64 / succeeded as f64 * 10.0).round() / 10.0)
        } else {
            None
        };

        BatchReport {
            results,
            failures,
            summary: BatchSummary {
                attempted: succeeded + failed,
                succeeded,
                failed,
                elapsed_seconds,
                average_score,
            },
        }
    }
}

/// Writes the batch report to `path` as pretty-printed JSON.
///
/// The write goes to a temporary file in the same directory and is renamed
/// into place only once complete, so readers never observe a partial file.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created, written, or
/// renamed to the target path.
pub fn write_json_report(report: &BatchReport, path: &Path) -> Result<()> {
    // The temp file must live on the same filesystem as the target or the
    // rename stops being atomic
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(parent).with_context(|| {
        format!(
            "Failed to create temporary report file in {}",
            parent.display()
        )
    })?;

    serde_json::to_writer_pretty(&mut tmp, report).context("Failed to serialize batch report")?;
    tmp.write_all(b"\n")
        .context("Failed to write batch report")?;

    tmp.persist(path)
        .with_context(|| format!("Failed to move report into place at {}", path.display()))?;

    Ok(())
}
