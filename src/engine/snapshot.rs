//! The immutable fetch capture handed to the analyzers.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

/// Everything the fetch layer captured about one page.
///
/// Constructed once per URL and never mutated; the engine is a pure
/// function of this struct. Header lookups are case-insensitive (keys are
/// normalized to lowercase at construction).
#[derive(Debug, Clone)]
pub struct Snapshot {
    url: String,
    raw_markup: String,
    final_status_code: u16,
    response_latency: f64,
    tls_present: bool,
    tls_valid: Option<bool>,
    response_headers: HashMap<String, String>,
    fetched_at: DateTime<Utc>,
}

/// Constructor parameters for [`Snapshot`].
///
/// Grouped into a struct because the capture has too many fields for a
/// readable positional constructor.
#[derive(Debug, Clone)]
pub struct SnapshotParams {
    /// The URL the capture belongs to (after normalization and redirects).
    pub url: String,
    /// The response body as text.
    pub raw_markup: String,
    /// Final HTTP status after redirects.
    pub final_status_code: u16,
    /// Seconds from request start to body completion.
    pub response_latency: f64,
    /// Whether the final URL was served over TLS.
    pub tls_present: bool,
    /// Certificate verdict: `Some(true)` validated, `Some(false)` failed
    /// validation, `None` unknown (TLS completed only without validation).
    pub tls_valid: Option<bool>,
    /// Response headers as captured; keys are normalized internally.
    pub response_headers: Vec<(String, String)>,
    /// When the fetch completed.
    pub fetched_at: DateTime<Utc>,
}

impl Snapshot {
    /// Builds a snapshot, normalizing header names to lowercase.
    pub fn new(params: SnapshotParams) -> Self {
        let response_headers = params
            .response_headers
            .into_iter()
            .map(|(name, value)| (name.to_ascii_lowercase(), value))
            .collect();

        Snapshot {
            url: params.url,
            raw_markup: params.raw_markup,
            final_status_code: params.final_status_code,
            response_latency: params.response_latency,
            tls_present: params.tls_present,
            tls_valid: params.tls_valid,
            response_headers,
            fetched_at: params.fetched_at,
        }
    }

    /// The URL the capture belongs to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The response body as text.
    pub fn raw_markup(&self) -> &str {
        &self.raw_markup
    }

    /// Final HTTP status after redirects.
    pub fn final_status_code(&self) -> u16 {
        self.final_status_code
    }

    /// Seconds from request start to body completion.
    pub fn response_latency(&self) -> f64 {
        self.response_latency
    }

    /// Whether the final URL was served over TLS.
    pub fn tls_present(&self) -> bool {
        self.tls_present
    }

    /// Certificate verdict; `None` when validation was not attempted.
    pub fn tls_valid(&self) -> Option<bool> {
        self.tls_valid
    }

    /// Case-insensitive response-header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.response_headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Whether a response header is present, case-insensitively.
    pub fn has_header(&self, name: &str) -> bool {
        self.header(name).is_some()
    }

    /// When the fetch completed.
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}
