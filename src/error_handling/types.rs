//! Error type definitions.
//!
//! This module defines the typed failures used throughout the application:
//! startup errors, scoring-calibration errors, and the per-URL fetch
//! failures that become batch failure records.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for scoring-calibration loading and validation.
///
/// All of these are fatal at startup: a miscalibrated engine must never
/// score a single URL.
#[derive(Error, Debug)]
pub enum CalibrationError {
    /// The calibration file could not be read.
    #[error("Failed to read calibration file: {0}")]
    FileRead(#[from] std::io::Error),

    /// The calibration file is not valid JSON for the expected shape.
    #[error("Failed to parse calibration file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The category weights do not sum to 100.
    #[error("Category weights must sum to 100, got {sum}")]
    WeightSum {
        /// What the configured weights actually add up to.
        sum: u32,
    },

    /// The page-speed buckets are not strictly increasing in bound or
    /// strictly decreasing in credited percentage.
    #[error("Page-speed buckets must have increasing bounds and decreasing percentages")]
    UnorderedSpeedBuckets,

    /// A speed bucket credits more than 100% of the category ceiling.
    #[error("Page-speed bucket percentage {percent} exceeds 100")]
    BucketPercentOutOfRange {
        /// The offending percentage.
        percent: u32,
    },

    /// The tier boundaries are not strictly descending.
    #[error("Tier boundaries must be strictly descending and at most 100")]
    NonDescendingTiers,

    /// The estimated-work thresholds are not descending.
    #[error("Work-estimate thresholds must be descending and at most 100")]
    NonDescendingWorkThresholds,
}

/// Per-URL fetch failures.
///
/// Any of these turns into a `{url, success: false, error}` record in the
/// batch report; the scoring engine is never invoked for the URL.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The line from the input file did not survive URL validation.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The site answered with a final status outside 2xx/3xx.
    #[error("HTTP status {status}")]
    HttpStatus {
        /// The final status code after redirects.
        status: u16,
    },

    /// The response body exceeded the configured size cap.
    ///
    /// Scoring a truncated page would distort most categories, so
    /// oversized bodies fail the URL instead of being clipped.
    #[error("Response body exceeds {limit} bytes")]
    BodyTooLarge {
        /// The configured cap in bytes.
        limit: usize,
    },

    /// The underlying HTTP request failed (connect, timeout, TLS, decode).
    #[error("Request failed: {0}")]
    Request(#[from] ReqwestError),

    /// The whole fetch+analysis pipeline for the URL exceeded its
    /// wall-clock ceiling.
    #[error("Processing timed out after {0} seconds")]
    ProcessTimeout(u64),
}

/// Categories of fetch failure, used for end-of-run statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(missing_docs)] // Labels for each variant live in `as_str`.
pub enum FetchErrorKind {
    InvalidUrl,
    Connect,
    Timeout,
    TlsCertificate,
    TlsHandshake,
    BotDetection, // 403 Forbidden - typically bot detection
    RateLimited,  // 429 Too Many Requests
    ClientError,  // other 4xx
    ServerError,  // 5xx
    Redirect,
    BodyRead,
    BodyTooLarge,
    ProcessTimeout,
    Other,
}

impl std::fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FetchErrorKind {
    /// Human-readable label used in failure statistics.
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorKind::InvalidUrl => "Invalid URL",
            FetchErrorKind::Connect => "Connection error",
            FetchErrorKind::Timeout => "Request timeout",
            FetchErrorKind::TlsCertificate => "TLS certificate error",
            FetchErrorKind::TlsHandshake => "TLS handshake error",
            FetchErrorKind::BotDetection => "Bot detection (403 Forbidden)",
            FetchErrorKind::RateLimited => "Too many requests (429)",
            FetchErrorKind::ClientError => "Client error (4xx)",
            FetchErrorKind::ServerError => "Server error (5xx)",
            FetchErrorKind::Redirect => "Redirect error",
            FetchErrorKind::BodyRead => "Body read error",
            FetchErrorKind::BodyTooLarge => "Body too large",
            FetchErrorKind::ProcessTimeout => "Process URL timeout",
            FetchErrorKind::Other => "Other fetch error",
        }
    }
}

impl FetchError {
    /// Categorizes this error for statistics.
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::InvalidUrl(_) => FetchErrorKind::InvalidUrl,
            FetchError::HttpStatus { status } => categorize_status(*status),
            FetchError::BodyTooLarge { .. } => FetchErrorKind::BodyTooLarge,
            FetchError::Request(e) => categorize_reqwest_error(e),
            FetchError::ProcessTimeout(_) => FetchErrorKind::ProcessTimeout,
        }
    }

    /// Whether a retry could plausibly succeed.
    ///
    /// Transient conditions (timeouts, connection resets, rate limiting,
    /// server errors) are worth retrying with backoff. Everything else
    /// fails fast: a 404 or a bad certificate will not improve on the
    /// second attempt.
    pub fn is_retriable(&self) -> bool {
        matches!(
            self.kind(),
            FetchErrorKind::Connect
                | FetchErrorKind::Timeout
                | FetchErrorKind::RateLimited
                | FetchErrorKind::ServerError
        )
    }
}

fn categorize_status(status: u16) -> FetchErrorKind {
    match status {
        crate::config::HTTP_STATUS_FORBIDDEN => FetchErrorKind::BotDetection,
        crate::config::HTTP_STATUS_TOO_MANY_REQUESTS => FetchErrorKind::RateLimited,
        400..=499 => FetchErrorKind::ClientError,
        500..=599 => FetchErrorKind::ServerError,
        _ => FetchErrorKind::Other,
    }
}

/// Categorizes a `reqwest::Error` into a `FetchErrorKind`.
///
/// Status codes are checked first, then the reqwest error class. TLS
/// failures surface as connect errors whose message names the problem, so
/// the message is inspected as a last resort before falling back to the
/// plain connect category.
pub fn categorize_reqwest_error(error: &ReqwestError) -> FetchErrorKind {
    if let Some(status) = error.status() {
        return categorize_status(status.as_u16());
    }

    if error.is_timeout() {
        return FetchErrorKind::Timeout;
    }
    if error.is_redirect() {
        return FetchErrorKind::Redirect;
    }
    if error.is_body() || error.is_decode() {
        return FetchErrorKind::BodyRead;
    }
    if error.is_connect() || error.is_request() {
        // reqwest does not expose a TLS error class; the rustls failure
        // text is the only signal available.
        let detail = format!("{error:?}").to_ascii_lowercase();
        if detail.contains("certificate") {
            return FetchErrorKind::TlsCertificate;
        }
        if detail.contains("handshake") || detail.contains("tls") || detail.contains("ssl") {
            return FetchErrorKind::TlsHandshake;
        }
        return FetchErrorKind::Connect;
    }

    FetchErrorKind::Other
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_fetch_error_kind_as_str() {
        assert_eq!(
            FetchErrorKind::BotDetection.as_str(),
            "Bot detection (403 Forbidden)"
        );
        assert_eq!(FetchErrorKind::Timeout.as_str(), "Request timeout");
        assert_eq!(
            FetchErrorKind::TlsCertificate.as_str(),
            "TLS certificate error"
        );
    }

    #[test]
    fn test_all_fetch_error_kinds_have_string_representation() {
        // Verify every kind has a non-empty string representation
        for kind in FetchErrorKind::iter() {
            assert!(
                !kind.as_str().is_empty(),
                "{:?} should have non-empty string",
                kind
            );
        }
    }

    #[test]
    fn test_http_status_categorization() {
        assert_eq!(
            FetchError::HttpStatus { status: 403 }.kind(),
            FetchErrorKind::BotDetection
        );
        assert_eq!(
            FetchError::HttpStatus { status: 429 }.kind(),
            FetchErrorKind::RateLimited
        );
        assert_eq!(
            FetchError::HttpStatus { status: 404 }.kind(),
            FetchErrorKind::ClientError
        );
        assert_eq!(
            FetchError::HttpStatus { status: 503 }.kind(),
            FetchErrorKind::ServerError
        );
    }

    #[test]
    fn test_retriability() {
        // Server-side and transient conditions retry; client errors do not
        assert!(FetchError::HttpStatus { status: 429 }.is_retriable());
        assert!(FetchError::HttpStatus { status: 500 }.is_retriable());
        assert!(!FetchError::HttpStatus { status: 404 }.is_retriable());
        assert!(!FetchError::HttpStatus { status: 403 }.is_retriable());
        assert!(!FetchError::InvalidUrl("nope".into()).is_retriable());
        assert!(!FetchError::BodyTooLarge { limit: 1024 }.is_retriable());
    }

    #[test]
    fn test_fetch_error_display() {
        let e = FetchError::HttpStatus { status: 404 };
        assert_eq!(e.to_string(), "HTTP status 404");

        let e = FetchError::ProcessTimeout(45);
        assert_eq!(e.to_string(), "Processing timed out after 45 seconds");

        let e = FetchError::BodyTooLarge { limit: 2097152 };
        assert_eq!(e.to_string(), "Response body exceeds 2097152 bytes");
    }

    #[test]
    fn test_calibration_error_display() {
        let e = CalibrationError::WeightSum { sum: 95 };
        assert_eq!(e.to_string(), "Category weights must sum to 100, got 95");
    }
}
