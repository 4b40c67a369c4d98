//! Configuration constants.
//!
//! Operational constants used throughout the application: timeouts, size
//! limits, the retry schedule, and well-known HTTP header names.

use std::time::Duration;

/// Per-URL processing timeout.
///
/// Wall-clock ceiling around fetch (including retries) plus analysis for a
/// single URL. Formula: HTTP timeout (10s) x 3 attempts + backoff (~1.5s)
/// + analysis and reporting buffer.
pub const URL_PROCESSING_TIMEOUT: Duration = Duration::from_secs(45);

/// Interval in seconds between progress log lines during a batch run.
pub const LOGGING_INTERVAL: u64 = 5;

/// Default User-Agent string for HTTP requests.
///
/// A desktop Chrome pattern. Sites that score well for real visitors
/// sometimes serve a degraded page (or a 403) to obvious bots, which would
/// distort every category, so requests identify as a browser by default.
/// Override via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Maximum URL length accepted from the input file.
pub const MAX_URL_LENGTH: usize = 2048;

/// Maximum response body size in bytes (2MB).
///
/// Larger bodies fail the URL instead of being truncated: scoring a
/// clipped page would silently distort most categories.
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Maximum number of redirect hops to follow before giving up.
pub const MAX_REDIRECT_HOPS: usize = 10;

// Retry strategy
/// Initial delay in milliseconds before first retry
pub const RETRY_INITIAL_DELAY_MS: u64 = 500;
/// Factor by which retry delay is multiplied on each attempt
pub const RETRY_FACTOR: u64 = 2;
/// Maximum delay between retries in seconds
pub const RETRY_MAX_DELAY_SECS: u64 = 15;
/// Maximum number of attempts (initial attempt + retries)
pub const RETRY_MAX_ATTEMPTS: usize = 3;

// Security header names checked by the security analyzer
/// HSTS: forces HTTPS on returning visitors.
pub const HEADER_STRICT_TRANSPORT_SECURITY: &str = "Strict-Transport-Security";
/// CSP: script and resource allow-listing.
pub const HEADER_CONTENT_SECURITY_POLICY: &str = "Content-Security-Policy";
/// Blocks MIME-type sniffing.
pub const HEADER_X_CONTENT_TYPE_OPTIONS: &str = "X-Content-Type-Options";
/// Clickjacking protection.
pub const HEADER_X_FRAME_OPTIONS: &str = "X-Frame-Options";
/// Legacy XSS filter toggle, still common on older stacks.
pub const HEADER_X_XSS_PROTECTION: &str = "X-XSS-Protection";
/// Controls how much referrer information leaves the site.
pub const HEADER_REFERRER_POLICY: &str = "Referrer-Policy";

/// Response header consulted by the content-freshness check.
pub const HEADER_LAST_MODIFIED: &str = "Last-Modified";

// HTTP status codes (for clarity and consistency)
/// 403, treated as bot detection.
pub const HTTP_STATUS_FORBIDDEN: u16 = 403;
/// 429, retried with backoff.
pub const HTTP_STATUS_TOO_MANY_REQUESTS: u16 = 429;
