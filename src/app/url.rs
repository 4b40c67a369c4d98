//! URL validation and normalization.
//!
//! Input lines are bare domains more often than full URLs, so normalization
//! assumes `https://` when no scheme is present. A site that only answers
//! over plain HTTP will redirect or fail, and either way the SSL category
//! records what actually happened.

use log::warn;

use crate::config::MAX_URL_LENGTH;

/// Validates and normalizes a URL line from the input file.
///
/// Adds an `https://` prefix if no scheme is present, then checks that the
/// result parses and uses an http or https scheme. Lines longer than
/// `MAX_URL_LENGTH` are rejected before any allocation on them.
///
/// # Arguments
///
/// * `url` - The URL string to validate and normalize
///
/// # Returns
///
/// `Some(normalized_url)` if the URL should be processed, `None` otherwise.
/// Rejections are logged at warn level with the reason.
pub fn validate_and_normalize_url(url: &str) -> Option<String> {
    if url.len() > MAX_URL_LENGTH {
        warn!(
            "Skipping URL exceeding maximum length ({} > {}): {}...",
            url.len(),
            MAX_URL_LENGTH,
            &url[..50.min(url.len())]
        );
        return None;
    }

    // Anything already carrying a scheme is left alone so the scheme
    // check below sees it; prefixing would turn "ftp://x" into a parseable
    // https URL with host "ftp".
    let normalized = if !url.contains("://") {
        format!("https://{url}")
    } else {
        url.to_string()
    };

    // The prefix can push a borderline line over the limit
    if normalized.len() > MAX_URL_LENGTH {
        warn!(
            "Skipping normalized URL exceeding maximum length ({} > {}): {}...",
            normalized.len(),
            MAX_URL_LENGTH,
            &normalized[..50.min(normalized.len())]
        );
        return None;
    }

    match url::Url::parse(&normalized) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" => Some(normalized),
            _ => {
                warn!("Skipping unsupported scheme for URL: {url}");
                None
            }
        },
        Err(_) => {
            warn!("Skipping invalid URL: {url}");
            None
        }
    }
}
