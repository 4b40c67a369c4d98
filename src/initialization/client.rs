//! HTTP client initialization.
//!
//! This module provides functions to initialize the HTTP clients used for
//! fetching pages. Two clients exist because certificate state is scored:
//! the validating client is the primary fetcher, and the insecure client is
//! only used to re-probe a site whose certificate failed validation.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, MAX_REDIRECT_HOPS};
use reqwest::ClientBuilder;

/// Initializes the primary HTTP client with certificate validation enabled.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Timeout from the configuration
/// - Redirect following enabled (up to `MAX_REDIRECT_HOPS` hops)
///
/// # Arguments
///
/// * `config` - Configuration containing user-agent and timeout settings
///
/// # Returns
///
/// A configured HTTP client ready for making requests.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub async fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .build()?;
    Ok(Arc::new(client))
}

/// Initializes the fallback HTTP client with certificate validation disabled.
///
/// When the validating client fails with a certificate error, this client
/// distinguishes "live site behind a broken certificate" (a scorable,
/// heavily penalized state) from "site unreachable" (a fetch failure).
/// It is never used for a site whose certificate validated.
///
/// # Arguments
///
/// * `config` - Configuration containing user-agent and timeout settings
///
/// # Returns
///
/// A configured HTTP client that accepts invalid certificates.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub async fn init_insecure_client(
    config: &Config,
) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .danger_accept_invalid_certs(true)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .build()?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_client_succeeds_with_defaults() {
        let config = Config::default();
        let client = init_client(&config).await;
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_init_insecure_client_succeeds_with_defaults() {
        let config = Config::default();
        let client = init_insecure_client(&config).await;
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_init_client_with_custom_timeout() {
        let config = Config {
            timeout_seconds: 3,
            ..Config::default()
        };
        let client = init_client(&config).await;
        assert!(client.is_ok());
    }
}
