//! Page fetching.
//!
//! Turns one URL into the immutable [`Snapshot`] the engine scores: body,
//! final status, response headers, measured latency, and the TLS
//! certificate verdict. Transient failures retry with backoff; everything
//! else fails fast into a typed [`FetchError`].

mod request;
mod retry;

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use log::debug;
use tokio_retry::RetryIf;

use crate::config::{Config, MAX_RESPONSE_BODY_SIZE};
use crate::engine::{Snapshot, SnapshotParams};
use crate::error_handling::{FetchError, FetchErrorKind};
use crate::initialization::{init_client, init_insecure_client};
use request::RequestHeaders;
pub use retry::get_retry_strategy;

/// The two HTTP clients a batch run shares.
///
/// `validating` is the primary fetcher. `insecure` accepts invalid
/// certificates and only runs when the validating client failed in a way
/// that implicates TLS, to separate "live site behind a broken
/// certificate" from "unreachable".
#[derive(Clone)]
pub struct FetchClients {
    /// Primary client with full certificate validation
    pub validating: Arc<reqwest::Client>,
    /// Certificate-tolerant client used only for the TLS re-probe
    pub insecure: Arc<reqwest::Client>,
}

impl FetchClients {
    /// Builds both clients from the configuration.
    ///
    /// # Errors
    ///
    /// Returns a `reqwest::Error` if either client fails to build.
    pub async fn init(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(FetchClients {
            validating: init_client(config).await?,
            insecure: init_insecure_client(config).await?,
        })
    }
}

/// What one completed HTTP exchange yielded, before TLS interpretation.
struct RawCapture {
    final_url: String,
    https_final: bool,
    status: u16,
    headers: Vec<(String, String)>,
    body: String,
    latency: f64,
}

/// Fetches one URL into a [`Snapshot`].
///
/// Transient failures (timeouts, connect errors, 429, 5xx) retry on the
/// [`get_retry_strategy`] schedule. A TLS-shaped failure triggers one
/// re-probe through the insecure client: success there pins the
/// certificate verdict (`Some(false)` for a certificate failure, `None`
/// for any other TLS failure); failure there reports the original error,
/// which describes the site's actual problem.
///
/// # Errors
///
/// Returns a [`FetchError`] when the URL cannot be captured at all. TLS
/// problems on an otherwise reachable site are not errors; they land in
/// the Snapshot's certificate verdict instead.
pub async fn fetch_snapshot(clients: &FetchClients, url: &str) -> Result<Snapshot, FetchError> {
    // Batch intake validates its lines, but direct callers get the same
    // guard: fail fast with a typed error instead of a client error.
    match url::Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
        _ => return Err(FetchError::InvalidUrl(url.to_string())),
    }

    let primary = RetryIf::spawn(
        get_retry_strategy(),
        || execute_fetch(&clients.validating, url),
        FetchError::is_retriable,
    )
    .await;

    let (capture, tls_valid) = match primary {
        Ok(capture) => {
            let verdict = capture.https_final.then_some(true);
            (capture, verdict)
        }
        Err(error) => {
            let kind = error.kind();
            if !matches!(
                kind,
                FetchErrorKind::TlsCertificate | FetchErrorKind::TlsHandshake
            ) {
                return Err(error);
            }

            debug!("TLS failure for {url} ({kind}); re-probing without certificate validation");
            let probe = RetryIf::spawn(
                get_retry_strategy(),
                || execute_fetch(&clients.insecure, url),
                FetchError::is_retriable,
            )
            .await;

            match probe {
                Ok(capture) => {
                    let verdict = match kind {
                        FetchErrorKind::TlsCertificate => capture.https_final.then_some(false),
                        _ => None,
                    };
                    (capture, verdict)
                }
                // Down regardless of certificates; the validating client's
                // error is the truthful record
                Err(_) => return Err(error),
            }
        }
    };

    let tls_present = capture.https_final;
    Ok(Snapshot::new(SnapshotParams {
        url: capture.final_url,
        raw_markup: capture.body,
        final_status_code: capture.status,
        response_latency: capture.latency,
        tls_present,
        tls_valid,
        response_headers: capture.headers,
        fetched_at: Utc::now(),
    }))
}

/// One GET through one client, measured to body completion.
async fn execute_fetch(client: &reqwest::Client, url: &str) -> Result<RawCapture, FetchError> {
    let start = Instant::now();
    let response = RequestHeaders::apply(client.get(url)).send().await?;

    // Pull everything off the response before consuming it for the body
    let final_url = response.url().to_string();
    let https_final = response.url().scheme() == "https";
    let status = response.status();
    let headers: Vec<(String, String)> = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();

    if !status.is_success() {
        return Err(FetchError::HttpStatus {
            status: status.as_u16(),
        });
    }

    let body = response.text().await?;
    let latency = start.elapsed().as_secs_f64();

    if body.len() > MAX_RESPONSE_BODY_SIZE {
        return Err(FetchError::BodyTooLarge {
            limit: MAX_RESPONSE_BODY_SIZE,
        });
    }

    debug!(
        "Fetched {final_url}: {status}, {} bytes in {latency:.2}s",
        body.len()
    );

    Ok(RawCapture {
        final_url,
        https_final,
        status: status.as_u16(),
        headers,
        body,
        latency,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    // Explicit imports: a glob of super would pull in the request
    // submodule, which collides with httptest's request matchers
    use httptest::{matchers::*, responders::*, Expectation, Server};

    use super::{fetch_snapshot, FetchClients};
    use crate::config::MAX_RESPONSE_BODY_SIZE;
    use crate::error_handling::{FetchError, FetchErrorKind};

    fn test_clients() -> FetchClients {
        let client = Arc::new(
            reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(5))
                .build()
                .unwrap(),
        );
        FetchClients {
            validating: Arc::clone(&client),
            insecure: client,
        }
    }

    #[tokio::test]
    async fn test_fetch_captures_body_status_and_headers() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/")).respond_with(
                status_code(200)
                    .append_header("X-Frame-Options", "DENY")
                    .body("<html><body>hello</body></html>"),
            ),
        );

        let clients = test_clients();
        let snapshot = fetch_snapshot(&clients, &server.url_str("/")).await.unwrap();

        assert_eq!(snapshot.final_status_code(), 200);
        assert!(snapshot.raw_markup().contains("hello"));
        assert!(snapshot.has_header("x-frame-options"));
        // Plain http: no TLS at all
        assert!(!snapshot.tls_present());
        assert_eq!(snapshot.tls_valid(), None);
        assert!(snapshot.response_latency() > 0.0);
    }

    #[tokio::test]
    async fn test_garbage_url_fails_with_a_typed_error() {
        let clients = test_clients();

        let error = fetch_snapshot(&clients, "not a url").await.unwrap_err();
        assert!(matches!(error, FetchError::InvalidUrl(_)));
        assert_eq!(error.kind(), FetchErrorKind::InvalidUrl);

        // Parseable but unsupported scheme fails the same way
        let error = fetch_snapshot(&clients, "ftp://example.com")
            .await
            .unwrap_err();
        assert!(matches!(error, FetchError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_non_success_status_fails_the_fetch() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/"))
                .respond_with(status_code(404)),
        );

        let clients = test_clients();
        let error = fetch_snapshot(&clients, &server.url_str("/"))
            .await
            .unwrap_err();

        assert!(matches!(error, FetchError::HttpStatus { status: 404 }));
        assert_eq!(error.kind(), FetchErrorKind::ClientError);
    }

    #[tokio::test]
    async fn test_server_errors_are_retried_until_exhausted() {
        let server = Server::run();
        // Three attempts total on the retry schedule, all served 503
        server.expect(
            Expectation::matching(request::method_path("GET", "/"))
                .times(3)
                .respond_with(status_code(503)),
        );

        let clients = test_clients();
        let error = fetch_snapshot(&clients, &server.url_str("/"))
            .await
            .unwrap_err();

        assert_eq!(error.kind(), FetchErrorKind::ServerError);
    }

    #[tokio::test]
    async fn test_client_errors_fail_without_retry() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/"))
                .times(1)
                .respond_with(status_code(403)),
        );

        let clients = test_clients();
        let error = fetch_snapshot(&clients, &server.url_str("/"))
            .await
            .unwrap_err();

        assert_eq!(error.kind(), FetchErrorKind::BotDetection);
    }

    #[tokio::test]
    async fn test_redirects_are_followed_to_the_final_url() {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/old")).respond_with(
                status_code(301).append_header("Location", server.url_str("/new")),
            ),
        );
        server.expect(
            Expectation::matching(request::method_path("GET", "/new"))
                .respond_with(status_code(200).body("<html>moved</html>")),
        );

        let clients = test_clients();
        let snapshot = fetch_snapshot(&clients, &server.url_str("/old"))
            .await
            .unwrap();

        assert!(snapshot.url().ends_with("/new"));
        assert_eq!(snapshot.final_status_code(), 200);
    }

    #[tokio::test]
    async fn test_oversized_body_fails_the_fetch() {
        let server = Server::run();
        let big = "x".repeat(MAX_RESPONSE_BODY_SIZE + 1);
        server.expect(
            Expectation::matching(request::method_path("GET", "/"))
                .respond_with(status_code(200).body(big)),
        );

        let clients = test_clients();
        let error = fetch_snapshot(&clients, &server.url_str("/"))
            .await
            .unwrap_err();

        assert!(matches!(error, FetchError::BodyTooLarge { .. }));
        assert!(!error.is_retriable());
    }

    #[tokio::test]
    async fn test_request_headers_look_like_a_navigation() {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/"),
                request::headers(contains(("accept-language", "en-US,en;q=0.9"))),
                request::headers(contains(("sec-fetch-mode", "navigate"))),
            ])
            .respond_with(status_code(200).body("<html></html>")),
        );

        let clients = test_clients();
        let snapshot = fetch_snapshot(&clients, &server.url_str("/")).await.unwrap();
        assert_eq!(snapshot.final_status_code(), 200);
    }
}
