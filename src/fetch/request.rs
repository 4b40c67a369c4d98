//! Browser-shaped request headers.

/// Request headers matching a desktop browser navigation.
///
/// Sites that sniff for bots serve degraded markup or a 403 to bare
/// clients, and a degraded page would distort nearly every category, so
/// requests present as a normal navigation. The User-Agent itself is set
/// once at the client level.
pub(crate) struct RequestHeaders;

impl RequestHeaders {
    /// Applies the standard request headers to a `reqwest::RequestBuilder`.
    ///
    /// Accept-Encoding stays unset: reqwest negotiates gzip itself, and a
    /// manual value disables its transparent decompression.
    pub(crate) fn apply(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .header(reqwest::header::UPGRADE_INSECURE_REQUESTS, "1")
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-dest"),
                "document",
            )
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-mode"),
                "navigate",
            )
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-site"),
                "none",
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_headers_are_applied() {
        let client = reqwest::Client::new();
        let request = RequestHeaders::apply(client.get("https://example.com"))
            .build()
            .unwrap();

        let headers = request.headers();
        assert!(headers
            .get(reqwest::header::ACCEPT)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        assert_eq!(headers.get("sec-fetch-mode").unwrap(), "navigate");
        assert_eq!(headers.get("upgrade-insecure-requests").unwrap(), "1");
    }

    #[test]
    fn test_accept_encoding_is_left_to_reqwest() {
        let client = reqwest::Client::new();
        let request = RequestHeaders::apply(client.get("https://example.com"))
            .build()
            .unwrap();

        assert!(!request
            .headers()
            .contains_key(reqwest::header::ACCEPT_ENCODING));
    }
}
