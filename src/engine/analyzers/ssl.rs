//! SSL/TLS scoring.
//!
//! Tri-state: a valid certificate over HTTPS earns full credit, HTTPS
//! with unconfirmed validity earns half, everything else earns nothing.
//! Mixed content is flagged without touching the score.

use std::sync::LazyLock;

use regex::Regex;

use crate::engine::category::Category;
use crate::engine::result::CategoryResult;
use crate::engine::snapshot::Snapshot;

use super::compile_regex_unsafe;

pub(crate) const ISSUE_PLAIN_HTTP: &str = "Site is served over plain HTTP";
pub(crate) const ISSUE_INVALID_CERT: &str = "TLS certificate failed validation";
pub(crate) const ISSUE_UNVERIFIED_CERT: &str =
    "TLS certificate validity could not be confirmed";
pub(crate) const ISSUE_MIXED_CONTENT: &str =
    "Mixed content loads HTTP resources on an HTTPS page";

/// Subresources loaded over plain HTTP. Anchor hrefs are deliberately
/// not matched: linking out over HTTP is not mixed content.
static MIXED_CONTENT: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(r#"(?i)\bsrc\s*=\s*["']http://"#, "mixed content"));

pub(crate) fn analyze(snapshot: &Snapshot) -> CategoryResult {
    let mut result = CategoryResult::new(Category::Ssl);

    if !snapshot.tls_present() {
        result.flag(ISSUE_PLAIN_HTTP);
        return result;
    }

    match snapshot.tls_valid() {
        Some(true) => result.award(10, "Valid TLS certificate on HTTPS"),
        Some(false) => result.flag(ISSUE_INVALID_CERT),
        None => {
            result.award(5, "Site is served over HTTPS");
            result.flag(ISSUE_UNVERIFIED_CERT);
        }
    }

    if MIXED_CONTENT.is_match(snapshot.raw_markup()) {
        result.flag(ISSUE_MIXED_CONTENT);
    }

    result
}
