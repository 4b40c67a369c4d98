//! Security-header scoring. Five two-point checks against the response
//! headers; lookups are case-insensitive.

use crate::config::{
    HEADER_CONTENT_SECURITY_POLICY, HEADER_REFERRER_POLICY,
    HEADER_STRICT_TRANSPORT_SECURITY, HEADER_X_CONTENT_TYPE_OPTIONS,
    HEADER_X_FRAME_OPTIONS, HEADER_X_XSS_PROTECTION,
};
use crate::engine::category::Category;
use crate::engine::result::CategoryResult;
use crate::engine::snapshot::Snapshot;

pub(crate) const ISSUE_HSTS: &str = "Missing Strict-Transport-Security header";
pub(crate) const ISSUE_CSP: &str = "Missing Content-Security-Policy header";
pub(crate) const ISSUE_CONTENT_TYPE_OPTIONS: &str =
    "Missing X-Content-Type-Options header";
pub(crate) const ISSUE_FRAME_OPTIONS: &str = "Missing X-Frame-Options header";
pub(crate) const ISSUE_XSS_REFERRER: &str =
    "Missing X-XSS-Protection and Referrer-Policy headers";

pub(crate) fn analyze(snapshot: &Snapshot) -> CategoryResult {
    let mut result = CategoryResult::new(Category::Security);

    result.credit(
        snapshot.has_header(HEADER_STRICT_TRANSPORT_SECURITY),
        2,
        "Strict-Transport-Security header set",
        ISSUE_HSTS,
    );
    result.credit(
        snapshot.has_header(HEADER_CONTENT_SECURITY_POLICY),
        2,
        "Content-Security-Policy header set",
        ISSUE_CSP,
    );
    result.credit(
        snapshot.has_header(HEADER_X_CONTENT_TYPE_OPTIONS),
        2,
        "X-Content-Type-Options header set",
        ISSUE_CONTENT_TYPE_OPTIONS,
    );
    result.credit(
        snapshot.has_header(HEADER_X_FRAME_OPTIONS),
        2,
        "X-Frame-Options header set",
        ISSUE_FRAME_OPTIONS,
    );

    // Either the legacy XSS filter header or its modern replacement
    // satisfies the final share.
    let xss_or_referrer = snapshot.has_header(HEADER_X_XSS_PROTECTION)
        || snapshot.has_header(HEADER_REFERRER_POLICY);
    result.credit(
        xss_or_referrer,
        2,
        "XSS or referrer protection header set",
        ISSUE_XSS_REFERRER,
    );

    result
}
