//! The asymmetric auth policy: only a wrong credential is rejected.

use axum::http::{header, HeaderMap, HeaderValue};
use content_mcp_gateway::auth::{authorize, AuthResult};

const SECRET: &str = "s3cret-key";

fn with_auth(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

fn anonymous() -> AuthResult {
    AuthResult { valid: true, authenticated: false }
}

#[test]
fn no_secret_allows_everything_unauthenticated() {
    assert_eq!(authorize(&HeaderMap::new(), None), anonymous());
    assert_eq!(authorize(&with_auth("Bearer anything"), None), anonymous());
    assert_eq!(authorize(&with_auth("garbage"), None), anonymous());
}

#[test]
fn empty_secret_counts_as_disabled() {
    assert_eq!(authorize(&with_auth("Bearer wrong"), Some("")), anonymous());
}

#[test]
fn missing_header_passes_through_when_secret_set() {
    assert_eq!(authorize(&HeaderMap::new(), Some(SECRET)), anonymous());
}

#[test]
fn blank_header_counts_as_missing() {
    assert_eq!(authorize(&with_auth(""), Some(SECRET)), anonymous());
    assert_eq!(authorize(&with_auth("   "), Some(SECRET)), anonymous());
}

#[test]
fn correct_bearer_authenticates() {
    let result = authorize(&with_auth(&format!("Bearer {SECRET}")), Some(SECRET));
    assert_eq!(result, AuthResult { valid: true, authenticated: true });
}

#[test]
fn raw_token_without_scheme_is_compared_as_is() {
    let result = authorize(&with_auth(SECRET), Some(SECRET));
    assert_eq!(result, AuthResult { valid: true, authenticated: true });
}

#[test]
fn wrong_bearer_is_rejected() {
    let rejected = AuthResult { valid: false, authenticated: false };
    assert_eq!(authorize(&with_auth("Bearer nope"), Some(SECRET)), rejected);
    assert_eq!(authorize(&with_auth("Bearer "), Some(SECRET)), rejected);
    assert_eq!(
        authorize(&with_auth(&format!("Bearer {SECRET}x")), Some(SECRET)),
        rejected
    );
    assert_eq!(
        authorize(&with_auth(&format!("bearer {SECRET}")), Some(SECRET)),
        rejected,
        "scheme prefix is case-sensitive"
    );
}
