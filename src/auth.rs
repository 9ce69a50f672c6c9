use axum::http::{header, HeaderMap};
use subtle::ConstantTimeEq;

/// Outcome of the optional bearer-token check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthResult {
    /// `false` only when a credential was presented and it was wrong.
    pub valid: bool,
    pub authenticated: bool,
}

impl AuthResult {
    const ANONYMOUS: Self = Self { valid: true, authenticated: false };
    const AUTHENTICATED: Self = Self { valid: true, authenticated: true };
    const REJECTED: Self = Self { valid: false, authenticated: false };
}

/// Check the `Authorization` header against the configured secret.
///
/// Access is open when no secret is configured, and a request carrying no
/// header (or a blank one) is let through unauthenticated. Only a header
/// whose token does not match the secret is rejected.
pub fn authorize(headers: &HeaderMap, secret: Option<&str>) -> AuthResult {
    let Some(secret) = secret.filter(|s| !s.is_empty()) else {
        return AuthResult::ANONYMOUS;
    };

    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return AuthResult::ANONYMOUS;
    };

    let Ok(raw) = value.to_str() else {
        return AuthResult::REJECTED;
    };
    if raw.trim().is_empty() {
        return AuthResult::ANONYMOUS;
    }

    let token = raw.strip_prefix("Bearer ").unwrap_or(raw);
    if bool::from(token.as_bytes().ct_eq(secret.as_bytes())) {
        AuthResult::AUTHENTICATED
    } else {
        AuthResult::REJECTED
    }
}
