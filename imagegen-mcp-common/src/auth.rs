//! Provider credential resolution.
//!
//! Each upstream provider has one process-wide API key loaded at startup.
//! A single call may carry its own key, which takes precedence. Keys are
//! opaque: nothing here inspects their format, and a bad key only shows up
//! later as a 401/403 from the provider.

use std::fmt;

/// Pick the API key for one provider call.
///
/// Returns `explicit` when it is present and non-empty, otherwise `process`.
///
/// # Example
///
/// ```
/// use imagegen_mcp_common::auth::resolve_api_key;
///
/// assert_eq!(resolve_api_key(Some("explicit"), "fallback"), "explicit");
/// assert_eq!(resolve_api_key(None, "fallback"), "fallback");
/// assert_eq!(resolve_api_key(Some(""), "fallback"), "fallback");
/// ```
pub fn resolve_api_key<'a>(explicit: Option<&'a str>, process: &'a str) -> &'a str {
    match explicit {
        Some(key) if !key.is_empty() => key,
        _ => process,
    }
}

/// `Authorization` header scheme expected by a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: Bearer <key>`
    Bearer,
    /// `Authorization: Token <key>`
    Token,
}

impl AuthScheme {
    /// Render the full `Authorization` header value for `key`.
    pub fn header_value(&self, key: &str) -> String {
        format!("{} {}", self, key)
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthScheme::Bearer => write!(f, "Bearer"),
            AuthScheme::Token => write!(f, "Token"),
        }
    }
}
