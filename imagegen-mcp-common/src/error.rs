//! Error types for the common library.
//!
//! This module provides a unified error hierarchy using `thiserror` for the
//! image generation server.
//!
//! # Error Categories
//!
//! - `ConfigError`: Missing or invalid configuration
//! - `Error::Provider`: Upstream API answered with a non-success status
//! - `Error::Http`: The call never produced a usable response (connection
//!   failure, unreadable or non-JSON body)
//!
//! Provider and HTTP errors display as the bare message, because tool
//! handlers embed that text verbatim after an `Error: ` prefix.

use thiserror::Error;

/// Unified error type for the common library.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration errors (missing env vars, invalid values)
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Upstream provider rejected the call.
    ///
    /// `message` is the provider's own error text when it supplied one,
    /// otherwise a fixed fallback for that provider.
    #[error("{message}")]
    Provider {
        /// Provider that was called (e.g. "openai")
        provider: &'static str,
        /// HTTP status code returned by the provider
        status_code: u16,
        /// Error message from the provider or the fallback
        message: String,
    },

    /// Network or response decoding failure
    #[error("{0}")]
    Http(String),
}

impl Error {
    /// Create a new provider error.
    ///
    /// # Example
    ///
    /// ```
    /// use imagegen_mcp_common::error::Error;
    ///
    /// let err = Error::provider("openai", 401, "bad key");
    /// assert_eq!(err.to_string(), "bad key");
    /// assert_eq!(err.status_code(), Some(401));
    /// ```
    pub fn provider(provider: &'static str, status_code: u16, message: impl Into<String>) -> Self {
        Error::Provider {
            provider,
            status_code,
            message: message.into(),
        }
    }

    /// Create a new HTTP/transport error.
    pub fn http(message: impl Into<String>) -> Self {
        Error::Http(message.into())
    }

    /// HTTP status of a provider error, if this is one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Provider { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

/// Configuration errors.
///
/// These errors occur when loading or validating configuration from
/// environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("Required environment variable {0} is not set")]
    MissingEnvVar(String),

    /// An environment variable has an invalid value
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl ConfigError {
    /// Create a new missing environment variable error.
    pub fn missing_env_var(name: impl Into<String>) -> Self {
        ConfigError::MissingEnvVar(name.into())
    }

    /// Create a new invalid value error.
    pub fn invalid_value(name: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidValue(name.into(), reason.into())
    }
}
