//! Configuration module for loading provider credentials from the environment.

use std::fmt;

use crate::error::ConfigError;

/// Environment variable holding the OpenAI API key.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable holding the Replicate API key.
pub const REPLICATE_API_KEY_VAR: &str = "REPLICATE_API_KEY";

/// Application configuration loaded from environment variables.
///
/// Built once at startup and handed to every server instance explicitly.
/// The `Debug` output never includes the keys themselves.
#[derive(Clone)]
pub struct Config {
    /// OpenAI API key (required)
    pub openai_api_key: String,
    /// Replicate API key (required)
    pub replicate_api_key: String,
}

impl Config {
    /// Create a configuration from explicit keys.
    pub fn new(openai_api_key: impl Into<String>, replicate_api_key: impl Into<String>) -> Self {
        Self {
            openai_api_key: openai_api_key.into(),
            replicate_api_key: replicate_api_key.into(),
        }
    }

    /// Load configuration from environment variables and .env file.
    ///
    /// # Errors
    /// Returns `ConfigError::MissingEnvVar` if either API key is not set, and
    /// `ConfigError::InvalidValue` if one is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            openai_api_key: required_var(OPENAI_API_KEY_VAR)?,
            replicate_api_key: required_var(REPLICATE_API_KEY_VAR)?,
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    let value = std::env::var(name).map_err(|_| ConfigError::missing_env_var(name))?;
    if value.trim().is_empty() {
        return Err(ConfigError::invalid_value(name, "value is empty"));
    }
    Ok(value)
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("openai_api_key", &"<redacted>")
            .field("replicate_api_key", &"<redacted>")
            .finish()
    }
}
