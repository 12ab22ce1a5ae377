//! OpenAI Images API client.
//!
//! Sends one `POST /v1/images/generations` per call and returns the `data`
//! array from the response untouched.

use crate::models::{OPENAI_IMAGE_MODEL, OPENAI_RESPONSE_FORMAT};
use crate::upstream::post_json;
use imagegen_mcp_common::auth::{AuthScheme, resolve_api_key};
use imagegen_mcp_common::error::Error;
use rmcp::model::JsonObject;
use serde_json::Value;
use tracing::{info, instrument};

/// Production API host.
pub const OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Image generation endpoint path.
pub const GENERATIONS_PATH: &str = "/v1/images/generations";

/// Message used when a failed response carries no `error.message`.
pub const FALLBACK_ERROR: &str = "OpenAI call failed";

const PROVIDER: &str = "openai";

/// Client for the OpenAI image generation endpoint.
#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenAiClient {
    /// Create a client against the production API.
    pub fn new(http: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self::with_base_url(http, api_key, OPENAI_BASE_URL)
    }

    /// Create a client against a custom base URL (mock servers, proxies).
    pub fn with_base_url(
        http: reqwest::Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Full URL of the generations endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, GENERATIONS_PATH)
    }

    /// Build the request body: caller params merged into the fixed base.
    ///
    /// `model` and `response_format` are written last so a caller value can
    /// never replace them.
    pub fn request_body(params: &JsonObject) -> Value {
        let mut body = params.clone();
        body.insert("model".to_string(), Value::from(OPENAI_IMAGE_MODEL));
        body.insert(
            "response_format".to_string(),
            Value::from(OPENAI_RESPONSE_FORMAT),
        );
        Value::Object(body)
    }

    /// Generate images and return the provider's `data` field verbatim.
    ///
    /// `api_key` overrides the configured key for this call when non-empty.
    ///
    /// # Errors
    /// - `Error::Provider` for a non-2xx response, carrying `error.message`
    ///   or [`FALLBACK_ERROR`]
    /// - `Error::Http` when the request fails or the body is not JSON
    #[instrument(level = "info", name = "openai_generate_image", skip_all, fields(model = OPENAI_IMAGE_MODEL))]
    pub async fn generate_image(
        &self,
        params: &JsonObject,
        api_key: Option<&str>,
    ) -> Result<Value, Error> {
        let key = resolve_api_key(api_key, &self.api_key);
        let endpoint = self.endpoint();
        let body = Self::request_body(params);

        let response =
            post_json(&self.http, PROVIDER, &endpoint, AuthScheme::Bearer, key, &body).await?;

        if !response.status.is_success() {
            return Err(Error::provider(
                PROVIDER,
                response.status.as_u16(),
                error_message(&response.body),
            ));
        }

        let data = response.body.get("data").cloned().unwrap_or(Value::Null);
        info!(
            images = ?data.as_array().map(Vec::len),
            "Received image data from OpenAI"
        );
        Ok(data)
    }
}

/// Pull `error.message` out of a failure body, or fall back.
fn error_message(body: &Value) -> String {
    body.pointer("/error/message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .unwrap_or(FALLBACK_ERROR)
        .to_string()
}
