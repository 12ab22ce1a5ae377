//! Replicate predictions API client.
//!
//! One `POST /v1/predictions` per call. The response describes a prediction
//! resource; its `output` is returned as-is, whether or not the prediction
//! has finished. There is no polling.

use crate::models::ReplicateModel;
use crate::upstream::post_json;
use imagegen_mcp_common::auth::{AuthScheme, resolve_api_key};
use imagegen_mcp_common::error::Error;
use rmcp::model::JsonObject;
use serde_json::{Value, json};
use tracing::{info, instrument};

/// Production API host.
pub const REPLICATE_BASE_URL: &str = "https://api.replicate.com";

/// Predictions endpoint path.
pub const PREDICTIONS_PATH: &str = "/v1/predictions";

/// Message used when a failed response carries no `error`.
pub const FALLBACK_ERROR: &str = "Replicate call failed";

const PROVIDER: &str = "replicate";

/// Model-agnostic client for Replicate predictions.
#[derive(Clone)]
pub struct ReplicateClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ReplicateClient {
    /// Create a client against the production API.
    pub fn new(http: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self::with_base_url(http, api_key, REPLICATE_BASE_URL)
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

    /// Full URL of the predictions endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, PREDICTIONS_PATH)
    }

    /// Build `{version, input}` with the tool params passed through unchanged.
    pub fn request_body(model: &ReplicateModel, input: &JsonObject) -> Value {
        json!({
            "version": model.version,
            "input": input,
        })
    }

    /// Create a prediction and return its `output` field.
    ///
    /// `api_key` overrides the configured key for this call when non-empty.
    ///
    /// # Errors
    /// - `Error::Provider` for a non-2xx response, carrying `error` or
    ///   [`FALLBACK_ERROR`]
    /// - `Error::Http` when the request fails or the body is not JSON
    #[instrument(level = "info", name = "replicate_predict", skip_all, fields(model = model.id))]
    pub async fn predict(
        &self,
        model: &ReplicateModel,
        input: &JsonObject,
        api_key: Option<&str>,
    ) -> Result<Value, Error> {
        let key = resolve_api_key(api_key, &self.api_key);
        let endpoint = self.endpoint();
        let body = Self::request_body(model, input);

        let response =
            post_json(&self.http, PROVIDER, &endpoint, AuthScheme::Token, key, &body).await?;

        if !response.status.is_success() {
            return Err(Error::provider(
                PROVIDER,
                response.status.as_u16(),
                error_message(&response.body),
            ));
        }

        info!(
            prediction_id = response.body.get("id").and_then(|v| v.as_str()),
            prediction_status = response.body.get("status").and_then(|v| v.as_str()),
            "Prediction created"
        );
        Ok(response.body.get("output").cloned().unwrap_or(Value::Null))
    }
}

/// Turn a failure body's `error` into a message.
///
/// Strings are used as-is. Other non-empty values are rendered as JSON.
fn error_message(body: &Value) -> String {
    match body.get("error") {
        Some(Value::String(message)) if !message.is_empty() => message.clone(),
        None | Some(Value::Null) | Some(Value::String(_)) | Some(Value::Bool(false)) => {
            FALLBACK_ERROR.to_string()
        }
        Some(other) => other.to_string(),
    }
}
