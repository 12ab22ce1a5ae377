//! Shared plumbing for the single outbound POST each tool call makes.

use imagegen_mcp_common::auth::AuthScheme;
use imagegen_mcp_common::error::Error;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::debug;

/// Raw outcome of one provider call: the status and the decoded JSON body.
#[derive(Debug)]
pub struct UpstreamResponse {
    /// HTTP status returned by the provider
    pub status: StatusCode,
    /// Response body, decoded as JSON
    pub body: Value,
}

/// POST `body` to `endpoint` and decode the JSON response.
///
/// The body is decoded regardless of status, since both providers put their
/// error details in JSON. Connection failures and bodies that are not JSON
/// come back as `Error::Http`.
pub async fn post_json(
    http: &reqwest::Client,
    provider: &'static str,
    endpoint: &str,
    scheme: AuthScheme,
    api_key: &str,
    body: &Value,
) -> Result<UpstreamResponse, Error> {
    debug!(provider, endpoint = %endpoint, "Calling provider");

    let response = http
        .post(endpoint)
        .header(reqwest::header::AUTHORIZATION, scheme.header_value(api_key))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .json(body)
        .send()
        .await
        .map_err(|e| Error::http(format!("Request to {} failed: {}", provider, e)))?;

    let status = response.status();
    let text = response.text().await.map_err(|e| {
        Error::http(format!(
            "Failed to read {} response (HTTP {}): {}",
            provider,
            status.as_u16(),
            e
        ))
    })?;

    let body = serde_json::from_str(&text).map_err(|e| {
        Error::http(format!(
            "Failed to parse {} response (HTTP {}): {}",
            provider,
            status.as_u16(),
            e
        ))
    })?;

    debug!(provider, status = status.as_u16(), "Provider responded");
    Ok(UpstreamResponse { status, body })
}
