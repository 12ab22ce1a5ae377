//! MCP Server implementation for the image generation server.
//!
//! This module provides the MCP server handler that exposes the four
//! `image-generate-*` tools. Each call is validated, forwarded to exactly one
//! provider and the provider's output returned as a single text block.

use crate::openai::OpenAiClient;
use crate::params::ValidationError;
use crate::replicate::ReplicateClient;
use crate::tools::{ImageTool, Provider, tool_definitions};
use imagegen_mcp_common::config::Config;
use imagegen_mcp_common::error::Error;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    model::{
        CallToolResult, Content, Implementation, JsonObject, ListToolsResult, ServerCapabilities,
        ServerInfo,
    },
};
use serde_json::{Value, json};
use tracing::{info, warn};

/// Name reported to clients during initialization.
pub const SERVER_NAME: &str = "ImageGenMCP";

/// Version reported to clients during initialization.
pub const SERVER_VERSION: &str = "1.0.0";

/// MCP Server for image generation.
///
/// Holds no per-call state; the transport layer builds one per connection.
#[derive(Clone)]
pub struct ImageGenServer {
    openai: OpenAiClient,
    replicate: ReplicateClient,
}

/// Result of running a tool against its provider.
#[derive(Debug, Clone, PartialEq)]
pub enum InvocationOutcome {
    /// Provider output, passed through untouched
    Success(Value),
    /// Provider or transport failure message
    Failure(String),
}

impl From<InvocationOutcome> for CallToolResult {
    fn from(outcome: InvocationOutcome) -> Self {
        let text = match outcome {
            InvocationOutcome::Success(output) => output.to_string(),
            InvocationOutcome::Failure(message) => format!("Error: {}", message),
        };
        CallToolResult::success(vec![Content::text(text)])
    }
}

impl ImageGenServer {
    /// Create a new server talking to the production provider APIs.
    pub fn new(config: Config) -> Self {
        let http = reqwest::Client::new();
        Self::with_clients(
            OpenAiClient::new(http.clone(), config.openai_api_key),
            ReplicateClient::new(http, config.replicate_api_key),
        )
    }

    /// Create a server from pre-built provider clients.
    pub fn with_clients(openai: OpenAiClient, replicate: ReplicateClient) -> Self {
        Self { openai, replicate }
    }

    /// Run one tool call end to end.
    ///
    /// # Errors
    /// `invalid_params` for an unknown tool or arguments that fail
    /// validation. Provider failures are not errors here; they come back as
    /// a successful result whose text starts with `Error: `.
    pub async fn invoke(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let tool = ImageTool::from_name(name)
            .ok_or_else(|| McpError::invalid_params(format!("Unknown tool: {}", name), None))?;

        let params = tool
            .parse_arguments(arguments)
            .map_err(|errors| invalid_arguments(tool, &errors))?;

        info!(tool = %tool, "Invoking tool");
        let outcome = match self.dispatch(tool, &params).await {
            Ok(output) => InvocationOutcome::Success(output),
            Err(e) => {
                warn!(tool = %tool, status = ?e.status_code(), error = %e, "Tool call failed");
                InvocationOutcome::Failure(e.to_string())
            }
        };

        Ok(outcome.into())
    }

    async fn dispatch(&self, tool: ImageTool, params: &JsonObject) -> Result<Value, Error> {
        match tool.provider() {
            Provider::OpenAi => self.openai.generate_image(params, None).await,
            Provider::Replicate(model) => self.replicate.predict(&model, params, None).await,
        }
    }
}

fn invalid_arguments(tool: ImageTool, errors: &[ValidationError]) -> McpError {
    let summary = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");

    McpError::invalid_params(
        format!("Invalid parameters for {}: {}", tool, summary),
        Some(json!({ "errors": errors })),
    )
}

impl ServerHandler for ImageGenServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Image generation server. Use image-generate-standard for OpenAI gpt-image-1, \
                 image-generate-vector for SVG output, image-generate-fast-raster for quick \
                 raster drafts and image-generate-pro-raster for high quality raster images."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    fn list_tools(
        &self,
        _params: Option<rmcp::model::PaginatedRequestParams>,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        async move {
            Ok(ListToolsResult {
                tools: tool_definitions(),
                next_cursor: None,
                meta: None,
            })
        }
    }

    fn call_tool(
        &self,
        params: rmcp::model::CallToolRequestParams,
        _context: rmcp::service::RequestContext<rmcp::service::RoleServer>,
    ) -> impl std::future::Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move { self.invoke(&params.name, params.arguments).await }
    }
}
