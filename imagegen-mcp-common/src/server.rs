//! MCP Server builder utilities.
//!
//! This module runs an MCP server over the configured transport with
//! graceful shutdown. The builder takes a factory rather than a handler: a
//! new handler is built for every stdio connection, every streaming session
//! and every stateless request, so nothing leaks between callers.
//!
//! # Example
//!
//! ```ignore
//! use imagegen_mcp_common::server::McpServerBuilder;
//! use imagegen_mcp_common::transport::Transport;
//!
//! McpServerBuilder::new(move || MyHandler::new(config.clone()))
//!     .with_transport(Transport::http(8080))
//!     .run()
//!     .await?;
//! ```

use crate::transport::{REQUEST_PATH, STREAMING_PATH, Transport};
use axum::http::StatusCode;
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use rmcp::{ServerHandler, ServiceExt};
use thiserror::Error;
use tokio::sync::oneshot;

/// Errors that can occur when running an MCP server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind to the specified port
    #[error("Failed to bind to port {port}: {message}")]
    BindFailed { port: u16, message: String },

    /// Transport error during communication
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Builder for configuring and running MCP servers.
pub struct McpServerBuilder<F> {
    factory: F,
    transport: Transport,
    shutdown_rx: Option<oneshot::Receiver<()>>,
}

impl<F, H> McpServerBuilder<F>
where
    F: Fn() -> H + Clone + Send + Sync + 'static,
    H: ServerHandler + Send + 'static,
{
    /// Create a new server builder from a handler factory.
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            transport: Transport::default(),
            shutdown_rx: None,
        }
    }

    /// Set the transport mode for the server.
    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    /// Set a shutdown signal receiver for graceful shutdown.
    ///
    /// When the sender is dropped or a message is sent, the server
    /// will initiate graceful shutdown.
    pub fn with_shutdown(mut self, shutdown_rx: oneshot::Receiver<()>) -> Self {
        self.shutdown_rx = Some(shutdown_rx);
        self
    }

    /// Run the MCP server with the configured transport.
    ///
    /// This method blocks until the server is shut down (via signal or shutdown channel).
    pub async fn run(self) -> Result<(), ServerError> {
        tracing::info!(transport = %self.transport, "Starting MCP server");

        match self.transport {
            Transport::Stdio => self.run_stdio().await,
            Transport::Http { port } => self.run_http(port).await,
        }
    }

    /// Build the HTTP router serving both MCP paths.
    ///
    /// - `/sse`: stateful Streamable HTTP, one handler per session
    /// - `/mcp`: stateless Streamable HTTP, one handler per request
    /// - anything else: `404 Not found`
    pub fn http_router(&self) -> axum::Router {
        let streaming_factory = self.factory.clone();
        let streaming = StreamableHttpService::new(
            move || Ok(streaming_factory()),
            LocalSessionManager::default().into(),
            StreamableHttpServerConfig::default(),
        );

        let request_factory = self.factory.clone();
        let request = StreamableHttpService::new(
            move || Ok(request_factory()),
            LocalSessionManager::default().into(),
            StreamableHttpServerConfig {
                stateful_mode: false,
                ..Default::default()
            },
        );

        axum::Router::new()
            .nest_service(STREAMING_PATH, streaming)
            .nest_service(REQUEST_PATH, request)
            .fallback(|| async { (StatusCode::NOT_FOUND, "Not found") })
    }

    /// Run the server with stdio transport.
    async fn run_stdio(self) -> Result<(), ServerError> {
        use rmcp::transport::io::stdio;

        let Self {
            factory,
            shutdown_rx,
            ..
        } = self;

        let shutdown_future = async {
            if let Some(rx) = shutdown_rx {
                let _ = rx.await;
            } else {
                wait_for_shutdown_signal().await;
            }
        };

        let service = factory()
            .serve(stdio())
            .await
            .map_err(|e| ServerError::Transport(e.to_string()))?;

        tokio::select! {
            result = service.waiting() => {
                result.map_err(|e| ServerError::Transport(e.to_string()))?;
                Ok(())
            }
            _ = shutdown_future => {
                tracing::info!("Received shutdown signal, stopping server");
                Ok(())
            }
        }
    }

    /// Run the server with the HTTP transport.
    async fn run_http(self, port: u16) -> Result<(), ServerError> {
        let router = self.http_router();

        let bind_addr = format!("0.0.0.0:{}", port);
        let tcp_listener = tokio::net::TcpListener::bind(&bind_addr)
            .await
            .map_err(|e| ServerError::BindFailed {
                port,
                message: e.to_string(),
            })?;

        tracing::info!(
            port,
            streaming_path = STREAMING_PATH,
            request_path = REQUEST_PATH,
            "HTTP server listening"
        );

        let shutdown_future = async {
            if let Some(rx) = self.shutdown_rx {
                let _ = rx.await;
            } else {
                wait_for_shutdown_signal().await;
            }
        };

        axum::serve(tcp_listener, router)
            .with_graceful_shutdown(shutdown_future)
            .await
            .map_err(|e| ServerError::Transport(e.to_string()))?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for a shutdown signal (SIGTERM or SIGINT).
async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
        let mut sigint =
            signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => {
                tracing::info!("Received SIGTERM");
            }
            _ = sigint.recv() => {
                tracing::info!("Received SIGINT");
            }
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to register Ctrl+C handler");
        tracing::info!("Received Ctrl+C");
    }
}

/// Convenience function to set up graceful shutdown handling.
///
/// Returns a sender that can be used to trigger shutdown programmatically,
/// and a receiver to pass to the server builder.
pub fn shutdown_channel() -> (oneshot::Sender<()>, oneshot::Receiver<()>) {
    oneshot::channel()
}
