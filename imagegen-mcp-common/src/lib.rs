//! Image generation MCP common library.
//!
//! Shared utilities for configuration, provider credentials, error handling,
//! tracing and MCP transport plumbing used by the image generation server.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod auth;
pub mod config;
pub mod error;
pub mod server;
pub mod tracing;
pub mod transport;


pub use auth::{AuthScheme, resolve_api_key};
pub use config::Config;
pub use error::{ConfigError, Error};
pub use server::{McpServerBuilder, ServerError, shutdown_channel};
pub use transport::{Transport, TransportArgs, TransportMode};
