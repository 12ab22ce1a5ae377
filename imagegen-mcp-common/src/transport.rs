//! MCP transport configuration.
//!
//! Two transport modes are supported:
//!
//! - **Stdio**: default mode for local subprocess communication
//! - **HTTP**: one listener exposing two MCP endpoints
//!   - [`STREAMING_PATH`] (`/sse`): stateful sessions, responses streamed as
//!     Server-Sent Events
//!   - [`REQUEST_PATH`] (`/mcp`): stateless request/response, one server
//!     instance per request
//!
//! # Example
//!
//! ```ignore
//! use imagegen_mcp_common::transport::TransportArgs;
//! use clap::Parser;
//!
//! #[derive(Parser)]
//! struct Args {
//!     #[command(flatten)]
//!     transport: TransportArgs,
//! }
//!
//! let args = Args::parse();
//! let transport = args.transport.into_transport();
//! ```

use clap::Args;
use std::fmt;

/// Path of the streaming (session-based) HTTP endpoint.
pub const STREAMING_PATH: &str = "/sse";

/// Path of the single-request HTTP endpoint.
pub const REQUEST_PATH: &str = "/mcp";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Transport mode for MCP server communication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transport {
    /// Standard input/output transport (default).
    #[default]
    Stdio,
    /// HTTP listener serving both the streaming and the request path.
    Http {
        /// Port to listen on
        port: u16,
    },
}

impl Transport {
    /// Create a new stdio transport.
    pub fn stdio() -> Self {
        Transport::Stdio
    }

    /// Create a new HTTP transport on the specified port.
    pub fn http(port: u16) -> Self {
        Transport::Http { port }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Stdio => write!(f, "stdio"),
            Transport::Http { port } => write!(
                f,
                "http (port {}, paths {} and {})",
                port, STREAMING_PATH, REQUEST_PATH
            ),
        }
    }
}

/// Command-line arguments for transport configuration.
#[derive(Args, Debug, Clone)]
pub struct TransportArgs {
    /// Transport mode: stdio or http
    #[arg(long, default_value = "stdio", value_parser = parse_transport_mode)]
    pub transport: TransportMode,

    /// Port for the HTTP transport (default: 8080, or from PORT env var)
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

/// Transport mode parsed from command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportMode {
    #[default]
    Stdio,
    Http,
}

/// Parse a transport mode name.
///
/// `sse` is accepted as an alias for `http`, since the HTTP listener serves
/// the streaming path as well.
pub fn parse_transport_mode(s: &str) -> Result<TransportMode, String> {
    match s.to_lowercase().as_str() {
        "stdio" => Ok(TransportMode::Stdio),
        "http" | "sse" => Ok(TransportMode::Http),
        _ => Err(format!(
            "Invalid transport mode '{}'. Valid options: stdio, http, sse",
            s
        )),
    }
}

impl TransportArgs {
    /// Convert command-line arguments into a Transport configuration.
    pub fn into_transport(self) -> Transport {
        match self.transport {
            TransportMode::Stdio => Transport::stdio(),
            TransportMode::Http => Transport::http(self.port),
        }
    }
}

impl Default for TransportArgs {
    fn default() -> Self {
        Self {
            transport: TransportMode::Stdio,
            port: DEFAULT_PORT,
        }
    }
}
