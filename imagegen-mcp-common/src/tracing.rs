//! Tracing initialization for the image generation MCP server.
//!
//! Log output goes to stderr: with the stdio transport, stdout carries the
//! MCP protocol stream and must not be interleaved with log lines.
//!
//! # Usage
//!
//! ```no_run
//! use imagegen_mcp_common::tracing::init_tracing;
//!
//! init_tracing();
//! tracing::info!("Application started");
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Controls the log level and filtering. Examples:
//!   - `RUST_LOG=debug` - Enable debug logging for all modules
//!   - `RUST_LOG=imagegen_mcp=debug` - Enable debug for the server crate
//!   - `RUST_LOG=warn,imagegen_mcp_common=debug` - Warn by default, debug for common

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
    util::{SubscriberInitExt, TryInitError},
};

/// Default filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LEVEL: &str = "info";

/// Build the env filter, falling back to `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize the tracing subscriber with environment-based filtering.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_tracing() {
    init_tracing_with_default(DEFAULT_LEVEL);
}

/// Initialize tracing with a custom default level for when `RUST_LOG` is
/// not set.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_tracing_with_default(default_level: &str) {
    registry(default_level).init();
}

/// Try to initialize tracing, returning an error if already initialized.
///
/// Unlike `init_tracing()`, this does not panic when a subscriber is already
/// installed, which makes it safe to call from tests.
pub fn try_init_tracing() -> Result<(), TryInitError> {
    registry(DEFAULT_LEVEL).try_init()
}

fn registry(default_level: &str) -> impl SubscriberInitExt {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_span_events(FmtSpan::NONE);

    tracing_subscriber::registry()
        .with(env_filter(default_level))
        .with(fmt_layer)
}
