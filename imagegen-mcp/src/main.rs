//! Image generation MCP server.
//!
//! MCP server exposing OpenAI and Replicate image generation as tools.

use anyhow::Result;
use clap::Parser;
use imagegen_mcp::ImageGenServer;
use imagegen_mcp_common::tracing::init_tracing;
use imagegen_mcp_common::{Config, McpServerBuilder, TransportArgs};

/// Command-line arguments for the image generation server.
#[derive(Parser, Debug)]
#[command(name = "imagegen-mcp")]
#[command(about = "MCP server for image generation using OpenAI and Replicate")]
struct Args {
    /// Transport configuration
    #[command(flatten)]
    transport: TransportArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    tracing::info!("imagegen-mcp server starting...");

    let args = Args::parse();

    // Both keys are required; values are never logged
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let transport = args.transport.into_transport();
    tracing::info!(transport = %transport, "Starting MCP server");

    McpServerBuilder::new(move || ImageGenServer::new(config.clone()))
        .with_transport(transport)
        .run()
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
