//! Image generation MCP server library.
//!
//! Exposes four image generation tools over MCP. One tool forwards to the
//! OpenAI Images API, the other three to Replicate predictions, each pinned
//! to a single model.

pub mod models;
pub mod openai;
pub mod params;
pub mod replicate;
pub mod server;
pub mod tools;
pub mod upstream;

pub use openai::OpenAiClient;
pub use params::{ToolParams, ValidationError};
pub use replicate::ReplicateClient;
pub use server::{ImageGenServer, InvocationOutcome};
pub use tools::{ImageTool, Provider, tool_definitions};
