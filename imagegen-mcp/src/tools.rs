//! The tool catalog.
//!
//! Four tools, each pinned to one provider and one model. Names, schemas and
//! pins are fixed at compile time.

use crate::models::{FLUX_1_1_PRO, FLUX_DEV, RECRAFT_V3_SVG, ReplicateModel};
use crate::params::{
    FastRasterParams, ProRasterParams, StandardImageParams, ToolParams, ValidationError,
    VectorImageParams,
};
use rmcp::model::{JsonObject, Tool};
use std::borrow::Cow;
use std::sync::Arc;

/// Which upstream a tool calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAi,
    Replicate(ReplicateModel),
}

/// One of the advertised image tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageTool {
    Standard,
    Vector,
    FastRaster,
    ProRaster,
}

impl ImageTool {
    /// Every tool, in catalog order.
    pub const ALL: [ImageTool; 4] = [
        ImageTool::Standard,
        ImageTool::Vector,
        ImageTool::FastRaster,
        ImageTool::ProRaster,
    ];

    /// Wire name used in `list_tools` and `call_tool`.
    pub fn name(self) -> &'static str {
        match self {
            ImageTool::Standard => "image-generate-standard",
            ImageTool::Vector => "image-generate-vector",
            ImageTool::FastRaster => "image-generate-fast-raster",
            ImageTool::ProRaster => "image-generate-pro-raster",
        }
    }

    /// Look a tool up by wire name. Matching is exact.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    pub fn description(self) -> &'static str {
        match self {
            ImageTool::Standard => {
                "Generate images from a text prompt with OpenAI gpt-image-1. \
                 Returns the provider's image data array, with base64-encoded images."
            }
            ImageTool::Vector => {
                "Generate SVG vector images from a text prompt with Recraft V3 SVG on Replicate. \
                 Returns the prediction output."
            }
            ImageTool::FastRaster => {
                "Generate raster images quickly from a text prompt with FLUX.1 [dev] on Replicate. \
                 Returns the prediction output."
            }
            ImageTool::ProRaster => {
                "Generate high quality raster images from a text prompt with FLUX 1.1 [pro] on Replicate. \
                 Returns the prediction output."
            }
        }
    }

    pub fn provider(self) -> Provider {
        match self {
            ImageTool::Standard => Provider::OpenAi,
            ImageTool::Vector => Provider::Replicate(RECRAFT_V3_SVG),
            ImageTool::FastRaster => Provider::Replicate(FLUX_DEV),
            ImageTool::ProRaster => Provider::Replicate(FLUX_1_1_PRO),
        }
    }

    pub fn input_schema(self) -> Arc<JsonObject> {
        match self {
            ImageTool::Standard => StandardImageParams::input_schema(),
            ImageTool::Vector => VectorImageParams::input_schema(),
            ImageTool::FastRaster => FastRasterParams::input_schema(),
            ImageTool::ProRaster => ProRasterParams::input_schema(),
        }
    }

    /// Validate caller arguments and reduce them to the declared fields.
    pub fn parse_arguments(
        self,
        arguments: Option<JsonObject>,
    ) -> Result<JsonObject, Vec<ValidationError>> {
        match self {
            ImageTool::Standard => StandardImageParams::parse_arguments(arguments),
            ImageTool::Vector => VectorImageParams::parse_arguments(arguments),
            ImageTool::FastRaster => FastRasterParams::parse_arguments(arguments),
            ImageTool::ProRaster => ProRasterParams::parse_arguments(arguments),
        }
    }

    /// The MCP tool definition advertised in `list_tools`.
    pub fn definition(self) -> Tool {
        Tool {
            name: Cow::Borrowed(self.name()),
            description: Some(Cow::Borrowed(self.description())),
            input_schema: self.input_schema(),
            annotations: None,
            icons: None,
            meta: None,
            output_schema: None,
            title: None,
        }
    }
}

impl std::fmt::Display for ImageTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Definitions for every tool, in catalog order.
pub fn tool_definitions() -> Vec<Tool> {
    ImageTool::ALL.into_iter().map(ImageTool::definition).collect()
}
