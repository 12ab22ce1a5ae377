//! Upstream model pins.
//!
//! Every tool targets exactly one model. Callers cannot choose or override
//! the model; it is fixed here.

/// OpenAI image model sent with every standard generation request.
pub const OPENAI_IMAGE_MODEL: &str = "gpt-image-1";

/// Response encoding requested from OpenAI. Not caller-overridable.
pub const OPENAI_RESPONSE_FORMAT: &str = "b64_json";

/// A Replicate model pinned to one version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplicateModel {
    /// Owner/name identifier, used for logging
    pub id: &'static str,
    /// Version string sent as `version` in the prediction request
    pub version: &'static str,
}

/// Recraft V3 SVG: vector output.
pub const RECRAFT_V3_SVG: ReplicateModel = ReplicateModel {
    id: "recraft-ai/recraft-v3-svg",
    version: "latest",
};

/// FLUX.1 [dev]: fast raster output.
pub const FLUX_DEV: ReplicateModel = ReplicateModel {
    id: "black-forest-labs/flux-dev",
    version: "latest",
};

/// FLUX 1.1 [pro]: high quality raster output.
pub const FLUX_1_1_PRO: ReplicateModel = ReplicateModel {
    id: "black-forest-labs/flux-1.1-pro",
    version: "latest",
};
