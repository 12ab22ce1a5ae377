//! Tool parameter types and validation.
//!
//! Each tool has a typed parameter struct. The struct drives the advertised
//! JSON Schema (via `schemars`) and strips undeclared keys. A declarative
//! rule table is checked against the raw arguments first, so every violation
//! names the field it concerns.

use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::sync::Arc;

/// Valid `size` values for the standard tool.
pub const VALID_SIZES: &[&str] = &["1024x1024", "1024x1536", "1536x1024"];

/// Valid `quality` values for the standard tool.
pub const VALID_QUALITIES: &[&str] = &["low", "medium", "high", "auto"];

/// Valid `style` values for the standard tool.
pub const VALID_STYLES: &[&str] = &["vivid", "natural"];

/// Valid `background` values for the standard tool.
pub const VALID_BACKGROUNDS: &[&str] = &["transparent", "white"];

/// Valid `style` values for the vector tool.
pub const VALID_VECTOR_STYLES: &[&str] = &["any", "engraving", "line_art", "line_circuit", "linocut"];

/// Valid `output_format` values for the raster tools.
pub const VALID_OUTPUT_FORMATS: &[&str] = &["webp", "png", "jpg"];

/// Minimum `n` for the standard tool.
pub const MIN_IMAGE_COUNT: i64 = 1;

/// Maximum `n` for the standard tool.
pub const MAX_IMAGE_COUNT: i64 = 10;

/// Minimum `num_outputs` for the raster tools.
pub const MIN_NUM_OUTPUTS: i64 = 1;

/// Maximum `num_outputs` for the raster tools.
pub const MAX_NUM_OUTPUTS: i64 = 4;

/// Minimum `output_quality` for the raster tools.
pub const MIN_OUTPUT_QUALITY: i64 = 1;

/// Maximum `output_quality` for the raster tools.
pub const MAX_OUTPUT_QUALITY: i64 = 100;

// =============================================================================
// Enumerations
// =============================================================================

/// Output dimensions for the standard tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ImageSize {
    #[serde(rename = "1024x1024")]
    Square,
    #[serde(rename = "1024x1536")]
    Portrait,
    #[serde(rename = "1536x1024")]
    Landscape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImageQuality {
    Low,
    Medium,
    High,
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImageStyle {
    Vivid,
    Natural,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImageBackground {
    Transparent,
    White,
}

/// Rendering style for vector output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum VectorStyle {
    Any,
    Engraving,
    LineArt,
    LineCircuit,
    Linocut,
}

/// Encoding of raster output files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Webp,
    Png,
    Jpg,
}

// =============================================================================
// Parameter structs
// =============================================================================

/// Parameters for `image-generate-standard`.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct StandardImageParams {
    /// Text description of the desired image.
    pub prompt: String,

    /// Number of images to generate (1-10).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 10))]
    pub n: Option<Number>,

    /// Output dimensions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<ImageSize>,

    /// Rendering quality.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<ImageQuality>,

    /// Visual style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ImageStyle>,

    /// Background treatment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<ImageBackground>,
}

/// Parameters for `image-generate-vector`.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct VectorImageParams {
    /// Text description of the desired image.
    pub prompt: String,

    /// Output size, e.g. "1024x1024".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    /// Vector rendering style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<VectorStyle>,
}

/// Parameters for `image-generate-fast-raster`.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct FastRasterParams {
    /// Text description of the desired image.
    pub prompt: String,

    /// Aspect ratio, e.g. "1:1" or "16:9".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,

    /// Number of images to generate (1-4).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 4))]
    pub num_outputs: Option<Number>,

    /// Output file format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,

    /// Compression quality for lossy formats (1-100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 100))]
    pub output_quality: Option<Number>,

    /// Random seed for reproducible output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<Number>,

    /// Trade some quality for speed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub go_fast: Option<bool>,
}

/// Parameters for `image-generate-pro-raster`.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ProRasterParams {
    /// Text description of the desired image.
    pub prompt: String,

    /// Aspect ratio, e.g. "1:1" or "16:9".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,

    /// Number of images to generate (1-4).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 4))]
    pub num_outputs: Option<Number>,

    /// Output file format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,

    /// Compression quality for lossy formats (1-100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 100))]
    pub output_quality: Option<Number>,

    /// Random seed for reproducible output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<Number>,

    /// Let the provider expand the prompt before generating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_upsampling: Option<bool>,

    /// Skip the provider's safety filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_safety_checker: Option<bool>,
}

// =============================================================================
// Rules
// =============================================================================

/// What a single argument must look like.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// Any string
    Text,
    /// A string with at least one non-whitespace character
    NonBlank,
    /// One of a fixed set of strings
    OneOf(&'static [&'static str]),
    /// Any JSON number, optionally bounded (inclusive)
    Number { min: Option<f64>, max: Option<f64> },
    Boolean,
}

/// A constraint attached to one named argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRule {
    pub field: &'static str,
    pub required: bool,
    pub constraint: Constraint,
}

impl FieldRule {
    pub const fn required(field: &'static str, constraint: Constraint) -> Self {
        Self { field, required: true, constraint }
    }

    pub const fn optional(field: &'static str, constraint: Constraint) -> Self {
        Self { field, required: false, constraint }
    }

    /// Check one value. `None` and JSON `null` mean the field was not given.
    fn check(&self, value: Option<&Value>) -> Option<ValidationError> {
        let value = match value {
            None | Some(Value::Null) if self.required => {
                return Some(ValidationError::new(self.field, "is required"));
            }
            None | Some(Value::Null) => return None,
            Some(value) => value,
        };

        let message = match self.constraint {
            Constraint::Text => match value {
                Value::String(_) => return None,
                _ => "must be a string".to_string(),
            },
            Constraint::NonBlank => match value.as_str() {
                Some(text) if !text.trim().is_empty() => return None,
                Some(_) => "cannot be empty".to_string(),
                None => "must be a string".to_string(),
            },
            Constraint::OneOf(allowed) => match value.as_str() {
                Some(text) if allowed.contains(&text) => return None,
                Some(text) => format!("invalid value '{}'. Valid options: {}", text, allowed.join(", ")),
                None => format!("must be one of: {}", allowed.join(", ")),
            },
            Constraint::Number { min, max } => match value.as_f64() {
                Some(number) if min.is_some_and(|min| number < min) || max.is_some_and(|max| number > max) => {
                    format!("must be between {} and {}, got {}", bound(min), bound(max), value)
                }
                Some(_) => return None,
                None => "must be a number".to_string(),
            },
            Constraint::Boolean => match value {
                Value::Bool(_) => return None,
                _ => "must be a boolean".to_string(),
            },
        };

        Some(ValidationError::new(self.field, message))
    }
}

fn bound(limit: Option<f64>) -> String {
    limit.map_or_else(|| "unbounded".to_string(), |limit| limit.to_string())
}

/// Validation error details for tool arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// Description of the validation failure.
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check `arguments` against every rule, collecting all failures.
pub fn validate_rules(arguments: &JsonObject, rules: &[FieldRule]) -> Result<(), Vec<ValidationError>> {
    let errors: Vec<ValidationError> = rules
        .iter()
        .filter_map(|rule| rule.check(arguments.get(rule.field)))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// =============================================================================
// ToolParams
// =============================================================================

/// A tool's parameter struct: schema, rules and argument normalization.
pub trait ToolParams: DeserializeOwned + Serialize + JsonSchema {
    /// Rules checked before any provider call.
    const RULES: &'static [FieldRule];

    /// JSON Schema advertised in `list_tools`, with enums inlined.
    fn input_schema() -> Arc<JsonObject> {
        let generator = schemars::r#gen::SchemaSettings::draft07()
            .with(|settings| settings.inline_subschemas = true)
            .into_generator();
        let schema = generator.into_root_schema_for::<Self>();

        match serde_json::to_value(&schema) {
            Ok(Value::Object(map)) => Arc::new(map),
            _ => Arc::new(JsonObject::new()),
        }
    }

    /// Validate raw arguments and return only the declared fields.
    fn parse_arguments(arguments: Option<JsonObject>) -> Result<JsonObject, Vec<ValidationError>> {
        let arguments = arguments.unwrap_or_default();
        validate_rules(&arguments, Self::RULES)?;

        let params: Self = serde_json::from_value(Value::Object(arguments))
            .map_err(|e| vec![ValidationError::new("arguments", e.to_string())])?;

        match serde_json::to_value(&params) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(vec![ValidationError::new("arguments", "must be an object")]),
            Err(e) => Err(vec![ValidationError::new("arguments", e.to_string())]),
        }
    }
}

const PROMPT: FieldRule = FieldRule::required("prompt", Constraint::NonBlank);

const NUM_OUTPUTS: FieldRule = FieldRule::optional(
    "num_outputs",
    Constraint::Number { min: Some(MIN_NUM_OUTPUTS as f64), max: Some(MAX_NUM_OUTPUTS as f64) },
);

const OUTPUT_QUALITY: FieldRule = FieldRule::optional(
    "output_quality",
    Constraint::Number { min: Some(MIN_OUTPUT_QUALITY as f64), max: Some(MAX_OUTPUT_QUALITY as f64) },
);

const SEED: FieldRule = FieldRule::optional("seed", Constraint::Number { min: None, max: None });

impl ToolParams for StandardImageParams {
    const RULES: &'static [FieldRule] = &[
        PROMPT,
        FieldRule::optional(
            "n",
            Constraint::Number { min: Some(MIN_IMAGE_COUNT as f64), max: Some(MAX_IMAGE_COUNT as f64) },
        ),
        FieldRule::optional("size", Constraint::OneOf(VALID_SIZES)),
        FieldRule::optional("quality", Constraint::OneOf(VALID_QUALITIES)),
        FieldRule::optional("style", Constraint::OneOf(VALID_STYLES)),
        FieldRule::optional("background", Constraint::OneOf(VALID_BACKGROUNDS)),
    ];
}

impl ToolParams for VectorImageParams {
    const RULES: &'static [FieldRule] = &[
        PROMPT,
        FieldRule::optional("size", Constraint::Text),
        FieldRule::optional("style", Constraint::OneOf(VALID_VECTOR_STYLES)),
    ];
}

impl ToolParams for FastRasterParams {
    const RULES: &'static [FieldRule] = &[
        PROMPT,
        FieldRule::optional("aspect_ratio", Constraint::Text),
        NUM_OUTPUTS,
        FieldRule::optional("output_format", Constraint::OneOf(VALID_OUTPUT_FORMATS)),
        OUTPUT_QUALITY,
        SEED,
        FieldRule::optional("go_fast", Constraint::Boolean),
    ];
}

impl ToolParams for ProRasterParams {
    const RULES: &'static [FieldRule] = &[
        PROMPT,
        FieldRule::optional("aspect_ratio", Constraint::Text),
        NUM_OUTPUTS,
        FieldRule::optional("output_format", Constraint::OneOf(VALID_OUTPUT_FORMATS)),
        OUTPUT_QUALITY,
        SEED,
        FieldRule::optional("prompt_upsampling", Constraint::Boolean),
        FieldRule::optional("disable_safety_checker", Constraint::Boolean),
    ];
}
