//! Tool schema validity tests.
//!
//! Every registered tool's input schema must be a draft-07 object schema
//! that declares `prompt` as required and advertises its enum sets and
//! numeric bounds.

use imagegen_mcp::params::{
    MAX_IMAGE_COUNT, MAX_NUM_OUTPUTS, MAX_OUTPUT_QUALITY, MIN_IMAGE_COUNT, MIN_NUM_OUTPUTS,
    MIN_OUTPUT_QUALITY, VALID_BACKGROUNDS, VALID_OUTPUT_FORMATS, VALID_QUALITIES, VALID_SIZES,
    VALID_STYLES, VALID_VECTOR_STYLES,
};
use serde_json::Value;

/// Validates that a JSON schema has the required structure.
fn validate_json_schema(schema: &Value) -> Result<(), String> {
    let obj = schema
        .as_object()
        .ok_or_else(|| "Schema must be an object".to_string())?;

    if obj.get("type") != Some(&Value::from("object")) {
        return Err(format!("Expected type 'object', got {:?}", obj.get("type")));
    }

    if !obj.get("properties").is_some_and(Value::is_object) {
        return Err("Properties must be an object".to_string());
    }

    Ok(())
}

/// Validates that a tool has required fields.
fn validate_tool(tool: &rmcp::model::Tool) -> Result<(), String> {
    if tool.name.is_empty() {
        return Err("Tool name cannot be empty".to_string());
    }

    if tool.description.as_deref().is_none_or(str::is_empty) {
        return Err(format!("Tool '{}' must have a description", tool.name));
    }

    let schema_value = serde_json::to_value(&*tool.input_schema)
        .map_err(|e| format!("Failed to serialize schema: {}", e))?;
    validate_json_schema(&schema_value)?;

    let required = schema_value["required"].as_array().cloned().unwrap_or_default();
    if !required.contains(&Value::from("prompt")) {
        return Err(format!("Tool '{}' must require 'prompt'", tool.name));
    }

    Ok(())
}

/// Collect every string that appears in an `enum` keyword under `schema`.
fn enum_values(schema: &Value) -> Vec<String> {
    let mut values = Vec::new();
    collect_enum_values(schema, &mut values);
    values
}

fn collect_enum_values(schema: &Value, out: &mut Vec<String>) {
    match schema {
        Value::Object(map) => {
            if let Some(Value::Array(items)) = map.get("enum") {
                out.extend(items.iter().filter_map(Value::as_str).map(str::to_string));
            }
            for value in map.values() {
                collect_enum_values(value, out);
            }
        }
        Value::Array(items) => items.iter().for_each(|item| collect_enum_values(item, out)),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imagegen_mcp::{ImageTool, tool_definitions};
    use serde_json::json;
    use std::borrow::Cow;
    use std::sync::Arc;

    fn property(tool: ImageTool, name: &str) -> Value {
        tool.input_schema()["properties"][name].clone()
    }

    #[test]
    fn test_json_schema_validation() {
        let valid_schema = json!({
            "type": "object",
            "properties": {"prompt": {"type": "string"}},
            "required": ["prompt"]
        });
        assert!(validate_json_schema(&valid_schema).is_ok());

        assert!(validate_json_schema(&json!({"type": "string"})).is_err());
        assert!(validate_json_schema(&json!({"type": "object"})).is_err());
    }

    #[test]
    fn test_tool_validation_rejects_missing_description() {
        let tool = rmcp::model::Tool {
            name: Cow::Borrowed("image-generate-test"),
            description: None,
            input_schema: Arc::new(serde_json::Map::new()),
            annotations: None,
            icons: None,
            meta: None,
            output_schema: None,
            title: None,
        };
        assert!(validate_tool(&tool).is_err());
    }

    /// All four tools are registered with valid schemas.
    #[test]
    fn test_all_tools_have_valid_schemas() {
        let tools = tool_definitions();
        let names: Vec<_> = tools.iter().map(|t| t.name.to_string()).collect();

        assert_eq!(
            names,
            vec![
                "image-generate-standard",
                "image-generate-vector",
                "image-generate-fast-raster",
                "image-generate-pro-raster",
            ]
        );

        for tool in &tools {
            validate_tool(tool).unwrap_or_else(|e| panic!("{}", e));
        }
    }

    #[test]
    fn test_schemas_are_self_contained() {
        for tool in ImageTool::ALL {
            let schema = Value::Object((*tool.input_schema()).clone());
            assert!(schema.get("definitions").is_none(), "{}", tool);
            assert!(!schema.to_string().contains("$ref"), "{}", tool);
        }
    }

    #[test]
    fn test_standard_enum_sets() {
        let cases = [
            ("size", VALID_SIZES),
            ("quality", VALID_QUALITIES),
            ("style", VALID_STYLES),
            ("background", VALID_BACKGROUNDS),
        ];

        for (field, expected) in cases {
            let values = enum_values(&property(ImageTool::Standard, field));
            assert_eq!(values, expected, "{}", field);
        }
    }

    #[test]
    fn test_replicate_enum_sets() {
        assert_eq!(
            enum_values(&property(ImageTool::Vector, "style")),
            VALID_VECTOR_STYLES
        );
        for tool in [ImageTool::FastRaster, ImageTool::ProRaster] {
            assert_eq!(
                enum_values(&property(tool, "output_format")),
                VALID_OUTPUT_FORMATS,
                "{}",
                tool
            );
        }
    }

    #[test]
    fn test_numeric_bounds_are_advertised() {
        let n = property(ImageTool::Standard, "n");
        assert_eq!(n["minimum"].as_f64(), Some(MIN_IMAGE_COUNT as f64));
        assert_eq!(n["maximum"].as_f64(), Some(MAX_IMAGE_COUNT as f64));

        for tool in [ImageTool::FastRaster, ImageTool::ProRaster] {
            let outputs = property(tool, "num_outputs");
            assert_eq!(outputs["minimum"].as_f64(), Some(MIN_NUM_OUTPUTS as f64));
            assert_eq!(outputs["maximum"].as_f64(), Some(MAX_NUM_OUTPUTS as f64));

            let quality = property(tool, "output_quality");
            assert_eq!(quality["minimum"].as_f64(), Some(MIN_OUTPUT_QUALITY as f64));
            assert_eq!(quality["maximum"].as_f64(), Some(MAX_OUTPUT_QUALITY as f64));
        }
    }

    #[test]
    fn test_vector_size_is_free_string() {
        let size = property(ImageTool::Vector, "size");
        assert!(enum_values(&size).is_empty());
        assert!(size.to_string().contains("string"));
    }
}
