//! Input parameter validation tests.
//!
//! Any tool invocation with invalid parameters must come back as an MCP
//! `invalid_params` error naming the failing fields, without contacting a
//! provider.

use imagegen_mcp::{ImageGenServer, OpenAiClient, ReplicateClient};
use rmcp::model::JsonObject;
use serde_json::Value;

/// A server whose providers are unreachable, so any call that slips past
/// validation fails loudly instead of hitting a real API.
pub fn offline_server() -> ImageGenServer {
    let http = reqwest::Client::new();
    ImageGenServer::with_clients(
        OpenAiClient::with_base_url(http.clone(), "sk-test", "http://127.0.0.1:1"),
        ReplicateClient::with_base_url(http, "r8-test", "http://127.0.0.1:1"),
    )
}

fn object(value: Value) -> Option<JsonObject> {
    value.as_object().cloned()
}

/// Field names listed in an `invalid_params` error's data payload.
fn error_fields(data: Option<&Value>) -> Vec<String> {
    data.and_then(|d| d["errors"].as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["field"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use imagegen_mcp::ImageTool;
    use rmcp::model::ErrorCode;
    use serde_json::json;

    /// Test that the standard tool rejects an out-of-range count.
    #[tokio::test]
    async fn test_standard_rejects_out_of_range_count() {
        let err = offline_server()
            .invoke("image-generate-standard", object(json!({"prompt": "A cat", "n": 0})))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(error_fields(err.data.as_ref()), vec!["n"]);
    }

    /// Test that the vector tool rejects an unknown style.
    #[tokio::test]
    async fn test_vector_rejects_unknown_style() {
        let err = offline_server()
            .invoke("image-generate-vector", object(json!({"prompt": "A logo", "style": "pixel"})))
            .await
            .unwrap_err();

        assert_eq!(error_fields(err.data.as_ref()), vec!["style"]);
        assert!(err.message.contains("line_art"), "{}", err.message);
    }

    /// Test that validation collects multiple errors.
    #[tokio::test]
    async fn test_validation_collects_multiple_errors() {
        let err = offline_server()
            .invoke(
                "image-generate-fast-raster",
                object(json!({
                    "prompt": "   ",
                    "num_outputs": 9,
                    "output_format": "bmp",
                    "output_quality": 101,
                    "go_fast": "yes"
                })),
            )
            .await
            .unwrap_err();

        assert_eq!(
            error_fields(err.data.as_ref()),
            vec!["prompt", "num_outputs", "output_format", "output_quality", "go_fast"]
        );
    }

    /// Test that absent arguments are treated as an empty object.
    #[tokio::test]
    async fn test_missing_arguments_report_prompt() {
        for tool in ImageTool::ALL {
            let err = offline_server().invoke(tool.name(), None).await.unwrap_err();
            assert_eq!(error_fields(err.data.as_ref()), vec!["prompt"], "{}", tool);
        }
    }

    /// Test that valid parameters pass validation.
    #[test]
    fn test_valid_params_pass_validation() {
        let parsed = ImageTool::ProRaster
            .parse_arguments(object(json!({
                "prompt": "A beautiful sunset",
                "aspect_ratio": "3:2",
                "num_outputs": 1,
                "output_format": "webp",
                "output_quality": 80,
                "seed": 42,
                "prompt_upsampling": false
            })))
            .unwrap();

        assert_eq!(parsed.len(), 7);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use imagegen_mcp::ImageTool;
    use proptest::prelude::*;
    use serde_json::json;

    /// Strategy to generate valid prompts
    fn valid_prompt_strategy() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 ]{1,100}".prop_filter("Must not be empty", |s| !s.trim().is_empty())
    }

    /// Strategy to generate invalid (empty/whitespace) prompts
    fn invalid_prompt_strategy() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(json!("")),
            Just(json!("   ")),
            Just(json!("\t\n")),
            Just(Value::Null),
            any::<i64>().prop_map(Value::from),
            any::<bool>().prop_map(Value::from),
        ]
    }

    fn tool_strategy() -> impl Strategy<Value = ImageTool> {
        prop::sample::select(ImageTool::ALL.to_vec())
    }

    /// Arbitrary extra keys, none of which any tool declares.
    fn undeclared_key_strategy() -> impl Strategy<Value = String> {
        "x_[a-z]{1,10}"
    }

    proptest! {
        #[test]
        fn valid_prompts_pass_validation(tool in tool_strategy(), prompt in valid_prompt_strategy()) {
            let parsed = tool.parse_arguments(object(json!({"prompt": prompt.clone()})));
            prop_assert!(parsed.is_ok(), "{} rejected {:?}", tool, prompt);
            let parsed = parsed.unwrap();
            prop_assert_eq!(parsed["prompt"].as_str(), Some(prompt.as_str()));
        }

        #[test]
        fn invalid_prompts_fail_validation(tool in tool_strategy(), prompt in invalid_prompt_strategy()) {
            let errors = tool.parse_arguments(object(json!({"prompt": prompt}))).unwrap_err();
            prop_assert!(errors.iter().any(|e| e.field == "prompt"));
        }

        #[test]
        fn undeclared_keys_are_dropped(
            tool in tool_strategy(),
            key in undeclared_key_strategy(),
            value in any::<i64>(),
        ) {
            let mut arguments = JsonObject::new();
            arguments.insert("prompt".to_string(), json!("a fox"));
            arguments.insert(key.clone(), json!(value));

            let parsed = tool.parse_arguments(Some(arguments)).unwrap();
            prop_assert!(!parsed.contains_key(&key));
            prop_assert_eq!(parsed.len(), 1);
        }

        #[test]
        fn standard_count_outside_range_fails(n in prop_oneof![i64::MIN..1, 11i64..=i64::MAX]) {
            let errors = ImageTool::Standard
                .parse_arguments(object(json!({"prompt": "x", "n": n})))
                .unwrap_err();
            prop_assert_eq!(errors.len(), 1);
            prop_assert_eq!(errors[0].field.as_str(), "n");
        }
    }
}
