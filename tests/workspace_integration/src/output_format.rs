//! Output format tests.
//!
//! Every completed tool call yields exactly one text block in a
//! success-shaped result: either the provider output as JSON text, or
//! `Error: <message>`.

use imagegen_mcp::InvocationOutcome;
use rmcp::model::{CallToolResult, RawContent};

/// Validates that a CallToolResult has the single-text-block shape.
fn validate_tool_result(result: &CallToolResult) -> Result<String, String> {
    if result.is_error == Some(true) {
        return Err("Result must not be flagged as an error".to_string());
    }

    match result.content.as_slice() {
        [content] => match &content.raw {
            RawContent::Text(text_content) => Ok(text_content.text.clone()),
            other => Err(format!("Expected text content, got {:?}", other)),
        },
        contents => Err(format!("Expected one content block, got {}", contents.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::Content;
    use serde_json::json;

    #[test]
    fn test_success_is_one_text_block() {
        let result: CallToolResult =
            InvocationOutcome::Success(json!([{"b64_json": "aGVsbG8="}])).into();
        let text = validate_tool_result(&result).unwrap();
        assert_eq!(text, r#"[{"b64_json":"aGVsbG8="}]"#);
    }

    #[test]
    fn test_failure_is_one_text_block() {
        let result: CallToolResult = InvocationOutcome::Failure("bad key".to_string()).into();
        assert_eq!(validate_tool_result(&result).unwrap(), "Error: bad key");
    }

    #[test]
    fn test_validator_rejects_other_shapes() {
        let two_blocks = CallToolResult::success(vec![Content::text("a"), Content::text("b")]);
        assert!(validate_tool_result(&two_blocks).is_err());

        let flagged = CallToolResult::error(vec![Content::text("Error: x")]);
        assert!(validate_tool_result(&flagged).is_err());

        let image = CallToolResult::success(vec![Content::image("aGVsbG8=", "image/png")]);
        assert!(validate_tool_result(&image).is_err());
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::Value;

    /// Arbitrary JSON values of the kind providers return.
    fn json_value_strategy() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
            "[a-zA-Z0-9:/._ -]{0,40}".prop_map(Value::from),
        ];
        leaf.prop_recursive(3, 24, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                prop::collection::btree_map("[a-z_]{1,10}", inner, 0..6)
                    .prop_map(|map| Value::Object(map.into_iter().collect())),
            ]
        })
    }

    proptest! {
        #[test]
        fn success_text_parses_back_to_output(output in json_value_strategy()) {
            let result: CallToolResult = InvocationOutcome::Success(output.clone()).into();
            let text = validate_tool_result(&result).map_err(TestCaseError::fail)?;
            let parsed: Value = serde_json::from_str(&text).map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert_eq!(parsed, output);
        }

        #[test]
        fn failure_text_is_prefixed_message(message in ".{0,80}") {
            let result: CallToolResult = InvocationOutcome::Failure(message.clone()).into();
            let text = validate_tool_result(&result).map_err(TestCaseError::fail)?;
            prop_assert_eq!(text, format!("Error: {}", message));
        }
    }
}
