//! Result envelopes handed back to the MCP transport.
//!
//! Tools and resources share the text rendering. Only tool failures carry an
//! explicit error flag; a resource read has no error channel, so a failed read
//! returns the error text as the resource body.

use std::fmt::Display;

use rmcp::model::{CallToolResult, Content, ReadResourceResult, ResourceContents};
use serde_json::Value as JsonValue;

pub fn render_json(value: &JsonValue) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

pub fn error_text(err: &impl Display) -> String {
    format!("Error: {err}")
}

pub fn tool_success(value: &JsonValue) -> CallToolResult {
    CallToolResult::success(vec![Content::text(render_json(value))])
}

pub fn tool_failure(err: &impl Display) -> CallToolResult {
    CallToolResult::error(vec![Content::text(error_text(err))])
}

pub fn resource_result<E: Display>(uri: &str, outcome: Result<JsonValue, E>) -> ReadResourceResult {
    let text = match outcome {
        Ok(value) => render_json(&value),
        Err(e) => error_text(&e),
    };
    ReadResourceResult {
        contents: vec![ResourceContents::text(text, uri)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::CmsError;
    use serde_json::json;

    fn as_json<T: serde::Serialize>(v: &T) -> JsonValue {
        serde_json::to_value(v).unwrap()
    }

    #[test]
    fn success_is_pretty_printed() {
        let out = as_json(&tool_success(&json!({"id": "abc123"})));
        assert_eq!(out["content"][0]["type"], "text");
        assert_eq!(out["content"][0]["text"], "{\n  \"id\": \"abc123\"\n}");
        assert_ne!(out["isError"], json!(true));
    }

    #[test]
    fn tool_failure_sets_error_flag() {
        let err = CmsError::Remote { status: 500, reason: "Internal Server Error".into() };
        let out = as_json(&tool_failure(&err));
        assert_eq!(out["isError"], json!(true));
        let text = out["content"][0]["text"].as_str().unwrap();
        assert_eq!(text, "Error: microCMS API error: 500 Internal Server Error");
    }

    #[test]
    fn resource_failure_is_plain_body() {
        let err = CmsError::Remote { status: 404, reason: "Not Found".into() };
        let out = as_json(&resource_result::<CmsError>("microcms://blog/x", Err(err)));
        assert_eq!(out["contents"][0]["uri"], "microcms://blog/x");
        assert!(out["contents"][0]["text"].as_str().unwrap().contains("404"));
        assert!(out.get("isError").is_none());
    }

    #[test]
    fn resource_success_matches_tool_rendering() {
        let payload = json!({"contents": [], "totalCount": 0});
        let res = as_json(&resource_result::<CmsError>("microcms://blog", Ok(payload.clone())));
        let tool = as_json(&tool_success(&payload));
        assert_eq!(res["contents"][0]["text"], tool["content"][0]["text"]);
    }
}
