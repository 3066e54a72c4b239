//! Result helpers for MCP tool responses
//!
//! Tools that wrap a CLI answer with a single text block. A failed command
//! is still a normal tool result, flagged with `is_error` so the host can
//! tell the two apart without parsing the text.

use rmcp::model::{CallToolResult, Content};

/// Create a successful plain text response
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Create a plain text response flagged as a tool-level error
pub fn text_error(text: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(text.into())])
}

/// The first text block of a tool result, if there is one
pub fn text_of(result: &CallToolResult) -> Option<&str> {
    result
        .content
        .iter()
        .find_map(|content| content.as_text())
        .map(|text| text.text.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_success() {
        let result = text_success("hello world");
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), Some("hello world"));
    }

    #[test]
    fn test_text_error() {
        let result = text_error("boom");
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(text_of(&result), Some("boom"));
    }

    #[test]
    fn test_text_of_empty() {
        let result = CallToolResult::success(vec![]);
        assert_eq!(text_of(&result), None);
    }
}
