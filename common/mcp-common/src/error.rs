//! Error helpers for MCP tool implementations

use rmcp::ErrorData as McpError;

/// Type alias for MCP tool results
pub type McpResult<T> = Result<T, McpError>;

/// Create an invalid params error with a message
///
/// Use this when a tool receives parameters it cannot act on, before any
/// side effect has happened.
///
/// ```rust,ignore
/// if question.trim().is_empty() {
///     return Err(invalid_params("question must not be empty"));
/// }
/// ```
pub fn invalid_params(message: impl Into<String>) -> McpError {
    McpError::invalid_params(message.into(), None)
}
