//! Embeddable MCP trait for in-process execution
//!
//! [`EmbeddableMcp`] lets a host call a server's tools directly, without a
//! transport in between. The same handlers run as over stdio or HTTP.
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//! use gitrama_mcp::GitramaMcpServer;
//!
//! let server = GitramaMcpServer::new();
//! let names: Vec<_> = server.list_tools().into_iter().map(|t| t.name).collect();
//! let result = server
//!     .call_tool("gitrama_branch", serde_json::json!({ "description": "add login" }))
//!     .await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

/// Error type for embeddable MCP operations
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    /// No tool with this name is registered
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// Parameters did not deserialize into the tool's parameter type
    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] serde_json::Error),

    /// The tool rejected the call with an MCP error
    #[error("mcp error: {0}")]
    McpError(String),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        EmbeddableError::McpError(err.message.to_string())
    }
}

/// Result type for embeddable MCP operations
pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// Trait for MCP servers that can be executed in-process
///
/// Implementations must be `Send + Sync`; hosts may issue concurrent calls.
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Server name, matching the one used in MCP client configuration
    fn server_name(&self) -> &str;

    /// All tools with their descriptions and input schemas
    fn list_tools(&self) -> Vec<Tool>;

    /// Execute a tool by name with a JSON object of parameters
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    /// Server version, if available
    fn server_version(&self) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoServer;

    #[async_trait]
    impl EmbeddableMcp for EchoServer {
        fn server_name(&self) -> &str {
            "echo"
        }

        fn list_tools(&self) -> Vec<Tool> {
            vec![]
        }

        async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
            if name != "echo" {
                return Err(EmbeddableError::ToolNotFound(name.to_string()));
            }
            let text: String = serde_json::from_value(params)?;
            Ok(crate::text_success(text))
        }
    }

    #[tokio::test]
    async fn test_call_known_tool() {
        let result = EchoServer
            .call_tool("echo", serde_json::json!("hi"))
            .await
            .unwrap();
        assert_eq!(crate::text_of(&result), Some("hi"));
    }

    #[tokio::test]
    async fn test_call_unknown_tool() {
        let result = EchoServer.call_tool("unknown", serde_json::json!({})).await;
        assert!(matches!(result, Err(EmbeddableError::ToolNotFound(_))));
    }

    #[tokio::test]
    async fn test_bad_params() {
        let result = EchoServer.call_tool("echo", serde_json::json!(42)).await;
        assert!(matches!(result, Err(EmbeddableError::InvalidParams(_))));
    }

    #[test]
    fn test_default_version() {
        assert_eq!(EchoServer.server_version(), None);
    }
}
