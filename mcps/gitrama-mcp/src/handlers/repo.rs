//! Repository-wide handler implementations

use mcp_common::{CallToolResult, McpResult};

use crate::capability::Capability;
use crate::gtr::GtrExecutor;

use super::respond;

/// Check that gtr is installed, configured, and can reach its AI provider
pub async fn health(exec: &GtrExecutor) -> McpResult<CallToolResult> {
    let result = exec.gtr(Capability::Health, &["health".to_string()]).await;
    Ok(respond(&result, "Health check passed"))
}

/// Summarize repository state as gtr sees it
pub async fn status(exec: &GtrExecutor) -> McpResult<CallToolResult> {
    let result = exec.gtr(Capability::Status, &["status".to_string()]).await;
    Ok(respond(&result, "Status retrieved"))
}
