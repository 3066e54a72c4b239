//! MCP Server implementation
//!
//! This module defines the MCP server that exposes gitrama CLI operations
//! as tools. Handler implementations are in the handlers/ module.
//!
//! Tools are reachable two ways: through the rmcp [`ToolRouter`] when
//! served over a transport, and through [`EmbeddableMcp::call_tool`] for
//! in-process callers. Both land on the same handler functions.

use mcp_common::{async_trait, EmbeddableError, EmbeddableMcp, EmbeddableResult, Tool};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};
use serde_json::Value;

use crate::capability::Capability;
use crate::gtr::{GtrExecutor, RunnerConfig};
use crate::handlers;
use crate::params::*;

/// Name the server reports to MCP hosts
pub const SERVER_NAME: &str = "gitrama";

const INSTRUCTIONS: &str = "AI-powered Git intelligence: smart commits, branch naming, \
    PR descriptions, changelogs, and stream-based workflow management. \
    Requires the `gtr` CLI to be installed (pip install gitrama).";

/// The main gitrama MCP Server
#[derive(Clone)]
pub struct GitramaMcpServer {
    executor: GtrExecutor,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Commit Tools
// ============================================================================

#[tool_router(router = commit_tool_router)]
impl GitramaMcpServer {
    #[tool(
        description = "Generate an AI-powered commit message for the currently staged changes and commit them. Stage files first, or use gitrama_stage_and_commit"
    )]
    async fn gitrama_commit(
        &self,
        Parameters(params): Parameters<CommitParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::commit(&self.executor, params).await
    }

    #[tool(
        description = "Stage files ('all' or space-separated paths) with git, then create an AI-powered commit in one step"
    )]
    async fn gitrama_stage_and_commit(
        &self,
        Parameters(params): Parameters<StageAndCommitParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::stage_and_commit(&self.executor, params).await
    }

    #[tool(
        description = "Score recent commit messages on clarity, specificity, and conventional format, with suggestions"
    )]
    async fn gitrama_commit_quality(
        &self,
        Parameters(params): Parameters<CommitQualityParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::commit_quality(&self.executor, params).await
    }
}

// ============================================================================
// Repository Intelligence Tools
// ============================================================================

#[tool_router(router = insight_tool_router)]
impl GitramaMcpServer {
    #[tool(
        description = "Ask a natural-language question about the repository (ownership, history, risk, recent changes) and get an AI answer based on commits, blame, and diffs"
    )]
    async fn gitrama_ask(
        &self,
        Parameters(params): Parameters<AskParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::ask(&self.executor, params).await
    }

    #[tool(
        description = "Generate a conventional branch name (feat/, fix/, chore/...) from a task description and create it, or only suggest it when create is false"
    )]
    async fn gitrama_branch(
        &self,
        Parameters(params): Parameters<BranchParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::branch(&self.executor, params).await
    }

    #[tool(
        description = "Generate a pull request title and description from the diff between the current branch and its base"
    )]
    async fn gitrama_pr(
        &self,
        Parameters(params): Parameters<PrParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::pr(&self.executor, params).await
    }

    #[tool(
        description = "Generate a changelog from commit history, grouped by change type. Useful for release notes"
    )]
    async fn gitrama_changelog(
        &self,
        Parameters(params): Parameters<ChangelogParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::changelog(&self.executor, params).await
    }

    #[tool(description = "Check that the gtr CLI is installed and configured")]
    async fn gitrama_health(
        &self,
        Parameters(_): Parameters<EmptyParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::health(&self.executor).await
    }

    #[tool(description = "Show repository status as seen by gitrama, including the active stream")]
    async fn gitrama_status(
        &self,
        Parameters(_): Parameters<EmptyParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::status(&self.executor).await
    }
}

// ============================================================================
// Stream Tools
// ============================================================================

#[tool_router(router = stream_tool_router)]
impl GitramaMcpServer {
    #[tool(
        description = "Show the current gitrama stream (workflow context): its name, description, and branch"
    )]
    async fn gitrama_stream_status(
        &self,
        Parameters(_): Parameters<EmptyParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::stream_status(&self.executor).await
    }

    #[tool(
        description = "Switch to a gitrama stream (workflow context), creating it if it does not exist"
    )]
    async fn gitrama_stream_switch(
        &self,
        Parameters(params): Parameters<StreamSwitchParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::stream_switch(&self.executor, params).await
    }

    #[tool(description = "List all gitrama streams in the repository; the active one is highlighted")]
    async fn gitrama_stream_list(
        &self,
        Parameters(_): Parameters<EmptyParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::stream_list(&self.executor).await
    }
}

// ============================================================================
// Router Composition & Server Initialization
// ============================================================================

impl GitramaMcpServer {
    pub fn new() -> Self {
        Self::with_config(RunnerConfig::default())
    }

    pub fn with_config(config: RunnerConfig) -> Self {
        Self {
            executor: GtrExecutor::new(config),
            tool_router: Self::commit_tool_router()
                + Self::insight_tool_router()
                + Self::stream_tool_router(),
        }
    }

    pub fn executor(&self) -> &GtrExecutor {
        &self.executor
    }

    /// Dispatch a capability with JSON parameters
    pub async fn dispatch(
        &self,
        capability: Capability,
        params: Value,
    ) -> EmbeddableResult<CallToolResult> {
        let exec = &self.executor;
        let result = match capability {
            Capability::Commit => handlers::commit(exec, serde_json::from_value(params)?).await,
            Capability::StageAndCommit => {
                handlers::stage_and_commit(exec, serde_json::from_value(params)?).await
            }
            Capability::CommitQuality => {
                handlers::commit_quality(exec, serde_json::from_value(params)?).await
            }
            Capability::Ask => handlers::ask(exec, serde_json::from_value(params)?).await,
            Capability::Branch => handlers::branch(exec, serde_json::from_value(params)?).await,
            Capability::Pr => handlers::pr(exec, serde_json::from_value(params)?).await,
            Capability::Changelog => {
                handlers::changelog(exec, serde_json::from_value(params)?).await
            }
            Capability::StreamStatus => handlers::stream_status(exec).await,
            Capability::StreamSwitch => {
                handlers::stream_switch(exec, serde_json::from_value(params)?).await
            }
            Capability::StreamList => handlers::stream_list(exec).await,
            Capability::Health => handlers::health(exec).await,
            Capability::Status => handlers::status(exec).await,
        };
        Ok(result?)
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for GitramaMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl EmbeddableMcp for GitramaMcpServer {
    fn server_name(&self) -> &str {
        SERVER_NAME
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        let capability: Capability = name
            .parse()
            .map_err(|_| EmbeddableError::ToolNotFound(name.to_string()))?;
        self.dispatch(capability, params).await
    }

    fn server_version(&self) -> Option<&str> {
        Some(env!("CARGO_PKG_VERSION"))
    }
}

impl Default for GitramaMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_capability_is_routed() {
        let server = GitramaMcpServer::new();
        let routed: HashSet<String> = server
            .list_tools()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        let expected: HashSet<String> = Capability::ALL
            .iter()
            .map(|c| c.tool_name().to_string())
            .collect();
        assert_eq!(routed, expected);
    }

    #[test]
    fn test_server_info() {
        use rmcp::ServerHandler;

        let info = GitramaMcpServer::new().get_info();
        assert_eq!(info.server_info.name, SERVER_NAME);
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.unwrap().contains("gtr"));
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let server = GitramaMcpServer::new();
        let result = server.call_tool("gitrama_rebase", serde_json::json!({})).await;
        assert!(matches!(result, Err(EmbeddableError::ToolNotFound(_))));
    }

    #[tokio::test]
    async fn test_missing_required_param() {
        let server = GitramaMcpServer::new();
        let result = server
            .call_tool("gitrama_ask", serde_json::json!({ "scope": "full" }))
            .await;
        assert!(matches!(result, Err(EmbeddableError::InvalidParams(_))));
    }
}
