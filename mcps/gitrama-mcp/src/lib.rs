//! Gitrama MCP Library
//!
//! MCP-compatible tools for AI-assisted Git workflows via the `gtr` CLI.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use gitrama_mcp::GitramaMcpServer;
//! use mcp_common::EmbeddableMcp;
//!
//! let server = GitramaMcpServer::new();
//! let result = server
//!     .call_tool("gitrama_stream_list", serde_json::json!({}))
//!     .await?;
//! ```
//!
//! # Features
//! - Commits: Generate, stage-and-commit, quality report
//! - Insight: Ask questions, branch naming, PR descriptions, changelogs
//! - Streams: Status, switch, list
//! - Health and status checks
//!
//! # Requirements
//! - `gtr` CLI installed (`pip install gitrama`)

pub mod capability;
pub mod config;
pub mod gtr;
pub mod handlers;
pub mod params;
pub mod server;

// Re-export main server type
pub use capability::Capability;
pub use server::GitramaMcpServer;

// Re-export parameter types for direct API usage
pub use params::*;
