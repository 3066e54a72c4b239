//! MCP Common - Shared plumbing for MCP servers
//!
//! - **Initialization**: [`init_tracing`] and terminal detection for direct runs
//! - **Transports**: [`Transport`] selection plus stdio and streamable HTTP serving
//! - **Results**: Helpers for building and reading `CallToolResult` text responses
//! - **Errors**: MCP error shorthands
//! - **Embeddable**: [`EmbeddableMcp`] trait for in-process tool dispatch
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::{init_tracing, serve_stdio, Transport};
//!
//! init_tracing("my_mcp")?;
//! match "stdio".parse::<Transport>()? {
//!     Transport::Stdio => serve_stdio(MyServer::new()).await?,
//!     Transport::StreamableHttp => serve_streamable_http(MyServer::new, "127.0.0.1", 8765).await?,
//! }
//! ```

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;
pub mod transport;

// Re-export commonly used items at crate root
pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{invalid_params, McpResult};
pub use init::{init_tracing, stdin_is_terminal};
pub use result::{text_error, text_of, text_success};
pub use transport::{serve_stdio, serve_streamable_http, Transport, TransportError};

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

// Re-export async_trait for implementing EmbeddableMcp
pub use async_trait::async_trait;
