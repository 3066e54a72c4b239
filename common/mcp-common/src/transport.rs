//! Transport selection and serving
//!
//! Servers pick a [`Transport`] from configuration and hand themselves to
//! [`serve_stdio`] or [`serve_streamable_http`].

use std::fmt;
use std::str::FromStr;

use rmcp::{
    transport::streamable_http_server::{
        session::local::LocalSessionManager, StreamableHttpService,
    },
    ServerHandler, ServiceExt,
};

/// Path the streamable HTTP service is mounted on
pub const HTTP_MCP_PATH: &str = "/mcp";

/// How the server talks to its MCP host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transport {
    /// JSON-RPC over the process's stdin/stdout
    #[default]
    Stdio,
    /// MCP streamable HTTP on a TCP listener
    StreamableHttp,
}

impl Transport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::Stdio => "stdio",
            Transport::StreamableHttp => "streamable-http",
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised for a transport name that is neither `stdio` nor `streamable-http`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown transport: {0}. Use 'stdio' or 'streamable-http'.")]
pub struct TransportError(pub String);

impl FromStr for Transport {
    type Err = TransportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stdio" => Ok(Transport::Stdio),
            "streamable-http" => Ok(Transport::StreamableHttp),
            other => Err(TransportError(other.to_string())),
        }
    }
}

/// Serve a single MCP session over stdio until the host disconnects
pub async fn serve_stdio<S: ServerHandler>(server: S) -> anyhow::Result<()> {
    let service = server.serve(rmcp::transport::stdio()).await?;

    tracing::info!("Server running on stdio, waiting for requests...");

    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}

/// Serve MCP streamable HTTP on `host:port` until Ctrl-C
///
/// `factory` builds a fresh server for every session.
pub async fn serve_streamable_http<S, F>(factory: F, host: &str, port: u16) -> anyhow::Result<()>
where
    S: ServerHandler,
    F: Fn() -> S + Send + Sync + 'static,
{
    let service = StreamableHttpService::new(
        move || Ok(factory()),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    let router = axum::Router::new().nest_service(HTTP_MCP_PATH, service);
    let listener = tokio::net::TcpListener::bind((host, port)).await?;

    tracing::info!(
        "Server running on http://{}{}",
        listener.local_addr()?,
        HTTP_MCP_PATH
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("failed to listen for Ctrl-C: {}", e);
            }
        })
        .await?;

    tracing::info!("Server shutting down");
    Ok(())
}
