//! Gitrama MCP Server
//!
//! Exposes the `gtr` CLI (commit messages, branch names, PR descriptions,
//! changelogs, streams) as MCP tools.
//!
//! # Usage
//!
//! Configure in your MCP client:
//! ```json
//! {
//!   "mcpServers": {
//!     "gitrama": { "command": "gitrama-mcp" }
//!   }
//! }
//! ```
//!
//! Or serve over HTTP:
//! ```bash
//! GTR_MCP_TRANSPORT=streamable-http GTR_MCP_PORT=8765 gitrama-mcp
//! ```

use clap::Parser;
use gitrama_mcp::config::Config;
use gitrama_mcp::GitramaMcpServer;
use mcp_common::Transport;

const SETUP_GUIDE: &str = r#"
Gitrama MCP Server

This server speaks MCP over stdio and is meant to be launched by an
MCP-compatible AI client, not run directly in a terminal.

Quick setup:

  Cursor         -> add to .cursor/mcp.json
  Claude Desktop -> add to claude_desktop_config.json
  Claude Code    -> claude mcp add gitrama -- gitrama-mcp
  Windsurf       -> add to mcp_config.json
  VS Code        -> add to .vscode/mcp.json

Example config:
  {
    "mcpServers": {
      "gitrama": {
        "command": "gitrama-mcp",
        "env": { "GTR_CWD": "/path/to/repo" }
      }
    }
  }

To serve over HTTP instead:
  GTR_MCP_TRANSPORT=streamable-http GTR_MCP_PORT=8765 gitrama-mcp

Requires the gtr CLI: pip install gitrama
Docs: https://gitrama.ai/mcp
"#;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    let transport = match config.transport() {
        Ok(transport) => transport,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if transport == Transport::Stdio && mcp_common::stdin_is_terminal() {
        println!("{}", SETUP_GUIDE);
        return Ok(());
    }

    mcp_common::init_tracing("gitrama_mcp")?;

    tracing::info!(%transport, "Starting gitrama MCP Server");

    let runner = config.runner();
    match transport {
        Transport::Stdio => mcp_common::serve_stdio(GitramaMcpServer::with_config(runner)).await,
        Transport::StreamableHttp => {
            mcp_common::serve_streamable_http(
                move || GitramaMcpServer::with_config(runner.clone()),
                &config.host,
                config.port,
            )
            .await
        }
    }
}
