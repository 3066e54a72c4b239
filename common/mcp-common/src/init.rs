//! Server initialization utilities
//!
//! Tracing setup shared by every server binary, and the terminal check
//! used to refuse interactive stdio sessions.

use std::io::IsTerminal;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging for MCP servers
///
/// Logs go to stderr because stdout carries the MCP protocol when serving
/// over stdio. Filtering honors `RUST_LOG`, with `<crate_name>=info` added
/// as the baseline directive.
///
/// Set `LOG_FORMAT=json` for structured JSON output. Default is
/// human-readable text without ANSI colors.
///
/// ```rust,ignore
/// mcp_common::init_tracing("gitrama_mcp")?;
/// ```
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let directive = format!("{}=info", crate_name);
    let filter = EnvFilter::from_default_env().add_directive(directive.parse()?);

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

/// Whether stdin is attached to an interactive terminal
///
/// An MCP host always connects stdin to a pipe. A terminal on stdin means a
/// person launched the binary by hand, and a stdio server would sit there
/// waiting for JSON-RPC that never comes.
pub fn stdin_is_terminal() -> bool {
    is_interactive(&std::io::stdin())
}

fn is_interactive(stream: &impl IsTerminal) -> bool {
    stream.is_terminal()
}
