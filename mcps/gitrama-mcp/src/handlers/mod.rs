//! Handler implementations for gitrama MCP tools
//!
//! Organized by domain: commit, ask, branch, stream, repo
//!
//! Each handler builds a `gtr` argument vector, runs it through the
//! [`GtrExecutor`](crate::gtr::GtrExecutor), and formats the outcome as one
//! string. The argument builders are plain functions so they can be checked
//! without spawning anything.

mod ask;
mod branch;
mod commit;
mod repo;
mod stream;

pub use ask::*;
pub use branch::*;
pub use commit::*;
pub use repo::*;
pub use stream::*;

use mcp_common::{invalid_params, text_error, text_success, CallToolResult, McpResult};

use crate::gtr::ExecutionResult;

/// A value worth passing on: present and not blank
pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Check a value passed to gtr as a positional argument
///
/// gtr's argument parser reads a leading `-` as an option, and its
/// positionals cannot be fenced off with `--`, so such values are refused.
pub(crate) fn positional(value: &str, field: &str) -> McpResult<()> {
    let value = value.trim();
    if value.is_empty() {
        return Err(invalid_params(format!("{} must not be empty", field)));
    }
    if value.starts_with('-') {
        return Err(invalid_params(format!(
            "{} must not start with '-': {}",
            field, value
        )));
    }
    Ok(())
}

/// Append `flag value` when there is a value
pub(crate) fn push_flag(args: &mut Vec<String>, flag: &str, value: Option<&str>) {
    if let Some(value) = value {
        args.push(flag.to_string());
        args.push(value.to_string());
    }
}

/// Turn a run outcome into the text the caller sees
///
/// Output wins when there is some; a silent success gets a short
/// confirmation; a failure shows stderr, then stdout, then a generic message.
pub fn format_result(result: &ExecutionResult, confirmation: &str) -> String {
    if result.succeeded {
        if result.stdout.is_empty() {
            format!("✅ {}", confirmation)
        } else {
            result.stdout.clone()
        }
    } else {
        let message = [&result.stderr, &result.stdout]
            .into_iter()
            .find(|s| !s.is_empty())
            .map(String::as_str)
            .unwrap_or("Unknown error");
        format!("❌ Error: {}", message)
    }
}

/// Wrap [`format_result`] in a tool result, flagging failures
pub fn respond(result: &ExecutionResult, confirmation: &str) -> CallToolResult {
    let text = format_result(result, confirmation);
    if result.succeeded {
        text_success(text)
    } else {
        text_error(text)
    }
}
