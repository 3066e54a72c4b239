//! Branch, pull request, and changelog handler implementations

use mcp_common::{CallToolResult, McpResult};

use crate::capability::Capability;
use crate::gtr::GtrExecutor;
use crate::params::{BranchParams, ChangelogParams, PrParams};

use super::{positional, present, push_flag, respond};

pub fn branch_args(params: &BranchParams) -> Vec<String> {
    let mut args = vec!["branch".to_string(), params.description.clone()];

    if !params.create {
        args.push("--no-create".to_string());
    }
    push_flag(&mut args, "--base", present(params.base.as_deref()));
    push_flag(&mut args, "--model", present(params.model.as_deref()));

    args
}

pub fn pr_args(params: &PrParams) -> Vec<String> {
    let mut args = vec!["pr".to_string()];
    push_flag(&mut args, "--base", present(params.base.as_deref()));
    push_flag(&mut args, "--model", present(params.model.as_deref()));
    args
}

pub fn changelog_args(params: &ChangelogParams) -> Vec<String> {
    let mut args = vec!["changelog".to_string()];
    push_flag(&mut args, "--since", present(params.since.as_deref()));
    push_flag(&mut args, "--until", present(params.until.as_deref()));
    push_flag(&mut args, "--format", present(Some(params.format.as_str())));
    push_flag(&mut args, "--model", present(params.model.as_deref()));
    args
}

/// Generate a branch name from a task description, creating it unless told not to
pub async fn branch(exec: &GtrExecutor, params: BranchParams) -> McpResult<CallToolResult> {
    positional(&params.description, "description")?;

    let confirmation = if params.create {
        "Branch created"
    } else {
        "Branch name suggested"
    };

    let result = exec.gtr(Capability::Branch, &branch_args(&params)).await;
    Ok(respond(&result, confirmation))
}

/// Generate a pull request description for the current branch
pub async fn pr(exec: &GtrExecutor, params: PrParams) -> McpResult<CallToolResult> {
    let result = exec.gtr(Capability::Pr, &pr_args(&params)).await;
    Ok(respond(&result, "PR description generated"))
}

/// Generate a changelog from commit history
pub async fn changelog(exec: &GtrExecutor, params: ChangelogParams) -> McpResult<CallToolResult> {
    let result = exec
        .gtr(Capability::Changelog, &changelog_args(&params))
        .await;
    Ok(respond(&result, "Changelog generated"))
}
