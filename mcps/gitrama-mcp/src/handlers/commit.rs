//! Commit handler implementations

use mcp_common::{text_error, CallToolResult, McpResult};
use tracing::{debug, warn};

use crate::capability::Capability;
use crate::gtr::GtrExecutor;
use crate::params::{CommitParams, CommitQualityParams, StageAndCommitParams};

use super::{present, push_flag, respond};

/// `gtr commit` arguments; always auto-confirms since there is no terminal
pub fn commit_args(params: &CommitParams) -> Vec<String> {
    let mut args = vec!["commit".to_string()];

    match present(params.message.as_deref()) {
        Some(message) => push_flag(&mut args, "-m", Some(message)),
        None => push_flag(&mut args, "--type", present(Some(params.message_type.as_str()))),
    }
    push_flag(&mut args, "--context", present(params.context.as_deref()));
    push_flag(&mut args, "--model", present(params.model.as_deref()));

    args.push("-y".to_string());
    args
}

/// `git add` arguments for a files selector: `all` or whitespace-separated paths
pub fn staging_args(files: &str) -> Vec<String> {
    let files = files.trim();
    if files.is_empty() || files.eq_ignore_ascii_case("all") {
        return vec!["add".to_string(), "-A".to_string()];
    }

    let mut args = vec!["add".to_string(), "--".to_string()];
    args.extend(files.split_whitespace().map(str::to_string));
    args
}

pub fn commit_quality_args(params: &CommitQualityParams) -> Vec<String> {
    vec![
        "commit".to_string(),
        "--quality".to_string(),
        "--count".to_string(),
        params.clamped_count().to_string(),
    ]
}

/// Generate a commit message for staged changes and commit
pub async fn commit(exec: &GtrExecutor, params: CommitParams) -> McpResult<CallToolResult> {
    let result = exec.gtr(Capability::Commit, &commit_args(&params)).await;
    Ok(respond(&result, "Commit created"))
}

/// Stage files with git, then commit with gtr
///
/// Only a staging step that never started stops the commit. There is no
/// rollback of the staging if the commit then fails.
pub async fn stage_and_commit(
    exec: &GtrExecutor,
    params: StageAndCommitParams,
) -> McpResult<CallToolResult> {
    match exec.git(&staging_args(&params.files)).await {
        Ok(staged) if staged.succeeded => debug!("files staged"),
        Ok(staged) => warn!(
            exit_code = staged.exit_code,
            stderr = %staged.stderr,
            "git add failed, committing whatever is staged"
        ),
        Err(err) if err.is_launch_failure() => {
            return Ok(text_error(format!("❌ Failed to stage files: {}", err)));
        }
        Err(err) => warn!("staging did not finish: {}", err),
    }

    let result = exec
        .gtr(Capability::StageAndCommit, &commit_args(&params.commit()))
        .await;
    Ok(respond(&result, "Commit created"))
}

/// Score recent commit messages
pub async fn commit_quality(
    exec: &GtrExecutor,
    params: CommitQualityParams,
) -> McpResult<CallToolResult> {
    let result = exec
        .gtr(Capability::CommitQuality, &commit_quality_args(&params))
        .await;
    Ok(respond(&result, "Commit quality analysis complete"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn commit_params(value: serde_json::Value) -> CommitParams {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_commit_defaults() {
        let args = commit_args(&commit_params(json!({})));
        assert_eq!(args, ["commit", "--type", "conventional", "-y"]);
    }

    #[test]
    fn test_commit_with_context_and_model() {
        let args = commit_args(&commit_params(json!({
            "message_type": "detailed",
            "context": "fixing auth bug",
            "model": "gpt-4o",
        })));
        assert_eq!(
            args,
            [
                "commit",
                "--type",
                "detailed",
                "--context",
                "fixing auth bug",
                "--model",
                "gpt-4o",
                "-y"
            ]
        );
    }

    #[test]
    fn test_commit_with_explicit_message_skips_type() {
        let args = commit_args(&commit_params(json!({ "message": "fix: typo in README" })));
        assert_eq!(args, ["commit", "-m", "fix: typo in README", "-y"]);
    }

    #[test]
    fn test_commit_blank_values_are_omitted() {
        let args = commit_args(&commit_params(json!({
            "message_type": "",
            "message": " ",
            "context": "",
            "model": "",
        })));
        assert_eq!(args, ["commit", "-y"]);
    }

    #[test]
    fn test_staging_all() {
        assert_eq!(staging_args("all"), ["add", "-A"]);
        assert_eq!(staging_args("ALL"), ["add", "-A"]);
        assert_eq!(staging_args(""), ["add", "-A"]);
    }

    #[test]
    fn test_staging_paths() {
        assert_eq!(
            staging_args("src/auth.rs  tests/auth.rs"),
            ["add", "--", "src/auth.rs", "tests/auth.rs"]
        );
        assert_eq!(staging_args("."), ["add", "--", "."]);
    }

    #[test]
    fn test_staging_path_that_looks_like_a_flag() {
        assert_eq!(staging_args("--force"), ["add", "--", "--force"]);
    }

    #[test]
    fn test_commit_quality_args() {
        let params = CommitQualityParams { count: 200 };
        assert_eq!(
            commit_quality_args(&params),
            ["commit", "--quality", "--count", "50"]
        );
    }
}
