//! Ask handler implementation

use mcp_common::{invalid_params, CallToolResult, McpResult};

use crate::capability::Capability;
use crate::gtr::GtrExecutor;
use crate::params::AskParams;

use super::{present, push_flag, respond};

pub fn ask_args(params: &AskParams) -> Vec<String> {
    let mut args = vec![
        "ask".to_string(),
        "--query".to_string(),
        params.question.clone(),
    ];

    let scope = present(Some(params.scope.as_str())).filter(|s| *s != "auto");
    push_flag(&mut args, "--scope", scope);
    push_flag(&mut args, "--stream", present(params.stream.as_deref()));
    if params.deep {
        args.push("--deep".to_string());
    }
    push_flag(&mut args, "--model", present(params.model.as_deref()));

    args
}

/// Answer a natural-language question about the repository
pub async fn ask(exec: &GtrExecutor, params: AskParams) -> McpResult<CallToolResult> {
    if present(Some(params.question.as_str())).is_none() {
        return Err(invalid_params("question must not be empty"));
    }

    let result = exec.gtr(Capability::Ask, &ask_args(&params)).await;
    Ok(respond(&result, "Question answered"))
}
