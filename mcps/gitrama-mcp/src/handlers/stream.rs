//! Stream handler implementations

use mcp_common::{CallToolResult, McpResult};

use crate::capability::Capability;
use crate::gtr::GtrExecutor;
use crate::params::StreamSwitchParams;

use super::{positional, present, push_flag, respond};

pub fn stream_switch_args(params: &StreamSwitchParams) -> Vec<String> {
    let mut args = vec![
        "stream".to_string(),
        "switch".to_string(),
        params.name.clone(),
    ];
    push_flag(&mut args, "--description", present(params.description.as_deref()));
    args
}

/// Show the active stream
pub async fn stream_status(exec: &GtrExecutor) -> McpResult<CallToolResult> {
    let args = ["stream".to_string(), "status".to_string()];
    let result = exec.gtr(Capability::StreamStatus, &args).await;
    Ok(respond(&result, "Stream status retrieved"))
}

/// Switch to a stream, creating it if needed
pub async fn stream_switch(
    exec: &GtrExecutor,
    params: StreamSwitchParams,
) -> McpResult<CallToolResult> {
    positional(&params.name, "stream name")?;

    let result = exec
        .gtr(Capability::StreamSwitch, &stream_switch_args(&params))
        .await;
    Ok(respond(
        &result,
        &format!("Switched to stream '{}'", params.name),
    ))
}

/// List all streams in the repository
pub async fn stream_list(exec: &GtrExecutor) -> McpResult<CallToolResult> {
    let args = ["stream".to_string(), "list".to_string()];
    let result = exec.gtr(Capability::StreamList, &args).await;
    Ok(respond(&result, "Streams listed"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_without_description() {
        let params = StreamSwitchParams {
            name: "auth-refactor".into(),
            description: None,
        };
        assert_eq!(
            stream_switch_args(&params),
            ["stream", "switch", "auth-refactor"]
        );
    }

    #[test]
    fn test_switch_with_description() {
        let params = StreamSwitchParams {
            name: "payment-v2".into(),
            description: Some("Stripe migration".into()),
        };
        assert_eq!(
            stream_switch_args(&params),
            [
                "stream",
                "switch",
                "payment-v2",
                "--description",
                "Stripe migration"
            ]
        );
    }

    #[tokio::test]
    async fn test_switch_rejects_option_like_name() {
        let exec = GtrExecutor::default();
        for name in ["", "--help"] {
            let params = StreamSwitchParams {
                name: name.into(),
                description: None,
            };
            assert!(stream_switch(&exec, params).await.is_err(), "name {:?}", name);
        }
    }
}
