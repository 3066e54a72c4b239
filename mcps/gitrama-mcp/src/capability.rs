//! The set of tools this server exposes
//!
//! Each [`Capability`] is one MCP tool backed by one `gtr` subcommand
//! (stage-and-commit also runs `git add` first).

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Commit,
    StageAndCommit,
    CommitQuality,
    Ask,
    Branch,
    Pr,
    Changelog,
    StreamStatus,
    StreamSwitch,
    StreamList,
    Health,
    Status,
}

impl Capability {
    pub const ALL: [Capability; 12] = [
        Capability::Commit,
        Capability::StageAndCommit,
        Capability::CommitQuality,
        Capability::Ask,
        Capability::Branch,
        Capability::Pr,
        Capability::Changelog,
        Capability::StreamStatus,
        Capability::StreamSwitch,
        Capability::StreamList,
        Capability::Health,
        Capability::Status,
    ];

    /// MCP tool name
    pub fn tool_name(&self) -> &'static str {
        match self {
            Capability::Commit => "gitrama_commit",
            Capability::StageAndCommit => "gitrama_stage_and_commit",
            Capability::CommitQuality => "gitrama_commit_quality",
            Capability::Ask => "gitrama_ask",
            Capability::Branch => "gitrama_branch",
            Capability::Pr => "gitrama_pr",
            Capability::Changelog => "gitrama_changelog",
            Capability::StreamStatus => "gitrama_stream_status",
            Capability::StreamSwitch => "gitrama_stream_switch",
            Capability::StreamList => "gitrama_stream_list",
            Capability::Health => "gitrama_health",
            Capability::Status => "gitrama_status",
        }
    }

    /// Whether the subcommand gets the longer timeout
    pub fn is_long_running(&self) -> bool {
        matches!(self, Capability::Ask)
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tool_name())
    }
}

/// Raised for a tool name this server does not expose
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tool: {0}")]
pub struct UnknownCapability(pub String);

impl FromStr for Capability {
    type Err = UnknownCapability;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Capability::ALL
            .into_iter()
            .find(|capability| capability.tool_name() == s)
            .ok_or_else(|| UnknownCapability(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tool_names_parse_back() {
        for capability in Capability::ALL {
            assert_eq!(capability.tool_name().parse::<Capability>(), Ok(capability));
        }
    }

    #[test]
    fn test_tool_names_are_unique() {
        let names: HashSet<_> = Capability::ALL.iter().map(|c| c.tool_name()).collect();
        assert_eq!(names.len(), Capability::ALL.len());
    }

    #[test]
    fn test_unknown_tool() {
        assert_eq!(
            "gitrama_rebase".parse::<Capability>(),
            Err(UnknownCapability("gitrama_rebase".into()))
        );
    }

    #[test]
    fn test_only_ask_is_long_running() {
        let long: Vec<_> = Capability::ALL
            .into_iter()
            .filter(Capability::is_long_running)
            .collect();
        assert_eq!(long, vec![Capability::Ask]);
    }
}
