//! Branch, pull request, and changelog parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_format() -> String {
    "markdown".to_string()
}

/// Parameters for naming (and optionally creating) a branch
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BranchParams {
    #[schemars(description = "What you're working on (e.g., 'add user authentication with OAuth2')")]
    pub description: String,

    #[schemars(description = "Create and check out the branch (default: true). When false, only suggest a name")]
    #[serde(default = "default_true")]
    pub create: bool,

    #[schemars(description = "Base branch to create from (default: current branch)")]
    #[serde(default)]
    pub base: Option<String>,

    #[schemars(description = "AI model override")]
    #[serde(default)]
    pub model: Option<String>,
}

/// Parameters for generating a pull request description
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PrParams {
    #[schemars(description = "Target branch for the PR (default: main or master)")]
    #[serde(default)]
    pub base: Option<String>,

    #[schemars(description = "AI model override")]
    #[serde(default)]
    pub model: Option<String>,
}

/// Parameters for generating a changelog
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ChangelogParams {
    #[schemars(description = "Start ref: tag, branch, or commit (default: last tag)")]
    #[serde(default)]
    pub since: Option<String>,

    #[schemars(description = "End ref (default: HEAD)")]
    #[serde(default)]
    pub until: Option<String>,

    #[schemars(description = "Output format: 'markdown' (default) or 'json'")]
    #[serde(default = "default_format")]
    pub format: String,

    #[schemars(description = "AI model override")]
    #[serde(default)]
    pub model: Option<String>,
}
