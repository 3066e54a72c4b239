//! Commit-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fewest commits the quality report will analyze
pub const MIN_QUALITY_COUNT: i64 = 1;

/// Most commits the quality report will analyze
pub const MAX_QUALITY_COUNT: i64 = 50;

fn default_message_type() -> String {
    "conventional".to_string()
}

fn default_files() -> String {
    "all".to_string()
}

fn default_count() -> i64 {
    10
}

/// Parameters for generating and applying a commit message
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CommitParams {
    #[schemars(description = "Commit message style: 'conventional' (default), 'detailed', or 'simple'")]
    #[serde(default = "default_message_type")]
    pub message_type: String,

    #[schemars(description = "Use this exact commit message instead of generating one")]
    #[serde(default)]
    pub message: Option<String>,

    #[schemars(description = "Context to guide the AI (e.g., 'fixing auth bug')")]
    #[serde(default)]
    pub context: Option<String>,

    #[schemars(description = "AI model override (e.g., 'gpt-4o', 'ollama/llama3')")]
    #[serde(default)]
    pub model: Option<String>,
}

/// Parameters for staging files and committing them in one step
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StageAndCommitParams {
    #[schemars(description = "Files to stage: 'all' (default) for every change, or space-separated paths (e.g., 'src/auth.rs tests/auth.rs')")]
    #[serde(default = "default_files")]
    pub files: String,

    #[schemars(description = "Commit message style: 'conventional' (default), 'detailed', or 'simple'")]
    #[serde(default = "default_message_type")]
    pub message_type: String,

    #[schemars(description = "Use this exact commit message instead of generating one")]
    #[serde(default)]
    pub message: Option<String>,

    #[schemars(description = "Context to guide the AI")]
    #[serde(default)]
    pub context: Option<String>,

    #[schemars(description = "AI model override")]
    #[serde(default)]
    pub model: Option<String>,
}

impl StageAndCommitParams {
    /// The commit half of the request
    pub fn commit(&self) -> CommitParams {
        CommitParams {
            message_type: self.message_type.clone(),
            message: self.message.clone(),
            context: self.context.clone(),
            model: self.model.clone(),
        }
    }
}

/// Parameters for scoring recent commit messages
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CommitQualityParams {
    #[schemars(description = "Number of recent commits to analyze (default: 10, clamped to 1-50)")]
    #[serde(default = "default_count")]
    pub count: i64,
}

impl CommitQualityParams {
    pub fn clamped_count(&self) -> i64 {
        self.count.clamp(MIN_QUALITY_COUNT, MAX_QUALITY_COUNT)
    }
}
