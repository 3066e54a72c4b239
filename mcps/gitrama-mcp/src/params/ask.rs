//! Parameters for natural-language repository questions

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_scope() -> String {
    "auto".to_string()
}

/// Parameters for asking a question about the repository
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AskParams {
    #[schemars(description = "Natural language question (e.g., 'Who owns the auth module?', 'What changed in the last 3 days?')")]
    pub question: String,

    #[schemars(description = "Context scope: 'auto' (default), 'branch', 'full', or 'staged'")]
    #[serde(default = "default_scope")]
    pub scope: String,

    #[schemars(description = "Scope the answer to this stream instead of the active one")]
    #[serde(default)]
    pub stream: Option<String>,

    #[schemars(description = "Run a deeper (slower) analysis of history and blame data")]
    #[serde(default)]
    pub deep: bool,

    #[schemars(description = "AI model override")]
    #[serde(default)]
    pub model: Option<String>,
}
