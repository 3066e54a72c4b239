//! Stream (workflow context) parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for switching to, or creating, a stream
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StreamSwitchParams {
    #[schemars(description = "Stream name (e.g., 'auth-refactor', 'payment-v2')")]
    pub name: String,

    #[schemars(description = "What the stream is for; stored when the stream is created")]
    #[serde(default)]
    pub description: Option<String>,
}
