//! Parameter types for gitrama MCP tools
//!
//! Optional strings default to absent; an empty string is treated the same
//! as an absent one when building arguments.

mod ask;
mod branch;
mod commit;
mod stream;

pub use ask::*;
pub use branch::*;
pub use commit::*;
pub use stream::*;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Empty parameters for tools that take no arguments
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct EmptyParams {}
