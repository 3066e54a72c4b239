//! gtr CLI wrapper
//!
//! Process runner, outcome type, and error classification for the `gtr`
//! executable and the `git` staging step.

pub mod error;
pub mod executor;

pub use error::{RunError, RunResult};
pub use executor::{run, try_run, Dependency, ExecutionResult, GtrExecutor, RunnerConfig};
