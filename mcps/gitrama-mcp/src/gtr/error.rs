//! Error types for running external commands

use std::path::PathBuf;

use thiserror::Error;

/// Ways a command can fail to produce an exit status
///
/// A command that runs and exits non-zero is not an error here; that is an
/// [`ExecutionResult`](super::ExecutionResult) with `succeeded == false`.
#[derive(Error, Debug)]
pub enum RunError {
    /// The executable is not installed or not in PATH
    #[error("{hint}")]
    NotFound {
        /// Program name that was looked up
        program: String,
        /// Install instructions for the missing dependency
        hint: String,
    },

    /// The command outlived its time budget and was killed
    #[error("Command timed out after {secs}s and was killed: {command}")]
    Timeout {
        /// Full command line, for the message
        command: String,
        /// Time budget in seconds
        secs: u64,
    },

    /// The working directory does not exist or is not a directory
    #[error("working directory does not exist: {}", .0.display())]
    InvalidWorkingDir(PathBuf),

    /// Failed to spawn the process for a reason other than a missing binary
    #[error("failed to spawn process: {0}")]
    SpawnError(std::io::Error),

    /// Waiting on the process or reading its output failed
    #[error("failed to collect process output: {0}")]
    Io(#[from] std::io::Error),
}

impl RunError {
    /// True when the process never started
    pub fn is_launch_failure(&self) -> bool {
        matches!(
            self,
            RunError::NotFound { .. } | RunError::InvalidWorkingDir(_) | RunError::SpawnError(_)
        )
    }
}

/// Result type alias for runner operations
pub type RunResult<T> = Result<T, RunError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launch_failure_classification() {
        let not_found = RunError::NotFound {
            program: "gtr".into(),
            hint: "install it".into(),
        };
        assert!(not_found.is_launch_failure());
        assert!(RunError::InvalidWorkingDir(PathBuf::from("/nope")).is_launch_failure());

        let timeout = RunError::Timeout {
            command: "gtr ask".into(),
            secs: 180,
        };
        assert!(!timeout.is_launch_failure());
    }

    #[test]
    fn test_timeout_message_names_command_and_bound() {
        let err = RunError::Timeout {
            command: "gtr pr --base main".into(),
            secs: 120,
        };
        assert_eq!(
            err.to_string(),
            "Command timed out after 120s and was killed: gtr pr --base main"
        );
    }
}
