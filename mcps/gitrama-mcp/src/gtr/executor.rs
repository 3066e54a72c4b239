//! Async process runner for gtr and git
//!
//! Every tool call ends up in [`try_run`]: spawn the program with an
//! argument vector (never a shell string), drain stdout and stderr
//! concurrently, and race the exit against a timeout. On unix the child
//! leads its own process group, so a timeout kills everything it started
//! (gtr shells out to git) before the child is reaped.
//!
//! # Example
//!
//! ```rust,ignore
//! use gitrama_mcp::gtr::{run, Dependency};
//!
//! let result = run(
//!     &Dependency::gitrama("gtr"),
//!     &["stream".into(), "list".into()],
//!     Path::new("."),
//!     Duration::from_secs(120),
//! ).await;
//! ```

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tracing::{debug, error, instrument, warn};

use super::error::{RunError, RunResult};
use crate::capability::Capability;

/// Timeout for most gtr subcommands
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Timeout for `gtr ask`, which may analyze a lot of history
pub const ASK_TIMEOUT_SECS: u64 = 180;

/// Outcome of one process run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// True iff the process exited with code 0
    pub succeeded: bool,
    /// Trimmed, lossily decoded stdout
    pub stdout: String,
    /// Trimmed, lossily decoded stderr, or the runner's own failure message
    pub stderr: String,
    /// Exit code, or -1 when there is none (timeout, spawn failure, signal)
    pub exit_code: i32,
}

impl ExecutionResult {
    /// A failed result that never produced an exit status
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            stdout: String::new(),
            stderr: message.into(),
            exit_code: -1,
        }
    }
}

impl From<RunError> for ExecutionResult {
    fn from(err: RunError) -> Self {
        ExecutionResult::failure(err.to_string())
    }
}

/// An external program plus what to tell the user when it is missing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub program: String,
    install_hint: String,
}

impl Dependency {
    pub fn new(program: impl Into<String>, install_hint: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            install_hint: install_hint.into(),
        }
    }

    /// The gitrama CLI, normally installed as `gtr`
    pub fn gitrama(program: impl Into<String>) -> Self {
        let program = program.into();
        let hint = format!(
            "gitrama CLI not found (looked for `{}`). Install with: pip install gitrama\n\
             Docs: https://gitrama.ai",
            program
        );
        Self::new(program, hint)
    }

    /// Git itself, used for staging
    pub fn git(program: impl Into<String>) -> Self {
        let program = program.into();
        let hint = format!(
            "git not found (looked for `{}`). Install from: https://git-scm.com/downloads",
            program
        );
        Self::new(program, hint)
    }

    pub fn install_hint(&self) -> &str {
        &self.install_hint
    }
}

/// Render a command line for logs and messages
fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).trim().to_string()
}

async fn read_pipe<R: AsyncRead + Unpin>(pipe: Option<R>) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}

/// Kill the child and every process in its group, then reap the child
async fn kill_process_tree(child: &mut Child) {
    #[cfg(unix)]
    if let Some(pid) = child.id() {
        // The child was spawned with process_group(0), so its pid is the pgid.
        let rc = unsafe { libc::killpg(pid as libc::pid_t, libc::SIGKILL) };
        if rc != 0 {
            warn!(
                "failed to kill process group {}: {}",
                pid,
                std::io::Error::last_os_error()
            );
        }
    }

    if let Err(e) = child.kill().await {
        warn!("failed to kill timed out process: {}", e);
    }
}

/// Run a program and classify how it went
///
/// Returns `Ok` whenever the process produced an exit status, whatever the
/// code. `Err` covers the cases where it never started or never finished.
#[instrument(skip_all, fields(cmd = %command_line(&dependency.program, args)))]
pub async fn try_run(
    dependency: &Dependency,
    args: &[String],
    cwd: &Path,
    timeout: Duration,
) -> RunResult<ExecutionResult> {
    // Checked up front: spawn reports a bad cwd as NotFound, which would
    // read as a missing executable.
    if !cwd.is_dir() {
        return Err(RunError::InvalidWorkingDir(cwd.to_path_buf()));
    }

    debug!(cwd = %cwd.display(), timeout_secs = timeout.as_secs(), "spawning");

    let mut command = Command::new(&dependency.program);
    command
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    #[cfg(unix)]
    command.process_group(0);

    let mut child = command
        .spawn()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                RunError::NotFound {
                    program: dependency.program.clone(),
                    hint: dependency.install_hint.clone(),
                }
            } else {
                RunError::SpawnError(e)
            }
        })?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let collected = tokio::time::timeout(timeout, async {
        tokio::try_join!(child.wait(), read_pipe(stdout), read_pipe(stderr))
    })
    .await;

    let (status, stdout, stderr) = match collected {
        Ok(output) => output?,
        Err(_elapsed) => {
            kill_process_tree(&mut child).await;
            let err = RunError::Timeout {
                command: command_line(&dependency.program, args),
                secs: timeout.as_secs(),
            };
            warn!("{}", err);
            return Err(err);
        }
    };

    let exit_code = status.code().unwrap_or(-1);
    let result = ExecutionResult {
        succeeded: exit_code == 0,
        stdout: decode(&stdout),
        stderr: decode(&stderr),
        exit_code,
    };

    if !result.succeeded {
        warn!(exit_code, stderr = %result.stderr, "command failed");
    }

    Ok(result)
}

/// Run a program, folding every failure into the result
pub async fn run(
    dependency: &Dependency,
    args: &[String],
    cwd: &Path,
    timeout: Duration,
) -> ExecutionResult {
    match try_run(dependency, args, cwd, timeout).await {
        Ok(result) => result,
        Err(err) => {
            if matches!(err, RunError::NotFound { .. }) {
                error!(program = %dependency.program, "executable not found");
            }
            err.into()
        }
    }
}

/// Runner settings shared by every tool call
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Program name or path for the gitrama CLI
    pub gtr_program: String,
    /// Program name or path for git
    pub git_program: String,
    /// Overrides the process working directory when set
    pub working_dir: Option<PathBuf>,
    pub default_timeout: Duration,
    pub ask_timeout: Duration,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            gtr_program: "gtr".to_string(),
            git_program: "git".to_string(),
            working_dir: None,
            default_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            ask_timeout: Duration::from_secs(ASK_TIMEOUT_SECS),
        }
    }
}

/// Runs gtr subcommands and git staging for the tool handlers
#[derive(Debug, Clone)]
pub struct GtrExecutor {
    gtr: Dependency,
    git: Dependency,
    working_dir: Option<PathBuf>,
    default_timeout: Duration,
    ask_timeout: Duration,
}

impl GtrExecutor {
    pub fn new(config: RunnerConfig) -> Self {
        Self {
            gtr: Dependency::gitrama(config.gtr_program),
            git: Dependency::git(config.git_program),
            working_dir: config.working_dir,
            default_timeout: config.default_timeout,
            ask_timeout: config.ask_timeout,
        }
    }

    /// Directory commands run in, resolved on every call
    pub fn working_dir(&self) -> PathBuf {
        match &self.working_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    pub fn timeout_for(&self, capability: Capability) -> Duration {
        if capability.is_long_running() {
            self.ask_timeout
        } else {
            self.default_timeout
        }
    }

    /// Run `gtr` with a full argument vector (subcommand first)
    pub async fn gtr(&self, capability: Capability, args: &[String]) -> ExecutionResult {
        run(
            &self.gtr,
            args,
            &self.working_dir(),
            self.timeout_for(capability),
        )
        .await
    }

    /// Run `git` with the given arguments, keeping launch failures distinct
    pub async fn git(&self, args: &[String]) -> RunResult<ExecutionResult> {
        try_run(&self.git, args, &self.working_dir(), self.default_timeout).await
    }
}

impl Default for GtrExecutor {
    fn default() -> Self {
        Self::new(RunnerConfig::default())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::time::Instant;

    fn sh() -> Dependency {
        Dependency::new("sh", "sh not found")
    }

    fn script(body: &str) -> Vec<String> {
        vec!["-c".to_string(), body.to_string()]
    }

    async fn run_sh(body: &str) -> ExecutionResult {
        let cwd = std::env::temp_dir();
        run(&sh(), &script(body), &cwd, Duration::from_secs(10)).await
    }

    #[tokio::test]
    async fn test_captures_stdout_and_stderr_separately() {
        let result = run_sh("echo out; echo err >&2").await;
        assert!(result.succeeded);
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout, "out");
        assert_eq!(result.stderr, "err");
    }

    #[tokio::test]
    async fn test_non_zero_exit() {
        let result = run_sh("echo boom >&2; exit 3").await;
        assert!(!result.succeeded);
        assert_eq!(result.exit_code, 3);
        assert_eq!(result.stderr, "boom");
    }

    #[tokio::test]
    async fn test_output_is_trimmed() {
        let result = run_sh("printf '\\n  padded  \\n\\n'").await;
        assert_eq!(result.stdout, "padded");
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_replaced() {
        let result = run_sh("printf '\\377ok'").await;
        assert!(result.succeeded);
        assert!(result.stdout.ends_with("ok"));
        assert!(result.stdout.contains('\u{FFFD}'));
    }

    #[tokio::test]
    async fn test_missing_executable_reports_install_hint() {
        let dep = Dependency::gitrama("gitrama-test-definitely-missing");
        let cwd = std::env::temp_dir();
        let err = try_run(&dep, &[], &cwd, Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(matches!(err, RunError::NotFound { .. }));
        assert!(err.is_launch_failure());

        let result = run(&dep, &[], &cwd, Duration::from_secs(5)).await;
        assert!(!result.succeeded);
        assert_eq!(result.exit_code, -1);
        assert!(result.stdout.is_empty());
        assert!(result.stderr.contains("pip install gitrama"));
        assert!(result.stderr.contains("https://gitrama.ai"));
    }

    #[tokio::test]
    async fn test_timeout_kills_the_child() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("finished");
        let body = format!("sleep 2; touch '{}'", marker.display());

        let started = Instant::now();
        let result = run(&sh(), &script(&body), dir.path(), Duration::from_secs(1)).await;
        assert!(started.elapsed() < Duration::from_secs(2));

        assert!(!result.succeeded);
        assert_eq!(result.exit_code, -1);
        assert!(result.stdout.is_empty());
        assert!(result.stderr.contains("timed out after 1s"));
        assert!(result.stderr.contains("sh -c"));

        // The shell was killed, so it never gets to run `touch`.
        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert!(!marker.exists());
    }

    #[tokio::test]
    async fn test_timeout_kills_background_processes() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("grandchild-finished");
        let body = format!("(sleep 2; touch '{}') & wait", marker.display());

        let result = run(&sh(), &script(&body), dir.path(), Duration::from_secs(1)).await;
        assert!(result.stderr.contains("timed out after 1s"));

        // The backgrounded subshell shares the group and dies with it.
        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert!(!marker.exists());
    }

    #[tokio::test]
    async fn test_runs_in_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&sh(), &script("pwd -P"), dir.path(), Duration::from_secs(5)).await;
        let expected = std::fs::canonicalize(dir.path()).unwrap();
        assert_eq!(result.stdout, expected.display().to_string());
    }

    #[tokio::test]
    async fn test_missing_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("nope");
        let err = try_run(&sh(), &script("true"), &gone, Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(matches!(err, RunError::InvalidWorkingDir(_)));
        assert!(err.is_launch_failure());
    }

    #[tokio::test]
    async fn test_stdin_is_closed() {
        // `cat` would block forever on an inherited terminal.
        let result = run_sh("cat; echo done").await;
        assert_eq!(result.stdout, "done");
    }

    #[test]
    fn test_working_dir_override_takes_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let executor = GtrExecutor::new(RunnerConfig {
            working_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        });
        assert_eq!(executor.working_dir(), dir.path());

        let ambient = GtrExecutor::default();
        assert_eq!(ambient.working_dir(), std::env::current_dir().unwrap());
    }

    #[test]
    fn test_ask_gets_the_longer_timeout() {
        let executor = GtrExecutor::default();
        assert_eq!(
            executor.timeout_for(Capability::Ask),
            Duration::from_secs(ASK_TIMEOUT_SECS)
        );
        assert_eq!(
            executor.timeout_for(Capability::Commit),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
    }

    #[test]
    fn test_command_line() {
        let args = vec!["branch".to_string(), "add login".to_string()];
        assert_eq!(command_line("gtr", &args), "gtr branch add login");
    }
}
