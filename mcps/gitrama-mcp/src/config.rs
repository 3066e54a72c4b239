//! Command-line and environment configuration
//!
//! Every setting can come from a flag or an environment variable, so MCP
//! client configs can set them through their `env` block.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use mcp_common::{Transport, TransportError};

use crate::gtr::executor::{ASK_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS};
use crate::gtr::RunnerConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "gitrama-mcp", version, about = "MCP server for the gitrama Git CLI")]
pub struct Config {
    /// Transport: 'stdio' or 'streamable-http'
    #[arg(long, env = "GTR_MCP_TRANSPORT", default_value = "stdio")]
    pub transport: String,

    /// Bind host for streamable-http
    #[arg(long, env = "GTR_MCP_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Bind port for streamable-http
    #[arg(long, env = "GTR_MCP_PORT", default_value_t = 8765)]
    pub port: u16,

    /// Repository directory to run commands in (default: current directory)
    #[arg(long, env = "GTR_CWD")]
    pub cwd: Option<PathBuf>,

    /// gitrama CLI executable
    #[arg(long, env = "GTR_BIN", default_value = "gtr")]
    pub gtr_bin: String,

    /// git executable, used for staging
    #[arg(long, env = "GTR_GIT_BIN", default_value = "git")]
    pub git_bin: String,

    /// Timeout in seconds for gtr subcommands
    #[arg(
        long,
        env = "GTR_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// Timeout in seconds for `gtr ask`
    #[arg(
        long,
        env = "GTR_ASK_TIMEOUT_SECS",
        default_value_t = ASK_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub ask_timeout_secs: u64,
}

impl Config {
    pub fn transport(&self) -> Result<Transport, TransportError> {
        self.transport.parse()
    }

    pub fn runner(&self) -> RunnerConfig {
        RunnerConfig {
            gtr_program: self.gtr_bin.clone(),
            git_program: self.git_bin.clone(),
            working_dir: self.cwd.clone(),
            default_timeout: Duration::from_secs(self.timeout_secs),
            ask_timeout: Duration::from_secs(self.ask_timeout_secs),
        }
    }
}
