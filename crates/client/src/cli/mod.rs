//! CLI command definitions.

pub mod add_user;
pub mod prompt;

use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{Config, ConfigError};

/// Admin console for the memberdb API.
///
/// Connection flags override the `MEMBERDB_*` environment variables.
#[derive(Debug, Parser)]
#[command(name = "memberdb-client")]
#[command(version, about = "Admin console for the memberdb API", long_about = None)]
pub struct Cli {
    /// Backend base URL [env: MEMBERDB_BACKEND_URL, default: http://localhost:5000]
    #[arg(long)]
    pub base_url: Option<String>,

    /// Cookie header sent with credentialed requests, e.g. "session=..." [env: MEMBERDB_SESSION_COOKIE]
    #[arg(long)]
    pub session_cookie: Option<String>,

    /// Request timeout in seconds [env: MEMBERDB_REQUEST_TIMEOUT_SECS]
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Seconds before a notice is dismissed [env: MEMBERDB_NOTICE_TTL_SECS, default: 5]
    #[arg(long)]
    pub notice_ttl: Option<u64>,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    /// Emit logs as JSON.
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Client configuration: the environment, overridden by the flags.
    pub fn config(&self) -> Result<Config, ConfigError> {
        self.apply(Config::from_env()?)
    }

    /// Override `config` with the flags that were given.
    pub fn apply(&self, mut config: Config) -> Result<Config, ConfigError> {
        if let Some(base_url) = &self.base_url {
            config = config.with_backend_url(base_url)?;
        }
        if self.session_cookie.is_some() {
            config = config.with_session_cookie(self.session_cookie.clone());
        }
        if let Some(secs) = self.timeout {
            config = config.with_request_timeout(Some(Duration::from_secs(secs)));
        }
        if let Some(secs) = self.notice_ttl {
            config = config.with_notice_ttl(Duration::from_secs(secs));
        }
        Ok(config)
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the current session and show who is signed in.
    Whoami,
    /// Add a user to the membership database.
    AddUser(add_user::AddUserArgs),
}
