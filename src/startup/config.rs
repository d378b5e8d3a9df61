//! Startup configuration types.
//!
//! Resolution order for the initial session status, highest first:
//! `--status`, `PARLOR_STATUS`, the `--state` snapshot, then unset.

use std::path::PathBuf;

use crate::cli::TuiOptions;
use crate::error::ParlorResult;
use crate::state::AppState;

/// Environment variable holding the initial raw status.
pub const ENV_STATUS: &str = "PARLOR_STATUS";
/// Environment variable holding the tracing filter directive.
pub const ENV_LOG: &str = "PARLOR_LOG";
/// Environment variable overriding the log file path.
pub const ENV_LOG_FILE: &str = "PARLOR_LOG_FILE";

/// Default tracing filter.
pub const DEFAULT_LOG_FILTER: &str = "parlor=info";

/// Configuration for starting the client.
///
/// # Example
///
/// ```
/// use parlor::startup::StartupConfig;
///
/// let config = StartupConfig::default()
///     .with_initial_status("logged")
///     .with_log_filter("parlor=debug");
/// assert_eq!(config.log_filter, "parlor=debug");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    /// Raw status to seed the store with, overriding any snapshot
    pub initial_status: Option<String>,
    /// JSON snapshot of the initial [`AppState`]
    pub snapshot_path: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
    /// Log file override
    pub log_file: Option<PathBuf>,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            initial_status: None,
            snapshot_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
        }
    }
}

impl StartupConfig {
    /// Create a new StartupConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial raw status.
    pub fn with_initial_status(mut self, status: impl Into<String>) -> Self {
        self.initial_status = Some(status.into());
        self
    }

    /// Set the snapshot path.
    pub fn with_snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = Some(path.into());
        self
    }

    /// Set the tracing filter directive.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Set the log file path.
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Create config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from an arbitrary variable lookup. Empty values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let mut config = Self::default();
        if let Some(status) = get(ENV_STATUS) {
            config = config.with_initial_status(status);
        }
        if let Some(filter) = get(ENV_LOG) {
            config = config.with_log_filter(filter);
        }
        if let Some(path) = get(ENV_LOG_FILE) {
            config = config.with_log_file(path);
        }
        config
    }

    /// Layer command-line options on top. Flags win over the environment.
    pub fn with_cli_options(mut self, options: TuiOptions) -> Self {
        if let Some(status) = options.status {
            self.initial_status = Some(status);
        }
        if let Some(path) = options.state_path {
            self.snapshot_path = Some(path);
        }
        self
    }

    /// Build the state the store starts with.
    pub fn resolve_initial_state(&self) -> ParlorResult<AppState> {
        let mut state = match &self.snapshot_path {
            Some(path) => AppState::load(path)?,
            None => AppState::default(),
        };
        if let Some(status) = &self.initial_status {
            state.session.status = Some(status.clone());
        }
        Ok(state)
    }

    /// Where log output goes.
    ///
    /// Falls back to the platform data directory, then the temp directory.
    pub fn log_file_path(&self) -> PathBuf {
        if let Some(path) = &self.log_file {
            return path.clone();
        }
        dirs::data_local_dir()
            .map(|dir| dir.join("parlor"))
            .unwrap_or_else(std::env::temp_dir)
            .join("parlor.log")
    }
}
