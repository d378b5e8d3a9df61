//! Tracing setup.
//!
//! The terminal belongs to the TUI, so log output goes to a file through a
//! non-blocking `tracing-appender` writer. The returned [`LogHandle`] owns the
//! writer's worker; keep it alive until the client exits so buffered lines
//! are flushed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::StartupConfig;
use crate::error::{ParlorError, ParlorResult};

/// Keeps the log writer alive. Dropping it flushes pending lines.
#[must_use = "dropping the handle stops log output"]
pub struct LogHandle {
    path: PathBuf,
    _guard: WorkerGuard,
}

impl LogHandle {
    /// The file log lines are written to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse a filter directive such as `parlor=debug`.
pub fn build_filter(directive: &str) -> ParlorResult<EnvFilter> {
    EnvFilter::try_new(directive)
        .map_err(|e| ParlorError::config(format!("invalid log filter {:?}: {}", directive, e)))
}

/// Open `path` for appending behind a non-blocking writer.
///
/// The file never rotates. Missing parent directories are created.
pub fn file_writer(path: &Path) -> ParlorResult<(NonBlocking, WorkerGuard)> {
    let file_name = path
        .file_name()
        .ok_or_else(|| ParlorError::config(format!("log file {} has no file name", path.display())))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    fs::create_dir_all(&dir).map_err(|e| ParlorError::Io {
        operation: format!("create {}", dir.display()),
        source: e,
    })?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(&dir)
        .map_err(|e| ParlorError::Io {
            operation: format!("open {}", path.display()),
            source: io::Error::other(e),
        })?;

    Ok(tracing_appender::non_blocking(appender))
}

/// Install the global subscriber.
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(config: &StartupConfig) -> ParlorResult<LogHandle> {
    let filter = build_filter(&config.log_filter)?;
    let path = config.log_file_path();
    let (writer, guard) = file_writer(&path)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .map_err(|e| ParlorError::config(format!("tracing already initialized: {}", e)))?;

    tracing::info!(log_file = %path.display(), "Logging initialized");
    Ok(LogHandle {
        path,
        _guard: guard,
    })
}
