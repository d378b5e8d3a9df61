//! Unified error type for the parlor client.
//!
//! View selection itself never fails. These errors cover the ambient work
//! around it: argument parsing, snapshot loading, logging and terminal setup.

use std::path::PathBuf;

use thiserror::Error;

use super::category::ErrorCategory;

/// Unified error type for the parlor client.
#[derive(Debug, Error)]
pub enum ParlorError {
    /// Invalid command-line flag or environment value.
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// A state snapshot could not be parsed.
    #[error("Invalid state snapshot{}: {message}", snapshot_location(.path))]
    Snapshot {
        path: Option<PathBuf>,
        message: String,
    },

    /// Filesystem or stdio failure.
    #[error("I/O error during {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// Terminal setup or restore failed.
    #[error("Terminal error: {message}")]
    Terminal { message: String },
}

impl ParlorError {
    /// Shorthand for a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        ParlorError::Config {
            message: message.into(),
        }
    }

    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ParlorError::Config { .. } => ErrorCategory::Configuration,
            ParlorError::Snapshot { .. } => ErrorCategory::User,
            ParlorError::Io { .. } | ParlorError::Terminal { .. } => ErrorCategory::System,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        format!("{}\n{}", self, self.category().recovery_hint())
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ParlorError::Config { .. } => "E_CONFIG",
            ParlorError::Snapshot { .. } => "E_SNAPSHOT",
            ParlorError::Io { .. } => "E_IO",
            ParlorError::Terminal { .. } => "E_TERMINAL",
        }
    }
}

fn snapshot_location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ParlorError::config("--status requires a value");
        assert_eq!(err.to_string(), "Invalid configuration: --status requires a value");
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.error_code(), "E_CONFIG");
    }

    #[test]
    fn test_snapshot_error_display_with_path() {
        let err = ParlorError::Snapshot {
            path: Some(PathBuf::from("/tmp/state.json")),
            message: "expected value".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid state snapshot /tmp/state.json: expected value"
        );
        assert_eq!(err.category(), ErrorCategory::User);
    }

    #[test]
    fn test_snapshot_error_display_without_path() {
        let err = ParlorError::Snapshot {
            path: None,
            message: "eof".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid state snapshot: eof");
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = ParlorError::Io {
            operation: "read state.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "I/O error during read state.json: gone");
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.error_code(), "E_IO");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_user_message_includes_hint() {
        let err = ParlorError::Terminal {
            message: "not a tty".to_string(),
        };
        let msg = err.user_message();
        assert!(msg.contains("not a tty"));
        assert!(msg.contains(ErrorCategory::System.recovery_hint()));
    }
}
