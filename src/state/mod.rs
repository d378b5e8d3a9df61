//! Shared application state.
//!
//! [`AppState`] is the whole tree kept by the [`Store`](crate::store::Store).
//! Its JSON shape is `{ "session": { "status": <string|absent> } }`, which is
//! also the format of `--state` snapshot files.

mod session;

pub use session::{SessionState, SessionStatus, STATUS_LOGGED, STATUS_STARTED};

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ParlorError, ParlorResult};

/// Root of the shared state tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub session: SessionState,
}

impl AppState {
    /// Create an empty state (no status).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state with the given raw status.
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            session: SessionState::with_status(status),
        }
    }

    /// Parse a snapshot from JSON text.
    pub fn from_json_str(json: &str) -> ParlorResult<Self> {
        serde_json::from_str(json).map_err(|e| ParlorError::Snapshot {
            path: None,
            message: e.to_string(),
        })
    }

    /// Load a snapshot file.
    pub fn load(path: &Path) -> ParlorResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| ParlorError::Io {
            operation: format!("read {}", path.display()),
            source: e,
        })?;
        serde_json::from_str(&json).map_err(|e| ParlorError::Snapshot {
            path: Some(path.to_path_buf()),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_app_state_default_has_no_status() {
        assert_eq!(AppState::new().session.status(), None);
    }

    #[test]
    fn test_from_json_str() {
        let state = AppState::from_json_str(r#"{"session":{"status":"started"}}"#).unwrap();
        assert_eq!(state.session.parsed_status(), SessionStatus::Started);

        let state = AppState::from_json_str("{}").unwrap();
        assert_eq!(state, AppState::new());
    }

    #[test]
    fn test_from_json_str_invalid() {
        let err = AppState::from_json_str("not json").unwrap_err();
        assert!(matches!(err, ParlorError::Snapshot { path: None, .. }));
    }

    #[test]
    fn test_load_snapshot_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"session":{{"status":"logged"}}}}"#).unwrap();

        let state = AppState::load(file.path()).unwrap();
        assert_eq!(state, AppState::with_status("logged"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppState::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ParlorError::Io { .. }));
    }
}
