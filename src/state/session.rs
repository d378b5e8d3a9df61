//! Session-level state held in the shared store.
//!
//! The store keeps the raw status string exactly as it was set. Parsing into
//! [`SessionStatus`] happens on read so that unknown values survive a round
//! trip through snapshots unchanged.

use serde::{Deserialize, Deserializer, Serialize};

/// Raw status value meaning the user has identified and is waiting in the lobby.
pub const STATUS_LOGGED: &str = "logged";

/// Raw status value meaning a game session is in progress.
pub const STATUS_STARTED: &str = "started";

/// Parsed session lifecycle stage.
///
/// Closed on purpose: every raw value the store can hold lands in exactly one
/// variant, and anything that is not `logged` or `started` is `Unrecognized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionStatus {
    /// `"logged"`
    Logged,
    /// `"started"`
    Started,
    /// Absent, empty, or any other value
    #[default]
    Unrecognized,
}

impl SessionStatus {
    /// Parse a raw status. Matching is exact and case-sensitive.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some(STATUS_LOGGED) => SessionStatus::Logged,
            Some(STATUS_STARTED) => SessionStatus::Started,
            _ => SessionStatus::Unrecognized,
        }
    }

    /// Parse a status from an arbitrary JSON value.
    ///
    /// Non-string values (numbers, booleans, objects, null) are unrecognized.
    pub fn from_json(value: &serde_json::Value) -> Self {
        Self::from_raw(value.as_str())
    }

    /// The canonical raw value for recognized statuses.
    pub fn as_raw(&self) -> Option<&'static str> {
        match self {
            SessionStatus::Logged => Some(STATUS_LOGGED),
            SessionStatus::Started => Some(STATUS_STARTED),
            SessionStatus::Unrecognized => None,
        }
    }
}

/// The `session` slice of [`AppState`](super::AppState).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Raw lifecycle status. `None` when never set.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_status"
    )]
    pub status: Option<String>,
}

impl SessionState {
    /// Create an empty session with no status.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with the given raw status.
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
        }
    }

    /// Borrow the raw status.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Parsed view of the raw status.
    pub fn parsed_status(&self) -> SessionStatus {
        SessionStatus::from_raw(self.status())
    }
}

/// Accept any JSON type for `status`; only strings are kept.
fn lenient_status<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}
