//! View identities and the status→view mapping.

use std::fmt;

use crate::state::SessionStatus;

/// The top-level view to present. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewIdentity {
    /// Entry screen where the user identifies.
    #[default]
    Identification,
    /// Lobby, waiting for a game to start.
    Waiting,
    /// A game session is in progress.
    Active,
}

impl ViewIdentity {
    /// Every identity, in lifecycle order.
    pub const ALL: [ViewIdentity; 3] = [
        ViewIdentity::Identification,
        ViewIdentity::Waiting,
        ViewIdentity::Active,
    ];

    /// Short label used for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewIdentity::Identification => "identification",
            ViewIdentity::Waiting => "waiting",
            ViewIdentity::Active => "active",
        }
    }
}

impl fmt::Display for ViewIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Map a parsed status to its view.
///
/// Adding a [`SessionStatus`] variant fails to compile here until the new
/// status is given a view.
pub fn select_view(status: SessionStatus) -> ViewIdentity {
    match status {
        SessionStatus::Logged => ViewIdentity::Waiting,
        SessionStatus::Started => ViewIdentity::Active,
        SessionStatus::Unrecognized => ViewIdentity::Identification,
    }
}

/// Map a raw status to its view. Unknown or absent values select
/// [`ViewIdentity::Identification`].
pub fn select_view_for(raw: Option<&str>) -> ViewIdentity {
    select_view(SessionStatus::from_raw(raw))
}
