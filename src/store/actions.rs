//! Store actions and the session reducer.

use crate::state::{SessionState, STATUS_LOGGED, STATUS_STARTED};

/// Mutations accepted by [`Store::dispatch`](super::Store::dispatch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    /// The user identified; move to the lobby.
    LoggedIn,
    /// A game session began.
    GameStarted,
    /// The game session ended; back to the lobby.
    GameEnded,
    /// The user left; status becomes unset.
    LoggedOut,
    /// Set the raw status verbatim. Used for snapshots and collaborators that
    /// speak the raw wire value.
    SetStatus(Option<String>),
}

/// Compute the next session state. Pure.
pub fn reduce(session: &SessionState, action: &StoreAction) -> SessionState {
    let status = match action {
        StoreAction::LoggedIn | StoreAction::GameEnded => Some(STATUS_LOGGED.to_string()),
        StoreAction::GameStarted => Some(STATUS_STARTED.to_string()),
        StoreAction::LoggedOut => None,
        StoreAction::SetStatus(raw) => raw.clone(),
    };
    let mut next = session.clone();
    next.status = status;
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_lifecycle() {
        let s0 = SessionState::new();
        let s1 = reduce(&s0, &StoreAction::LoggedIn);
        assert_eq!(s1.status(), Some("logged"));
        let s2 = reduce(&s1, &StoreAction::GameStarted);
        assert_eq!(s2.status(), Some("started"));
        let s3 = reduce(&s2, &StoreAction::GameEnded);
        assert_eq!(s3.status(), Some("logged"));
        let s4 = reduce(&s3, &StoreAction::LoggedOut);
        assert_eq!(s4.status(), None);
    }

    #[test]
    fn test_reduce_set_status_verbatim() {
        let s = reduce(
            &SessionState::new(),
            &StoreAction::SetStatus(Some("anonymous".to_string())),
        );
        assert_eq!(s.status(), Some("anonymous"));

        let s = reduce(&s, &StoreAction::SetStatus(None));
        assert_eq!(s.status(), None);
    }

    #[test]
    fn test_reduce_does_not_mutate_input() {
        let s0 = SessionState::with_status("logged");
        let _ = reduce(&s0, &StoreAction::LoggedOut);
        assert_eq!(s0.status(), Some("logged"));
    }
}
