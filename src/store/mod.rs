//! The shared state container.
//!
//! [`Store`] owns [`AppState`] for the whole client and is the production
//! [`StatusSource`]. It is a cheap `Rc` handle: clones share one container.
//!
//! ## Notification rules
//!
//! - Listeners hear about a change only when `session.status` actually changed.
//! - Listeners run in registration order.
//! - A dispatch issued from inside a listener is queued and delivered after the
//!   current round finishes, so every listener observes changes in order.
//! - A listener released mid-round is skipped for the rest of that round.

mod actions;

pub use actions::{reduce, StoreAction};

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::state::{AppState, SessionState};
use crate::traits::{StatusListener, StatusSource, Subscription};

type ListenerId = u64;
type SharedListener = Rc<RefCell<StatusListener>>;

struct StoreInner {
    state: RefCell<AppState>,
    listeners: RefCell<Vec<(ListenerId, SharedListener)>>,
    next_id: Cell<ListenerId>,
    notifying: Cell<bool>,
    pending: RefCell<VecDeque<Option<String>>>,
}

/// Process-wide state container.
#[derive(Clone)]
pub struct Store {
    inner: Rc<StoreInner>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create a store with empty state.
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    /// Create a store seeded with `state`. No notification is sent.
    pub fn with_state(state: AppState) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                state: RefCell::new(state),
                listeners: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                notifying: Cell::new(false),
                pending: RefCell::new(VecDeque::new()),
            }),
        }
    }

    /// Snapshot of the whole state tree.
    pub fn state(&self) -> AppState {
        self.inner.state.borrow().clone()
    }

    /// Apply an action. Returns true if the status changed.
    pub fn dispatch(&self, action: StoreAction) -> bool {
        let next = {
            let state = self.inner.state.borrow();
            reduce(&state.session, &action)
        };
        tracing::debug!(?action, "Store: dispatch");
        self.commit(next)
    }

    /// Replace the state wholesale. Returns true if the status changed.
    pub fn replace_state(&self, state: AppState) -> bool {
        self.commit(state.session)
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn commit(&self, session: SessionState) -> bool {
        let status = {
            let mut state = self.inner.state.borrow_mut();
            if state.session == session {
                return false;
            }
            tracing::debug!(
                from = ?state.session.status,
                to = ?session.status,
                "Store: status changed"
            );
            state.session = session;
            state.session.status.clone()
        };
        self.notify(status);
        true
    }

    fn notify(&self, status: Option<String>) {
        self.inner.pending.borrow_mut().push_back(status);
        if self.inner.notifying.get() {
            // Delivered by the round already in progress further up the stack
            return;
        }
        let _round = NotifyRound::begin(&self.inner);

        loop {
            let next = self.inner.pending.borrow_mut().pop_front();
            let Some(status) = next else { break };

            let listeners: Vec<(ListenerId, SharedListener)> =
                self.inner.listeners.borrow().clone();
            for (id, listener) in listeners {
                if !self.is_registered(id) {
                    continue;
                }
                (listener.borrow_mut())(status.as_deref());
            }
        }
    }

    fn is_registered(&self, id: ListenerId) -> bool {
        self.inner
            .listeners
            .borrow()
            .iter()
            .any(|(lid, _)| *lid == id)
    }
}

/// Ends a notification round, also when a listener panics.
///
/// Statuses still queued at that point belong to the aborted round and are
/// discarded, so they cannot leak into the next one.
struct NotifyRound<'a>(&'a StoreInner);

impl<'a> NotifyRound<'a> {
    fn begin(inner: &'a StoreInner) -> Self {
        inner.notifying.set(true);
        Self(inner)
    }
}

impl Drop for NotifyRound<'_> {
    fn drop(&mut self) {
        self.0.pending.borrow_mut().clear();
        self.0.notifying.set(false);
    }
}

impl StatusSource for Store {
    fn status(&self) -> Option<String> {
        self.inner.state.borrow().session.status.clone()
    }

    fn subscribe(&self, listener: StatusListener) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(listener))));
        tracing::trace!(listener_id = id, "Store: listener registered");

        let weak: Weak<StoreInner> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
                tracing::trace!(listener_id = id, "Store: listener released");
            }
        })
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &*self.inner.state.borrow())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
