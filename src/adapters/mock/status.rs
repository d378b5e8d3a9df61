//! Mock status source for testing.
//!
//! Unlike [`Store`](crate::store::Store), the mock notifies on every
//! [`set_status`](MockStatusSource::set_status) call, even when the value did
//! not change. That makes "one notification, one evaluation" directly
//! observable in tests.
//!
//! A `set_status` from inside a listener is queued like it is in the store:
//! the current notification reaches every listener before the next starts.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use crate::traits::{StatusListener, StatusSource, Subscription};

type Listeners = Vec<(u64, Rc<RefCell<StatusListener>>)>;

#[derive(Default)]
struct MockInner {
    status: RefCell<Option<String>>,
    listeners: RefCell<Listeners>,
    next_id: Cell<u64>,
    subscribe_calls: Cell<usize>,
    notifications: Cell<usize>,
    emitting: Cell<bool>,
    pending: RefCell<VecDeque<Option<String>>>,
}

impl MockInner {
    fn is_registered(&self, id: u64) -> bool {
        self.listeners.borrow().iter().any(|(lid, _)| *lid == id)
    }
}

/// Resets the emitting state when a delivery loop ends or unwinds.
struct EmitRound<'a>(&'a MockInner);

impl Drop for EmitRound<'_> {
    fn drop(&mut self) {
        self.0.pending.borrow_mut().clear();
        self.0.emitting.set(false);
    }
}

/// Mock status source for testing.
///
/// # Example
///
/// ```
/// use parlor::adapters::mock::MockStatusSource;
/// use parlor::selector::{ViewIdentity, ViewSelector};
///
/// let source = MockStatusSource::new();
/// let selector = ViewSelector::mount(&source);
///
/// source.set_status(Some("started"));
/// assert_eq!(selector.current(), ViewIdentity::Active);
/// assert_eq!(source.active_listeners(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockStatusSource {
    inner: Rc<MockInner>,
}

impl MockStatusSource {
    /// Create a mock with no status.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock with an initial raw status.
    pub fn with_status(status: &str) -> Self {
        let mock = Self::new();
        *mock.inner.status.borrow_mut() = Some(status.to_string());
        mock
    }

    /// Set the status and notify every listener, changed or not.
    pub fn set_status(&self, status: Option<&str>) {
        *self.inner.status.borrow_mut() = status.map(str::to_string);
        self.emit();
    }

    /// Re-send the current status to every listener.
    ///
    /// Called from inside a listener, the notification is queued and
    /// delivered once the one in progress has reached every listener.
    pub fn emit(&self) {
        let inner = &*self.inner;
        inner.notifications.set(inner.notifications.get() + 1);
        let status = inner.status.borrow().clone();
        inner.pending.borrow_mut().push_back(status);
        if inner.emitting.get() {
            return;
        }
        inner.emitting.set(true);
        let _round = EmitRound(inner);

        loop {
            let next = inner.pending.borrow_mut().pop_front();
            let Some(status) = next else { break };

            let listeners: Listeners = inner.listeners.borrow().clone();
            for (id, listener) in listeners {
                if inner.is_registered(id) {
                    (listener.borrow_mut())(status.as_deref());
                }
            }
        }
    }

    /// Number of listeners currently registered.
    pub fn active_listeners(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Total number of `subscribe` calls ever made.
    pub fn subscribe_calls(&self) -> usize {
        self.inner.subscribe_calls.get()
    }

    /// Total number of notifications emitted.
    pub fn notifications(&self) -> usize {
        self.inner.notifications.get()
    }
}

impl StatusSource for MockStatusSource {
    fn status(&self) -> Option<String> {
        self.inner.status.borrow().clone()
    }

    fn subscribe(&self, listener: StatusListener) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .subscribe_calls
            .set(self.inner.subscribe_calls.get() + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(listener))));

        let weak: Weak<MockInner> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
            }
        })
    }
}
