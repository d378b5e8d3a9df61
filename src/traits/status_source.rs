//! Status source trait abstraction.
//!
//! Views never reach into a global store. Whatever owns the session status is
//! handed to the [`ViewSelector`](crate::selector::ViewSelector) through this
//! trait, so tests can swap in a fake.

use super::subscription::Subscription;

/// Callback invoked with the new raw status after each change.
pub type StatusListener = Box<dyn FnMut(Option<&str>)>;

/// Read-only view of the session status with change notification.
///
/// Implementations are single-threaded: listeners run synchronously on the
/// thread that mutated the source, one notification at a time.
///
/// # Example
///
/// ```
/// use parlor::store::{Store, StoreAction};
/// use parlor::traits::StatusSource;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let store = Store::new();
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
/// let sub = store.subscribe(Box::new(move |status| {
///     sink.borrow_mut().push(status.map(str::to_string));
/// }));
///
/// store.dispatch(StoreAction::LoggedIn);
/// assert_eq!(*seen.borrow(), vec![Some("logged".to_string())]);
/// drop(sub);
/// ```
pub trait StatusSource {
    /// Current raw status, `None` when unset.
    fn status(&self) -> Option<String>;

    /// Register a listener for status changes.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// released, either explicitly or by dropping it.
    fn subscribe(&self, listener: StatusListener) -> Subscription;
}
