//! Top-level view selection.
//!
//! [`ViewSelector`] watches a [`StatusSource`] and keeps exactly one
//! [`ViewIdentity`] selected. It reads the status, never writes it.
//!
//! ```text
//! StatusSource ──notify──▶ ViewSelector ──ViewIdentity──▶ host renderer
//! ```
//!
//! | Status | View |
//! |--------|------|
//! | `logged` | [`ViewIdentity::Waiting`] |
//! | `started` | [`ViewIdentity::Active`] |
//! | anything else, or unset | [`ViewIdentity::Identification`] |

mod view;

pub use view::{select_view, select_view_for, ViewIdentity};

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::traits::{StatusSource, Subscription};

#[derive(Default)]
struct Selection {
    current: Cell<ViewIdentity>,
    evaluations: Cell<u64>,
}

impl Selection {
    fn evaluate(&self, status: Option<&str>) -> ViewIdentity {
        let view = select_view_for(status);
        self.current.set(view);
        self.evaluations.set(self.evaluations.get() + 1);
        tracing::debug!(?status, %view, "ViewSelector: evaluated");
        view
    }
}

/// Mounted selector bound to one status source.
///
/// The subscription lives exactly as long as the selector is mounted.
/// [`unmount`](ViewSelector::unmount) or dropping the selector releases it.
pub struct ViewSelector {
    selection: Rc<Selection>,
    subscription: Option<Subscription>,
}

impl ViewSelector {
    /// Mount against `source`, evaluating its current status immediately.
    pub fn mount<S>(source: &S) -> Self
    where
        S: StatusSource + ?Sized,
    {
        Self::mount_with(source, |_| {})
    }

    /// Mount and request a render through `on_select` after every evaluation,
    /// including the initial one.
    pub fn mount_with<S, F>(source: &S, mut on_select: F) -> Self
    where
        S: StatusSource + ?Sized,
        F: FnMut(ViewIdentity) + 'static,
    {
        let selection = Rc::new(Selection::default());

        let initial = selection.evaluate(source.status().as_deref());
        on_select(initial);

        let listener_selection = Rc::clone(&selection);
        let subscription = source.subscribe(Box::new(move |status| {
            let view = listener_selection.evaluate(status);
            on_select(view);
        }));

        tracing::info!(view = %initial, "ViewSelector: mounted");
        Self {
            selection,
            subscription: Some(subscription),
        }
    }

    /// The view chosen by the most recent evaluation.
    pub fn current(&self) -> ViewIdentity {
        self.selection.current.get()
    }

    /// How many evaluations have run since mounting.
    pub fn evaluations(&self) -> u64 {
        self.selection.evaluations.get()
    }

    /// Whether the selector still listens to its source.
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// Release the subscription. Safe to call more than once.
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
            tracing::info!(view = %self.current(), "ViewSelector: unmounted");
        }
    }
}

impl fmt::Debug for ViewSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewSelector")
            .field("current", &self.current())
            .field("evaluations", &self.evaluations())
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockStatusSource;
    use std::cell::RefCell;

    #[test]
    fn test_mount_evaluates_current_status() {
        let source = MockStatusSource::with_status("logged");
        let selector = ViewSelector::mount(&source);
        assert_eq!(selector.current(), ViewIdentity::Waiting);
        assert_eq!(selector.evaluations(), 1);
        assert!(selector.is_mounted());
    }

    #[test]
    fn test_mount_on_unset_status_is_identification() {
        let source = MockStatusSource::new();
        let selector = ViewSelector::mount(&source);
        assert_eq!(selector.current(), ViewIdentity::Identification);
    }

    #[test]
    fn test_each_notification_evaluates_once() {
        let source = MockStatusSource::new();
        let selector = ViewSelector::mount(&source);

        source.set_status(Some("started"));
        assert_eq!(selector.evaluations(), 2);
        source.set_status(Some("started"));
        assert_eq!(selector.evaluations(), 3);
        assert_eq!(selector.current(), ViewIdentity::Active);
    }

    #[test]
    fn test_on_select_sequence() {
        let source = MockStatusSource::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _selector = ViewSelector::mount_with(&source, move |view| sink.borrow_mut().push(view));

        source.set_status(Some("logged"));
        source.set_status(Some("started"));
        source.set_status(Some("bogus"));

        assert_eq!(
            *seen.borrow(),
            vec![
                ViewIdentity::Identification,
                ViewIdentity::Waiting,
                ViewIdentity::Active,
                ViewIdentity::Identification,
            ]
        );
    }

    #[test]
    fn test_unmount_releases_subscription() {
        let source = MockStatusSource::new();
        let mut selector = ViewSelector::mount(&source);
        assert_eq!(source.active_listeners(), 1);

        selector.unmount();
        assert!(!selector.is_mounted());
        assert_eq!(source.active_listeners(), 0);

        source.set_status(Some("started"));
        assert_eq!(selector.current(), ViewIdentity::Identification);
        assert_eq!(selector.evaluations(), 1);

        selector.unmount();
        assert_eq!(source.active_listeners(), 0);
    }

    #[test]
    fn test_drop_releases_subscription() {
        let source = MockStatusSource::new();
        let calls = Rc::new(Cell::new(0));
        let c = Rc::clone(&calls);
        let selector = ViewSelector::mount_with(&source, move |_| c.set(c.get() + 1));
        assert_eq!(calls.get(), 1);

        drop(selector);
        assert_eq!(source.active_listeners(), 0);
        source.set_status(Some("logged"));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_selector_never_writes_status() {
        let source = MockStatusSource::with_status("bogus");
        let _selector = ViewSelector::mount(&source);
        source.emit();
        assert_eq!(source.status(), Some("bogus".to_string()));
    }
}
