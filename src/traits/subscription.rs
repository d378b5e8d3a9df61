//! RAII subscription handle.

use std::fmt;

/// Handle for a registered listener.
///
/// Releasing the handle (via [`Subscription::unsubscribe`] or drop) removes the
/// listener from its source. After release the listener is never invoked
/// again, even if the source is mid-notification.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Create a handle that runs `release` exactly once when released.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Release the listener now.
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    /// Whether the listener is still registered through this handle.
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
