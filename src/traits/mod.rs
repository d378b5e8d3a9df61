//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`StatusSource`] - Read access to the session status plus change
//!   notification. Implemented by [`Store`](crate::store::Store) and by
//!   [`MockStatusSource`](crate::adapters::mock::MockStatusSource).

pub mod status_source;
pub mod subscription;

pub use status_source::{StatusListener, StatusSource};
pub use subscription::Subscription;
