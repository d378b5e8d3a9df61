//! Concrete implementations of trait abstractions.
//!
//! The production [`StatusSource`](crate::traits::StatusSource) is
//! [`Store`](crate::store::Store). This module holds the test doubles.
//!
//! # Mock Implementations
//!
//! - [`mock::MockStatusSource`] - Status injection without reducer semantics

pub mod mock;

pub use mock::MockStatusSource;
