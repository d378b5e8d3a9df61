//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockStatusSource`] - Status source with manual notification control

pub mod status;

pub use status::MockStatusSource;
