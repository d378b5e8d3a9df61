//! Parlor - a terminal client for session-based lobby games.
//!
//! The interesting part is [`selector`]: given the session status held in the
//! shared [`store`], it picks exactly one top-level view (identification,
//! lobby, or game) and keeps that choice current as the status changes.
//!
//! ```
//! use parlor::selector::{ViewIdentity, ViewSelector};
//! use parlor::store::{Store, StoreAction};
//!
//! let store = Store::new();
//! let selector = ViewSelector::mount(&store);
//! assert_eq!(selector.current(), ViewIdentity::Identification);
//!
//! store.dispatch(StoreAction::LoggedIn);
//! assert_eq!(selector.current(), ViewIdentity::Waiting);
//! ```

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod selector;
pub mod startup;
pub mod state;
pub mod store;
pub mod terminal;
pub mod traits;
pub mod ui;
