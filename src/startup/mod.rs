//! Startup configuration and logging initialization.
//!
//! # Components
//!
//! - [`config`] - Environment, flags and snapshot resolution
//! - [`logging`] - `tracing` subscriber writing to a non-blocking log file
//!
//! # Usage
//!
//! ```ignore
//! use parlor::startup::{init_tracing, StartupConfig};
//!
//! let config = StartupConfig::from_env().with_cli_options(options);
//! let _log = init_tracing(&config)?;
//! let state = config.resolve_initial_state()?;
//! ```

pub mod config;
pub mod logging;

pub use config::StartupConfig;
pub use logging::{init_tracing, LogHandle};
