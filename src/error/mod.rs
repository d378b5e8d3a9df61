//! Error handling for the parlor client.
//!
//! The view selector is total and has no error paths; a status it does not
//! recognize selects the identification view. Everything here belongs to the
//! host around it:
//!
//! | Variant | Category | Raised by |
//! |---------|----------|-----------|
//! | `Config` | Configuration | CLI and environment parsing |
//! | `Snapshot` | User | `--state` file parsing |
//! | `Io` | System | Snapshot and log file access |
//! | `Terminal` | System | Terminal setup |

mod category;
mod parlor_error;
mod result;

pub use category::ErrorCategory;
pub use parlor_error::ParlorError;
pub use result::ParlorResult;
