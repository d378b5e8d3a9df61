//! Result type alias for parlor operations.

use super::parlor_error::ParlorError;

/// Type alias for Results using ParlorError.
pub type ParlorResult<T> = Result<T, ParlorError>;
