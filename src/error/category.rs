//! Error category classification.
//!
//! Categories drive the hint shown next to an error when the client exits
//! before the terminal UI starts.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// User action required (bad arguments, unreadable snapshot).
    User,

    /// System/OS errors (filesystem, terminal).
    System,

    /// Configuration errors (invalid environment or flags).
    Configuration,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::User => "Please check your input and try again",
            ErrorCategory::System => "Check file permissions and that stdout is a terminal",
            ErrorCategory::Configuration => "Run `parlor --help` for valid options",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
