//! Error category classification.
//!
//! Categories let callers decide whether reconnecting could help without
//! matching on every variant.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The byte source or underlying I/O failed.
    /// Generally transient; a reconnect may succeed.
    Transport,

    /// The bytes were not valid UTF-8.
    /// Retrying the same source will fail the same way.
    Encoding,

    /// An event payload could not be interpreted.
    Payload,
}

impl ErrorCategory {
    /// Returns true if errors in this category are generally transient.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCategory::Transport)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Encoding => "encoding",
            ErrorCategory::Payload => "payload",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
