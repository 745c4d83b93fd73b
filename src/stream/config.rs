//! Stream adapter configuration.

use crate::sse::Utf8Mode;

/// Configuration for an [`SseStream`](super::SseStream).
///
/// Use the builder pattern to customize adapter behavior.
///
/// # Example
///
/// ```
/// use eventfeed::sse::Utf8Mode;
/// use eventfeed::stream::StreamConfig;
///
/// let config = StreamConfig::default()
///     .with_reconnect_intervals(true)
///     .with_utf8_mode(Utf8Mode::Strict);
/// assert!(config.include_reconnect_intervals);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamConfig {
    /// Forward `retry` signals downstream (default: false, events only)
    pub include_reconnect_intervals: bool,
    /// Handling of invalid UTF-8 in the byte source (default: lossy)
    pub utf8_mode: Utf8Mode,
}

impl StreamConfig {
    /// Create a new StreamConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether reconnect intervals are forwarded.
    pub fn with_reconnect_intervals(mut self, include: bool) -> Self {
        self.include_reconnect_intervals = include;
        self
    }

    /// Set how invalid UTF-8 is handled.
    pub fn with_utf8_mode(mut self, mode: Utf8Mode) -> Self {
        self.utf8_mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StreamConfig::new();
        assert!(!config.include_reconnect_intervals);
        assert_eq!(config.utf8_mode, Utf8Mode::Lossy);
    }

    #[test]
    fn test_builder_chain() {
        let config = StreamConfig::new()
            .with_reconnect_intervals(true)
            .with_utf8_mode(Utf8Mode::Strict);
        assert!(config.include_reconnect_intervals);
        assert_eq!(config.utf8_mode, Utf8Mode::Strict);
    }
}
