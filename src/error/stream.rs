//! Stream adapter error types.
//!
//! Errors raised while pulling bytes from a source and decoding them into
//! text for the parser.

use super::category::ErrorCategory;
use thiserror::Error;

/// Errors produced by the stream adapter.
#[derive(Debug, Error)]
pub enum StreamError {
    /// The byte source yielded an error (connection drop, body read failure).
    #[error("Byte source failed: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Reading from an I/O handle failed.
    #[error("I/O error reading stream: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid UTF-8 encountered in strict mode.
    #[error("Invalid UTF-8 in stream at byte offset {offset}")]
    InvalidUtf8 { offset: usize },

    /// The source ended in the middle of a multi-byte sequence (strict mode).
    #[error("Stream ended inside a UTF-8 sequence: {len} bytes at offset {offset}")]
    TruncatedUtf8 { offset: usize, len: usize },
}

impl StreamError {
    /// Wrap a byte source error.
    pub fn from_source<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        StreamError::Source(Box::new(err))
    }

    /// Get the error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            StreamError::Source(_) | StreamError::Io(_) => ErrorCategory::Transport,
            StreamError::InvalidUtf8 { .. } | StreamError::TruncatedUtf8 { .. } => {
                ErrorCategory::Encoding
            }
        }
    }

    /// Check if reconnecting could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_display() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "body closed");
        let err = StreamError::from_source(io);
        assert_eq!(err.to_string(), "Byte source failed: body closed");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_utf8_error_display() {
        assert_eq!(
            StreamError::InvalidUtf8 { offset: 12 }.to_string(),
            "Invalid UTF-8 in stream at byte offset 12"
        );
        assert_eq!(
            StreamError::TruncatedUtf8 { offset: 4, len: 2 }.to_string(),
            "Stream ended inside a UTF-8 sequence: 2 bytes at offset 4"
        );
    }

    #[test]
    fn test_retryable() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "x");
        assert!(StreamError::from_source(io).is_retryable());
        assert!(!StreamError::InvalidUtf8 { offset: 0 }.is_retryable());
    }
}
