//! Completion-chunk payload errors.

use super::category::ErrorCategory;
use super::stream::StreamError;
use thiserror::Error;

/// Errors produced while turning events into text deltas.
#[derive(Debug, Error)]
pub enum DeltaError {
    /// Event data was not a valid completion chunk.
    #[error("Invalid JSON in completion chunk: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The underlying event stream failed.
    #[error(transparent)]
    Stream(#[from] StreamError),
}

impl DeltaError {
    /// Get the error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            DeltaError::InvalidJson(_) => ErrorCategory::Payload,
            DeltaError::Stream(err) => err.category(),
        }
    }

    /// Check if reconnecting could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }
}
