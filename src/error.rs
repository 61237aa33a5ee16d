//! Error type shared by every sketch operation.

use thiserror::Error;

/// Errors returned by the sketch pipeline.
///
/// Every rejection happens before any pixel is touched, so a failed call
/// never leaves a partial result behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SketchError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl SketchError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        SketchError::InvalidInput(reason.into())
    }

    /// The human-readable reason carried by the error.
    pub fn reason(&self) -> &str {
        match self {
            SketchError::InvalidInput(reason) => reason,
        }
    }
}

/// Alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SketchError>;
