//! Error types for blobcam-threshold

use thiserror::Error;

/// Errors that can occur during threshold selection and binarization
#[derive(Debug, Error)]
pub enum ThresholdError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] blobcam_core::Error),

    /// Manual threshold percentage outside [0, 100]
    #[error("threshold percentage out of range: {0} (expected 0..=100)")]
    PercentOutOfRange(u32),
}

/// Result type for threshold operations
pub type ThresholdResult<T> = Result<T, ThresholdError>;
