//! Error types for blobcam-region

use thiserror::Error;

/// Errors that can occur during region labeling
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] blobcam_core::Error),

    /// More regions were found than the region list can hold
    ///
    /// The list is still filled up to its capacity.
    #[error("region capacity exceeded: found {found}, capacity {capacity}")]
    CapacityExceeded { found: usize, capacity: usize },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
