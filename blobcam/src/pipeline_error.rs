//! Error types for the blobcam pipeline

use blobcam_morph::MorphError;
use blobcam_region::RegionError;
use blobcam_threshold::ThresholdError;
use thiserror::Error;

/// Errors that can occur while configuring or running the pipeline
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Core library error (geometry, dimension mismatch)
    #[error("core error: {0}")]
    Core(#[from] blobcam_core::Error),

    /// Threshold selection or binarization error
    #[error("threshold error: {0}")]
    Threshold(#[from] ThresholdError),

    /// Morphology error
    #[error("morphology error: {0}")]
    Morph(#[from] MorphError),

    /// Region labeling error other than a capacity overflow
    #[error("region error: {0}")]
    Region(#[from] RegionError),

    /// Invalid pipeline option
    #[error("invalid option: {0}")]
    InvalidOption(String),
}

/// Result type for pipeline operations
pub type PipelineResult<T> = Result<T, PipelineError>;
