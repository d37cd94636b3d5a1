//! blobcam - Grayscale frame to denoised foreground mask
//!
//! A single-frame preprocessing stage for embedded cameras. Each frame goes
//! through:
//!
//! - Histogram construction and Otsu threshold selection (or a manual threshold)
//! - Binarization, darker pixels being foreground
//! - 3x3 erosion then dilation to remove noise
//! - Region labeling behind the [`RegionLabeler`] trait
//! - Bounding box outlines drawn onto the grayscale and dilation planes
//!
//! All planes live in a caller-owned [`FramePool`] allocated once at
//! startup.
//!
//! # Example
//!
//! ```
//! use blobcam::{FrameGeometry, FramePool, FrameProcessor, PipelineOptions};
//!
//! let geometry = FrameGeometry::from_sensor(752, 480, 2).unwrap();
//! let mut pool = FramePool::new(geometry).unwrap();
//! let mut processor = FrameProcessor::new(PipelineOptions::for_geometry(geometry)).unwrap();
//!
//! // Uniform frame: nothing to find
//! pool.grayscale.fill(90);
//! let report = processor.process(&mut pool).unwrap();
//! assert_eq!(report.region_count, 0);
//! ```

mod options;
mod pipeline;
mod pipeline_error;

pub use options::{
    DEFAULT_DILATION_BOX_VALUE, DEFAULT_GRAYSCALE_BOX_VALUE, DEFAULT_REGION_CAPACITY,
    PipelineOptions,
};
pub use pipeline::{FrameProcessor, FrameReport};
pub use pipeline_error::{PipelineError, PipelineResult};

// Re-export core types (primary data structures used everywhere)
pub use blobcam_core::*;

// Re-export stage crates as modules to avoid name conflicts
pub use blobcam_morph as morph;
pub use blobcam_region as region;
pub use blobcam_threshold as threshold;

pub use blobcam_region::RegionLabeler;
