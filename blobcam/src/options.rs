//! Pipeline configuration
//!
//! Everything is fixed at startup: plane geometry, the threshold setting,
//! the morphology border policy and the region capacity.

use crate::{PipelineError, PipelineResult};
use blobcam_core::FrameGeometry;
use blobcam_morph::BorderMode;
use blobcam_region::ConnectivityType;
use blobcam_threshold::ThresholdMode;

/// Default maximum number of regions per frame
pub const DEFAULT_REGION_CAPACITY: usize = 64;
/// Default outline value drawn onto the grayscale plane
pub const DEFAULT_GRAYSCALE_BOX_VALUE: u8 = 255;
/// Default outline value drawn onto the dilation plane
pub const DEFAULT_DILATION_BOX_VALUE: u8 = 128;

/// Options for [`crate::FrameProcessor`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Plane dimensions shared by every plane of the pool
    pub geometry: FrameGeometry,
    /// Manual threshold in percent (1..=100), or 0 for automatic selection
    pub threshold_percent: u32,
    /// Outer-ring policy of erosion and dilation
    pub border: BorderMode,
    /// Connectivity of the default labeler
    pub connectivity: ConnectivityType,
    /// Maximum number of regions kept per frame
    pub region_capacity: usize,
    /// Regions with fewer pixels are dropped by the default labeler
    pub min_region_area: u32,
    /// Outline value for the grayscale plane
    pub grayscale_box_value: u8,
    /// Outline value for the dilation plane
    pub dilation_box_value: u8,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            geometry: FrameGeometry::default(),
            threshold_percent: 0,
            border: BorderMode::Clear,
            connectivity: ConnectivityType::EightWay,
            region_capacity: DEFAULT_REGION_CAPACITY,
            min_region_area: 0,
            grayscale_box_value: DEFAULT_GRAYSCALE_BOX_VALUE,
            dilation_box_value: DEFAULT_DILATION_BOX_VALUE,
        }
    }
}

impl PipelineOptions {
    /// Default options for a given geometry.
    pub fn for_geometry(geometry: FrameGeometry) -> Self {
        Self {
            geometry,
            ..Self::default()
        }
    }

    /// Threshold mode described by `threshold_percent`.
    pub fn threshold_mode(&self) -> PipelineResult<ThresholdMode> {
        Ok(ThresholdMode::from_percent(self.threshold_percent)?)
    }

    /// Check every option.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::Core`] for an empty geometry
    /// - [`PipelineError::Threshold`] for a percentage above 100
    /// - [`PipelineError::InvalidOption`] for a zero region capacity
    pub fn validate(&self) -> PipelineResult<()> {
        FrameGeometry::new(self.geometry.width, self.geometry.height)?;
        self.threshold_mode()?;
        if self.region_capacity == 0 {
            return Err(PipelineError::InvalidOption(
                "region_capacity must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}
