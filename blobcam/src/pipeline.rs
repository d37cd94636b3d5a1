//! Per-frame processing
//!
//! One call to [`FrameProcessor::process`] runs the whole chain on the
//! planes of a [`FramePool`]:
//!
//! 1. histogram and Otsu selection (automatic mode only)
//! 2. binarization of `grayscale` into `threshold`
//! 3. 3x3 erosion into `erosion`, 3x3 dilation into `dilation`
//! 4. conversion of `dilation` to the unit convention, written over `erosion`
//! 5. region labeling
//! 6. outline drawing on `grayscale` and `dilation`
//!
//! The processor owns the histogram, region list and labeler tables; the
//! pool owns the planes. Nothing is allocated per frame.

use crate::{PipelineOptions, PipelineResult};
use blobcam_core::{FramePool, Histogram};
use blobcam_morph::{dilate_3x3, erode_3x3};
use blobcam_region::{
    ConnectedComponentLabeler, RegionError, RegionLabeler, RegionList, to_unit_binary,
};
use blobcam_threshold::{ThresholdMode, ThresholdSelection, binarize, select_threshold};
use log::{trace, warn};

/// Summary of one processed frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Threshold used and how it was chosen
    pub selection: ThresholdSelection,
    /// Number of regions the labeler found
    pub region_count: usize,
    /// Number of regions outlined (at most the region capacity)
    pub regions_drawn: usize,
    /// True if the labeler found more regions than fit
    pub overflowed: bool,
}

impl FrameReport {
    /// Threshold used for this frame
    pub fn threshold(&self) -> u8 {
        self.selection.threshold
    }
}

/// Runs the mask pipeline over a [`FramePool`]
///
/// # Example
///
/// ```
/// use blobcam::{FrameGeometry, FramePool, FrameProcessor, PipelineOptions};
///
/// let geometry = FrameGeometry::new(32, 24).unwrap();
/// let mut pool = FramePool::new(geometry).unwrap();
/// pool.grayscale.fill(200);
/// for row in 8..16 {
///     for col in 8..16 {
///         pool.grayscale.set(row, col, 20).unwrap();
///     }
/// }
///
/// let mut processor = FrameProcessor::new(PipelineOptions::for_geometry(geometry)).unwrap();
/// let report = processor.process(&mut pool).unwrap();
/// assert_eq!(report.region_count, 1);
/// assert_eq!(processor.regions().as_slice()[0].area, 64);
/// ```
#[derive(Debug)]
pub struct FrameProcessor<L = ConnectedComponentLabeler> {
    options: PipelineOptions,
    mode: ThresholdMode,
    labeler: L,
    histogram: Histogram,
    regions: RegionList,
}

impl FrameProcessor<ConnectedComponentLabeler> {
    /// Build a processor with the default connected-component labeler.
    pub fn new(options: PipelineOptions) -> PipelineResult<Self> {
        options.validate()?;
        let labeler = ConnectedComponentLabeler::new(options.geometry, options.connectivity)
            .with_min_area(options.min_region_area);
        Self::with_labeler(options, labeler)
    }
}

impl<L: RegionLabeler> FrameProcessor<L> {
    /// Build a processor around any labeler.
    ///
    /// `connectivity` and `min_region_area` only configure the default
    /// labeler and are ignored here.
    pub fn with_labeler(options: PipelineOptions, labeler: L) -> PipelineResult<Self> {
        options.validate()?;
        let mode = options.threshold_mode()?;
        Ok(Self {
            regions: RegionList::with_capacity(options.region_capacity),
            histogram: Histogram::new(),
            options,
            mode,
            labeler,
        })
    }

    /// Options the processor was built with
    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Current threshold mode
    pub fn threshold_mode(&self) -> ThresholdMode {
        self.mode
    }

    /// Change the threshold setting between frames.
    ///
    /// 0 selects automatic mode, 1..=100 a manual threshold.
    pub fn set_threshold_percent(&mut self, percent: u32) -> PipelineResult<()> {
        self.mode = ThresholdMode::from_percent(percent)?;
        self.options.threshold_percent = percent;
        Ok(())
    }

    /// Regions of the last processed frame
    pub fn regions(&self) -> &RegionList {
        &self.regions
    }

    /// Histogram of the last frame processed in automatic mode
    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    /// Borrow the labeler
    pub fn labeler(&self) -> &L {
        &self.labeler
    }

    /// Process the frame currently held in `pool.grayscale`.
    ///
    /// On return `pool.grayscale` and `pool.dilation` carry region outlines,
    /// `pool.threshold` holds the raw mask and `pool.erosion` the
    /// unit-convention mask handed to the labeler.
    ///
    /// # Errors
    ///
    /// Fails fast with a dimension mismatch if any pool plane differs from
    /// the configured geometry. A region overflow is not an error: the
    /// regions that fit are drawn and [`FrameReport::overflowed`] is set.
    pub fn process(&mut self, pool: &mut FramePool) -> PipelineResult<FrameReport> {
        pool.validate()?;
        self.options.geometry.check_plane(&pool.grayscale)?;

        let selection = select_threshold(self.mode, &pool.grayscale, &mut self.histogram);
        binarize(&pool.grayscale, selection.threshold, &mut pool.threshold)?;
        trace!(
            "binarized: {} foreground samples",
            pool.threshold.count_value(blobcam_core::mask::FOREGROUND)
        );

        let border = self.options.border;
        erode_3x3(&pool.threshold, &mut pool.erosion, border)?;
        dilate_3x3(&pool.erosion, &mut pool.dilation, border)?;

        to_unit_binary(&pool.dilation, &mut pool.erosion)?;
        let labeled = self.labeler.label(&pool.erosion, &mut self.regions);
        let (region_count, overflowed) = match labeled {
            Ok(n) => (n, false),
            Err(RegionError::CapacityExceeded { found, capacity }) => {
                warn!(
                    "found {} regions, drawing the first {} only",
                    found, capacity
                );
                (found, true)
            }
            Err(e) => return Err(e.into()),
        };

        let drawn = pool
            .grayscale
            .draw_box_outlines(self.regions.boxes(), self.options.grayscale_box_value);
        pool.dilation
            .draw_box_outlines(self.regions.boxes(), self.options.dilation_box_value);
        trace!("outlined {} of {} regions", drawn, region_count);

        Ok(FrameReport {
            selection,
            region_count,
            regions_drawn: drawn,
            overflowed,
        })
    }
}
