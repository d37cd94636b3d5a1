//! Threshold mode and per-frame threshold selection
//!
//! A run either uses a manual threshold taken from a percentage setting or
//! computes one with Otsu's method. The two are mutually exclusive.

use crate::otsu::otsu_threshold;
use crate::{ThresholdError, ThresholdResult};
use blobcam_core::{Histogram, Plane};
use log::{debug, info};

/// How the binarization threshold is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThresholdMode {
    /// Select the threshold from the frame histogram
    #[default]
    Automatic,
    /// Use a fixed threshold
    Manual(u8),
}

impl ThresholdMode {
    /// Interpret a percentage setting.
    ///
    /// 0 selects [`ThresholdMode::Automatic`]; any other value in [1, 100]
    /// is scaled to `percent * 255 / 100` (integer division).
    ///
    /// # Errors
    ///
    /// Returns [`ThresholdError::PercentOutOfRange`] above 100.
    ///
    /// # Example
    ///
    /// ```
    /// use blobcam_threshold::ThresholdMode;
    ///
    /// assert_eq!(ThresholdMode::from_percent(0).unwrap(), ThresholdMode::Automatic);
    /// assert_eq!(ThresholdMode::from_percent(50).unwrap(), ThresholdMode::Manual(127));
    /// assert!(ThresholdMode::from_percent(101).is_err());
    /// ```
    pub fn from_percent(percent: u32) -> ThresholdResult<Self> {
        match percent {
            0 => Ok(ThresholdMode::Automatic),
            1..=100 => Ok(ThresholdMode::Manual((percent * 255 / 100) as u8)),
            _ => Err(ThresholdError::PercentOutOfRange(percent)),
        }
    }
}

/// Threshold chosen for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdSelection {
    /// Threshold handed to the binarizer
    pub threshold: u8,
    /// Mode the threshold came from
    pub mode: ThresholdMode,
    /// Maximum between-class variance, automatic mode only
    pub max_variance: Option<f64>,
}

/// Choose the threshold for `gray` according to `mode`.
///
/// In automatic mode `hist` is rebuilt from `gray` before the search; in
/// manual mode it is left untouched.
pub fn select_threshold(
    mode: ThresholdMode,
    gray: &Plane,
    hist: &mut Histogram,
) -> ThresholdSelection {
    match mode {
        ThresholdMode::Manual(threshold) => {
            info!("manual threshold: {}", threshold);
            ThresholdSelection {
                threshold,
                mode,
                max_variance: None,
            }
        }
        ThresholdMode::Automatic => {
            hist.accumulate(gray);
            debug!("histogram = {:?}", hist.bins());
            let result = otsu_threshold(hist);
            info!(
                "automatic threshold: {}; max variance: {:.3}",
                result.threshold, result.max_variance
            );
            ThresholdSelection {
                threshold: result.threshold,
                mode,
                max_variance: Some(result.max_variance),
            }
        }
    }
}
