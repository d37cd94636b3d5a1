//! Fixed-threshold binarization
//!
//! Darker pixels are foreground: a sample strictly below the threshold
//! becomes [`mask::FOREGROUND`], everything else [`mask::BACKGROUND`]. The
//! whole plane is processed, borders included.

use crate::ThresholdResult;
use blobcam_core::{Plane, mask};

/// Binarize `gray` into `out` with threshold `threshold`.
///
/// A threshold of 0 marks nothing as foreground.
///
/// # Errors
///
/// Returns a dimension mismatch if `out` is not the size of `gray`.
pub fn binarize(gray: &Plane, threshold: u8, out: &mut Plane) -> ThresholdResult<()> {
    gray.check_same_size(out)?;
    for (dst, &src) in out.data_mut().iter_mut().zip(gray.data()) {
        *dst = binarize_sample(src, threshold);
    }
    Ok(())
}

/// Binarize a single sample.
#[inline]
pub fn binarize_sample(value: u8, threshold: u8) -> u8 {
    if value < threshold {
        mask::FOREGROUND
    } else {
        mask::BACKGROUND
    }
}
