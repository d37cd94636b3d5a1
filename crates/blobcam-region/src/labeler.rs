//! Region labeling contract
//!
//! The pipeline hands a denoised mask to a [`RegionLabeler`] and only
//! relies on the result: a region count and one bounding box per region.
//! The labeling algorithm behind the trait is swappable.
//!
//! # Pixel convention
//!
//! Labelers read the unit convention: [`mask::UNIT_FOREGROUND`] (0x01) for
//! foreground and 0x00 for background. [`to_unit_binary`] is the fixed
//! mapping from the pipeline's 0xFF/0x00 masks.

use crate::RegionResult;
use crate::region::RegionList;
use blobcam_core::{Plane, mask};

/// Labels connected foreground regions of a unit-convention mask
pub trait RegionLabeler {
    /// Label `binary` and fill `regions` with what was found.
    ///
    /// `regions` is cleared first. On success returns the number of
    /// regions found.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::CapacityExceeded`] when more regions exist
    /// than `regions` can hold; the list then holds the first
    /// `regions.capacity()` of them.
    ///
    /// [`RegionError::CapacityExceeded`]: crate::RegionError::CapacityExceeded
    fn label(&mut self, binary: &Plane, regions: &mut RegionList) -> RegionResult<usize>;
}

impl<L: RegionLabeler + ?Sized> RegionLabeler for &mut L {
    fn label(&mut self, binary: &Plane, regions: &mut RegionList) -> RegionResult<usize> {
        (**self).label(binary, regions)
    }
}

/// Convert a 0xFF/0x00 mask into the unit convention.
///
/// Samples at or above [`mask::UNIT_CUTOFF`] become
/// [`mask::UNIT_FOREGROUND`], all others 0x00.
///
/// # Errors
///
/// Returns a dimension mismatch if `dst` is not the size of `src`.
pub fn to_unit_binary(src: &Plane, dst: &mut Plane) -> RegionResult<()> {
    src.check_same_size(dst)?;
    for (d, &s) in dst.data_mut().iter_mut().zip(src.data()) {
        *d = if s >= mask::UNIT_CUTOFF {
            mask::UNIT_FOREGROUND
        } else {
            mask::BACKGROUND
        };
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_unit_binary() {
        let src = Plane::from_rows(&[&[0x00, 0xFF, 0x7F, 0x80]]).unwrap();
        let mut dst = Plane::filled(4, 1, 9).unwrap();
        to_unit_binary(&src, &mut dst).unwrap();
        assert_eq!(dst.row(0), &[0, 1, 0, 1]);
    }

    #[test]
    fn test_to_unit_binary_size_mismatch() {
        let src = Plane::new(4, 1).unwrap();
        let mut dst = Plane::new(1, 4).unwrap();
        assert!(to_unit_binary(&src, &mut dst).is_err());
    }
}
