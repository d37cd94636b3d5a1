//! 3x3 binary morphology on byte masks
//!
//! Masks hold [`mask::FOREGROUND`] (0xFF) or [`mask::BACKGROUND`] (0x00) per
//! sample, so erosion is the bitwise AND of the 3x3 neighborhood and
//! dilation the bitwise OR.
//!
//! Only interior samples are computed: row 0, row `h - 1`, column 0 and
//! column `w - 1` never have a full neighborhood. What the output holds on
//! that outer ring is decided by [`BorderMode`].
//!
//! [`mask::FOREGROUND`]: blobcam_core::mask::FOREGROUND
//! [`mask::BACKGROUND`]: blobcam_core::mask::BACKGROUND

use crate::MorphResult;
use blobcam_core::{Plane, mask};

/// Treatment of the outer ring of a morphology output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderMode {
    /// Write background on the outer ring
    #[default]
    Clear,
    /// Copy the outer ring from the source plane
    Copy,
    /// Leave whatever the output buffer held before
    Leave,
}

/// Neighborhood combine operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combine {
    And,
    Or,
}

/// Erode a mask with a 3x3 brick.
///
/// An interior output sample is the AND of the source sample and its eight
/// neighbors: it stays foreground only if the whole window is foreground.
///
/// # Errors
///
/// Returns a dimension mismatch if `dst` is not the size of `src`.
pub fn erode_3x3(src: &Plane, dst: &mut Plane, border: BorderMode) -> MorphResult<()> {
    apply_3x3(src, dst, border, Combine::And)
}

/// Dilate a mask with a 3x3 brick.
///
/// An interior output sample is the OR of the source sample and its eight
/// neighbors: it becomes foreground if any sample in the window is.
pub fn dilate_3x3(src: &Plane, dst: &mut Plane, border: BorderMode) -> MorphResult<()> {
    apply_3x3(src, dst, border, Combine::Or)
}

/// Open a mask: 3x3 erosion into `eroded`, then 3x3 dilation into `dst`.
///
/// Removes foreground specks smaller than the window and restores the
/// surviving regions.
pub fn open_3x3(
    src: &Plane,
    eroded: &mut Plane,
    dst: &mut Plane,
    border: BorderMode,
) -> MorphResult<()> {
    erode_3x3(src, eroded, border)?;
    dilate_3x3(eroded, dst, border)
}

fn apply_3x3(src: &Plane, dst: &mut Plane, border: BorderMode, op: Combine) -> MorphResult<()> {
    src.check_same_size(dst)?;

    let w = src.width();
    let h = src.height();
    let stride = src.stride();
    let s = src.data();

    for row in 1..h.saturating_sub(1) {
        for col in 1..w.saturating_sub(1) {
            let center = src.index(row, col);
            let above = center - stride;
            let below = center + stride;
            let v = match op {
                Combine::And => row_and(s, above) & row_and(s, center) & row_and(s, below),
                Combine::Or => row_or(s, above) | row_or(s, center) | row_or(s, below),
            };
            dst.set_unchecked(row, col, v);
        }
    }

    apply_border(src, dst, border);
    Ok(())
}

/// AND of the sample at `i` and its left and right neighbors
#[inline]
fn row_and(s: &[u8], i: usize) -> u8 {
    s[i - 1] & s[i] & s[i + 1]
}

/// OR of the sample at `i` and its left and right neighbors
#[inline]
fn row_or(s: &[u8], i: usize) -> u8 {
    s[i - 1] | s[i] | s[i + 1]
}

/// Apply the border policy to the outer ring of `dst`.
///
/// Only rows 0 and `h - 1` and columns 0 and `w - 1` are visited.
fn apply_border(src: &Plane, dst: &mut Plane, border: BorderMode) {
    if border == BorderMode::Leave {
        return;
    }
    let w = dst.width();
    let h = dst.height();
    let mut write = |row: u32, col: u32| {
        let v = match border {
            BorderMode::Copy => src.get_unchecked(row, col),
            _ => mask::BACKGROUND,
        };
        dst.set_unchecked(row, col, v);
    };

    for col in 0..w {
        write(0, col);
        write(h - 1, col);
    }
    for row in 1..h.saturating_sub(1) {
        write(row, 0);
        write(row, w - 1);
    }
}
