//! Plane - The fixed-size 8-bit image buffer
//!
//! A `Plane` is a dense row-major grid of `u8` samples. Every plane that
//! takes part in one pipeline run has the same width and height, and the
//! stride of every row equals the width.
//!
//! # Pixel layout
//!
//! - One byte per sample, no padding
//! - Row `r` starts at byte offset `r * width`
//! - Sample `(row, col)` lives at `row * width + col`
//!
//! # Ownership model
//!
//! Planes are allocated once (normally through [`crate::FramePool`]) and
//! rewritten in place every frame. Pipeline stages borrow them as `&Plane`
//! or `&mut Plane` and never resize or reallocate them.

mod access;
mod histogram;

pub use histogram::{HISTOGRAM_BINS, Histogram};

use crate::error::{Error, Result};

/// PLANE - fixed-size grayscale or mask buffer
///
/// # Examples
///
/// ```
/// use blobcam_core::Plane;
///
/// let plane = Plane::new(376, 240).unwrap();
/// assert_eq!(plane.width(), 376);
/// assert_eq!(plane.height(), 240);
/// assert_eq!(plane.stride(), 376);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plane {
    /// Width in pixels (also the row stride)
    width: u32,
    /// Height in pixels
    height: u32,
    /// Row-major sample data, `width * height` bytes
    data: Vec<u8>,
}

impl Plane {
    /// Create a new plane with all samples zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, 0)
    }

    /// Create a new plane with every sample set to `value`.
    pub fn filled(width: u32, height: u32, value: u8) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            data: vec![value; len],
        })
    }

    /// Wrap an existing row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferLength`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if data.len() != width as usize * height as usize {
            return Err(Error::BufferLength {
                len: data.len(),
                width,
                height,
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a plane from a slice of equally long rows.
    ///
    /// Mostly useful for small hand-written fixtures.
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for row in rows {
            if row.len() as u32 != width {
                return Err(Error::InvalidParameter(format!(
                    "ragged rows: expected {} samples, got {}",
                    width,
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(width, height, data)
    }

    /// Get the width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the row stride in samples (always equal to the width)
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize
    }

    /// Get `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of samples, `width * height`
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false for a constructed plane; kept for slice-like symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw sample data
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw sample data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Samples of one row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height`.
    #[inline]
    pub fn row(&self, row: u32) -> &[u8] {
        let start = self.index(row, 0);
        &self.data[start..start + self.stride()]
    }

    /// Mutable samples of one row.
    #[inline]
    pub fn row_mut(&mut self, row: u32) -> &mut [u8] {
        let start = self.index(row, 0);
        let stride = self.stride();
        &mut self.data[start..start + stride]
    }

    /// Set every sample to `value`.
    pub fn fill(&mut self, value: u8) {
        self.data.fill(value);
    }

    /// Copy all samples from another plane of the same size.
    pub fn copy_from(&mut self, other: &Plane) -> Result<()> {
        self.check_same_size(other)?;
        self.data.copy_from_slice(&other.data);
        Ok(())
    }

    /// Count samples equal to `value`.
    pub fn count_value(&self, value: u8) -> usize {
        self.data.iter().filter(|&&v| v == value).count()
    }

    /// Check that `other` has exactly this plane's dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] with this plane as the expected
    /// size.
    pub fn check_same_size(&self, other: &Plane) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        Ok(())
    }
}
