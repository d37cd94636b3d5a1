//! Sample addressing
//!
//! Every 2-D access into a [`Plane`] goes through [`Plane::index`], which
//! maps `(row, col)` to `row * stride + col` with `stride == width`.

use super::Plane;
use crate::error::{Error, Result};

impl Plane {
    /// Linear offset of `(row, col)` in the sample buffer.
    ///
    /// No bounds check beyond a debug assertion; callers iterate within
    /// `0..height` x `0..width`.
    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        debug_assert!(row < self.height && col < self.width);
        row as usize * self.stride() + col as usize
    }

    /// Get the sample at `(row, col)`.
    ///
    /// Returns `None` if the coordinate is outside the plane.
    pub fn get(&self, row: u32, col: u32) -> Option<u8> {
        if row < self.height && col < self.width {
            Some(self.data[self.index(row, col)])
        } else {
            None
        }
    }

    /// Get a sample without the `Option` wrapper.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the plane.
    #[inline]
    pub fn get_unchecked(&self, row: u32, col: u32) -> u8 {
        self.data[self.index(row, col)]
    }

    /// Set the sample at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinate is outside the plane.
    pub fn set(&mut self, row: u32, col: u32, value: u8) -> Result<()> {
        if row >= self.height || col >= self.width {
            return Err(Error::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(row, col);
        self.data[idx] = value;
        Ok(())
    }

    /// Set a sample without returning an error.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the plane.
    #[inline]
    pub fn set_unchecked(&mut self, row: u32, col: u32, value: u8) {
        let idx = self.index(row, col);
        self.data[idx] = value;
    }

    /// Set the sample at signed coordinates, ignoring anything off-plane.
    ///
    /// Returns true if a sample was written.
    #[inline]
    pub fn set_clipped(&mut self, row: i32, col: i32, value: u8) -> bool {
        if row < 0 || col < 0 || row as u32 >= self.height || col as u32 >= self.width {
            return false;
        }
        self.set_unchecked(row as u32, col as u32, value);
        true
    }
}
