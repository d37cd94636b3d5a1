//! Box - Axis-aligned rectangle regions
//!
//! Boxes store an origin plus a size. The edge accessors are half-open:
//! `right()` and `bottom()` are one past the last covered column and row.

mod draw;

use crate::error::{Error, Result};

/// A rectangle region
///
/// This is a small `Copy` type; regions hand it around by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Box {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Box {
    /// Create a new box
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is negative.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        if w < 0 || h < 0 {
            return Err(Error::InvalidParameter(format!(
                "box dimensions must be non-negative: w={}, h={}",
                w, h
            )));
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a box without validation
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a box from half-open edges `[left, right) x [top, bottom)`.
    ///
    /// # Errors
    ///
    /// Returns an error if `right < left` or `bottom < top`.
    pub fn from_edges(left: i32, top: i32, right: i32, bottom: i32) -> Result<Self> {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Left x coordinate (inclusive)
    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    /// Top y coordinate (inclusive)
    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }

    /// Check if the box is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Check if a point is inside the box
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// True if `(x, y)` lies on the outline of the box.
    pub fn on_perimeter(&self, x: i32, y: i32) -> bool {
        self.contains_point(x, y)
            && (x == self.left()
                || x == self.right() - 1
                || y == self.top()
                || y == self.bottom() - 1)
    }

    /// Compute the intersection of two boxes
    pub fn intersect(&self, other: &Box) -> Option<Box> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Box {
                x,
                y,
                w: right - x,
                h: bottom - y,
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_creation() {
        let b = Box::new(10, 20, 100, 50).unwrap();
        assert_eq!(b.x, 10);
        assert_eq!(b.y, 20);
        assert_eq!(b.right(), 110);
        assert_eq!(b.bottom(), 70);
        assert_eq!(b.area(), 5000);

        assert!(Box::new(0, 0, -1, 10).is_err());
    }

    #[test]
    fn test_box_from_edges() {
        let b = Box::from_edges(2, 1, 5, 4).unwrap();
        assert_eq!((b.x, b.y, b.w, b.h), (2, 1, 3, 3));
        assert_eq!(b.left(), 2);
        assert_eq!(b.top(), 1);
        assert_eq!(b.right(), 5);
        assert_eq!(b.bottom(), 4);

        assert!(Box::from_edges(5, 0, 2, 3).is_err());
    }

    #[test]
    fn test_box_contains_and_perimeter() {
        let b = Box::from_edges(2, 1, 5, 4).unwrap();
        assert!(b.contains_point(2, 1));
        assert!(!b.contains_point(5, 1)); // Exclusive boundary
        assert!(b.on_perimeter(4, 2));
        assert!(b.on_perimeter(3, 3));
        assert!(!b.on_perimeter(3, 2));
        assert!(!b.on_perimeter(5, 2));
    }

    #[test]
    fn test_box_intersect() {
        let b1 = Box::new(0, 0, 100, 100).unwrap();
        let b2 = Box::new(50, 50, 100, 100).unwrap();
        let i = b1.intersect(&b2).unwrap();
        assert_eq!((i.x, i.y, i.w, i.h), (50, 50, 50, 50));

        let b3 = Box::new(200, 200, 10, 10).unwrap();
        assert!(b1.intersect(&b3).is_none());
    }
}
