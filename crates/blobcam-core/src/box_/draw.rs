//! Box outline rendering onto planes
//!
//! Outlines are drawn with a single gray value. Only the perimeter of the
//! half-open rectangle is written: rows `top` and `bottom - 1` across
//! `[left, right)`, and columns `left` and `right - 1` across
//! `[top, bottom - 1)`. Samples outside the plane are skipped.

use crate::box_::Box;
use crate::plane::Plane;

impl Plane {
    /// Draw the outline of one box with gray value `value`.
    ///
    /// Returns the number of samples written (corners written twice count
    /// twice).
    pub fn draw_box_outline(&mut self, b: &Box, value: u8) -> usize {
        if b.is_empty() {
            return 0;
        }
        let (left, top, right, bottom) = (b.left(), b.top(), b.right(), b.bottom());
        let mut written = 0;

        // Horizontal lines
        for x in left..right {
            written += self.set_clipped(top, x, value) as usize;
            written += self.set_clipped(bottom - 1, x, value) as usize;
        }

        // Vertical lines
        for y in top..bottom - 1 {
            written += self.set_clipped(y, left, value) as usize;
            written += self.set_clipped(y, right - 1, value) as usize;
        }

        written
    }

    /// Draw the outline of every box yielded by `boxes`.
    ///
    /// Returns how many boxes were drawn.
    pub fn draw_box_outlines<'a, I>(&mut self, boxes: I, value: u8) -> usize
    where
        I: IntoIterator<Item = &'a Box>,
    {
        let mut n = 0;
        for b in boxes {
            self.draw_box_outline(b, value);
            n += 1;
        }
        n
    }
}
