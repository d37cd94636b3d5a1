//! Deterministic synthetic frames
//!
//! Fixtures are generated rather than loaded so every regression test is
//! self-contained and reproducible.

use crate::TestResult;
use blobcam_core::{Box, Plane};

/// Plane of `background` with each box filled with `foreground`.
pub fn blob_frame(
    width: u32,
    height: u32,
    background: u8,
    foreground: u8,
    blobs: &[Box],
) -> TestResult<Plane> {
    let mut plane = Plane::filled(width, height, background)?;
    for b in blobs {
        for y in b.top()..b.bottom() {
            for x in b.left()..b.right() {
                plane.set_clipped(y, x, foreground);
            }
        }
    }
    Ok(plane)
}

/// Plane of uniform noise in `[lo, hi]` from a seeded generator.
pub fn noise_frame(width: u32, height: u32, lo: u8, hi: u8, seed: u32) -> TestResult<Plane> {
    let mut plane = Plane::new(width, height)?;
    let mut rng = Lcg::new(seed);
    let span = hi.saturating_sub(lo) as u32 + 1;
    for v in plane.data_mut() {
        *v = lo + (rng.next() % span) as u8;
    }
    Ok(plane)
}

/// Flip `count` pseudo-random samples of `plane` to `value`.
pub fn sprinkle(plane: &mut Plane, count: usize, value: u8, seed: u32) {
    let mut rng = Lcg::new(seed);
    let len = plane.len() as u32;
    for _ in 0..count {
        let idx = (rng.next() % len) as usize;
        plane.data_mut()[idx] = value;
    }
}

/// Simple linear congruential generator for reproducible randomness
struct Lcg(u32);

impl Lcg {
    fn new(seed: u32) -> Self {
        Self(seed)
    }

    fn next(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        (self.0 >> 16) & 0x7fff
    }
}
