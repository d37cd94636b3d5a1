//! Intensity histogram for 8-bit planes
//!
//! A fixed 256-bin count array, rebuilt from scratch for every frame.

use super::Plane;

/// Number of bins in an 8-bit intensity histogram
pub const HISTOGRAM_BINS: usize = 256;

/// 256-bin intensity histogram
///
/// The sum of all bins equals the number of samples of the plane it was
/// built from.
///
/// # Example
///
/// ```
/// use blobcam_core::{Histogram, Plane};
///
/// let plane = Plane::filled(10, 10, 42).unwrap();
/// let hist = Histogram::from_plane(&plane);
/// assert_eq!(hist.count(42), 100);
/// assert_eq!(hist.total(), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    bins: [u32; HISTOGRAM_BINS],
}

impl Default for Histogram {
    fn default() -> Self {
        Self {
            bins: [0; HISTOGRAM_BINS],
        }
    }
}

impl Histogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the histogram of a plane.
    pub fn from_plane(plane: &Plane) -> Self {
        let mut hist = Self::new();
        hist.accumulate(plane);
        hist
    }

    /// Build a histogram directly from bin counts.
    pub fn from_bins(bins: [u32; HISTOGRAM_BINS]) -> Self {
        Self { bins }
    }

    /// Zero the bins and count every sample of `plane`.
    ///
    /// Reuses the existing storage; nothing is allocated.
    pub fn accumulate(&mut self, plane: &Plane) {
        self.bins.fill(0);
        for &v in plane.data() {
            self.bins[v as usize] += 1;
        }
    }

    /// Count in bin `value`
    #[inline]
    pub fn count(&self, value: u8) -> u32 {
        self.bins[value as usize]
    }

    /// All bins, indexed by intensity
    #[inline]
    pub fn bins(&self) -> &[u32; HISTOGRAM_BINS] {
        &self.bins
    }

    /// Sum of all bins
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|&c| c as u64).sum()
    }

    /// Sum of `count * intensity` over all bins
    pub fn moment(&self) -> u64 {
        self.bins
            .iter()
            .enumerate()
            .map(|(i, &c)| c as u64 * i as u64)
            .sum()
    }

    /// True if every bin is zero
    pub fn is_empty(&self) -> bool {
        self.bins.iter().all(|&c| c == 0)
    }

    /// Number of non-empty bins
    pub fn occupied_bins(&self) -> usize {
        self.bins.iter().filter(|&&c| c != 0).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_counts_every_sample() {
        let rows: [&[u8]; 2] = [&[0, 1, 1, 255], &[255, 255, 7, 0]];
        let plane = Plane::from_rows(&rows).unwrap();
        let hist = Histogram::from_plane(&plane);
        assert_eq!(hist.count(0), 2);
        assert_eq!(hist.count(1), 2);
        assert_eq!(hist.count(7), 1);
        assert_eq!(hist.count(255), 3);
        assert_eq!(hist.total(), plane.len() as u64);
        assert_eq!(hist.occupied_bins(), 4);
    }

    #[test]
    fn test_accumulate_resets_previous_counts() {
        let a = Plane::filled(4, 4, 10).unwrap();
        let b = Plane::filled(4, 4, 20).unwrap();
        let mut hist = Histogram::from_plane(&a);
        hist.accumulate(&b);
        assert_eq!(hist.count(10), 0);
        assert_eq!(hist.count(20), 16);
        assert_eq!(hist.total(), 16);
    }

    #[test]
    fn test_moment() {
        let mut bins = [0u32; HISTOGRAM_BINS];
        bins[2] = 3;
        bins[10] = 1;
        let hist = Histogram::from_bins(bins);
        assert_eq!(hist.moment(), 16);
        assert!(!hist.is_empty());
        assert!(Histogram::new().is_empty());
    }
}
