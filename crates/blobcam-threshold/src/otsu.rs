//! Otsu threshold selection
//!
//! Picks the intensity cut `K` that maximizes the between-class variance
//!
//! ```text
//! Var(K) = W0 * W1 * (M0 / W0 - M1 / W1)^2
//! ```
//!
//! where class 0 holds intensities `[0, K)` and class 1 holds `[K, 256)`,
//! `W` is the pixel count of a class and `M` the sum of `count * intensity`.
//!
//! Candidates where either class is empty are skipped. The running best
//! starts at [`DEFAULT_THRESHOLD`] with variance 0 and is only replaced on
//! a strictly greater variance, so among equal maxima the smallest `K`
//! wins and a histogram with a single occupied bin keeps the default.

use blobcam_core::{HISTOGRAM_BINS, Histogram};

/// Threshold reported when no candidate has positive variance
pub const DEFAULT_THRESHOLD: u8 = 64;

/// Outcome of an Otsu search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OtsuResult {
    /// Selected threshold
    pub threshold: u8,
    /// Between-class variance at the selected threshold (diagnostic)
    pub max_variance: f64,
}

impl Default for OtsuResult {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_variance: 0.0,
        }
    }
}

impl OtsuResult {
    /// True if no candidate improved on the default
    pub fn is_degenerate(&self) -> bool {
        self.max_variance == 0.0
    }

    fn offer(&mut self, k: usize, variance: Option<f64>) {
        if let Some(var) = variance
            && var > self.max_variance
        {
            self.max_variance = var;
            self.threshold = k as u8;
        }
    }
}

/// Between-class variance from the class sums, or `None` if a class is
/// empty.
#[inline]
fn class_variance(w0: u64, m0: u64, w1: u64, m1: u64) -> Option<f64> {
    if w0 == 0 || w1 == 0 {
        return None;
    }
    let w0 = w0 as f64;
    let w1 = w1 as f64;
    let diff = m0 as f64 / w0 - m1 as f64 / w1;
    Some(w0 * w1 * diff * diff)
}

/// Select the Otsu threshold of a histogram.
///
/// Runs in O(256) with running prefix sums of count and
/// `count * intensity`.
///
/// # Example
///
/// ```
/// use blobcam_core::{HISTOGRAM_BINS, Histogram};
/// use blobcam_threshold::otsu_threshold;
///
/// let mut bins = [0u32; HISTOGRAM_BINS];
/// bins[20] = 500;
/// bins[220] = 500;
/// let result = otsu_threshold(&Histogram::from_bins(bins));
/// assert!(result.threshold > 20 && result.threshold <= 220);
/// ```
pub fn otsu_threshold(hist: &Histogram) -> OtsuResult {
    let total = hist.total();
    let moment = hist.moment();

    let mut best = OtsuResult::default();
    let mut w0 = 0u64;
    let mut m0 = 0u64;
    for (k, &count) in hist.bins().iter().enumerate() {
        // Class 0 is [0, k): the bins before k are already summed.
        best.offer(k, class_variance(w0, m0, total - w0, moment - m0));
        w0 += count as u64;
        m0 += count as u64 * k as u64;
    }
    best
}

/// Select the Otsu threshold by re-summing both classes for every `K`.
///
/// O(256²) reference for [`otsu_threshold`]; both derive the variance from
/// the same integer sums and return bit-identical results.
pub fn otsu_threshold_exhaustive(hist: &Histogram) -> OtsuResult {
    let bins = hist.bins();
    let mut best = OtsuResult::default();
    for k in 0..HISTOGRAM_BINS {
        let (mut w0, mut m0) = (0u64, 0u64);
        for (i, &count) in bins.iter().enumerate().take(k) {
            w0 += count as u64;
            m0 += count as u64 * i as u64;
        }
        let (mut w1, mut m1) = (0u64, 0u64);
        for (i, &count) in bins.iter().enumerate().skip(k) {
            w1 += count as u64;
            m1 += count as u64 * i as u64;
        }
        best.offer(k, class_variance(w0, m0, w1, m1));
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hist_with(entries: &[(usize, u32)]) -> Histogram {
        let mut bins = [0u32; HISTOGRAM_BINS];
        for &(i, c) in entries {
            bins[i] = c;
        }
        Histogram::from_bins(bins)
    }

    #[test]
    fn test_empty_histogram_keeps_default() {
        let result = otsu_threshold(&Histogram::new());
        assert_eq!(result.threshold, DEFAULT_THRESHOLD);
        assert_eq!(result.max_variance, 0.0);
        assert!(result.is_degenerate());
    }

    #[test]
    fn test_single_spike_at_extremes_keeps_default() {
        for value in [0usize, 255, 128] {
            let result = otsu_threshold(&hist_with(&[(value, 1000)]));
            assert_eq!(result.threshold, DEFAULT_THRESHOLD, "spike at {}", value);
            assert!(result.max_variance.is_finite());
        }
    }

    #[test]
    fn test_two_spikes() {
        let result = otsu_threshold(&hist_with(&[(30, 400), (200, 600)]));
        assert!(result.threshold > 30 && result.threshold <= 200);
        // Every K in (30, 200] splits the spikes identically; the first wins.
        assert_eq!(result.threshold, 31);
        let expected = 400.0 * 600.0 * (30.0f64 - 200.0).powi(2);
        assert_eq!(result.max_variance, expected);
    }

    #[test]
    fn test_adjacent_spikes() {
        let result = otsu_threshold(&hist_with(&[(0, 1), (255, 1)]));
        assert_eq!(result.threshold, 1);

        let result = otsu_threshold(&hist_with(&[(100, 5), (101, 5)]));
        assert_eq!(result.threshold, 101);
    }

    #[test]
    fn test_never_selects_empty_class() {
        let hist = hist_with(&[(3, 10), (4, 1), (250, 2)]);
        let result = otsu_threshold(&hist);
        let k = result.threshold as usize;
        let w0: u32 = hist.bins()[..k].iter().sum();
        let w1: u32 = hist.bins()[k..].iter().sum();
        assert!(w0 > 0 && w1 > 0);
    }

    #[test]
    fn test_matches_exhaustive() {
        let cases = [
            hist_with(&[]),
            hist_with(&[(0, 7)]),
            hist_with(&[(0, 3), (255, 9)]),
            hist_with(&[(10, 100), (11, 50), (90, 30), (91, 70), (240, 5)]),
            hist_with(&[(64, 1), (65, 1), (66, 1)]),
        ];
        for hist in &cases {
            assert_eq!(otsu_threshold(hist), otsu_threshold_exhaustive(hist));
        }

        let mut bins = [0u32; HISTOGRAM_BINS];
        for (i, b) in bins.iter_mut().enumerate() {
            *b = ((i * 37 + 11) % 101) as u32;
        }
        let hist = Histogram::from_bins(bins);
        assert_eq!(otsu_threshold(&hist), otsu_threshold_exhaustive(&hist));
    }
}
