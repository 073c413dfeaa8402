//! Gray-level histograms
//!
//! A [`Histogram`] counts how many pixels of a region take each of the 256
//! intensity values. Its counts always sum to the region area, and the
//! mean/variance derived from it agree with the direct pixel statistics.

use super::GrayBuffer;
use super::statistics::variance_from_moments;
use crate::error::Result;
use crate::rect::Rect;

/// 256-bin intensity histogram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u32; 256],
}

impl Default for Histogram {
    fn default() -> Self {
        Self { counts: [0; 256] }
    }
}

impl Histogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for intensity `value`.
    #[inline]
    pub fn count(&self, value: u8) -> u32 {
        self.counts[value as usize]
    }

    /// All 256 counts, indexed by intensity.
    pub fn counts(&self) -> &[u32; 256] {
        &self.counts
    }

    /// Total number of samples.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Mean intensity, or `None` if the histogram is empty.
    pub fn mean(&self) -> Option<f32> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let sum: u64 = self
            .counts
            .iter()
            .enumerate()
            .map(|(v, &c)| v as u64 * c as u64)
            .sum();
        Some((sum as f64 / total as f64) as f32)
    }

    /// Population variance, or `None` if the histogram is empty.
    pub fn variance(&self) -> Option<f32> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let (sum, sum_sq) = self
            .counts
            .iter()
            .enumerate()
            .fold((0u64, 0u64), |(s, sq), (v, &c)| {
                let v = v as u64;
                let c = c as u64;
                (s + v * c, sq + v * v * c)
            });
        Some(variance_from_moments(total, sum, sum_sq))
    }

    /// Smallest intensity with a non-zero count.
    pub fn min_value(&self) -> Option<u8> {
        self.counts.iter().position(|&c| c > 0).map(|v| v as u8)
    }

    /// Largest intensity with a non-zero count.
    pub fn max_value(&self) -> Option<u8> {
        self.counts.iter().rposition(|&c| c > 0).map(|v| v as u8)
    }
}

impl GrayBuffer {
    /// Histogram of a region.
    ///
    /// # Errors
    ///
    /// Returns a range error if the region is empty or out of bounds.
    pub fn histogram(&self, region: Option<&Rect>) -> Result<Histogram> {
        let r = self.resolve_region(region)?;
        let mut hist = Histogram::new();
        let (left, right) = (r.left as usize, r.right as usize);
        for y in r.top..r.bottom {
            for &v in &self.row(y)[left..right] {
                hist.counts[v as usize] += 1;
            }
        }
        Ok(hist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_counts() {
        let buf = GrayBuffer::from_fn(4, 4, |x, _| if x < 1 { 9 } else { 200 }).unwrap();
        let h = buf.histogram(None).unwrap();
        assert_eq!(h.count(9), 4);
        assert_eq!(h.count(200), 12);
        assert_eq!(h.total(), 16);
        assert_eq!(h.min_value(), Some(9));
        assert_eq!(h.max_value(), Some(200));
    }

    #[test]
    fn test_histogram_region_total_is_area() {
        let buf = GrayBuffer::from_fn(20, 10, |x, y| (x ^ y) as u8).unwrap();
        let r = Rect::new(3, 2, 17, 9).unwrap();
        let h = buf.histogram(Some(&r)).unwrap();
        assert_eq!(h.total(), r.area());
    }

    #[test]
    fn test_histogram_moments_match_direct() {
        let buf = GrayBuffer::from_fn(23, 11, |x, y| (x * 7 + y * 13) as u8).unwrap();
        let h = buf.histogram(None).unwrap();
        assert_eq!(h.mean().unwrap(), buf.mean(None).unwrap());
        assert_eq!(h.variance().unwrap(), buf.variance(None).unwrap());
    }

    #[test]
    fn test_empty_histogram() {
        let h = Histogram::new();
        assert_eq!(h.total(), 0);
        assert_eq!(h.mean(), None);
        assert_eq!(h.variance(), None);
        assert_eq!(h.min_value(), None);
    }
}
