//! Image statistics operations
//!
//! This module provides read-only scans over a whole buffer or a
//! rectangular region of it:
//!
//! - Minimum and maximum pixel value
//! - Mean intensity
//! - Population variance (`E[x^2] - E[x]^2`)
//! - A fused single-pass summary ([`RegionStats`])
//!
//! Every function takes an optional region; `None` means the whole buffer.
//! A region must be non-empty and lie inside the buffer.

use super::GrayBuffer;
use crate::error::Result;
use crate::rect::Rect;

/// Summary statistics of a region, computed in one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionStats {
    /// Minimum pixel value
    pub min: u8,
    /// Maximum pixel value
    pub max: u8,
    /// Mean pixel value
    pub mean: f32,
    /// Population variance of pixel values
    pub variance: f32,
    /// Number of pixels in the region
    pub count: u64,
}

impl RegionStats {
    /// Standard deviation (square root of the variance).
    pub fn std_dev(&self) -> f32 {
        self.variance.sqrt()
    }

    /// Dynamic range `max - min`.
    pub fn range(&self) -> u8 {
        self.max - self.min
    }
}

/// Population variance from exact integer moments.
///
/// `n * sum_sq - sum^2` is computed in integers so a constant region gives
/// exactly zero.
pub(crate) fn variance_from_moments(count: u64, sum: u64, sum_sq: u64) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let n = count as u128;
    let num = n * sum_sq as u128 - (sum as u128) * (sum as u128);
    (num as f64 / (n * n) as f64) as f32
}

impl GrayBuffer {
    /// Resolve an optional region against the buffer bounds.
    ///
    /// # Errors
    ///
    /// Range errors if the region is empty, inverted, or out of bounds.
    pub fn resolve_region(&self, region: Option<&Rect>) -> Result<Rect> {
        match region {
            Some(r) => {
                r.check_within(self.width, self.height)?;
                Ok(*r)
            }
            None => Ok(self.bounds()),
        }
    }

    /// Iterate over the rows of a (validated) region.
    fn region_rows<'a>(&'a self, r: &Rect) -> impl Iterator<Item = &'a [u8]> + 'a {
        let (left, right) = (r.left as usize, r.right as usize);
        (r.top..r.bottom).map(move |y| &self.row(y)[left..right])
    }

    /// Minimum pixel value in a region.
    ///
    /// # Errors
    ///
    /// Returns a range error if the region is empty or out of bounds.
    pub fn min_value(&self, region: Option<&Rect>) -> Result<u8> {
        let r = self.resolve_region(region)?;
        let mut min = u8::MAX;
        for row in self.region_rows(&r) {
            for &v in row {
                min = min.min(v);
            }
        }
        Ok(min)
    }

    /// Maximum pixel value in a region.
    ///
    /// # Errors
    ///
    /// Returns a range error if the region is empty or out of bounds.
    pub fn max_value(&self, region: Option<&Rect>) -> Result<u8> {
        let r = self.resolve_region(region)?;
        let mut max = u8::MIN;
        for row in self.region_rows(&r) {
            for &v in row {
                max = max.max(v);
            }
        }
        Ok(max)
    }

    /// Mean pixel value in a region.
    ///
    /// # Errors
    ///
    /// Returns a range error if the region is empty or out of bounds.
    pub fn mean(&self, region: Option<&Rect>) -> Result<f32> {
        let r = self.resolve_region(region)?;
        let mut sum = 0u64;
        for row in self.region_rows(&r) {
            sum += row.iter().map(|&v| v as u64).sum::<u64>();
        }
        Ok((sum as f64 / r.area() as f64) as f32)
    }

    /// Population variance of pixel values in a region.
    ///
    /// This is the biased (divide-by-N) variance, not the sample variance.
    ///
    /// # Errors
    ///
    /// Returns a range error if the region is empty or out of bounds.
    pub fn variance(&self, region: Option<&Rect>) -> Result<f32> {
        let r = self.resolve_region(region)?;
        let mut sum = 0u64;
        let mut sum_sq = 0u64;
        for row in self.region_rows(&r) {
            for &v in row {
                let v = v as u64;
                sum += v;
                sum_sq += v * v;
            }
        }
        Ok(variance_from_moments(r.area(), sum, sum_sq))
    }

    /// Min, max, mean and variance of a region in a single pass.
    ///
    /// # Errors
    ///
    /// Returns a range error if the region is empty or out of bounds.
    pub fn stats(&self, region: Option<&Rect>) -> Result<RegionStats> {
        let r = self.resolve_region(region)?;
        let mut min = u8::MAX;
        let mut max = u8::MIN;
        let mut sum = 0u64;
        let mut sum_sq = 0u64;
        for row in self.region_rows(&r) {
            for &v in row {
                min = min.min(v);
                max = max.max(v);
                let v = v as u64;
                sum += v;
                sum_sq += v * v;
            }
        }
        let count = r.area();
        Ok(RegionStats {
            min,
            max,
            mean: (sum as f64 / count as f64) as f32,
            variance: variance_from_moments(count, sum, sum_sq),
            count,
        })
    }
}
