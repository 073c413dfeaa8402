//! Clipped box mean filter
//!
//! Each output pixel is the mean of the input pixels in the
//! `(2r+1) x (2r+1)` window centred on it, **clipped at the image border**:
//! near an edge the divisor is the number of pixels actually inside the
//! image, not `(2r+1)^2`. The result is floored (integer division).
//!
//! Two implementations produce pixel-identical output:
//!
//! - [`mean_filter`] keeps one running sum per column, updated as the
//!   window slides down, and slides a second window across those column
//!   sums. O(width * height) regardless of radius.
//! - [`mean_filter_naive`] sums every clipped window directly. O(w*h*r^2);
//!   used as a test oracle.
//!
//! Both also return the overall mean of the input, floored to `u8`.
//!
//! # Preconditions
//!
//! The incremental filter accumulates window sums in `u32`, so
//! `256 * (2r+1)^2` must fit: `radius <= MAX_RADIUS`. This is not checked.
//! A radius larger than the image is fine; the window is clipped to the
//! whole image.

use crate::FilterResult;
use wordsnap_core::GrayBuffer;

/// Largest radius whose worst-case window sum fits a `u32` accumulator.
pub const MAX_RADIUS: u32 = 2047;

/// True if `256 * (2 * radius + 1)^2` fits in a `u32`.
pub fn radius_fits_accumulator(radius: u32) -> bool {
    (radius as u64)
        .checked_mul(2)
        .and_then(|d| d.checked_add(1))
        .map(|d| 256 * d * d <= u32::MAX as u64)
        .unwrap_or(false)
}

/// Number of indices in `[i - r, i + r]` that fall inside `[0, n)`.
#[inline]
fn clipped_span(i: usize, r: usize, n: usize) -> u32 {
    ((i + r).min(n - 1) - i.saturating_sub(r) + 1) as u32
}

/// Mean filter with clipped borders, allocating the output.
///
/// Returns the filtered buffer and the overall input mean.
pub fn mean_filter(src: &GrayBuffer, radius: u32) -> FilterResult<(GrayBuffer, u8)> {
    let mut dest = GrayBuffer::new(src.width(), src.height())?;
    let mean = mean_filter_into(src, &mut dest, radius)?;
    Ok((dest, mean))
}

/// Mean filter with clipped borders, writing into `dest`.
///
/// Returns the overall input mean.
///
/// # Errors
///
/// Size error if `dest` does not match `src`; `dest` is untouched then.
pub fn mean_filter_into(src: &GrayBuffer, dest: &mut GrayBuffer, radius: u32) -> FilterResult<u8> {
    src.check_same_size(dest)?;

    let w = src.width() as usize;
    let h = src.height() as usize;
    let r = radius as usize;
    let data = src.data();
    let out = dest.data_mut();

    let mut total: u64 = 0;
    let mut colsum = vec![0u32; w];

    let add_row = |colsum: &mut [u32], y: usize, total: &mut u64| {
        let row = &data[y * w..(y + 1) * w];
        for (c, &v) in colsum.iter_mut().zip(row) {
            *c += v as u32;
            *total += v as u64;
        }
    };

    // Rows of the window for output row 0
    for y in 0..=r.min(h - 1) {
        add_row(&mut colsum, y, &mut total);
    }

    for i in 0..h {
        if i > 0 {
            if i + r < h {
                add_row(&mut colsum, i + r, &mut total);
            }
            if i > r {
                let row = &data[(i - r - 1) * w..(i - r) * w];
                for (c, &v) in colsum.iter_mut().zip(row) {
                    *c -= v as u32;
                }
            }
        }

        let ch = clipped_span(i, r, h);
        let out_row = &mut out[i * w..(i + 1) * w];

        let mut sum: u32 = colsum[..=r.min(w - 1)].iter().sum();
        for j in 0..w {
            if j > 0 {
                if j + r < w {
                    sum += colsum[j + r];
                }
                if j > r {
                    sum -= colsum[j - r - 1];
                }
            }
            let cw = clipped_span(j, r, w);
            out_row[j] = (sum / (cw * ch)) as u8;
        }
    }

    Ok((total / (w * h) as u64) as u8)
}

/// Direct clipped-window mean, allocating the output.
pub fn mean_filter_naive(src: &GrayBuffer, radius: u32) -> FilterResult<(GrayBuffer, u8)> {
    let mut dest = GrayBuffer::new(src.width(), src.height())?;
    let mean = mean_filter_naive_into(src, &mut dest, radius)?;
    Ok((dest, mean))
}

/// Direct clipped-window mean, writing into `dest`.
///
/// # Errors
///
/// Size error if `dest` does not match `src`.
pub fn mean_filter_naive_into(
    src: &GrayBuffer,
    dest: &mut GrayBuffer,
    radius: u32,
) -> FilterResult<u8> {
    src.check_same_size(dest)?;

    let w = src.width() as usize;
    let h = src.height() as usize;
    let r = radius as usize;
    let data = src.data();

    for i in 0..h {
        let (y0, y1) = (i.saturating_sub(r), (i + r).min(h - 1));
        for j in 0..w {
            let (x0, x1) = (j.saturating_sub(r), (j + r).min(w - 1));
            let mut sum = 0u64;
            for y in y0..=y1 {
                sum += data[y * w + x0..=y * w + x1]
                    .iter()
                    .map(|&v| v as u64)
                    .sum::<u64>();
            }
            let count = ((y1 - y0 + 1) * (x1 - x0 + 1)) as u64;
            dest.data_mut()[i * w + j] = (sum / count) as u8;
        }
    }

    let total: u64 = data.iter().map(|&v| v as u64).sum();
    Ok((total / (w * h) as u64) as u8)
}
