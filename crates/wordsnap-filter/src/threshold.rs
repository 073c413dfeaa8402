//! Adaptive (local) thresholding
//!
//! A pixel is compared with its own reference value, usually the local
//! mean from [`mean_filter`](crate::mean_filter):
//!
//! ```text
//! out = hi   if (reference - pixel) < offset
//!       lo   otherwise
//! ```
//!
//! With `hi = 255, lo = 0` a pixel darker than its neighbourhood by at
//! least `offset` becomes 0 (foreground) and everything else 255.
//! [`Polarity`] supplies the `hi`/`lo` pair for either kind of text.

use crate::FilterResult;
use wordsnap_core::GrayBuffer;

/// Whether text is darker or lighter than its background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Dark text on a light background (`hi = 255`, `lo = 0`)
    DarkOnLight,
    /// Light text on a dark background (`hi = 0`, `lo = 255`)
    LightOnDark,
}

impl Polarity {
    /// Guess polarity from the mean intensity of a frame.
    ///
    /// A frame brighter than `threshold` on average is taken to be mostly
    /// background, so its text is dark.
    pub fn from_mean(mean: f32, threshold: f32) -> Self {
        if mean > threshold {
            Polarity::DarkOnLight
        } else {
            Polarity::LightOnDark
        }
    }

    /// Output value where the threshold test passes
    pub fn hi(self) -> u8 {
        match self {
            Polarity::DarkOnLight => 255,
            Polarity::LightOnDark => 0,
        }
    }

    /// Output value where the threshold test fails
    pub fn lo(self) -> u8 {
        255 - self.hi()
    }
}

#[inline]
fn threshold_pixel(pixel: u8, reference: u8, hi: u8, lo: u8, offset: i32) -> u8 {
    if (reference as i32 - pixel as i32) < offset {
        hi
    } else {
        lo
    }
}

/// Binarize `src` against `reference`, allocating the output.
///
/// # Errors
///
/// Size error if `reference` does not match `src`.
pub fn adaptive_threshold(
    src: &GrayBuffer,
    reference: &GrayBuffer,
    hi: u8,
    lo: u8,
    offset: i32,
) -> FilterResult<GrayBuffer> {
    let mut dest = GrayBuffer::new(src.width(), src.height())?;
    adaptive_threshold_into(src, reference, &mut dest, hi, lo, offset)?;
    Ok(dest)
}

/// Binarize `src` against `reference` into `dest`.
///
/// # Errors
///
/// Size error if `reference` or `dest` does not match `src`; both are
/// checked before anything is written.
pub fn adaptive_threshold_into(
    src: &GrayBuffer,
    reference: &GrayBuffer,
    dest: &mut GrayBuffer,
    hi: u8,
    lo: u8,
    offset: i32,
) -> FilterResult<()> {
    src.check_same_size(reference)?;
    src.check_same_size(dest)?;

    for ((d, &p), &m) in dest
        .data_mut()
        .iter_mut()
        .zip(src.data())
        .zip(reference.data())
    {
        *d = threshold_pixel(p, m, hi, lo, offset);
    }
    Ok(())
}

/// Binarize `buf` against `reference`, overwriting `buf`.
///
/// # Errors
///
/// Size error if `reference` does not match `buf`.
pub fn adaptive_threshold_in_place(
    buf: &mut GrayBuffer,
    reference: &GrayBuffer,
    hi: u8,
    lo: u8,
    offset: i32,
) -> FilterResult<()> {
    buf.check_same_size(reference)?;

    for (p, &m) in buf.data_mut().iter_mut().zip(reference.data()) {
        *p = threshold_pixel(*p, m, hi, lo, offset);
    }
    Ok(())
}
