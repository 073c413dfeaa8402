//! GrayBuffer - 8-bit grayscale pixel buffer
//!
//! `GrayBuffer` is the single image type passed between pipeline stages.
//!
//! # Pixel layout
//!
//! - One unsigned byte per pixel
//! - Row-major, origin at the top-left corner
//! - Pixel `(x, y)` lives at `data[y * width + x]`
//!
//! # Ownership model
//!
//! A buffer is owned by whichever stage currently holds it. `Clone` is an
//! explicit deep copy; buffers are never aliased implicitly. Operations that
//! write into a caller-supplied destination require it to already have the
//! source dimensions and fail with [`Error::SizeMismatch`] otherwise.

mod convert;
mod histogram;
pub mod statistics;

pub use histogram::Histogram;
pub use statistics::RegionStats;

use crate::error::{Error, Result};
use crate::rect::Rect;

/// Grayscale image buffer
///
/// # Examples
///
/// ```
/// use wordsnap_core::GrayBuffer;
///
/// let buf = GrayBuffer::new(640, 480).unwrap();
/// assert_eq!(buf.width(), 640);
/// assert_eq!(buf.height(), 480);
/// assert_eq!(buf.get_pixel(10, 20), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl GrayBuffer {
    /// Create a zero-filled buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Create a buffer filled with a constant value.
    pub fn new_filled(width: u32, height: u32, value: u8) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![value; len],
        })
    }

    /// Wrap raw samples.
    ///
    /// Data longer than `width * height` is accepted and truncated; camera
    /// preview frames carry the luma plane first, followed by chroma.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooShort`] if `data` holds fewer than
    /// `width * height` samples, [`Error::InvalidDimension`] for zero sizes.
    pub fn from_bytes(mut data: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        let required = Self::checked_len(width, height)?;
        if data.len() < required {
            return Err(Error::BufferTooShort {
                len: data.len(),
                required,
            });
        }
        data.truncate(required);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Copy raw samples out of a borrowed slice.
    ///
    /// Same rules as [`GrayBuffer::from_bytes`].
    pub fn from_slice(data: &[u8], width: u32, height: u32) -> Result<Self> {
        let required = Self::checked_len(width, height)?;
        if data.len() < required {
            return Err(Error::BufferTooShort {
                len: data.len(),
                required,
            });
        }
        Ok(Self {
            width,
            height,
            data: data[..required].to_vec(),
        })
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> u8,
    {
        let len = Self::checked_len(width, height)?;
        let mut data = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    fn checked_len(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels.
    #[inline]
    pub fn area(&self) -> usize {
        self.data.len()
    }

    /// Rectangle covering the whole buffer.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::full(self.width, self.height)
    }

    /// Raw samples in row-major order.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw samples in row-major order.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return its samples.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }

    /// Read pixel `(x, y)`.
    ///
    /// No coordinate validation is done beyond slice indexing; the caller
    /// must keep `x < width` and `y < height`. A column index past the row
    /// end silently reads the next row.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height);
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Write pixel `(x, y)`.
    ///
    /// Same precondition as [`GrayBuffer::get_pixel`].
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, value: u8) {
        debug_assert!(x < self.width && y < self.height);
        let w = self.width as usize;
        self.data[y as usize * w + x as usize] = value;
    }

    /// Read pixel `(x, y)`, or `None` outside the buffer.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x < self.width && y < self.height {
            Some(self.get_pixel(x, y))
        } else {
            None
        }
    }

    /// Set every pixel to `value`.
    pub fn fill(&mut self, value: u8) {
        self.data.fill(value);
    }

    /// Check that `other` has the same dimensions as `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] with `self` as the expected size.
    pub fn check_same_size(&self, other: &GrayBuffer) -> Result<()> {
        if self.width != other.width || self.height != other.height {
            return Err(Error::SizeMismatch {
                expected: (self.width, self.height),
                actual: (other.width, other.height),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zero_filled() {
        let buf = GrayBuffer::new(4, 3).unwrap();
        assert_eq!(buf.area(), 12);
        assert!(buf.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            GrayBuffer::new(0, 5),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_from_bytes_too_short() {
        let err = GrayBuffer::from_bytes(vec![0; 11], 4, 3).unwrap_err();
        assert!(err.is_size_error());
    }

    #[test]
    fn test_from_bytes_truncates_chroma() {
        // 4x2 luma followed by 4 chroma bytes
        let data: Vec<u8> = (0..12).collect();
        let buf = GrayBuffer::from_bytes(data, 4, 2).unwrap();
        assert_eq!(buf.data(), &[0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_row_major_layout() {
        let buf = GrayBuffer::from_fn(5, 3, |x, y| (y * 10 + x) as u8).unwrap();
        assert_eq!(buf.get_pixel(3, 2), 23);
        assert_eq!(buf.data()[2 * 5 + 3], 23);
        assert_eq!(buf.row(1), &[10, 11, 12, 13, 14]);
        assert_eq!(buf.pixel(5, 0), None);
    }

    #[test]
    fn test_clone_is_deep() {
        let a = GrayBuffer::new_filled(3, 3, 7).unwrap();
        let mut b = a.clone();
        b.set_pixel(1, 1, 99);
        assert_eq!(a.get_pixel(1, 1), 7);
        assert_eq!(b.get_pixel(1, 1), 99);
    }

    #[test]
    fn test_check_same_size() {
        let a = GrayBuffer::new(3, 4).unwrap();
        let b = GrayBuffer::new(4, 3).unwrap();
        assert!(a.check_same_size(&a.clone()).is_ok());
        match a.check_same_size(&b) {
            Err(Error::SizeMismatch { expected, actual }) => {
                assert_eq!(expected, (3, 4));
                assert_eq!(actual, (4, 3));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
