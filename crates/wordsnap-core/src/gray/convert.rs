//! Intensity remapping and cropping
//!
//! - [`GrayBuffer::contrast_stretch`] linearly maps `[min, max]` onto `[0, 255]`
//! - [`GrayBuffer::invert`] maps `v` to `255 - v`
//! - [`GrayBuffer::crop`] copies a rectangle into a new buffer

use super::GrayBuffer;
use crate::error::Result;
use crate::rect::Rect;

/// Build the 256-entry lookup table for a linear stretch.
fn stretch_table(min: u8, max: u8) -> [u8; 256] {
    let mut lut = [0u8; 256];
    let lo = min as i32;
    let span = max as i32 - lo;
    for (v, out) in lut.iter_mut().enumerate() {
        let scaled = (v as i32 - lo) * 255 / span;
        *out = scaled.clamp(0, 255) as u8;
    }
    lut
}

impl GrayBuffer {
    /// Stretch intensities in place so `min` maps to 0 and `max` to 255.
    ///
    /// Each pixel becomes `(v - min) * 255 / (max - min)`, integer division,
    /// clamped to `[0, 255]`. Does nothing when `max <= min`.
    pub fn contrast_stretch(&mut self, min: u8, max: u8) {
        if max <= min {
            return;
        }
        let lut = stretch_table(min, max);
        for v in self.data.iter_mut() {
            *v = lut[*v as usize];
        }
    }

    /// Invert every pixel in place.
    pub fn invert(&mut self) {
        for v in self.data.iter_mut() {
            *v = 255 - *v;
        }
    }

    /// Copy a rectangular region into a new buffer.
    ///
    /// # Errors
    ///
    /// Returns a range error if `rect` is empty or out of bounds.
    pub fn crop(&self, rect: &Rect) -> Result<GrayBuffer> {
        rect.check_within(self.width, self.height)?;
        let (left, right) = (rect.left as usize, rect.right as usize);
        let mut data = Vec::with_capacity(rect.area() as usize);
        for y in rect.top..rect.bottom {
            data.extend_from_slice(&self.row(y)[left..right]);
        }
        Ok(GrayBuffer {
            width: rect.width(),
            height: rect.height(),
            data,
        })
    }
}
