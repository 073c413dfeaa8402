//! Grayscale erosion and dilation
//!
//! Erosion writes the minimum, dilation the maximum, of the source pixels
//! under the structuring element. Neighbours that fall outside the image
//! are skipped rather than padded, so a border pixel is computed from
//! fewer samples than an interior one. A constant image is therefore left
//! unchanged by both operations.
//!
//! The destination must be a separate buffer of the source size.

use crate::strel::{CachedElement, LinearOffsets, StructuringElement};
use crate::MorphResult;
use wordsnap_core::GrayBuffer;

#[derive(Clone, Copy)]
enum Op {
    Erode,
    Dilate,
}

impl Op {
    #[inline]
    fn init(self) -> u8 {
        match self {
            Op::Erode => u8::MAX,
            Op::Dilate => u8::MIN,
        }
    }

    #[inline]
    fn pick(self, a: u8, b: u8) -> u8 {
        match self {
            Op::Erode => a.min(b),
            Op::Dilate => a.max(b),
        }
    }
}

fn apply(
    src: &GrayBuffer,
    se: &StructuringElement,
    lin: &LinearOffsets,
    dest: &mut GrayBuffer,
    op: Op,
) -> MorphResult<()> {
    src.check_same_size(dest)?;
    debug_assert_eq!(lin.width(), src.width());

    let w = src.width() as i64;
    let h = src.height() as i64;
    let data = src.data();
    let out = dest.data_mut();

    // Pixels whose every neighbour is inside the image
    let y_lo = (-se.min_y() as i64).max(0);
    let y_hi = h - (se.max_y() as i64).max(0);
    let x_lo = (-se.min_x() as i64).max(0);
    let x_hi = w - (se.max_x() as i64).max(0);

    for y in 0..h {
        let row_inside = y >= y_lo && y < y_hi;
        for x in 0..w {
            let idx = (y * w + x) as usize;
            let mut acc = op.init();
            if row_inside && x >= x_lo && x < x_hi {
                for &off in lin.as_slice() {
                    acc = op.pick(acc, data[(idx as isize + off) as usize]);
                }
            } else {
                for (dx, dy) in se.offsets() {
                    let nx = x + dx as i64;
                    let ny = y + dy as i64;
                    if nx >= 0 && nx < w && ny >= 0 && ny < h {
                        acc = op.pick(acc, data[(ny * w + nx) as usize]);
                    }
                }
            }
            out[idx] = acc;
        }
    }
    Ok(())
}

/// Grayscale erosion, allocating the output.
pub fn erode(src: &GrayBuffer, se: &StructuringElement) -> MorphResult<GrayBuffer> {
    let mut dest = GrayBuffer::new(src.width(), src.height())?;
    erode_into(src, se, &mut dest)?;
    Ok(dest)
}

/// Grayscale erosion into `dest`.
///
/// # Errors
///
/// Size error if `dest` does not match `src`; nothing is written then.
pub fn erode_into(
    src: &GrayBuffer,
    se: &StructuringElement,
    dest: &mut GrayBuffer,
) -> MorphResult<()> {
    apply(src, se, &se.linear_offsets(src.width()), dest, Op::Erode)
}

/// Grayscale erosion into `dest`, reusing the element's cached offsets.
pub fn erode_cached_into(
    src: &GrayBuffer,
    se: &CachedElement,
    dest: &mut GrayBuffer,
) -> MorphResult<()> {
    let lin = se.linear_offsets(src.width());
    apply(src, se.element(), &lin, dest, Op::Erode)
}

/// Grayscale dilation, allocating the output.
pub fn dilate(src: &GrayBuffer, se: &StructuringElement) -> MorphResult<GrayBuffer> {
    let mut dest = GrayBuffer::new(src.width(), src.height())?;
    dilate_into(src, se, &mut dest)?;
    Ok(dest)
}

/// Grayscale dilation into `dest`.
///
/// # Errors
///
/// Size error if `dest` does not match `src`; nothing is written then.
pub fn dilate_into(
    src: &GrayBuffer,
    se: &StructuringElement,
    dest: &mut GrayBuffer,
) -> MorphResult<()> {
    apply(src, se, &se.linear_offsets(src.width()), dest, Op::Dilate)
}

/// Grayscale dilation into `dest`, reusing the element's cached offsets.
pub fn dilate_cached_into(
    src: &GrayBuffer,
    se: &CachedElement,
    dest: &mut GrayBuffer,
) -> MorphResult<()> {
    let lin = se.linear_offsets(src.width());
    apply(src, se.element(), &lin, dest, Op::Dilate)
}

/// Opening: erosion followed by dilation with the reflected element.
pub fn open(src: &GrayBuffer, se: &StructuringElement) -> MorphResult<GrayBuffer> {
    dilate(&erode(src, se)?, &se.reflect())
}

/// Closing: dilation followed by erosion with the reflected element.
pub fn close(src: &GrayBuffer, se: &StructuringElement) -> MorphResult<GrayBuffer> {
    erode(&dilate(src, se)?, &se.reflect())
}
