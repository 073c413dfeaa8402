//! Seed rectangle and region growing
//!
//! Growing works on a binarized buffer where foreground is 0. Each pass
//! tries the four edges in the order top, bottom, left, right; an edge moves
//! out by one pixel when the one-pixel strip just beyond it contains
//! foreground. Passes repeat until one moves no edge.
//!
//! The rectangle only ever grows and is bounded by the frame, so the loop
//! ends after at most `width + height` passes.

use crate::RecogResult;
use wordsnap_core::{GrayBuffer, Rect};

/// Binary value of foreground pixels
pub const FOREGROUND: u8 = 0;

/// Result of [`grow_region`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Growth {
    /// The grown rectangle
    pub rect: Rect,
    /// Passes run, including the final one that moved nothing
    pub passes: u32,
}

/// Small rectangle centred in a `width x height` frame.
///
/// Half-sizes are `floor(fraction * dim / 2)`, at least 1; the result is
/// clipped to the frame and never empty.
pub fn seed_rect(width: u32, height: u32, width_fraction: f32, height_fraction: f32) -> Rect {
    let half_w = ((width_fraction * width as f32 / 2.0) as u32).max(1);
    let half_h = ((height_fraction * height as f32 / 2.0) as u32).max(1);
    let (cx, cy) = (width / 2, height / 2);
    Rect::new_unchecked(
        cx.saturating_sub(half_w),
        cy.saturating_sub(half_h),
        cx.saturating_add(half_w).min(width),
        cy.saturating_add(half_h).min(height),
    )
}

fn has_foreground(binary: &GrayBuffer, strip: Rect) -> RecogResult<bool> {
    Ok(binary.min_value(Some(&strip))? == FOREGROUND)
}

/// Grow `seed` over the foreground of `binary`.
///
/// # Errors
///
/// Range error if `seed` is empty or not inside `binary`.
pub fn grow_region(binary: &GrayBuffer, seed: Rect) -> RecogResult<Growth> {
    seed.check_within(binary.width(), binary.height())?;
    let (w, h) = binary.dimensions();

    let mut r = seed;
    let mut passes = 0;
    loop {
        passes += 1;
        let mut extended = false;

        if r.top > 0
            && has_foreground(binary, Rect::new_unchecked(r.left, r.top - 1, r.right, r.top))?
        {
            r.top -= 1;
            extended = true;
        }
        if r.bottom < h
            && has_foreground(binary, Rect::new_unchecked(r.left, r.bottom, r.right, r.bottom + 1))?
        {
            r.bottom += 1;
            extended = true;
        }
        if r.left > 0
            && has_foreground(binary, Rect::new_unchecked(r.left - 1, r.top, r.left, r.bottom))?
        {
            r.left -= 1;
            extended = true;
        }
        if r.right < w
            && has_foreground(binary, Rect::new_unchecked(r.right, r.top, r.right + 1, r.bottom))?
        {
            r.right += 1;
            extended = true;
        }

        if !extended {
            break;
        }
    }

    Ok(Growth { rect: r, passes })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_rect_640x480() {
        // half_w = floor(0.021 * 640 / 2) = 6, half_h = floor(0.033 * 480 / 2) = 7
        let seed = seed_rect(640, 480, 0.021, 0.033);
        assert_eq!(seed, Rect::new_unchecked(314, 233, 326, 247));
    }

    #[test]
    fn test_seed_rect_minimum_size() {
        let seed = seed_rect(10, 10, 0.021, 0.033);
        assert_eq!(seed, Rect::new_unchecked(4, 4, 6, 6));
        let tiny = seed_rect(1, 1, 0.021, 0.033);
        assert_eq!(tiny, Rect::new_unchecked(0, 0, 1, 1));
    }

    #[test]
    fn test_all_foreground_grows_to_frame() {
        let binary = GrayBuffer::new_filled(30, 20, FOREGROUND).unwrap();
        let g = grow_region(&binary, seed_rect(30, 20, 0.1, 0.1)).unwrap();
        assert_eq!(g.rect, Rect::full(30, 20));
        assert!(g.passes <= 30 + 20);
    }

    #[test]
    fn test_all_background_stays_at_seed() {
        let binary = GrayBuffer::new_filled(30, 20, 255).unwrap();
        let seed = seed_rect(30, 20, 0.1, 0.1);
        let g = grow_region(&binary, seed).unwrap();
        assert_eq!(g.rect, seed);
        assert_eq!(g.passes, 1);
    }

    #[test]
    fn test_grows_to_block() {
        let block = Rect::new(8, 5, 20, 9).unwrap();
        let binary = GrayBuffer::from_fn(30, 20, |x, y| {
            if block.contains_point(x, y) { FOREGROUND } else { 255 }
        })
        .unwrap();
        let g = grow_region(&binary, Rect::new(12, 6, 13, 7).unwrap()).unwrap();
        assert_eq!(g.rect, block);
    }

    #[test]
    fn test_touching_foreground_in_strip_is_enough() {
        // One foreground pixel above the seed pulls the top edge up
        let mut binary = GrayBuffer::new_filled(10, 10, 255).unwrap();
        binary.set_pixel(5, 3, FOREGROUND);
        let g = grow_region(&binary, Rect::new(4, 4, 7, 6).unwrap()).unwrap();
        assert_eq!(g.rect, Rect::new_unchecked(4, 3, 7, 6));
        assert_eq!(g.passes, 2);
    }

    #[test]
    fn test_bad_seed() {
        let binary = GrayBuffer::new(10, 10).unwrap();
        assert!(grow_region(&binary, Rect::new_unchecked(3, 3, 3, 5)).is_err());
        assert!(grow_region(&binary, Rect::new_unchecked(3, 3, 11, 5)).is_err());
    }
}
