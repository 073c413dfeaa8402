//! Synthetic frames for tests
//!
//! Deterministic random buffers (seeded [`StdRng`]) for cross-checking
//! algorithms against each other, and simple word-like frames with a known
//! extent for end-to-end detector tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wordsnap_core::{GrayBuffer, Rect, Result};

/// Uniformly random buffer, reproducible from `seed`.
pub fn random_buffer(seed: u64, width: u32, height: u32) -> Result<GrayBuffer> {
    random_buffer_in(seed, width, height, 0, 255)
}

/// Random buffer with samples in `lo..=hi`.
///
/// # Panics
///
/// Panics if `lo > hi`.
pub fn random_buffer_in(seed: u64, width: u32, height: u32, lo: u8, hi: u8) -> Result<GrayBuffer> {
    let mut rng = StdRng::seed_from_u64(seed);
    GrayBuffer::from_fn(width, height, |_, _| rng.random_range(lo..=hi))
}

/// Solid `background` frame with `rect` filled with `foreground`.
pub fn block_frame(
    width: u32,
    height: u32,
    background: u8,
    foreground: u8,
    rect: &Rect,
) -> Result<GrayBuffer> {
    GrayBuffer::from_fn(width, height, |x, y| {
        if rect.contains_point(x, y) {
            foreground
        } else {
            background
        }
    })
}

/// A word made of vertical strokes inside `rect`.
///
/// Columns alternate between `stroke` columns of `foreground` and `gap`
/// columns of `background`, starting with a stroke at `rect.left`.
pub fn stroked_word(
    width: u32,
    height: u32,
    background: u8,
    foreground: u8,
    rect: &Rect,
    stroke: u32,
    gap: u32,
) -> Result<GrayBuffer> {
    let period = (stroke + gap).max(1);
    GrayBuffer::from_fn(width, height, |x, y| {
        if rect.contains_point(x, y) && (x - rect.left) % period < stroke {
            foreground
        } else {
            background
        }
    })
}

/// Add bounded uniform noise (`-amplitude..=amplitude`) to every pixel.
pub fn add_noise(buf: &mut GrayBuffer, seed: u64, amplitude: u8) {
    let mut rng = StdRng::seed_from_u64(seed);
    let a = amplitude as i16;
    for v in buf.data_mut() {
        let n: i16 = rng.random_range(-a..=a);
        *v = (*v as i16 + n).clamp(0, 255) as u8;
    }
}
