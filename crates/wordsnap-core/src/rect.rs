//! Rect - Rectangle regions
//!
//! A `Rect` is stored as its four edges. The right and bottom edges are
//! exclusive, so `(0, 0, width, height)` covers a whole buffer and a
//! rectangle with `left == right` is empty.

use crate::error::{Error, Result};

/// An axis-aligned rectangle with exclusive right/bottom edges
///
/// Small and `Copy`; passed by value or reference freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left x coordinate (inclusive)
    pub left: u32,
    /// Top y coordinate (inclusive)
    pub top: u32,
    /// Right x coordinate (exclusive)
    pub right: u32,
    /// Bottom y coordinate (exclusive)
    pub bottom: u32,
}

impl Rect {
    /// Create a new rectangle
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyRegion`] if the rectangle is inverted
    /// (`left > right` or `top > bottom`). Zero-area rectangles are allowed
    /// here; statistics reject them at use.
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Result<Self> {
        if left > right || top > bottom {
            return Err(Error::EmptyRegion {
                left,
                top,
                right,
                bottom,
            });
        }
        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    /// Create a rectangle without validation
    pub const fn new_unchecked(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from an origin and a size
    pub const fn from_size(left: u32, top: u32, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    /// Rectangle covering a whole `width x height` buffer
    pub const fn full(width: u32, height: u32) -> Self {
        Self::from_size(0, 0, width, height)
    }

    /// Width (0 for inverted rectangles)
    #[inline]
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    /// Height (0 for inverted rectangles)
    #[inline]
    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Check if the rectangle is empty (zero area or inverted)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains_point(&self, x: u32, y: u32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Check if this rectangle contains another one
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    /// Check that the rectangle is non-empty and lies inside a
    /// `width x height` buffer.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyRegion`] for empty or inverted rectangles,
    /// [`Error::RegionOutOfBounds`] if it extends past the buffer.
    pub fn check_within(&self, width: u32, height: u32) -> Result<()> {
        if self.is_empty() {
            return Err(Error::EmptyRegion {
                left: self.left,
                top: self.top,
                right: self.right,
                bottom: self.bottom,
            });
        }
        if self.right > width || self.bottom > height {
            return Err(Error::RegionOutOfBounds {
                left: self.left,
                top: self.top,
                right: self.right,
                bottom: self.bottom,
                width,
                height,
            });
        }
        Ok(())
    }

    /// True if any edge lies on the border of a `width x height` buffer
    pub fn touches_border(&self, width: u32, height: u32) -> bool {
        self.left == 0 || self.top == 0 || self.right >= width || self.bottom >= height
    }
}
