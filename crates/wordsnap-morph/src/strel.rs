//! Structuring elements
//!
//! A structuring element is a set of `(dx, dy)` offsets relative to an
//! anchor pixel. It is built once from a mask and never changes, so one
//! element can be shared by any number of concurrent morphology calls.
//!
//! For a `w x h` mask with anchor `(ax, ay)`, the cell in column `c` and
//! row `r` contributes offset `(c - ax, r - ay)`.

use crate::{MorphError, MorphResult};
use std::sync::{Arc, Mutex, PoisonError};

/// Largest radius accepted by [`StructuringElement::brick`] and the line
/// constructors
pub const MAX_ELEMENT_RADIUS: u32 = 1023;

/// Immutable morphological neighbourhood
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuringElement {
    dx: Vec<i32>,
    dy: Vec<i32>,
    min_x: i32,
    max_x: i32,
    min_y: i32,
    max_y: i32,
}

/// Offsets flattened for a particular image width
///
/// `offset[k] = dy[k] * width + dx[k]`, so neighbour `k` of the pixel at
/// linear index `i` is at `i + offset[k]`. Only valid for images of the
/// width it was built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearOffsets {
    width: u32,
    offsets: Vec<isize>,
}

impl LinearOffsets {
    /// Image width these offsets were computed for
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The flattened offsets, in element order
    pub fn as_slice(&self) -> &[isize] {
        &self.offsets
    }
}

/// A structuring element with its [`LinearOffsets`] kept for the last
/// image width it was applied to
///
/// Frames from one camera all have the same width, so the offsets are
/// built once and reused. The cache is behind a lock and the element can
/// still be shared between threads.
#[derive(Debug)]
pub struct CachedElement {
    element: StructuringElement,
    linear: Mutex<Option<Arc<LinearOffsets>>>,
}

impl CachedElement {
    pub fn new(element: StructuringElement) -> Self {
        Self {
            element,
            linear: Mutex::new(None),
        }
    }

    /// The wrapped element
    pub fn element(&self) -> &StructuringElement {
        &self.element
    }

    /// Offsets for `width`, rebuilt only when the width changes.
    pub fn linear_offsets(&self, width: u32) -> Arc<LinearOffsets> {
        let mut slot = self.linear.lock().unwrap_or_else(PoisonError::into_inner);
        match slot.as_ref() {
            Some(lin) if lin.width() == width => Arc::clone(lin),
            _ => {
                let lin = Arc::new(self.element.linear_offsets(width));
                *slot = Some(Arc::clone(&lin));
                lin
            }
        }
    }
}

impl From<StructuringElement> for CachedElement {
    fn from(element: StructuringElement) -> Self {
        Self::new(element)
    }
}

impl StructuringElement {
    fn from_offsets(dx: Vec<i32>, dy: Vec<i32>) -> MorphResult<Self> {
        if dx.is_empty() {
            return Err(MorphError::InvalidElement(
                "structuring element has no neighbours".into(),
            ));
        }
        let min_x = dx.iter().copied().min().unwrap_or(0);
        let max_x = dx.iter().copied().max().unwrap_or(0);
        let min_y = dy.iter().copied().min().unwrap_or(0);
        let max_y = dy.iter().copied().max().unwrap_or(0);
        Ok(Self {
            dx,
            dy,
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    /// Build from a row-major byte mask; non-zero cells are neighbours.
    ///
    /// # Errors
    ///
    /// [`MorphError::InvalidElement`] if the mask size is wrong, the anchor
    /// lies outside the mask, or no cell is set.
    pub fn from_mask(
        mask: &[u8],
        width: u32,
        height: u32,
        anchor_x: u32,
        anchor_y: u32,
    ) -> MorphResult<Self> {
        if width == 0 || height == 0 || mask.len() != width as usize * height as usize {
            return Err(MorphError::InvalidElement(format!(
                "mask of {} cells does not match {}x{}",
                mask.len(),
                width,
                height
            )));
        }
        if anchor_x >= width || anchor_y >= height {
            return Err(MorphError::InvalidElement(format!(
                "anchor ({}, {}) outside {}x{} mask",
                anchor_x, anchor_y, width, height
            )));
        }

        let mut dx = Vec::new();
        let mut dy = Vec::new();
        for (i, _) in mask.iter().enumerate().filter(|(_, m)| **m != 0) {
            let col = (i % width as usize) as i32;
            let row = (i / width as usize) as i32;
            dx.push(col - anchor_x as i32);
            dy.push(row - anchor_y as i32);
        }
        Self::from_offsets(dx, dy)
    }

    /// Build from a mask with the anchor at `(width / 2, height / 2)`.
    pub fn from_mask_centered(mask: &[u8], width: u32, height: u32) -> MorphResult<Self> {
        Self::from_mask(mask, width, height, width / 2, height / 2)
    }

    /// Build from a text pattern: one line per row, `x` for a neighbour,
    /// `.` for an ignored cell. Blank lines and surrounding whitespace are
    /// skipped.
    ///
    /// ```
    /// use wordsnap_morph::StructuringElement;
    ///
    /// let cross = StructuringElement::from_pattern(
    ///     ".x.
    ///      xxx
    ///      .x.",
    ///     1,
    ///     1,
    /// )
    /// .unwrap();
    /// assert_eq!(cross.neighbor_count(), 5);
    /// ```
    pub fn from_pattern(pattern: &str, anchor_x: u32, anchor_y: u32) -> MorphResult<Self> {
        let rows: Vec<&str> = pattern
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut mask = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(MorphError::InvalidElement(format!(
                    "pattern row {} has {} cells, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }
            for c in row.chars() {
                match c {
                    'x' | 'X' => mask.push(1),
                    '.' => mask.push(0),
                    other => {
                        return Err(MorphError::InvalidElement(format!(
                            "unexpected pattern character {:?}",
                            other
                        )));
                    }
                }
            }
        }
        Self::from_mask(&mask, width as u32, rows.len() as u32, anchor_x, anchor_y)
    }

    /// The single-pixel element; erosion and dilation with it are identity.
    pub fn identity() -> Self {
        Self {
            dx: vec![0],
            dy: vec![0],
            min_x: 0,
            max_x: 0,
            min_y: 0,
            max_y: 0,
        }
    }

    /// Horizontal run `dx in -radius..=radius`.
    pub fn horizontal(radius: u32) -> MorphResult<Self> {
        Self::brick(radius, 0)
    }

    /// Vertical run `dy in -radius..=radius`.
    pub fn vertical(radius: u32) -> MorphResult<Self> {
        Self::brick(0, radius)
    }

    /// Centred `(2*h_radius+1) x (2*v_radius+1)` rectangle.
    ///
    /// # Errors
    ///
    /// [`MorphError::InvalidElement`] if either radius exceeds
    /// [`MAX_ELEMENT_RADIUS`].
    pub fn brick(h_radius: u32, v_radius: u32) -> MorphResult<Self> {
        if h_radius > MAX_ELEMENT_RADIUS || v_radius > MAX_ELEMENT_RADIUS {
            return Err(MorphError::InvalidElement(format!(
                "brick radii {}x{} exceed {}",
                h_radius, v_radius, MAX_ELEMENT_RADIUS
            )));
        }
        let (hr, vr) = (h_radius as i32, v_radius as i32);
        let n = (2 * h_radius as usize + 1) * (2 * v_radius as usize + 1);
        let mut dx = Vec::with_capacity(n);
        let mut dy = Vec::with_capacity(n);
        for y in -vr..=vr {
            for x in -hr..=hr {
                dx.push(x);
                dy.push(y);
            }
        }
        Ok(Self {
            dx,
            dy,
            min_x: -hr,
            max_x: hr,
            min_y: -vr,
            max_y: vr,
        })
    }

    /// Number of neighbours
    #[inline]
    pub fn neighbor_count(&self) -> usize {
        self.dx.len()
    }

    /// Horizontal offsets, in element order
    pub fn horizontal_offsets(&self) -> &[i32] {
        &self.dx
    }

    /// Vertical offsets, in element order
    pub fn vertical_offsets(&self) -> &[i32] {
        &self.dy
    }

    /// Iterate over `(dx, dy)` pairs
    pub fn offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.dx.iter().copied().zip(self.dy.iter().copied())
    }

    #[inline]
    pub fn min_x(&self) -> i32 {
        self.min_x
    }

    #[inline]
    pub fn max_x(&self) -> i32 {
        self.max_x
    }

    #[inline]
    pub fn min_y(&self) -> i32 {
        self.min_y
    }

    #[inline]
    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    /// Flatten the offsets for an image of the given width.
    pub fn linear_offsets(&self, width: u32) -> LinearOffsets {
        let w = width as isize;
        LinearOffsets {
            width,
            offsets: self
                .offsets()
                .map(|(x, y)| y as isize * w + x as isize)
                .collect(),
        }
    }

    /// Element with every offset negated
    pub fn reflect(&self) -> Self {
        Self {
            dx: self.dx.iter().map(|&x| -x).collect(),
            dy: self.dy.iter().map(|&y| -y).collect(),
            min_x: -self.max_x,
            max_x: -self.min_x,
            min_y: -self.max_y,
            max_y: -self.min_y,
        }
    }

    /// True if the offset set is unchanged by reflection
    pub fn is_symmetric(&self) -> bool {
        let mut a: Vec<(i32, i32)> = self.offsets().collect();
        let mut b: Vec<(i32, i32)> = self.offsets().map(|(x, y)| (-x, -y)).collect();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mask_offsets() {
        // 3x2 mask, anchor (1, 0)
        let se = StructuringElement::from_mask(&[1, 0, 1, 0, 1, 0], 3, 2, 1, 0).unwrap();
        assert_eq!(se.horizontal_offsets(), &[-1, 1, 0]);
        assert_eq!(se.vertical_offsets(), &[0, 0, 1]);
        assert_eq!((se.min_x(), se.max_x()), (-1, 1));
        assert_eq!((se.min_y(), se.max_y()), (0, 1));
    }

    #[test]
    fn test_empty_mask_rejected() {
        assert!(matches!(
            StructuringElement::from_mask(&[0, 0, 0], 3, 1, 1, 0),
            Err(MorphError::InvalidElement(_))
        ));
        assert!(StructuringElement::from_mask(&[1, 1], 3, 1, 1, 0).is_err());
        assert!(StructuringElement::from_mask(&[1, 1, 1], 3, 1, 3, 0).is_err());
    }

    #[test]
    fn test_from_pattern_matches_horizontal() {
        let se = StructuringElement::from_pattern("xxxxx", 2, 0).unwrap();
        assert_eq!(se, StructuringElement::horizontal(2).unwrap());
        assert!(StructuringElement::from_pattern("x.\nx", 0, 0).is_err());
        assert!(StructuringElement::from_pattern("xo", 0, 0).is_err());
    }

    #[test]
    fn test_centered_anchor() {
        let se = StructuringElement::from_mask_centered(&[1; 9], 3, 3).unwrap();
        assert_eq!(se, StructuringElement::brick(1, 1).unwrap());
    }

    #[test]
    fn test_vertical() {
        let se = StructuringElement::vertical(2).unwrap();
        assert_eq!(se.neighbor_count(), 5);
        assert_eq!(se.vertical_offsets(), &[-2, -1, 0, 1, 2]);
        assert!(se.horizontal_offsets().iter().all(|&x| x == 0));
    }

    #[test]
    fn test_linear_offsets() {
        let se = StructuringElement::from_pattern(".x.\nx.x", 1, 0).unwrap();
        let lin = se.linear_offsets(10);
        assert_eq!(lin.width(), 10);
        assert_eq!(lin.as_slice(), &[0, 9, 11]);
        assert_eq!(se.linear_offsets(4).as_slice(), &[0, 3, 5]);
    }

    #[test]
    fn test_reflect_and_symmetry() {
        let se = StructuringElement::from_pattern("xx.", 0, 0).unwrap();
        assert!(!se.is_symmetric());
        let r = se.reflect();
        assert_eq!(r.horizontal_offsets(), &[0, -1]);
        assert_eq!((r.min_x(), r.max_x()), (-1, 0));
        assert!(StructuringElement::brick(2, 1).unwrap().is_symmetric());
        assert!(StructuringElement::identity().is_symmetric());
    }

    #[test]
    fn test_brick_radius_bound() {
        assert!(StructuringElement::horizontal(MAX_ELEMENT_RADIUS).is_ok());
        assert!(matches!(
            StructuringElement::horizontal(MAX_ELEMENT_RADIUS + 1),
            Err(MorphError::InvalidElement(_))
        ));
        assert!(StructuringElement::brick(1, u32::MAX).is_err());
    }

    #[test]
    fn test_cached_element_reuses_offsets() {
        let cached = CachedElement::from(StructuringElement::vertical(1).unwrap());
        let a = cached.linear_offsets(10);
        let b = cached.linear_offsets(10);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.as_slice(), &[-10, 0, 10]);

        let c = cached.linear_offsets(7);
        assert_eq!(c.width(), 7);
        assert_eq!(c.as_slice(), &[-7, 0, 7]);
        assert!(!Arc::ptr_eq(&a, &cached.linear_offsets(10)));
    }
}
