//! wordsnap-morph - Grayscale morphology
//!
//! - [`StructuringElement`]: an immutable neighbourhood, stored as offsets
//!   from an anchor, and [`CachedElement`] which keeps its flattened
//!   offsets for the last image width
//! - [`erode`] / [`dilate`]: neighbourhood minimum / maximum, skipping
//!   neighbours that fall outside the image
//! - [`open`] / [`close`]: the usual composites

mod error;
pub mod grayscale;
pub mod strel;

pub use error::{MorphError, MorphResult};
pub use grayscale::{
    close, dilate, dilate_cached_into, dilate_into, erode, erode_cached_into, erode_into, open,
};
pub use strel::{CachedElement, LinearOffsets, MAX_ELEMENT_RADIUS, StructuringElement};
