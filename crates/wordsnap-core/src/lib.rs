//! WordSnap Core - Basic data structures for word extent detection
//!
//! This crate provides the data structures shared by every pipeline stage:
//!
//! - [`GrayBuffer`] - 8-bit grayscale pixel buffer
//! - [`Rect`] - Rectangle regions with exclusive right/bottom edges
//! - [`RegionStats`] / [`Histogram`] - Region statistics
//!
//! All read-only statistics (min, max, mean, variance) live on
//! [`GrayBuffer`] and take an optional region.

pub mod error;
pub mod gray;
pub mod rect;

pub use error::{Error, Result};
pub use gray::{GrayBuffer, Histogram, RegionStats};
pub use rect::Rect;
