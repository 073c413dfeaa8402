//! WordSnap - Word extent detection for camera frames
//!
//! Given a grayscale frame with a word roughly in the middle, WordSnap
//! finds the rectangle that encloses the word so it can be cropped and
//! sent to an OCR service.
//!
//! # Overview
//!
//! The pipeline is built from small pieces that can also be used alone:
//!
//! - Region statistics and contrast stretch ([`GrayBuffer`])
//! - Clipped box mean filter ([`filter::mean_filter`])
//! - Adaptive thresholding against the local mean
//! - Grayscale erosion with line structuring elements ([`morph`])
//! - Seeded region growing ([`recog::grow_region`])
//!
//! # Example
//!
//! ```
//! use wordsnap::recog::{DetectorConfig, WordExtentDetector};
//! use wordsnap::{GrayBuffer, Rect};
//!
//! // A dark block on a light page
//! let block = Rect::new(45, 45, 55, 55).unwrap();
//! let frame = GrayBuffer::from_fn(100, 100, |x, y| {
//!     if block.contains_point(x, y) { 0 } else { 255 }
//! })
//! .unwrap();
//!
//! let detector = WordExtentDetector::new(DetectorConfig::default()).unwrap();
//! let extent = detector.detect(&frame).unwrap();
//! assert!(extent.rect.contains_rect(&block));
//! assert!(!extent.warnings.touches_border);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use wordsnap_core::*;

// Re-export stage crates as modules to avoid name conflicts
pub use wordsnap_filter as filter;
pub use wordsnap_io as io;
pub use wordsnap_morph as morph;
pub use wordsnap_recog as recog;
