//! wordsnap-recog - Word extent detection and capture
//!
//! - [`DetectorConfig`]: named tunables, loadable from JSON
//! - [`WordExtentDetector`]: frame to word rectangle
//! - [`grow_region`] / [`seed_rect`]: the region growing step on its own
//! - [`WordCapture`]: camera, detector and OCR client wired together
//!
//! Logging goes through the `log` facade; no logger is installed here.

pub mod capture;
pub mod config;
pub mod detector;
mod error;
pub mod grow;

pub use capture::{
    CaptureOutcome, FrameSource, OcrClient, StaticFrameSource, WordCapture, encode_word_png,
    parse_ocr_response,
};
pub use config::DetectorConfig;
pub use detector::{ExtentWarnings, WordExtent, WordExtentDetector};
pub use error::{RecogError, RecogResult};
pub use grow::{FOREGROUND, Growth, grow_region, seed_rect};
