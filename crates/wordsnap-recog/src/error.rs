//! Error types for wordsnap-recog

use thiserror::Error;

/// Errors that can occur while detecting or capturing a word
#[derive(Debug, Error)]
pub enum RecogError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] wordsnap_core::Error),

    /// Filter error
    #[error("filter error: {0}")]
    Filter(#[from] wordsnap_filter::FilterError),

    /// Morphology error
    #[error("morph error: {0}")]
    Morph(#[from] wordsnap_morph::MorphError),

    /// I/O error
    #[error("io error: {0}")]
    Io(#[from] wordsnap_io::IoError),

    /// Configuration could not be parsed
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// Configuration parsed but holds an unusable value
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The OCR service reported a failure
    #[error("OCR failed: {0}")]
    Ocr(String),

    /// The frame source could not deliver a frame
    #[error("capture failed: {0}")]
    Capture(String),
}

/// Result type for recognition operations
pub type RecogResult<T> = Result<T, RecogError>;
