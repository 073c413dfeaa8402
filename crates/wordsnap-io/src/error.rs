//! I/O error types
//!
//! Provides a unified error type for all buffer I/O operations.
//! The PNG codec maps its library errors into `IoError` variants so that
//! callers only need to handle one error type.

use thiserror::Error;

/// Error type for buffer I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The PNG stream uses a color type or bit depth we do not read
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The image data is structurally invalid
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// The PNG decoder returned an error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// The PNG encoder returned an error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// An error from the core library (e.g. crop region out of bounds)
    #[error("core error: {0}")]
    Core(#[from] wordsnap_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
