//! Error types for wordsnap-morph

use thiserror::Error;

/// Errors that can occur during morphological operations
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] wordsnap_core::Error),

    /// Invalid structuring element
    #[error("invalid structuring element: {0}")]
    InvalidElement(String),
}

impl MorphError {
    /// True if this wraps a core size error
    pub fn is_size_error(&self) -> bool {
        matches!(self, MorphError::Core(e) if e.is_size_error())
    }
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
