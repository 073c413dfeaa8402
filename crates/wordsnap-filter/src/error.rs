//! Error types for wordsnap-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error (size mismatch between buffers)
    #[error("core error: {0}")]
    Core(#[from] wordsnap_core::Error),
}

impl FilterError {
    /// True if this wraps a core size error
    pub fn is_size_error(&self) -> bool {
        matches!(self, FilterError::Core(e) if e.is_size_error())
    }
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
