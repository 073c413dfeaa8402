//! Error types for wordsnap-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Size errors are reported before anything is written, so a caller can
//! reallocate a correctly sized buffer and retry.

use thiserror::Error;

/// WordSnap core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid buffer dimensions
    #[error("invalid buffer dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Raw sample data is shorter than `width * height`
    #[error("buffer too short: {len} samples, need {required}")]
    BufferTooShort { len: usize, required: usize },

    /// Destination or companion buffer does not match the source size
    #[error("size mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    SizeMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Region has zero area or is inverted
    #[error("empty region: left={left}, top={top}, right={right}, bottom={bottom}")]
    EmptyRegion {
        left: u32,
        top: u32,
        right: u32,
        bottom: u32,
    },

    /// Region extends past the buffer
    #[error("region ({left},{top})-({right},{bottom}) exceeds {width}x{height} buffer")]
    RegionOutOfBounds {
        left: u32,
        top: u32,
        right: u32,
        bottom: u32,
        width: u32,
        height: u32,
    },
}

impl Error {
    /// True for the size-error family (`SizeMismatch`, `BufferTooShort`).
    pub fn is_size_error(&self) -> bool {
        matches!(self, Error::SizeMismatch { .. } | Error::BufferTooShort { .. })
    }

    /// True for the range-error family (`EmptyRegion`, `RegionOutOfBounds`).
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            Error::EmptyRegion { .. } | Error::RegionOutOfBounds { .. }
        )
    }
}

/// Result type alias for WordSnap core operations
pub type Result<T> = std::result::Result<T, Error>;
