//! Error types shared across the workspace.

use thiserror::Error;

/// Coarse classification of every failure the tiled texture crates can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A declared size disagrees with a supplied buffer size.
    SizeMismatch,
    /// An unrecognised compression type or pixel format identifier.
    UnsupportedFormat,
    /// A data stream would read or write past its bounds.
    MalformedStream,
    /// Caller supplied parameters that can never describe a valid surface.
    InvalidArgument,
}

/// Errors raised by the pixel format catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PixelFormatError {
    /// The identifier does not name a catalogued pixel format.
    #[error("Unknown pixel format identifier: {0} (must be below {max})", max = crate::MAX_PIXEL_FORMAT)]
    UnknownPixelFormat(u32),
}

impl PixelFormatError {
    /// Returns the [`ErrorCategory`] of this error.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            PixelFormatError::UnknownPixelFormat(_) => ErrorCategory::UnsupportedFormat,
        }
    }
}
