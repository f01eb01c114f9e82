//! Error types for swizzle operations.

use crate::geometry::MAX_MIP_LEVELS;
use crate::surface::{MAX_BLOCK_HEIGHT_LOG2, MAX_DIMENSION, MAX_TILE_WIDTH_SPACING_LOG2};
use thiserror::Error;
use tiled_texture_common::{ErrorCategory, PixelFormat, PixelFormatError};

/// Errors that can occur while computing surface geometry or swizzling a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SwizzleError {
    /// The raw pixel format identifier is not in the catalog.
    #[error(transparent)]
    UnknownPixelFormat(#[from] PixelFormatError),

    /// Elements of this format would straddle the 16-byte sectors of a GOB.
    #[error("Unsupported pixel format {format:?}: {bytes_per_block} bytes per block is not a power of two")]
    UnsupportedBytesPerBlock {
        /// The rejected format.
        format: PixelFormat,
        /// Its block size in bytes.
        bytes_per_block: u32,
    },

    /// One of the base dimensions is zero.
    #[error("Surface dimensions must be non-zero: got {width}x{height}x{depth}")]
    ZeroDimension {
        /// Base width in pixels.
        width: u32,
        /// Base height in pixels.
        height: u32,
        /// Base depth in slices.
        depth: u32,
    },

    /// One of the base dimensions exceeds [`MAX_DIMENSION`].
    #[error("Surface dimension too large: {0} (maximum is {max})", max = MAX_DIMENSION)]
    DimensionTooLarge(u32),

    /// Mip count outside `1..=MAX_MIP_LEVELS`.
    #[error("Invalid mip count: {0} (must be between 1 and {max})", max = MAX_MIP_LEVELS)]
    InvalidMipCount(u32),

    /// Block height exponent above [`MAX_BLOCK_HEIGHT_LOG2`].
    #[error("Block height exponent too large: {0} (maximum is {max})", max = MAX_BLOCK_HEIGHT_LOG2)]
    BlockHeightTooLarge(u32),

    /// Tile width spacing exponent above [`MAX_TILE_WIDTH_SPACING_LOG2`].
    #[error("Tile width spacing exponent too large: {0} (maximum is {max})", max = MAX_TILE_WIDTH_SPACING_LOG2)]
    TileWidthSpacingTooLarge(u32),

    /// A computed byte size does not fit in 32 bits.
    #[error("Surface too large: {0} bytes does not fit in 32 bits")]
    SurfaceTooLarge(u64),

    /// The source buffer is smaller than the layout requires.
    #[error("Source buffer too small: required {required} bytes, got {actual} bytes")]
    SourceTooSmall {
        /// Required size in bytes.
        required: usize,
        /// Supplied size in bytes.
        actual: usize,
    },

    /// The destination buffer is smaller than the layout requires.
    #[error("Destination buffer too small: required {required} bytes, got {actual} bytes")]
    DestinationTooSmall {
        /// Required size in bytes.
        required: usize,
        /// Supplied size in bytes.
        actual: usize,
    },

    /// An element offset fell outside its buffer.
    #[error("Element at offset {offset} ({len} bytes) is outside a buffer of {buffer_len} bytes")]
    OutOfBounds {
        /// Offset of the element.
        offset: usize,
        /// Element size in bytes.
        len: usize,
        /// Length of the buffer that was indexed.
        buffer_len: usize,
    },
}

impl SwizzleError {
    /// Returns the [`ErrorCategory`] of this error.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            SwizzleError::UnknownPixelFormat(_) | SwizzleError::UnsupportedBytesPerBlock { .. } => {
                ErrorCategory::UnsupportedFormat
            }
            SwizzleError::ZeroDimension { .. }
            | SwizzleError::DimensionTooLarge(_)
            | SwizzleError::InvalidMipCount(_)
            | SwizzleError::BlockHeightTooLarge(_)
            | SwizzleError::TileWidthSpacingTooLarge(_)
            | SwizzleError::SurfaceTooLarge(_) => ErrorCategory::InvalidArgument,
            SwizzleError::SourceTooSmall { .. } | SwizzleError::DestinationTooSmall { .. } => {
                ErrorCategory::SizeMismatch
            }
            SwizzleError::OutOfBounds { .. } => ErrorCategory::MalformedStream,
        }
    }
}
