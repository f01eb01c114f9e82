//! Error types for the high level API.

use thiserror::Error;
use tiled_texture_common::{ErrorCategory, PixelFormatError};
use tiled_texture_swizzle::SwizzleError;
use tiled_texture_tex::TEX_HEADER_SIZE;
use tiled_texture_ykcmp::DecompressError;

/// Errors that can occur while unpacking a tiled texture.
#[derive(Debug, Error)]
pub enum TiledTextureError {
    /// A raw pixel format identifier is not in the catalog.
    #[error(transparent)]
    PixelFormat(#[from] PixelFormatError),

    /// The surface description or buffers were rejected by the swizzle engine.
    #[error(transparent)]
    Swizzle(#[from] SwizzleError),

    /// The YKCMP container could not be decompressed.
    #[error(transparent)]
    Decompress(#[from] DecompressError),

    /// The data is too short to hold a TEX header.
    #[error("Unknown texture header: {len} bytes is shorter than the {required} byte TEX header", required = TEX_HEADER_SIZE)]
    UnknownTextureHeader {
        /// Length of the supplied data.
        len: usize,
    },
}

impl TiledTextureError {
    /// Returns the [`ErrorCategory`] of this error.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            TiledTextureError::PixelFormat(error) => error.category(),
            TiledTextureError::Swizzle(error) => error.category(),
            TiledTextureError::Decompress(error) => error.category(),
            TiledTextureError::UnknownTextureHeader { .. } => ErrorCategory::InvalidArgument,
        }
    }
}
