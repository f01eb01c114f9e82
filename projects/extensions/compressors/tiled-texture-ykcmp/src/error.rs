//! Error types for container decompression.

use crate::container::HEADER_SIZE;
use thiserror::Error;
use tiled_texture_common::ErrorCategory;

/// The way a back-reference stream went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedStreamKind {
    /// A literal run extends past the end of the payload.
    LiteralPastInputEnd,
    /// A back-reference control byte is missing its extra bytes.
    MissingControlBytes,
    /// A back-reference points before the start of the output.
    BackReferenceBeforeStart,
    /// A literal run or back-reference would write past the end of the output.
    OutputOverrun,
}

/// Errors that can occur while decompressing a container.
#[derive(Debug, Error)]
pub enum DecompressError {
    /// The input cannot hold a container header.
    #[error("Input too short: a container header needs {required} bytes, got {actual} bytes", required = HEADER_SIZE)]
    InputTooShort {
        /// Supplied input size in bytes.
        actual: usize,
    },

    /// The declared decompressed size differs from the output buffer.
    #[error("Decompressed size mismatch: header declares {declared} bytes, output holds {actual} bytes")]
    SizeMismatch {
        /// Size declared by the header.
        declared: u32,
        /// Size of the supplied output buffer.
        actual: usize,
    },

    /// The compression type identifier is not supported.
    #[error("Unsupported compression type: {0:#X}")]
    UnsupportedCompressionType(u32),

    /// The back-reference stream is malformed.
    #[error("Malformed stream at input offset {offset:#X}: {kind:?}")]
    MalformedStream {
        /// Input offset of the offending control byte.
        offset: usize,
        /// What went wrong.
        kind: MalformedStreamKind,
    },

    /// The payload ended before the output was filled.
    #[error("Truncated stream: produced {produced} of {expected} bytes")]
    Truncated {
        /// Bytes written before the payload ran out.
        produced: usize,
        /// Bytes the header declared.
        expected: usize,
    },

    /// The LZ4 payload could not be decoded.
    #[error("LZ4 decompression failed: {0}")]
    Lz4(lz4_flex::block::DecompressError),
}

impl From<lz4_flex::block::DecompressError> for DecompressError {
    fn from(error: lz4_flex::block::DecompressError) -> Self {
        DecompressError::Lz4(error)
    }
}

impl DecompressError {
    /// Returns the [`ErrorCategory`] of this error.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            DecompressError::InputTooShort { .. } | DecompressError::SizeMismatch { .. } => {
                ErrorCategory::SizeMismatch
            }
            DecompressError::UnsupportedCompressionType(_) => ErrorCategory::UnsupportedFormat,
            DecompressError::MalformedStream { .. }
            | DecompressError::Truncated { .. }
            | DecompressError::Lz4(_) => ErrorCategory::MalformedStream,
        }
    }
}
