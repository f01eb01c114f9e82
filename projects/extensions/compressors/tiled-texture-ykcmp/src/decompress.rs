use crate::back_reference;
use crate::container::{parse_container_header, CompressionType, HEADER_SIZE};
use crate::error::DecompressError;
use alloc::{vec, vec::Vec};

/// Decompresses a whole container into `output`.
///
/// `output` must be exactly as long as the header's declared decompressed size; nothing is
/// written when it is not. The magic is not checked, see [`likely_ykcmp`](crate::likely_ykcmp).
///
/// # Errors
///
/// - [`DecompressError::InputTooShort`] if `input` cannot hold a header.
/// - [`DecompressError::SizeMismatch`] if `output.len()` differs from the declared size.
/// - [`DecompressError::UnsupportedCompressionType`] for unknown compression types.
/// - [`DecompressError::MalformedStream`], [`DecompressError::Truncated`] or
///   [`DecompressError::Lz4`] if the payload does not decode to exactly `output.len()` bytes.
pub fn decompress(input: &[u8], output: &mut [u8]) -> Result<(), DecompressError> {
    let header = parse_container_header(input).ok_or(DecompressError::InputTooShort {
        actual: input.len(),
    })?;
    log::debug!(
        "YKCMP container: type {}, {} -> {} bytes",
        header.compression_type,
        header.compressed_size,
        header.decompressed_size
    );

    if header.decompressed_size as usize != output.len() {
        log::warn!(
            "Rejecting YKCMP container: declares {} bytes, output holds {}",
            header.decompressed_size,
            output.len()
        );
        return Err(DecompressError::SizeMismatch {
            declared: header.decompressed_size,
            actual: output.len(),
        });
    }

    let compression = header
        .compression()
        .ok_or(DecompressError::UnsupportedCompressionType(header.compression_type))?;
    let payload_end = header.payload_end(input.len());

    match compression {
        CompressionType::BackReference => {
            back_reference::decode(&input[..payload_end], HEADER_SIZE, output)?
        }
        CompressionType::Lz4 | CompressionType::Lz4Alternate => {
            let written = lz4_flex::block::decompress_into(&input[HEADER_SIZE..payload_end], output)?;
            if written != output.len() {
                return Err(DecompressError::Truncated {
                    produced: written,
                    expected: output.len(),
                });
            }
        }
    }

    log::trace!("Decoded {} bytes of {:?} data", output.len(), compression);
    Ok(())
}

/// Decompresses a whole container into a newly allocated buffer sized from its header.
///
/// # Errors
///
/// As [`decompress`], except that [`DecompressError::SizeMismatch`] cannot occur.
pub fn decompress_allocating(input: &[u8]) -> Result<Vec<u8>, DecompressError> {
    let header = parse_container_header(input).ok_or(DecompressError::InputTooShort {
        actual: input.len(),
    })?;
    let mut output = vec![0u8; header.decompressed_size as usize];
    decompress(input, &mut output)?;
    Ok(output)
}
