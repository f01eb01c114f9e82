//! C API for container decompression.

use crate::decompress::decompress;
use core::slice;

/// Decompresses a container into `output`.
///
/// Returns `false` if either pointer is null, `output_len` differs from the declared
/// decompressed size, the compression type is unsupported or the payload is malformed.
///
/// # Safety
///
/// - `input` must be valid for reads of `input_len` bytes
/// - `output` must be valid for writes of `output_len` bytes
/// - The two buffers must not overlap
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ykcmp_decompress(
    input: *const u8,
    input_len: usize,
    output: *mut u8,
    output_len: usize,
) -> bool {
    if input.is_null() || output.is_null() {
        return false;
    }

    let input = unsafe { slice::from_raw_parts(input, input_len) };
    let output = unsafe { slice::from_raw_parts_mut(output, output_len) };
    match decompress(input, output) {
        Ok(()) => true,
        Err(error) => {
            log::warn!("ykcmp_decompress failed: {error}");
            false
        }
    }
}
