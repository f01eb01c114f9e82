//! Common test imports and utilities for container tests.
#![allow(unused_imports)]

pub use crate::container::{HEADER_SIZE, YKCMP_MAGIC};
pub use alloc::{vec, vec::Vec};
pub use rstest::rstest;
pub use tiled_texture_common::ErrorCategory;

use endian_writer::{EndianWriter, LittleEndianWriter};

/// Builds a container with the given header fields followed by `payload`.
pub fn container(
    compression_type: u32,
    compressed_size: u32,
    decompressed_size: u32,
    payload: &[u8],
) -> Vec<u8> {
    let mut data = vec![0u8; HEADER_SIZE + payload.len()];
    data[..8].copy_from_slice(&YKCMP_MAGIC);

    // SAFETY: data holds at least HEADER_SIZE bytes
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    unsafe {
        writer.write_u32_at(compression_type, 0x08);
        writer.write_u32_at(compressed_size, 0x0C);
        writer.write_u32_at(decompressed_size, 0x10);
    }

    data[HEADER_SIZE..].copy_from_slice(payload);
    data
}

/// Deterministic byte pattern with no short period.
pub fn pattern(len: usize) -> Vec<u8> {
    (0..len)
        .map(|index| (index.wrapping_mul(31) ^ (index >> 8)) as u8)
        .collect()
}
