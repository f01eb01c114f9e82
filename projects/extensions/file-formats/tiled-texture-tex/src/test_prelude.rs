//! Common test imports and utilities for TEX tests.
#![allow(unused_imports)]

extern crate alloc;

pub use alloc::{vec, vec::Vec};
pub use rstest::rstest;

use crate::constants::*;
use crate::parse_tex::TextureHeader;
use endian_writer::{EndianWriter, LittleEndianWriter};

/// A plausible header for a 64x64 single level surface.
pub fn sample_header() -> TextureHeader {
    TextureHeader {
        magic: *b"TEX\0\0\0\0\0",
        format_code: 1,
        width: 64,
        height: 64,
        mip_count: 1,
        decompressed_size: 0x4000,
        compressed_size: 0x4000,
        block_height_log2: 4,
        tile_width_spacing_log2: 0,
    }
}

/// Serializes `header` followed by `payload`.
pub fn tex_file(header: &TextureHeader, payload: &[u8]) -> Vec<u8> {
    let mut data = vec![0u8; TEX_HEADER_SIZE + payload.len()];
    data[..MAGIC_LEN].copy_from_slice(&header.magic);
    data[FORMAT_CODE_OFFSET] = header.format_code;
    data[MIP_COUNT_OFFSET] = header.mip_count;
    data[BLOCK_HEIGHT_OFFSET] = header.block_height_log2;
    data[TILE_WIDTH_SPACING_OFFSET] = header.tile_width_spacing_log2;

    // SAFETY: data holds at least TEX_HEADER_SIZE bytes
    let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
    unsafe {
        writer.write_u32_at(header.width, WIDTH_OFFSET as isize);
        writer.write_u32_at(header.height, HEIGHT_OFFSET as isize);
        writer.write_u32_at(header.decompressed_size, DECOMPRESSED_SIZE_OFFSET as isize);
        writer.write_u32_at(header.compressed_size, COMPRESSED_SIZE_OFFSET as isize);
    }

    data[TEX_HEADER_SIZE..].copy_from_slice(payload);
    data
}
