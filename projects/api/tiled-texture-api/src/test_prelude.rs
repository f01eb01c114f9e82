//! Common test imports and utilities for API tests.
#![allow(unused_imports)]

pub use alloc::{vec, vec::Vec};
pub use rstest::rstest;
pub use tiled_texture_common::{ErrorCategory, PixelFormat};

use tiled_texture_swizzle::SurfaceDescriptor;
use tiled_texture_tex::TEX_HEADER_SIZE;
use tiled_texture_ykcmp::{HEADER_SIZE, YKCMP_MAGIC};

/// Deterministic byte pattern with no short period.
pub fn pattern(len: usize) -> Vec<u8> {
    (0..len)
        .map(|index| (index.wrapping_mul(31) ^ (index >> 8)) as u8)
        .collect()
}

/// Serializes a TEX file describing `surface` followed by `payload`.
pub fn tex_file(surface: &SurfaceDescriptor, payload: &[u8]) -> Vec<u8> {
    let mut data = vec![0u8; TEX_HEADER_SIZE];
    data[..8].copy_from_slice(b"TEX\0\0\0\0\0");
    data[0x14] = surface.format.id() as u8;
    data[0x18..0x1C].copy_from_slice(&surface.width.to_le_bytes());
    data[0x1C..0x20].copy_from_slice(&surface.height.to_le_bytes());
    data[0x25] = surface.mip_count as u8;
    data[0x30..0x34].copy_from_slice(&(payload.len() as u32).to_le_bytes());
    data[0x38] = surface.block_height_log2 as u8;
    data[0x39] = surface.tile_width_spacing_log2 as u8;
    data.extend_from_slice(payload);
    data
}

/// Wraps `data` in a back-reference container made of literal runs only.
pub fn literal_container(data: &[u8]) -> Vec<u8> {
    let mut stream = Vec::new();
    for chunk in data.chunks(0x7F) {
        stream.push(chunk.len() as u8);
        stream.extend_from_slice(chunk);
    }

    let mut container = Vec::with_capacity(HEADER_SIZE + stream.len());
    container.extend_from_slice(&YKCMP_MAGIC);
    container.extend_from_slice(&4u32.to_le_bytes());
    container.extend_from_slice(&(stream.len() as u32).to_le_bytes());
    container.extend_from_slice(&(data.len() as u32).to_le_bytes());
    container.extend_from_slice(&stream);
    container
}
