//! Common test imports and utilities for swizzle tests.
#![allow(unused_imports)]

extern crate alloc;

pub use alloc::{vec, vec::Vec};
pub use rstest::rstest;
pub use tiled_texture_common::PixelFormat;

use crate::surface::SurfaceDescriptor;

/// Builds a single layer 2D surface descriptor.
pub fn surface_2d(
    format: PixelFormat,
    width: u32,
    height: u32,
    mip_count: u32,
    tile_width_spacing_log2: u32,
    block_height_log2: u32,
) -> SurfaceDescriptor {
    SurfaceDescriptor {
        format,
        width,
        height,
        depth: 1,
        mip_count,
        tile_width_spacing_log2,
        block_height_log2,
    }
}

/// Deterministic byte pattern with no short period, so misplaced bytes show up.
pub fn pattern(len: usize) -> Vec<u8> {
    (0..len)
        .map(|index| (index.wrapping_mul(31) ^ (index >> 8)) as u8)
        .collect()
}
