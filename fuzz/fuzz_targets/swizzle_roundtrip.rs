#![no_main]

// Swizzling then unswizzling any valid surface must restore the linear data.

use libfuzzer_sys::{arbitrary, fuzz_target};
use tiled_texture_common::PixelFormat;
use tiled_texture_swizzle::{swizzle_mip_chain, unswizzle_image, SurfaceDescriptor};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Surface {
    pub format: u8,
    pub width: u8,
    pub height: u8,
    pub depth: u8,
    pub mip_count: u8,
    pub tile_width_spacing_log2: u8,
    pub block_height_log2: u8,
    pub seed: u8,
}

fuzz_target!(|input: Surface| {
    let Ok(format) = PixelFormat::from_id(input.format as u32) else {
        return;
    };
    let surface = SurfaceDescriptor {
        format,
        width: input.width as u32 + 1,
        height: input.height as u32 + 1,
        depth: (input.depth % 4) as u32 + 1,
        mip_count: (input.mip_count % 9) as u32 + 1,
        tile_width_spacing_log2: (input.tile_width_spacing_log2 % 4) as u32,
        block_height_log2: (input.block_height_log2 % 6) as u32,
    };
    let Ok(layout) = surface.layout() else {
        // Only formats with non power of two blocks are rejected in this range.
        assert!(!format.bytes_per_block().is_power_of_two());
        return;
    };

    let linear: Vec<u8> = (0..layout.linear_size())
        .map(|index| (index as u8).wrapping_mul(input.seed | 1))
        .collect();
    let mut tiled = vec![0u8; layout.block_linear_size()];
    let mut restored = vec![0u8; layout.linear_size()];

    swizzle_mip_chain(&linear, &mut tiled, &surface).unwrap();
    unswizzle_image(&tiled, &mut restored, &surface).unwrap();
    assert_eq!(restored, linear);
});
