//! Mip chain geometry for block-linear surfaces.
//!
//! Everything here is a pure function of a [`LevelInfo`] (or of values derived from one).
//! Widths measured in "blocks" are byte widths: the tile count shifted left by the bytes
//! per pixel exponent. Heights and depths are tile counts.
//!
//! Two related shapes appear per level:
//!
//! - The *tile shift* ([`tile_shift`]) is the GOB block shape used to size a level in the
//!   packed guest buffer ([`calculate_level_size`]).
//! - The *mip block size* ([`adjust_mip_block_size`]) is the shape handed to the swizzle
//!   engine for that level.
//!
//! Both shrink the requested block height while the level is small enough that the full
//! block would only hold padding.

use crate::error::SwizzleError;
use crate::gob::{
    GOB_SIZE_SHIFT, GOB_SIZE_X, GOB_SIZE_X_SHIFT, GOB_SIZE_Y, GOB_SIZE_Y_SHIFT, GOB_SIZE_Z,
};
use tiled_texture_common::math::{
    align_up, align_up_log2, bytes_per_block_log2, div_ceil, div_ceil_log2,
};
use tiled_texture_common::{Extent2D, Extent3D, PixelFormat};

/// Hardware ceiling on the number of mip levels in a chain.
pub const MAX_MIP_LEVELS: u32 = 15;

/// Per level byte sizes, indexed by mip level. Entries past the mip count are zero.
pub type LevelArray = [u32; MAX_MIP_LEVELS as usize];

/// Read-only description of one image's mip chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelInfo {
    /// Base (level 0) size in pixels.
    pub size: Extent3D,
    /// Requested GOB block shape as exponents. Only height and depth are non-zero in practice.
    pub block: Extent3D,
    /// Pixels covered by one format block.
    pub tile_size: Extent2D,
    /// `log2` of the bytes per block.
    pub bpp_log2: u32,
    /// Tile width spacing exponent.
    pub tile_width_spacing: u32,
}

impl LevelInfo {
    /// Describes a mip chain of `format` with base `size` and requested `block` shape.
    pub fn new(
        format: PixelFormat,
        size: Extent3D,
        block: Extent3D,
        tile_width_spacing: u32,
    ) -> Self {
        Self {
            size,
            block,
            tile_size: format.block_size(),
            bpp_log2: bytes_per_block_log2(format.bytes_per_block()),
            tile_width_spacing,
        }
    }
}

/// Size of one axis at `level`, never below 1.
#[inline]
pub const fn adjust_mip_size(size: u32, level: u32) -> u32 {
    let shifted = if level >= 32 { 0 } else { size >> level };
    if shifted == 0 {
        1
    } else {
        shifted
    }
}

/// [`adjust_mip_size`] applied to every axis.
#[inline]
pub const fn adjust_mip_extent(size: Extent3D, level: u32) -> Extent3D {
    Extent3D::new(
        adjust_mip_size(size.width, level),
        adjust_mip_size(size.height, level),
        adjust_mip_size(size.depth, level),
    )
}

/// Number of `block_size` tiles along one axis at `level`.
#[inline]
pub const fn adjust_size(size: u32, level: u32, block_size: u32) -> u32 {
    div_ceil(adjust_mip_size(size, level), block_size)
}

/// Tile counts at `level`, with the width expressed in bytes.
pub fn num_level_blocks(info: &LevelInfo, level: u32) -> Extent3D {
    Extent3D::new(
        adjust_size(info.size.width, level, info.tile_size.width) << info.bpp_log2,
        adjust_size(info.size.height, level, info.tile_size.height),
        adjust_mip_size(info.size.depth, level),
    )
}

/// Shrinks a block exponent until one block spans less than `dimension` units,
/// where a block of exponent `shift` spans `unit_factor << (shift - 1)` units.
pub const fn adjust_tile_size(shift: u32, unit_factor: u32, dimension: u32) -> u32 {
    if shift == 0 {
        return 0;
    }
    let mut shift = shift;
    let mut x = unit_factor << (shift - 1);
    if x >= dimension {
        loop {
            shift -= 1;
            if shift == 0 {
                break;
            }
            x >>= 1;
            if x < dimension {
                break;
            }
        }
    }
    shift
}

/// Pixel size to tile counts; depth passes through unchanged.
#[inline]
pub const fn tile_counts(size: Extent3D, tile_size: Extent2D) -> Extent3D {
    Extent3D::new(
        div_ceil(size.width, tile_size.width),
        div_ceil(size.height, tile_size.height),
        size.depth,
    )
}

/// GOB block shape used to size `level` in the packed guest buffer.
pub fn tile_shift(info: &LevelInfo, level: u32) -> Extent3D {
    let blocks = num_level_blocks(info, level);
    Extent3D::new(
        adjust_tile_size(info.block.width, GOB_SIZE_X, blocks.width),
        adjust_tile_size(info.block.height, GOB_SIZE_Y, blocks.height),
        adjust_tile_size(info.block.depth, GOB_SIZE_Z, blocks.depth),
    )
}

/// Whether a level is too small along some axis to fill one GOB block.
#[inline]
pub const fn is_smaller_than_gob_size(num_tiles: Extent3D, gob: Extent2D, block_depth: u32) -> bool {
    num_tiles.width <= (1 << gob.width)
        || num_tiles.height <= (1 << gob.height)
        || num_tiles.depth < (1 << block_depth)
}

/// GOB block footprint as exponents: width in elements (including tile width spacing),
/// height in rows.
#[inline]
pub const fn gob_size(bpp_log2: u32, block_height: u32, tile_width_spacing: u32) -> Extent2D {
    Extent2D::new(
        GOB_SIZE_X_SHIFT - bpp_log2 + tile_width_spacing,
        GOB_SIZE_Y_SHIFT + block_height,
    )
}

/// GOB columns and rows covering `level`. Columns are padded to the tile width spacing
/// unless the level is smaller than one GOB block.
pub fn num_gobs(info: &LevelInfo, level: u32) -> Extent2D {
    let blocks = num_level_blocks(info, level);
    let gobs = Extent2D::new(
        div_ceil_log2(blocks.width, GOB_SIZE_X_SHIFT),
        div_ceil_log2(blocks.height, GOB_SIZE_Y_SHIFT),
    );
    let gob = gob_size(info.bpp_log2, info.block.height, info.tile_width_spacing);
    let alignment = if is_smaller_than_gob_size(blocks, gob, info.block.depth) {
        0
    } else {
        info.tile_width_spacing
    };
    Extent2D::new(align_up_log2(gobs.width, alignment), gobs.height)
}

/// Number of GOB blocks covering `level` along each axis.
pub fn level_tiles(info: &LevelInfo, level: u32) -> Extent3D {
    let blocks = num_level_blocks(info, level);
    let shift = tile_shift(info, level);
    let gobs = num_gobs(info, level);
    Extent3D::new(
        div_ceil_log2(gobs.width, shift.width),
        div_ceil_log2(gobs.height, shift.height),
        div_ceil_log2(blocks.depth, shift.depth),
    )
}

/// Bytes occupied by `level` in the packed guest buffer.
pub fn calculate_level_size(info: &LevelInfo, level: u32) -> u64 {
    let shift = tile_shift(info, level);
    let tiles = level_tiles(info, level);
    tiles.volume() << (GOB_SIZE_SHIFT + shift.width + shift.height + shift.depth)
}

/// Sizes of the first `num_levels` levels.
///
/// # Errors
///
/// - [`SwizzleError::InvalidMipCount`] if `num_levels > MAX_MIP_LEVELS`.
/// - [`SwizzleError::SurfaceTooLarge`] if a level does not fit in 32 bits.
pub fn calculate_level_sizes(info: &LevelInfo, num_levels: u32) -> Result<LevelArray, SwizzleError> {
    if num_levels > MAX_MIP_LEVELS {
        return Err(SwizzleError::InvalidMipCount(num_levels));
    }

    let mut sizes = LevelArray::default();
    for (level, size) in (0..num_levels).zip(sizes.iter_mut()) {
        let bytes = calculate_level_size(info, level);
        *size = u32::try_from(bytes).map_err(|_| SwizzleError::SurfaceTooLarge(bytes))?;
    }
    Ok(sizes)
}

/// Sum of the first `num_levels` entries of `sizes`.
#[inline]
pub fn calculate_level_bytes(sizes: &LevelArray, num_levels: u32) -> u64 {
    sizes
        .iter()
        .take(num_levels as usize)
        .map(|&size| u64::from(size))
        .sum()
}

/// Rounds a layer's total byte size up to its GOB block alignment.
///
/// With a tile width spacing the alignment covers a full spaced block. Without one, the
/// base block shape is first shrunk against the base height (aligned to `tile_size_y`)
/// and depth.
pub fn align_layer_size(
    size_bytes: u64,
    size: Extent3D,
    block: Extent3D,
    tile_size_y: u32,
    tile_width_spacing: u32,
) -> u64 {
    if tile_width_spacing > 0 {
        let alignment_log2 = GOB_SIZE_SHIFT + tile_width_spacing + block.height + block.depth;
        return align_up_log2_u64(size_bytes, alignment_log2);
    }

    let aligned_height = align_up(size.height, tile_size_y);
    let mut block_height = block.height;
    while block_height != 0 && aligned_height <= (1 << (block_height - 1)) * GOB_SIZE_Y {
        block_height -= 1;
    }
    let mut block_depth = block.depth;
    while block_depth != 0 && size.depth <= (1 << (block_depth - 1)) {
        block_depth -= 1;
    }
    align_up_log2_u64(size_bytes, GOB_SIZE_SHIFT + block_height + block_depth)
}

#[inline]
const fn align_up_log2_u64(value: u64, align_log2: u32) -> u64 {
    let mask = (1u64 << align_log2) - 1;
    (value + mask) & !mask
}

/// Total tiles in a level of pixel size `size`.
#[inline]
pub const fn num_blocks(size: Extent3D, tile_size: Extent2D) -> u64 {
    tile_counts(size, tile_size).volume()
}

/// Shrinks one block exponent for `level`, replaying the shrink once per level from 0.
///
/// `gob_extent` is the GOB size along the axis in the units of `num_tiles`.
pub const fn adjust_mip_block_shift(
    num_tiles: u32,
    block_shift: u32,
    level: u32,
    gob_extent: u32,
) -> u32 {
    let mut block_shift = block_shift;
    let mut remaining = level;
    loop {
        while block_shift > 0 && num_tiles <= (1 << (block_shift - 1)) * gob_extent {
            block_shift -= 1;
        }
        if remaining == 0 {
            break;
        }
        remaining -= 1;
    }
    block_shift
}

/// GOB block shape handed to the swizzle engine for `level`.
pub const fn adjust_mip_block_size(num_tiles: Extent3D, block: Extent3D, level: u32) -> Extent3D {
    Extent3D::new(
        adjust_mip_block_shift(num_tiles.width, block.width, level, GOB_SIZE_X),
        adjust_mip_block_shift(num_tiles.height, block.height, level, GOB_SIZE_Y),
        adjust_mip_block_shift(num_tiles.depth, block.depth, level, GOB_SIZE_Z),
    )
}

/// Row stride alignment exponent (in elements) for a level.
///
/// Levels smaller than one GOB block only pad rows to a full GOB width; larger levels pad
/// to the tile width spacing.
#[inline]
pub const fn stride_alignment(num_tiles: Extent3D, block: Extent3D, gob: Extent2D, bpp_log2: u32) -> u32 {
    if is_smaller_than_gob_size(num_tiles, gob, block.depth) {
        GOB_SIZE_X_SHIFT - bpp_log2
    } else {
        gob.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    fn level_info(
        format: PixelFormat,
        width: u32,
        height: u32,
        block_height: u32,
        tile_width_spacing: u32,
    ) -> LevelInfo {
        LevelInfo::new(
            format,
            Extent3D::new(width, height, 1),
            Extent3D::new(0, block_height, 0),
            tile_width_spacing,
        )
    }

    #[rstest]
    #[case(512, 0, 512)]
    #[case(512, 3, 64)]
    #[case(512, 9, 1)]
    #[case(512, 12, 1)]
    #[case(3, 1, 1)]
    #[case(1, 40, 1)]
    fn adjust_mip_size_floors_at_one(#[case] size: u32, #[case] level: u32, #[case] expected: u32) {
        assert_eq!(adjust_mip_size(size, level), expected);
    }

    #[rstest]
    #[case(0, 8, 1, 0)]
    #[case(3, 8, 128, 3)]
    #[case(3, 8, 64, 3)]
    #[case(3, 8, 32, 2)]
    #[case(3, 8, 16, 1)]
    #[case(3, 8, 8, 0)]
    #[case(4, 8, 64, 3)]
    #[case(4, 8, 65, 4)]
    fn adjust_tile_size_shrinks_oversized_blocks(
        #[case] shift: u32,
        #[case] unit_factor: u32,
        #[case] dimension: u32,
        #[case] expected: u32,
    ) {
        assert_eq!(adjust_tile_size(shift, unit_factor, dimension), expected);
    }

    #[test]
    fn num_level_blocks_measures_width_in_bytes() {
        let info = level_info(PixelFormat::Bc1RgbaUnorm, 512, 256, 4, 0);
        assert_eq!(num_level_blocks(&info, 0), Extent3D::new(1024, 64, 1));
        assert_eq!(num_level_blocks(&info, 1), Extent3D::new(512, 32, 1));
        assert_eq!(num_level_blocks(&info, 9), Extent3D::new(8, 1, 1));
    }

    #[rstest]
    #[case(PixelFormat::R8Unorm, 128, 128, 4)]
    #[case(PixelFormat::A8B8G8R8Unorm, 256, 256, 4)]
    #[case(PixelFormat::Bc1RgbaUnorm, 256, 256, 3)]
    #[case(PixelFormat::R16G16B16A16Float, 64, 128, 4)]
    #[case(PixelFormat::Bc7Unorm, 1024, 512, 4)]
    fn single_level_size_matches_tightly_packed_size_when_gob_aligned(
        #[case] format: PixelFormat,
        #[case] width: u32,
        #[case] height: u32,
        #[case] block_height: u32,
    ) {
        let info = level_info(format, width, height, block_height, 0);
        let tiles = tile_counts(info.size, info.tile_size);
        let expected = (u64::from(tiles.width) * u64::from(tiles.height)) << info.bpp_log2;
        assert_eq!(calculate_level_size(&info, 0), expected);
    }

    #[test]
    fn level_sizes_of_spaced_bc1_chain() {
        let info = level_info(PixelFormat::Bc1RgbaUnorm, 512, 512, 3, 4);
        let sizes = calculate_level_sizes(&info, 10).unwrap();
        assert_eq!(
            &sizes[..10],
            &[131072, 32768, 8192, 2048, 512, 512, 512, 512, 512, 512]
        );
        assert!(sizes[10..].iter().all(|&size| size == 0));
        assert_eq!(calculate_level_bytes(&sizes, 10), 177152);
        assert_eq!(calculate_level_bytes(&sizes, 2), 163840);
    }

    #[test]
    fn calculate_level_sizes_rejects_too_many_levels() {
        let info = level_info(PixelFormat::R8Unorm, 64, 64, 4, 0);
        assert_eq!(
            calculate_level_sizes(&info, 16),
            Err(SwizzleError::InvalidMipCount(16))
        );
    }

    #[test]
    fn num_gobs_pads_wide_levels_to_tile_width_spacing() {
        // 96 tiles of 8 bytes: 12 GOB columns, padded to 16 with a spacing of 4.
        let info = level_info(PixelFormat::Bc1RgbaUnorm, 384, 512, 3, 4);
        assert_eq!(num_gobs(&info, 0), Extent2D::new(16, 16));
        // Small levels skip the padding.
        assert_eq!(num_gobs(&info, 3), Extent2D::new(2, 2));
    }

    #[rstest]
    #[case(177152, 4, 3, 196608)]
    #[case(196608, 4, 3, 196608)]
    #[case(1, 1, 0, 1024)]
    fn align_layer_size_with_tile_width_spacing(
        #[case] size_bytes: u64,
        #[case] tile_width_spacing: u32,
        #[case] block_height: u32,
        #[case] expected: u64,
    ) {
        let size = Extent3D::new(512, 512, 1);
        let block = Extent3D::new(0, block_height, 0);
        assert_eq!(
            align_layer_size(size_bytes, size, block, 4, tile_width_spacing),
            expected
        );
    }

    #[rstest]
    // 64 rows shrink a 16 GOB block to 8 GOBs (4 KiB alignment).
    #[case(16384, 64, 4, 16384)]
    #[case(5000, 64, 4, 8192)]
    // 8 rows shrink all the way to a single GOB.
    #[case(700, 8, 4, 1024)]
    // Tall surfaces keep the full block.
    #[case(5000, 1024, 4, 8192)]
    #[case(9000, 1024, 4, 16384)]
    fn align_layer_size_without_tile_width_spacing(
        #[case] size_bytes: u64,
        #[case] height: u32,
        #[case] block_height: u32,
        #[case] expected: u64,
    ) {
        let size = Extent3D::new(64, height, 1);
        let block = Extent3D::new(0, block_height, 0);
        assert_eq!(align_layer_size(size_bytes, size, block, 1, 0), expected);
    }

    #[rstest]
    #[case(128, 3, 0, 3)]
    #[case(64, 3, 1, 3)]
    #[case(32, 3, 2, 2)]
    #[case(16, 3, 3, 1)]
    #[case(8, 3, 4, 0)]
    #[case(4, 5, 7, 0)]
    fn adjust_mip_block_shift_shrinks_small_levels(
        #[case] num_tiles: u32,
        #[case] block_shift: u32,
        #[case] level: u32,
        #[case] expected: u32,
    ) {
        assert_eq!(
            adjust_mip_block_shift(num_tiles, block_shift, level, GOB_SIZE_Y),
            expected
        );
    }

    #[rstest]
    #[case(PixelFormat::Bc1RgbaUnorm, 512, 512, 5)]
    #[case(PixelFormat::A8B8G8R8Unorm, 1024, 64, 4)]
    #[case(PixelFormat::R8Unorm, 3000, 17, 5)]
    #[case(PixelFormat::Astc2d10x5Unorm, 900, 700, 3)]
    fn mip_block_shape_never_grows_down_the_chain(
        #[case] format: PixelFormat,
        #[case] width: u32,
        #[case] height: u32,
        #[case] block_height: u32,
    ) {
        let info = LevelInfo::new(
            format,
            Extent3D::new(width, height, 16),
            Extent3D::new(0, block_height, 2),
            0,
        );
        let mut previous = info.block;
        for level in 0..MAX_MIP_LEVELS {
            let num_tiles = tile_counts(adjust_mip_extent(info.size, level), info.tile_size);
            let block = adjust_mip_block_size(num_tiles, info.block, level);
            assert!(block.height <= previous.height, "level {level}");
            assert!(block.depth <= previous.depth, "level {level}");
            previous = block;
        }
    }

    #[test]
    fn mip_block_shape_matches_tile_shift() {
        let info = level_info(PixelFormat::Bc1RgbaUnorm, 512, 512, 3, 4);
        for level in 0..10 {
            let num_tiles = tile_counts(adjust_mip_extent(info.size, level), info.tile_size);
            let block = adjust_mip_block_size(num_tiles, info.block, level);
            assert_eq!(block.height, tile_shift(&info, level).height, "level {level}");
        }
    }

    #[rstest]
    // Wide and tall: pad to the full spaced GOB width.
    #[case(Extent3D::new(256, 128, 1), 7)]
    // Exactly one spaced GOB wide still counts as small.
    #[case(Extent3D::new(128, 128, 1), 3)]
    // Narrower than one spaced GOB block: pad to one GOB.
    #[case(Extent3D::new(64, 128, 1), 3)]
    // Shorter than one GOB block.
    #[case(Extent3D::new(256, 16, 1), 3)]
    fn stride_alignment_depends_on_level_size(#[case] num_tiles: Extent3D, #[case] expected: u32) {
        let gob = gob_size(3, 3, 4);
        let block = Extent3D::new(0, 3, 0);
        assert_eq!(stride_alignment(num_tiles, block, gob, 3), expected);
    }

    #[test]
    fn gob_size_accounts_for_bytes_per_pixel_and_spacing() {
        assert_eq!(gob_size(3, 3, 4), Extent2D::new(7, 6));
        assert_eq!(gob_size(0, 0, 0), Extent2D::new(6, 3));
        assert_eq!(gob_size(4, 5, 1), Extent2D::new(3, 8));
    }
}
