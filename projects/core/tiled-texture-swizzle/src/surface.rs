//! Surface description and the precomputed layout of its mip chain.

use crate::engine::SwizzleParams;
use crate::error::SwizzleError;
use crate::geometry::{
    adjust_mip_block_size, adjust_mip_extent, align_layer_size, calculate_level_bytes,
    calculate_level_sizes, gob_size, num_blocks, stride_alignment, tile_counts, LevelInfo,
    MAX_MIP_LEVELS,
};
use tiled_texture_common::{Extent3D, PixelFormat};

/// Largest accepted base width, height or depth.
pub const MAX_DIMENSION: u32 = 1 << 16;

/// Largest accepted block height exponent (32 GOBs).
pub const MAX_BLOCK_HEIGHT_LOG2: u32 = 5;

/// Largest accepted tile width spacing exponent. Keeps every GOB shift within 31 bits.
pub const MAX_TILE_WIDTH_SPACING_LOG2: u32 = 17;

/// Everything needed to swizzle or unswizzle one surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceDescriptor {
    /// Pixel format of the surface.
    pub format: PixelFormat,
    /// Base width in pixels.
    pub width: u32,
    /// Base height in pixels.
    pub height: u32,
    /// Base depth in slices. `1` for 2D surfaces.
    pub depth: u32,
    /// Number of mip levels, including the base level.
    pub mip_count: u32,
    /// Tile width spacing exponent.
    pub tile_width_spacing_log2: u32,
    /// Requested GOBs per block vertically, as an exponent.
    pub block_height_log2: u32,
}

impl SurfaceDescriptor {
    /// Builds a descriptor from raw values, as received over the C API.
    ///
    /// # Errors
    ///
    /// [`SwizzleError::UnknownPixelFormat`] for an unknown `format_id`, or any error of
    /// [`SurfaceDescriptor::validate`].
    #[allow(clippy::too_many_arguments)]
    pub fn from_raw(
        format_id: u32,
        width: u32,
        height: u32,
        depth: u32,
        mip_count: u32,
        tile_width_spacing_log2: u32,
        block_height_log2: u32,
    ) -> Result<Self, SwizzleError> {
        let surface = Self {
            format: PixelFormat::from_id(format_id)?,
            width,
            height,
            depth,
            mip_count,
            tile_width_spacing_log2,
            block_height_log2,
        };
        surface.validate()?;
        Ok(surface)
    }

    /// Base size in pixels.
    #[inline]
    pub fn extent(&self) -> Extent3D {
        Extent3D::new(self.width, self.height, self.depth)
    }

    /// Mip chain description consumed by the [`geometry`](crate::geometry) functions.
    #[inline]
    pub fn level_info(&self) -> LevelInfo {
        LevelInfo::new(
            self.format,
            self.extent(),
            Extent3D::new(0, self.block_height_log2, 0),
            self.tile_width_spacing_log2,
        )
    }

    /// Checks the descriptor against the limits the geometry relies on.
    pub fn validate(&self) -> Result<(), SwizzleError> {
        let bytes_per_block = self.format.bytes_per_block();
        if !bytes_per_block.is_power_of_two() {
            return Err(SwizzleError::UnsupportedBytesPerBlock {
                format: self.format,
                bytes_per_block,
            });
        }
        if self.width == 0 || self.height == 0 || self.depth == 0 {
            return Err(SwizzleError::ZeroDimension {
                width: self.width,
                height: self.height,
                depth: self.depth,
            });
        }
        if let Some(&dimension) = [self.width, self.height, self.depth]
            .iter()
            .find(|&&dimension| dimension > MAX_DIMENSION)
        {
            return Err(SwizzleError::DimensionTooLarge(dimension));
        }
        if self.mip_count == 0 || self.mip_count > MAX_MIP_LEVELS {
            return Err(SwizzleError::InvalidMipCount(self.mip_count));
        }
        if self.block_height_log2 > MAX_BLOCK_HEIGHT_LOG2 {
            return Err(SwizzleError::BlockHeightTooLarge(self.block_height_log2));
        }
        if self.tile_width_spacing_log2 > MAX_TILE_WIDTH_SPACING_LOG2 {
            return Err(SwizzleError::TileWidthSpacingTooLarge(
                self.tile_width_spacing_log2,
            ));
        }
        Ok(())
    }

    /// Validates the descriptor and derives the layout of every mip level.
    pub fn layout(&self) -> Result<SurfaceLayout, SwizzleError> {
        self.validate()?;

        let info = self.level_info();
        let level_sizes = calculate_level_sizes(&info, self.mip_count)?;
        let layer_size = calculate_level_bytes(&level_sizes, self.mip_count);
        let layer_stride = align_layer_size(
            layer_size,
            info.size,
            info.block,
            info.tile_size.height,
            info.tile_width_spacing,
        );
        let gob = gob_size(info.bpp_log2, info.block.height, info.tile_width_spacing);
        let bytes_per_pixel = 1u32 << info.bpp_log2;

        let mut levels = [LevelLayout::default(); MAX_MIP_LEVELS as usize];
        let mut block_linear_offset = 0usize;
        let mut linear_offset = 0u64;
        for (level, (slot, &block_linear_size)) in
            (0..self.mip_count).zip(levels.iter_mut().zip(level_sizes.iter()))
        {
            let extent = adjust_mip_extent(info.size, level);
            let num_tiles = tile_counts(extent, info.tile_size);
            let block = adjust_mip_block_size(num_tiles, info.block, level);
            let linear_size = num_blocks(extent, info.tile_size) << info.bpp_log2;

            *slot = LevelLayout {
                level,
                extent,
                params: SwizzleParams {
                    bytes_per_pixel,
                    width: num_tiles.width,
                    height: num_tiles.height,
                    depth: num_tiles.depth,
                    block_height_log2: block.height,
                    block_depth_log2: block.depth,
                    stride_alignment_log2: stride_alignment(num_tiles, block, gob, info.bpp_log2),
                },
                block_linear_offset,
                block_linear_size: block_linear_size as usize,
                linear_offset: linear_offset as usize,
                linear_size: linear_size as usize,
            };

            log::trace!(
                "level {level}: {}x{}x{} tiles, block height 2^{}, {} bytes tiled at {block_linear_offset}, {linear_size} bytes linear at {linear_offset}",
                num_tiles.width,
                num_tiles.height,
                num_tiles.depth,
                block.height,
                block_linear_size,
            );

            block_linear_offset += block_linear_size as usize;
            linear_offset += linear_size;
        }

        let layout = SurfaceLayout {
            levels,
            mip_count: self.mip_count,
            layer_size: to_u32(layer_size)?,
            layer_stride: to_u32(layer_stride)?,
            linear_size: to_u32(linear_offset)?,
        };
        log::debug!(
            "{:?} {}x{}x{} with {} levels: {} bytes tiled (stride {}), {} bytes linear",
            self.format,
            self.width,
            self.height,
            self.depth,
            self.mip_count,
            layout.layer_size,
            layout.layer_stride,
            layout.linear_size,
        );
        Ok(layout)
    }
}

#[inline]
fn to_u32(bytes: u64) -> Result<u32, SwizzleError> {
    u32::try_from(bytes).map_err(|_| SwizzleError::SurfaceTooLarge(bytes))
}

/// Placement of one mip level in both layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LevelLayout {
    /// Mip level index.
    pub level: u32,
    /// Level size in pixels.
    pub extent: Extent3D,
    /// Engine parameters for this level.
    pub params: SwizzleParams,
    /// Offset of the level in the packed block-linear buffer.
    pub block_linear_offset: usize,
    /// Bytes reserved for the level in the packed block-linear buffer.
    pub block_linear_size: usize,
    /// Offset of the level in the tightly packed linear buffer.
    pub linear_offset: usize,
    /// Bytes of the level in the tightly packed linear buffer.
    pub linear_size: usize,
}

/// Precomputed layout of a surface's mip chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceLayout {
    levels: [LevelLayout; MAX_MIP_LEVELS as usize],
    mip_count: u32,
    layer_size: u32,
    layer_stride: u32,
    linear_size: u32,
}

impl SurfaceLayout {
    /// Number of levels in the chain.
    #[inline]
    pub fn mip_count(&self) -> u32 {
        self.mip_count
    }

    /// Every level, base level first.
    #[inline]
    pub fn levels(&self) -> &[LevelLayout] {
        &self.levels[..self.mip_count as usize]
    }

    /// One level, or `None` past the end of the chain.
    #[inline]
    pub fn level(&self, level: u32) -> Option<&LevelLayout> {
        self.levels().get(level as usize)
    }

    /// The base level.
    #[inline]
    pub fn base_level(&self) -> &LevelLayout {
        &self.levels[0]
    }

    /// Bytes of the whole chain in block-linear layout.
    #[inline]
    pub fn block_linear_size(&self) -> usize {
        self.layer_size as usize
    }

    /// Bytes of the whole chain in linear layout.
    #[inline]
    pub fn linear_size(&self) -> usize {
        self.linear_size as usize
    }

    /// Sum of the block-linear level sizes.
    #[inline]
    pub fn layer_size(&self) -> u32 {
        self.layer_size
    }

    /// Layer size rounded up to its GOB block alignment; the distance between array layers.
    #[inline]
    pub fn layer_stride(&self) -> u32 {
        self.layer_stride
    }
}
