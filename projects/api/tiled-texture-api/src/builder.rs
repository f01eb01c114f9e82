//! Builder pattern for [`SurfaceDescriptor`].

use crate::error::TiledTextureError;
use tiled_texture_common::PixelFormat;
use tiled_texture_swizzle::SurfaceDescriptor;
use tiled_texture_tex::TextureHeader;

/// Default GOB block height exponent (16 GOBs).
pub const DEFAULT_BLOCK_HEIGHT_LOG2: u32 = 4;

/// Builder for a validated [`SurfaceDescriptor`].
///
/// Unset fields default to a single 2D level with no tile width spacing and a block
/// height of 16 GOBs.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceBuilder {
    format: PixelFormat,
    width: u32,
    height: u32,
    depth: Option<u32>,
    mip_count: Option<u32>,
    tile_width_spacing_log2: Option<u32>,
    block_height_log2: Option<u32>,
}

impl SurfaceBuilder {
    /// Create a builder for a `width` x `height` surface of `format`.
    pub fn new(format: PixelFormat, width: u32, height: u32) -> Self {
        Self {
            format,
            width,
            height,
            depth: None,
            mip_count: None,
            tile_width_spacing_log2: None,
            block_height_log2: None,
        }
    }

    /// Create a builder from the fields of a TEX header.
    ///
    /// The header's format code is title specific, so the format is supplied separately.
    pub fn from_texture_header(header: &TextureHeader, format: PixelFormat) -> Self {
        Self::new(format, header.width, header.height)
            .mip_count(header.mip_count as u32)
            .tile_width_spacing_log2(header.tile_width_spacing_log2 as u32)
            .block_height_log2(header.block_height_log2 as u32)
    }

    /// Set the depth in slices.
    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Set the number of mip levels, including the base level.
    pub fn mip_count(mut self, mip_count: u32) -> Self {
        self.mip_count = Some(mip_count);
        self
    }

    /// Set the tile width spacing exponent.
    pub fn tile_width_spacing_log2(mut self, tile_width_spacing_log2: u32) -> Self {
        self.tile_width_spacing_log2 = Some(tile_width_spacing_log2);
        self
    }

    /// Set the requested block height, in GOBs, as an exponent.
    pub fn block_height_log2(mut self, block_height_log2: u32) -> Self {
        self.block_height_log2 = Some(block_height_log2);
        self
    }

    /// Build and validate the descriptor.
    ///
    /// # Errors
    ///
    /// [`TiledTextureError::Swizzle`] if the surface is outside the supported limits.
    pub fn build(self) -> Result<SurfaceDescriptor, TiledTextureError> {
        let surface = SurfaceDescriptor {
            format: self.format,
            width: self.width,
            height: self.height,
            depth: self.depth.unwrap_or(1),
            mip_count: self.mip_count.unwrap_or(1),
            tile_width_spacing_log2: self.tile_width_spacing_log2.unwrap_or(0),
            block_height_log2: self.block_height_log2.unwrap_or(DEFAULT_BLOCK_HEIGHT_LOG2),
        };
        surface.validate()?;
        Ok(surface)
    }
}
