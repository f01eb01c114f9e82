//! One-shot extraction of TEX files.

use crate::builder::SurfaceBuilder;
use crate::error::TiledTextureError;
use alloc::borrow::Cow;
use alloc::{vec, vec::Vec};
use tiled_texture_common::PixelFormat;
use tiled_texture_swizzle::{unswizzle_image, SurfaceDescriptor, SurfaceLayout};
use tiled_texture_tex::{parse_texture_header, texture_payload, TextureHeader};
use tiled_texture_ykcmp::{decompress_allocating, likely_ykcmp};

/// A TEX file unpacked into linear pixel data.
#[derive(Debug, Clone)]
pub struct ExtractedTexture {
    /// The parsed file header.
    pub header: TextureHeader,
    /// The surface the header describes.
    pub surface: SurfaceDescriptor,
    /// Where each mip level sits in [`ExtractedTexture::data`].
    pub layout: SurfaceLayout,
    /// Tightly packed linear mip chain.
    pub data: Vec<u8>,
}

/// Parses a TEX file, decompresses its payload if it is a YKCMP container and unswizzles
/// every mip level into a newly allocated linear buffer.
///
/// The header's format code is title specific, so the pixel format is supplied by the caller.
///
/// # Errors
///
/// - [`TiledTextureError::UnknownTextureHeader`] if `data` is too short for a header.
/// - [`TiledTextureError::Decompress`] if the container cannot be decompressed.
/// - [`TiledTextureError::Swizzle`] if the header describes an invalid surface or the payload
///   is smaller than the surface.
pub fn extract_texture(
    data: &[u8],
    format: PixelFormat,
) -> Result<ExtractedTexture, TiledTextureError> {
    let header = parse_texture_header(data)
        .ok_or(TiledTextureError::UnknownTextureHeader { len: data.len() })?;
    let surface = SurfaceBuilder::from_texture_header(&header, format).build()?;
    let layout = surface.layout()?;
    log::debug!(
        "TEX {}x{} {:?}, {} levels, {} block-linear bytes",
        header.width,
        header.height,
        format,
        header.mip_count,
        layout.block_linear_size()
    );

    let payload = texture_payload(data);
    let tiled: Cow<[u8]> = if likely_ykcmp(payload) {
        Cow::Owned(decompress_allocating(payload)?)
    } else {
        Cow::Borrowed(payload)
    };

    let mut linear = vec![0u8; layout.linear_size()];
    unswizzle_image(&tiled, &mut linear, &surface)?;

    Ok(ExtractedTexture {
        header,
        surface,
        layout,
        data: linear,
    })
}
