//! Allocating wrappers around the swizzle drivers.
//!
//! Note: Using these wrappers zeroes the output before it is overwritten. If you convert many
//! surfaces, reuse a buffer sized from [`SurfaceDescriptor::layout`] with the in-place drivers
//! in `tiled_texture_swizzle` instead.

use crate::error::TiledTextureError;
use alloc::{vec, vec::Vec};
use tiled_texture_swizzle::{swizzle_image, swizzle_mip_chain, unswizzle_image, SurfaceDescriptor};

/// Unswizzles a block-linear mip chain into a newly allocated, tightly packed linear buffer.
///
/// # Errors
///
/// [`TiledTextureError::Swizzle`] if the surface is invalid or `source` is shorter than the
/// surface's block-linear size.
pub fn unswizzle_allocating(
    source: &[u8],
    surface: &SurfaceDescriptor,
) -> Result<Vec<u8>, TiledTextureError> {
    let layout = surface.layout()?;
    let mut output = vec![0u8; layout.linear_size()];
    unswizzle_image(source, &mut output, surface)?;
    Ok(output)
}

/// Swizzles the base level of a linear surface into a newly allocated block-linear buffer.
///
/// The output holds exactly the base level's block-linear size.
///
/// # Errors
///
/// [`TiledTextureError::Swizzle`] if the surface is invalid or `source` is shorter than the
/// base level's linear size.
pub fn swizzle_allocating(
    source: &[u8],
    surface: &SurfaceDescriptor,
) -> Result<Vec<u8>, TiledTextureError> {
    let layout = surface.layout()?;
    let mut output = vec![0u8; layout.base_level().block_linear_size];
    swizzle_image(source, &mut output, surface)?;
    Ok(output)
}

/// Swizzles a tightly packed linear mip chain into a newly allocated block-linear buffer.
///
/// # Errors
///
/// [`TiledTextureError::Swizzle`] if the surface is invalid or `source` is shorter than the
/// surface's linear size.
pub fn swizzle_mip_chain_allocating(
    source: &[u8],
    surface: &SurfaceDescriptor,
) -> Result<Vec<u8>, TiledTextureError> {
    let layout = surface.layout()?;
    let mut output = vec![0u8; layout.block_linear_size()];
    swizzle_mip_chain(source, &mut output, surface)?;
    Ok(output)
}
