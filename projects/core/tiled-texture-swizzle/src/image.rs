//! Whole surface drivers.
//!
//! Each driver computes the [`SurfaceLayout`] once, then runs the engine per level with
//! independent cursors into the packed block-linear buffer and the packed linear buffer.

use crate::engine::{swizzle_level, SwizzleDirection};
use crate::error::SwizzleError;
use crate::surface::{LevelLayout, SurfaceDescriptor, SurfaceLayout};

/// Converts a block-linear mip chain in `source` to a linear mip chain in `destination`.
///
/// `source` must hold at least [`SurfaceLayout::block_linear_size`] bytes and `destination`
/// at least [`SurfaceLayout::linear_size`] bytes.
///
/// # Errors
///
/// Any [`SurfaceDescriptor::layout`] error, or [`SwizzleError::SourceTooSmall`] /
/// [`SwizzleError::DestinationTooSmall`] before anything is written.
pub fn unswizzle_image(
    source: &[u8],
    destination: &mut [u8],
    surface: &SurfaceDescriptor,
) -> Result<(), SwizzleError> {
    let layout = surface.layout()?;
    transfer_levels(
        SwizzleDirection::BlockLinearToLinear,
        source,
        destination,
        layout.levels(),
    )
}

/// Converts the base level of a linear surface to block-linear layout.
///
/// Only level 0 is processed, whatever the descriptor's mip count. `source` must hold the
/// base level's [`LevelLayout::linear_size`] and `destination` its
/// [`LevelLayout::block_linear_size`]. Use [`swizzle_mip_chain`] for every level.
pub fn swizzle_image(
    source: &[u8],
    destination: &mut [u8],
    surface: &SurfaceDescriptor,
) -> Result<(), SwizzleError> {
    let layout = surface.layout()?;
    transfer_levels(
        SwizzleDirection::LinearToBlockLinear,
        source,
        destination,
        core::slice::from_ref(layout.base_level()),
    )
}

/// Converts a linear mip chain to a packed block-linear mip chain; the inverse of
/// [`unswizzle_image`].
pub fn swizzle_mip_chain(
    source: &[u8],
    destination: &mut [u8],
    surface: &SurfaceDescriptor,
) -> Result<(), SwizzleError> {
    let layout = surface.layout()?;
    transfer_levels(
        SwizzleDirection::LinearToBlockLinear,
        source,
        destination,
        layout.levels(),
    )
}

/// Runs the engine over `layout`'s levels in `direction`.
pub fn transfer_layout(
    direction: SwizzleDirection,
    source: &[u8],
    destination: &mut [u8],
    layout: &SurfaceLayout,
) -> Result<(), SwizzleError> {
    transfer_levels(direction, source, destination, layout.levels())
}

fn transfer_levels(
    direction: SwizzleDirection,
    source: &[u8],
    destination: &mut [u8],
    levels: &[LevelLayout],
) -> Result<(), SwizzleError> {
    let (block_linear_end, linear_end) = levels.last().map_or((0, 0), |last| {
        (
            last.block_linear_offset + last.block_linear_size,
            last.linear_offset + last.linear_size,
        )
    });
    let (source_required, destination_required) = match direction {
        SwizzleDirection::LinearToBlockLinear => (linear_end, block_linear_end),
        SwizzleDirection::BlockLinearToLinear => (block_linear_end, linear_end),
    };
    if source.len() < source_required {
        log::warn!(
            "{direction:?}: source holds {} bytes, surface needs {source_required}",
            source.len()
        );
        return Err(SwizzleError::SourceTooSmall {
            required: source_required,
            actual: source.len(),
        });
    }
    if destination.len() < destination_required {
        log::warn!(
            "{direction:?}: destination holds {} bytes, surface needs {destination_required}",
            destination.len()
        );
        return Err(SwizzleError::DestinationTooSmall {
            required: destination_required,
            actual: destination.len(),
        });
    }

    for level in levels {
        let block_linear = level.block_linear_offset..level.block_linear_offset + level.block_linear_size;
        let linear = level.linear_offset..level.linear_offset + level.linear_size;
        let (source_range, destination_range) = match direction {
            SwizzleDirection::LinearToBlockLinear => (linear, block_linear),
            SwizzleDirection::BlockLinearToLinear => (block_linear, linear),
        };

        // Ranges were checked against the buffer lengths above.
        let level_source = source
            .get(source_range)
            .ok_or(SwizzleError::SourceTooSmall {
                required: source_required,
                actual: source.len(),
            })?;
        let destination_len = destination.len();
        let level_destination = destination
            .get_mut(destination_range)
            .ok_or(SwizzleError::DestinationTooSmall {
                required: destination_required,
                actual: destination_len,
            })?;

        swizzle_level(direction, level_source, level_destination, &level.params)?;
    }

    Ok(())
}
