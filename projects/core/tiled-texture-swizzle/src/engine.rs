//! Single level byte permutation between linear and block-linear layouts.

use crate::error::SwizzleError;
use crate::gob::{GOB_SIZE_SHIFT, GOB_SIZE_X, GOB_SIZE_X_SHIFT, GOB_SIZE_Y, GOB_SIZE_Y_SHIFT, SWIZZLE_TABLE};
use derive_enum_all_values::AllValues;
use tiled_texture_common::math::{align_up_log2, div_ceil_log2};

/// Which way [`swizzle_level`] moves bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum SwizzleDirection {
    /// Read linear rows, write GOBs.
    LinearToBlockLinear,
    /// Read GOBs, write linear rows.
    BlockLinearToLinear,
}

/// Shape of one level as seen by the engine.
///
/// All sizes are in elements (format blocks), not pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SwizzleParams {
    /// Bytes copied per element. Must be a power of two no larger than 16.
    pub bytes_per_pixel: u32,
    /// Elements per row.
    pub width: u32,
    /// Rows per slice.
    pub height: u32,
    /// Slices.
    pub depth: u32,
    /// GOBs per block vertically, as an exponent.
    pub block_height_log2: u32,
    /// GOBs per block in depth, as an exponent.
    pub block_depth_log2: u32,
    /// Row stride alignment in elements, as an exponent.
    pub stride_alignment_log2: u32,
}

impl SwizzleParams {
    /// Bytes per linear row.
    #[inline]
    pub fn pitch(&self) -> usize {
        self.width as usize * self.bytes_per_pixel as usize
    }

    /// Bytes occupied by the level in linear layout.
    #[inline]
    pub fn linear_size(&self) -> usize {
        self.pitch() * self.height as usize * self.depth as usize
    }

    /// Bytes of one GOB block row (all GOB columns of one block).
    #[inline]
    pub fn block_size(&self) -> usize {
        let stride = align_up_log2(self.width, self.stride_alignment_log2) as usize
            * self.bytes_per_pixel as usize;
        let gobs_in_x = stride.div_ceil(GOB_SIZE_X as usize);
        gobs_in_x << (GOB_SIZE_SHIFT + self.block_height_log2 + self.block_depth_log2)
    }

    /// Bytes of one group of `2^block_depth` slices.
    #[inline]
    pub fn slice_size(&self) -> usize {
        div_ceil_log2(self.height, self.block_height_log2 + GOB_SIZE_Y_SHIFT) as usize
            * self.block_size()
    }

    /// Bytes spanned by the level in block-linear layout.
    #[inline]
    pub fn block_linear_size(&self) -> usize {
        div_ceil_log2(self.depth, self.block_depth_log2) as usize * self.slice_size()
    }
}

/// Moves every element of one level between `source` and `destination`.
///
/// With [`SwizzleDirection::LinearToBlockLinear`] the source is linear and the destination
/// block-linear; [`SwizzleDirection::BlockLinearToLinear`] swaps the roles. Padding bytes of
/// the block-linear side are neither read nor written.
///
/// # Errors
///
/// - [`SwizzleError::SourceTooSmall`] / [`SwizzleError::DestinationTooSmall`] if a buffer
///   is smaller than its side of the level. Nothing is written in that case.
/// - [`SwizzleError::OutOfBounds`] if an element offset escapes its buffer.
pub fn swizzle_level(
    direction: SwizzleDirection,
    source: &[u8],
    destination: &mut [u8],
    params: &SwizzleParams,
) -> Result<(), SwizzleError> {
    let (source_required, destination_required) = match direction {
        SwizzleDirection::LinearToBlockLinear => (params.linear_size(), params.block_linear_size()),
        SwizzleDirection::BlockLinearToLinear => (params.block_linear_size(), params.linear_size()),
    };
    if source.len() < source_required {
        return Err(SwizzleError::SourceTooSmall {
            required: source_required,
            actual: source.len(),
        });
    }
    if destination.len() < destination_required {
        return Err(SwizzleError::DestinationTooSmall {
            required: destination_required,
            actual: destination.len(),
        });
    }

    let bytes_per_pixel = params.bytes_per_pixel as usize;
    let width = params.width as usize;
    let height = params.height as usize;
    let block_height = params.block_height_log2;
    let block_depth = params.block_depth_log2;

    let pitch = params.pitch();
    let block_size = params.block_size();
    let slice_size = params.slice_size();

    let block_height_mask = (1usize << block_height) - 1;
    let block_depth_mask = (1usize << block_depth) - 1;
    let x_shift = GOB_SIZE_SHIFT + block_height + block_depth;

    for slice in 0..params.depth as usize {
        let offset_z = (slice >> block_depth) * slice_size
            + ((slice & block_depth_mask) << (GOB_SIZE_SHIFT + block_height));
        for line in 0..height {
            let table = &SWIZZLE_TABLE[line % GOB_SIZE_Y as usize];
            let block_y = line >> GOB_SIZE_Y_SHIFT;
            let offset_y = (block_y >> block_height) * block_size
                + ((block_y & block_height_mask) << GOB_SIZE_SHIFT);
            let row_start = slice * pitch * height + line * pitch;

            for column in 0..width {
                let x = column * bytes_per_pixel;
                let offset_x = (x >> GOB_SIZE_X_SHIFT) << x_shift;
                let swizzled = offset_z + offset_y + offset_x + table[x % GOB_SIZE_X as usize] as usize;
                let linear = row_start + x;

                let (from, to) = match direction {
                    SwizzleDirection::LinearToBlockLinear => (linear, swizzled),
                    SwizzleDirection::BlockLinearToLinear => (swizzled, linear),
                };
                copy_element(source, destination, from, to, bytes_per_pixel)?;
            }
        }
    }

    Ok(())
}

#[inline(always)]
fn copy_element(
    source: &[u8],
    destination: &mut [u8],
    from: usize,
    to: usize,
    len: usize,
) -> Result<(), SwizzleError> {
    let source_len = source.len();
    let destination_len = destination.len();
    let input = source
        .get(from..from + len)
        .ok_or(SwizzleError::OutOfBounds {
            offset: from,
            len,
            buffer_len: source_len,
        })?;
    let output = destination
        .get_mut(to..to + len)
        .ok_or(SwizzleError::OutOfBounds {
            offset: to,
            len,
            buffer_len: destination_len,
        })?;
    output.copy_from_slice(input);
    Ok(())
}
