//! C API for the swizzle entry points.
//!
//! Surfaces are passed as raw parameters; the format is the raw [`PixelFormat`] identifier.
//!
//! [`PixelFormat`]: tiled_texture_common::PixelFormat

use crate::error::SwizzleError;
use crate::image::{swizzle_image, unswizzle_image};
use crate::surface::SurfaceDescriptor;
use core::slice;
use tiled_texture_common::ErrorCategory;

/// C-compatible error codes for swizzle operations.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiledTextureErrorCode {
    /// Operation succeeded
    Success = 0,
    /// Null pointer provided for the source buffer
    NullSourcePointer = 1,
    /// Null pointer provided for the destination buffer
    NullDestinationPointer = 2,
    /// Null pointer provided for an output parameter
    NullOutputPointer = 3,
    /// Unknown pixel format, or a format the engine cannot swizzle
    UnsupportedFormat = 4,
    /// Surface parameters outside the supported limits
    InvalidSurface = 5,
    /// A buffer is smaller than the surface requires
    BufferTooSmall = 6,
    /// An element offset escaped its buffer
    OutOfBounds = 7,
}

/// C-compatible result of a swizzle operation.
#[repr(C)]
pub struct TiledTextureResult {
    /// Error code (0 = success, non-zero = error)
    pub error_code: TiledTextureErrorCode,
}

impl TiledTextureResult {
    /// Create a success result
    pub const fn success() -> Self {
        Self {
            error_code: TiledTextureErrorCode::Success,
        }
    }

    /// Create an error result from an error code
    pub const fn from_error_code(error_code: TiledTextureErrorCode) -> Self {
        Self { error_code }
    }

    /// Check if the result is successful
    pub fn is_success(&self) -> bool {
        matches!(self.error_code, TiledTextureErrorCode::Success)
    }
}

impl From<SwizzleError> for TiledTextureResult {
    fn from(error: SwizzleError) -> Self {
        let error_code = match error.category() {
            ErrorCategory::UnsupportedFormat => TiledTextureErrorCode::UnsupportedFormat,
            ErrorCategory::InvalidArgument => TiledTextureErrorCode::InvalidSurface,
            ErrorCategory::SizeMismatch => TiledTextureErrorCode::BufferTooSmall,
            ErrorCategory::MalformedStream => TiledTextureErrorCode::OutOfBounds,
        };
        Self::from_error_code(error_code)
    }
}

impl From<Result<(), SwizzleError>> for TiledTextureResult {
    fn from(result: Result<(), SwizzleError>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(error) => error.into(),
        }
    }
}

/// Unswizzles a block-linear mip chain into a linear buffer.
///
/// # Safety
///
/// - `src` must be valid for reads of `src_len` bytes
/// - `dst` must be valid for writes of `dst_len` bytes
/// - The two buffers must not overlap
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn tiled_texture_unswizzle(
    src: *const u8,
    src_len: usize,
    dst: *mut u8,
    dst_len: usize,
    width: u32,
    height: u32,
    depth: u32,
    mip_count: u32,
    format: u32,
    tile_width_spacing: u32,
    block_height: u32,
) -> TiledTextureResult {
    if src.is_null() {
        return TiledTextureResult::from_error_code(TiledTextureErrorCode::NullSourcePointer);
    }
    if dst.is_null() {
        return TiledTextureResult::from_error_code(TiledTextureErrorCode::NullDestinationPointer);
    }

    let surface = match SurfaceDescriptor::from_raw(
        format,
        width,
        height,
        depth,
        mip_count,
        tile_width_spacing,
        block_height,
    ) {
        Ok(surface) => surface,
        Err(error) => return error.into(),
    };

    let source = unsafe { slice::from_raw_parts(src, src_len) };
    let destination = unsafe { slice::from_raw_parts_mut(dst, dst_len) };
    unswizzle_image(source, destination, &surface).into()
}

/// Swizzles the base level of a linear surface into a block-linear buffer.
///
/// # Safety
///
/// - `src` must be valid for reads of `src_len` bytes
/// - `dst` must be valid for writes of `dst_len` bytes
/// - The two buffers must not overlap
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn tiled_texture_swizzle(
    src: *const u8,
    src_len: usize,
    dst: *mut u8,
    dst_len: usize,
    width: u32,
    height: u32,
    depth: u32,
    mip_count: u32,
    format: u32,
    tile_width_spacing: u32,
    block_height: u32,
) -> TiledTextureResult {
    if src.is_null() {
        return TiledTextureResult::from_error_code(TiledTextureErrorCode::NullSourcePointer);
    }
    if dst.is_null() {
        return TiledTextureResult::from_error_code(TiledTextureErrorCode::NullDestinationPointer);
    }

    let surface = match SurfaceDescriptor::from_raw(
        format,
        width,
        height,
        depth,
        mip_count,
        tile_width_spacing,
        block_height,
    ) {
        Ok(surface) => surface,
        Err(error) => return error.into(),
    };

    let source = unsafe { slice::from_raw_parts(src, src_len) };
    let destination = unsafe { slice::from_raw_parts_mut(dst, dst_len) };
    swizzle_image(source, destination, &surface).into()
}

/// Reports the buffer sizes of a whole mip chain.
///
/// On success `block_linear_size` receives the packed block-linear size and `linear_size`
/// the packed linear size.
///
/// # Safety
///
/// `block_linear_size` and `linear_size` must be valid for writes.
#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub unsafe extern "C" fn tiled_texture_layout_sizes(
    width: u32,
    height: u32,
    depth: u32,
    mip_count: u32,
    format: u32,
    tile_width_spacing: u32,
    block_height: u32,
    block_linear_size: *mut usize,
    linear_size: *mut usize,
) -> TiledTextureResult {
    if block_linear_size.is_null() || linear_size.is_null() {
        return TiledTextureResult::from_error_code(TiledTextureErrorCode::NullOutputPointer);
    }

    let layout = match SurfaceDescriptor::from_raw(
        format,
        width,
        height,
        depth,
        mip_count,
        tile_width_spacing,
        block_height,
    )
    .and_then(|surface| surface.layout())
    {
        Ok(layout) => layout,
        Err(error) => return error.into(),
    };

    unsafe {
        *block_linear_size = layout.block_linear_size();
        *linear_size = layout.linear_size();
    }
    TiledTextureResult::success()
}
