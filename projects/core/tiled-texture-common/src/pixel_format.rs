//! The pixel format catalog.
//!
//! Every [`PixelFormat`] maps to a [`PixelFormatInfo`] describing how many bits one block
//! occupies and how many pixels a block covers. Uncompressed formats use 1x1 blocks.

use crate::{error::PixelFormatError, extent::Extent2D};
use derive_enum_all_values::AllValues;

/// Number of catalogued pixel formats. Valid identifiers are `0..MAX_PIXEL_FORMAT`.
pub const MAX_PIXEL_FORMAT: usize = 98;

/// A pixel format understood by the swizzle engine.
///
/// The discriminants are the raw identifiers used by the texture headers and the C API.
/// Variant names spell out the channel layout and numeric type.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
#[repr(u8)]
pub enum PixelFormat {
    A8B8G8R8Unorm = 0,
    A8B8G8R8Snorm = 1,
    A8B8G8R8Sint = 2,
    A8B8G8R8Uint = 3,
    R5G6B5Unorm = 4,
    B5G6R5Unorm = 5,
    A1R5G5B5Unorm = 6,
    A2B10G10R10Unorm = 7,
    A2B10G10R10Uint = 8,
    A2R10G10B10Unorm = 9,
    A1B5G5R5Unorm = 10,
    A5B5G5R1Unorm = 11,
    R8Unorm = 12,
    R8Snorm = 13,
    R8Sint = 14,
    R8Uint = 15,
    R16G16B16A16Float = 16,
    R16G16B16A16Unorm = 17,
    R16G16B16A16Snorm = 18,
    R16G16B16A16Sint = 19,
    R16G16B16A16Uint = 20,
    B10G11R11Float = 21,
    R32G32B32A32Uint = 22,
    Bc1RgbaUnorm = 23,
    Bc2Unorm = 24,
    Bc3Unorm = 25,
    Bc4Unorm = 26,
    Bc4Snorm = 27,
    Bc5Unorm = 28,
    Bc5Snorm = 29,
    Bc7Unorm = 30,
    Bc6hUfloat = 31,
    Bc6hSfloat = 32,
    Astc2d4x4Unorm = 33,
    B8G8R8A8Unorm = 34,
    R32G32B32A32Float = 35,
    R32G32B32A32Sint = 36,
    R32G32Float = 37,
    R32G32Sint = 38,
    R32Float = 39,
    R16Float = 40,
    R16Unorm = 41,
    R16Snorm = 42,
    R16Uint = 43,
    R16Sint = 44,
    R16G16Unorm = 45,
    R16G16Float = 46,
    R16G16Uint = 47,
    R16G16Sint = 48,
    R16G16Snorm = 49,
    R32G32B32Float = 50,
    A8B8G8R8Srgb = 51,
    R8G8Unorm = 52,
    R8G8Snorm = 53,
    R8G8Sint = 54,
    R8G8Uint = 55,
    R32G32Uint = 56,
    R16G16B16X16Float = 57,
    R32Uint = 58,
    R32Sint = 59,
    Astc2d8x8Unorm = 60,
    Astc2d8x5Unorm = 61,
    Astc2d5x4Unorm = 62,
    B8G8R8A8Srgb = 63,
    Bc1RgbaSrgb = 64,
    Bc2Srgb = 65,
    Bc3Srgb = 66,
    Bc7Srgb = 67,
    A4B4G4R4Unorm = 68,
    G4R4Unorm = 69,
    Astc2d4x4Srgb = 70,
    Astc2d8x8Srgb = 71,
    Astc2d8x5Srgb = 72,
    Astc2d5x4Srgb = 73,
    Astc2d5x5Unorm = 74,
    Astc2d5x5Srgb = 75,
    Astc2d10x8Unorm = 76,
    Astc2d10x8Srgb = 77,
    Astc2d6x6Unorm = 78,
    Astc2d6x6Srgb = 79,
    Astc2d10x6Unorm = 80,
    Astc2d10x5Unorm = 81,
    Astc2d10x5Srgb = 82,
    Astc2d10x10Unorm = 83,
    Astc2d10x10Srgb = 84,
    Astc2d12x12Unorm = 85,
    Astc2d12x12Srgb = 86,
    Astc2d8x6Unorm = 87,
    Astc2d8x6Srgb = 88,
    Astc2d6x5Unorm = 89,
    Astc2d6x5Srgb = 90,
    E5B9G9R9Float = 91,
    D32Float = 92,
    D16Unorm = 93,
    S8Uint = 94,
    D24UnormS8Uint = 95,
    S8UintD24Unorm = 96,
    D32FloatS8Uint = 97,
}

/// Static description of a [`PixelFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelFormatInfo {
    /// Size of one block in bits.
    pub bits_per_block: u8,
    /// Width of one block in pixels.
    pub block_width: u8,
    /// Height of one block in pixels.
    pub block_height: u8,
}

const fn info(bits_per_block: u8, block_width: u8, block_height: u8) -> PixelFormatInfo {
    PixelFormatInfo {
        bits_per_block,
        block_width,
        block_height,
    }
}

// Indexed by discriminant.
static FORMAT_TABLE: [PixelFormatInfo; MAX_PIXEL_FORMAT] = [
    info(32, 1, 1), // A8B8G8R8Unorm
    info(32, 1, 1), // A8B8G8R8Snorm
    info(32, 1, 1), // A8B8G8R8Sint
    info(32, 1, 1), // A8B8G8R8Uint
    info(16, 1, 1), // R5G6B5Unorm
    info(16, 1, 1), // B5G6R5Unorm
    info(16, 1, 1), // A1R5G5B5Unorm
    info(32, 1, 1), // A2B10G10R10Unorm
    info(32, 1, 1), // A2B10G10R10Uint
    info(32, 1, 1), // A2R10G10B10Unorm
    info(16, 1, 1), // A1B5G5R5Unorm
    info(16, 1, 1), // A5B5G5R1Unorm
    info(8, 1, 1), // R8Unorm
    info(8, 1, 1), // R8Snorm
    info(8, 1, 1), // R8Sint
    info(8, 1, 1), // R8Uint
    info(64, 1, 1), // R16G16B16A16Float
    info(64, 1, 1), // R16G16B16A16Unorm
    info(64, 1, 1), // R16G16B16A16Snorm
    info(64, 1, 1), // R16G16B16A16Sint
    info(64, 1, 1), // R16G16B16A16Uint
    info(32, 1, 1), // B10G11R11Float
    info(128, 1, 1), // R32G32B32A32Uint
    info(64, 4, 4), // Bc1RgbaUnorm
    info(128, 4, 4), // Bc2Unorm
    info(128, 4, 4), // Bc3Unorm
    info(64, 4, 4), // Bc4Unorm
    info(64, 4, 4), // Bc4Snorm
    info(128, 4, 4), // Bc5Unorm
    info(128, 4, 4), // Bc5Snorm
    info(128, 4, 4), // Bc7Unorm
    info(128, 4, 4), // Bc6hUfloat
    info(128, 4, 4), // Bc6hSfloat
    info(128, 4, 4), // Astc2d4x4Unorm
    info(32, 1, 1), // B8G8R8A8Unorm
    info(128, 1, 1), // R32G32B32A32Float
    info(128, 1, 1), // R32G32B32A32Sint
    info(64, 1, 1), // R32G32Float
    info(64, 1, 1), // R32G32Sint
    info(32, 1, 1), // R32Float
    info(16, 1, 1), // R16Float
    info(16, 1, 1), // R16Unorm
    info(16, 1, 1), // R16Snorm
    info(16, 1, 1), // R16Uint
    info(16, 1, 1), // R16Sint
    info(32, 1, 1), // R16G16Unorm
    info(32, 1, 1), // R16G16Float
    info(32, 1, 1), // R16G16Uint
    info(32, 1, 1), // R16G16Sint
    info(32, 1, 1), // R16G16Snorm
    info(96, 1, 1), // R32G32B32Float
    info(32, 1, 1), // A8B8G8R8Srgb
    info(16, 1, 1), // R8G8Unorm
    info(16, 1, 1), // R8G8Snorm
    info(16, 1, 1), // R8G8Sint
    info(16, 1, 1), // R8G8Uint
    info(64, 1, 1), // R32G32Uint
    info(64, 1, 1), // R16G16B16X16Float
    info(32, 1, 1), // R32Uint
    info(32, 1, 1), // R32Sint
    info(128, 8, 8), // Astc2d8x8Unorm
    info(128, 8, 5), // Astc2d8x5Unorm
    info(128, 5, 4), // Astc2d5x4Unorm
    info(32, 1, 1), // B8G8R8A8Srgb
    info(64, 4, 4), // Bc1RgbaSrgb
    info(128, 4, 4), // Bc2Srgb
    info(128, 4, 4), // Bc3Srgb
    info(128, 4, 4), // Bc7Srgb
    info(16, 1, 1), // A4B4G4R4Unorm
    info(8, 1, 1), // G4R4Unorm
    info(128, 4, 4), // Astc2d4x4Srgb
    info(128, 8, 8), // Astc2d8x8Srgb
    info(128, 8, 5), // Astc2d8x5Srgb
    info(128, 5, 4), // Astc2d5x4Srgb
    info(128, 5, 5), // Astc2d5x5Unorm
    info(128, 5, 5), // Astc2d5x5Srgb
    info(128, 10, 8), // Astc2d10x8Unorm
    info(128, 10, 8), // Astc2d10x8Srgb
    info(128, 6, 6), // Astc2d6x6Unorm
    info(128, 6, 6), // Astc2d6x6Srgb
    info(128, 10, 6), // Astc2d10x6Unorm
    info(128, 10, 5), // Astc2d10x5Unorm
    info(128, 10, 5), // Astc2d10x5Srgb
    info(128, 10, 10), // Astc2d10x10Unorm
    info(128, 10, 10), // Astc2d10x10Srgb
    info(128, 12, 12), // Astc2d12x12Unorm
    info(128, 12, 12), // Astc2d12x12Srgb
    info(128, 8, 6), // Astc2d8x6Unorm
    info(128, 8, 6), // Astc2d8x6Srgb
    info(128, 6, 5), // Astc2d6x5Unorm
    info(128, 6, 5), // Astc2d6x5Srgb
    info(32, 1, 1), // E5B9G9R9Float
    info(32, 1, 1), // D32Float
    info(16, 1, 1), // D16Unorm
    info(8, 1, 1), // S8Uint
    info(32, 1, 1), // D24UnormS8Uint
    info(32, 1, 1), // S8UintD24Unorm
    info(64, 1, 1), // D32FloatS8Uint
];

impl PixelFormat {
    /// Looks up the format with the given raw identifier.
    ///
    /// # Errors
    ///
    /// [`PixelFormatError::UnknownPixelFormat`] if `id >= MAX_PIXEL_FORMAT`.
    #[inline]
    pub fn from_id(id: u32) -> Result<Self, PixelFormatError> {
        Self::all_values()
            .get(id as usize)
            .copied()
            .ok_or(PixelFormatError::UnknownPixelFormat(id))
    }

    /// Raw identifier of this format.
    #[inline]
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// Catalog entry for this format.
    #[inline]
    pub fn info(self) -> &'static PixelFormatInfo {
        &FORMAT_TABLE[self as usize]
    }

    /// Bytes occupied by one block (one pixel for uncompressed formats).
    #[inline]
    pub fn bytes_per_block(self) -> u32 {
        u32::from(self.info().bits_per_block) / 8
    }

    /// Block width in pixels.
    #[inline]
    pub fn block_width(self) -> u32 {
        u32::from(self.info().block_width)
    }

    /// Block height in pixels.
    #[inline]
    pub fn block_height(self) -> u32 {
        u32::from(self.info().block_height)
    }

    /// Block dimensions in pixels; `1x1` for uncompressed formats.
    #[inline]
    pub fn block_size(self) -> Extent2D {
        Extent2D::new(self.block_width(), self.block_height())
    }

    /// Whether one block spans more than a single pixel.
    #[inline]
    pub fn is_block_compressed(self) -> bool {
        self.block_width() > 1 || self.block_height() > 1
    }
}

impl TryFrom<u32> for PixelFormat {
    type Error = PixelFormatError;

    #[inline]
    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::from_id(id)
    }
}

impl From<PixelFormat> for u32 {
    #[inline]
    fn from(format: PixelFormat) -> Self {
        format.id()
    }
}
