use crate::constants::*;
use endian_writer::{EndianReader, LittleEndianReader};

/// Fields of a TEX header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureHeader {
    /// Magic bytes, not validated.
    pub magic: [u8; MAGIC_LEN],
    /// Title specific pixel format code.
    pub format_code: u8,
    /// Width of the base level in pixels.
    pub width: u32,
    /// Height of the base level in pixels.
    pub height: u32,
    /// Number of mip levels.
    pub mip_count: u8,
    /// Size of the block-linear surface once decompressed.
    pub decompressed_size: u32,
    /// Size of the payload as stored.
    pub compressed_size: u32,
    /// Log2 of the GOB block height.
    pub block_height_log2: u8,
    /// Log2 of the tile width spacing.
    pub tile_width_spacing_log2: u8,
}

/// Parses a TEX header from the start of `data`.
///
/// # Return
///
/// `None` if `data` is shorter than [`TEX_HEADER_SIZE`].
#[inline]
pub fn parse_texture_header(data: &[u8]) -> Option<TextureHeader> {
    if data.len() < TEX_HEADER_SIZE {
        return None;
    }

    let mut magic = [0u8; MAGIC_LEN];
    magic.copy_from_slice(&data[..MAGIC_LEN]);

    // SAFETY: We checked data.len() >= TEX_HEADER_SIZE (0x80); the last u32 read ends at 0x34
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let (width, height, decompressed_size, compressed_size) = unsafe {
        (
            reader.read_u32_at(WIDTH_OFFSET as isize),
            reader.read_u32_at(HEIGHT_OFFSET as isize),
            reader.read_u32_at(DECOMPRESSED_SIZE_OFFSET as isize),
            reader.read_u32_at(COMPRESSED_SIZE_OFFSET as isize),
        )
    };

    Some(TextureHeader {
        magic,
        format_code: data[FORMAT_CODE_OFFSET],
        width,
        height,
        mip_count: data[MIP_COUNT_OFFSET],
        decompressed_size,
        compressed_size,
        block_height_log2: data[BLOCK_HEIGHT_OFFSET],
        tile_width_spacing_log2: data[TILE_WIDTH_SPACING_OFFSET],
    })
}

/// Returns everything after the TEX header, or an empty slice if there is no header.
#[inline]
pub fn texture_payload(data: &[u8]) -> &[u8] {
    data.get(TEX_HEADER_SIZE..).unwrap_or(&[])
}
