//! TEX header layout.

/// Size of the TEX header; the payload starts here.
pub const TEX_HEADER_SIZE: usize = 0x80;

pub(crate) const MAGIC_LEN: usize = 8;
pub(crate) const FORMAT_CODE_OFFSET: usize = 0x14;
pub(crate) const WIDTH_OFFSET: usize = 0x18;
pub(crate) const HEIGHT_OFFSET: usize = 0x1C;
pub(crate) const MIP_COUNT_OFFSET: usize = 0x25;
pub(crate) const DECOMPRESSED_SIZE_OFFSET: usize = 0x2C;
pub(crate) const COMPRESSED_SIZE_OFFSET: usize = 0x30;
pub(crate) const BLOCK_HEIGHT_OFFSET: usize = 0x38;
pub(crate) const TILE_WIDTH_SPACING_OFFSET: usize = 0x39;
