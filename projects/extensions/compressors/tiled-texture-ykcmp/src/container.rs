use derive_enum_all_values::AllValues;
use endian_writer::{EndianReader, LittleEndianReader};

/// Size of the container header; the payload starts here.
pub const HEADER_SIZE: usize = 0x14;

/// Magic found at the start of well-formed containers.
pub const YKCMP_MAGIC: [u8; 8] = *b"YKCMP_V1";

pub(crate) const COMPRESSION_TYPE_OFFSET: usize = 0x08;
pub(crate) const COMPRESSED_SIZE_OFFSET: usize = 0x0C;
pub(crate) const DECOMPRESSED_SIZE_OFFSET: usize = 0x10;

/// Compression schemes understood by [`decompress`](crate::decompress).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
#[repr(u32)]
pub enum CompressionType {
    /// Byte oriented literal/back-reference scheme.
    BackReference = 4,
    /// Raw LZ4 block.
    Lz4 = 8,
    /// Raw LZ4 block, alternate identifier.
    Lz4Alternate = 9,
}

impl CompressionType {
    /// Maps a raw compression type identifier, returning [`None`] for unsupported values.
    pub const fn from_raw(value: u32) -> Option<Self> {
        match value {
            4 => Some(CompressionType::BackReference),
            8 => Some(CompressionType::Lz4),
            9 => Some(CompressionType::Lz4Alternate),
            _ => None,
        }
    }
}

/// The fixed 20-byte header at the front of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    /// Magic bytes. Not validated by [`parse_container_header`].
    pub magic: [u8; 8],
    /// Raw compression type identifier.
    pub compression_type: u32,
    /// Declared size of the compressed payload.
    pub compressed_size: u32,
    /// Declared size of the decompressed data.
    pub decompressed_size: u32,
}

impl ContainerHeader {
    /// Returns the [`CompressionType`], or [`None`] if the identifier is unsupported.
    pub const fn compression(&self) -> Option<CompressionType> {
        CompressionType::from_raw(self.compression_type)
    }

    /// Exclusive end of the payload within an input of `input_len` bytes.
    pub fn payload_end(&self, input_len: usize) -> usize {
        HEADER_SIZE
            .saturating_add(self.compressed_size as usize)
            .min(input_len)
    }
}

/// Checks whether `data` starts with the container magic.
#[inline]
pub fn likely_ykcmp(data: &[u8]) -> bool {
    data.len() >= HEADER_SIZE && data[..YKCMP_MAGIC.len()] == YKCMP_MAGIC
}

/// Parses the container header without validating the magic.
///
/// # Return
///
/// `None` if `data` is shorter than [`HEADER_SIZE`].
#[inline]
pub fn parse_container_header(data: &[u8]) -> Option<ContainerHeader> {
    if data.len() < HEADER_SIZE {
        return None;
    }

    let mut magic = [0u8; 8];
    magic.copy_from_slice(&data[..8]);

    // SAFETY: We checked data.len() >= HEADER_SIZE (20), so every field up to offset 0x10 + 4 is in bounds
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let (compression_type, compressed_size, decompressed_size) = unsafe {
        (
            reader.read_u32_at(COMPRESSION_TYPE_OFFSET as isize),
            reader.read_u32_at(COMPRESSED_SIZE_OFFSET as isize),
            reader.read_u32_at(DECOMPRESSED_SIZE_OFFSET as isize),
        )
    };

    Some(ContainerHeader {
        magic,
        compression_type,
        compressed_size,
        decompressed_size,
    })
}
