#![no_main]

// Arbitrary containers must never panic the decompressor, whatever their header claims.

use libfuzzer_sys::{arbitrary, fuzz_target};
use tiled_texture_ykcmp::{decompress, HEADER_SIZE};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Container {
    pub compression_type: u8,
    pub compressed_size: u16,
    pub decompressed_size: u16,
    pub payload: Vec<u8>,
}

fuzz_target!(|container: Container| {
    // Keep the type within the interesting range so most inputs reach a decoder.
    let compression_type = match container.compression_type % 4 {
        0 => 4,
        1 => 8,
        2 => 9,
        _ => container.compression_type as u32,
    };

    let mut input = Vec::with_capacity(HEADER_SIZE + container.payload.len());
    input.extend_from_slice(b"YKCMP_V1");
    input.extend_from_slice(&compression_type.to_le_bytes());
    input.extend_from_slice(&(container.compressed_size as u32).to_le_bytes());
    input.extend_from_slice(&(container.decompressed_size as u32).to_le_bytes());
    input.extend_from_slice(&container.payload);

    let mut output = vec![0u8; container.decompressed_size as usize];
    let _ = decompress(&input, &mut output);

    // A mismatched output must be rejected.
    let mut larger = vec![0u8; container.decompressed_size as usize + 1];
    assert!(decompress(&input, &mut larger).is_err());
});
