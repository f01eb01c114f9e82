//! Integration tests for the tiled texture API

use tiled_texture_api::{
    decompress_allocating, extract_texture, likely_ykcmp, parse_texture_header,
    swizzle_mip_chain_allocating, unswizzle_allocating, ErrorCategory, PixelFormat,
    SurfaceBuilder, TiledTextureError,
};

fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|index| (index % 251) as u8).collect()
}

/// Encodes `data` as a back-reference stream, replacing 4 byte runs that repeat the bytes
/// 8 positions earlier with references.
fn encode_back_reference(data: &[u8]) -> Vec<u8> {
    let mut stream = Vec::new();
    let mut literal_start = 0;
    let mut position = 0;

    let flush = |stream: &mut Vec<u8>, literal: &[u8]| {
        for chunk in literal.chunks(0x7F) {
            stream.push(chunk.len() as u8);
            stream.extend_from_slice(chunk);
        }
    };

    while position < data.len() {
        let repeats = position >= 8
            && position + 4 <= data.len()
            && data[position..position + 4] == data[position - 8..position - 4];
        if repeats {
            flush(&mut stream, &data[literal_start..position]);
            // Short reference: offset 8, length 4.
            stream.push(0x80 | ((4 + 7) << 4) | 7);
            position += 4;
            literal_start = position;
        } else {
            position += 1;
        }
    }
    flush(&mut stream, &data[literal_start..]);
    stream
}

fn ykcmp_container(data: &[u8]) -> Vec<u8> {
    let stream = encode_back_reference(data);
    let mut container = Vec::new();
    container.extend_from_slice(b"YKCMP_V1");
    container.extend_from_slice(&4u32.to_le_bytes());
    container.extend_from_slice(&(stream.len() as u32).to_le_bytes());
    container.extend_from_slice(&(data.len() as u32).to_le_bytes());
    container.extend_from_slice(&stream);
    container
}

fn tex_file(width: u32, height: u32, mip_count: u8, tile_width_spacing: u8, block_height: u8, payload: &[u8]) -> Vec<u8> {
    let mut data = vec![0u8; 0x80];
    data[0x18..0x1C].copy_from_slice(&width.to_le_bytes());
    data[0x1C..0x20].copy_from_slice(&height.to_le_bytes());
    data[0x25] = mip_count;
    data[0x30..0x34].copy_from_slice(&(payload.len() as u32).to_le_bytes());
    data[0x38] = block_height;
    data[0x39] = tile_width_spacing;
    data.extend_from_slice(payload);
    data
}

#[test]
fn test_extract_compressed_bc1_mip_chain() {
    let surface = SurfaceBuilder::new(PixelFormat::Bc1RgbaUnorm, 512, 512)
        .mip_count(10)
        .tile_width_spacing_log2(4)
        .block_height_log2(3)
        .build()
        .expect("Surface should be valid");
    let layout = surface.layout().expect("Layout should be computable");
    assert_eq!(layout.block_linear_size(), 177152);

    // Texture-like data: repeated 8 byte blocks compress well.
    let linear: Vec<u8> = (0..layout.linear_size())
        .map(|index| ((index / 64) as u8) ^ (index % 8) as u8)
        .collect();
    let tiled = swizzle_mip_chain_allocating(&linear, &surface).expect("Swizzle should succeed");
    let container = ykcmp_container(&tiled);
    assert!(likely_ykcmp(&container));
    assert!(container.len() < tiled.len(), "Container should be smaller than its contents");
    assert_eq!(decompress_allocating(&container).expect("Container should decode"), tiled);

    let file = tex_file(512, 512, 10, 4, 3, &container);
    let header = parse_texture_header(&file).expect("Header should parse");
    assert_eq!(header.mip_count, 10);

    let texture = extract_texture(&file, PixelFormat::Bc1RgbaUnorm).expect("Extraction should succeed");
    assert_eq!(texture.surface, surface);
    assert_eq!(texture.data, linear);

    let smallest = texture.layout.level(9).expect("Level 9 should exist");
    assert_eq!(smallest.linear_size, 8);
    assert_eq!(
        &texture.data[smallest.linear_offset..][..smallest.linear_size],
        &linear[smallest.linear_offset..][..8]
    );
}

#[test]
fn test_extract_uncompressed_rgba_surface() {
    let surface = SurfaceBuilder::new(PixelFormat::A8B8G8R8Unorm, 32, 32)
        .mip_count(1)
        .block_height_log2(2)
        .build()
        .expect("Surface should be valid");
    let linear = pattern(surface.layout().unwrap().linear_size());
    let tiled = swizzle_mip_chain_allocating(&linear, &surface).unwrap();

    let file = tex_file(32, 32, 1, 0, 2, &tiled);
    let texture = extract_texture(&file, PixelFormat::A8B8G8R8Unorm).unwrap();
    assert_eq!(texture.data, linear);
    assert_eq!(unswizzle_allocating(&tiled, &surface).unwrap(), linear);
}

#[test]
fn test_error_categories() {
    let error = extract_texture(&[0u8; 4], PixelFormat::Bc1RgbaUnorm).unwrap_err();
    assert!(matches!(error, TiledTextureError::UnknownTextureHeader { len: 4 }));

    let file = tex_file(64, 64, 16, 0, 4, &[]);
    let error = extract_texture(&file, PixelFormat::Bc1RgbaUnorm).unwrap_err();
    assert_eq!(error.category(), ErrorCategory::InvalidArgument);

    let mut container = ykcmp_container(&[1, 2, 3, 4]);
    container[0x10] = 5; // declares more bytes than the stream holds
    let file = tex_file(1, 1, 1, 0, 0, &container);
    let error = extract_texture(&file, PixelFormat::A8B8G8R8Unorm).unwrap_err();
    assert_eq!(error.category(), ErrorCategory::MalformedStream);
}
