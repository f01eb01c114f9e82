use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use tiled_texture_common::PixelFormat;
use tiled_texture_swizzle::{swizzle_mip_chain, unswizzle_image, SurfaceDescriptor};

fn surfaces() -> [(&'static str, SurfaceDescriptor); 3] {
    let surface = |format, width, height, mip_count, tile_width_spacing_log2, block_height_log2| {
        SurfaceDescriptor {
            format,
            width,
            height,
            depth: 1,
            mip_count,
            tile_width_spacing_log2,
            block_height_log2,
        }
    };
    [
        ("rgba8_2048", surface(PixelFormat::A8B8G8R8Unorm, 2048, 2048, 1, 0, 4)),
        ("bc1_2048_mips", surface(PixelFormat::Bc1RgbaUnorm, 2048, 2048, 12, 0, 4)),
        ("bc7_1024_spaced", surface(PixelFormat::Bc7Unorm, 1024, 1024, 1, 4, 3)),
    ]
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Unswizzle (block-linear -> linear)");

    for (name, surface) in surfaces() {
        let layout = surface.layout().unwrap();
        let linear: Vec<u8> = (0..layout.linear_size()).map(|x| (x % 251) as u8).collect();
        let mut tiled = vec![0u8; layout.block_linear_size()];
        swizzle_mip_chain(&linear, &mut tiled, &surface).unwrap();
        let mut output = vec![0u8; layout.linear_size()];

        group.throughput(Throughput::Bytes(layout.linear_size() as u64));
        group.bench_with_input(BenchmarkId::new("unswizzle_image", name), &tiled, |b, tiled| {
            b.iter(|| unswizzle_image(black_box(tiled), black_box(&mut output), &surface).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
