use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use tiled_texture_ykcmp::{decompress, HEADER_SIZE, YKCMP_MAGIC};

const DATA_SIZE: usize = 1024 * 1024;

fn container(compression_type: u32, payload: &[u8], decompressed_size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(HEADER_SIZE + payload.len());
    data.extend_from_slice(&YKCMP_MAGIC);
    data.extend_from_slice(&compression_type.to_le_bytes());
    data.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    data.extend_from_slice(&(decompressed_size as u32).to_le_bytes());
    data.extend_from_slice(payload);
    data
}

/// Texture-like data: short runs of repeated 8 byte blocks.
fn sample_data() -> Vec<u8> {
    (0..DATA_SIZE)
        .map(|index| ((index / 64) as u8).wrapping_mul(37) ^ (index % 8) as u8)
        .collect()
}

/// Encodes `data` with literal runs and one-byte-offset references only.
fn encode_back_reference(data: &[u8]) -> Vec<u8> {
    let mut stream = Vec::new();
    let mut position = 0;
    while position < data.len() {
        let mut run = 1;
        while position + run < data.len() && run < 5 && data[position + run] == data[position] {
            run += 1;
        }
        if run >= 2 {
            // Literal first byte, then offset 1 for the rest.
            stream.extend_from_slice(&[0x01, data[position], 0x80 | (((run - 1 + 7) as u8) << 4)]);
        } else {
            let end = (position + 0x7F).min(data.len());
            stream.push((end - position) as u8);
            stream.extend_from_slice(&data[position..end]);
            run = end - position;
        }
        position += run;
    }
    stream
}

fn criterion_benchmark(c: &mut Criterion) {
    let data = sample_data();
    let inputs = [
        ("back_reference", container(4, &encode_back_reference(&data), data.len())),
        ("lz4", container(8, &lz4_flex::block::compress(&data), data.len())),
    ];

    let mut group = c.benchmark_group("YKCMP decompress");
    group.throughput(Throughput::Bytes(data.len() as u64));

    for (name, input) in inputs.iter() {
        let mut output = vec![0u8; data.len()];
        group.bench_with_input(BenchmarkId::new("decompress", name), input, |b, input| {
            b.iter(|| decompress(black_box(input), black_box(&mut output)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
