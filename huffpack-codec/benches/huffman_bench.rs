//! Performance benchmarks for huffpack-codec.
//!
//! Measures compression and decompression throughput for data patterns
//! with very different alphabet shapes: skewed text-like frequencies,
//! uniform random bytes (deep tree, poor ratio), and a near-degenerate
//! single-symbol stream.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use huffpack_codec::{compress, decompress};
use std::hint::black_box;

/// Generate benchmark data patterns
mod test_data {
    /// Text-like data - skewed byte frequencies
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. ";
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let remaining = size - data.len();
            let chunk_size = remaining.min(text.len());
            data.extend_from_slice(&text[..chunk_size]);
        }
        data
    }

    /// Random data - flat frequencies, worst compression
    pub fn random(size: usize) -> Vec<u8> {
        // Simple LCG for reproducible random data
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Almost-uniform data - one dominant symbol
    pub fn skewed(size: usize) -> Vec<u8> {
        let mut data = vec![0xAA; size];
        for (i, byte) in data.iter_mut().enumerate() {
            if i % 97 == 0 {
                *byte = (i % 251) as u8;
            }
        }
        data
    }
}

type PatternGenerator = fn(usize) -> Vec<u8>;

const SIZES: [(&str, usize); 2] = [("16KB", 16 * 1024), ("256KB", 256 * 1024)];

const PATTERNS: [(&str, PatternGenerator); 3] = [
    ("text", test_data::text_like as PatternGenerator),
    ("random", test_data::random as PatternGenerator),
    ("skewed", test_data::skewed as PatternGenerator),
];

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("compress");

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let data = generator(size);
            let id = format!("{size_name}/{pattern_name}");

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::from_parameter(&id), &data, |b, data| {
                b.iter(|| {
                    let compressed = compress(black_box(data)).unwrap();
                    black_box(compressed);
                });
            });
        }
    }

    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompress");

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let data = generator(size);
            let compressed = compress(&data).unwrap();
            let id = format!("{size_name}/{pattern_name}");

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::from_parameter(&id),
                &compressed,
                |b, compressed| {
                    b.iter(|| {
                        let decompressed = decompress(black_box(compressed)).unwrap();
                        black_box(decompressed);
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
