//! Performance benchmarks for alzw-codec
//!
//! This benchmark suite evaluates:
//! - Compression/decompression throughput per dictionary policy
//! - Behaviour across input sizes and data patterns
//! - Cost of frequent resets at small maximum widths

use alzw_codec::{LzwConfig, compress, decompress};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

mod test_data {
    /// All bytes the same (best case)
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// LCG noise (worst case)
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Repeated prose
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. \
                     How vexingly quick daft zebras jump! ";
        text.iter().copied().cycle().take(size).collect()
    }

    /// Text followed by noise, so the ratio collapses part way through
    pub fn shifting(size: usize) -> Vec<u8> {
        let mut data = text_like(size / 2);
        data.extend(random(size - data.len()));
        data
    }
}

const SIZES: [(&str, usize); 3] = [
    ("64KB", 64 * 1024),
    ("256KB", 256 * 1024),
    ("1MB", 1024 * 1024),
];

const PATTERNS: [(&str, PatternGenerator); 4] = [
    ("uniform", test_data::uniform as PatternGenerator),
    ("random", test_data::random as PatternGenerator),
    ("text", test_data::text_like as PatternGenerator),
    ("shifting", test_data::shifting as PatternGenerator),
];

const CONFIGS: [(&str, LzwConfig); 3] = [
    ("none", LzwConfig::NONE),
    ("reset", LzwConfig::RESET),
    ("monitor", LzwConfig::MONITOR),
];

/// Benchmark compression speed for each policy
fn bench_compression_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_speed");

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let data = generator(size);
            for (mode_name, config) in CONFIGS {
                let id = format!("{}/{}/{}", size_name, pattern_name, mode_name);

                group.throughput(Throughput::Bytes(size as u64));
                group.bench_with_input(BenchmarkId::from_parameter(&id), &data, |b, data| {
                    b.iter(|| {
                        let compressed = compress(black_box(data), config).unwrap();
                        black_box(compressed);
                    });
                });
            }
        }
    }

    group.finish();
}

/// Benchmark decompression speed for each policy
fn bench_decompression_speed(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompression_speed");

    for (size_name, size) in SIZES {
        for (pattern_name, generator) in PATTERNS {
            let original = generator(size);
            for (mode_name, config) in CONFIGS {
                let compressed = compress(&original, config).unwrap();
                let id = format!("{}/{}/{}", size_name, pattern_name, mode_name);

                group.throughput(Throughput::Bytes(size as u64));
                group.bench_with_input(
                    BenchmarkId::from_parameter(&id),
                    &compressed,
                    |b, compressed| {
                        b.iter(|| {
                            let decompressed = decompress(black_box(compressed), config).unwrap();
                            black_box(decompressed);
                        });
                    },
                );
            }
        }
    }

    group.finish();
}

/// Benchmark frequent resets with a narrow maximum width
fn bench_narrow_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("narrow_width");
    let size = 256 * 1024;
    let data = test_data::shifting(size);

    for max_bits in [9u8, 12, 16] {
        for (mode_name, config) in CONFIGS {
            let config = config.with_max_bits(max_bits);

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(
                BenchmarkId::new(mode_name, max_bits),
                &data,
                |b, data| {
                    b.iter(|| {
                        let compressed = compress(black_box(data), config).unwrap();
                        let decompressed = decompress(&compressed, config).unwrap();
                        black_box(decompressed);
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_compression_speed,
    bench_decompression_speed,
    bench_narrow_width,
);
criterion_main!(benches);
