//! Benchmarks for rollsplit.
//!
//! Run with:
//!     cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use rollsplit::{ChunkConfig, ChunkIter, RollSum, chunk_bytes};

/// xorshift64 generator for deterministic pseudo-random benchmark data.
fn pseudo_random(len: usize, mut seed: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(len);
    for _ in 0..len {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        out.push((seed >> 56) as u8);
    }
    out
}

fn bench_rollsum(c: &mut Criterion) {
    let mut group = c.benchmark_group("rollsum");
    let size = 1024 * 1024;
    let data = pseudo_random(size, 0x517C_C1B7_2722_0A95);

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("roll_1mb", |b| {
        b.iter(|| {
            let mut rollsum = RollSum::new();
            let mut splits = 0u32;
            for &byte in black_box(&data[..]) {
                rollsum.roll(byte);
                if rollsum.on_split() {
                    splits += 1;
                }
            }
            black_box(splits)
        });
    });

    group.finish();
}

fn bench_chunker(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunker");

    // Different data sizes
    for size in [64 * 1024, 1024 * 1024, 10 * 1024 * 1024] {
        let data = pseudo_random(size, 0x2545_F491_4F6C_DD1D);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(format!("random_{}kb", size / 1024), &data, |b, data| {
            b.iter(|| {
                let chunks = chunk_bytes(black_box(data.clone()), ChunkConfig::default());
                black_box(chunks.len())
            });
        });

        // All zeros (no checksum boundaries, forced cuts only)
        let zeros = vec![0u8; size];
        group.bench_with_input(format!("zeros_{}kb", size / 1024), &zeros, |b, data| {
            b.iter(|| {
                let chunks = chunk_bytes(black_box(data.clone()), ChunkConfig::default());
                black_box(chunks.len())
            });
        });
    }

    group.finish();
}

fn bench_configs(c: &mut Criterion) {
    let mut group = c.benchmark_group("configs");
    let size = 1024 * 1024; // 1 MB
    let data = pseudo_random(size, 0x2545_F491_4F6C_DD1D);

    // Small chunks
    group.bench_function("small_chunks", |b| {
        let config = ChunkConfig::new(2 * 1024, 8 * 1024, 32 * 1024).unwrap();
        b.iter(|| {
            let chunks = chunk_bytes(black_box(data.clone()), config);
            black_box(chunks.len())
        });
    });

    // Default chunks (64 KiB / 256 KiB / 1 MiB)
    group.bench_function("default_chunks", |b| {
        let config = ChunkConfig::default();
        b.iter(|| {
            let chunks = chunk_bytes(black_box(data.clone()), config);
            black_box(chunks.len())
        });
    });

    // Large chunks
    group.bench_function("large_chunks", |b| {
        let config = ChunkConfig::new(256 * 1024, 1024 * 1024, 4 * 1024 * 1024).unwrap();
        b.iter(|| {
            let chunks = chunk_bytes(black_box(data.clone()), config);
            black_box(chunks.len())
        });
    });

    // No hashing
    group.bench_function("no_hash", |b| {
        let config = ChunkConfig::default().with_hash_config(rollsplit::HashConfig::disabled());
        b.iter(|| {
            let chunks = chunk_bytes(black_box(data.clone()), config);
            black_box(chunks.len())
        });
    });

    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    use std::io::Read;

    let mut group = c.benchmark_group("streaming");
    let size = 1024 * 1024; // 1 MB
    let data = pseudo_random(size, 0x2545_F491_4F6C_DD1D);

    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("iterator", |b| {
        b.iter(|| {
            let cursor = std::io::Cursor::new(black_box(&data));
            let mut count = 0;
            for chunk in ChunkIter::new(cursor, ChunkConfig::default()) {
                let _ = chunk.unwrap();
                count += 1;
            }
            black_box(count)
        });
    });

    group.bench_function("buffered_read_baseline", |b| {
        b.iter(|| {
            let mut cursor = std::io::Cursor::new(black_box(&data));
            let mut buf = vec![0u8; 64 * 1024];
            let mut total = 0usize;
            loop {
                let n = cursor.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                total += n;
            }
            black_box(total)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_rollsum,
    bench_chunker,
    bench_configs,
    bench_streaming
);
criterion_main!(benches);
