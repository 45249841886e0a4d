//! Basic synchronous chunking example with the streaming API.
//!
//! Run with:
//!     cargo run --example sync_basic

use bytes::Bytes;
use rollsplit::{ChunkConfig, Chunker};

/// xorshift64 generator, so the output is interesting but repeatable.
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

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 4 MiB of deterministic pseudo-random data
    let data = pseudo_random(4 * 1024 * 1024, 0xD1CE_5EED_0000_0001);

    // Create chunker with default config (64 KiB / 256 KiB / 1 MiB)
    let mut chunker = Chunker::new(ChunkConfig::default());

    println!("Chunking {} bytes of data...\n", data.len());

    let mut total_chunks = 0;
    let mut total_bytes = 0;

    // Simulate streaming data in batches
    let batch_size = 8 * 1024; // 8 KB batches
    for batch in data.chunks(batch_size) {
        for chunk in chunker.push(Bytes::copy_from_slice(batch)) {
            total_chunks += 1;
            total_bytes += chunk.len();
            print_chunk(total_chunks, &chunk);
        }
    }

    // Finalize stream
    if let Some(tail) = chunker.finish() {
        total_chunks += 1;
        total_bytes += tail.len();
        print_chunk(total_chunks, &tail);
    }

    println!("\nTotal: {} chunks, {} bytes", total_chunks, total_bytes);
    if total_chunks > 0 {
        println!("Average chunk size: {} bytes", total_bytes / total_chunks);
    }

    Ok(())
}

fn print_chunk(index: usize, chunk: &rollsplit::Chunk) {
    let level = match chunk.bits {
        Some(bits) => format!("{:>2} bits", bits),
        None => "tail".to_string(),
    };

    if let Some(hash) = &chunk.hash {
        println!(
            "Chunk {}: offset={:>8}, len={:>7}, {}, hash={}",
            index,
            chunk.offset.unwrap_or(0),
            chunk.len(),
            level,
            &hash.to_hex()[..16]
        );
    } else {
        println!(
            "Chunk {}: offset={:>8}, len={:>7}, {}",
            index,
            chunk.offset.unwrap_or(0),
            chunk.len(),
            level
        );
    }
}
