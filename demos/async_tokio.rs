//! Async chunking with parallel processing example.
//!
//! Chunking is CPU-bound, so each stream runs on Tokio's blocking pool
//! while the async task collects the results. Multiple chunkers can run
//! concurrently for different streams.
//!
//! Run with:
//!     cargo run --example async_tokio

use bytes::Bytes;
use rollsplit::{ChunkConfig, Chunker};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create multiple data streams
    let streams: Vec<Vec<u8>> = vec![
        pseudo_random(200_000, 0xAAAA_1111_BBBB_2222),
        pseudo_random(200_000, 0xCCCC_3333_DDDD_4444),
        pseudo_random(200_000, 0xEEEE_5555_FFFF_6666),
    ];

    println!("Processing {} streams concurrently...\n", streams.len());

    let config = ChunkConfig::new(
        2 * 1024,  // min: 2 KiB
        8 * 1024,  // first: 8 KiB
        32 * 1024, // max: 32 KiB
    )
    .expect("invalid config");

    // Process each stream in parallel
    let handles: Vec<_> = streams
        .into_iter()
        .enumerate()
        .map(|(stream_id, data)| {
            tokio::task::spawn_blocking(move || process_stream(stream_id, data, config))
        })
        .collect();

    // Wait for all streams to complete
    for handle in handles {
        let (stream_id, chunk_count, total_bytes) = handle.await?;
        println!(
            "Stream {}: {} chunks, {} bytes",
            stream_id, chunk_count, total_bytes
        );
    }

    Ok(())
}

fn process_stream(stream_id: usize, data: Vec<u8>, config: ChunkConfig) -> (usize, usize, usize) {
    let mut chunker = Chunker::new(config);
    let mut chunk_count = 0;
    let mut total_bytes = 0;

    // Feed the stream in batches, as if it arrived from the network
    let data = Bytes::from(data);
    let batch_size = 8192;
    let mut offset = 0;

    while offset < data.len() {
        let end = (offset + batch_size).min(data.len());
        let batch = data.slice(offset..end);

        for chunk in chunker.push(batch) {
            chunk_count += 1;
            total_bytes += chunk.len();
        }

        offset = end;
    }

    if let Some(final_chunk) = chunker.finish() {
        chunk_count += 1;
        total_bytes += final_chunk.len();
    }

    (stream_id, chunk_count, total_bytes)
}

fn pseudo_random(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 56) as u8
        })
        .collect()
}
