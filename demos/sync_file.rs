//! File chunking example.
//!
//! Run with:
//!     cargo run --example sync_file -- /path/to/file

use std::env;
use std::fs::File;

use rollsplit::{Blake3Hasher, ChunkConfig, ChunkIter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    println!("Chunking file: {}\n", path);

    let file = File::open(&path)?;
    let metadata = file.metadata()?;
    println!("File size: {} bytes\n", metadata.len());

    // Smaller sizes than the defaults so small files still split
    let config = ChunkConfig::new(
        2 * 1024,  // min: 2 KiB
        8 * 1024,  // first: 8 KiB
        32 * 1024, // max: 32 KiB
    )
    .expect("invalid config");

    let mut file_hasher = Blake3Hasher::new();
    let mut total_chunks = 0;
    let mut total_bytes = 0;

    for chunk in ChunkIter::new(file, config) {
        let chunk = chunk?;
        file_hasher.update(&chunk.data);
        total_chunks += 1;
        total_bytes += chunk.len();

        if let Some(hash) = &chunk.hash {
            println!(
                "Chunk {}: offset={:>10}, len={:>8}, hash={}",
                total_chunks,
                chunk.offset.unwrap_or(0),
                chunk.len(),
                hash.to_hex()
            );
        }
    }

    println!("\nTotal: {} chunks, {} bytes", total_chunks, total_bytes);
    if total_chunks > 0 {
        println!("Average chunk size: {} bytes", total_bytes / total_chunks);
    }
    println!("Whole-file BLAKE3: {}", file_hasher.finalize().to_hex());

    Ok(())
}
