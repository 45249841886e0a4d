//! Async streaming chunking example.
//!
//! Chunks a file through the async `ChunkStream` adapter. The reader is a
//! `tokio::fs::File` bridged to `futures-io` with tokio-util's compat
//! layer, so the same code works with any runtime that can produce a
//! `futures_io::AsyncRead`.
//!
//! Run with:
//!     cargo run --example async_stream --features async-io -- /path/to/file

use futures_util::StreamExt;
use rollsplit::{chunk_async, ChunkConfig};
use tokio_util::compat::TokioAsyncReadCompatExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    println!("Async chunking file: {}\n", path);

    let config = ChunkConfig::new(
        2 * 1024,  // min: 2 KiB
        8 * 1024,  // first: 8 KiB
        32 * 1024, // max: 32 KiB
    )
    .expect("invalid config");

    let file = tokio::fs::File::open(&path).await?;
    let mut stream = std::pin::pin!(chunk_async(file.compat(), config));

    let mut total_chunks = 0;
    let mut total_bytes = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        total_chunks += 1;
        total_bytes += chunk.len();

        match chunk.bits {
            Some(bits) => println!(
                "Chunk {}: offset={:>10}, len={:>8}, {:>2} bits",
                total_chunks,
                chunk.offset.unwrap_or(0),
                chunk.len(),
                bits
            ),
            None => println!(
                "Chunk {}: offset={:>10}, len={:>8} (tail)",
                total_chunks,
                chunk.offset.unwrap_or(0),
                chunk.len()
            ),
        }
    }

    println!("\nTotal: {} chunks, {} bytes", total_chunks, total_bytes);
    if total_chunks > 0 {
        println!("Average chunk size: {} bytes", total_bytes / total_chunks);
    }

    Ok(())
}
