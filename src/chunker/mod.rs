//! Chunking engine for processing byte streams.
//!
//! - [`Chunker`] - Stateful splitting engine with `push()`/`finish()` API
//! - [`ChunkIter`] - Iterator that yields chunks from a [`std::io::Read`] source
//! - [`chunk_bytes`] - One-shot chunking of an in-memory buffer

mod engine;
mod iter;

pub use engine::Chunker;
pub use iter::ChunkIter;

use bytes::Bytes;

use crate::chunk::Chunk;
use crate::config::ChunkConfig;

/// Chunks an in-memory buffer in one shot.
///
/// Convenience wrapper around [`Chunker`] for data that is already in
/// memory: pushes the whole buffer, flushes the tail, and returns every
/// chunk. Chunk data is zero-copy sliced from the input `Bytes`.
///
/// # Arguments
///
/// * `data` - Any type that can be converted to [`Bytes`]
/// * `config` - The chunking configuration
///
/// # Example
///
/// ```
/// use rollsplit::{chunk_bytes, ChunkConfig};
///
/// let chunks = chunk_bytes(&b"hello world"[..], ChunkConfig::default());
///
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(chunks[0].len(), 11);
/// ```
pub fn chunk_bytes(data: impl Into<Bytes>, config: ChunkConfig) -> Vec<Chunk> {
    let mut chunker = Chunker::new(config);
    let mut chunks = chunker.push(data.into());
    if let Some(tail) = chunker.finish() {
        chunks.push(tail);
    }
    chunks
}
