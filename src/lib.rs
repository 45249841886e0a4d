//! rollsplit
//!
//! Streaming content-defined chunking with the bup/Perkeep rolling checksum.
//!
//! `rollsplit` transforms a byte stream into content-defined chunks with
//! optional strong hashes. Boundaries come from a 64-byte rolling checksum
//! (the adler32-style rollsum used by `bup` and Perkeep, née Camlistore),
//! so an insertion or deletion only reshapes the chunks near the edit.
//! It is designed as a small, composable primitive for:
//!
//! - delta synchronization
//! - deduplication
//! - backup systems
//! - content-addressable storage
//!
//! The crate intentionally:
//! - does NOT manage files or paths
//! - does NOT manage concurrency
//! - does NOT persist chunks
//! - does NOT assume storage devices
//!
//! It only does one thing: **Read bytes → yield chunks**
//!
//! # Sync
//!
//! ```no_run
//! use std::fs::File;
//! use rollsplit::{ChunkIter, ChunkConfig, ChunkError};
//!
//! fn main() -> Result<(), ChunkError> {
//!     let file = File::open("data.bin")?;
//!
//!     for chunk in ChunkIter::new(file, ChunkConfig::default()) {
//!         let chunk = chunk?;
//!         println!("chunk {} bytes at offset {:?}", chunk.data.len(), chunk.offset);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Async (feature = "async-io")
//!
//! ```ignore
//! use futures_util::StreamExt;
//! use rollsplit::{chunk_async, ChunkConfig};
//! use futures_io::AsyncRead;
//!
//! async fn demo<R: AsyncRead>(reader: R) -> Result<(), rollsplit::ChunkError> {
//!     let mut stream = std::pin::pin!(chunk_async(reader, ChunkConfig::default()));
//!
//!     while let Some(chunk) = stream.next().await {
//!         let chunk = chunk?;
//!         println!("chunk {}", chunk.data.len());
//!     }
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chunk;
mod chunker;
mod config;
mod error;
mod rollsum;

mod buffer; // internal (thread-local reuse)
mod hash; // internal blake3 impl
mod util; // internal byte helpers

#[cfg(feature = "async-io")]
mod async_stream;

//
// Public surface (intentionally tiny)
//

pub use chunk::{Chunk, ChunkHash};
pub use chunker::{chunk_bytes, ChunkIter, Chunker};
pub use config::{ChunkConfig, HashConfig};
pub use error::ChunkError;
pub use rollsum::{RollSum, SPLIT_BITS, WINDOW_SIZE};

#[cfg(feature = "hash-blake3")]
pub use hash::Blake3Hasher;

#[cfg(feature = "async-io")]
pub use async_stream::{chunk_async, ChunkStream};
