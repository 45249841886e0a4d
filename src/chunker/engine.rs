//! Core chunking engine - Chunker with streaming API.
//!
//! This module implements the synchronous chunking API on top of the
//! rolling checksum. It provides a pure streaming interface:
//!
//! - [`Chunker`] - Stateful splitting engine that processes streaming bytes
//! - `push()` - Feed data in any size (1 byte, 8KB, 1MB, etc.)
//! - `finish()` - Flush remaining data when the stream ends
//!
//! # Example
//!
//! ```
//! use rollsplit::{Chunker, ChunkConfig};
//! use bytes::Bytes;
//!
//! let config = ChunkConfig::default();
//! let mut chunker = Chunker::new(config);
//!
//! // Feed data in any size
//! let mut chunks = chunker.push(Bytes::from(&b"first"[..]));
//! chunks.extend(chunker.push(Bytes::from(&b"second"[..])));
//!
//! // When the stream ends, flush the tail
//! if let Some(tail) = chunker.finish() {
//!     chunks.push(tail);
//! }
//!
//! assert_eq!(chunks.iter().map(|c| c.len()).sum::<usize>(), 11);
//! # Ok::<(), rollsplit::ChunkError>(())
//! ```

use bytes::Bytes;

use crate::chunk::Chunk;
use crate::config::ChunkConfig;
use crate::rollsum::RollSum;

/// A chunker that splits streaming byte data into content-defined chunks.
///
/// `Chunker` accepts bytes via `push()` and yields chunks as the rolling
/// checksum identifies boundaries. It keeps the checksum window, the byte
/// position, and any unemitted bytes across calls, so chunk boundaries are
/// deterministic regardless of how the input is segmented.
///
/// # Boundary policy
///
/// A chunk ends at the first byte position where one of these holds, in
/// order of precedence:
///
/// 1. The chunk has reached `max_size`. The split level is recorded as
///    `log2(max_size)`.
/// 2. The checksum proposes a boundary, the stream position is past
///    `first_size`, and the chunk is longer than `min_size`. The split
///    level is the checksum's [`bits()`](RollSum::bits) at that position.
/// 3. The stream position is exactly `first_size`. This cuts the first
///    chunk of every stream at a fixed length, so file headers stay in
///    their own chunk. The split level is `log2(first_size)`.
///
/// The checksum itself is never reset at a cut. Its window spans cut
/// points, which is what makes boundaries realign after an insertion or
/// deletion earlier in the stream.
///
/// # Streaming API
///
/// - Call `push()` with data of any size (1 byte to megabytes)
/// - Chunks are returned as soon as their final byte is seen
/// - Bytes after the last boundary are held internally until the next
///   `push()` or `finish()`
/// - Call `finish()` when the stream ends to flush the tail
///
/// # Determinism
///
/// Identical byte streams produce identical chunk boundaries, regardless
/// of how many bytes are pushed at once or how many `push()` calls are
/// made.
///
/// # Zero-Copy
///
/// Chunk data is zero-copy sliced from the input `Bytes` whenever a chunk
/// falls entirely within one `push()`. Chunks spanning multiple pushes are
/// assembled into a fresh buffer.
///
/// # Example
///
/// ```
/// use rollsplit::{Chunker, ChunkConfig};
/// use bytes::Bytes;
///
/// let mut chunker = Chunker::new(ChunkConfig::default());
///
/// let parts = vec![
///     Bytes::from(&b"first part"[..]),
///     Bytes::from(&b" second part"[..]),
///     Bytes::from(&b" final part"[..]),
/// ];
///
/// let mut all_chunks = Vec::new();
/// for part in parts {
///     all_chunks.extend(chunker.push(part));
/// }
///
/// // Finalize the stream
/// if let Some(tail) = chunker.finish() {
///     all_chunks.push(tail);
/// }
///
/// let total: usize = all_chunks.iter().map(|c| c.len()).sum();
/// assert_eq!(total, 33);
/// # Ok::<(), rollsplit::ChunkError>(())
/// ```
#[derive(Debug)]
pub struct Chunker {
    rollsum: RollSum,
    config: ChunkConfig,
    /// Split level assigned to a first-chunk cut, `log2(first_size)`.
    first_bits: u32,
    /// Split level assigned to a max-size cut, `log2(max_size)`.
    max_bits: u32,
    /// Bytes after the last boundary, waiting for more input.
    pending: Option<Bytes>,
    /// Stream offset of the next chunk to be emitted.
    offset: u64,
    /// Total bytes rolled through the checksum since `new()`/`reset()`.
    consumed: u64,
}

impl Chunker {
    /// Creates a new chunker with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - The chunking configuration specifying min/first/max
    ///   chunk sizes and hashing behavior
    ///
    /// # Example
    ///
    /// ```
    /// use rollsplit::{Chunker, ChunkConfig};
    ///
    /// let chunker = Chunker::new(ChunkConfig::default());
    /// ```
    pub fn new(config: ChunkConfig) -> Self {
        Self {
            rollsum: RollSum::new(),
            first_bits: config.first_size().ilog2(),
            max_bits: config.max_size().ilog2(),
            pending: None,
            offset: 0,
            consumed: 0,
            config,
        }
    }

    /// Computes a hash for the given data if hashing is enabled.
    fn compute_hash(&self, data: &[u8]) -> Option<crate::chunk::ChunkHash> {
        if !self.config.hash_config().enabled {
            return None;
        }
        #[cfg(feature = "hash-blake3")]
        return Some(crate::hash::Blake3Hasher::hash(data));
        #[cfg(not(feature = "hash-blake3"))]
        return None;
    }

    /// Builds a chunk at the current offset and advances the offset past it.
    fn emit(&mut self, data: Bytes, bits: Option<u32>) -> Chunk {
        let hash = self.compute_hash(data.as_ref());
        let chunk = Chunk {
            offset: Some(self.offset),
            bits,
            hash,
            data,
        };
        self.offset += chunk.len() as u64;
        chunk
    }

    /// Pushes data into the chunker and returns the chunks completed by it.
    ///
    /// Every byte is rolled through the checksum; whenever the boundary
    /// policy fires, the bytes since the previous boundary (including any
    /// held over from earlier calls) are emitted as a chunk. Bytes after
    /// the last boundary are held internally for the next call.
    ///
    /// # Arguments
    ///
    /// * `data` - Input data as `Bytes` (can be a zero-copy reference)
    ///
    /// # Returns
    ///
    /// The chunks whose final byte was seen during this call. The vector
    /// is empty when no boundary fired.
    ///
    /// # Memory
    ///
    /// At most `max_size` bytes are held internally between calls, because
    /// rule 1 of the boundary policy force-cuts at that length.
    ///
    /// # Example
    ///
    /// ```
    /// use rollsplit::{Chunker, ChunkConfig};
    /// use bytes::Bytes;
    ///
    /// let mut chunker = Chunker::new(ChunkConfig::default());
    ///
    /// // 11 bytes is below the first-chunk size, so no boundary fires yet
    /// let chunks = chunker.push(Bytes::from(&b"hello world"[..]));
    /// assert!(chunks.is_empty());
    /// assert_eq!(chunker.pending_len(), 11);
    /// ```
    pub fn push(&mut self, data: Bytes) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut start = 0;

        for (i, &byte) in data.iter().enumerate() {
            self.rollsum.roll(byte);
            self.consumed += 1;

            let len = self.pending_len() + (i + 1 - start);
            let bits = if len >= self.config.max_size() {
                Some(self.max_bits)
            } else if self.rollsum.on_split()
                && self.consumed > self.config.first_size() as u64
                && len > self.config.min_size()
            {
                Some(self.rollsum.bits())
            } else if self.consumed == self.config.first_size() as u64 {
                Some(self.first_bits)
            } else {
                None
            };

            if let Some(bits) = bits {
                let chunk_data = match self.pending.take() {
                    // Chunk spans earlier pushes: assemble pending + new data
                    Some(pending) => crate::util::combine_bytes(&pending, &data[start..=i]),
                    // Chunk lies within this push: zero-copy slice
                    None => data.slice(start..=i),
                };

                chunks.push(self.emit(chunk_data, Some(bits)));
                start = i + 1;
            }
        }

        // Hold remaining data for the next call (or append to what is held)
        if start < data.len() {
            let remaining = data.slice(start..);
            self.pending = Some(match self.pending.take() {
                Some(pending) => crate::util::combine_bytes(&pending, remaining.as_ref()),
                None => remaining,
            });
        }

        chunks
    }

    /// Finalizes the stream and returns the tail chunk if any.
    ///
    /// Call this when the input stream ends. Any bytes held since the last
    /// boundary are returned as a final chunk. The tail was not cut by the
    /// boundary policy, so its split level is `None`.
    ///
    /// To reuse the chunker for another stream, call [`reset`](Self::reset)
    /// afterwards; `finish()` itself does not clear the checksum window.
    ///
    /// # Returns
    ///
    /// - `Some(Chunk)` - Final chunk with the remaining data
    /// - `None` - No data was held
    ///
    /// # Example
    ///
    /// ```
    /// use rollsplit::{Chunker, ChunkConfig};
    /// use bytes::Bytes;
    ///
    /// let mut chunker = Chunker::new(ChunkConfig::default());
    ///
    /// let chunks = chunker.push(Bytes::from("some data"));
    /// assert!(chunks.is_empty());
    ///
    /// let tail = chunker.finish().unwrap();
    /// assert_eq!(tail.len(), 9);
    /// assert_eq!(tail.bits, None);
    /// ```
    pub fn finish(&mut self) -> Option<Chunk> {
        let pending = self.pending.take()?;
        if pending.is_empty() {
            return None;
        }
        Some(self.emit(pending, None))
    }

    /// Resets the chunker state for a new stream.
    ///
    /// Clears the checksum window, held bytes, offset, and byte count.
    /// After `reset()` the chunker behaves exactly like a freshly
    /// constructed one with the same configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use rollsplit::{Chunker, ChunkConfig};
    /// use bytes::Bytes;
    ///
    /// let mut chunker = Chunker::new(ChunkConfig::default());
    ///
    /// // Process first stream
    /// let _ = chunker.push(Bytes::from("first"));
    /// let _ = chunker.finish();
    ///
    /// // Start over for a second stream
    /// chunker.reset();
    /// assert_eq!(chunker.offset(), 0);
    /// ```
    pub fn reset(&mut self) {
        self.rollsum = RollSum::new();
        self.pending = None;
        self.offset = 0;
        self.consumed = 0;
    }

    /// Returns the current offset in the stream.
    ///
    /// This is the byte position of the next chunk to be emitted.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the number of bytes held since the last boundary.
    ///
    /// These bytes have been rolled through the checksum but have not
    /// formed a complete chunk yet.
    pub fn pending_len(&self) -> usize {
        self.pending.as_ref().map(|b| b.len()).unwrap_or(0)
    }

    /// Returns the configuration used by this chunker.
    pub fn config(&self) -> &ChunkConfig {
        &self.config
    }
}

impl Default for Chunker {
    fn default() -> Self {
        Self::new(ChunkConfig::default())
    }
}
