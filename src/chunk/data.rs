//! The Chunk type - represents a content-defined chunk.

use bytes::Bytes;
use std::fmt;

use super::ChunkHash;

/// A content-defined chunk with metadata.
///
/// The `bits` field carries the split level reported by the rolling checksum
/// at the boundary that closed this chunk (13 or more for natural
/// boundaries, the log2 of the configured size for forced cuts). The final
/// chunk of a stream ends at EOF rather than at a boundary and has no level.
/// Span-tree builders group chunks by level; callers that only want the
/// chunk bytes can ignore it.
///
/// # Example
///
/// ```
/// use rollsplit::Chunk;
/// use bytes::Bytes;
///
/// let chunk = Chunk {
///     data: Bytes::from_static(b"hello world"),
///     offset: Some(0),
///     bits: Some(13),
///     hash: None,
/// };
///
/// assert_eq!(chunk.data.len(), 11);
/// ```
#[derive(Debug, Clone)]
pub struct Chunk {
    /// The chunk data (may be owned or borrowed).
    pub data: Bytes,

    /// The offset in the original stream (if available).
    pub offset: Option<u64>,

    /// The split level of the boundary that closed this chunk, `None` for
    /// the final chunk of a stream.
    pub bits: Option<u32>,

    /// The content hash of this chunk (if computed).
    pub hash: Option<ChunkHash>,
}

impl Chunk {
    /// Creates a new chunk with the given data.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            offset: None,
            bits: None,
            hash: None,
        }
    }

    /// Creates a new chunk with an offset.
    pub fn with_offset(data: impl Into<Bytes>, offset: u64) -> Self {
        Self {
            data: data.into(),
            offset: Some(offset),
            bits: None,
            hash: None,
        }
    }

    /// Sets the offset.
    pub fn set_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the split level.
    pub fn set_bits(mut self, bits: u32) -> Self {
        self.bits = Some(bits);
        self
    }

    /// Sets the hash.
    pub fn set_hash(mut self, hash: ChunkHash) -> Self {
        self.hash = Some(hash);
        self
    }

    /// Returns the length of the chunk data.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the chunk has no data.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a reference to the chunk data.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// Returns the offset, if set.
    pub fn offset(&self) -> Option<u64> {
        self.offset
    }

    /// Returns the split level, if this chunk ended at a boundary.
    pub fn bits(&self) -> Option<u32> {
        self.bits
    }

    /// Returns the hash, if computed.
    pub fn hash(&self) -> Option<ChunkHash> {
        self.hash
    }

    /// Returns the start offset (0 if not set).
    pub fn start(&self) -> u64 {
        self.offset.unwrap_or(0)
    }

    /// Returns the end offset (exclusive).
    pub fn end(&self) -> u64 {
        self.start() + self.data.len() as u64
    }

    /// Returns the chunk as a range.
    pub fn range(&self) -> std::ops::Range<u64> {
        self.start()..self.end()
    }

    /// Consumes the chunk and returns the underlying data.
    pub fn into_data(self) -> Bytes {
        self.data
    }

    /// Splits the chunk into (data, hash).
    pub fn into_parts(self) -> (Bytes, Option<ChunkHash>) {
        (self.data, self.hash)
    }
}

impl From<Bytes> for Chunk {
    fn from(data: Bytes) -> Self {
        Self::new(data)
    }
}

impl From<Vec<u8>> for Chunk {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chunk({} bytes", self.len())?;
        if let Some(offset) = self.offset {
            write!(f, " @ {}", offset)?;
        }
        if let Some(bits) = self.bits {
            write!(f, ", bits={}", bits)?;
        }
        if let Some(hash) = self.hash {
            write!(f, ", hash={}", hash)?;
        }
        write!(f, ")")
    }
}
