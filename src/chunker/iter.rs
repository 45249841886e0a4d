//! Blocking iterator over chunks read from a [`std::io::Read`] source.

use std::collections::VecDeque;
use std::io::Read;

use bytes::Bytes;

use crate::buffer::{Buffer, DEFAULT_BUFFER_SIZE};
use crate::chunk::Chunk;
use crate::chunker::Chunker;
use crate::config::ChunkConfig;
use crate::error::ChunkError;

/// An iterator that yields chunks from a reader.
///
/// `ChunkIter` reads from a [`std::io::Read`] source incrementally and
/// yields chunks as the [`Chunker`] finds boundaries. Reads go through a
/// pooled 64 KiB buffer, so iterating a large file performs a bounded
/// number of allocations.
///
/// Boundaries are identical to chunking the same bytes with
/// [`chunk_bytes`](crate::chunk_bytes) or a hand-driven [`Chunker`].
///
/// # Example
///
/// ```
/// use rollsplit::{ChunkIter, ChunkConfig};
/// use std::io::Cursor;
///
/// let data = b"some data to chunk";
/// let iter = ChunkIter::new(Cursor::new(&data[..]), ChunkConfig::default());
///
/// let chunks: Vec<_> = iter.collect::<Result<_, _>>()?;
/// assert_eq!(chunks.len(), 1);
/// # Ok::<(), rollsplit::ChunkError>(())
/// ```
pub struct ChunkIter<R> {
    reader: R,
    chunker: Chunker,
    /// Chunks completed by the last read, not yet yielded.
    ready: VecDeque<Chunk>,
    buf: Buffer,
    finished: bool,
}

impl<R: Read> ChunkIter<R> {
    /// Creates a new chunk iterator over `reader`.
    ///
    /// # Arguments
    ///
    /// * `reader` - The source of data to chunk
    /// * `config` - The chunking configuration
    ///
    /// # Example
    ///
    /// ```
    /// use rollsplit::{ChunkIter, ChunkConfig};
    /// use std::io::Cursor;
    ///
    /// let iter = ChunkIter::new(Cursor::new(&b"data"[..]), ChunkConfig::default());
    /// ```
    pub fn new(reader: R, config: ChunkConfig) -> Self {
        Self {
            reader,
            chunker: Chunker::new(config),
            ready: VecDeque::new(),
            buf: Buffer::take(),
            finished: false,
        }
    }

    /// Consumes the iterator, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> Iterator for ChunkIter<R> {
    type Item = Result<Chunk, ChunkError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(chunk) = self.ready.pop_front() {
                return Some(Ok(chunk));
            }
            if self.finished {
                return None;
            }

            let buf = self.buf.read_buf(DEFAULT_BUFFER_SIZE);
            match self.reader.read(buf) {
                Ok(0) => {
                    // End of stream - flush the tail if any
                    self.finished = true;
                    if let Some(tail) = self.chunker.finish() {
                        return Some(Ok(tail));
                    }
                    return None;
                }
                Ok(n) => {
                    let data = Bytes::copy_from_slice(&buf[..n]);
                    self.ready.extend(self.chunker.push(data));
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunker::chunk_bytes;
    use std::io::Cursor;

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

    #[test]
    fn test_empty_reader() {
        let iter = ChunkIter::new(Cursor::new(&b""[..]), ChunkConfig::default());
        let chunks: Vec<_> = iter.collect::<Result<_, _>>().unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_small_reader_yields_tail() {
        let iter = ChunkIter::new(Cursor::new(&b"hello"[..]), ChunkConfig::default());
        let chunks: Vec<_> = iter.collect::<Result<Vec<_>, _>>().unwrap();

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].len(), 5);
        assert_eq!(chunks[0].offset, Some(0));
        assert_eq!(chunks[0].bits, None);
    }

    #[test]
    fn test_matches_chunk_bytes() {
        let data = pseudo_random(200_000, 0x5EED_CAFE_F00D_D00D);
        let config = ChunkConfig::new(2048, 8192, 32768).unwrap();

        let from_iter: Vec<_> = ChunkIter::new(Cursor::new(&data[..]), config)
            .collect::<Result<_, _>>()
            .unwrap();
        let from_bytes = chunk_bytes(data.clone(), config);

        assert_eq!(from_iter.len(), from_bytes.len());
        for (a, b) in from_iter.iter().zip(from_bytes.iter()) {
            assert_eq!(a.offset, b.offset);
            assert_eq!(a.data, b.data);
            assert_eq!(a.bits, b.bits);
        }
    }

    #[test]
    fn test_concatenated_chunks_equal_input() {
        let data = pseudo_random(100_000, 0xDEAD_BEEF_0BAD_F00D);
        let config = ChunkConfig::new(2048, 8192, 32768).unwrap();

        let iter = ChunkIter::new(Cursor::new(&data[..]), config);
        let mut rebuilt = Vec::new();
        for chunk in iter {
            rebuilt.extend_from_slice(&chunk.unwrap().data);
        }
        assert_eq!(rebuilt, data);
    }

    #[test]
    fn test_read_error_is_yielded_once() {
        struct FailingReader;

        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("broken pipe"))
            }
        }

        let mut iter = ChunkIter::new(FailingReader, ChunkConfig::default());
        assert!(matches!(iter.next(), Some(Err(ChunkError::Io(_)))));
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_into_inner() {
        let iter = ChunkIter::new(Cursor::new(vec![1u8, 2, 3]), ChunkConfig::default());
        let cursor = iter.into_inner();
        assert_eq!(cursor.into_inner(), vec![1, 2, 3]);
    }
}
