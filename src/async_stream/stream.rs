//! Async stream adapter for chunking.
//!
//! This module provides asynchronous chunking using the `futures-io::AsyncRead`
//! trait, making it runtime-agnostic and compatible with tokio, async-std,
//! smol, and other async runtimes.
//!
//! # Example
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
//!         println!("Chunk: {} bytes", chunk.len());
//!     }
//!     Ok(())
//! }
//! ```

use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures_core::Stream;
use futures_io::AsyncRead;
use pin_project_lite::pin_project;

use crate::chunk::Chunk;
use crate::chunker::Chunker;
use crate::config::ChunkConfig;
use crate::error::ChunkError;

pin_project! {
    /// A stream that yields chunks from an async reader.
    ///
    /// Wraps a [`Chunker`] around a `futures_io::AsyncRead`, so boundaries
    /// are identical to the synchronous API over the same bytes. The
    /// reader is pin-projected; `ChunkStream` works with `!Unpin` readers.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use rollsplit::{chunk_async, ChunkConfig};
    /// use futures_util::StreamExt;
    /// use futures_io::AsyncRead;
    ///
    /// async fn example<R: AsyncRead>(reader: R) -> Result<(), rollsplit::ChunkError> {
    ///     let mut stream = std::pin::pin!(chunk_async(reader, ChunkConfig::default()));
    ///
    ///     while let Some(chunk) = stream.next().await {
    ///         let chunk = chunk?;
    ///         println!("chunk: {} bytes", chunk.len());
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub struct ChunkStream<R> {
        #[pin]
        reader: R,
        chunker: Chunker,
        // Chunks completed by the last read, not yet yielded
        ready: VecDeque<Chunk>,
        buf: Vec<u8>,
        finished: bool,
    }
}

impl<R> ChunkStream<R> {
    /// Creates a new chunk stream from an async reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - An async reader implementing `AsyncRead`
    /// * `config` - The chunking configuration
    pub fn new(reader: R, config: ChunkConfig) -> Self {
        Self {
            reader,
            chunker: Chunker::new(config),
            ready: VecDeque::new(),
            buf: vec![0u8; 8192],
            finished: false,
        }
    }
}

impl<R: AsyncRead> Stream for ChunkStream<R> {
    type Item = Result<Chunk, ChunkError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        loop {
            if let Some(chunk) = this.ready.pop_front() {
                return Poll::Ready(Some(Ok(chunk)));
            }
            if *this.finished {
                return Poll::Ready(None);
            }

            match this.reader.as_mut().poll_read(cx, this.buf) {
                Poll::Pending => return Poll::Pending,
                Poll::Ready(Err(e)) => {
                    *this.finished = true;
                    return Poll::Ready(Some(Err(ChunkError::Io(e))));
                }
                Poll::Ready(Ok(0)) => {
                    // End of stream - flush the tail if any
                    *this.finished = true;
                    if let Some(tail) = this.chunker.finish() {
                        return Poll::Ready(Some(Ok(tail)));
                    }
                    return Poll::Ready(None);
                }
                Poll::Ready(Ok(n)) => {
                    let data = Bytes::copy_from_slice(&this.buf[..n]);
                    this.ready.extend(this.chunker.push(data));
                }
            }
        }
    }
}

/// Creates a chunk stream from an async reader.
///
/// Uses `futures_io::AsyncRead` for runtime-agnostic async I/O.
/// This works with any async runtime (tokio, async-std, smol, etc.).
///
/// # Runtime Compatibility
///
/// For tokio users, `tokio_util::compat` converts a
/// `tokio::io::AsyncRead` into a `futures_io::AsyncRead`:
///
/// ```ignore
/// use tokio_util::compat::TokioAsyncReadCompatExt;
/// use rollsplit::{chunk_async, ChunkConfig};
///
/// let tokio_reader = tokio::fs::File::open("file").await?;
/// let stream = chunk_async(tokio_reader.compat(), ChunkConfig::default());
/// ```
///
/// # Example
///
/// ```ignore
/// use rollsplit::{chunk_async, ChunkConfig};
/// use futures_util::StreamExt;
/// use futures_io::AsyncRead;
///
/// async fn demo<R: AsyncRead>(reader: R) -> Result<(), rollsplit::ChunkError> {
///     let mut stream = std::pin::pin!(chunk_async(reader, ChunkConfig::default()));
///
///     while let Some(chunk) = stream.next().await {
///         let chunk = chunk?;
///         println!("chunk {}", chunk.data.len());
///     }
///     Ok(())
/// }
/// ```
///
/// # Arguments
///
/// * `reader` - An async reader implementing `AsyncRead`
/// * `config` - The chunking configuration
///
/// # Returns
///
/// A [`ChunkStream`] that implements `Stream<Item = Result<Chunk, ChunkError>>`
pub fn chunk_async<R: AsyncRead>(reader: R, config: ChunkConfig) -> ChunkStream<R> {
    ChunkStream::new(reader, config)
}
