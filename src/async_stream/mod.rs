//! Async streaming support for chunking.
//!
//! This module provides asynchronous chunking using the `futures-io::AsyncRead`
//! trait, making it runtime-agnostic and compatible with tokio, async-std,
//! smol, and other async runtimes.
//!
//! - [`ChunkStream`] - A `Stream` of chunks driven by an async reader
//! - [`chunk_async`] - Creates a [`ChunkStream`] from an async reader
//!
//! This module requires the `async-io` feature to be enabled.

mod stream;

pub use stream::{chunk_async, ChunkStream};
