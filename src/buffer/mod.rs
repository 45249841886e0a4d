//! Internal buffer pooling for the blocking reader iterator.
//!
//! Keeps a small thread-local pool of read buffers so iterating a long
//! file does not reallocate once per read. This is an implementation
//! detail and not part of the public API.

mod pool;

pub(crate) use pool::{Buffer, DEFAULT_BUFFER_SIZE};
