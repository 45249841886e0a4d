//! Rolling checksum for content-defined boundary detection.
//!
//! This module contains the core algorithm for identifying chunk boundaries
//! based on content patterns rather than fixed sizes.
//!
//! - [`RollSum`] - bup/Camlistore rolling checksum implementation

mod bupsplit;

pub use bupsplit::{RollSum, SPLIT_BITS, WINDOW_SIZE};
