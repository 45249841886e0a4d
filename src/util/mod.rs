//! Internal utility functions and helpers.
//!
//! This module contains small helper functions used throughout the crate.
//! It is an implementation detail and not part of the public API.

use bytes::Bytes;

/// Combines two byte slices into a new Bytes object.
///
/// Used when pending bytes held over from an earlier push must be joined
/// with new data to form a complete chunk.
pub(crate) fn combine_bytes(a: &Bytes, b: &[u8]) -> Bytes {
    let mut combined = Vec::with_capacity(a.len() + b.len());
    combined.extend_from_slice(a);
    combined.extend_from_slice(b);
    Bytes::from(combined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_bytes() {
        let a = Bytes::from_static(b"hello ");
        let combined = combine_bytes(&a, b"world");
        assert_eq!(combined.as_ref(), b"hello world");
    }

    #[test]
    fn test_combine_with_empty() {
        let a = Bytes::new();
        let combined = combine_bytes(&a, b"tail");
        assert_eq!(combined.as_ref(), b"tail");
    }
}
