//! Configuration for chunking behavior.
//!
//! This module provides types to configure how chunking is performed:
//!
//! - [`ChunkConfig`] - Controls chunk size boundaries and hashing behavior
//! - [`HashConfig`] - Specifies whether to compute cryptographic hashes
//!
//! # Example
//!
//! ```
//! use rollsplit::{ChunkConfig, HashConfig};
//!
//! // Custom chunk sizes
//! let config = ChunkConfig::new(4096, 16384, 65536)?;
//!
//! // Enable hashing
//! let config = ChunkConfig::default()
//!     .with_hash_config(HashConfig::enabled());
//!
//! # Ok::<(), rollsplit::ChunkError>(())
//! ```

use crate::error::ChunkError;

/// Default minimum chunk size (64 KiB).
pub const DEFAULT_MIN_CHUNK_SIZE: usize = 64 * 1024;

/// Default first-chunk size (256 KiB).
pub const DEFAULT_FIRST_CHUNK_SIZE: usize = 256 * 1024;

/// Default maximum chunk size (1 MiB).
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 1024 * 1024;

/// Configuration for content-defined chunking behavior.
///
/// `ChunkConfig` controls the size constraints and hashing behavior for the
/// chunking process. The rolling checksum proposes boundaries on content
/// alone; these sizes gate which proposals are honored:
///
/// - Minimum chunk size (`min_size`) - Boundaries are ignored while the
///   current chunk is no longer than this
/// - First chunk size (`first_size`) - The first chunk of a stream is cut at
///   exactly this length, so file prefixes (headers, magic numbers) land in
///   their own chunk
/// - Maximum chunk size (`max_size`) - A chunk is force-cut at this length if
///   no boundary arrived
///
/// # Size Constraints
///
/// All sizes must be:
/// - Non-zero
/// - Ordered: `min_size <= first_size <= max_size`, with `min_size < max_size`
///
/// Sizes need not be powers of two. The defaults (64 KiB / 256 KiB / 1 MiB)
/// are the sizes Camlistore uses for file chunking.
///
/// # Example
///
/// ```
/// use rollsplit::ChunkConfig;
///
/// // Use default configuration
/// let config = ChunkConfig::default();
///
/// // Custom configuration
/// let config = ChunkConfig::new(4096, 16384, 65536)?;
///
/// // Builder pattern
/// let config = ChunkConfig::default()
///     .with_min_size(8192)
///     .with_first_size(32768)
///     .with_max_size(131072);
/// # Ok::<(), rollsplit::ChunkError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkConfig {
    /// Minimum chunk size in bytes.
    min_size: usize,

    /// Forced size of the first chunk in bytes.
    first_size: usize,

    /// Maximum chunk size in bytes.
    max_size: usize,

    /// Configuration for hashing behavior.
    hash_config: HashConfig,
}

impl ChunkConfig {
    /// Creates a new configuration with the specified size bounds.
    ///
    /// # Arguments
    ///
    /// * `min_size` - Minimum chunk size in bytes
    /// * `first_size` - Forced size of the first chunk in bytes
    /// * `max_size` - Maximum chunk size in bytes
    ///
    /// # Errors
    ///
    /// Returns [`ChunkError::InvalidConfig`] if:
    /// - Any size is zero
    /// - `min_size > first_size` or `first_size > max_size`
    /// - `min_size == max_size`
    ///
    /// # Example
    ///
    /// ```
    /// use rollsplit::ChunkConfig;
    ///
    /// let config = ChunkConfig::new(4096, 16384, 65536)?;
    /// assert_eq!(config.min_size(), 4096);
    /// # Ok::<(), rollsplit::ChunkError>(())
    /// ```
    pub fn new(min_size: usize, first_size: usize, max_size: usize) -> Result<Self, ChunkError> {
        if min_size == 0 || first_size == 0 || max_size == 0 {
            return Err(ChunkError::InvalidConfig {
                message: "chunk sizes must be non-zero",
            });
        }

        if min_size > first_size {
            return Err(ChunkError::InvalidConfig {
                message: "min_size cannot be greater than first_size",
            });
        }

        if first_size > max_size {
            return Err(ChunkError::InvalidConfig {
                message: "first_size cannot be greater than max_size",
            });
        }

        if min_size == max_size {
            return Err(ChunkError::InvalidConfig {
                message: "min_size must be less than max_size",
            });
        }

        Ok(Self {
            min_size,
            first_size,
            max_size,
            hash_config: HashConfig::default(),
        })
    }

    /// Sets the minimum chunk size.
    ///
    /// Note: This does not validate the configuration. Use [`ChunkConfig::validate`]
    /// to check if the configuration is valid.
    ///
    /// # Example
    ///
    /// ```
    /// use rollsplit::ChunkConfig;
    ///
    /// let config = ChunkConfig::default().with_min_size(8192);
    /// assert_eq!(config.min_size(), 8192);
    /// ```
    pub fn with_min_size(mut self, size: usize) -> Self {
        self.min_size = size;
        self
    }

    /// Sets the first-chunk size.
    ///
    /// Note: This does not validate the configuration. Use [`ChunkConfig::validate`]
    /// to check if the configuration is valid.
    ///
    /// # Example
    ///
    /// ```
    /// use rollsplit::ChunkConfig;
    ///
    /// let config = ChunkConfig::default().with_first_size(32768);
    /// assert_eq!(config.first_size(), 32768);
    /// ```
    pub fn with_first_size(mut self, size: usize) -> Self {
        self.first_size = size;
        self
    }

    /// Sets the maximum chunk size.
    ///
    /// Note: This does not validate the configuration. Use [`ChunkConfig::validate`]
    /// to check if the configuration is valid.
    ///
    /// # Example
    ///
    /// ```
    /// use rollsplit::ChunkConfig;
    ///
    /// let config = ChunkConfig::default().with_max_size(131072);
    /// assert_eq!(config.max_size(), 131072);
    /// ```
    pub fn with_max_size(mut self, size: usize) -> Self {
        self.max_size = size;
        self
    }

    /// Sets the hash configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use rollsplit::{ChunkConfig, HashConfig};
    ///
    /// let config = ChunkConfig::default()
    ///     .with_hash_config(HashConfig::enabled());
    /// ```
    pub fn with_hash_config(mut self, config: HashConfig) -> Self {
        self.hash_config = config;
        self
    }

    /// Returns the minimum chunk size.
    pub fn min_size(&self) -> usize {
        self.min_size
    }

    /// Returns the first-chunk size.
    pub fn first_size(&self) -> usize {
        self.first_size
    }

    /// Returns the maximum chunk size.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Returns the hash configuration.
    pub fn hash_config(&self) -> &HashConfig {
        &self.hash_config
    }

    /// Validates the current configuration.
    ///
    /// Returns an error if the configuration is invalid.
    ///
    /// # Example
    ///
    /// ```
    /// use rollsplit::ChunkConfig;
    ///
    /// let config = ChunkConfig::default().with_min_size(0);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ChunkError> {
        Self::new(self.min_size, self.first_size, self.max_size).map(|_| ())
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            min_size: DEFAULT_MIN_CHUNK_SIZE,
            first_size: DEFAULT_FIRST_CHUNK_SIZE,
            max_size: DEFAULT_MAX_CHUNK_SIZE,
            hash_config: HashConfig::default(),
        }
    }
}

/// Configuration for chunk hashing behavior.
///
/// `HashConfig` controls whether BLAKE3 cryptographic hashes are computed
/// for each chunk. Hashing is enabled by default.
///
/// # Example
///
/// ```
/// use rollsplit::HashConfig;
///
/// // Enable hashing
/// let config = HashConfig::enabled();
///
/// // Disable hashing
/// let config = HashConfig::disabled();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashConfig {
    /// Whether to compute BLAKE3 hashes for chunks.
    pub enabled: bool,
}

impl HashConfig {
    /// Creates a new hash configuration.
    ///
    /// # Arguments
    ///
    /// * `enabled` - Whether to enable hashing
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Enables hashing.
    ///
    /// # Example
    ///
    /// ```
    /// use rollsplit::HashConfig;
    ///
    /// let config = HashConfig::enabled();
    /// assert!(config.enabled);
    /// ```
    pub const fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Disables hashing.
    ///
    /// # Example
    ///
    /// ```
    /// use rollsplit::HashConfig;
    ///
    /// let config = HashConfig::disabled();
    /// assert!(!config.enabled);
    /// ```
    pub const fn disabled() -> Self {
        Self { enabled: false }
    }
}

impl Default for HashConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChunkConfig::default();
        assert_eq!(config.min_size(), DEFAULT_MIN_CHUNK_SIZE);
        assert_eq!(config.first_size(), DEFAULT_FIRST_CHUNK_SIZE);
        assert_eq!(config.max_size(), DEFAULT_MAX_CHUNK_SIZE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ChunkConfig::default()
            .with_min_size(8192)
            .with_first_size(32768)
            .with_max_size(131072);

        assert_eq!(config.min_size(), 8192);
        assert_eq!(config.first_size(), 32768);
        assert_eq!(config.max_size(), 131072);
    }

    #[test]
    fn test_non_power_of_two_sizes_are_valid() {
        let config = ChunkConfig::new(1000, 5000, 20000);
        assert!(config.is_ok());
    }

    #[test]
    fn test_invalid_config_zero_size() {
        let result = ChunkConfig::new(0, 16384, 65536);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_config_min_gt_first() {
        let result = ChunkConfig::new(32768, 16384, 65536);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_config_first_gt_max() {
        let result = ChunkConfig::new(4096, 65536, 16384);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_config_min_eq_max() {
        let result = ChunkConfig::new(4096, 4096, 4096);
        assert!(result.is_err());
    }

    #[test]
    fn test_hash_config() {
        let config = HashConfig::default();
        assert!(config.enabled);

        let config = HashConfig::disabled();
        assert!(!config.enabled);
    }
}
