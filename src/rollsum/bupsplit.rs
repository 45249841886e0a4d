//! bup/Camlistore rolling checksum implementation.
//!
//! This module implements the rolling (sliding-window) checksum used by bup
//! and Camlistore for content-defined chunking.
//!
//! # Algorithm Overview
//!
//! The checksum is an adler32-style pair of accumulators maintained over a
//! fixed 64-byte window of the most recent input:
//!
//! - `s1` is the sum of the window bytes (each offset by a constant)
//! - `s2` is the sum of the running `s1` values, weighting recent bytes higher
//!
//! Both accumulators are 32-bit and wrap. Feeding one byte updates the sums
//! in O(1): the byte falling out of the window is subtracted, the new byte is
//! added. A chunk boundary is declared when the low 13 bits of `s2` are all
//! ones, which happens on average once per 8 KiB of input.
//!
//! Because the state is a pure function of the current window contents,
//! identical content produces identical boundaries wherever it appears in a
//! stream. Inserting or deleting bytes only disturbs boundaries within one
//! window of the edit.
//!
//! # References
//!
//! Ported from `bupsplit.c` in bup, itself derived from the rsync rolling
//! checksum. Camlistore's chunker uses the same constants, so boundaries are
//! interoperable between the two.

/// Number of bytes in the sliding window.
pub const WINDOW_SIZE: usize = 64;

/// Offset added to every byte before it enters the sums.
///
/// Inherited from the rsync checksum family; keeps runs of zero bytes from
/// collapsing both sums to zero.
const CHAR_OFFSET: u32 = 31;

/// Number of low `s2` bits tested by the split condition.
///
/// Expected boundary spacing is `1 << SPLIT_BITS` bytes (8 KiB).
pub const SPLIT_BITS: u32 = 13;

/// All-ones pattern over the tested bits.
const SPLIT_MASK: u32 = (1 << SPLIT_BITS) - 1;

/// bup/Camlistore rolling checksum state.
///
/// Maintains the two wrapping accumulators and the 64-byte circular window.
/// A fresh instance behaves as if 64 zero bytes had already been fed, so the
/// first real byte of a stream immediately displaces a zero.
///
/// # Determinism
///
/// Two instances fed the same byte sequence report the same [`digest`],
/// [`bits`], and [`on_split`] after every byte. This is a wire-compatibility
/// contract with bup and Camlistore: boundaries computed here match
/// boundaries computed by either of them on the same data.
///
/// [`digest`]: RollSum::digest
/// [`bits`]: RollSum::bits
/// [`on_split`]: RollSum::on_split
///
/// # Example
///
/// ```
/// use rollsplit::{RollSum, WINDOW_SIZE};
///
/// let mut rs = RollSum::new();
/// let fresh = rs.digest();
///
/// // The initial state is exactly a window full of zeros.
/// for _ in 0..WINDOW_SIZE {
///     rs.roll(0);
/// }
/// assert_eq!(rs.digest(), fresh);
/// ```
#[derive(Debug, Clone)]
pub struct RollSum {
    /// Sum of window bytes, each offset by `CHAR_OFFSET`.
    s1: u32,

    /// Sum of running `s1` values; recent bytes weigh more.
    s2: u32,

    /// Circular buffer of the last `WINDOW_SIZE` bytes.
    window: [u8; WINDOW_SIZE],

    /// Index of the oldest byte in `window` (the next to be displaced).
    wofs: usize,
}

impl RollSum {
    /// Creates a checksum in the zero-window initial state.
    ///
    /// `s1 = 64 * 31` and `s2 = 64 * 63 * 31`, the sums produced by a window
    /// of 64 zero bytes.
    pub fn new() -> Self {
        let win = WINDOW_SIZE as u32;
        Self {
            s1: win * CHAR_OFFSET,
            s2: win * (win - 1) * CHAR_OFFSET,
            window: [0u8; WINDOW_SIZE],
            wofs: 0,
        }
    }

    /// Low-level accumulator transition: `added` enters the window while
    /// `dropped` leaves it.
    ///
    /// All arithmetic wraps mod 2^32, matching the C original exactly.
    fn add(&mut self, dropped: u8, added: u8) {
        self.s1 = self
            .s1
            .wrapping_add(added as u32)
            .wrapping_sub(dropped as u32);
        self.s2 = self
            .s2
            .wrapping_add(self.s1)
            .wrapping_sub((WINDOW_SIZE as u32) * (dropped as u32 + CHAR_OFFSET));
    }

    /// Feeds one stream byte, displacing the oldest byte in the window.
    ///
    /// # Example
    ///
    /// ```
    /// use rollsplit::RollSum;
    ///
    /// let mut rs = RollSum::new();
    /// for &byte in b"the quick brown fox jumps over the lazy dog" {
    ///     rs.roll(byte);
    /// }
    /// assert_eq!(rs.digest(), 0x17b9_4942);
    /// ```
    pub fn roll(&mut self, byte: u8) {
        let dropped = self.window[self.wofs];
        self.add(dropped, byte);
        self.window[self.wofs] = byte;
        self.wofs = (self.wofs + 1) % WINDOW_SIZE;
    }

    /// Returns the combined 32-bit digest: `(s1 << 16) | (s2 & 0xffff)`.
    ///
    /// The digest is well-defined at any point, including before a full
    /// window of input has been seen.
    pub fn digest(&self) -> u32 {
        (self.s1 << 16) | (self.s2 & 0xffff)
    }

    /// Returns the split level of the current digest.
    ///
    /// Starting from [`SPLIT_BITS`], counts consecutive one bits of the
    /// digest above the split mask. Span-tree builders use the level to
    /// decide how many tree layers a boundary closes: a boundary with a
    /// higher level subsumes preceding boundaries with lower ones.
    ///
    /// The count is bounded by the digest width; an all-ones digest yields
    /// 31. Note that bit 13 of the digest does not participate: the original
    /// C loop shifts before testing, and this implementation preserves that
    /// quirk for compatibility.
    pub fn bits(&self) -> u32 {
        split_bits(self.digest())
    }

    /// Returns true if the window ends a chunk: the low [`SPLIT_BITS`] bits
    /// of `s2` are all ones.
    ///
    /// # Example
    ///
    /// ```
    /// use rollsplit::RollSum;
    ///
    /// let mut rs = RollSum::new();
    /// let mut splits = 0;
    ///
    /// // Boundaries arrive about once per 8 KiB of random input.
    /// let mut x: u64 = 0x9E3779B97F4A7C15;
    /// for _ in 0..100_000 {
    ///     x ^= x << 13;
    ///     x ^= x >> 7;
    ///     x ^= x << 17;
    ///     rs.roll((x >> 56) as u8);
    ///     if rs.on_split() {
    ///         splits += 1;
    ///     }
    /// }
    /// assert!(splits > 0);
    /// ```
    pub fn on_split(&self) -> bool {
        (self.s2 & SPLIT_MASK) == SPLIT_MASK
    }
}

impl Default for RollSum {
    fn default() -> Self {
        Self::new()
    }
}

/// Split level of a digest: `SPLIT_BITS` plus the run of one bits starting
/// just above the split mask.
///
/// Mirrors the C loop `rsum >>= 13; for (bits = 13; (rsum >>= 1) & 1; bits++)`,
/// which skips bit 13 and is bounded by the 32-bit digest width.
fn split_bits(digest: u32) -> u32 {
    SPLIT_BITS + (digest >> (SPLIT_BITS + 1)).trailing_ones()
}
