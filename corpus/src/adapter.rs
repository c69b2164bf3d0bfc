//! The algorithm adapter seam.
//!
//! Each supported algorithm-version is wrapped in a [`HashAdapter`] that
//! fixes the seed layout, the sub-hash concatenation and the output width.
//! The protocol core only ever sees byte slices.

/// A hash algorithm-version under test.
///
/// Implementations must be pure: the same `(seed_bytes, data_bytes)` pair
/// always produces the same `hash_bytes`, with no interior state.
pub trait HashAdapter: Send + Sync {
    /// Display name; doubles as the output file stem (spaces and dots are
    /// literal, e.g. `Komihash 5.10`).
    fn name(&self) -> &'static str;

    /// Number of seed bytes consumed per cycle.
    fn seed_size(&self) -> usize;

    /// Number of hash bytes produced per cycle.
    fn hash_size(&self) -> usize;

    /// Upper bound on the input length, if the algorithm has one.
    ///
    /// Schedule entries above the bound are skipped entirely.
    fn max_data_length(&self) -> Option<u64> {
        None
    }

    /// Computes the concatenated sub-hashes of `data_bytes` under
    /// `seed_bytes` into `hash_bytes`.
    ///
    /// `seed_bytes.len() == self.seed_size()` and
    /// `hash_bytes.len() == self.hash_size()`; every output byte is
    /// written.
    fn hash(&self, seed_bytes: &[u8], data_bytes: &[u8], hash_bytes: &mut [u8]);
}

/// Reads a `u64` seed field at byte offset `off`, little-endian.
#[inline]
pub(crate) fn seed_u64(seed_bytes: &[u8], off: usize) -> u64 {
    let mut b = [0u8; 8];
    b.copy_from_slice(&seed_bytes[off..off + 8]);
    u64::from_le_bytes(b)
}

/// Reads a `u32` seed field at byte offset `off`, little-endian.
#[inline]
pub(crate) fn seed_u32(seed_bytes: &[u8], off: usize) -> u32 {
    let mut b = [0u8; 4];
    b.copy_from_slice(&seed_bytes[off..off + 4]);
    u32::from_le_bytes(b)
}
