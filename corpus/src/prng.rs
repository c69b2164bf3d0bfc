//! SplitMix64 and the word-to-byte buffer contract.
//!
//! SplitMix64 (Steele, Lea, Flood; public domain) drives all per-length
//! input generation. Buffers are filled one 64-bit word at a time and
//! serialized little-endian; a buffer of `n` bytes consumes exactly
//! `ceil(n / 8)` words regardless of how many trailing bytes of the last
//! word are actually used. That consumption count is part of the vector
//! format and must never change.

/// SplitMix64 generator.
#[derive(Clone, Debug)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Creates a generator with the given initial state.
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Fills `buf` with `ceil(buf.len() / 8)` words, little-endian.
    ///
    /// The last word is drawn in full even when only part of it lands in
    /// the buffer.
    pub fn fill_le_bytes(&mut self, buf: &mut [u8]) {
        for chunk in buf.chunks_mut(8) {
            let word = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splitmix64_reference_vectors() {
        let mut rng = SplitMix64::new(0);
        assert_eq!(rng.next_u64(), 0xe220_a839_7b1d_cdaf);
        assert_eq!(rng.next_u64(), 0x6e78_9e6a_a1b9_65f4);
        assert_eq!(rng.next_u64(), 0x06c4_5d18_8009_454f);
    }

    #[test]
    fn fill_is_little_endian_word_truncation() {
        let mut a = SplitMix64::new(42);
        let mut b = SplitMix64::new(42);
        let mut long = [0u8; 16];
        a.fill_le_bytes(&mut long);
        let mut short = [0u8; 11];
        b.fill_le_bytes(&mut short);
        assert_eq!(&long[..11], &short[..]);
        // Both consumed two words.
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn fill_of_empty_buffer_draws_nothing() {
        let mut a = SplitMix64::new(7);
        let mut b = SplitMix64::new(7);
        a.fill_le_bytes(&mut []);
        assert_eq!(a.next_u64(), b.next_u64());
    }
}
