//! Per-length digest accumulation.
//!
//! For one schedule entry: a fresh SplitMix64 seeded from the outer
//! stream, then per cycle a seed draw **followed by** a data draw, one
//! adapter call, and all `hash_size` bytes folded into a running SHA-256.
//! The seed-before-data order is part of the vector format.

use sha2::{Digest, Sha256};

use crate::adapter::HashAdapter;
use crate::prng::SplitMix64;
use crate::schedule::LengthEntry;

/// Computes the 32-byte digest for one schedule entry.
///
/// Allocates the full data buffer up front; the extreme lengths near
/// 2^32 are genuine multi-gigabyte allocations.
pub fn length_checksum(
    adapter: &dyn HashAdapter,
    outer_seed: u64,
    entry: LengthEntry,
) -> [u8; 32] {
    let mut rng = SplitMix64::new(outer_seed);
    let mut sha = Sha256::new();

    let seed_size = adapter.seed_size();
    let seed_words = seed_size.div_ceil(8);
    let data_len = usize::try_from(entry.data_length).unwrap_or(usize::MAX);
    let data_words = data_len.div_ceil(8);

    let mut seed_buf = vec![0u8; seed_words * 8];
    let mut data_buf = vec![0u8; data_words * 8];
    let mut hash_buf = vec![0u8; adapter.hash_size()];

    for _ in 0..entry.cycles {
        rng.fill_le_bytes(&mut seed_buf);
        rng.fill_le_bytes(&mut data_buf);
        adapter.hash(&seed_buf[..seed_size], &data_buf[..data_len], &mut hash_buf);
        sha.update(&hash_buf);
    }

    sha.finalize().into()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::adapters;

    #[test]
    fn digest_is_deterministic() {
        let adapter = adapters::find("XXH3").unwrap();
        let entry = LengthEntry { data_length: 17, cycles: 100 };
        assert_eq!(
            length_checksum(adapter.as_ref(), 0xdead_beef, entry),
            length_checksum(adapter.as_ref(), 0xdead_beef, entry),
        );
    }

    #[test]
    fn digest_depends_on_outer_seed_and_entry() {
        let adapter = adapters::find("ChibiHash 2").unwrap();
        let entry = LengthEntry { data_length: 5, cycles: 3 };
        let base = length_checksum(adapter.as_ref(), 1, entry);
        assert_ne!(base, length_checksum(adapter.as_ref(), 2, entry));
        assert_ne!(
            base,
            length_checksum(adapter.as_ref(), 1, LengthEntry { data_length: 6, cycles: 3 }),
        );
        assert_ne!(
            base,
            length_checksum(adapter.as_ref(), 1, LengthEntry { data_length: 5, cycles: 4 }),
        );
    }

    #[test]
    fn first_cycle_matches_manual_construction() {
        // Murmur3 128: 4 seed bytes (one word) then 8 data bytes (one word).
        let adapter = adapters::find("Murmur3 128").unwrap();
        let outer_seed = 0x1234_5678_9abc_def0u64;
        let entry = LengthEntry { data_length: 8, cycles: 1 };

        let mut rng = SplitMix64::new(outer_seed);
        let seed_word = rng.next_u64().to_le_bytes();
        let data_word = rng.next_u64().to_le_bytes();
        let mut expected_hash = [0u8; 32];
        adapter.hash(&seed_word[..4], &data_word, &mut expected_hash);
        let expected: [u8; 32] = Sha256::digest(expected_hash).into();

        assert_eq!(length_checksum(adapter.as_ref(), outer_seed, entry), expected);
    }
}
