//! PolymurHash 2.0 adapter.
//!
//! Key expansion happens per cycle from the drawn seed bytes; the first
//! sub-hash derives both key seeds from `seed0`, the second uses the
//! two-seed initializer directly.

use hashvex_hashes::polymur::PolymurHashParams;

use crate::adapter::{seed_u64, HashAdapter};

/// PolymurHash 2.0.
#[derive(Clone, Copy, Debug)]
pub struct PolymurHash2;

impl HashAdapter for PolymurHash2 {
    fn name(&self) -> &'static str {
        "PolymurHash 2.0"
    }

    fn seed_size(&self) -> usize {
        24
    }

    fn hash_size(&self) -> usize {
        16
    }

    fn hash(&self, seed_bytes: &[u8], data_bytes: &[u8], hash_bytes: &mut [u8]) {
        let tweak = seed_u64(seed_bytes, 0);
        let seed0 = seed_u64(seed_bytes, 8);
        let seed1 = seed_u64(seed_bytes, 16);

        let h0 = PolymurHashParams::from_seed(seed0).hash(data_bytes, tweak);
        let h1 = PolymurHashParams::new(seed0, seed1).hash(data_bytes, tweak);
        hash_bytes[..8].copy_from_slice(&h0.to_le_bytes());
        hash_bytes[8..16].copy_from_slice(&h1.to_le_bytes());
    }
}
