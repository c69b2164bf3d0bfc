//! rapidhash V3 adapter.

use hashvex_hashes::rapidhash::{rapidhash, rapidhash_seeded};

use crate::adapter::{seed_u64, HashAdapter};

/// rapidhash V3.
#[derive(Clone, Copy, Debug)]
pub struct Rapidhash3;

impl HashAdapter for Rapidhash3 {
    fn name(&self) -> &'static str {
        "Rapidhash 3"
    }

    fn seed_size(&self) -> usize {
        8
    }

    fn hash_size(&self) -> usize {
        16
    }

    fn hash(&self, seed_bytes: &[u8], data_bytes: &[u8], hash_bytes: &mut [u8]) {
        let seed = seed_u64(seed_bytes, 0);
        hash_bytes[..8].copy_from_slice(&rapidhash(data_bytes).to_le_bytes());
        hash_bytes[8..16].copy_from_slice(&rapidhash_seeded(data_bytes, seed).to_le_bytes());
    }
}
