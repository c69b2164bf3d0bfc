//! ChibiHash v2 adapter.

use hashvex_hashes::chibihash::chibihash64;

use crate::adapter::{seed_u64, HashAdapter};

/// ChibiHash v2.
#[derive(Clone, Copy, Debug)]
pub struct ChibiHash2;

impl HashAdapter for ChibiHash2 {
    fn name(&self) -> &'static str {
        "ChibiHash 2"
    }

    fn seed_size(&self) -> usize {
        8
    }

    fn hash_size(&self) -> usize {
        16
    }

    fn hash(&self, seed_bytes: &[u8], data_bytes: &[u8], hash_bytes: &mut [u8]) {
        let seed = seed_u64(seed_bytes, 0);
        hash_bytes[..8].copy_from_slice(&chibihash64(data_bytes, 0).to_le_bytes());
        hash_bytes[8..16].copy_from_slice(&chibihash64(data_bytes, seed).to_le_bytes());
    }
}
