//! XXH3 adapters over `xxhash-rust`, which tracks upstream xxHash
//! bit-for-bit.

use xxhash_rust::xxh3::{xxh3_128, xxh3_128_with_seed, xxh3_64, xxh3_64_with_seed};

use crate::adapter::{seed_u64, HashAdapter};

/// XXH3, 64-bit output.
#[derive(Clone, Copy, Debug)]
pub struct Xxh3_64;

impl HashAdapter for Xxh3_64 {
    fn name(&self) -> &'static str {
        "XXH3"
    }

    fn seed_size(&self) -> usize {
        8
    }

    fn hash_size(&self) -> usize {
        16
    }

    fn hash(&self, seed_bytes: &[u8], data_bytes: &[u8], hash_bytes: &mut [u8]) {
        let seed = seed_u64(seed_bytes, 0);
        hash_bytes[..8].copy_from_slice(&xxh3_64(data_bytes).to_le_bytes());
        hash_bytes[8..16].copy_from_slice(&xxh3_64_with_seed(data_bytes, seed).to_le_bytes());
    }
}

/// XXH3, 128-bit output.
#[derive(Clone, Copy, Debug)]
pub struct Xxh3_128;

impl HashAdapter for Xxh3_128 {
    fn name(&self) -> &'static str {
        "XXH3_128"
    }

    fn seed_size(&self) -> usize {
        8
    }

    fn hash_size(&self) -> usize {
        32
    }

    fn hash(&self, seed_bytes: &[u8], data_bytes: &[u8], hash_bytes: &mut [u8]) {
        let seed = seed_u64(seed_bytes, 0);
        hash_bytes[..16].copy_from_slice(&xxh3_128(data_bytes).to_le_bytes());
        hash_bytes[16..32].copy_from_slice(&xxh3_128_with_seed(data_bytes, seed).to_le_bytes());
    }
}
