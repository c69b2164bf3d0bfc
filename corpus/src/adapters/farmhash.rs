//! FarmHash adapters over the NA and UO 64-bit entry points.

use hashvex_hashes::farmhash::{na, uo};

use crate::adapter::{seed_u64, HashAdapter};

/// FarmHash NA (`farmhashna::Hash64` family).
#[derive(Clone, Copy, Debug)]
pub struct FarmHashNa;

impl HashAdapter for FarmHashNa {
    fn name(&self) -> &'static str {
        "FarmHash NA"
    }

    fn seed_size(&self) -> usize {
        24
    }

    fn hash_size(&self) -> usize {
        24
    }

    fn hash(&self, seed_bytes: &[u8], data_bytes: &[u8], hash_bytes: &mut [u8]) {
        let seed = seed_u64(seed_bytes, 0);
        let seed0 = seed_u64(seed_bytes, 8);
        let seed1 = seed_u64(seed_bytes, 16);
        hash_bytes[..8].copy_from_slice(&na::hash64(data_bytes).to_le_bytes());
        hash_bytes[8..16].copy_from_slice(&na::hash64_with_seed(data_bytes, seed).to_le_bytes());
        hash_bytes[16..24]
            .copy_from_slice(&na::hash64_with_seeds(data_bytes, seed0, seed1).to_le_bytes());
    }
}

/// FarmHash UO (`farmhashuo::Hash64` family).
#[derive(Clone, Copy, Debug)]
pub struct FarmHashUo;

impl HashAdapter for FarmHashUo {
    fn name(&self) -> &'static str {
        "FarmHash UO"
    }

    fn seed_size(&self) -> usize {
        24
    }

    fn hash_size(&self) -> usize {
        24
    }

    fn hash(&self, seed_bytes: &[u8], data_bytes: &[u8], hash_bytes: &mut [u8]) {
        let seed = seed_u64(seed_bytes, 0);
        let seed0 = seed_u64(seed_bytes, 8);
        let seed1 = seed_u64(seed_bytes, 16);
        hash_bytes[..8].copy_from_slice(&uo::hash64(data_bytes).to_le_bytes());
        hash_bytes[8..16].copy_from_slice(&uo::hash64_with_seed(data_bytes, seed).to_le_bytes());
        hash_bytes[16..24]
            .copy_from_slice(&uo::hash64_with_seeds(data_bytes, seed0, seed1).to_le_bytes());
    }
}
