//! MurmurHash3 adapters.
//!
//! Both variants take a 32-bit seed and cap the input length at
//! `i32::MAX`: the upstream reference signature uses a signed `int`
//! length, so the extreme schedule rows do not exist for them.

use hashvex_hashes::murmur3::{murmur3_x64_128, murmur3_x86_32};

use crate::adapter::{seed_u32, HashAdapter};

/// MurmurHash3 x86 32-bit.
#[derive(Clone, Copy, Debug)]
pub struct Murmur3_32;

impl HashAdapter for Murmur3_32 {
    fn name(&self) -> &'static str {
        "Murmur3 32"
    }

    fn seed_size(&self) -> usize {
        4
    }

    fn hash_size(&self) -> usize {
        8
    }

    fn max_data_length(&self) -> Option<u64> {
        Some(i32::MAX as u64)
    }

    fn hash(&self, seed_bytes: &[u8], data_bytes: &[u8], hash_bytes: &mut [u8]) {
        let seed = seed_u32(seed_bytes, 0);
        hash_bytes[..4].copy_from_slice(&murmur3_x86_32(data_bytes, 0).to_le_bytes());
        hash_bytes[4..8].copy_from_slice(&murmur3_x86_32(data_bytes, seed).to_le_bytes());
    }
}

/// MurmurHash3 x64 128-bit.
#[derive(Clone, Copy, Debug)]
pub struct Murmur3_128;

impl HashAdapter for Murmur3_128 {
    fn name(&self) -> &'static str {
        "Murmur3 128"
    }

    fn seed_size(&self) -> usize {
        4
    }

    fn hash_size(&self) -> usize {
        32
    }

    fn max_data_length(&self) -> Option<u64> {
        Some(i32::MAX as u64)
    }

    fn hash(&self, seed_bytes: &[u8], data_bytes: &[u8], hash_bytes: &mut [u8]) {
        let seed = seed_u32(seed_bytes, 0);
        hash_bytes[..16].copy_from_slice(&murmur3_x64_128(data_bytes, 0));
        hash_bytes[16..32].copy_from_slice(&murmur3_x64_128(data_bytes, seed));
    }
}
