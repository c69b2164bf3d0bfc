//! wyhash adapters for the final 3 and final 4 releases.

use hashvex_hashes::wyhash::{final3, final4};

use crate::adapter::{seed_u64, HashAdapter};

/// wyhash final 3: four sub-hash slots, the last two populated only for
/// roughly one seed in 64.
///
/// `rand` (seed bytes 16..24) gates the custom-secret slots: when
/// `(rand & 0x3f) == 0` a secret is derived from `seed2` and the data is
/// hashed twice more under it; otherwise both slots stay zero. The
/// asymmetry is part of the published vectors and must be reproduced
/// exactly.
#[derive(Clone, Copy, Debug)]
pub struct WyhashFinal3;

impl HashAdapter for WyhashFinal3 {
    fn name(&self) -> &'static str {
        "Wyhash final 3"
    }

    fn seed_size(&self) -> usize {
        24
    }

    fn hash_size(&self) -> usize {
        32
    }

    fn hash(&self, seed_bytes: &[u8], data_bytes: &[u8], hash_bytes: &mut [u8]) {
        let seed1 = seed_u64(seed_bytes, 0);
        let seed2 = seed_u64(seed_bytes, 8);
        let rand = seed_u64(seed_bytes, 16);

        let h0 = final3::wyhash(data_bytes, 0, &final3::WYP);
        let h1 = final3::wyhash(data_bytes, seed1, &final3::WYP);
        hash_bytes[..8].copy_from_slice(&h0.to_le_bytes());
        hash_bytes[8..16].copy_from_slice(&h1.to_le_bytes());

        if rand & 0x3f == 0 {
            let secret = final3::make_secret(seed2);
            let h2 = final3::wyhash(data_bytes, 0, &secret);
            let h3 = final3::wyhash(data_bytes, seed1, &secret);
            hash_bytes[16..24].copy_from_slice(&h2.to_le_bytes());
            hash_bytes[24..32].copy_from_slice(&h3.to_le_bytes());
        } else {
            hash_bytes[16..32].fill(0);
        }
    }
}

/// wyhash final 4: unseeded default-secret hash plus a seeded hash under a
/// per-cycle derived secret.
#[derive(Clone, Copy, Debug)]
pub struct WyhashFinal4;

impl HashAdapter for WyhashFinal4 {
    fn name(&self) -> &'static str {
        "Wyhash final 4"
    }

    fn seed_size(&self) -> usize {
        16
    }

    fn hash_size(&self) -> usize {
        16
    }

    fn hash(&self, seed_bytes: &[u8], data_bytes: &[u8], hash_bytes: &mut [u8]) {
        let seed = seed_u64(seed_bytes, 0);
        let seed_for_secret = seed_u64(seed_bytes, 8);

        let h0 = final4::wyhash(data_bytes, 0, &final4::WYP);
        let secret = final4::make_secret(seed_for_secret);
        let h1 = final4::wyhash(data_bytes, seed, &secret);
        hash_bytes[..8].copy_from_slice(&h0.to_le_bytes());
        hash_bytes[8..16].copy_from_slice(&h1.to_le_bytes());
    }
}

// =============================================================================
// TESTS
// =============================================================================
