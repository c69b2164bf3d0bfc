//! komihash adapters, one per pinned release tag.

use hashvex_hashes::komihash::{v4_3, v4_5, v4_7, v5_0, v5_10, v5_26};

use crate::adapter::{seed_u64, HashAdapter};

/// A komihash release tag.
#[derive(Clone, Copy, Debug)]
pub enum Komihash {
    V4_3,
    V4_5,
    V4_7,
    V5_0,
    V5_10,
    V5_26,
}

impl Komihash {
    /// The underlying hash function for this tag.
    pub fn hash_fn(self) -> fn(&[u8], u64) -> u64 {
        match self {
            Self::V4_3 => v4_3::komihash,
            Self::V4_5 => v4_5::komihash,
            Self::V4_7 => v4_7::komihash,
            Self::V5_0 => v5_0::komihash,
            Self::V5_10 => v5_10::komihash,
            Self::V5_26 => v5_26::komihash,
        }
    }
}

impl HashAdapter for Komihash {
    fn name(&self) -> &'static str {
        match self {
            Self::V4_3 => "Komihash 4.3",
            Self::V4_5 => "Komihash 4.5",
            Self::V4_7 => "Komihash 4.7",
            Self::V5_0 => "Komihash 5.0",
            Self::V5_10 => "Komihash 5.10",
            Self::V5_26 => "Komihash 5.26",
        }
    }

    fn seed_size(&self) -> usize {
        8
    }

    fn hash_size(&self) -> usize {
        16
    }

    fn hash(&self, seed_bytes: &[u8], data_bytes: &[u8], hash_bytes: &mut [u8]) {
        let f = self.hash_fn();
        let seed = seed_u64(seed_bytes, 0);
        hash_bytes[..8].copy_from_slice(&f(data_bytes, 0).to_le_bytes());
        hash_bytes[8..16].copy_from_slice(&f(data_bytes, seed).to_le_bytes());
    }
}
