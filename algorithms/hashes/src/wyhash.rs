//! wyhash (Wang Yi, public domain), ported at two release tags.
//!
//! [`final3`] is the `wyhash_final_3` tag and [`final4`] the
//! `wyhash_final_4` tag. The two differ in their default secrets, in the
//! seed pre-mix and in the finalization, so they are kept as separate
//! modules rather than parameterized.

use crate::bytes::{read_u32, read_u64};

// =============================================================================
// SHARED PRIMITIVES
// =============================================================================

#[inline(always)]
fn wymum(a: u64, b: u64) -> (u64, u64) {
    let r = u128::from(a) * u128::from(b);
    (r as u64, (r >> 64) as u64)
}

#[inline(always)]
fn wymix(a: u64, b: u64) -> u64 {
    let (lo, hi) = wymum(a, b);
    lo ^ hi
}

#[inline(always)]
fn wyr3(p: &[u8], k: usize) -> u64 {
    (u64::from(p[0]) << 16) | (u64::from(p[k >> 1]) << 8) | u64::from(p[k - 1])
}

#[inline(always)]
fn wyr4(p: &[u8], i: usize) -> u64 {
    u64::from(read_u32(p, i))
}

/// The 70 byte values with exactly four bits set, used by `make_secret`
/// candidate generation in both release tags.
const SECRET_BYTES: [u8; 70] = [
    15, 23, 27, 29, 30, 39, 43, 45, 46, 51, 53, 54, 57, 58, 60, 71, 75, 77, 78, 83, 85, 86, 89,
    90, 92, 99, 101, 102, 105, 106, 108, 113, 114, 116, 120, 135, 139, 141, 142, 147, 149, 150,
    153, 154, 156, 163, 165, 166, 169, 170, 172, 177, 178, 180, 184, 195, 197, 198, 201, 202,
    204, 209, 210, 212, 216, 225, 226, 228, 232, 240,
];

#[inline(always)]
fn wyrand(seed: &mut u64) -> u64 {
    *seed = seed.wrapping_add(0xa076_1d64_78bd_642f);
    wymix(*seed, *seed ^ 0xe703_7ed1_a0b4_28db)
}

fn generate_secret(mut seed: u64) -> [u64; 4] {
    let mut secret = [0u64; 4];
    for i in 0..4 {
        'candidate: loop {
            secret[i] = 0;
            for j in (0..64).step_by(8) {
                let idx = (wyrand(&mut seed) as usize) % SECRET_BYTES.len();
                secret[i] |= u64::from(SECRET_BYTES[idx]) << j;
            }
            if secret[i] % 2 == 0 {
                continue 'candidate;
            }
            for j in 0..i {
                if (secret[j] ^ secret[i]).count_ones() != 32 {
                    continue 'candidate;
                }
            }
            break;
        }
    }
    secret
}

/// Reads `a` and `b` for the common small/bulk key paths; identical in both
/// tags.
#[inline(always)]
fn read_ab(data: &[u8], seed: &mut u64, secret: &[u64; 4]) -> (u64, u64) {
    let len = data.len();
    if len <= 16 {
        if len >= 4 {
            let a = (wyr4(data, 0) << 32) | wyr4(data, (len >> 3) << 2);
            let b = (wyr4(data, len - 4) << 32) | wyr4(data, len - 4 - ((len >> 3) << 2));
            (a, b)
        } else if len > 0 {
            (wyr3(data, len), 0)
        } else {
            (0, 0)
        }
    } else {
        let mut i = len;
        let mut p = 0usize;
        if i > 48 {
            let mut see1 = *seed;
            let mut see2 = *seed;
            loop {
                *seed = wymix(read_u64(data, p) ^ secret[1], read_u64(data, p + 8) ^ *seed);
                see1 = wymix(read_u64(data, p + 16) ^ secret[2], read_u64(data, p + 24) ^ see1);
                see2 = wymix(read_u64(data, p + 32) ^ secret[3], read_u64(data, p + 40) ^ see2);
                p += 48;
                i -= 48;
                if i <= 48 {
                    break;
                }
            }
            *seed ^= see1 ^ see2;
        }
        while i > 16 {
            *seed = wymix(read_u64(data, p) ^ secret[1], read_u64(data, p + 8) ^ *seed);
            i -= 16;
            p += 16;
        }
        (read_u64(data, p + i - 16), read_u64(data, p + i - 8))
    }
}

// =============================================================================
// FINAL 3
// =============================================================================

/// `wyhash_final_3` tag.
pub mod final3 {
    use super::{generate_secret, read_ab, wymix};

    /// Default secret `_wyp`.
    pub const WYP: [u64; 4] = [
        0xa076_1d64_78bd_642f,
        0xe703_7ed1_a0b4_28db,
        0x8ebc_6af0_9c88_c6e3,
        0x5899_65cc_7537_4cc3,
    ];

    /// `wyhash(key, len, seed, secret)`.
    #[must_use]
    pub fn wyhash(data: &[u8], seed: u64, secret: &[u64; 4]) -> u64 {
        let len = data.len() as u64;
        let mut seed = seed ^ secret[0];
        let (a, b) = read_ab(data, &mut seed, secret);
        wymix(secret[1] ^ len, wymix(a ^ secret[1], b ^ seed))
    }

    /// `make_secret(seed, secret)`.
    #[must_use]
    pub fn make_secret(seed: u64) -> [u64; 4] {
        generate_secret(seed)
    }
}

// =============================================================================
// FINAL 4
// =============================================================================

/// `wyhash_final_4` tag.
pub mod final4 {
    use super::{generate_secret, read_ab, wymix, wymum};

    /// Default secret `_wyp`.
    pub const WYP: [u64; 4] = [
        0x2d35_8dcc_aa6c_78a5,
        0x8bb8_4b93_962e_acc9,
        0x4b33_a62e_d433_d4a3,
        0x4d5a_2da5_1de1_aa47,
    ];

    /// `wyhash(key, len, seed, secret)`.
    #[must_use]
    pub fn wyhash(data: &[u8], seed: u64, secret: &[u64; 4]) -> u64 {
        let len = data.len() as u64;
        let mut seed = seed ^ wymix(seed ^ secret[0], secret[1]);
        let (mut a, mut b) = read_ab(data, &mut seed, secret);
        a ^= secret[1];
        b ^= seed;
        let (lo, hi) = wymum(a, b);
        a = lo;
        b = hi;
        wymix(a ^ secret[0] ^ len, b ^ secret[1])
    }

    /// `make_secret(seed, secret)`.
    #[must_use]
    pub fn make_secret(seed: u64) -> [u64; 4] {
        generate_secret(seed)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // Vectors from the upstream test_vectors list; unchanged since final 1.
    #[test]
    fn final3_reference_vectors() {
        assert_eq!(final3::wyhash(b"", 0, &final3::WYP), 0x42bc986dc5eec4d3);
        assert_eq!(final3::wyhash(b"a", 1, &final3::WYP), 0x84508dc903c31551);
        assert_eq!(final3::wyhash(b"abc", 2, &final3::WYP), 0x0bc54887cfc9ecb1);
        assert_eq!(
            final3::wyhash(b"message digest", 3, &final3::WYP),
            0x6e2ff3298208a67c
        );
        assert_eq!(
            final3::wyhash(b"abcdefghijklmnopqrstuvwxyz", 4, &final3::WYP),
            0x9a64e42e897195b9
        );
        assert_eq!(
            final3::wyhash(
                b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
                5,
                &final3::WYP
            ),
            0x9199383239c32554
        );
        assert_eq!(
            final3::wyhash(
                b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
                6,
                &final3::WYP
            ),
            0x7c1ccf6bba30f5a5
        );
    }

    #[test]
    fn make_secret_properties() {
        // All limbs odd, pairwise hamming distance 32, and stable per seed.
        for seed in [0u64, 1, 0xdead_beef] {
            let s3 = final3::make_secret(seed);
            assert_eq!(s3, final3::make_secret(seed));
            for i in 0..4 {
                assert_eq!(s3[i] % 2, 1);
                for j in 0..i {
                    assert_eq!((s3[i] ^ s3[j]).count_ones(), 32);
                }
            }
        }
    }

    #[test]
    fn final4_is_deterministic_and_length_sensitive() {
        let data = vec![0x42u8; 100];
        for l in [0usize, 1, 3, 4, 8, 16, 17, 48, 49, 96, 100] {
            let h = final4::wyhash(&data[..l], 9, &final4::WYP);
            assert_eq!(h, final4::wyhash(&data[..l], 9, &final4::WYP));
            if l > 0 {
                assert_ne!(h, final4::wyhash(&data[..l - 1], 9, &final4::WYP));
            }
        }
    }
}
