//! FarmHash (Geoff Pike, MIT), ported from `farmhash.cc`: the `farmhashna`
//! and `farmhashuo` 64-bit families.
//!
//! `uo` delegates to `na` for inputs up to 64 bytes, exactly as upstream.

use crate::bytes::{read_u32, read_u64};

const K0: u64 = 0xc3a5_c85c_97cb_3127;
const K1: u64 = 0xb492_b66f_be98_f273;
const K2: u64 = 0x9ae1_6a3b_2f90_404f;

#[inline(always)]
fn shift_mix(v: u64) -> u64 {
    v ^ (v >> 47)
}

#[inline(always)]
fn hash_len_16_mul(u: u64, v: u64, mul: u64) -> u64 {
    let mut a = (u ^ v).wrapping_mul(mul);
    a ^= a >> 47;
    let mut b = (v ^ a).wrapping_mul(mul);
    b ^= b >> 47;
    b.wrapping_mul(mul)
}

#[inline(always)]
fn rot(v: u64, r: u32) -> u64 {
    v.rotate_right(r)
}

// =============================================================================
// NA
// =============================================================================

/// `farmhashna` entry points.
pub mod na {
    use super::{hash_len_16_mul, read_u32, read_u64, rot, shift_mix, K0, K1, K2};

    fn hash_len_0_to_16(s: &[u8]) -> u64 {
        let len = s.len();
        if len >= 8 {
            let mul = K2.wrapping_add((len as u64).wrapping_mul(2));
            let a = read_u64(s, 0).wrapping_add(K2);
            let b = read_u64(s, len - 8);
            let c = rot(b, 37).wrapping_mul(mul).wrapping_add(a);
            let d = rot(a, 25).wrapping_add(b).wrapping_mul(mul);
            return hash_len_16_mul(c, d, mul);
        }
        if len >= 4 {
            let mul = K2.wrapping_add((len as u64).wrapping_mul(2));
            let a = u64::from(read_u32(s, 0));
            return hash_len_16_mul(
                (len as u64).wrapping_add(a << 3),
                u64::from(read_u32(s, len - 4)),
                mul,
            );
        }
        if len > 0 {
            let a = u64::from(s[0]);
            let b = u64::from(s[len >> 1]);
            let c = u64::from(s[len - 1]);
            let y = a.wrapping_add(b << 8);
            let z = (len as u64).wrapping_add(c << 2);
            return shift_mix(y.wrapping_mul(K2) ^ z.wrapping_mul(K0)).wrapping_mul(K2);
        }
        K2
    }

    fn hash_len_17_to_32(s: &[u8]) -> u64 {
        let len = s.len();
        let mul = K2.wrapping_add((len as u64).wrapping_mul(2));
        let a = read_u64(s, 0).wrapping_mul(K1);
        let b = read_u64(s, 8);
        let c = read_u64(s, len - 8).wrapping_mul(mul);
        let d = read_u64(s, len - 16).wrapping_mul(K2);
        hash_len_16_mul(
            rot(a.wrapping_add(b), 43)
                .wrapping_add(rot(c, 30))
                .wrapping_add(d),
            a.wrapping_add(rot(b.wrapping_add(K2), 18)).wrapping_add(c),
            mul,
        )
    }

    fn hash_len_33_to_64(s: &[u8]) -> u64 {
        let len = s.len();
        let mul = K2.wrapping_add((len as u64).wrapping_mul(2));
        let a = read_u64(s, 0).wrapping_mul(K2);
        let b = read_u64(s, 8);
        let c = read_u64(s, len - 8).wrapping_mul(mul);
        let d = read_u64(s, len - 16).wrapping_mul(K2);
        let y = rot(a.wrapping_add(b), 43)
            .wrapping_add(rot(c, 30))
            .wrapping_add(d);
        let z = hash_len_16_mul(
            y,
            a.wrapping_add(rot(b.wrapping_add(K2), 18)).wrapping_add(c),
            mul,
        );
        let e = read_u64(s, 16).wrapping_mul(mul);
        let f = read_u64(s, 24);
        let g = y.wrapping_add(read_u64(s, len - 32)).wrapping_mul(mul);
        let h = z.wrapping_add(read_u64(s, len - 24)).wrapping_mul(mul);
        hash_len_16_mul(
            rot(e.wrapping_add(f), 43)
                .wrapping_add(rot(g, 30))
                .wrapping_add(h),
            e.wrapping_add(rot(f.wrapping_add(a), 18)).wrapping_add(g),
            mul,
        )
    }

    pub(super) fn weak_hash_len_32_with_seeds(
        s: &[u8],
        off: usize,
        a0: u64,
        b0: u64,
    ) -> (u64, u64) {
        let w = read_u64(s, off);
        let x = read_u64(s, off + 8);
        let y = read_u64(s, off + 16);
        let z = read_u64(s, off + 24);
        let mut a = a0.wrapping_add(w);
        let mut b = rot(b0.wrapping_add(a).wrapping_add(z), 21);
        let c = a;
        a = a.wrapping_add(x);
        a = a.wrapping_add(y);
        b = b.wrapping_add(rot(a, 44));
        (a.wrapping_add(z), b.wrapping_add(c))
    }

    /// `farmhashna::Hash64`.
    #[must_use]
    pub fn hash64(s: &[u8]) -> u64 {
        let len = s.len();
        const SEED: u64 = 81;
        if len <= 16 {
            return hash_len_0_to_16(s);
        }
        if len <= 32 {
            return hash_len_17_to_32(s);
        }
        if len <= 64 {
            return hash_len_33_to_64(s);
        }

        // For strings over 64 bytes we loop; internal state is 56 bytes.
        let mut x = SEED;
        let mut y = SEED.wrapping_mul(K1).wrapping_add(113);
        let mut z = shift_mix(y.wrapping_mul(K2).wrapping_add(113)).wrapping_mul(K2);
        let mut v = (0u64, 0u64);
        let mut w = (0u64, 0u64);
        x = x.wrapping_mul(K2).wrapping_add(read_u64(s, 0));

        let end = ((len - 1) / 64) * 64;
        let last64 = len - 64;
        let mut p = 0usize;
        loop {
            x = rot(
                x.wrapping_add(y)
                    .wrapping_add(v.0)
                    .wrapping_add(read_u64(s, p + 8)),
                37,
            )
            .wrapping_mul(K1);
            y = rot(y.wrapping_add(v.1).wrapping_add(read_u64(s, p + 48)), 42).wrapping_mul(K1);
            x ^= w.1;
            y = y.wrapping_add(v.0).wrapping_add(read_u64(s, p + 40));
            z = rot(z.wrapping_add(w.0), 33).wrapping_mul(K1);
            v = weak_hash_len_32_with_seeds(s, p, v.1.wrapping_mul(K1), x.wrapping_add(w.0));
            w = weak_hash_len_32_with_seeds(
                s,
                p + 32,
                z.wrapping_add(w.1),
                y.wrapping_add(read_u64(s, p + 16)),
            );
            core::mem::swap(&mut z, &mut x);
            p += 64;
            if p == end {
                break;
            }
        }
        let mul = K1.wrapping_add((z & 0xff) << 1);
        let p = last64;
        w.0 = w.0.wrapping_add(((len - 1) & 63) as u64);
        v.0 = v.0.wrapping_add(w.0);
        w.0 = w.0.wrapping_add(v.0);
        x = rot(
            x.wrapping_add(y)
                .wrapping_add(v.0)
                .wrapping_add(read_u64(s, p + 8)),
            37,
        )
        .wrapping_mul(mul);
        y = rot(y.wrapping_add(v.1).wrapping_add(read_u64(s, p + 48)), 42).wrapping_mul(mul);
        x ^= w.1.wrapping_mul(9);
        y = y
            .wrapping_add(v.0.wrapping_mul(9))
            .wrapping_add(read_u64(s, p + 40));
        z = rot(z.wrapping_add(w.0), 33).wrapping_mul(mul);
        v = weak_hash_len_32_with_seeds(s, p, v.1.wrapping_mul(mul), x.wrapping_add(w.0));
        w = weak_hash_len_32_with_seeds(
            s,
            p + 32,
            z.wrapping_add(w.1),
            y.wrapping_add(read_u64(s, p + 16)),
        );
        core::mem::swap(&mut z, &mut x);
        hash_len_16_mul(
            hash_len_16_mul(v.0, w.0, mul)
                .wrapping_add(shift_mix(y).wrapping_mul(K0))
                .wrapping_add(z),
            hash_len_16_mul(v.1, w.1, mul).wrapping_add(x),
            mul,
        )
    }

    /// `farmhashna::Hash64WithSeeds`.
    #[must_use]
    pub fn hash64_with_seeds(s: &[u8], seed0: u64, seed1: u64) -> u64 {
        hash_len_16_mul(
            hash64(s).wrapping_sub(seed0),
            seed1,
            0x9ddf_ea08_eb38_2d69,
        )
    }

    /// `farmhashna::Hash64WithSeed`.
    #[must_use]
    pub fn hash64_with_seed(s: &[u8], seed: u64) -> u64 {
        hash64_with_seeds(s, K2, seed)
    }
}

// =============================================================================
// UO
// =============================================================================

/// `farmhashuo` entry points.
pub mod uo {
    use super::{hash_len_16_mul, na, read_u64, rot, shift_mix, K2};

    fn h(x: u64, y: u64, mul: u64, r: u32) -> u64 {
        let mut a = (x ^ y).wrapping_mul(mul);
        a ^= a >> 47;
        let b = (y ^ a).wrapping_mul(mul);
        rot(b, r).wrapping_mul(mul)
    }

    /// `farmhashuo::Hash64WithSeeds`.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn hash64_with_seeds(s: &[u8], seed0: u64, seed1: u64) -> u64 {
        let len = s.len();
        if len <= 64 {
            return na::hash64_with_seeds(s, seed0, seed1);
        }

        // For strings over 64 bytes we loop; internal state is 64 bytes.
        let mut x = seed0;
        let mut y = seed1.wrapping_mul(K2).wrapping_add(113);
        let mut z = shift_mix(y.wrapping_mul(K2)).wrapping_mul(K2);
        let mut v = (seed0, seed1);
        let mut w = (0u64, 0u64);
        let mut u = x.wrapping_sub(z);
        x = x.wrapping_mul(K2);
        let mul = K2.wrapping_add(u & 0x82);

        let end = ((len - 1) / 64) * 64;
        let last64 = len - 64;
        let mut p = 0usize;
        loop {
            let a0 = read_u64(s, p);
            let a1 = read_u64(s, p + 8);
            let a2 = read_u64(s, p + 16);
            let a3 = read_u64(s, p + 24);
            let a4 = read_u64(s, p + 32);
            let a5 = read_u64(s, p + 40);
            let a6 = read_u64(s, p + 48);
            let a7 = read_u64(s, p + 56);
            x = x.wrapping_add(a0).wrapping_add(a1);
            y = y.wrapping_add(a2);
            z = z.wrapping_add(a3);
            v.0 = v.0.wrapping_add(a4);
            v.1 = v.1.wrapping_add(a5).wrapping_add(a1);
            w.0 = w.0.wrapping_add(a6);
            w.1 = w.1.wrapping_add(a7);

            x = rot(x, 26);
            x = x.wrapping_mul(9);
            y = rot(y, 29);
            z = z.wrapping_mul(mul);
            v.0 = rot(v.0, 33);
            v.1 = rot(v.1, 30);
            w.0 ^= x;
            w.0 = w.0.wrapping_mul(9);
            z = rot(z, 32);
            z = z.wrapping_add(w.1);
            w.1 = w.1.wrapping_add(z);
            z = z.wrapping_mul(9);
            core::mem::swap(&mut u, &mut y);

            z = z.wrapping_add(a0).wrapping_add(a6);
            v.0 = v.0.wrapping_add(a2);
            v.1 = v.1.wrapping_add(a3);
            w.0 = w.0.wrapping_add(a4);
            w.1 = w.1.wrapping_add(a5).wrapping_add(a6);
            x = x.wrapping_add(a1);
            y = y.wrapping_add(a5);

            y = y.wrapping_add(v.0);
            v.0 = v.0.wrapping_add(x.wrapping_sub(y));
            v.1 = v.1.wrapping_add(w.0);
            w.0 = w.0.wrapping_add(v.1);
            w.1 = w.1.wrapping_add(x.wrapping_sub(y));
            x = x.wrapping_add(w.1);
            w.1 = rot(w.1, 34);
            core::mem::swap(&mut u, &mut z);
            p += 64;
            if p == end {
                break;
            }
        }
        // Make p point to the last 64 bytes of input.
        let p = last64;
        u = u.wrapping_mul(9);
        v.1 = rot(v.1, 28);
        v.0 = rot(v.0, 20);
        w.0 = w.0.wrapping_add(((len - 1) & 63) as u64);
        u = u.wrapping_add(y);
        y = y.wrapping_add(u);
        x = rot(
            y.wrapping_sub(x)
                .wrapping_add(v.0)
                .wrapping_add(read_u64(s, p + 8)),
            37,
        )
        .wrapping_mul(mul);
        y = rot(y ^ v.1 ^ read_u64(s, p + 48), 42).wrapping_mul(mul);
        x ^= w.1.wrapping_mul(9);
        y = y.wrapping_add(v.0).wrapping_add(read_u64(s, p + 40));
        z = rot(z.wrapping_add(w.0), 33).wrapping_mul(mul);
        v = na::weak_hash_len_32_with_seeds(s, p, v.1.wrapping_mul(mul), x.wrapping_add(w.0));
        w = na::weak_hash_len_32_with_seeds(
            s,
            p + 32,
            z.wrapping_add(w.1),
            y.wrapping_add(read_u64(s, p + 16)),
        );
        h(
            hash_len_16_mul(v.0.wrapping_add(x), w.0 ^ y, mul)
                .wrapping_add(z)
                .wrapping_sub(u),
            h(v.1.wrapping_add(y), w.1.wrapping_add(z), K2, 30) ^ x,
            K2,
            31,
        )
    }

    /// `farmhashuo::Hash64WithSeed`.
    #[must_use]
    pub fn hash64_with_seed(s: &[u8], seed: u64) -> u64 {
        if s.len() <= 64 {
            na::hash64_with_seed(s, seed)
        } else {
            hash64_with_seeds(s, 0, seed)
        }
    }

    /// `farmhashuo::Hash64`.
    #[must_use]
    pub fn hash64(s: &[u8]) -> u64 {
        if s.len() <= 64 {
            na::hash64(s)
        } else {
            hash64_with_seeds(s, 81, 0)
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn na_empty_is_k2() {
        assert_eq!(na::hash64(b""), K2);
    }

    #[test]
    fn na_length_tiers_deterministic() {
        let data: Vec<u8> = (0..200u8).map(|b| b.wrapping_mul(31)).collect();
        for l in [0usize, 1, 3, 4, 8, 16, 17, 32, 33, 64, 65, 128, 129, 200] {
            assert_eq!(na::hash64(&data[..l]), na::hash64(&data[..l]));
            assert_eq!(
                na::hash64_with_seeds(&data[..l], 1, 2),
                na::hash64_with_seeds(&data[..l], 1, 2)
            );
        }
    }

    #[test]
    fn uo_delegates_to_na_below_65_bytes() {
        let data = [7u8; 64];
        assert_eq!(uo::hash64(&data), na::hash64(&data));
        assert_eq!(
            uo::hash64_with_seed(&data, 99),
            na::hash64_with_seed(&data, 99)
        );
        let big = [7u8; 65];
        assert_ne!(uo::hash64(&big), na::hash64(&big));
    }
}
