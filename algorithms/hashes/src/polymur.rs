//! PolymurHash 2.0 (Orson Peters, zlib license).
//!
//! A polynomial hash over GF(2^61 - 1) with a strong per-key
//! initialisation step. Keys are expanded from two 64-bit seeds by
//! raising 37 to a rejected-residue exponent via a precomputed power
//! table; the 64-bit output mixes the polynomial accumulator and adds
//! the `s` parameter.

use crate::bytes::{read_u32, read_u64};

const P611: u64 = (1 << 61) - 1;
const M56: u64 = 0x00ff_ffff_ffff_ffff;

const ARBITRARY1: u64 = 0x6a09_e667_f3bc_c908; // fractional bits of sqrt(2)
const ARBITRARY2: u64 = 0xbb67_ae85_84ca_a73b; // fractional bits of sqrt(3)
const ARBITRARY3: u64 = 0x3c6e_f372_fe94_f82b; // fractional bits of sqrt(5)
const ARBITRARY4: u64 = 0xa54f_f53a_5f1d_36f1; // fractional bits of sqrt(7)

/// `POLYMUR_POW37`: `37^(2^i) mod 2^61 - 1` at even `i` in the low half
/// and odd `i` in the high half, for the two-bit exponent ladder.
const POW37: [u64; 64] = [
    0x0000_0000_0000_0025, 0x0000_0000_0000_0559, 0x0000_0000_001c_98f1, 0x0000_0331_d017_12e1,
    0x1c6c_00e4_0624_0e4f, 0x0445_a08c_c8f3_a1a4, 0x153d_5f6f_3a49_7909, 0x1734_06b3_4588_15fb,
    0x0904_436a_268f_e45f, 0x1a04_47d6_401b_d149, 0x0015_4505_0f7f_d8d2, 0x1943_f598_9f81_37b4,
    0x059d_323d_0cc8_8d0c, 0x0903_75f6_2a61_90f7, 0x0f5c_7c2e_821b_1dbc, 0x172c_1c59_c06a_5dc5,
    0x1197_a962_5e04_d15b, 0x13a7_ec44_9ee2_51b5, 0x15b6_1eda_2303_dfe5, 0x0a34_2248_fe30_f56d,
    0x14a9_1c0e_70fe_4b92, 0x1252_9374_4a67_87fa, 0x1842_1604_6a8d_7de9, 0x00f1_1f42_65c9_35b5,
    0x1e0b_02b9_2a24_c7ac, 0x1834_064a_42aa_1ff0, 0x0104_3e4a_0550_5f25, 0x03d9_6ecb_b892_5533,
    0x014a_2b2e_f7b7_3ea6, 0x089e_b451_d7a4_75bc, 0x07aa_f5a2_6322_a044, 0x191f_2783_d4a3_4e23,
    0x07c2_4f7b_4ce1_f4b0, 0x09de_5082_f551_ae77, 0x1684_18a3_31ce_9d51, 0x0bac_074c_4ad7_7f7c,
    0x09af_a68d_fb07_0ef2, 0x1919_b7ed_4f1c_74bc, 0x1a6f_c35c_15ec_159e, 0x1959_f6a1_6446_5aa6,
    0x057d_a53a_de21_6c54, 0x1080_8b47_61f8_518c, 0x1a4b_f1f6_2c76_bb01, 0x0432_6cb2_a543_35f8,
    0x071c_ecb8_c3ff_a09e, 0x0dce_62c8_03ca_2cef, 0x12f4_7184_0e42_100b, 0x1347_d71e_bb3f_e7a2,
    0x167c_c30f_3c31_a2d6, 0x1127_d9a9_5b58_0056, 0x1ac0_74ed_a580_aae7, 0x12fa_282e_1b0c_8eef,
    0x1a16_c570_017e_4e34, 0x0917_c177_b9af_a1be, 0x0891_995d_2a30_303f, 0x014b_97d4_1d22_0f00,
    0x1b78_fffd_c15b_0189, 0x1b00_48f8_ceb8_2e4c, 0x0499_dd69_68dd_6577, 0x12a8_aeb4_9dd8_8f74,
    0x1fff_ffff_ffff_ffda, 0x0000_0000_0000_0559, 0x0000_0000_001c_98f1, 0x0000_0331_d017_12e1,
];

/// Expanded hash parameters, `polymur_hash_params` upstream.
#[derive(Clone, Copy, Debug)]
pub struct PolymurHashParams {
    k: u64,
    k2: u64,
    k3: u64,
    k3x: u64,
    k4: u64,
    k4x: u64,
    k5: u64,
    k6: u64,
    k7: u64,
    k14: u64,
    s: u64,
}

#[inline]
fn mul128(a: u64, b: u64) -> u128 {
    u128::from(a) * u128::from(b)
}

/// Reduces a 128-bit value to roughly 61 bits (not fully to `[0, P611)`).
#[inline]
fn red611(x: u128) -> u64 {
    (x as u64 & P611).wrapping_add((x >> 61) as u64)
}

/// Reduces a value in `[0, 2^64)` below `2^61 + 8`.
#[inline]
fn extrared611(x: u64) -> u64 {
    (x & P611) + (x >> 61)
}

#[inline]
fn mix(mut x: u64) -> u64 {
    x ^= x >> 32;
    x = x.wrapping_mul(0x0e98_46af_9b1a_615d);
    x ^= x >> 32;
    x = x.wrapping_mul(0x0e98_46af_9b1a_615d);
    x ^= x >> 28;
    x
}

impl PolymurHashParams {
    /// `polymur_init_params`: expands `(k_seed, s_seed)` into a key.
    /// Candidate exponents sharing a factor with `2^61 - 2` are
    /// rejected, as are keys whose seventh power is too large for the
    /// tail arithmetic.
    pub fn new(mut k_seed: u64, s_seed: u64) -> Self {
        let s = s_seed ^ ARBITRARY1;
        let (k, k2, k7) = loop {
            k_seed = k_seed.wrapping_add(ARBITRARY2);

            // 2^61 - 2 = 2 * 3^2 * 5^2 * 7 * 11 * 13 * 31 * 41 * 61 * 151 * 331 * 1321
            let mut e = (k_seed >> 3) | 1;
            if [3u64, 5, 7, 11, 13, 31, 41, 61, 151, 331, 1321]
                .iter()
                .any(|&q| e % q == 0)
            {
                continue;
            }

            // 37^e, two exponent bits per step through the power table.
            let mut ka: u64 = 1;
            let mut kb: u64 = 1;
            let mut i = 0usize;
            while e != 0 {
                if e & 1 != 0 {
                    ka = extrared611(red611(mul128(ka, POW37[i])));
                }
                if e & 2 != 0 {
                    kb = extrared611(red611(mul128(kb, POW37[i + 1])));
                }
                i += 2;
                e >>= 2;
            }

            let k = extrared611(extrared611(red611(mul128(ka, kb))));
            let k2 = extrared611(red611(mul128(k, k)));
            let k3 = red611(mul128(k, k2));
            let k4 = red611(mul128(k2, k2));
            let k7 = extrared611(red611(mul128(k3, k4)));
            if k7 < (1 << 60) - (1 << 56) {
                break (k, k2, k7);
            }
        };
        let k3 = red611(mul128(k, k2));
        let k4 = red611(mul128(k2, k2));
        Self {
            k,
            k2,
            k3,
            k3x: extrared611(k3),
            k4,
            k4x: extrared611(k4),
            k5: extrared611(red611(mul128(k, k4))),
            k6: extrared611(red611(mul128(k2, k4))),
            k7,
            k14: red611(mul128(k7, k7)),
            s,
        }
    }

    /// `polymur_init_params_from_seed`: derives both seeds from one.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(
            mix(seed.wrapping_add(ARBITRARY3)),
            mix(seed.wrapping_add(ARBITRARY4)),
        )
    }

    /// The polynomial accumulator before final mixing.
    fn poly611(&self, buf: &[u8], tweak: u64) -> u64 {
        let mut acc = tweak;
        let mut off = 0usize;
        let mut rem = buf.len();

        if rem >= 8 {
            let mut k3 = self.k3;
            let mut k4 = self.k4;
            if rem >= 50 {
                k3 = self.k3x;
                k4 = self.k4x;
                // 49-byte blocks as seven 56-bit lanes, Horner step by k7.
                let mut h: u64 = 0;
                loop {
                    let m0 = (read_u64(buf, off) & M56).wrapping_add(self.k);
                    let m1 = (read_u64(buf, off + 7) & M56).wrapping_add(self.k6);
                    let m2 = (read_u64(buf, off + 14) & M56).wrapping_add(self.k2);
                    let m3 = (read_u64(buf, off + 21) & M56).wrapping_add(self.k5);
                    let m4 = (read_u64(buf, off + 28) & M56).wrapping_add(self.k3x);
                    let m5 = (read_u64(buf, off + 35) & M56).wrapping_add(self.k4x);
                    let m6 = (read_u64(buf, off + 42) & M56).wrapping_add(h);
                    let t = mul128(m0, m1)
                        .wrapping_add(mul128(m2, m3))
                        .wrapping_add(mul128(m4, m5))
                        .wrapping_add(mul128(m6, self.k7));
                    h = red611(t);
                    off += 49;
                    rem -= 49;
                    if rem < 50 {
                        break;
                    }
                }
                let ph = extrared611(h);
                acc = acc.wrapping_add(extrared611(red611(mul128(ph, self.k14))));
            }

            if rem >= 8 {
                let m0 = (read_u64(buf, off) & M56).wrapping_add(self.k2);
                let m1 = (read_u64(buf, off + (rem - 7) / 2) & M56).wrapping_add(self.k7);
                let m2 = (read_u64(buf, off + rem - 8) >> 8).wrapping_add(self.k);
                let k3 = k3.wrapping_add(rem as u64);
                let t0 = mul128(m0, m1);
                let t1 = mul128(m2, k3);
                let t = if rem <= 21 {
                    t1.wrapping_add(t0)
                } else {
                    let t0r = red611(t0);
                    let m3 = (read_u64(buf, off + 7) & M56).wrapping_add(self.k2);
                    let m4 = (read_u64(buf, off + 14) & M56).wrapping_add(self.k7);
                    let m5 = (read_u64(buf, off + rem - 21) & M56).wrapping_add(t0r);
                    let m6 = (read_u64(buf, off + rem - 14) & M56).wrapping_add(k4);
                    t1.wrapping_add(mul128(m3, m4)).wrapping_add(mul128(m5, m6))
                };
                return acc.wrapping_add(red611(t));
            }
        }

        let m0 = load_le_u64_0_8(buf, off, rem).wrapping_add(self.k);
        let lenk2 = (rem as u64).wrapping_add(self.k2);
        acc.wrapping_add(red611(mul128(m0, lenk2)))
    }

    /// `polymur_hash`: the full 64-bit hash of `buf` under `tweak`.
    #[must_use]
    pub fn hash(&self, buf: &[u8], tweak: u64) -> u64 {
        mix(self.poly611(buf, tweak)).wrapping_add(self.s)
    }
}

/// Loads 0..=7 bytes at `off` little-endian without touching memory
/// past the slice.
#[inline]
fn load_le_u64_0_8(buf: &[u8], off: usize, len: usize) -> u64 {
    if len < 4 {
        if len == 0 {
            return 0;
        }
        let mut v = u64::from(buf[off]);
        v |= u64::from(buf[off + (len >> 1)]) << ((len >> 1) << 3);
        v |= u64::from(buf[off + len - 1]) << ((len - 1) << 3);
        return v;
    }
    let lo = u64::from(read_u32(buf, off));
    let hi = u64::from(read_u32(buf, off + len - 4));
    lo | (hi << ((len - 4) << 3))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gen(n: usize) -> Vec<u8> {
        (0..n).map(|i| (i as u8).wrapping_mul(31).wrapping_add(7)).collect()
    }

    #[test]
    fn key_expansion_reference_values() {
        let p = PolymurHashParams::from_seed(0x9a4c_07d2_660a_5c38);
        assert_eq!(p.k, 0x11ba_1d46_7bbc_485a);
        assert_eq!(p.k2, 0x0fc4_66c8_2641_94d1);
        assert_eq!(p.k7, 0x0b3d_b73e_5f12_f38b);
        assert_eq!(p.s, 0x55c1_b77e_5a3e_b5e3);
        assert!(p.k7 < (1 << 60) - (1 << 56));
    }

    #[test]
    fn reference_vectors_single_seed() {
        let p = PolymurHashParams::from_seed(0x9a4c_07d2_660a_5c38);
        let tweak = 0x24cb_f106_9a14_5f8b;
        for (len, expected) in [
            (0, 0x93af_86cf_3858_f5aa),
            (1, 0x60e3_888b_82b3_7045),
            (2, 0x0bfe_e4d2_3af4_4394),
            (3, 0x0c20_2bd1_774a_0eb6),
            (4, 0xe0e6_802f_bcc9_a67d),
            (5, 0xe70e_9b65_d6cb_2cd0),
            (7, 0x7ec9_26e7_7779_1982),
            (8, 0x5f1c_7773_f622_2e93),
            (11, 0x61ab_204c_2883_4529),
            (15, 0x5a88_9830_1308_c999),
            (16, 0x525e_e685_6e2f_c6dd),
            (17, 0x8564_cb83_a4bd_d570),
            (21, 0xa154_5117_57c7_636a),
            (22, 0xa193_ef3f_9874_bb78),
            (31, 0x7d3f_431a_dd08_98fa),
            (32, 0x7644_1a99_7b28_6efb),
            (33, 0xb6fc_2589_3e32_261f),
            (47, 0x219c_abbb_7db9_c73a),
            (48, 0x5974_5022_3dde_70bc),
            (49, 0xc9f8_50a9_545d_72c9),
            (50, 0x526a_a3e1_07fd_3f17),
            (63, 0xb32c_5288_5f77_a9cd),
            (64, 0xa753_7b51_7b01_32a2),
            (65, 0x9850_a6b1_101f_e0fa),
            (98, 0x4491_dfab_8634_33a2),
            (99, 0x4b66_c331_2a2c_d1f3),
            (112, 0x11d6_1c5a_4a13_eabc),
            (113, 0xfcf2_899b_0273_db93),
            (127, 0x9f1c_1296_efe2_037c),
            (128, 0x0184_2d27_0dd7_08d1),
            (199, 0xc0ae_20b1_ae18_a08b),
            (200, 0xd75e_f678_252d_d455),
        ] {
            assert_eq!(p.hash(&gen(len), tweak), expected, "len {len}");
        }
    }

    #[test]
    fn reference_vectors_two_seeds() {
        let p = PolymurHashParams::new(0x5bae_da04_6dcc_dc9e, 0xf44c_29ee_b1af_12e6);
        let tweak = 0x24cb_f106_9a14_5f8b;
        for (len, expected) in [
            (0, 0x790a_d7d1_ce03_66a0),
            (1, 0xe9c5_67cf_993f_1ca8),
            (4, 0x9f80_c81e_d70c_f340),
            (7, 0x0568_5dbf_3fc7_b008),
            (8, 0x5da0_547f_8619_8a1d),
            (21, 0xbb22_1fa1_d901_1d0b),
            (22, 0x8488_bf00_b8af_b094),
            (49, 0xb4eb_301f_8830_ada2),
            (50, 0xe80c_520e_d58f_ee43),
            (98, 0x0f2e_bdc2_0987_e997),
            (99, 0x7715_5c93_edf3_09d1),
            (127, 0x10e8_fec9_b111_b229),
            (128, 0xe34e_cba4_f271_0024),
            (199, 0x30fd_2196_1c28_c00a),
            (200, 0x7ef3_492b_2847_20f5),
        ] {
            assert_eq!(p.hash(&gen(len), tweak), expected, "len {len}");
        }
    }

    #[test]
    fn tweak_changes_the_hash() {
        let p = PolymurHashParams::from_seed(42);
        let data: Vec<u8> = (0..=255u8).collect();
        for l in [0usize, 1, 7, 8, 21, 22, 49, 50, 98, 99, 256] {
            assert_ne!(p.hash(&data[..l], 0), p.hash(&data[..l], 1));
        }
    }
}
