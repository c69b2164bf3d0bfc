//! rapidhash V3 (Nicolas De Carli, BSD 2-Clause), the wyhash lineage
//! continued: 112-byte bulk stride over seven lanes, a nested cascade of
//! 16-byte folds for mid-size keys, and a short-input path that packs up
//! to 16 bytes into two words.

use crate::bytes::{read_u32, read_u64};

/// `rapid_secret`: default entropy pool.
const SECRET: [u64; 8] = [
    0x2d35_8dcc_aa6c_78a5,
    0x8bb8_4b93_962e_acc9,
    0x4b33_a62e_d433_d4a3,
    0x4d5a_2da5_1de1_aa47,
    0xa076_1d64_78bd_642f,
    0xe703_7ed1_a0b4_28db,
    0x90ed_1765_281c_388c,
    0xaaaa_aaaa_aaaa_aaaa,
];

#[inline]
fn mum(a: &mut u64, b: &mut u64) {
    let r = u128::from(*a) * u128::from(*b);
    *a = r as u64;
    *b = (r >> 64) as u64;
}

#[inline]
fn mix(mut a: u64, mut b: u64) -> u64 {
    mum(&mut a, &mut b);
    a ^ b
}

#[inline]
fn finish(a: u64, b: u64, seed: u64, len: u64) -> u64 {
    let len = len ^ SECRET[1];
    let mut a = a ^ len;
    let mut b = b ^ seed;
    mum(&mut a, &mut b);
    mix(a ^ SECRET[7], b ^ len)
}

/// Hashes `data` with the default (zero) seed.
#[must_use]
pub fn rapidhash(data: &[u8]) -> u64 {
    rapidhash_seeded(data, 0)
}

/// Hashes `data` with an explicit seed.
#[must_use]
pub fn rapidhash_seeded(data: &[u8], seed: u64) -> u64 {
    let len = data.len();
    let mut seed = seed ^ mix(seed ^ SECRET[2], SECRET[1]);

    if len <= 16 {
        return if len >= 4 {
            let (a, b);
            if len >= 8 {
                a = read_u64(data, 0);
                b = read_u64(data, len - 8);
            } else {
                b = u64::from(read_u32(data, 0));
                a = u64::from(read_u32(data, len - 4));
            }
            finish(a ^ len as u64, b, seed ^ len as u64, len as u64)
        } else if len > 0 {
            let a = (u64::from(data[0]) << 45) ^ u64::from(data[len - 1]);
            let b = u64::from(data[len >> 1]);
            finish(a ^ len as u64, b, seed, len as u64)
        } else {
            finish(0, 0, seed, 0)
        };
    }

    let mut off = 0usize;
    let mut rem = len;
    if rem > 112 {
        let mut see1 = seed;
        let mut see2 = seed;
        let mut see3 = seed;
        let mut see4 = seed;
        let mut see5 = seed;
        let mut see6 = seed;
        while rem > 112 {
            seed = mix(read_u64(data, off) ^ SECRET[0], read_u64(data, off + 8) ^ seed);
            see1 = mix(read_u64(data, off + 16) ^ SECRET[1], read_u64(data, off + 24) ^ see1);
            see2 = mix(read_u64(data, off + 32) ^ SECRET[2], read_u64(data, off + 40) ^ see2);
            see3 = mix(read_u64(data, off + 48) ^ SECRET[3], read_u64(data, off + 56) ^ see3);
            see4 = mix(read_u64(data, off + 64) ^ SECRET[4], read_u64(data, off + 72) ^ see4);
            see5 = mix(read_u64(data, off + 80) ^ SECRET[5], read_u64(data, off + 88) ^ see5);
            see6 = mix(read_u64(data, off + 96) ^ SECRET[6], read_u64(data, off + 104) ^ see6);
            off += 112;
            rem -= 112;
        }
        seed ^= see1 ^ see2 ^ see3;
        seed ^= see4 ^ see5 ^ see6;
    }
    if rem > 16 {
        seed = mix(read_u64(data, off) ^ SECRET[2], read_u64(data, off + 8) ^ seed);
        if rem > 32 {
            seed = mix(read_u64(data, off + 16) ^ SECRET[2], read_u64(data, off + 24) ^ seed);
            if rem > 48 {
                seed = mix(read_u64(data, off + 32) ^ SECRET[1], read_u64(data, off + 40) ^ seed);
                if rem > 64 {
                    seed = mix(read_u64(data, off + 48) ^ SECRET[1], read_u64(data, off + 56) ^ seed);
                    if rem > 80 {
                        seed = mix(read_u64(data, off + 64) ^ SECRET[2], read_u64(data, off + 72) ^ seed);
                        if rem > 96 {
                            seed = mix(
                                read_u64(data, off + 80) ^ SECRET[1],
                                read_u64(data, off + 88) ^ seed,
                            );
                        }
                    }
                }
            }
        }
    }
    let a = read_u64(data, len - 16);
    let b = read_u64(data, len - 8);
    finish(a, b, seed, rem as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gen(n: usize) -> Vec<u8> {
        (0..n).map(|i| (i as u8).wrapping_mul(31).wrapping_add(7)).collect()
    }

    #[test]
    fn reference_vectors_zero_seed() {
        for (len, expected) in [
            (0, 0x0338_dc4b_e2ce_cdae),
            (1, 0x5c2c_af7d_68f0_6d3e),
            (2, 0xae51_663c_7995_f8f8),
            (3, 0x3bd7_69fd_1eef_f68b),
            (4, 0x94c4_e44c_ba1b_e502),
            (5, 0x8e75_1680_29f2_986c),
            (7, 0x13ac_f0e7_c76a_9863),
            (8, 0xefd1_4828_5045_d1f3),
            (11, 0x66ba_4468_2759_46aa),
            (15, 0x9419_2c8d_95e7_a5a5),
            (16, 0x0811_971e_7cf3_97ba),
            (17, 0x6d84_939d_3157_2677),
            (21, 0x88e0_63e4_5e67_61f9),
            (22, 0x9a63_8214_6c9c_6f9a),
            (31, 0x8371_afa5_01b0_cd07),
            (32, 0xba48_299a_836e_97da),
            (33, 0xaf3a_3a11_5f66_dba3),
            (47, 0x92f8_b21c_a817_75e0),
            (48, 0xb647_c688_e65a_b5d9),
            (49, 0xeb24_b4c2_9d6d_a81e),
            (50, 0x2209_bbca_283a_4b36),
            (63, 0x610c_8ac5_ad5d_4ea1),
            (64, 0xecac_72ef_fb51_7b5d),
            (65, 0x45f0_5f1b_aab3_0c17),
            (98, 0x9aa4_2b5f_3769_ab89),
            (99, 0xdc92_d89e_a6c3_de51),
            (112, 0x7fe5_4822_4c71_702a),
            (113, 0xdd9a_928d_4d5f_38be),
            (127, 0x7185_72f1_ab34_ff72),
            (128, 0xf033_9dec_e659_fbb5),
            (199, 0x75b0_28d8_464f_86f1),
            (200, 0x1092_43db_406c_d749),
        ] {
            assert_eq!(rapidhash(&gen(len)), expected, "len {len}");
        }
    }

    #[test]
    fn reference_vectors_seeded() {
        let seed = 0x52a4_bc2b_51cd_5d00;
        for (len, expected) in [
            (0, 0x6b77_ed1c_0e56_58ed),
            (1, 0x7042_19e3_7f30_387c),
            (3, 0xfd6a_f121_2a78_bfe9),
            (4, 0x17c2_4fae_d41e_1d3c),
            (7, 0xa7a1_73f1_9860_834e),
            (8, 0x86db_f2ec_3c98_49cb),
            (16, 0x4acd_957e_6e82_6e30),
            (17, 0xba1a_cf72_04a6_1fda),
            (32, 0x0490_05be_fe78_49f0),
            (33, 0x13f3_4974_b38b_e55f),
            (48, 0xd9f9_9037_8cb9_f85f),
            (49, 0x7d87_ba66_6047_a37e),
            (64, 0x8483_e100_5eb6_5eca),
            (65, 0x6800_81b1_9635_aded),
            (98, 0x47da_b30e_252b_8e77),
            (112, 0xeb18_25b8_01d6_4517),
            (113, 0x106c_d805_fd7f_1313),
            (128, 0x308c_46a5_2216_90a2),
            (199, 0x4b3f_031e_e59a_96a9),
            (200, 0x0709_9e9b_aa40_4175),
        ] {
            assert_eq!(rapidhash_seeded(&gen(len), seed), expected, "len {len}");
        }
    }

    #[test]
    fn default_seed_is_zero() {
        let data = gen(40);
        assert_eq!(rapidhash(&data), rapidhash_seeded(&data, 0));
    }
}
