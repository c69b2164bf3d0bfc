//! komihash, 4.x value line (tags 4.3, 4.5 and 4.7).
//!
//! The bulk loop pairs adjacent 8-byte lanes, and the final-block
//! padding marker moves up one bit when the top message bit is set.

use super::{finish, hash16, init, lu32, lu64, m128};

/// `komihash(Msg, MsgLen, UseSeed)`.
#[must_use]
pub fn komihash(msg: &[u8], seed: u64) -> u64 {
    let [mut see1, mut see2, mut see3, mut see4, mut see5, mut see6, mut see7, mut see8] =
        init(seed);
    let mut off = 0usize;
    let mut rem = msg.len();
    let non_zero = rem > 0;

    if rem > 63 {
        loop {
            let t1 = see1 ^ lu64(msg, off);
            let t2 = see5 ^ lu64(msg, off + 8);
            let t3 = see2 ^ lu64(msg, off + 16);
            let t4 = see6 ^ lu64(msg, off + 24);
            let t5 = see3 ^ lu64(msg, off + 32);
            let t6 = see7 ^ lu64(msg, off + 40);
            let t7 = see4 ^ lu64(msg, off + 48);
            let t8 = see8 ^ lu64(msg, off + 56);

            let (l1, h1) = m128(t1, t2);
            let (l2, h2) = m128(t3, t4);
            let (l3, h3) = m128(t5, t6);
            let (l4, h4) = m128(t7, t8);

            see1 = l1;
            see5 = see5.wrapping_add(h1);
            see2 = l2;
            see6 = see6.wrapping_add(h2);
            see3 = l3;
            see7 = see7.wrapping_add(h3);
            see4 = l4;
            see8 = see8.wrapping_add(h4);

            see2 ^= see5;
            see3 ^= see6;
            see4 ^= see7;
            see1 ^= see8;

            off += 64;
            rem -= 64;
            if rem < 64 {
                break;
            }
        }
        see5 ^= see6 ^ see7 ^ see8;
        see1 ^= see2 ^ see3 ^ see4;
    }

    if rem > 31 {
        hash16(msg, off, &mut see1, &mut see5);
        hash16(msg, off + 16, &mut see1, &mut see5);
        off += 32;
        rem -= 32;
    }
    if rem > 15 {
        hash16(msg, off, &mut see1, &mut see5);
        off += 16;
        rem -= 16;
    }

    let mut r2h = see5;
    let mut r2l = see1;
    let ml8 = (rem << 3) as u32;
    if rem > 7 {
        r2l ^= lu64(msg, off);
        let y = lu64(msg, off + rem - 8);
        let mut fb = (y >> 1).wrapping_shr(!ml8);
        fb |= 1u64.wrapping_shl(ml8) << (y >> 63);
        r2h ^= fb;
    } else if rem > 3 {
        let y = lu32(msg, off + rem - 4);
        let mut fb = u64::from(lu32(msg, off));
        fb |= (u64::from(y) << 32) >> (64 - ml8);
        fb |= (1u64 << ml8) << (y >> 31);
        r2l ^= fb;
    } else if rem > 0 {
        let mut fb = u64::from(msg[off]);
        if rem > 1 {
            fb |= u64::from(msg[off + 1]) << 8;
        }
        if rem > 2 {
            fb |= u64::from(msg[off + 2]) << 16;
        }
        fb |= (1u64 << ml8) << (fb >> (ml8 - 1));
        r2l ^= fb;
    } else if non_zero {
        r2l ^= if msg[off - 1] & 0x80 != 0 { 2 } else { 1 };
    }

    finish(r2l, r2h, see5)
}

#[cfg(test)]
mod tests {
    use super::komihash;

    fn gen(n: usize) -> Vec<u8> {
        (0..n).map(|i| (i as u8).wrapping_mul(31).wrapping_add(7)).collect()
    }

    #[test]
    fn reference_vectors_zero_seed() {
        for (len, expected) in [
            (0, 0xb768_3ea7_4301_32b4),
            (1, 0xddbc_f79f_1308_edc7),
            (2, 0xec50_d9c1_4181_8aaa),
            (3, 0x0296_6f13_f6c6_5b91),
            (4, 0x7e4b_6eaa_b0bf_8adb),
            (5, 0xadc7_9789_e048_7f2c),
            (7, 0xdd05_1274_3c25_6a30),
            (8, 0x6755_d62c_960d_a9e4),
            (11, 0x88a7_a270_184c_192f),
            (15, 0x58bf_2cbf_e692_8c41),
            (16, 0xcc33_7c86_2cf6_47ad),
            (17, 0x7987_fa1d_bbaf_0a4a),
            (21, 0xf9c3_d303_3048_1794),
            (22, 0xeaa7_3d9d_02f3_ae74),
            (31, 0x08ce_8409_1991_acd7),
            (32, 0xf10b_f412_43d9_b5f9),
            (33, 0xa8c2_1a94_10ba_6536),
            (47, 0x16bf_62a1_9419_d2fb),
            (48, 0xe8bb_523e_fa74_fd4f),
            (49, 0x2ed5_9785_2d2e_e14f),
            (50, 0x23b5_be2c_36a2_4bb9),
            (63, 0x9ff2_3b67_7d75_4231),
            (64, 0x7b58_3f9a_880e_6377),
            (65, 0xc7f1_b6c5_a236_c112),
            (98, 0x242f_4b94_c02f_485d),
            (99, 0x9a47_3792_888c_cc3a),
            (112, 0x89f9_8c14_e30c_e4ec),
            (113, 0x8285_6a8f_0cf1_7404),
            (127, 0x153f_824f_e2e2_4cd3),
            (128, 0xd5ae_303a_3380_c880),
            (199, 0x40ca_2b9b_0418_6e00),
            (200, 0x850b_df8d_bdca_05c3),
        ] {
            assert_eq!(komihash(&gen(len), 0), expected, "len {len}");
        }
    }

    #[test]
    fn reference_vectors_seeded() {
        let seed = 0x1b5a_f6b8_3769_53d2;
        for (len, expected) in [
            (0, 0x145d_ae17_fa13_515b),
            (1, 0xdedf_3aa3_1869_426c),
            (5, 0x4340_04ce_e004_9545),
            (8, 0x0218_7540_4b16_a888),
            (15, 0xdf0d_eed6_a9c8_daed),
            (16, 0x62ef_655d_905b_59b3),
            (31, 0xc809_ad48_1764_00c3),
            (32, 0x44a1_2b86_0c33_8307),
            (63, 0x8875_24fa_f572_0493),
            (64, 0x0eb8_d87d_cc34_6e3f),
            (65, 0xb227_9cc0_6ec6_72b3),
            (127, 0xe60c_2e05_b262_29dc),
            (128, 0x6280_9f75_57b5_f7a3),
            (200, 0x50a3_5eac_654e_7553),
        ] {
            assert_eq!(komihash(&gen(len), seed), expected, "len {len}");
        }
    }
}
