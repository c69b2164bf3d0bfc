//! komihash (Aleksey Vaneev, MIT), ported at the six release tags the
//! corpus pins: 4.3, 4.5, 4.7, 5.0, 5.10 and 5.26.
//!
//! The tags fall into two value lines. 4.5 and 4.7 are performance
//! releases of 4.3, and 5.10 and 5.26 are performance releases of 5.0,
//! so there are two kernels here: [`v4_3`] and [`v5_0`]. The other
//! four tags are aliases onto them. The lines differ in how the bulk
//! loop pairs its lanes and in the final-block padding; seeding, the
//! 32/16-byte strides and the finishing rounds are shared.

pub mod v4_3;
pub mod v5_0;

/// Values match 4.3.
pub use self::v4_3 as v4_5;
/// Values match 4.3.
pub use self::v4_3 as v4_7;
/// Values match 5.0.
pub use self::v5_0 as v5_10;
/// Values match 5.0.
pub use self::v5_0 as v5_26;

pub(crate) use crate::bytes::{read_u32 as lu32, read_u64 as lu64};

/// Initial `Seed1` basis (first digits of pi).
pub(crate) const SEED1_INIT: u64 = 0x243f_6a88_85a3_08d3;
/// Initial `Seed5` basis.
pub(crate) const SEED5_INIT: u64 = 0x4528_21e6_38d0_1377;

pub(crate) const LOOP_SEEDS: [u64; 6] = [
    0x1319_8a2e_0370_7344, // Seed2
    0xa409_3822_299f_31d0, // Seed3
    0x082e_fa98_ec4e_6c89, // Seed4
    0xbe54_66cf_34e9_0c6c, // Seed6
    0xc0ac_29b7_c97c_50dd, // Seed7
    0x3f84_d5b5_b547_0917, // Seed8
];

/// `kh_m128`: full 64x64 multiply, returns `(lo, hi)`.
#[inline(always)]
pub(crate) fn m128(a: u64, b: u64) -> (u64, u64) {
    let r = u128::from(a) * u128::from(b);
    (r as u64, (r >> 64) as u64)
}

/// `KOMIHASH_HASHROUND`: one state round over `Seed1`/`Seed5`.
#[inline(always)]
pub(crate) fn round(seed1: &mut u64, seed5: &mut u64) {
    let (lo, hi) = m128(*seed1, *seed5);
    *seed5 = seed5.wrapping_add(hi);
    *seed1 = lo ^ *seed5;
}

/// Expands `seed` into the eight lane seeds, opening round included.
/// Returned in lane order `Seed1..Seed8`.
pub(crate) fn init(seed: u64) -> [u64; 8] {
    let mut s1 = SEED1_INIT ^ (seed & 0x5555_5555_5555_5555);
    let mut s5 = SEED5_INIT ^ (seed & 0xaaaa_aaaa_aaaa_aaaa);
    round(&mut s1, &mut s5);
    [
        s1,
        LOOP_SEEDS[0] ^ s1,
        LOOP_SEEDS[1] ^ s1,
        LOOP_SEEDS[2] ^ s1,
        s5,
        LOOP_SEEDS[3] ^ s5,
        LOOP_SEEDS[4] ^ s5,
        LOOP_SEEDS[5] ^ s5,
    ]
}

/// `KOMIHASH_HASH16`: folds 16 message bytes at `off` into the state.
#[inline(always)]
pub(crate) fn hash16(msg: &[u8], off: usize, seed1: &mut u64, seed5: &mut u64) {
    let (lo, hi) = m128(*seed1 ^ lu64(msg, off), *seed5 ^ lu64(msg, off + 8));
    *seed5 = seed5.wrapping_add(hi);
    *seed1 = lo ^ *seed5;
}

/// Folds the padded final block and runs the closing round.
pub(crate) fn finish(r2l: u64, r2h: u64, mut see5: u64) -> u64 {
    let (lo, hi) = m128(r2l, r2h);
    see5 = see5.wrapping_add(hi);
    let mut see1 = see5 ^ lo;
    round(&mut see1, &mut see5);
    see1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gen(n: usize) -> Vec<u8> {
        (0..n).map(|i| (i as u8).wrapping_mul(31).wrapping_add(7)).collect()
    }

    #[test]
    fn release_lines_share_values() {
        for l in [0usize, 1, 5, 8, 15, 16, 31, 32, 63, 64, 65, 200] {
            let data = gen(l);
            for seed in [0u64, 0x1b5a_f6b8_3769_53d2] {
                assert_eq!(v4_3::komihash(&data, seed), v4_5::komihash(&data, seed));
                assert_eq!(v4_3::komihash(&data, seed), v4_7::komihash(&data, seed));
                assert_eq!(v5_0::komihash(&data, seed), v5_10::komihash(&data, seed));
                assert_eq!(v5_0::komihash(&data, seed), v5_26::komihash(&data, seed));
            }
        }
        // The two lines are distinct hashes.
        let data = gen(32);
        assert_ne!(v4_3::komihash(&data, 0), v5_0::komihash(&data, 0));
    }

    #[test]
    fn empty_input_reference_value() {
        assert_eq!(v4_3::komihash(b"", 0), 0xb768_3ea7_4301_32b4);
        assert_eq!(v5_0::komihash(b"", 0), 0xb768_3ea7_4301_32b4);
    }
}
