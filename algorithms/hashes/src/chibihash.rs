//! ChibiHash v2 (N. J. Abraham, public domain), ported from `chibihash64.h`.

use crate::bytes::{read_u32, read_u64};

const K: u64 = 0x2b7e_1516_28ae_d2a7; // digits of e

/// `chibihash64` (v2).
#[must_use]
pub fn chibihash64(data: &[u8], seed: u64) -> u64 {
    let len = data.len();
    let mut p = 0usize;
    let mut l = len;

    let seed2 = (seed.wrapping_sub(K))
        .rotate_left(15)
        .wrapping_add((seed.wrapping_sub(K)).rotate_left(47));
    let mut h = [
        seed,
        seed.wrapping_add(K),
        seed2,
        seed2.wrapping_add(K.wrapping_mul(K) ^ K),
    ];

    while l >= 32 {
        for i in 0..4 {
            let stripe = read_u64(data, p + i * 8);
            h[i] = stripe.wrapping_add(h[i]).wrapping_mul(K);
            h[(i + 1) & 3] = h[(i + 1) & 3].wrapping_add(stripe.rotate_left(27));
        }
        p += 32;
        l -= 32;
    }

    while l >= 8 {
        h[0] ^= u64::from(read_u32(data, p));
        h[0] = h[0].wrapping_mul(K);
        h[1] ^= u64::from(read_u32(data, p + 4));
        h[1] = h[1].wrapping_mul(K);
        p += 8;
        l -= 8;
    }

    if l >= 4 {
        h[2] ^= u64::from(read_u32(data, p));
        h[3] ^= u64::from(read_u32(data, p + l - 4));
    } else if l > 0 {
        h[2] ^= u64::from(data[p]);
        h[3] ^= u64::from(data[p + l / 2]) | (u64::from(data[p + l - 1]) << 8);
    }

    h[0] = h[0].wrapping_add((h[2].wrapping_mul(K)).rotate_left(31) ^ (h[2] >> 31));
    h[1] = h[1].wrapping_add((h[3].wrapping_mul(K)).rotate_left(31) ^ (h[3] >> 31));
    h[0] = h[0].wrapping_mul(K);
    h[0] ^= h[0] >> 31;
    h[1] = h[1].wrapping_add(h[0]);

    let mut x = (len as u64).wrapping_mul(K);
    x ^= x.rotate_left(29);
    x = x.wrapping_add(seed);
    x ^= h[1];
    x ^= x.rotate_left(15) ^ x.rotate_left(42);
    x = x.wrapping_mul(K);
    x ^= x.rotate_left(13) ^ x.rotate_left(31);
    x
}
