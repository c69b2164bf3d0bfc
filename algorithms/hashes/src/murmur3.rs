//! MurmurHash3 (Austin Appleby, public domain), ported from the smhasher
//! sources: the x86 32-bit variant and the x64 128-bit variant.
//!
//! The 128-bit result is returned in output-buffer order, i.e. the exact 16
//! bytes `MurmurHash3_x64_128` writes through its out pointer on a
//! little-endian host.

use crate::bytes::{read_u32, read_u64};

// =============================================================================
// X86 32-BIT
// =============================================================================

#[inline(always)]
fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// `MurmurHash3_x86_32`.
#[must_use]
pub fn murmur3_x86_32(data: &[u8], seed: u32) -> u32 {
    const C1: u32 = 0xcc9e_2d51;
    const C2: u32 = 0x1b87_3593;

    let len = data.len();
    let nblocks = len / 4;
    let mut h1 = seed;

    for i in 0..nblocks {
        let mut k1 = read_u32(data, i * 4);
        k1 = k1.wrapping_mul(C1);
        k1 = k1.rotate_left(15);
        k1 = k1.wrapping_mul(C2);
        h1 ^= k1;
        h1 = h1.rotate_left(13);
        h1 = h1.wrapping_mul(5).wrapping_add(0xe654_6b64);
    }

    let tail = &data[nblocks * 4..];
    let mut k1 = 0u32;
    if tail.len() >= 3 {
        k1 ^= u32::from(tail[2]) << 16;
    }
    if tail.len() >= 2 {
        k1 ^= u32::from(tail[1]) << 8;
    }
    if !tail.is_empty() {
        k1 ^= u32::from(tail[0]);
        k1 = k1.wrapping_mul(C1);
        k1 = k1.rotate_left(15);
        k1 = k1.wrapping_mul(C2);
        h1 ^= k1;
    }

    h1 ^= len as u32;
    fmix32(h1)
}

// =============================================================================
// X64 128-BIT
// =============================================================================

#[inline(always)]
fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51_afd7_ed55_8ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    k ^= k >> 33;
    k
}

/// `MurmurHash3_x64_128`; bytes in output-buffer order.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn murmur3_x64_128(data: &[u8], seed: u32) -> [u8; 16] {
    const C1: u64 = 0x87c3_7b91_1142_53d5;
    const C2: u64 = 0x4cf5_ad43_2745_937f;

    let len = data.len();
    let nblocks = len / 16;
    let mut h1 = u64::from(seed);
    let mut h2 = u64::from(seed);

    for i in 0..nblocks {
        let mut k1 = read_u64(data, i * 16);
        let mut k2 = read_u64(data, i * 16 + 8);

        k1 = k1.wrapping_mul(C1);
        k1 = k1.rotate_left(31);
        k1 = k1.wrapping_mul(C2);
        h1 ^= k1;
        h1 = h1.rotate_left(27);
        h1 = h1.wrapping_add(h2);
        h1 = h1.wrapping_mul(5).wrapping_add(0x52dc_e729);

        k2 = k2.wrapping_mul(C2);
        k2 = k2.rotate_left(33);
        k2 = k2.wrapping_mul(C1);
        h2 ^= k2;
        h2 = h2.rotate_left(31);
        h2 = h2.wrapping_add(h1);
        h2 = h2.wrapping_mul(5).wrapping_add(0x3849_5ab5);
    }

    let tail = &data[nblocks * 16..];
    let t = tail.len();
    let mut k1 = 0u64;
    let mut k2 = 0u64;

    if t >= 15 {
        k2 ^= u64::from(tail[14]) << 48;
    }
    if t >= 14 {
        k2 ^= u64::from(tail[13]) << 40;
    }
    if t >= 13 {
        k2 ^= u64::from(tail[12]) << 32;
    }
    if t >= 12 {
        k2 ^= u64::from(tail[11]) << 24;
    }
    if t >= 11 {
        k2 ^= u64::from(tail[10]) << 16;
    }
    if t >= 10 {
        k2 ^= u64::from(tail[9]) << 8;
    }
    if t >= 9 {
        k2 ^= u64::from(tail[8]);
        k2 = k2.wrapping_mul(C2);
        k2 = k2.rotate_left(33);
        k2 = k2.wrapping_mul(C1);
        h2 ^= k2;
    }

    if t >= 8 {
        k1 ^= u64::from(tail[7]) << 56;
    }
    if t >= 7 {
        k1 ^= u64::from(tail[6]) << 48;
    }
    if t >= 6 {
        k1 ^= u64::from(tail[5]) << 40;
    }
    if t >= 5 {
        k1 ^= u64::from(tail[4]) << 32;
    }
    if t >= 4 {
        k1 ^= u64::from(tail[3]) << 24;
    }
    if t >= 3 {
        k1 ^= u64::from(tail[2]) << 16;
    }
    if t >= 2 {
        k1 ^= u64::from(tail[1]) << 8;
    }
    if t >= 1 {
        k1 ^= u64::from(tail[0]);
        k1 = k1.wrapping_mul(C1);
        k1 = k1.rotate_left(31);
        k1 = k1.wrapping_mul(C2);
        h1 ^= k1;
    }

    h1 ^= len as u64;
    h2 ^= len as u64;
    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);
    h1 = fmix64(h1);
    h2 = fmix64(h2);
    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    let mut out = [0u8; 16];
    out[..8].copy_from_slice(&h1.to_le_bytes());
    out[8..].copy_from_slice(&h2.to_le_bytes());
    out
}

// =============================================================================
// TESTS
// =============================================================================
