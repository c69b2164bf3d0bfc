//! komihash, 5.x value line (tags 5.0, 5.10 and 5.26).
//!
//! The bulk loop pairs each of the first four 8-byte lanes with the
//! lane 32 bytes ahead, and the final-block padding marker is fixed at
//! bit `len * 8`.

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
            let t2 = see5 ^ lu64(msg, off + 32);
            let t3 = see2 ^ lu64(msg, off + 8);
            let t4 = see6 ^ lu64(msg, off + 40);
            let t5 = see3 ^ lu64(msg, off + 16);
            let t6 = see7 ^ lu64(msg, off + 48);
            let t7 = see4 ^ lu64(msg, off + 24);
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
        r2h ^= 1u64.wrapping_shl(ml8) | (y >> 1).wrapping_shr(!ml8);
    } else if rem > 3 {
        let mh = lu32(msg, off + rem - 4);
        let ml = u64::from(lu32(msg, off));
        r2l ^= (1u64 << ml8) | ml | ((u64::from(mh) << 32) >> (64 - ml8));
    } else if rem > 0 {
        let mut m = (1u64 << ml8) | u64::from(msg[off]);
        if rem > 1 {
            m |= u64::from(msg[off + 1]) << 8;
        }
        if rem > 2 {
            m |= u64::from(msg[off + 2]) << 16;
        }
        r2l ^= m;
    } else if non_zero {
        r2l ^= 1;
    }

    finish(r2l, r2h, see5)
}
