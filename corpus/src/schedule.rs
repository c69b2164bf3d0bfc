//! The fixed length schedule.
//!
//! Cycle counts taper as lengths grow: dense coverage with 100 cycles up
//! to 1 KiB, 10 cycles up to 4 KiB, then single cycles at the lengths
//! around the `i32`/`u32` boundaries where implementations historically
//! break.

/// One schedule entry: an input length and how many hashes to fold into
/// its digest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LengthEntry {
    /// Input length in bytes.
    pub data_length: u64,
    /// Number of (seed, data, hash) cycles at this length.
    pub cycles: u32,
}

/// The complete schedule, in output order. 4103 entries.
pub fn entries() -> Vec<LengthEntry> {
    let mut out = Vec::with_capacity(4103);
    out.push(LengthEntry { data_length: 0, cycles: 1 });
    for len in 1..=1024u64 {
        out.push(LengthEntry { data_length: len, cycles: 100 });
    }
    for len in 1025..=4096u64 {
        out.push(LengthEntry { data_length: len, cycles: 10 });
    }
    for len in [
        (1u64 << 31) - 1,
        1u64 << 31,
        (1u64 << 31) + 1,
        (1u64 << 32) - 1,
        1u64 << 32,
        (1u64 << 32) + 1,
    ] {
        out.push(LengthEntry { data_length: len, cycles: 1 });
    }
    out
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_has_4103_entries_in_order() {
        let s = entries();
        assert_eq!(s.len(), 4103);
        assert_eq!(s[0], LengthEntry { data_length: 0, cycles: 1 });
        assert_eq!(s[1], LengthEntry { data_length: 1, cycles: 100 });
        assert_eq!(s[1024], LengthEntry { data_length: 1024, cycles: 100 });
        assert_eq!(s[1025], LengthEntry { data_length: 1025, cycles: 10 });
        assert_eq!(s[4096], LengthEntry { data_length: 4096, cycles: 10 });
        assert_eq!(s[4097].data_length, (1 << 31) - 1);
        assert_eq!(s[4102], LengthEntry { data_length: (1 << 32) + 1, cycles: 1 });
        for w in s.windows(2) {
            assert!(w[0].data_length < w[1].data_length);
        }
    }
}
