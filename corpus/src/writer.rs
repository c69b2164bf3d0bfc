//! Checksum-table row formatting.
//!
//! `<length>,<cycles>,<outer_seed as 16 hex digits>,<digest as 64 hex
//! digits>\n` — decimal lengths and cycle counts, lowercase hex, LF line
//! ending, pure ASCII. Consumers parse these files byte-for-byte; the
//! format is frozen.

use crate::schedule::LengthEntry;

/// Formats one output row, including the trailing newline.
pub fn format_row(entry: LengthEntry, outer_seed: u64, digest: &[u8; 32]) -> String {
    format!(
        "{},{},{:016x},{}\n",
        entry.data_length,
        entry.cycles,
        outer_seed,
        hex::encode(digest),
    )
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_golden_string() {
        let entry = LengthEntry { data_length: 17, cycles: 100 };
        let digest = [0xabu8; 32];
        assert_eq!(
            format_row(entry, 0x1f, &digest),
            "17,100,000000000000001f,\
             abababababababababababababababababababababababababababababababab\n",
        );
    }

    #[test]
    fn extreme_length_rows_stay_decimal() {
        let entry = LengthEntry { data_length: (1 << 32) + 1, cycles: 1 };
        let row = format_row(entry, u64::MAX, &[0u8; 32]);
        assert!(row.starts_with("4294967297,1,ffffffffffffffff,"));
        assert!(row.ends_with('\n'));
        assert!(row.is_ascii());
    }
}
