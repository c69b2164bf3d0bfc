//! The per-algorithm protocol runner.
//!
//! One MT19937-64 seeded with 0 persists across the whole schedule; each
//! non-skipped entry draws its outer seed from it and emits one row.
//! Entries above an adapter's `max_data_length` are skipped without
//! drawing, so a length-capped table is a prefix of the uncapped one in
//! RNG-consumption order.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use rand_mt::Mt19937GenRand64;

use crate::adapter::HashAdapter;
use crate::checksum::length_checksum;
use crate::schedule::{self, LengthEntry};
use crate::writer::format_row;

/// Runs the given entries for one adapter, writing rows to `out`.
pub fn write_checksum_rows<W: Write>(
    adapter: &dyn HashAdapter,
    entries: &[LengthEntry],
    out: &mut W,
) -> io::Result<()> {
    let mut outer_rng = Mt19937GenRand64::new(0);
    for &entry in entries {
        if let Some(max) = adapter.max_data_length() {
            if entry.data_length > max {
                continue;
            }
        }
        let outer_seed = outer_rng.next_u64();
        let digest = length_checksum(adapter, outer_seed, entry);
        out.write_all(format_row(entry, outer_seed, &digest).as_bytes())?;
    }
    out.flush()
}

/// Runs the full schedule for one adapter into `"<name>.txt"` under
/// `dir`, returning the written path.
pub fn generate_checksum_file(adapter: &dyn HashAdapter, dir: &Path) -> io::Result<PathBuf> {
    let path = dir.join(format!("{}.txt", adapter.name()));
    let mut out = BufWriter::new(File::create(&path)?);
    write_checksum_rows(adapter, &schedule::entries(), &mut out)?;
    Ok(path)
}

// =============================================================================
// TESTS
// =============================================================================
