//! Checksums Command
//!
//! Runs the full length schedule for each selected algorithm and writes
//! one `"<name>.txt"` per algorithm. The extreme schedule rows allocate
//! multi-gigabyte buffers; expect the tail of each run to be slow.

use anyhow::{Context, Result};
use hashvex_corpus::runner::generate_checksum_file;
use std::path::Path;

use super::resolve;

// =============================================================================
// CHECKSUMS
// =============================================================================

/// Generate checksum tables into `out_dir`.
pub fn generate_checksums(out_dir: &Path, names: &[String]) -> Result<()> {
    for adapter in resolve(names)? {
        eprintln!("checksums: {}", adapter.name());
        let path = generate_checksum_file(adapter.as_ref(), out_dir)
            .with_context(|| format!("failed to write checksum table for {}", adapter.name()))?;
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}
