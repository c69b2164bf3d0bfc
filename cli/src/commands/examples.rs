//! Examples Command
//!
//! Writes `"<name> examples.txt"` for the algorithms that have an
//! example table. Algorithms without one are silently skipped unless
//! they were named explicitly.

use anyhow::{Context, Result};
use hashvex_corpus::examples::generate_example_file;
use std::path::Path;

use super::resolve;

// =============================================================================
// EXAMPLES
// =============================================================================

/// Generate example tables into `out_dir`.
pub fn generate_examples(out_dir: &Path, names: &[String]) -> Result<()> {
    let explicit = !names.is_empty();
    for adapter in resolve(names)? {
        let written = generate_example_file(adapter.name(), out_dir)
            .with_context(|| format!("failed to write example table for {}", adapter.name()))?;
        match written {
            Some(path) => eprintln!("wrote {}", path.display()),
            None if explicit => {
                eprintln!("note: {} has no example table", adapter.name());
            }
            None => {}
        }
    }
    Ok(())
}
