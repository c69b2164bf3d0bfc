//! CLI Commands
//!
//! All hashvex CLI commands organized as separate modules.

mod checksums;
mod examples;
mod list;

pub use checksums::generate_checksums;
pub use examples::generate_examples;
pub use list::list_algorithms;

use anyhow::{bail, Result};
use hashvex_corpus::{adapters, HashAdapter};

/// Resolves algorithm names against the registry; empty means all.
pub(crate) fn resolve(names: &[String]) -> Result<Vec<Box<dyn HashAdapter>>> {
    if names.is_empty() {
        return Ok(adapters::all());
    }
    let mut out = Vec::with_capacity(names.len());
    for name in names {
        match adapters::find(name) {
            Some(adapter) => out.push(adapter),
            None => bail!(
                "unknown algorithm {name:?}; known algorithms: {}",
                adapters::names().join(", "),
            ),
        }
    }
    Ok(out)
}
