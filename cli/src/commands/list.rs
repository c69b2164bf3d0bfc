//! List Command

use hashvex_corpus::adapters;
use hashvex_corpus::examples::has_examples;

// =============================================================================
// LIST
// =============================================================================

/// Print the supported algorithms with their seed and hash widths.
pub fn list_algorithms() {
    for adapter in adapters::all() {
        let examples = if has_examples(adapter.name()) {
            ", examples"
        } else {
            ""
        };
        println!(
            "{} (seed {} bytes, hash {} bytes{examples})",
            adapter.name(),
            adapter.seed_size(),
            adapter.hash_size(),
        );
    }
}
