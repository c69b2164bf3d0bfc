//! # hashvex-hashes
//!
//! In-tree ports of the version-pinned hash functions referenced by the
//! hashvex corpus. Every function here is a straight port of the upstream
//! reference implementation at the named release tag, kept as close to the
//! original control flow as Rust allows so the two can be diffed side by
//! side. All ports are pure, allocation-free and deterministic.
//!
//! XXH3 is intentionally absent: the `xxhash-rust` crate tracks upstream
//! xxHash exactly and is consumed directly by the corpus crate.

// =============================================================================
// MODULES
// =============================================================================

pub mod chibihash;
pub mod farmhash;
pub mod komihash;
pub mod murmur3;
pub mod polymur;
pub mod rapidhash;
pub mod wyhash;

pub(crate) mod bytes;
