//! # hashvex-corpus
//!
//! Deterministic reference-vector protocol for a family of
//! non-cryptographic hash functions. For every supported
//! algorithm-version the crate produces two artifacts consumed by
//! downstream test suites:
//!
//! - a **checksum table**: per input length in a fixed schedule, a
//!   SHA-256 digest over the concatenation of many hash outputs computed
//!   on pseudo-random inputs of that length, and
//! - an **example table**: generated `builder.add(...)` source lines with
//!   individual hash values for short inputs.
//!
//! Everything here is bit-for-bit reproducible across runs and platforms.
//! The outer randomness is MT19937-64 seeded with 0; per-length inner
//! randomness is SplitMix64 seeded from the outer stream.

// =============================================================================
// MODULES
// =============================================================================

pub mod adapter;
pub mod adapters;
pub mod checksum;
pub mod examples;
pub mod prng;
pub mod runner;
pub mod schedule;
pub mod writer;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use adapter::HashAdapter;
pub use schedule::LengthEntry;
