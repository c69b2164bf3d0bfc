//! Adapter registry: one entry per algorithm-version, in canonical order.

use crate::adapter::HashAdapter;

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
pub mod xxh3;

// =============================================================================
// REGISTRY
// =============================================================================

/// All adapters in canonical output order.
pub fn all() -> Vec<Box<dyn HashAdapter>> {
    vec![
        Box::new(komihash::Komihash::V4_3),
        Box::new(komihash::Komihash::V4_5),
        Box::new(komihash::Komihash::V4_7),
        Box::new(komihash::Komihash::V5_0),
        Box::new(komihash::Komihash::V5_10),
        Box::new(komihash::Komihash::V5_26),
        Box::new(wyhash::WyhashFinal3),
        Box::new(wyhash::WyhashFinal4),
        Box::new(murmur3::Murmur3_32),
        Box::new(murmur3::Murmur3_128),
        Box::new(xxh3::Xxh3_64),
        Box::new(xxh3::Xxh3_128),
        Box::new(farmhash::FarmHashNa),
        Box::new(farmhash::FarmHashUo),
        Box::new(polymur::PolymurHash2),
        Box::new(chibihash::ChibiHash2),
        Box::new(rapidhash::Rapidhash3),
    ]
}

/// Looks an adapter up by its display name.
pub fn find(name: &str) -> Option<Box<dyn HashAdapter>> {
    all().into_iter().find(|a| a.name() == name)
}

/// The display names in canonical order.
pub fn names() -> Vec<&'static str> {
    all().iter().map(|a| a.name()).collect()
}

// =============================================================================
// TESTS
// =============================================================================
