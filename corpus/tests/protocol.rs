//! End-to-end protocol checks over the adapter registry.

#![allow(clippy::unwrap_used)]

use hashvex_corpus::adapters;
use hashvex_corpus::runner::write_checksum_rows;
use hashvex_corpus::schedule::{self, LengthEntry};
use hashvex_corpus::HashAdapter;

// =============================================================================
// REGISTRY METADATA
// =============================================================================

#[test]
fn adapter_metadata_matches_the_published_table() {
    // (name, seed_size, hash_size, capped)
    let expected: &[(&str, usize, usize, bool)] = &[
        ("Komihash 4.3", 8, 16, false),
        ("Komihash 4.5", 8, 16, false),
        ("Komihash 4.7", 8, 16, false),
        ("Komihash 5.0", 8, 16, false),
        ("Komihash 5.10", 8, 16, false),
        ("Komihash 5.26", 8, 16, false),
        ("Wyhash final 3", 24, 32, false),
        ("Wyhash final 4", 16, 16, false),
        ("Murmur3 32", 4, 8, true),
        ("Murmur3 128", 4, 32, true),
        ("XXH3", 8, 16, false),
        ("XXH3_128", 8, 32, false),
        ("FarmHash NA", 24, 24, false),
        ("FarmHash UO", 24, 24, false),
        ("PolymurHash 2.0", 24, 16, false),
        ("ChibiHash 2", 8, 16, false),
        ("Rapidhash 3", 8, 16, false),
    ];

    let all = adapters::all();
    assert_eq!(all.len(), expected.len());
    for (adapter, &(name, seed, hash, capped)) in all.iter().zip(expected) {
        assert_eq!(adapter.name(), name);
        assert_eq!(adapter.seed_size(), seed, "{name}");
        assert_eq!(adapter.hash_size(), hash, "{name}");
        assert_eq!(adapter.max_data_length().is_some(), capped, "{name}");
        if capped {
            assert_eq!(adapter.max_data_length(), Some(i32::MAX as u64));
        }
    }
}

// =============================================================================
// ROW STRUCTURE
// =============================================================================

fn run_small(adapter: &dyn HashAdapter) -> String {
    let entries = [
        LengthEntry { data_length: 0, cycles: 1 },
        LengthEntry { data_length: 1, cycles: 100 },
        LengthEntry { data_length: 63, cycles: 2 },
        LengthEntry { data_length: 64, cycles: 2 },
        LengthEntry { data_length: 65, cycles: 2 },
    ];
    let mut buf = Vec::new();
    write_checksum_rows(adapter, &entries, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn every_adapter_emits_well_formed_rows() {
    for adapter in adapters::all() {
        let text = run_small(adapter.as_ref());
        assert_eq!(text.lines().count(), 5, "{}", adapter.name());
        for line in text.lines() {
            let fields: Vec<&str> = line.split(',').collect();
            assert_eq!(fields.len(), 4, "{}: {line}", adapter.name());
            fields[0].parse::<u64>().unwrap();
            fields[1].parse::<u32>().unwrap();
            assert_eq!(fields[2].len(), 16);
            assert_eq!(fields[3].len(), 64);
            assert!(line.is_ascii());
        }
    }
}

#[test]
fn adapters_produce_distinct_tables() {
    // The komihash release lines 4.3/4.5/4.7 and 5.0/5.10/5.26 are
    // value-compatible within each line, so their tables coincide.
    let same_line = |a: &str, b: &str| {
        let line_of = |n: &str| match n {
            "Komihash 4.3" | "Komihash 4.5" | "Komihash 4.7" => Some(4),
            "Komihash 5.0" | "Komihash 5.10" | "Komihash 5.26" => Some(5),
            _ => None,
        };
        line_of(a).is_some() && line_of(a) == line_of(b)
    };

    let mut tables = Vec::new();
    for adapter in adapters::all() {
        tables.push((adapter.name(), run_small(adapter.as_ref())));
    }
    for (i, (name_a, a)) in tables.iter().enumerate() {
        for (name_b, b) in &tables[i + 1..] {
            if same_line(name_a, name_b) {
                assert_eq!(a, b, "{name_a} vs {name_b}");
            } else {
                assert_ne!(a, b, "{name_a} vs {name_b}");
            }
        }
    }
}

// =============================================================================
// SCHEDULE / CAPPING INTERACTION
// =============================================================================

#[test]
fn capped_tables_are_a_prefix_of_the_schedule() {
    let schedule = schedule::entries();
    let capped: Vec<LengthEntry> = schedule
        .iter()
        .copied()
        .filter(|e| e.data_length <= i32::MAX as u64)
        .collect();
    // The six extreme lengths are the only ones above the cap... except
    // 2^31 - 1, which is exactly at it.
    assert_eq!(schedule.len() - capped.len(), 5);
    assert_eq!(capped.last().unwrap().data_length, (1 << 31) - 1);
}

// =============================================================================
// THIRD-PARTY PINS
// =============================================================================

#[test]
fn xxh3_empty_input_reference_value() {
    // Canonical XXH3_64bits("") from upstream xxHash.
    assert_eq!(xxhash_rust::xxh3::xxh3_64(b""), 0x2d06_8005_38d3_94c2);
    assert_eq!(
        xxhash_rust::xxh3::xxh3_64_with_seed(b"", 0),
        0x2d06_8005_38d3_94c2,
    );
}

#[test]
fn mt19937_64_zero_seed_stream_is_stable() {
    let mut a = rand_mt::Mt19937GenRand64::new(0);
    let mut b = rand_mt::Mt19937GenRand64::new(0);
    for _ in 0..1000 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}
