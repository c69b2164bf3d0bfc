//! Example-table generation.
//!
//! For the algorithms with a published example table: `mt19937_64(0)`,
//! lengths 0..=200, ten examples per length. Data bytes are drawn one per
//! 64-bit word taking the low 8 bits, then the per-example seed words.
//! Each example becomes one generated `builder.add(...)` source line whose
//! exact field layout and spacing differs per algorithm family and is
//! frozen.
//!
//! Komihash 5.10 appends a trailer of 512 extra 64-byte examples that pin
//! the tail byte and the low seed byte, exercising alignment cases around
//! the 128-cycle boundary.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use rand_mt::Mt19937GenRand64;

use hashvex_hashes::komihash::{v4_3, v4_5, v4_7, v5_0, v5_10, v5_26};
use hashvex_hashes::murmur3::{murmur3_x64_128, murmur3_x86_32};
use hashvex_hashes::polymur::PolymurHashParams;
use hashvex_hashes::wyhash::final3;
use xxhash_rust::xxh3::{xxh3_64, xxh3_64_with_seed};

const MAX_SIZE: u64 = 200;
const EXAMPLES_PER_SIZE: u32 = 10;

/// One low-8-bit byte per 64-bit word.
fn draw_data(rng: &mut Mt19937GenRand64, buf: &mut [u8]) {
    for b in buf.iter_mut() {
        *b = rng.next_u64() as u8;
    }
}

/// Whether `name` has an example table.
pub fn has_examples(name: &str) -> bool {
    matches!(
        name,
        "Komihash 4.3"
            | "Komihash 4.5"
            | "Komihash 4.7"
            | "Komihash 5.0"
            | "Komihash 5.10"
            | "Komihash 5.26"
            | "Wyhash final 3"
            | "Murmur3 32"
            | "Murmur3 128"
            | "XXH3"
            | "PolymurHash 2.0"
    )
}

/// Writes the example table for `name` to `out`.
///
/// Returns `false` without writing anything when the algorithm has no
/// example table.
pub fn write_examples<W: Write>(name: &str, out: &mut W) -> io::Result<bool> {
    match name {
        "Komihash 4.3" => komihash_table(v4_3::komihash, false, out)?,
        "Komihash 4.5" => komihash_table(v4_5::komihash, false, out)?,
        "Komihash 4.7" => komihash_table(v4_7::komihash, false, out)?,
        "Komihash 5.0" => komihash_table(v5_0::komihash, false, out)?,
        "Komihash 5.10" => komihash_table(v5_10::komihash, true, out)?,
        "Komihash 5.26" => komihash_table(v5_26::komihash, false, out)?,
        "Wyhash final 3" => wyhash_final3_table(out)?,
        "Murmur3 32" => murmur3_32_table(out)?,
        "Murmur3 128" => murmur3_128_table(out)?,
        "XXH3" => xxh3_table(out)?,
        "PolymurHash 2.0" => polymur_table(out)?,
        _ => return Ok(false),
    }
    out.flush()?;
    Ok(true)
}

/// Writes `"<name> examples.txt"` under `dir`; `None` when `name` has no
/// example table.
pub fn generate_example_file(name: &str, dir: &Path) -> io::Result<Option<PathBuf>> {
    if !has_examples(name) {
        return Ok(None);
    }
    let path = dir.join(format!("{name} examples.txt"));
    let mut out = BufWriter::new(File::create(&path)?);
    write_examples(name, &mut out)?;
    Ok(Some(path))
}

// =============================================================================
// PER-FAMILY TABLES
// =============================================================================

fn komihash_table<W: Write>(
    f: fn(&[u8], u64) -> u64,
    trailer: bool,
    out: &mut W,
) -> io::Result<()> {
    let mut rng = Mt19937GenRand64::new(0);
    for size in 0..=MAX_SIZE {
        let mut data = vec![0u8; size as usize];
        for _ in 0..EXAMPLES_PER_SIZE {
            draw_data(&mut rng, &mut data);
            let seed = rng.next_u64();
            writeln!(
                out,
                "builder.add(0x{:016x}L, 0x{:016x}L, 0x{:016x}L, \"{}\");",
                f(&data, 0),
                f(&data, seed),
                seed,
                hex::encode(&data),
            )?;
        }
    }
    if trailer {
        let mut data = [0u8; 64];
        for s in 0..256u64 {
            for i in 127..=128u64 {
                draw_data(&mut rng, &mut data[..63]);
                data[63] = i as u8;
                let seed = (rng.next_u64() >> 8 << 8) | s;
                writeln!(
                    out,
                    "builder.add(0x{:016x}L, 0x{:016x}L, 0x{:016x}L, \"{}\");",
                    f(&data, 0),
                    f(&data, seed),
                    seed,
                    hex::encode(data),
                )?;
            }
        }
    }
    Ok(())
}

fn wyhash_final3_table<W: Write>(out: &mut W) -> io::Result<()> {
    let mut rng = Mt19937GenRand64::new(0);
    for size in 0..=MAX_SIZE {
        let mut data = vec![0u8; size as usize];
        for _ in 0..EXAMPLES_PER_SIZE {
            draw_data(&mut rng, &mut data);
            let seed1 = rng.next_u64();
            let seed2 = rng.next_u64();
            // Unlike the checksum adapter, the custom secret is derived
            // for every example.
            let secret = final3::make_secret(seed2);
            writeln!(
                out,
                "builder.add(0x{:016x}L,0x{:016x}L,0x{:016x}L,0x{:016x}L,0x{:016x}L,0x{:016x}L,\"{}\");",
                final3::wyhash(&data, 0, &final3::WYP),
                final3::wyhash(&data, seed1, &final3::WYP),
                final3::wyhash(&data, 0, &secret),
                final3::wyhash(&data, seed1, &secret),
                seed1,
                seed2,
                hex::encode(&data),
            )?;
        }
    }
    Ok(())
}

fn murmur3_32_table<W: Write>(out: &mut W) -> io::Result<()> {
    let mut rng = Mt19937GenRand64::new(0);
    for size in 0..=MAX_SIZE {
        let mut data = vec![0u8; size as usize];
        for _ in 0..EXAMPLES_PER_SIZE {
            draw_data(&mut rng, &mut data);
            let seed = rng.next_u64() as u32;
            writeln!(
                out,
                "builder.add(0x{:08x},0x{:08x},0x{:08x},\"{}\");",
                murmur3_x86_32(&data, 0),
                murmur3_x86_32(&data, seed),
                seed,
                hex::encode(&data),
            )?;
        }
    }
    Ok(())
}

fn murmur3_128_table<W: Write>(out: &mut W) -> io::Result<()> {
    let mut rng = Mt19937GenRand64::new(0);
    for size in 0..=MAX_SIZE {
        let mut data = vec![0u8; size as usize];
        for _ in 0..EXAMPLES_PER_SIZE {
            draw_data(&mut rng, &mut data);
            let seed = rng.next_u64() as u32;
            writeln!(
                out,
                "builder.add(\"{}\",\"{}\",0x{:08x},\"{}\");",
                hex::encode(murmur3_x64_128(&data, 0)),
                hex::encode(murmur3_x64_128(&data, seed)),
                seed,
                hex::encode(&data),
            )?;
        }
    }
    Ok(())
}

fn xxh3_table<W: Write>(out: &mut W) -> io::Result<()> {
    let mut rng = Mt19937GenRand64::new(0);
    for size in 0..=MAX_SIZE {
        let mut data = vec![0u8; size as usize];
        for _ in 0..EXAMPLES_PER_SIZE {
            draw_data(&mut rng, &mut data);
            let seed = rng.next_u64();
            writeln!(
                out,
                "builder.add(0x{:016x}L,0x{:016x}L,0x{:016x}L,\"{}\");",
                xxh3_64(&data),
                xxh3_64_with_seed(&data, seed),
                seed,
                hex::encode(&data),
            )?;
        }
    }
    Ok(())
}

fn polymur_table<W: Write>(out: &mut W) -> io::Result<()> {
    let mut rng = Mt19937GenRand64::new(0);
    for size in 0..=MAX_SIZE {
        let mut data = vec![0u8; size as usize];
        for _ in 0..EXAMPLES_PER_SIZE {
            draw_data(&mut rng, &mut data);
            let tweak = rng.next_u64();
            let seed0 = rng.next_u64();
            let seed1 = rng.next_u64();
            writeln!(
                out,
                "builder.add(0x{:016x}L, 0x{:016x}L, 0x{:016x}L, 0x{:016x}L, 0x{:016x}L, \"{}\");",
                PolymurHashParams::from_seed(seed0).hash(&data, tweak),
                PolymurHashParams::new(seed0, seed1).hash(&data, tweak),
                tweak,
                seed0,
                seed1,
                hex::encode(&data),
            )?;
        }
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
