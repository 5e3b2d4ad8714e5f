// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshmend Contributors

//! Fixture corruption utility
//!
//! Randomizes a fraction of the bytes of an encoded mesh file to produce
//! damaged test inputs. Standalone: nothing in the repair pipeline depends
//! on this module.

use anyhow::{Context, Result};
use rand::Rng;
use std::fs;
use std::path::Path;

/// Randomize `fraction` of the bytes in `data` in place
///
/// Byte positions are drawn independently, so fewer than
/// `fraction * len` distinct bytes may end up changed. Length is always
/// preserved.
pub fn corrupt_bytes<R: Rng>(data: &mut [u8], fraction: f64, rng: &mut R) {
    if data.is_empty() {
        return;
    }

    let mutations = (data.len() as f64 * fraction) as usize;
    for _ in 0..mutations {
        let index = rng.gen_range(0..data.len());
        data[index] = rng.gen();
    }
}

/// Read a file, corrupt a fraction of its bytes, and write the result
pub fn corrupt_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    fraction: f64,
) -> Result<usize> {
    let input = input.as_ref();
    let output = output.as_ref();

    let mut data = fs::read(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;

    let mutations = (data.len() as f64 * fraction) as usize;
    corrupt_bytes(&mut data, fraction, &mut rand::thread_rng());

    fs::write(output, &data)
        .with_context(|| format!("Failed to write corrupted file: {}", output.display()))?;

    Ok(mutations)
}
