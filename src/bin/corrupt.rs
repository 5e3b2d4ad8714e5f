// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshmend Contributors

//! Fixture generator: randomize bytes of an encoded mesh file

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use meshmend::corrupt::corrupt_file;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "meshmend-corrupt")]
#[command(about = "Corrupt an encoded mesh file to produce damaged test fixtures", long_about = None)]
struct Cli {
    /// Input file to corrupt
    input: PathBuf,

    /// Output path for the corrupted copy
    #[arg(short, long, default_value = "corrupted.stl")]
    output: PathBuf,

    /// Fraction of bytes to randomize
    #[arg(short, long, default_value = "0.01")]
    fraction: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !(0.0..=1.0).contains(&cli.fraction) {
        eprintln!("{} fraction must be within [0, 1]", "Error:".red());
        std::process::exit(1);
    }

    let mutations = corrupt_file(&cli.input, &cli.output, cli.fraction)?;

    println!(
        "Randomized {} byte position(s): {} -> {}",
        mutations,
        cli.input.display(),
        cli.output.display().to_string().cyan()
    );

    Ok(())
}
