// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshmend Contributors

//! Meshmend CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use meshmend::geometry::mesh_stats;
use meshmend::session::{FileSelector, RepairSession, SessionOutcome};
use meshmend::visualize::{ConsoleVisualizer, NoopVisualizer, MeshVisualizer};
use meshmend::import_stl;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "meshmend")]
#[command(about = "Meshmend - STL boundary-edge detection and hole filling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input STL file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file
    #[arg(short, long, value_name = "FILE", default_value = "repaired.stl")]
    output: PathBuf,

    /// Verbose output (lists open edges before and after repair)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Repair an STL file by closing its open edges
    Repair {
        /// Input STL file
        input: PathBuf,

        /// Output file
        #[arg(short, long, default_value = "repaired.stl")]
        output: PathBuf,

        /// Write the repair report as JSON to this path
        #[arg(long)]
        report: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print connectivity statistics for an STL file
    Info {
        /// Input STL file
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Repair {
            input,
            output,
            report,
            verbose,
        }) => repair_command(&input, &output, report.as_deref(), verbose),
        Some(Commands::Info { input }) => info_command(&input),
        Some(Commands::Version) => {
            println!("Meshmend v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => {
            // Default behavior: repair input to output
            let selector = cli.input;
            match selector.select_input() {
                Some(input) => repair_command(&input, &cli.output, None, cli.verbose),
                None => {
                    eprintln!("{} No input file selected", "Error:".red());
                    eprintln!("Usage: meshmend <INPUT> --output <OUTPUT>");
                    std::process::exit(1);
                }
            }
        }
    }
}

fn repair_command(
    input: &std::path::Path,
    output: &std::path::Path,
    report_path: Option<&std::path::Path>,
    verbose: bool,
) -> Result<()> {
    let input_str = input.display().to_string();
    let output_str = output.display().to_string();

    let console = ConsoleVisualizer::default();
    let visualizer: &dyn MeshVisualizer = if verbose { &console } else { &NoopVisualizer };

    let session = RepairSession::new(visualizer);
    let outcome = match session.run(&input_str, &output_str) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            std::process::exit(1);
        }
    };

    match &outcome {
        SessionOutcome::AlreadyWatertight => {
            println!(
                "{} {}",
                "✅".green(),
                "Mesh is already watertight; no repair needed, nothing written".green()
            );
        }
        SessionOutcome::NoChange { report } => {
            println!(
                "{} {} ({} open edge(s), no fillable candidates)",
                "⚠".yellow(),
                "Mesh is degenerate; no change made".yellow(),
                report.open_edges_before
            );
        }
        SessionOutcome::Repaired { report, output } => {
            println!(
                "{} Closed {} open edge(s) with {} new triangle(s)",
                "✅".green(),
                report.open_edges_before,
                report.triangles_added
            );
            if report.open_edges_after > 0 {
                // Known limitation of the fan fill, reported as information
                println!(
                    "{} {} open edge(s) remain after repair",
                    "⚠".yellow(),
                    report.open_edges_after
                );
            }
            println!("Output: {}", output.cyan());
        }
    }

    if let Some(path) = report_path {
        if let SessionOutcome::Repaired { report, .. } | SessionOutcome::NoChange { report } =
            &outcome
        {
            let json = serde_json::to_string_pretty(report)?;
            std::fs::write(path, json)?;
            println!("Report: {}", path.display().to_string().cyan());
        }
    }

    Ok(())
}

fn info_command(input: &std::path::Path) -> Result<()> {
    let mesh = match import_stl(&input.display().to_string()) {
        Ok(mesh) => mesh,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            std::process::exit(1);
        }
    };

    let stats = mesh_stats(&mesh);

    println!("{}", "Mesh statistics".bold());
    println!("  {} {}", "Vertices:".bright_black(), stats.vertex_count);
    println!("  {} {}", "Triangles:".bright_black(), stats.triangle_count);
    println!("  {} {}", "Edges:".bright_black(), stats.edge_count);
    println!(
        "  {} {}",
        "Open edges:".bright_black(),
        if stats.boundary_edge_count > 0 {
            stats.boundary_edge_count.to_string().yellow()
        } else {
            stats.boundary_edge_count.to_string().green()
        }
    );
    println!(
        "  {} {}",
        "Manifold:".bright_black(),
        colored_bool(stats.is_manifold)
    );
    println!(
        "  {} {}",
        "Watertight:".bright_black(),
        colored_bool(stats.is_watertight)
    );

    Ok(())
}

fn colored_bool(value: bool) -> colored::ColoredString {
    if value {
        "yes".green()
    } else {
        "no".red()
    }
}
