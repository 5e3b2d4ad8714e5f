// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshmend Contributors

//! Repair session wiring
//!
//! Runs loader -> orchestrator -> exporter for one input file. I/O failures
//! abort the remaining stages immediately; there are no retries. The only
//! state persisted anywhere is the exported mesh file.

use crate::geometry::find_boundary_edges;
use crate::io::{export_stl, import_stl, LoadError, SaveError};
use crate::repair::{repair_mesh, RepairReport};
use crate::visualize::MeshVisualizer;
use std::path::PathBuf;
use thiserror::Error;

/// Capability for choosing the input file
///
/// Lets interactive front ends (file pickers) and plain CLI arguments plug
/// into the same session. `None` means nothing was selected.
pub trait FileSelector {
    fn select_input(&self) -> Option<PathBuf>;
}

impl FileSelector for Option<PathBuf> {
    fn select_input(&self) -> Option<PathBuf> {
        self.clone()
    }
}

/// I/O failures surfaced by a repair session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Save(#[from] SaveError),
}

/// How a completed session ended
#[derive(Debug)]
pub enum SessionOutcome {
    /// Input had no open edges; nothing written
    AlreadyWatertight,
    /// Repair ran and the result was exported to `output`
    Repaired {
        report: RepairReport,
        output: String,
    },
    /// Boundary edges existed but the filler could add nothing; the
    /// unchanged mesh was not exported
    NoChange { report: RepairReport },
}

/// One-shot repair session over a single input file
pub struct RepairSession<'a> {
    visualizer: &'a dyn MeshVisualizer,
}

impl<'a> RepairSession<'a> {
    pub fn new(visualizer: &'a dyn MeshVisualizer) -> Self {
        Self { visualizer }
    }

    /// Load, repair, and export one mesh
    ///
    /// Holds the mesh exclusively for the whole run. The output file is
    /// written only when the filler actually mutated the mesh; a watertight
    /// input ends the session without touching disk.
    pub fn run(&self, input: &str, output: &str) -> Result<SessionOutcome, SessionError> {
        let mut mesh = import_stl(input)?;

        let open_edges = find_boundary_edges(&mesh);
        if !open_edges.is_empty() {
            self.visualizer.display(&mesh, &open_edges, "Corrupted mesh");
        }

        let report = repair_mesh(&mut mesh);

        if report.open_edges_before == 0 {
            return Ok(SessionOutcome::AlreadyWatertight);
        }

        if !report.mutated() {
            return Ok(SessionOutcome::NoChange { report });
        }

        let residual = find_boundary_edges(&mesh);
        self.visualizer.display(&mesh, &residual, "Repaired mesh");

        export_stl(&mesh, output)?;

        Ok(SessionOutcome::Repaired {
            report,
            output: output.to_string(),
        })
    }
}
