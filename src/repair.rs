// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshmend Contributors

//! Repair orchestration
//!
//! Single-pass pipeline: scan for boundary edges, fill if any were found,
//! scan again for reporting. No retries and no rollback; a mesh that is
//! still open after filling is reported as such, not corrected further.

use crate::geometry::{fill_holes, find_boundary_edges, Mesh};
use serde::{Deserialize, Serialize};

/// Terminal state of a repair pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepairOutcome {
    /// No boundary edges found; mesh untouched
    Watertight,
    /// Fan triangles were appended and normals recomputed
    Repaired,
    /// Boundary edges existed but no candidate triangle could be formed;
    /// mesh untouched. Only possible for degenerate meshes with fewer
    /// than three usable vertices.
    NoChange,
}

/// Result of a single repair pass over one mesh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepairReport {
    pub outcome: RepairOutcome,
    pub open_edges_before: usize,
    pub triangles_before: usize,
    pub triangles_added: usize,
    /// Residual count after filling. Informational: the naive fan fill can
    /// open new edges even as it closes the old ones.
    pub open_edges_after: usize,
}

impl RepairReport {
    pub fn mutated(&self) -> bool {
        self.triangles_added > 0
    }
}

/// Run one detect-fill-detect pass over the mesh
///
/// Holds exclusive access to the mesh for the whole pass. Never fails for a
/// structurally valid mesh; all failure modes in the wider pipeline live at
/// the I/O boundary.
pub fn repair_mesh(mesh: &mut Mesh) -> RepairReport {
    let triangles_before = mesh.triangle_count();
    let boundary = find_boundary_edges(mesh);
    let open_edges_before = boundary.len();

    if boundary.is_empty() {
        return RepairReport {
            outcome: RepairOutcome::Watertight,
            open_edges_before: 0,
            triangles_before,
            triangles_added: 0,
            open_edges_after: 0,
        };
    }

    let triangles_added = fill_holes(mesh, &boundary);

    if triangles_added == 0 {
        return RepairReport {
            outcome: RepairOutcome::NoChange,
            open_edges_before,
            triangles_before,
            triangles_added: 0,
            open_edges_after: open_edges_before,
        };
    }

    // Full recount; boundary state is never maintained incrementally
    let open_edges_after = find_boundary_edges(mesh).len();

    RepairReport {
        outcome: RepairOutcome::Repaired,
        open_edges_before,
        triangles_before,
        triangles_added,
        open_edges_after,
    }
}
