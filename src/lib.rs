// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshmend Contributors

//! Meshmend
//!
//! Repairs non-watertight triangular surface meshes. Detects boundary
//! (open) edges by counting edge incidence across triangles, closes them
//! with a deliberately naive fan triangulation, and recomputes normals.
//! The fill is a blunt closure rather than a geometric triangulation: it
//! removes the open-edge signature but does not guarantee a manifold or
//! watertight result.

pub mod corrupt;
pub mod geometry;
pub mod io;
pub mod repair;
pub mod session;
pub mod visualize;

pub use geometry::{find_boundary_edges, Edge, Mesh, Triangle, Vertex};
pub use io::{export_stl, import_stl, LoadError, SaveError};
pub use repair::{repair_mesh, RepairOutcome, RepairReport};
pub use session::{FileSelector, RepairSession, SessionError, SessionOutcome};

/// Repair a single STL file on disk
///
/// Convenience wrapper running a full session with no visualization.
pub fn repair_file(input: &str, output: &str) -> Result<SessionOutcome, SessionError> {
    RepairSession::new(&visualize::NoopVisualizer).run(input, output)
}
