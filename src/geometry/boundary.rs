// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshmend Contributors

//! Boundary-edge detection over triangle connectivity

use super::{Mesh, Triangle};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Canonical undirected edge between two vertex indices
///
/// Always stored with the smaller index first so the same edge hashes and
/// compares identically regardless of the winding it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    v0: usize,
    v1: usize,
}

impl Edge {
    pub fn new(a: usize, b: usize) -> Self {
        if a < b {
            Self { v0: a, v1: b }
        } else {
            Self { v0: b, v1: a }
        }
    }

    /// Smaller endpoint index
    pub fn v0(&self) -> usize {
        self.v0
    }

    /// Larger endpoint index
    pub fn v1(&self) -> usize {
        self.v1
    }
}

fn triangle_edges(triangle: &Triangle) -> [Edge; 3] {
    [
        Edge::new(triangle.indices[0], triangle.indices[1]),
        Edge::new(triangle.indices[1], triangle.indices[2]),
        Edge::new(triangle.indices[2], triangle.indices[0]),
    ]
}

/// Build the edge incidence map for a mesh
///
/// The count for each canonical edge is the number of triangles referencing
/// it in either winding direction. The map is rebuilt from scratch on every
/// call; nothing is cached between passes.
pub fn build_edge_counts(mesh: &Mesh) -> HashMap<Edge, u32> {
    let mut edge_counts: HashMap<Edge, u32> = HashMap::new();

    for triangle in &mesh.triangles {
        for edge in &triangle_edges(triangle) {
            *edge_counts.entry(*edge).or_insert(0) += 1;
        }
    }

    edge_counts
}

/// Find all boundary edges (edges referenced by exactly 1 triangle)
///
/// Interior edges are counted twice and excluded. Non-manifold edges
/// (count >= 3) also fail the test and are silently excluded; the detector
/// makes no attempt to flag them. The result follows first-insertion order
/// over the triangle scan, which callers must not rely on.
pub fn find_boundary_edges(mesh: &Mesh) -> Vec<Edge> {
    let mut edge_counts: HashMap<Edge, u32> = HashMap::new();
    let mut first_seen: Vec<Edge> = Vec::new();

    for triangle in &mesh.triangles {
        for edge in &triangle_edges(triangle) {
            let count = edge_counts.entry(*edge).or_insert(0);
            if *count == 0 {
                first_seen.push(*edge);
            }
            *count += 1;
        }
    }

    first_seen
        .into_iter()
        .filter(|edge| edge_counts[edge] == 1)
        .collect()
}

/// Check if mesh is manifold (each edge shared by at most 2 triangles)
pub fn is_manifold(mesh: &Mesh) -> bool {
    build_edge_counts(mesh).values().all(|&count| count <= 2)
}

/// Check if mesh is watertight (each edge shared by exactly 2 triangles)
pub fn is_watertight(mesh: &Mesh) -> bool {
    build_edge_counts(mesh).values().all(|&count| count == 2)
}

/// Connectivity summary for reporting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshStats {
    pub vertex_count: usize,
    pub triangle_count: usize,
    pub edge_count: usize,
    pub boundary_edge_count: usize,
    pub is_manifold: bool,
    pub is_watertight: bool,
}

/// Gather connectivity statistics in a single incidence pass
pub fn mesh_stats(mesh: &Mesh) -> MeshStats {
    let edge_counts = build_edge_counts(mesh);

    let boundary_edge_count = edge_counts.values().filter(|&&count| count == 1).count();

    MeshStats {
        vertex_count: mesh.vertex_count(),
        triangle_count: mesh.triangle_count(),
        edge_count: edge_counts.len(),
        boundary_edge_count,
        is_manifold: edge_counts.values().all(|&count| count <= 2),
        is_watertight: edge_counts.values().all(|&count| count == 2),
    }
}
