// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshmend Contributors

//! Geometry module - mesh representation and connectivity

mod boundary;
mod fill;
mod mesh;

pub use boundary::{
    build_edge_counts, find_boundary_edges, is_manifold, is_watertight, mesh_stats, Edge,
    MeshStats,
};
pub use fill::fill_holes;
pub use mesh::{Mesh, Triangle, Vertex};
