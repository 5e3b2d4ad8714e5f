// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshmend Contributors

//! Naive fan-triangulation hole filling
//!
//! Connects every boundary edge to every other vertex in the mesh, not just
//! vertices near the hole. This removes the count-one signature from the
//! given edges at the cost of producing many degenerate and overlapping
//! faces; it is a blunt closure, not a geometric triangulation. Downstream
//! triangle counts depend on this exact policy, so it must not be swapped
//! for a smarter fill.

use super::{Edge, Mesh, Triangle};

/// Append fan triangles closing the given boundary edges
///
/// For each boundary edge {v1, v2}, one candidate triangle (v1, v2, i) is
/// produced per vertex index i distinct from both endpoints. All candidates
/// are appended in one batch and normals are recomputed once. Existing
/// triangles are never touched; vertices are never created.
///
/// Returns the number of triangles added. Zero (possible only for meshes
/// with fewer than three usable vertices) means the mesh was left untouched
/// and no normal pass ran.
pub fn fill_holes(mesh: &mut Mesh, boundary_edges: &[Edge]) -> usize {
    let mut candidates: Vec<Triangle> = Vec::new();

    for edge in boundary_edges {
        let (v1, v2) = (edge.v0(), edge.v1());
        for i in 0..mesh.vertex_count() {
            if i != v1 && i != v2 {
                candidates.push(Triangle::new([v1, v2, i]));
            }
        }
    }

    if candidates.is_empty() {
        return 0;
    }

    let added = candidates.len();
    mesh.triangles.extend(candidates);
    mesh.recompute_normals();
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{find_boundary_edges, Vertex};

    fn open_quad() -> Mesh {
        // Two triangles forming a quad; all four rim edges are open
        let mut mesh = Mesh::new();
        mesh.add_vertex(Vertex::at(0.0, 0.0, 0.0));
        mesh.add_vertex(Vertex::at(1.0, 0.0, 0.0));
        mesh.add_vertex(Vertex::at(1.0, 1.0, 0.0));
        mesh.add_vertex(Vertex::at(0.0, 1.0, 0.0));
        mesh.add_triangle(Triangle::new([0, 1, 2]));
        mesh.add_triangle(Triangle::new([0, 2, 3]));
        mesh
    }

    #[test]
    fn test_empty_boundary_is_noop() {
        let mut mesh = open_quad();
        let before = mesh.triangles.clone();

        let added = fill_holes(&mut mesh, &[]);
        assert_eq!(added, 0);
        assert_eq!(mesh.triangles, before);
    }

    #[test]
    fn test_fill_is_append_only() {
        let mut mesh = open_quad();
        let before = mesh.triangles.clone();
        let boundary = find_boundary_edges(&mesh);

        let added = fill_holes(&mut mesh, &boundary);
        assert!(added > 0);
        assert_eq!(mesh.triangle_count(), before.len() + added);
        assert_eq!(&mesh.triangles[..before.len()], &before[..]);
    }

    #[test]
    fn test_candidate_count_per_edge() {
        // One edge, n vertices -> n - 2 candidates
        let mut mesh = open_quad();
        let added = fill_holes(&mut mesh, &[Edge::new(0, 1)]);
        assert_eq!(added, mesh.vertex_count() - 2);
    }

    #[test]
    fn test_fill_never_creates_vertices() {
        let mut mesh = open_quad();
        let boundary = find_boundary_edges(&mesh);

        fill_holes(&mut mesh, &boundary);
        assert_eq!(mesh.vertex_count(), 4);
        assert!(mesh.indices_in_bounds());
    }

    #[test]
    fn test_filled_edges_lose_boundary_signature() {
        let mut mesh = open_quad();
        let boundary = find_boundary_edges(&mesh);
        assert_eq!(boundary.len(), 4);

        fill_holes(&mut mesh, &boundary);

        let after = find_boundary_edges(&mesh);
        for edge in &boundary {
            assert!(!after.contains(edge), "edge {:?} still open", edge);
        }
    }

    #[test]
    fn test_degenerate_two_vertex_mesh_reports_no_change() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Vertex::at(0.0, 0.0, 0.0));
        mesh.add_vertex(Vertex::at(1.0, 0.0, 0.0));

        let added = fill_holes(&mut mesh, &[Edge::new(0, 1)]);
        assert_eq!(added, 0);
        assert_eq!(mesh.triangle_count(), 0);
    }
}
