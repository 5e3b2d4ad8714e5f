// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshmend Contributors

//! Mesh inspection output
//!
//! Purely observational: a visualizer never mutates the mesh and is not
//! required for repair correctness. Injected into the session so callers
//! can swap in richer renderers.

use crate::geometry::{Edge, Mesh};
use colored::Colorize;

/// Capability for showing a mesh and its open edges to a human
pub trait MeshVisualizer {
    fn display(&self, mesh: &Mesh, open_edges: &[Edge], title: &str);
}

/// Visualizer that does nothing
pub struct NoopVisualizer;

impl MeshVisualizer for NoopVisualizer {
    fn display(&self, _mesh: &Mesh, _open_edges: &[Edge], _title: &str) {}
}

/// Console visualizer printing an open-edge summary
pub struct ConsoleVisualizer {
    /// Maximum number of edges to list before truncating
    pub max_edges: usize,
}

impl Default for ConsoleVisualizer {
    fn default() -> Self {
        Self { max_edges: 20 }
    }
}

impl MeshVisualizer for ConsoleVisualizer {
    fn display(&self, mesh: &Mesh, open_edges: &[Edge], title: &str) {
        println!("\n{}", "━".repeat(60).bright_black());
        println!("{} {}", title.bold(), format_counts(mesh).cyan());
        println!("{}", "━".repeat(60).bright_black());

        if open_edges.is_empty() {
            println!("{} {}", "✅".green(), "no open edges".green());
            return;
        }

        println!(
            "{} {} open edge(s):",
            "⚠".yellow(),
            open_edges.len().to_string().yellow().bold()
        );

        for edge in open_edges.iter().take(self.max_edges) {
            let ends = (mesh.vertices.get(edge.v0()), mesh.vertices.get(edge.v1()));
            match ends {
                (Some(a), Some(b)) => println!(
                    "  {} [{:>4} - {:<4}] ({:.3}, {:.3}, {:.3}) -> ({:.3}, {:.3}, {:.3})",
                    "edge".bright_black(),
                    edge.v0(),
                    edge.v1(),
                    a.position.x,
                    a.position.y,
                    a.position.z,
                    b.position.x,
                    b.position.y,
                    b.position.z
                ),
                _ => println!(
                    "  {} [{:>4} - {:<4}] (vertex index out of bounds)",
                    "edge".bright_black(),
                    edge.v0(),
                    edge.v1()
                ),
            }
        }

        if open_edges.len() > self.max_edges {
            println!(
                "  {} {} more",
                "…".bright_black(),
                open_edges.len() - self.max_edges
            );
        }
    }
}

fn format_counts(mesh: &Mesh) -> String {
    format!(
        "({} vertices, {} triangles)",
        mesh.vertex_count(),
        mesh.triangle_count()
    )
}
