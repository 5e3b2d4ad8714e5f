// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshmend Contributors

//! STL importer

use crate::geometry::{Mesh, Triangle, Vertex};
use std::fs::File;
use thiserror::Error;

/// Failure to turn an input file into a mesh
///
/// Any variant aborts the repair session before repair is attempted; there
/// is no partial-mesh recovery and no retry.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse STL data in {path}: {source}")]
    Parse {
        path: String,
        source: std::io::Error,
    },
    #[error("{path} contains no geometry")]
    EmptyGeometry { path: String },
}

/// Import an STL file (binary or ASCII) into an indexed mesh
///
/// `stl_io` merges identical vertex positions while indexing, so the
/// resulting mesh shares vertices across adjacent triangles. Vertex normals
/// are recomputed from the loaded faces rather than trusted from the file.
pub fn import_stl(path: &str) -> Result<Mesh, LoadError> {
    let mut file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_string(),
        source,
    })?;

    let indexed = stl_io::read_stl(&mut file).map_err(|source| LoadError::Parse {
        path: path.to_string(),
        source,
    })?;

    if indexed.vertices.is_empty() || indexed.faces.is_empty() {
        return Err(LoadError::EmptyGeometry {
            path: path.to_string(),
        });
    }

    let mut mesh = Mesh::with_capacity(indexed.vertices.len(), indexed.faces.len());

    for vertex in &indexed.vertices {
        mesh.add_vertex(Vertex::at(
            vertex[0] as f64,
            vertex[1] as f64,
            vertex[2] as f64,
        ));
    }

    for face in &indexed.faces {
        mesh.add_triangle(Triangle::new(face.vertices));
    }

    mesh.recompute_normals();

    Ok(mesh)
}
