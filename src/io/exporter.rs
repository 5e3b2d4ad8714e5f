// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshmend Contributors

//! STL exporter

use crate::geometry::Mesh;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Failure to serialize a mesh back to disk
///
/// The in-memory mesh is untouched by a failed export; the caller may fix
/// the destination and retry.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to create {path}: {source}")]
    Create {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to encode STL data: {0}")]
    Encode(#[from] std::io::Error),
}

/// Export mesh to STL format
///
/// Binary for `.stl` paths, ASCII otherwise.
pub fn export_stl(mesh: &Mesh, path: &str) -> Result<(), SaveError> {
    let file_path = Path::new(path);

    if path.ends_with(".stl") {
        export_stl_binary(mesh, file_path)
    } else {
        export_stl_ascii(mesh, file_path)
    }
}

fn create(path: &Path) -> Result<File, SaveError> {
    File::create(path).map_err(|source| SaveError::Create {
        path: path.display().to_string(),
        source,
    })
}

fn export_stl_binary(mesh: &Mesh, path: &Path) -> Result<(), SaveError> {
    use stl_io::{Normal, Triangle as StlTriangle, Vertex as StlVertex};

    let triangles: Vec<StlTriangle> = mesh
        .triangles
        .iter()
        .map(|tri| {
            let v0 = &mesh.vertices[tri.indices[0]];
            let v1 = &mesh.vertices[tri.indices[1]];
            let v2 = &mesh.vertices[tri.indices[2]];

            let normal = (v0.normal + v1.normal + v2.normal) / 3.0;

            StlTriangle {
                normal: Normal::new([normal.x as f32, normal.y as f32, normal.z as f32]),
                vertices: [
                    StlVertex::new([
                        v0.position.x as f32,
                        v0.position.y as f32,
                        v0.position.z as f32,
                    ]),
                    StlVertex::new([
                        v1.position.x as f32,
                        v1.position.y as f32,
                        v1.position.z as f32,
                    ]),
                    StlVertex::new([
                        v2.position.x as f32,
                        v2.position.y as f32,
                        v2.position.z as f32,
                    ]),
                ],
            }
        })
        .collect();

    let mut file = create(path)?;
    stl_io::write_stl(&mut file, triangles.iter())?;

    Ok(())
}

fn export_stl_ascii(mesh: &Mesh, path: &Path) -> Result<(), SaveError> {
    let mut file = create(path)?;

    writeln!(file, "solid mesh")?;

    for tri in &mesh.triangles {
        let v0 = &mesh.vertices[tri.indices[0]];
        let v1 = &mesh.vertices[tri.indices[1]];
        let v2 = &mesh.vertices[tri.indices[2]];

        let normal = (v0.normal + v1.normal + v2.normal) / 3.0;

        writeln!(file, "  facet normal {} {} {}", normal.x, normal.y, normal.z)?;
        writeln!(file, "    outer loop")?;
        writeln!(
            file,
            "      vertex {} {} {}",
            v0.position.x, v0.position.y, v0.position.z
        )?;
        writeln!(
            file,
            "      vertex {} {} {}",
            v1.position.x, v1.position.y, v1.position.z
        )?;
        writeln!(
            file,
            "      vertex {} {} {}",
            v2.position.x, v2.position.y, v2.position.z
        )?;
        writeln!(file, "    endloop")?;
        writeln!(file, "  endfacet")?;
    }

    writeln!(file, "endsolid mesh")?;

    Ok(())
}
