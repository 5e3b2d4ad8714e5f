// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Meshmend Contributors

//! End-to-end repair pipeline tests

use anyhow::Result;
use meshmend::geometry::{find_boundary_edges, is_watertight, Edge, Mesh, Triangle, Vertex};
use meshmend::session::{RepairSession, SessionOutcome};
use meshmend::visualize::NoopVisualizer;
use meshmend::{export_stl, import_stl, repair_mesh, RepairOutcome};
use std::collections::HashSet;
use tempfile::tempdir;

/// Watertight unit cube: 8 shared vertices, 12 triangles
fn unit_cube() -> Mesh {
    let mut mesh = Mesh::new();
    for (x, y, z) in [
        (0.0, 0.0, 0.0),
        (1.0, 0.0, 0.0),
        (1.0, 1.0, 0.0),
        (0.0, 1.0, 0.0),
        (0.0, 0.0, 1.0),
        (1.0, 0.0, 1.0),
        (1.0, 1.0, 1.0),
        (0.0, 1.0, 1.0),
    ] {
        mesh.add_vertex(Vertex::at(x, y, z));
    }

    let faces = [
        [0, 2, 1],
        [0, 3, 2], // bottom
        [4, 5, 6],
        [4, 6, 7], // top
        [0, 1, 5],
        [0, 5, 4], // front
        [2, 3, 7],
        [2, 7, 6], // back
        [0, 4, 7],
        [0, 7, 3], // left
        [1, 2, 6],
        [1, 6, 5], // right
    ];
    for face in faces {
        mesh.add_triangle(Triangle::new(face));
    }
    mesh.recompute_normals();
    mesh
}

#[test]
fn test_unit_cube_is_watertight() {
    let cube = unit_cube();
    assert_eq!(cube.vertex_count(), 8);
    assert_eq!(cube.triangle_count(), 12);
    assert!(is_watertight(&cube));
    assert!(find_boundary_edges(&cube).is_empty());
}

#[test]
fn test_deleting_one_face_opens_its_edges() {
    let mut cube = unit_cube();
    let removed = cube.triangles.pop().unwrap(); // [1, 6, 5]

    let boundary: HashSet<Edge> = find_boundary_edges(&cube).into_iter().collect();
    let expected: HashSet<Edge> = [
        Edge::new(removed.indices[0], removed.indices[1]),
        Edge::new(removed.indices[1], removed.indices[2]),
        Edge::new(removed.indices[2], removed.indices[0]),
    ]
    .into();
    assert_eq!(boundary, expected);
}

#[test]
fn test_cube_repair_counts_follow_fan_policy() {
    let mut cube = unit_cube();
    cube.triangles.pop();

    let report = repair_mesh(&mut cube);

    assert_eq!(report.outcome, RepairOutcome::Repaired);
    assert_eq!(report.open_edges_before, 3);
    assert_eq!(report.triangles_before, 11);
    // 3 open edges x (8 - 2) candidate vertices each
    assert_eq!(report.triangles_added, 18);
    assert_eq!(cube.triangle_count(), 29);

    // The previously open edges are closed; a nonzero residual count
    // elsewhere is an accepted limitation of the fan fill
    assert_eq!(report.open_edges_after, find_boundary_edges(&cube).len());
}

#[test]
fn test_repair_preserves_existing_triangles() {
    let mut cube = unit_cube();
    cube.triangles.pop();
    let before = cube.triangles.clone();

    repair_mesh(&mut cube);

    assert_eq!(&cube.triangles[..before.len()], &before[..]);
    assert_eq!(cube.vertex_count(), 8);
}

#[test]
fn test_full_session_over_stl_files() -> Result<()> {
    let dir = tempdir()?;
    let input_path = dir.path().join("holed_cube.stl");
    let output_path = dir.path().join("repaired_cube.stl");

    let mut cube = unit_cube();
    cube.triangles.pop();
    export_stl(&cube, input_path.to_str().unwrap())?;

    let session = RepairSession::new(&NoopVisualizer);
    let outcome = session.run(
        input_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
    )?;

    match outcome {
        SessionOutcome::Repaired { report, .. } => {
            assert_eq!(report.open_edges_before, 3);
            assert_eq!(report.triangles_added, 18);
        }
        other => panic!("expected repair, got {:?}", other),
    }

    let repaired = import_stl(output_path.to_str().unwrap())?;
    assert_eq!(repaired.triangle_count(), 29);
    assert_eq!(repaired.vertex_count(), 8);
    Ok(())
}

#[test]
fn test_watertight_input_writes_nothing() -> Result<()> {
    let dir = tempdir()?;
    let input_path = dir.path().join("cube.stl");
    let output_path = dir.path().join("should_not_exist.stl");

    export_stl(&unit_cube(), input_path.to_str().unwrap())?;

    let session = RepairSession::new(&NoopVisualizer);
    let outcome = session.run(
        input_path.to_str().unwrap(),
        output_path.to_str().unwrap(),
    )?;

    assert!(matches!(outcome, SessionOutcome::AlreadyWatertight));
    assert!(!output_path.exists());
    Ok(())
}

#[test]
fn test_repair_is_single_pass() {
    // A second detection over the repaired mesh must agree with the
    // report; the orchestrator never loops to chase residual edges
    let mut cube = unit_cube();
    cube.triangles.pop();

    let report = repair_mesh(&mut cube);
    let residual = find_boundary_edges(&cube).len();
    assert_eq!(report.open_edges_after, residual);
}

#[test]
fn test_corrupted_fixture_fails_or_loads() -> Result<()> {
    // Byte corruption may leave the file parseable or not; either way the
    // loader must not panic, and a parsed mesh must be structurally sound
    use meshmend::corrupt::corrupt_file;

    let dir = tempdir()?;
    let valid_path = dir.path().join("valid.stl");
    let corrupt_path = dir.path().join("corrupt.stl");

    export_stl(&unit_cube(), valid_path.to_str().unwrap())?;
    corrupt_file(&valid_path, &corrupt_path, 0.01)?;

    match import_stl(corrupt_path.to_str().unwrap()) {
        Ok(mesh) => assert!(mesh.triangle_count() > 0),
        Err(e) => {
            let _ = e.to_string();
        }
    }
    Ok(())
}
