//! # Vertex Normals
//!
//! Smooth per-vertex normals from triangle topology.
//!
//! Each triangle contributes its unnormalized face normal `(p1 - p0) × (p2 - p0)`
//! to its three vertices. The cross product's length is twice the triangle's
//! area, so the final normalization yields an area-weighted average without
//! computing areas explicitly.
//!
//! Vertices that no triangle references, or whose contributions cancel, keep
//! the zero vector.

use crate::error::MeshError;
use crate::math::{add, cross, normalize, sub};
use crate::mesh::Mesh;
use glam::DVec3;
use tracing::warn;

/// Computes area-weighted vertex normals for `mesh`.
///
/// The result has one entry per vertex, in vertex order. Winding decides the
/// sign: counter-clockwise triangles seen from outside produce outward
/// normals.
///
/// # Errors
///
/// Returns [`MeshError::InvalidTopology`] if a triangle references a missing
/// vertex. Nothing is computed in that case.
///
/// # Example
///
/// ```rust
/// use procmesh::normals::compute_vertex_normals;
/// use procmesh::primitives::create_grid;
/// use glam::DVec3;
///
/// let grid = create_grid(3).unwrap();
/// let normals = compute_vertex_normals(&grid).unwrap();
/// assert!(normals.iter().all(|n| *n == DVec3::Z));
/// ```
pub fn compute_vertex_normals(mesh: &Mesh) -> Result<Vec<DVec3>, MeshError> {
    mesh.check_indices()?;

    let vertices = mesh.vertices();
    let mut normals = vec![DVec3::ZERO; vertices.len()];

    for tri in mesh.triangles() {
        let p0 = vertices[tri[0] as usize];
        let p1 = vertices[tri[1] as usize];
        let p2 = vertices[tri[2] as usize];

        let face = cross(sub(p1, p0), sub(p2, p0));

        for &index in tri {
            let slot = &mut normals[index as usize];
            *slot = add(*slot, face);
        }
    }

    let mut degenerate = 0usize;
    for normal in &mut normals {
        *normal = normalize(*normal);
        if *normal == DVec3::ZERO {
            degenerate += 1;
        }
    }

    if degenerate > 0 {
        warn!(
            degenerate,
            vertices = vertices.len(),
            "vertices left with zero normals"
        );
    }

    Ok(normals)
}
