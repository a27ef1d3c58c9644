//! # UV-Sphere Primitive
//!
//! Generates a unit sphere using latitude/longitude tessellation.

use super::check_limits;
use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::{MIN_SPHERE_RINGS, MIN_SPHERE_SLICES};
use glam::DVec3;
use std::f64::consts::PI;
use tracing::debug;

/// Creates a unit UV-sphere centered at the origin.
///
/// # Arguments
///
/// * `rings` - Number of latitude rings from pole to pole (at least 2)
/// * `slices` - Number of longitude segments (at least 3)
///
/// # Returns
///
/// A mesh with `(rings + 1)·(slices + 1)` vertices and
/// `2·(rings - 1)·slices` triangles.
///
/// # Algorithm
///
/// - Ring `i` sits at polar angle `i·PI/(rings - 1)`, so ring 0 is the north
///   pole and ring `rings - 1` the south pole
/// - Each ring has `slices + 1` vertices at azimuth `j·2PI/slices`; the last
///   duplicates the first so the seam needs no index wraparound
/// - One trailing ring past the south pole is emitted to keep the vertex
///   count at `rings + 1` rows; no triangle references it
/// - Each quad `v1 = i·(slices+1) + j`, `v2 = v1 + slices + 1` becomes
///   `(v1, v2, v1+1)` and `(v2, v2+1, v1+1)`, wound so normals face outward
///
/// The pole quads collapse to one zero-area triangle each, so the mesh does
/// not pass [`Mesh::validate`]; every index is still in range.
///
/// # Example
///
/// ```rust
/// use procmesh::primitives::create_uv_sphere;
///
/// let mesh = create_uv_sphere(8, 8).unwrap();
/// assert_eq!(mesh.vertex_count(), 81);
/// ```
pub fn create_uv_sphere(rings: u32, slices: u32) -> Result<Mesh, MeshError> {
    if rings < MIN_SPHERE_RINGS {
        return Err(MeshError::invalid_parameter(format!(
            "Sphere rings must be at least {}: {}",
            MIN_SPHERE_RINGS, rings
        )));
    }

    if slices < MIN_SPHERE_SLICES {
        return Err(MeshError::invalid_parameter(format!(
            "Sphere slices must be at least {}: {}",
            MIN_SPHERE_SLICES, slices
        )));
    }

    let vertex_count = (u64::from(rings) + 1).saturating_mul(u64::from(slices) + 1);
    let triangle_count = 2u64
        .saturating_mul(u64::from(rings - 1))
        .saturating_mul(u64::from(slices));
    check_limits(vertex_count, triangle_count)?;

    let mut mesh = Mesh::with_capacity(vertex_count as usize, triangle_count as usize);

    for i in 0..=rings {
        // Polar angle (0 = north pole, PI = south pole)
        let polar = f64::from(i) * PI / f64::from(rings - 1);
        let (sin_polar, cos_polar) = polar.sin_cos();

        for j in 0..=slices {
            let azimuth = f64::from(j) * 2.0 * PI / f64::from(slices);
            let (sin_az, cos_az) = azimuth.sin_cos();
            mesh.add_vertex(DVec3::new(cos_az * sin_polar, sin_az * sin_polar, cos_polar));
        }
    }

    let stride = slices + 1;
    for i in 0..rings - 1 {
        for j in 0..slices {
            let v1 = i * stride + j;
            let v2 = v1 + stride;

            mesh.add_triangle(v1, v2, v1 + 1);
            mesh.add_triangle(v2, v2 + 1, v1 + 1);
        }
    }

    debug!(
        rings,
        slices,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "Generated UV-sphere"
    );

    Ok(mesh)
}
