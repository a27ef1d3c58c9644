//! # Torus Primitive
//!
//! Generates a ring torus around the Z axis.

use super::check_limits;
use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::{MIN_TORUS_POINTS, MIN_TORUS_RINGS};
use glam::DVec3;
use std::f64::consts::PI;
use tracing::debug;

/// Creates a torus mesh centered at the origin.
///
/// # Arguments
///
/// * `inner_radius` - Distance from the origin to the center of the tube
/// * `outer_radius` - Radius of the tube itself
/// * `rings` - Steps of the sweep angle around the Z axis (at least 3)
/// * `points` - Steps of the angle around the tube cross-section (at least 3)
///
/// # Returns
///
/// A mesh with `(points + 1)·(rings + 1)` vertices and
/// `2·points·rings` triangles.
///
/// # Algorithm
///
/// Row `i` in `0..=points` uses tube angle `a1 = i·2PI/points`, column `j` in
/// `0..=rings` uses sweep angle `a2 = j·2PI/rings`:
///
/// ```text
/// x = (inner + outer·cos a1)·cos a2
/// y = (inner + outer·cos a1)·sin a2
/// z = outer·sin a1
/// ```
///
/// The first row and column are duplicated at the end so both seams close
/// without index wraparound. Quads use the UV-sphere layout with a row
/// stride of `rings + 1`, but each quad is emitted as `(v1, v1+1, v2)` and
/// `(v2, v1+1, v2+1)` rather than the sphere's `(v1, v2, v1+1)` and
/// `(v2, v2+1, v1+1)`. The sphere winding would point every torus normal
/// toward the tube center.
///
/// # Example
///
/// ```rust
/// use procmesh::primitives::create_torus;
///
/// let mesh = create_torus(1.0, 0.25, 16, 8).unwrap();
/// assert_eq!(mesh.vertex_count(), 9 * 17);
/// assert_eq!(mesh.triangle_count(), 2 * 8 * 16);
/// ```
pub fn create_torus(
    inner_radius: f64,
    outer_radius: f64,
    rings: u32,
    points: u32,
) -> Result<Mesh, MeshError> {
    if !(inner_radius.is_finite() && inner_radius > 0.0) {
        return Err(MeshError::invalid_parameter(format!(
            "Torus inner radius must be positive: {}",
            inner_radius
        )));
    }

    if !(outer_radius.is_finite() && outer_radius > 0.0) {
        return Err(MeshError::invalid_parameter(format!(
            "Torus outer radius must be positive: {}",
            outer_radius
        )));
    }

    if rings < MIN_TORUS_RINGS {
        return Err(MeshError::invalid_parameter(format!(
            "Torus rings must be at least {}: {}",
            MIN_TORUS_RINGS, rings
        )));
    }

    if points < MIN_TORUS_POINTS {
        return Err(MeshError::invalid_parameter(format!(
            "Torus points must be at least {}: {}",
            MIN_TORUS_POINTS, points
        )));
    }

    let vertex_count = (u64::from(points) + 1).saturating_mul(u64::from(rings) + 1);
    let triangle_count = 2u64
        .saturating_mul(u64::from(points))
        .saturating_mul(u64::from(rings));
    check_limits(vertex_count, triangle_count)?;

    let mut mesh = Mesh::with_capacity(vertex_count as usize, triangle_count as usize);

    for i in 0..=points {
        let tube = f64::from(i) * 2.0 * PI / f64::from(points);
        let (sin_tube, cos_tube) = tube.sin_cos();
        let reach = inner_radius + outer_radius * cos_tube;

        for j in 0..=rings {
            let sweep = f64::from(j) * 2.0 * PI / f64::from(rings);
            let (sin_sweep, cos_sweep) = sweep.sin_cos();
            mesh.add_vertex(DVec3::new(
                reach * cos_sweep,
                reach * sin_sweep,
                outer_radius * sin_tube,
            ));
        }
    }

    let stride = rings + 1;
    for i in 0..points {
        for j in 0..rings {
            let v1 = i * stride + j;
            let v2 = v1 + stride;

            mesh.add_triangle(v1, v1 + 1, v2);
            mesh.add_triangle(v2, v1 + 1, v2 + 1);
        }
    }

    debug!(
        inner_radius,
        outer_radius,
        rings,
        points,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "Generated torus"
    );

    Ok(mesh)
}
