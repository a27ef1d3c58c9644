//! # Grid Primitive
//!
//! Generates a flat square lattice in the XY plane, the base surface for
//! fault terrain.

use super::check_limits;
use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::MIN_GRID_RESOLUTION;
use glam::DVec3;
use tracing::debug;

/// Creates an `n`×`n` grid spanning [-1, 1]×[-1, 1] at z = 0.
///
/// # Arguments
///
/// * `n` - Number of vertices along each side (at least 2)
///
/// # Returns
///
/// A mesh with `n²` vertices and `2·(n-1)²` triangles.
///
/// # Algorithm
///
/// Vertex `col * n + row` sits at `x = row/(n-1)·2 - 1`, `y = col/(n-1)·2 - 1`.
/// Every cell with lower-left vertex `i` is split into `(i, i+1, i+n)` and
/// `(i+n, i+1, i+n+1)`. The last vertex of each row starts no cell, so no
/// triangle wraps from one row into the next. Both triangles wind
/// counter-clockwise seen from +Z.
///
/// # Example
///
/// ```rust
/// use procmesh::primitives::create_grid;
///
/// let mesh = create_grid(4).unwrap();
/// assert_eq!(mesh.vertex_count(), 16);
/// assert_eq!(mesh.triangle_count(), 18);
/// ```
pub fn create_grid(n: u32) -> Result<Mesh, MeshError> {
    if n < MIN_GRID_RESOLUTION {
        return Err(MeshError::invalid_parameter(format!(
            "Grid resolution must be at least {}: {}",
            MIN_GRID_RESOLUTION, n
        )));
    }

    let side = u64::from(n);
    let vertex_count = side.saturating_mul(side);
    let triangle_count = 2u64.saturating_mul(side - 1).saturating_mul(side - 1);
    check_limits(vertex_count, triangle_count)?;

    let mut mesh = Mesh::with_capacity(vertex_count as usize, triangle_count as usize);
    let last = f64::from(n - 1);

    for col in 0..n {
        let y = f64::from(col) / last * 2.0 - 1.0;
        for row in 0..n {
            let x = f64::from(row) / last * 2.0 - 1.0;
            mesh.add_vertex(DVec3::new(x, y, 0.0));
        }
    }

    for col in 0..n - 1 {
        for row in 0..n - 1 {
            let i = col * n + row;
            mesh.add_triangle(i, i + 1, i + n);
            mesh.add_triangle(i + n, i + 1, i + n + 1);
        }
    }

    debug!(
        n,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "Generated grid"
    );

    Ok(mesh)
}
