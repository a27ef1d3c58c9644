//! # Primitives
//!
//! Closed-form mesh generation for the grid, UV-sphere and torus.
//!
//! Builders are pure functions of their parameters: identical input always
//! yields a bit-identical mesh.

pub mod grid;
pub mod sphere;
pub mod torus;

pub use grid::create_grid;
pub use sphere::create_uv_sphere;
pub use torus::create_torus;

use crate::error::MeshError;
use config::constants::{MAX_TRIANGLES, MAX_VERTICES};

/// Rejects parameter sets whose output would exceed the mesh size limits.
///
/// Builders compute counts in `u64` with saturating multiplication, so an
/// oversized request saturates to `u64::MAX` and is rejected here.
pub(crate) fn check_limits(vertex_count: u64, triangle_count: u64) -> Result<(), MeshError> {
    if vertex_count > MAX_VERTICES as u64 {
        return Err(MeshError::TooManyVertices {
            count: usize::try_from(vertex_count).unwrap_or(usize::MAX),
            max: MAX_VERTICES,
        });
    }
    if triangle_count > MAX_TRIANGLES as u64 {
        return Err(MeshError::TooManyTriangles {
            count: usize::try_from(triangle_count).unwrap_or(usize::MAX),
            max: MAX_TRIANGLES,
        });
    }
    Ok(())
}
