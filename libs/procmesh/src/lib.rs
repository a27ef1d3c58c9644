//! # Procmesh
//!
//! Browser-safe procedural mesh generation.
//! Builds indexed triangle meshes for a grid, a UV-sphere and a torus,
//! displaces grids into terrain by random faulting, and estimates smooth
//! vertex normals.
//!
//! ## Architecture
//!
//! ```text
//! SceneRequest → primitives → terrain (grid only) → normals → Mesh → GeometryBuffers
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are pure Rust and run synchronously on in-memory arrays:
//! - **Primitives**: Closed-form vertex placement with duplicated seams
//! - **Terrain**: Iterative plane faulting with a final height rescale
//! - **Normals**: Area-weighted accumulation of face normals
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::GenerationConfig;
//! use procmesh::primitives::create_grid;
//! use procmesh::terrain::{apply_faults, RandomFaults};
//!
//! let mut terrain = create_grid(32).unwrap();
//! let mut source = RandomFaults::seeded(2024);
//! apply_faults(&mut terrain, 200, &GenerationConfig::default(), &mut source).unwrap();
//! terrain.compute_normals().unwrap();
//!
//! assert_eq!(terrain.vertex_count(), 32 * 32);
//! assert_eq!(terrain.normals().unwrap().len(), 32 * 32);
//! ```

pub mod assembly;
pub mod error;
pub mod math;
pub mod mesh;
pub mod normals;
pub mod primitives;
pub mod terrain;

pub use assembly::{generate, GeometryBuffers, SceneRequest};
pub use error::MeshError;
pub use mesh::Mesh;

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::GenerationConfig;
    use glam::DVec3;
    use crate::primitives::{create_grid, create_torus, create_uv_sphere};
    use crate::terrain::{apply_faults, RandomFaults};

    #[test]
    fn test_grid_fault_normals_pipeline() {
        let mut grid = create_grid(4).unwrap();
        let mut source = RandomFaults::seeded(0);
        apply_faults(&mut grid, 0, &GenerationConfig::default(), &mut source).unwrap();
        grid.compute_normals().unwrap();

        assert_eq!(grid.vertex_count(), 16);
        assert!(grid.vertices().iter().all(|v| v.z == 0.0));
        assert!(grid.normals().unwrap().iter().all(|n| *n == DVec3::Z));
    }

    #[test]
    fn test_all_builders_keep_indices_in_range() {
        let meshes = [
            create_grid(17).unwrap(),
            create_uv_sphere(9, 13).unwrap(),
            create_torus(3.0, 1.0, 15, 7).unwrap(),
        ];
        for mesh in &meshes {
            assert!(mesh.check_indices().is_ok());
            let max = mesh.indices_u32().into_iter().max().unwrap() as usize;
            assert!(max < mesh.vertex_count());
        }
    }

    #[test]
    fn test_generate_reexport() {
        let request = SceneRequest::Torus {
            inner_radius: 1.0,
            outer_radius: 0.5,
            rings: 8,
            points: 8,
        };
        let mesh = generate(&request, &GenerationConfig::default()).unwrap();
        let buffers = GeometryBuffers::from_mesh(&mesh).unwrap();
        assert_eq!(buffers.vertex_count(), 81);
    }
}
