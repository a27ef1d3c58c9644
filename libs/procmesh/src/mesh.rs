//! # Mesh Data Structure
//!
//! Core mesh representation with positions, triangles, and optional normals.
//! This is the geometry contract handed to the rendering layer.

use crate::error::MeshError;
use config::constants::{EPSILON, MAX_U16_INDEX};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A triangle mesh with vertices and indices.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the renderer boundary for GPU upload.
///
/// A vertex's index is its identity: vertices are never reordered after
/// creation, so normals and any other per-vertex attribute share the
/// position indexing.
///
/// # Example
///
/// ```rust
/// use procmesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle, winding significant)
    triangles: Vec<[u32; 3]>,
    /// Optional vertex normals, one per vertex once estimated
    normals: Option<Vec<DVec3>>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
            normals: None,
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            normals: None,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the vertex positions for in-place editing.
    ///
    /// Any previously estimated normals no longer describe the surface and
    /// are discarded.
    pub fn vertices_mut(&mut self) -> &mut [DVec3] {
        self.normals = None;
        &mut self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Sets vertex normals.
    ///
    /// Fails when the number of normals differs from the vertex count.
    pub fn set_normals(&mut self, normals: Vec<DVec3>) -> Result<(), MeshError> {
        if normals.len() != self.vertices.len() {
            return Err(MeshError::invalid_topology(format!(
                "{} normals supplied for {} vertices",
                normals.len(),
                self.vertices.len()
            )));
        }
        self.normals = Some(normals);
        Ok(())
    }

    /// Returns the vertex normals.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes area-weighted vertex normals and stores them on the mesh.
    ///
    /// See [`crate::normals::compute_vertex_normals`].
    pub fn compute_normals(&mut self) -> Result<(), MeshError> {
        let normals = crate::normals::compute_vertex_normals(self)?;
        self.set_normals(normals)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Ensures every triangle index refers to an existing vertex.
    pub fn check_indices(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();

        for (t, tri) in self.triangles.iter().enumerate() {
            if let Some(bad) = tri.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::invalid_topology(format!(
                    "triangle {t} references vertex {bad}, mesh has {vertex_count} vertices"
                )));
            }
        }

        Ok(())
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No triangle repeats an index
    /// - No zero-area triangles
    ///
    /// Returns true if valid. Closed-seam primitives such as the UV-sphere
    /// legitimately contain zero-area triangles at their poles and fail this
    /// check; use [`Mesh::check_indices`] for those.
    pub fn validate(&self) -> bool {
        if self.check_indices().is_err() {
            return false;
        }

        for tri in &self.triangles {
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }

            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            let area = (v1 - v0).cross(v2 - v0).length();
            if area < EPSILON {
                return false;
            }
        }

        true
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        flatten_f32(&self.vertices)
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Exports triangle indices as a 16-bit index buffer.
    ///
    /// Fails with [`MeshError::IndexOverflow`] when any index is larger
    /// than `u16::MAX`.
    pub fn indices_u16(&self) -> Result<Vec<u16>, MeshError> {
        self.triangles
            .iter()
            .flatten()
            .map(|&index| {
                u16::try_from(index).map_err(|_| MeshError::IndexOverflow {
                    index,
                    max: MAX_U16_INDEX,
                })
            })
            .collect()
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_deref().map(flatten_f32)
    }
}

fn flatten_f32(values: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}
