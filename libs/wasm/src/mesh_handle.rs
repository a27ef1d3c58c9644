//! # Mesh Handle
//!
//! WASM-friendly wrapper for mesh data that can be transferred to JavaScript.

use config::constants::MAX_U16_INDEX;
use procmesh::{GeometryBuffers, Mesh, MeshError};
use wasm_bindgen::prelude::*;

/// A handle to mesh data that can be accessed from JavaScript.
///
/// Buffers cross the boundary as typed arrays.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = generate_scene('{"scene":"terrain","resolution":64,"faults":100}');
///
/// // Get counts
/// const vertexCount = mesh.vertex_count;
/// const triangleCount = mesh.triangle_count;
///
/// // Upload to WebGL2
/// gl.bufferData(gl.ARRAY_BUFFER, mesh.vertices(), gl.STATIC_DRAW);   // Float32Array
/// gl.bufferData(gl.ARRAY_BUFFER, mesh.normals(), gl.STATIC_DRAW);    // Float32Array
/// gl.bufferData(gl.ELEMENT_ARRAY_BUFFER, mesh.indices(), gl.STATIC_DRAW); // Uint32Array
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Vertex positions as [x, y, z, x, y, z, ...]
    vertices: Vec<f32>,
    /// Vertex normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
    /// The same indices narrowed to 16 bits, when they all fit
    short_indices: Option<Vec<u16>>,
    /// Number of vertices
    vertex_count: u32,
    /// Number of triangles
    triangle_count: u32,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        self.triangle_count
    }

    /// Returns the vertex positions as a Float32Array.
    ///
    /// Format: [x, y, z, x, y, z, ...]
    /// Length: vertex_count * 3
    pub fn vertices(&self) -> Vec<f32> {
        self.vertices.clone()
    }

    /// Returns the vertex normals as a Float32Array.
    ///
    /// Format: [nx, ny, nz, nx, ny, nz, ...]
    /// Length: vertex_count * 3
    pub fn normals(&self) -> Vec<f32> {
        self.normals.clone()
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Format: [i0, i1, i2, i0, i1, i2, ...]
    /// Length: triangle_count * 3
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Returns the triangle indices as a Uint16Array for `UNSIGNED_SHORT`
    /// draws, or `undefined` when an index exceeds 65535.
    pub fn short_indices(&self) -> Option<Vec<u16>> {
        self.short_indices.clone()
    }

    /// Returns true if a 16-bit index buffer is available.
    pub fn has_short_indices(&self) -> bool {
        self.short_indices.is_some()
    }

    /// Returns true if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

impl MeshHandle {
    /// Creates a MeshHandle from a Mesh, estimating normals if it has none.
    pub fn from_mesh(mesh: &Mesh) -> Result<Self, MeshError> {
        let short_indices = match mesh.indices_u16() {
            Ok(indices) => Some(indices),
            Err(MeshError::IndexOverflow { .. }) => None,
            Err(other) => return Err(other),
        };
        let buffers = GeometryBuffers::from_mesh(mesh)?;

        Ok(Self {
            vertex_count: count_u32(buffers.vertex_count()),
            triangle_count: count_u32(buffers.triangle_count()),
            vertices: buffers.positions,
            normals: buffers.normals,
            indices: buffers.indices,
            short_indices,
        })
    }

    /// Largest index a 16-bit buffer can address.
    pub const SHORT_INDEX_LIMIT: u32 = MAX_U16_INDEX;
}

fn count_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
