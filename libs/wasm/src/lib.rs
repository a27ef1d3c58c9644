//! WASM-facing entry points for the procedural mesh pipeline.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests interact with the internal helper
//! `generate_scene_internal` to avoid depending on a JS host.
//!
//! ```
//! let mesh = procmesh_wasm::generate_scene_internal(r#"{"scene":"uv_sphere","rings":8,"slices":8}"#).unwrap();
//! assert_eq!(mesh.vertex_count(), 81);
//! ```

use config::constants::{DEFAULT_FAULT_COUNT, DEFAULT_GRID_RESOLUTION};
use config::constants::GenerationConfig;
use procmesh::{MeshError, SceneRequest};
use thiserror::Error;
use wasm_bindgen::prelude::*;

mod mesh_handle;

pub use mesh_handle::MeshHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "procmesh_wasm";
/// // init_panic_hook();
/// ```
#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Returns the number of faults applied when a terrain request omits one.
///
/// # Examples
/// ```
/// assert!(procmesh_wasm::default_fault_count() > 0);
/// ```
#[wasm_bindgen]
pub fn default_fault_count() -> u32 {
    DEFAULT_FAULT_COUNT
}

/// Returns the grid resolution used when a terrain request omits one.
#[wasm_bindgen]
pub fn default_grid_resolution() -> u32 {
    DEFAULT_GRID_RESOLUTION
}

/// Errors surfaced to JavaScript callers.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Options object was not a valid scene request
    #[error("Invalid scene options: {0}")]
    Options(#[from] serde_json::Error),

    /// Generation rejected the request
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Generates a scene from a JSON options object.
///
/// This is the main entry point for the pipeline. It parses the options,
/// builds the geometry with normals, and returns buffers ready for upload.
///
/// # Errors
/// Returns a JavaScript error containing a human-readable message if the
/// options are malformed or out of range.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // try {
/// //   const mesh = generate_scene('{"scene":"torus","r1":1,"r2":0.3,"rings":32,"points":16}');
/// //   console.log("Vertices:", mesh.vertex_count);
/// // } catch (error) {
/// //   console.error("Generation failed:", error);
/// // }
/// ```
#[wasm_bindgen]
pub fn generate_scene(options: &str) -> Result<MeshHandle, JsValue> {
    generate_scene_internal(options).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Host-only helper that parses `options` and runs the full pipeline.
///
/// # Examples
/// ```
/// let mesh = procmesh_wasm::generate_scene_internal(
///     r#"{"scene":"terrain","resolution":4,"faults":0}"#,
/// ).unwrap();
/// assert_eq!(mesh.vertex_count(), 16);
/// ```
pub fn generate_scene_internal(options: &str) -> Result<MeshHandle, GenerateError> {
    let request: SceneRequest = serde_json::from_str(options)?;
    let mesh = procmesh::generate(&request, &GenerationConfig::default())?;
    Ok(MeshHandle::from_mesh(&mesh)?)
}
