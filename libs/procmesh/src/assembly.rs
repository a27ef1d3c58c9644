//! # Mesh Assembly
//!
//! Turns a scene request into renderer-ready geometry:
//!
//! ```text
//! SceneRequest → primitive builder → (faulting, terrain only) → normals → Mesh
//! ```
//!
//! The resulting [`Mesh`] always carries normals. [`GeometryBuffers`] flattens
//! it into the `f32`/`u32` arrays a GPU uploader consumes.

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::primitives::{create_grid, create_torus, create_uv_sphere};
use crate::terrain::{apply_faults, FaultSource, RandomFaults};
use config::constants::{DEFAULT_FAULT_COUNT, DEFAULT_GRID_RESOLUTION, GenerationConfig};
use serde::{Deserialize, Serialize};
use tracing::info;

/// A request for one of the supported scenes.
///
/// Deserializes from the option objects the browser front end sends, tagged
/// by `scene`:
///
/// ```json
/// {"scene": "terrain", "resolution": 64, "faults": 100}
/// {"scene": "uv_sphere", "rings": 16, "slices": 32}
/// {"scene": "torus", "inner_radius": 1.0, "outer_radius": 0.3, "rings": 32, "points": 16}
/// ```
///
/// `slices` is accepted in place of `faults`, and `r1`/`r2` in place of the
/// torus radii.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scene", rename_all = "snake_case")]
pub enum SceneRequest {
    /// A faulted grid.
    Terrain {
        /// Grid vertices per side.
        #[serde(default = "default_resolution")]
        resolution: u32,
        /// Number of faults to apply.
        #[serde(default = "default_faults", alias = "slices")]
        faults: u32,
        /// Seed overriding [`GenerationConfig::seed`].
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
    },
    /// A unit UV-sphere.
    UvSphere { rings: u32, slices: u32 },
    /// A torus around the Z axis.
    Torus {
        #[serde(alias = "r1")]
        inner_radius: f64,
        #[serde(alias = "r2")]
        outer_radius: f64,
        rings: u32,
        points: u32,
    },
}

fn default_resolution() -> u32 {
    DEFAULT_GRID_RESOLUTION
}

fn default_faults() -> u32 {
    DEFAULT_FAULT_COUNT
}

impl SceneRequest {
    /// Returns the scene's tag as used on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            SceneRequest::Terrain { .. } => "terrain",
            SceneRequest::UvSphere { .. } => "uv_sphere",
            SceneRequest::Torus { .. } => "torus",
        }
    }
}

/// Generates the requested scene with normals.
///
/// Terrain planes come from a generator seeded by the request's `seed`, else
/// by `config.seed`, else by OS entropy. The generator is only created for
/// terrain requests.
///
/// # Example
///
/// ```rust
/// use config::constants::GenerationConfig;
/// use procmesh::assembly::{generate, SceneRequest};
///
/// let request = SceneRequest::UvSphere { rings: 8, slices: 8 };
/// let mesh = generate(&request, &GenerationConfig::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 81);
/// assert!(mesh.normals().is_some());
/// ```
pub fn generate(request: &SceneRequest, config: &GenerationConfig) -> Result<Mesh, MeshError> {
    let seed = match request {
        SceneRequest::Terrain { seed, .. } => seed.or(config.seed),
        _ => config.seed,
    };
    assemble(request, config, || match seed {
        Some(seed) => RandomFaults::seeded(seed),
        None => RandomFaults::from_entropy(),
    })
}

/// Generates the requested scene, drawing terrain fault planes from `source`.
///
/// `source` is not consulted for the sphere and torus.
pub fn generate_with_source<S>(
    request: &SceneRequest,
    config: &GenerationConfig,
    source: &mut S,
) -> Result<Mesh, MeshError>
where
    S: FaultSource + ?Sized,
{
    assemble(request, config, move || source)
}

/// Runs the pipeline, calling `make_source` only when faulting a terrain.
fn assemble<S, F>(
    request: &SceneRequest,
    config: &GenerationConfig,
    make_source: F,
) -> Result<Mesh, MeshError>
where
    S: FaultSource,
    F: FnOnce() -> S,
{
    config.validate()?;

    let mut mesh = match *request {
        SceneRequest::Terrain {
            resolution, faults, ..
        } => {
            let mut grid = create_grid(resolution)?;
            let mut source = make_source();
            apply_faults(&mut grid, faults, config, &mut source)?;
            grid
        }
        SceneRequest::UvSphere { rings, slices } => create_uv_sphere(rings, slices)?,
        SceneRequest::Torus {
            inner_radius,
            outer_radius,
            rings,
            points,
        } => create_torus(inner_radius, outer_radius, rings, points)?,
    };

    mesh.compute_normals()?;

    info!(
        scene = request.name(),
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "Generated scene"
    );

    Ok(mesh)
}

/// Flat vertex attribute arrays and index list for GPU upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometryBuffers {
    /// Positions as [x, y, z, x, y, z, ...]
    pub positions: Vec<f32>,
    /// Normals as [nx, ny, nz, ...], same length as `positions`
    pub normals: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, ...]
    pub indices: Vec<u32>,
}

impl GeometryBuffers {
    /// Flattens `mesh`, estimating normals first if it has none.
    pub fn from_mesh(mesh: &Mesh) -> Result<Self, MeshError> {
        let normals = match mesh.normals_f32() {
            Some(normals) => normals,
            None => {
                let mut with_normals = mesh.clone();
                with_normals.compute_normals()?;
                with_normals.normals_f32().unwrap_or_default()
            }
        };

        Ok(Self {
            positions: mesh.vertices_f32(),
            normals,
            indices: mesh.indices_u32(),
        })
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::{FaultPlane, ScriptedFaults};
    use approx::assert_relative_eq;
    use glam::{DVec2, DVec3};

    fn seeded() -> GenerationConfig {
        GenerationConfig::default().with_seed(11)
    }

    #[test]
    fn test_flat_terrain_round_trip() {
        let request = SceneRequest::Terrain {
            resolution: 4,
            faults: 0,
            seed: None,
        };
        let mesh = generate(&request, &seeded()).unwrap();

        assert_eq!(mesh.vertex_count(), 16);
        assert!(mesh.vertices().iter().all(|v| v.z == 0.0));
        let normals = mesh.normals().unwrap();
        assert_eq!(normals.len(), 16);
        assert!(normals.iter().all(|n| *n == DVec3::Z));
    }

    #[test]
    fn test_faulted_terrain_has_unit_normals() {
        let request = SceneRequest::Terrain {
            resolution: 24,
            faults: 80,
            seed: Some(5),
        };
        let mesh = generate(&request, &GenerationConfig::default()).unwrap();

        for n in mesh.normals().unwrap() {
            assert_relative_eq!(n.length(), 1.0, epsilon = 1e-9);
            assert!(n.z > 0.0, "terrain normal {:?} points down", n);
        }
    }

    #[test]
    fn test_terrain_seed_makes_generation_repeatable() {
        let request = SceneRequest::Terrain {
            resolution: 16,
            faults: 30,
            seed: Some(123),
        };
        let config = GenerationConfig::default();
        assert_eq!(
            generate(&request, &config).unwrap(),
            generate(&request, &config).unwrap()
        );
    }

    #[test]
    fn test_request_seed_overrides_config_seed() {
        let with_seed = |seed| SceneRequest::Terrain {
            resolution: 12,
            faults: 20,
            seed,
        };
        let config = GenerationConfig::default().with_seed(1);

        let from_config = generate(&with_seed(None), &config).unwrap();
        let explicit_same = generate(&with_seed(Some(1)), &GenerationConfig::default()).unwrap();
        let explicit_other = generate(&with_seed(Some(2)), &config).unwrap();

        assert_eq!(from_config, explicit_same);
        assert_ne!(from_config, explicit_other);
    }

    #[test]
    fn test_generate_with_scripted_source() {
        let request = SceneRequest::Terrain {
            resolution: 5,
            faults: 1,
            seed: None,
        };
        let mut source = ScriptedFaults::new(vec![FaultPlane::new(DVec2::ZERO, 0.0)]).unwrap();
        let mesh =
            generate_with_source(&request, &GenerationConfig::default(), &mut source).unwrap();

        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(min.z, -0.5, epsilon = 1e-12);
        assert_relative_eq!(max.z, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_fault_source_built_only_for_terrain() {
        let mut built = 0;
        let config = GenerationConfig::default();

        let sphere = SceneRequest::UvSphere { rings: 4, slices: 4 };
        assemble(&sphere, &config, || {
            built += 1;
            RandomFaults::seeded(0)
        })
        .unwrap();
        assert_eq!(built, 0);

        let terrain = SceneRequest::Terrain {
            resolution: 4,
            faults: 2,
            seed: None,
        };
        assemble(&terrain, &config, || {
            built += 1;
            RandomFaults::seeded(0)
        })
        .unwrap();
        assert_eq!(built, 1);
    }

    #[test]
    fn test_sphere_scene() {
        let request = SceneRequest::UvSphere { rings: 8, slices: 8 };
        let mesh = generate(&request, &seeded()).unwrap();

        assert_eq!(mesh.vertex_count(), 81);
        for v in mesh.vertices() {
            assert_relative_eq!(v.length_squared(), 1.0, epsilon = 1e-12);
        }
        assert_eq!(mesh.normals().unwrap().len(), 81);
    }

    #[test]
    fn test_torus_scene() {
        let request = SceneRequest::Torus {
            inner_radius: 1.0,
            outer_radius: 0.4,
            rings: 20,
            points: 10,
        };
        let mesh = generate(&request, &seeded()).unwrap();
        assert_eq!(mesh.vertex_count(), 11 * 21);
        assert!(mesh
            .normals()
            .unwrap()
            .iter()
            .all(|n| (n.length() - 1.0).abs() < 1e-9));
    }

    #[test]
    fn test_invalid_parameters_propagate() {
        let too_small = SceneRequest::Terrain {
            resolution: 1,
            faults: 10,
            seed: Some(0),
        };
        assert!(matches!(
            generate(&too_small, &seeded()),
            Err(MeshError::InvalidParameter { .. })
        ));

        let flat_sphere = SceneRequest::UvSphere { rings: 1, slices: 8 };
        assert!(generate(&flat_sphere, &seeded()).is_err());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GenerationConfig {
            fault_scale: 0.0,
            ..GenerationConfig::default()
        };
        let request = SceneRequest::UvSphere { rings: 4, slices: 4 };
        assert!(matches!(
            generate(&request, &config),
            Err(MeshError::Config(_))
        ));
    }

    #[test]
    fn test_parse_terrain_request() {
        let request: SceneRequest =
            serde_json::from_str(r#"{"scene":"terrain","resolution":32,"slices":12}"#).unwrap();
        assert_eq!(
            request,
            SceneRequest::Terrain {
                resolution: 32,
                faults: 12,
                seed: None
            }
        );
    }

    #[test]
    fn test_parse_terrain_defaults() {
        let request: SceneRequest = serde_json::from_str(r#"{"scene":"terrain"}"#).unwrap();
        assert_eq!(
            request,
            SceneRequest::Terrain {
                resolution: DEFAULT_GRID_RESOLUTION,
                faults: DEFAULT_FAULT_COUNT,
                seed: None
            }
        );
    }

    #[test]
    fn test_parse_torus_aliases() {
        let request: SceneRequest = serde_json::from_str(
            r#"{"scene":"torus","r1":1.5,"r2":0.5,"rings":24,"points":12}"#,
        )
        .unwrap();
        assert_eq!(request.name(), "torus");
        assert_eq!(
            request,
            SceneRequest::Torus {
                inner_radius: 1.5,
                outer_radius: 0.5,
                rings: 24,
                points: 12
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_scene() {
        let result: Result<SceneRequest, _> =
            serde_json::from_str(r#"{"scene":"icosphere","level":2}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_geometry_buffers() {
        let mesh = generate(&SceneRequest::UvSphere { rings: 4, slices: 6 }, &seeded()).unwrap();
        let buffers = GeometryBuffers::from_mesh(&mesh).unwrap();

        assert_eq!(buffers.vertex_count(), mesh.vertex_count());
        assert_eq!(buffers.triangle_count(), mesh.triangle_count());
        assert_eq!(buffers.normals.len(), buffers.positions.len());
        assert_eq!(buffers.indices, mesh.indices_u32());
    }

    #[test]
    fn test_geometry_buffers_estimate_missing_normals() {
        let grid = create_grid(3).unwrap();
        assert!(grid.normals().is_none());

        let buffers = GeometryBuffers::from_mesh(&grid).unwrap();
        assert_eq!(buffers.normals.len(), 27);
        for n in buffers.normals.chunks(3) {
            assert_eq!(n, [0.0f32, 0.0, 1.0]);
        }
    }
}
