//! # Fault Terrain
//!
//! Displaces a flat grid into terrain by repeated random faulting.
//!
//! ## Algorithm
//!
//! Each iteration picks a [`FaultPlane`] and, for every vertex `v`, evaluates
//! `d = (v - p) · n`. Vertices with `d < 0` are lowered by the current
//! displacement, all others are raised. The displacement is multiplied by the
//! configured scale after every iteration.
//!
//! Extrema of x and z are tracked across every iteration. Once all faults are
//! applied the heights are remapped from `[z_min, z_max]` onto a band of
//! height `h = (x_max - x_min) / 2` centered on zero, so the relief is
//! proportional to the terrain's width whatever the fault count.
//!
//! Only z is ever written; x and y are left untouched.

mod source;

pub use source::{FaultPlane, FaultSource, RandomFaults, ScriptedFaults};

use crate::error::MeshError;
use crate::math::{dot, sub};
use crate::mesh::Mesh;
use config::constants::GenerationConfig;
use tracing::debug;

/// Extrema and scaling information from a faulting run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaultReport {
    /// Number of faults applied.
    pub faults: u32,
    /// Smallest x seen while faulting.
    pub x_min: f64,
    /// Largest x seen while faulting.
    pub x_max: f64,
    /// Lowest height reached during any iteration, before rescaling.
    pub z_min: f64,
    /// Highest height reached during any iteration, before rescaling.
    pub z_max: f64,
    /// Height of the band the terrain was remapped onto, `(x_max - x_min) / 2`.
    pub half_extent: f64,
    /// Whether heights were remapped. False when either range is degenerate.
    pub rescaled: bool,
}

/// Running min/max over every displaced vertex.
#[derive(Debug, Clone, Copy, Default)]
struct Extrema {
    x: Option<(f64, f64)>,
    z: Option<(f64, f64)>,
}

impl Extrema {
    fn include(&mut self, x: f64, z: f64) {
        self.x = Some(widen(self.x, x));
        self.z = Some(widen(self.z, z));
    }
}

fn widen(range: Option<(f64, f64)>, value: f64) -> (f64, f64) {
    match range {
        Some((min, max)) => (min.min(value), max.max(value)),
        None => (value, value),
    }
}

/// Applies `faults` fault planes from `source` to `mesh` in place.
///
/// `mesh` is expected to be a grid from
/// [`create_grid`](crate::primitives::create_grid); any mesh is accepted, but
/// only the vertex positions are read. Taking `&mut Mesh` makes the caller's
/// exclusive ownership explicit for the duration of the run. Any normals
/// previously stored on the mesh are discarded.
///
/// # Errors
///
/// Returns [`MeshError::Config`] if `config` holds a non-positive or
/// non-finite displacement or scale. The mesh is not modified in that case.
///
/// # Example
///
/// ```rust
/// use config::constants::GenerationConfig;
/// use procmesh::primitives::create_grid;
/// use procmesh::terrain::{apply_faults, RandomFaults};
///
/// let mut grid = create_grid(16).unwrap();
/// let mut source = RandomFaults::seeded(3);
/// let report = apply_faults(&mut grid, 50, &GenerationConfig::default(), &mut source).unwrap();
///
/// let (min, max) = grid.bounding_box();
/// assert!(max.z - min.z <= report.half_extent + 1e-9);
/// ```
pub fn apply_faults<S>(
    mesh: &mut Mesh,
    faults: u32,
    config: &GenerationConfig,
    source: &mut S,
) -> Result<FaultReport, MeshError>
where
    S: FaultSource + ?Sized,
{
    config.validate()?;

    let vertices = mesh.vertices_mut();
    let mut delta = config.fault_delta;
    let mut extrema = Extrema::default();

    for _ in 0..faults {
        let plane = source.next_plane();
        let origin = plane.origin();
        let normal = plane.normal();

        for v in vertices.iter_mut() {
            if dot(sub(*v, origin), normal) < 0.0 {
                v.z -= delta;
            } else {
                v.z += delta;
            }
            extrema.include(v.x, v.z);
        }

        delta *= config.fault_scale;
    }

    let (x_min, x_max) = extrema.x.unwrap_or_default();
    let (z_min, z_max) = extrema.z.unwrap_or_default();
    let half_extent = (x_max - x_min) / 2.0;
    let z_span = z_max - z_min;

    let rescaled = half_extent != 0.0 && z_span > 0.0;
    if rescaled {
        for v in vertices.iter_mut() {
            v.z = (v.z - z_min) / z_span * half_extent - half_extent / 2.0;
        }
    }

    debug!(
        faults,
        x_min, x_max, z_min, z_max, half_extent, rescaled, "Applied terrain faults"
    );

    Ok(FaultReport {
        faults,
        x_min,
        x_max,
        z_min,
        z_max,
        half_extent,
        rescaled,
    })
}
