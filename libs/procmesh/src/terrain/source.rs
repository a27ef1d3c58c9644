//! # Fault Plane Sources
//!
//! Where the faulting algorithm gets its planes from. Production code draws
//! them from a random number generator; tests replay a fixed script.

use crate::error::MeshError;
use glam::{DVec2, DVec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// A vertical plane splitting the terrain into a raised and a lowered side.
///
/// The plane passes through `point` (in the XY plane) with horizontal normal
/// `(cos angle, sin angle, 0)`. Vertices on the positive side, or on the
/// plane itself, are raised.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaultPlane {
    /// A point on the plane.
    pub point: DVec2,
    /// Direction of the plane normal in radians.
    pub angle: f64,
}

impl FaultPlane {
    /// Creates a fault plane through `point` with normal direction `angle`.
    pub fn new(point: DVec2, angle: f64) -> Self {
        Self { point, angle }
    }

    /// Returns the plane's point lifted to z = 0.
    #[inline]
    pub fn origin(&self) -> DVec3 {
        self.point.extend(0.0)
    }

    /// Returns the unit plane normal, which always lies in the XY plane.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        let (sin, cos) = self.angle.sin_cos();
        DVec3::new(cos, sin, 0.0)
    }
}

/// Yields one fault plane per faulting iteration.
pub trait FaultSource {
    /// Returns the plane for the next iteration.
    fn next_plane(&mut self) -> FaultPlane;
}

impl<S: FaultSource + ?Sized> FaultSource for &mut S {
    fn next_plane(&mut self) -> FaultPlane {
        (**self).next_plane()
    }
}

/// Fault planes drawn uniformly: a point in [-1, 1]² and an angle in [0, 2π).
///
/// # Example
///
/// ```rust
/// use procmesh::terrain::{FaultSource, RandomFaults};
///
/// let mut a = RandomFaults::seeded(7);
/// let mut b = RandomFaults::seeded(7);
/// assert_eq!(a.next_plane(), b.next_plane());
/// ```
#[derive(Debug, Clone)]
pub struct RandomFaults<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomFaults<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomFaults<StdRng> {
    /// A reproducible source: the same seed always yields the same planes.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A source seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> FaultSource for RandomFaults<R> {
    fn next_plane(&mut self) -> FaultPlane {
        let x = self.rng.gen_range(-1.0..1.0);
        let y = self.rng.gen_range(-1.0..1.0);
        let angle = self.rng.gen_range(0.0..TAU);
        FaultPlane::new(DVec2::new(x, y), angle)
    }
}

/// Replays a fixed list of planes, starting over once exhausted.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedFaults {
    planes: Vec<FaultPlane>,
    cursor: usize,
}

impl ScriptedFaults {
    /// Creates a source that cycles through `planes`.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidParameter`] if `planes` is empty.
    pub fn new(planes: Vec<FaultPlane>) -> Result<Self, MeshError> {
        if planes.is_empty() {
            return Err(MeshError::invalid_parameter(
                "Scripted fault source needs at least one plane",
            ));
        }
        Ok(Self { planes, cursor: 0 })
    }
}

impl FaultSource for ScriptedFaults {
    fn next_plane(&mut self) -> FaultPlane {
        let plane = self.planes[self.cursor];
        self.cursor = (self.cursor + 1) % self.planes.len();
        plane
    }
}
