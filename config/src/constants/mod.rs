//! # Configuration Constants
//!
//! Centralized constants for the procedural mesh pipeline. Tessellation
//! limits, faulting parameters and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Minimum and default builder parameters
//! - **Faulting**: Terrain displacement defaults
//! - **Limits**: Maximum values for safety bounds

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Length below which an accumulated vertex normal is treated as degenerate.
///
/// Vertices whose face contributions cancel out (or that no triangle
/// references) keep the zero vector instead of being normalized.
///
/// # Example
///
/// ```rust
/// use config::constants::{EPSILON, NORMAL_EPSILON};
/// assert!(NORMAL_EPSILON <= EPSILON);
/// ```
pub const NORMAL_EPSILON: f64 = 1e-12;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Smallest grid resolution that still forms a single cell.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_GRID_RESOLUTION;
///
/// let n = 2;
/// assert!(n >= MIN_GRID_RESOLUTION);
/// ```
pub const MIN_GRID_RESOLUTION: u32 = 2;

/// Grid resolution used when a terrain request omits one.
pub const DEFAULT_GRID_RESOLUTION: u32 = 64;

/// Minimum number of rings for a UV-sphere.
///
/// The polar step is `PI / (rings - 1)`, so a single ring divides by zero.
pub const MIN_SPHERE_RINGS: u32 = 2;

/// Minimum number of slices for a UV-sphere.
pub const MIN_SPHERE_SLICES: u32 = 3;

/// Minimum number of steps around the torus' sweep circle.
pub const MIN_TORUS_RINGS: u32 = 3;

/// Minimum number of steps around the torus' tube cross-section.
pub const MIN_TORUS_POINTS: u32 = 3;

// =============================================================================
// FAULTING CONSTANTS
// =============================================================================

/// Initial vertical displacement applied on either side of a fault plane.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_FAULT_DELTA;
///
/// let mut z = 0.0;
/// z += DEFAULT_FAULT_DELTA;
/// assert!(z > 0.0);
/// ```
pub const DEFAULT_FAULT_DELTA: f64 = 0.8;

/// Geometric decay applied to the displacement after every fault.
///
/// `1.0` keeps every fault at full strength.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_FAULT_DELTA, DEFAULT_FAULT_SCALE};
///
/// let next = DEFAULT_FAULT_DELTA * DEFAULT_FAULT_SCALE;
/// assert_eq!(next, DEFAULT_FAULT_DELTA);
/// ```
pub const DEFAULT_FAULT_SCALE: f64 = 1.0;

/// Number of faults applied when a terrain request omits a count.
pub const DEFAULT_FAULT_COUNT: u32 = 100;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
///
/// Safety limit to prevent memory exhaustion from extreme resolutions.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single mesh.
pub const MAX_TRIANGLES: usize = 10_000_000;

/// Largest vertex index that fits a 16-bit index buffer.
///
/// WebGL's `UNSIGNED_SHORT` element type is the lowest common denominator
/// for index uploads.
pub const MAX_U16_INDEX: u32 = u16::MAX as u32;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

// =============================================================================
// GENERATION CONFIG
// =============================================================================

/// Immutable snapshot of the tunable generation settings shared between
/// crates.
///
/// # Examples
/// ```
/// use config::constants::GenerationConfig;
/// let config = GenerationConfig::default();
/// assert!(config.fault_delta > 0.0);
/// assert_eq!(config.seed, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationConfig {
    /// Displacement applied by the first fault.
    pub fault_delta: f64,
    /// Factor the displacement is multiplied by after each fault.
    pub fault_scale: f64,
    /// Seed for the fault-plane generator. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl GenerationConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// displacement and decay factor.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GenerationConfig;
    /// let cfg = GenerationConfig::new(0.5, 0.9).expect("valid config");
    /// assert_eq!(cfg.fault_scale, 0.9);
    /// ```
    pub fn new(fault_delta: f64, fault_scale: f64) -> Result<Self, ConfigError> {
        validate_delta(fault_delta)?;
        validate_scale(fault_scale)?;
        Ok(Self {
            fault_delta,
            fault_scale,
            seed: None,
        })
    }

    /// Returns a copy that draws fault planes from a fixed seed.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GenerationConfig;
    /// let cfg = GenerationConfig::default().with_seed(7);
    /// assert_eq!(cfg.seed, Some(7));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns a copy with a different displacement decay.
    pub fn with_fault_scale(self, fault_scale: f64) -> Result<Self, ConfigError> {
        validate_scale(fault_scale)?;
        Ok(Self {
            fault_scale,
            ..self
        })
    }

    /// Re-checks the numeric fields, for values assembled by hand.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_delta(self.fault_delta)?;
        validate_scale(self.fault_scale)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            fault_delta: DEFAULT_FAULT_DELTA,
            fault_scale: DEFAULT_FAULT_SCALE,
            seed: None,
        }
    }
}

fn validate_delta(value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidFaultDelta(value))
    }
}

fn validate_scale(value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidFaultScale(value))
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when the fault displacement is zero, negative or not finite.
    InvalidFaultDelta(f64),
    /// Raised when the decay factor is zero, negative or not finite.
    InvalidFaultScale(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidFaultDelta(value) => {
                write!(f, "fault_delta must be positive and finite: {value}")
            }
            ConfigError::InvalidFaultScale(value) => {
                write!(f, "fault_scale must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
