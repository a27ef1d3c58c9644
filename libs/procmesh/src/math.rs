//! # Vector Math
//!
//! The handful of 3-vector operations used by faulting and normal
//! estimation. Thin wrappers over `glam::DVec3` so call sites read like the
//! algorithms they implement.

use config::constants::NORMAL_EPSILON;
use glam::DVec3;

/// Returns `a - b`.
#[inline]
pub fn sub(a: DVec3, b: DVec3) -> DVec3 {
    a - b
}

/// Returns `a + b`.
#[inline]
pub fn add(a: DVec3, b: DVec3) -> DVec3 {
    a + b
}

/// Returns the dot product of `a` and `b`.
#[inline]
pub fn dot(a: DVec3, b: DVec3) -> f64 {
    a.dot(b)
}

/// Returns the right-handed cross product `a × b`.
#[inline]
pub fn cross(a: DVec3, b: DVec3) -> DVec3 {
    a.cross(b)
}

/// Scales `v` to unit length.
///
/// Vectors shorter than [`NORMAL_EPSILON`] (including the zero vector) map to
/// the zero vector rather than NaN.
#[inline]
pub fn normalize(v: DVec3) -> DVec3 {
    let length = v.length();
    if length > NORMAL_EPSILON {
        v / length
    } else {
        DVec3::ZERO
    }
}
