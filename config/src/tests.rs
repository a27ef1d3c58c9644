//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_normal_epsilon_not_larger_than_epsilon() {
    assert!(NORMAL_EPSILON > 0.0);
    assert!(NORMAL_EPSILON <= EPSILON);
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_min_resolutions_form_a_surface() {
    // A grid needs one cell, a polygonal ring needs three points
    assert!(MIN_GRID_RESOLUTION >= 2);
    assert!(MIN_SPHERE_RINGS >= 2);
    assert!(MIN_SPHERE_SLICES >= 3);
    assert!(MIN_TORUS_RINGS >= 3);
    assert!(MIN_TORUS_POINTS >= 3);
}

#[test]
fn test_default_grid_resolution_is_valid() {
    assert!(DEFAULT_GRID_RESOLUTION >= MIN_GRID_RESOLUTION);
}

// =============================================================================
// FAULTING TESTS
// =============================================================================

#[test]
fn test_default_fault_delta() {
    assert_eq!(DEFAULT_FAULT_DELTA, 0.8);
}

#[test]
fn test_default_fault_scale_does_not_decay() {
    assert_eq!(DEFAULT_FAULT_SCALE, 1.0);
}

#[test]
fn test_default_fault_count_positive() {
    assert!(DEFAULT_FAULT_COUNT > 0);
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_limits_reasonable() {
    assert!(MAX_VERTICES >= 1_000_000);
    assert!(MAX_TRIANGLES >= 1_000_000);
}

#[test]
fn test_u16_index_limit() {
    assert_eq!(MAX_U16_INDEX, 65_535);
}

// =============================================================================
// APPROX TESTS
// =============================================================================

#[test]
fn test_approx_equal_same_values() {
    assert!(approx_equal(1.0, 1.0));
    assert!(approx_equal(0.0, 0.0));
    assert!(approx_equal(-5.5, -5.5));
}

#[test]
fn test_approx_equal_within_epsilon() {
    assert!(approx_equal(1.0, 1.0 + EPSILON / 2.0));
    assert!(!approx_equal(1.0, 1.0 + EPSILON * 2.0));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(-EPSILON / 2.0));
    assert!(!approx_zero(1e-3));
}
