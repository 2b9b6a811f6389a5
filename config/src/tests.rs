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
fn test_reversal_tolerance_is_small() {
    assert!(REVERSAL_DOT_TOLERANCE > 0.0);
    assert!(REVERSAL_DOT_TOLERANCE < 1e-3);
}

// =============================================================================
// VALIDATION BOUND TESTS
// =============================================================================

#[test]
fn test_ring_vertex_bounds_are_ordered() {
    assert!(MIN_RING_VERTICES >= 4, "a ring needs three distinct positions plus the seam");
    assert!(MIN_RING_VERTICES <= MAX_RING_VERTICES);
}

#[test]
fn test_max_tube_vertices_fits_u16() {
    assert_eq!(MAX_TUBE_VERTICES, 65535);
    assert!(u16::try_from(MAX_TUBE_VERTICES).is_ok());
}

#[test]
fn test_max_path_cuts_fits_coarsest_ring() {
    assert_eq!(MAX_PATH_CUTS, 16383);
    assert!(MAX_PATH_CUTS * MIN_RING_VERTICES as usize <= MAX_TUBE_VERTICES);
    assert!((MAX_PATH_CUTS + 1) * MIN_RING_VERTICES as usize > MAX_TUBE_VERTICES);
}

#[test]
fn test_path_needs_two_nodes() {
    assert_eq!(MIN_PATH_NODES, 2);
}

// =============================================================================
// DEFAULT TESTS
// =============================================================================

#[test]
fn test_defaults_pass_validation_bounds() {
    assert!(DEFAULT_PIPE_RADIUS >= MIN_PIPE_RADIUS);
    assert!(DEFAULT_BEND_RADIUS >= MIN_BEND_RADIUS);
    assert!((MIN_RING_VERTICES..=MAX_RING_VERTICES).contains(&DEFAULT_RING_VERTICES));
    assert!(DEFAULT_CUT_MAX_ANGLE > 0.0);
    assert!(DEFAULT_MINIMAL_BEND_ANGLE > 0.0);
}

#[test]
fn test_default_global_up_is_unit() {
    let length_sq: f64 = DEFAULT_GLOBAL_UP.iter().map(|c| c * c).sum();
    assert!((length_sq - 1.0).abs() <= MAX_GLOBAL_UP_DEVIATION);
}

// =============================================================================
// BEND_SUBDIVISIONS TESTS
// =============================================================================

#[test]
fn test_bend_subdivisions_right_angle() {
    let cuts = bend_subdivisions(std::f64::consts::FRAC_PI_2, 0.1);
    assert_eq!(cuts, 16);
}

#[test]
fn test_bend_subdivisions_has_floor_of_two() {
    assert_eq!(bend_subdivisions(0.0, 0.1), 2);
    assert_eq!(bend_subdivisions(0.05, 0.1), 2);
}

#[test]
fn test_bend_subdivisions_is_ceiling_biased() {
    // 2.2 steps rounds up to 3 buckets
    assert_eq!(bend_subdivisions(0.22, 0.1), 3);
    // 3.2 steps rounds up to 4 buckets
    assert_eq!(bend_subdivisions(0.32, 0.1), 4);
}

#[test]
fn test_bend_subdivisions_grows_with_angle() {
    let small = bend_subdivisions(0.5, 0.1);
    let large = bend_subdivisions(2.5, 0.1);
    assert!(large > small);
}

// =============================================================================
// APPROX TESTS
// =============================================================================

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(EPSILON / 2.0));
    assert!(!approx_zero(EPSILON * 2.0));
}
