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
    assert!(EPSILON_TOLERANCE > 0.0, "EPSILON_TOLERANCE must be positive");
}

#[test]
fn test_epsilon_is_above_f32_noise() {
    // Single precision mesh data cannot be compared tighter than this
    assert!(EPSILON_TOLERANCE > f32::EPSILON);
}

// =============================================================================
// SUBDIVISION TESTS
// =============================================================================

#[test]
fn test_min_radial_subdivision_forms_polygon() {
    assert!(MIN_RADIAL_SUBDIVISION >= 3);
}

#[test]
fn test_defaults_respect_minimums() {
    assert!(DEFAULT_RADIAL_SUBDIVISION >= MIN_RADIAL_SUBDIVISION);
    assert!(DEFAULT_CYLINDER_LATERAL_SUBDIVISION >= MIN_LATERAL_SUBDIVISION);
    assert!(DEFAULT_CONE_LATERAL_SUBDIVISION >= MIN_LATERAL_SUBDIVISION);
    assert!(DEFAULT_TOROIDAL_SUBDIVISION >= MIN_RADIAL_SUBDIVISION);
    assert!(DEFAULT_POLOIDAL_SUBDIVISION >= MIN_RADIAL_SUBDIVISION);
    assert!(DEFAULT_OCTAHEDRON_LEVEL >= 1);
}

// =============================================================================
// PARTIAL_SEGMENTS TESTS
// =============================================================================

#[test]
fn test_partial_segments_rounds_to_nearest() {
    assert_eq!(partial_segments(36, 0.5), 18);
    assert_eq!(partial_segments(10, 0.26), 3);
}

#[test]
fn test_partial_segments_never_zero() {
    assert_eq!(partial_segments(36, 0.0), PARTIAL_ARC_MIN_SEGMENTS);
    assert_eq!(partial_segments(36, -0.5), PARTIAL_ARC_MIN_SEGMENTS);
}

#[test]
fn test_partial_segments_full_turn_uses_full_count() {
    assert_eq!(partial_segments(24, 1.0), 24);
    assert_eq!(partial_segments(24, 1.5), 24);
}

// =============================================================================
// COMPARISON HELPERS
// =============================================================================

#[test]
fn test_approx_helpers() {
    assert!(approx_equal(0.5, 0.5 + EPSILON_TOLERANCE * 0.5));
    assert!(!approx_equal(0.5, 0.5 + EPSILON_TOLERANCE * 2.0));
    assert!(approx_zero(-EPSILON_TOLERANCE * 0.1));
}
