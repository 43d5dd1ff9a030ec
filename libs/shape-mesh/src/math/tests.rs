//! Tests for vector, angle and transform helpers.

use super::transform::{compose, extrinsics_from_y_axis, rotation, scaling, translation};
use super::*;
use approx::assert_abs_diff_eq;
use glam::{Quat, Vec3};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

#[test]
fn test_mix_endpoints() {
    assert_eq!(mix(-1.0, 1.0, 0.0), -1.0);
    assert_eq!(mix(-1.0, 1.0, 1.0), 1.0);
}

#[test]
fn test_radial_and_tangent_are_orthonormal() {
    for k in 0..8 {
        let angle = k as f32 * 0.7;
        let radial = radial_direction(angle);
        let tangent = tangent_direction(angle);
        assert_abs_diff_eq!(radial.length(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(radial.dot(tangent), 0.0, epsilon = 1e-6);
        assert_eq!(radial.y, 0.0);
    }
}

#[test]
fn test_circle_point_radius_and_height() {
    let point = circle_point(PI, 2.0, 0.5);
    assert_abs_diff_eq!(point.x, -2.0, epsilon = 1e-6);
    assert_abs_diff_eq!(point.y, 0.5, epsilon = 1e-6);
    assert_abs_diff_eq!(point.z, 0.0, epsilon = 1e-6);
}

#[test]
fn test_signed_angle_matches_radial_direction() {
    let angle = signed_angle(Vec3::X, radial_direction(1.0), ANGLE_REFERENCE);
    assert_abs_diff_eq!(angle, 1.0, epsilon = 1e-5);
    let angle = signed_angle(Vec3::X, radial_direction(-1.0), ANGLE_REFERENCE);
    assert_abs_diff_eq!(angle, -1.0, epsilon = 1e-5);
}

#[test]
fn test_arc_angles_cover_range() {
    let range = AngularRange::new(Angle::from_radians(1.0), Angle::from_radians(2.0));
    let angles = arc_angles(range, 4);
    assert_eq!(angles.len(), 5);
    assert_eq!(angles[0], 1.0);
    assert_abs_diff_eq!(angles[4], 3.0, epsilon = 1e-6);
}

// =============================================================================
// ANGLE
// =============================================================================

#[test]
fn test_angle_conversions() {
    let angle = Angle::from_degrees(180.0);
    assert_abs_diff_eq!(angle.radians(), PI, epsilon = 1e-6);
    assert_abs_diff_eq!(Angle::from_radians(FRAC_PI_2).degrees(), 90.0, epsilon = 1e-4);
}

#[test]
fn test_angle_normalization_wraps_negative() {
    let angle = Angle::from_degrees(-90.0).normalized();
    assert_abs_diff_eq!(angle.degrees(), 270.0, epsilon = 1e-3);
    assert_eq!(Angle::from_degrees(-0.0).normalized(), Angle::ZERO);
}

#[test]
fn test_angle_arithmetic() {
    let sum = Angle::from_degrees(30.0) + Angle::from_degrees(60.0);
    assert_abs_diff_eq!(sum.degrees(), 90.0, epsilon = 1e-4);
    assert_abs_diff_eq!((-sum).degrees(), -90.0, epsilon = 1e-4);
    assert_abs_diff_eq!((sum * 2.0).degrees(), 180.0, epsilon = 1e-4);
}

// =============================================================================
// ANGULAR RANGE
// =============================================================================

#[test]
fn test_full_range() {
    assert!(AngularRange::FULL.is_full());
    assert_eq!(AngularRange::FULL.fraction(), 1.0);
    assert_eq!(AngularRange::default(), AngularRange::FULL);
}

#[test]
fn test_expanded_partial_range() {
    let range = AngularRange::new(Angle::from_radians(1.0), Angle::from_radians(1.0));
    let grown = range.expanded(0.25);
    assert_abs_diff_eq!(grown.begin.radians(), 0.75, epsilon = 1e-6);
    assert_abs_diff_eq!(grown.extent.radians(), 1.5, epsilon = 1e-6);
    assert_abs_diff_eq!(grown.end().radians(), range.end().radians() + 0.25, epsilon = 1e-6);
}

#[test]
fn test_expanded_past_full_turn_closes() {
    let range = AngularRange::new(Angle::ZERO, Angle::from_radians(TAU - 0.1));
    assert!(range.expanded(0.1).is_full());
    assert!(AngularRange::FULL.expanded(-0.5).is_full());
}

#[test]
fn test_shrunk_range_never_negative() {
    let range = AngularRange::new(Angle::ZERO, Angle::from_radians(0.1));
    assert_eq!(range.expanded(-1.0).extent, Angle::ZERO);
}

#[test]
fn test_from_ring_points_spread_is_full() {
    let points: Vec<Vec3> = (0..12).map(|k| circle_point(k as f32 * TAU / 12.0, 3.0, 1.0)).collect();
    assert!(AngularRange::from_ring_points(&points).is_full());
}

#[test]
fn test_from_ring_points_quarter_arc() {
    let points: Vec<Vec3> = (0..=10)
        .map(|k| circle_point(0.5 + k as f32 * FRAC_PI_2 / 10.0, 2.0, 0.0))
        .collect();
    let range = AngularRange::from_ring_points(&points);
    assert_abs_diff_eq!(range.begin.radians(), 0.5, epsilon = 1e-3);
    assert_abs_diff_eq!(range.extent.radians(), FRAC_PI_2, epsilon = 1e-3);
}

#[test]
fn test_from_ring_points_ignores_axis_points() {
    assert!(AngularRange::from_ring_points(&[Vec3::Y, Vec3::ZERO]).is_full());
}

// =============================================================================
// TRANSFORMS
// =============================================================================

#[test]
fn test_compose_order() {
    let m = compose(&[
        rotation(Quat::from_rotation_y(FRAC_PI_2)),
        translation(Vec3::new(0.0, 1.0, 0.0)),
        scaling(Vec3::splat(3.0)),
    ]);
    // +X rotates to -Z, then lifts, then scales
    let p = m.transform_point3(Vec3::X);
    assert!(p.abs_diff_eq(Vec3::new(0.0, 3.0, -3.0), 1e-5));
}

#[test]
fn test_extrinsics_from_y_axis_is_right_handed() {
    for axis in [Vec3::X, Vec3::Z, Vec3::NEG_Z, Vec3::new(1.0, 2.0, 3.0)] {
        let frame = extrinsics_from_y_axis(axis, Vec3::ONE);
        let x = frame.x_axis.truncate();
        let y = frame.y_axis.truncate();
        let z = frame.z_axis.truncate();
        assert!(y.abs_diff_eq(axis.normalize(), 1e-5));
        assert!(x.cross(y).abs_diff_eq(z, 1e-5));
        assert_eq!(frame.w_axis.truncate(), Vec3::ONE);
    }
}
