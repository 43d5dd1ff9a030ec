//! # Vector Math
//!
//! Scalar, vector and angle helpers shared by every generator.
//!
//! Shapes of revolution use Y as their axis. The radial direction at angle
//! `a` is `(cos a, 0, sin a)`, so angles grow from +X towards +Z.

pub mod angle;
pub mod transform;

pub use angle::{Angle, AngularRange};

use glam::Vec3;

/// Reference axis that gives [`signed_angle`] the same orientation as
/// [`radial_direction`].
pub const ANGLE_REFERENCE: Vec3 = Vec3::NEG_Y;

/// Linear interpolation between `a` and `b`.
///
/// # Examples
/// ```
/// use shape_mesh::math::mix;
/// assert_eq!(mix(2.0, 4.0, 0.5), 3.0);
/// ```
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Unit direction in the XZ plane at `angle` radians.
#[inline]
pub fn radial_direction(angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(cos, 0.0, sin)
}

/// Derivative of [`radial_direction`] with respect to the angle.
#[inline]
pub fn tangent_direction(angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(-sin, 0.0, cos)
}

/// Point on the circle of `radius` around the Y axis at `height`.
#[inline]
pub fn circle_point(angle: f32, radius: f32, height: f32) -> Vec3 {
    radius * radial_direction(angle) + Vec3::new(0.0, height, 0.0)
}

/// Angle from unit vector `a` to unit vector `b`, negative when
/// `reference · (a × b)` is negative.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use shape_mesh::math::{signed_angle, ANGLE_REFERENCE};
///
/// let quarter = signed_angle(Vec3::X, Vec3::Z, ANGLE_REFERENCE);
/// assert!((quarter - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
/// ```
pub fn signed_angle(a: Vec3, b: Vec3, reference: Vec3) -> f32 {
    let angle = a.dot(b).clamp(-1.0, 1.0).acos();
    if reference.dot(a.cross(b)) < 0.0 {
        -angle
    } else {
        angle
    }
}

/// Evenly spaced angles (radians) covering `range` with `segments` steps.
///
/// Returns `segments + 1` values; the first is `range.begin` and the last
/// is `range.end()`.
pub fn arc_angles(range: AngularRange, segments: u32) -> Vec<f32> {
    let begin = range.begin.radians();
    let extent = range.extent.radians();
    (0..=segments)
        .map(|k| begin + extent * (k as f32 / segments as f32))
        .collect()
}

#[cfg(test)]
mod tests;
