//! 4x4 affine transform helpers.
//!
//! Matrices are column-major `glam::Mat4` acting on column vectors.

use glam::{Mat4, Quat, Vec3};

/// Translation by `offset`.
#[inline]
pub fn translation(offset: Vec3) -> Mat4 {
    Mat4::from_translation(offset)
}

/// Non-uniform scale by `factors`.
#[inline]
pub fn scaling(factors: Vec3) -> Mat4 {
    Mat4::from_scale(factors)
}

/// Rotation by a unit quaternion.
#[inline]
pub fn rotation(rotation: Quat) -> Mat4 {
    Mat4::from_quat(rotation)
}

/// Composes transforms so that `parts[0]` is applied first.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use shape_mesh::math::transform::{compose, scaling, translation};
///
/// let m = compose(&[scaling(Vec3::splat(2.0)), translation(Vec3::X)]);
/// assert_eq!(m.transform_point3(Vec3::ONE), Vec3::new(3.0, 2.0, 2.0));
/// ```
pub fn compose(parts: &[Mat4]) -> Mat4 {
    parts
        .iter()
        .fold(Mat4::IDENTITY, |accumulated, part| *part * accumulated)
}

/// Extrinsic matrix of a local frame: its basis axes as the first three
/// columns and its origin as the translation.
pub fn extrinsics(x_axis: Vec3, y_axis: Vec3, z_axis: Vec3, origin: Vec3) -> Mat4 {
    Mat4::from_cols(
        x_axis.extend(0.0),
        y_axis.extend(0.0),
        z_axis.extend(0.0),
        origin.extend(1.0),
    )
}

/// Extrinsic matrix of a right-handed frame whose Y axis is `y_axis`.
///
/// The remaining axes are chosen by crossing with +Z (or +X when `y_axis`
/// is parallel to Z). Shapes of revolution are built around +Y, so this
/// places them along an arbitrary axis.
///
/// # Examples
/// ```
/// use glam::{Mat4, Vec3};
/// use shape_mesh::math::transform::extrinsics_from_y_axis;
///
/// assert_eq!(extrinsics_from_y_axis(Vec3::Y, Vec3::ZERO), Mat4::IDENTITY);
/// ```
pub fn extrinsics_from_y_axis(y_axis: Vec3, origin: Vec3) -> Mat4 {
    let y_axis = y_axis.normalize();
    let helper = if y_axis.dot(Vec3::Z).abs() < 1.0 - 1.0e-6 {
        Vec3::Z
    } else {
        Vec3::X
    };
    let x_axis = y_axis.cross(helper).normalize();
    let z_axis = x_axis.cross(y_axis).normalize();
    extrinsics(x_axis, y_axis, z_axis, origin)
}
