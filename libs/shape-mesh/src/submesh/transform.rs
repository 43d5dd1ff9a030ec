//! Affine transforms and texture-atlas placement of submeshes.

use glam::{Mat3, Mat4, Quat, Vec2, Vec3};

use super::Submesh;
use crate::math::Angle;

/// Axis-aligned rectangle of a shared texture atlas.
///
/// Composite shapes pack each fragment's `[0, 1]²` texcoords into their own
/// region so one texture can decorate the whole mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasRegion {
    /// Lower corner of the region.
    pub origin: Vec2,
    /// Extent of the region.
    pub size: Vec2,
}

impl AtlasRegion {
    /// Lateral body of a solid: upper half.
    pub const BODY: Self = Self::new(Vec2::new(0.0, 0.5), Vec2::new(1.0, 0.5));
    /// Top cover: lower-left quarter.
    pub const TOP_COVER: Self = Self::new(Vec2::ZERO, Vec2::splat(0.5));
    /// Bottom cover: lower-right quarter.
    pub const BOTTOM_COVER: Self = Self::new(Vec2::new(0.5, 0.0), Vec2::splat(0.5));
    /// Outer wall of a double-walled shell.
    pub const OUTER_WALL: Self = Self::new(Vec2::new(0.0, 0.5), Vec2::new(1.0, 0.25));
    /// Inner wall of a double-walled shell.
    pub const INNER_WALL: Self = Self::new(Vec2::new(0.0, 0.75), Vec2::new(1.0, 0.25));

    /// Creates a region.
    pub const fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Maps a unit-square coordinate into the region.
    #[inline]
    pub fn map(&self, texcoord: Vec2) -> Vec2 {
        self.origin + texcoord * self.size
    }
}

impl Submesh {
    /// Moves every position by `offset`.
    pub fn translated(self, offset: Vec3) -> Self {
        self.map_positions(|p| p + offset)
    }

    /// Scales positions per axis. Normals are corrected and renormalized.
    pub fn scaled(self, factors: Vec3) -> Self {
        self.transformed(Mat4::from_scale(factors))
    }

    /// Scales positions uniformly. Normals are unchanged for positive factors.
    ///
    /// A negative factor mirrors the mesh: normals flip and every triangle is
    /// reordered so it still winds around its normals.
    pub fn scaled_uniform(self, factor: f32) -> Self {
        if factor < 0.0 {
            self.map_positions(|p| p * factor).map_normals(|n| -n).mirror_triangles()
        } else {
            self.map_positions(|p| p * factor)
        }
    }

    /// Rotates positions and normals.
    pub fn rotated(self, rotation: Quat) -> Self {
        self.map_positions(|p| rotation * p)
            .map_normals(|n| rotation * n)
    }

    /// Rotates by `angle` around `axis` (need not be normalized).
    ///
    /// # Example
    ///
    /// ```rust
    /// use shape_mesh::{math::Angle, Submesh};
    /// use glam::Vec3;
    ///
    /// let mesh = Submesh::new(vec![Vec3::X], vec![Vec3::X], vec![], vec![])
    ///     .rotated_about(Angle::from_degrees(90.0), Vec3::Z);
    /// assert!(mesh.positions()[0].abs_diff_eq(Vec3::Y, 1e-6));
    /// ```
    pub fn rotated_about(self, angle: Angle, axis: Vec3) -> Self {
        self.rotated(Quat::from_axis_angle(axis.normalize(), angle.radians()))
    }

    /// Applies an affine matrix.
    ///
    /// Positions transform as points. Normals use the inverse transpose of
    /// the linear part and are renormalized; zero normals stay zero. A
    /// reflecting matrix (negative determinant) also reorders every triangle,
    /// keeping the winding tag.
    pub fn transformed(self, matrix: Mat4) -> Self {
        let linear = Mat3::from_mat4(matrix);
        let determinant = linear.determinant();
        let normal_matrix = if determinant.abs() > f32::EPSILON {
            linear.inverse().transpose()
        } else {
            linear
        };
        let mesh = self
            .map_positions(|p| matrix.transform_point3(p))
            .map_normals(|n| (normal_matrix * n).normalize_or_zero());
        if determinant < 0.0 {
            mesh.mirror_triangles()
        } else {
            mesh
        }
    }

    /// Remaps texcoords from the unit square into `region`.
    pub fn with_texcoords_in(self, region: AtlasRegion) -> Self {
        self.map_texcoords(|uv| region.map(uv))
    }

    /// Swaps the last two corners of every triangle without touching the
    /// winding tag.
    fn mirror_triangles(mut self) -> Self {
        for triangle in self.indices.chunks_exact_mut(3) {
            triangle.swap(1, 2);
        }
        self
    }
}
