//! # Surface Builders
//!
//! Building blocks shared by the shapes of revolution: ruled bands swept
//! around the Y axis, flat disks, and flat polygons or strips closing open
//! ends of a shell.

use config::constants::{MIN_LATERAL_SUBDIVISION, MIN_RADIAL_SUBDIVISION};
use glam::{Vec2, Vec3};

use crate::math::{arc_angles, circle_point, mix, radial_direction, tangent_direction, AngularRange};
use crate::params::sanitize_subdivision;
use crate::submesh::Submesh;

// =============================================================================
// PROFILE
// =============================================================================

/// Point of a meridian profile: distance from the Y axis and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    /// Distance from the axis.
    pub radius: f32,
    /// Position along the axis.
    pub height: f32,
}

impl ProfilePoint {
    /// Creates a profile point.
    pub const fn new(radius: f32, height: f32) -> Self {
        Self { radius, height }
    }

    /// The point placed on the meridian at `angle`.
    #[inline]
    pub fn at(self, angle: f32) -> Vec3 {
        circle_point(angle, self.radius, self.height)
    }
}

// =============================================================================
// BAND
// =============================================================================

/// Sweeps the segment `start → end` around the Y axis.
///
/// `angles` holds one entry per meridian, seam included, so a closed ring
/// repeats its first angle at `2π` further. Vertices are stored meridian by
/// meridian with `lateral + 1` points each, `start` first.
///
/// The front face is on the left of `start → end` when the profile is drawn
/// with the radius growing to the right and the height growing up: a
/// top-to-bottom segment faces away from the axis, an inner-to-outer segment
/// faces up.
pub fn band(start: ProfilePoint, end: ProfilePoint, angles: &[f32], lateral: u32) -> Submesh {
    let meridians = angles.len();
    let rings = lateral as usize + 1;
    let profile_normal = Vec2::new(start.height - end.height, end.radius - start.radius).normalize_or_zero();

    let mut positions = Vec::with_capacity(meridians * rings);
    let mut normals = Vec::with_capacity(meridians * rings);
    let mut texcoords = Vec::with_capacity(meridians * rings);

    let last = meridians.saturating_sub(1).max(1) as f32;
    for (a, &angle) in angles.iter().enumerate() {
        let angle_ratio = a as f32 / last;
        let direction = radial_direction(angle);
        let normal = profile_normal.x * direction + Vec3::new(0.0, profile_normal.y, 0.0);
        for l in 0..rings {
            let lateral_ratio = l as f32 / lateral as f32;
            let point = ProfilePoint::new(
                mix(start.radius, end.radius, lateral_ratio),
                mix(start.height, end.height, lateral_ratio),
            );
            positions.push(point.at(angle));
            normals.push(normal);
            texcoords.push(Vec2::new(1.0 - angle_ratio, lateral_ratio));
        }
    }

    let mut indices = Vec::with_capacity(meridians.saturating_sub(1) * lateral as usize * 6);
    for a in 0..meridians.saturating_sub(1) {
        let current = (a * rings) as u32;
        let next = ((a + 1) * rings) as u32;
        for l in 0..lateral {
            let i00 = current + l;
            let i01 = current + l + 1;
            let i10 = next + l;
            let i11 = next + l + 1;
            indices.extend_from_slice(&[i10, i11, i01, i10, i01, i00]);
        }
    }

    Submesh::new(positions, normals, texcoords, indices)
}

// =============================================================================
// DISK
// =============================================================================

/// Flat disk (or pie slice) of `radius` at `height`, fanned from its center.
///
/// Faces +Y when `facing_up`, -Y otherwise. Texcoords map the unit disk
/// into the unit square.
pub fn disk(radius: f32, height: f32, angles: &[f32], facing_up: bool) -> Submesh {
    let normal = if facing_up { Vec3::Y } else { Vec3::NEG_Y };

    let mut positions = Vec::with_capacity(angles.len() + 1);
    let mut texcoords = Vec::with_capacity(angles.len() + 1);
    positions.push(Vec3::new(0.0, height, 0.0));
    texcoords.push(Vec2::splat(0.5));
    for &angle in angles {
        positions.push(circle_point(angle, radius, height));
        let (sin, cos) = angle.sin_cos();
        texcoords.push(Vec2::new(cos, sin) * 0.5 + 0.5);
    }

    let mut indices = Vec::with_capacity(angles.len().saturating_sub(1) * 3);
    for k in 1..angles.len() as u32 {
        if facing_up {
            indices.extend_from_slice(&[0, k + 1, k]);
        } else {
            indices.extend_from_slice(&[0, k, k + 1]);
        }
    }

    let normals = vec![normal; positions.len()];
    Submesh::new(positions, normals, texcoords, indices)
}

// =============================================================================
// FLAT PATCHES
// =============================================================================

/// Sum of the triangle cross products, pointing along the front faces.
fn area_vector(positions: &[Vec3], indices: &[u32]) -> Vec3 {
    indices
        .chunks_exact(3)
        .map(|t| {
            let a = positions[t[0] as usize];
            let b = positions[t[1] as usize];
            let c = positions[t[2] as usize];
            (b - a).cross(c - a)
        })
        .sum()
}

/// Builds a flat patch and reverses it when its triangles face away from
/// `normal`.
fn oriented(positions: Vec<Vec3>, indices: Vec<u32>, normal: Vec3) -> Submesh {
    let flipped = area_vector(&positions, &indices).dot(normal) < 0.0;
    let normals = vec![normal; positions.len()];
    let mesh = Submesh::new(positions, normals, vec![], indices);
    if flipped {
        mesh.reversed().with_winding(mesh.winding())
    } else {
        mesh
    }
}

/// Fan of triangles from `center` to each edge of the closed loop `ring`.
///
/// Used for the end caps of a partial solid torus, whose loop positions are
/// taken verbatim from the tube.
pub fn closed_fan(center: Vec3, ring: &[Vec3], normal: Vec3) -> Submesh {
    let count = ring.len() as u32;
    let mut positions = Vec::with_capacity(ring.len() + 1);
    positions.push(center);
    positions.extend_from_slice(ring);

    let mut indices = Vec::with_capacity(ring.len() * 3);
    for k in 0..count {
        indices.extend_from_slice(&[0, k + 1, (k + 1) % count + 1]);
    }
    oriented(positions, indices, normal)
}

/// Strip joining two closed loops of equal length.
///
/// Used for the hollow end caps of a partial toric shell.
pub fn closed_strip(inner: &[Vec3], outer: &[Vec3], normal: Vec3) -> Submesh {
    let count = inner.len().min(outer.len()) as u32;
    let mut positions = Vec::with_capacity(count as usize * 2);
    for k in 0..count as usize {
        positions.push(inner[k]);
        positions.push(outer[k]);
    }

    let mut indices = Vec::with_capacity(count as usize * 6);
    for k in 0..count {
        let in0 = 2 * k;
        let out0 = in0 + 1;
        let in1 = 2 * ((k + 1) % count);
        let out1 = in1 + 1;
        indices.extend_from_slice(&[in0, out0, out1, in0, out1, in1]);
    }
    oriented(positions, indices, normal)
}

/// Flat strip lying in the meridian plane at `angle`, between the profile
/// segments `inner` and `outer`.
///
/// Both segments are sampled at `lateral + 1` points exactly as [`band`]
/// samples its profile, so the strip shares every wall vertex it touches.
/// Zero-area triangles (an apex on the axis) are dropped.
pub fn meridian_strip(
    inner: [ProfilePoint; 2],
    outer: [ProfilePoint; 2],
    lateral: u32,
    angle: f32,
    normal: Vec3,
) -> Submesh {
    let lateral = lateral.max(1);
    let sample = |[start, end]: [ProfilePoint; 2], l: u32| {
        let ratio = l as f32 / lateral as f32;
        ProfilePoint::new(mix(start.radius, end.radius, ratio), mix(start.height, end.height, ratio)).at(angle)
    };

    let mut positions = Vec::with_capacity(2 * (lateral as usize + 1));
    for l in 0..=lateral {
        positions.push(sample(inner, l));
        positions.push(sample(outer, l));
    }

    let mut indices = Vec::with_capacity(lateral as usize * 6);
    for l in 0..lateral {
        let in0 = 2 * l;
        let out0 = in0 + 1;
        let in1 = in0 + 2;
        let out1 = in0 + 3;
        for triangle in [[in0, out0, out1], [in0, out1, in1]] {
            if area_vector(&positions, &triangle).length() > f32::EPSILON {
                indices.extend_from_slice(&triangle);
            }
        }
    }
    if indices.is_empty() {
        return Submesh::empty();
    }
    oriented(positions, indices, normal)
}

// =============================================================================
// SWEEP
// =============================================================================

/// Meridian angles and lateral ring count of a shape of revolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep {
    /// Angles of the meridians, seam included.
    pub angles: Vec<f32>,
    /// Segments along each meridian.
    pub lateral: u32,
    full: bool,
}

impl Sweep {
    /// Spreads `radial` segments per full turn over `range`.
    pub fn new(range: AngularRange, radial: u32, lateral: u32) -> Self {
        let radial = sanitize_subdivision("radial", radial, MIN_RADIAL_SUBDIVISION);
        let lateral = sanitize_subdivision("lateral", lateral, MIN_LATERAL_SUBDIVISION);
        Self {
            angles: arc_angles(range, range.segment_count(radial)),
            lateral,
            full: range.is_full(),
        }
    }

    /// Whether the meridians close on themselves.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Flat faces closing the two angular ends of a partial sweep. Empty for
    /// full sweeps.
    ///
    /// `corners` is the meridian cross-section `[inner top, outer top, outer
    /// bottom, inner bottom]`; the outer side and the inner side are split
    /// into `lateral` rows like the walls built on them. For a solid the
    /// inner side is the axis.
    pub fn end_caps(&self, corners: &[ProfilePoint; 4]) -> Submesh {
        let [inner_top, outer_top, outer_bottom, inner_bottom] = *corners;
        let cap = |angle: f32, normal: Vec3| {
            meridian_strip([inner_top, inner_bottom], [outer_top, outer_bottom], self.lateral, angle, normal)
        };
        match (self.full, self.angles.first(), self.angles.last()) {
            (false, Some(&begin), Some(&end)) => {
                cap(begin, -tangent_direction(begin)) + cap(end, tangent_direction(end))
            }
            _ => Submesh::empty(),
        }
    }
}
