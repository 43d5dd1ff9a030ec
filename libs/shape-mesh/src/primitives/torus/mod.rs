//! # Torus Primitive
//!
//! A tube of `tube_radius` swept along the circle of `mean_radius` around
//! the Y axis. The toroidal angle runs around the main ring, the poloidal
//! angle around the tube:
//!
//! ```text
//! p(t, φ) = R·dir(t) + r·(cos φ·dir(t) + sin φ·Y)
//! ```
//!
//! A partial torus covers only an arc of the main ring. Its toroidal segment
//! count is scaled with the arc so triangle density matches the full ring.

use config::constants::{EPSILON_TOLERANCE, MIN_LATERAL_SUBDIVISION, MIN_RADIAL_SUBDIVISION};
use glam::{Vec2, Vec3};

use super::builder::{closed_fan, closed_strip};
use crate::math::{arc_angles, radial_direction, tangent_direction, AngularRange};
use crate::params::{sanitize_non_negative, sanitize_padding, sanitize_range, sanitize_subdivision};
use crate::subdivision::TorusSubdivision;
use crate::submesh::{AtlasRegion, Submesh};

/// Grid of tube points and the boundary loops at both ends of the arc.
struct Tube {
    mesh: Submesh,
    /// Toroidal angles of the first and last meridian.
    ends: (f32, f32),
    /// Points per loop, excluding the repeated seam point.
    loop_len: usize,
    /// Index of the first point of the last loop.
    last_loop: usize,
    full: bool,
}

impl Tube {
    fn begin_loop(&self) -> &[Vec3] {
        &self.mesh.positions()[..self.loop_len]
    }

    fn end_loop(&self) -> &[Vec3] {
        &self.mesh.positions()[self.last_loop..self.last_loop + self.loop_len]
    }
}

fn tube(mean_radius: f32, tube_radius: f32, range: AngularRange, subdivision: TorusSubdivision) -> Tube {
    let toroidal = sanitize_subdivision("toroidal", subdivision.toroidal, MIN_RADIAL_SUBDIVISION);
    let poloidal = sanitize_subdivision("poloidal", subdivision.poloidal, MIN_LATERAL_SUBDIVISION);
    let angles = arc_angles(range, range.segment_count(toroidal));
    let stride = poloidal + 1;

    let vertex_count = angles.len() * stride as usize;
    let mut positions = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);
    let mut texcoords = Vec::with_capacity(vertex_count);

    let last = (angles.len() - 1) as f32;
    for (t, &angle) in angles.iter().enumerate() {
        let direction = radial_direction(angle);
        let center = mean_radius * direction;
        for p in 0..=poloidal {
            let poloidal_ratio = p as f32 / poloidal as f32;
            let (sin, cos) = (std::f32::consts::TAU * poloidal_ratio).sin_cos();
            let normal = cos * direction + Vec3::new(0.0, sin, 0.0);
            positions.push(center + tube_radius * normal);
            normals.push(normal);
            texcoords.push(Vec2::new(t as f32 / last, poloidal_ratio));
        }
    }

    let mut indices = Vec::with_capacity((angles.len() - 1) * poloidal as usize * 6);
    for t in 0..angles.len() as u32 - 1 {
        for p in 0..poloidal {
            let bottom_right = t * stride + p;
            let top_right = bottom_right + 1;
            let bottom_left = (t + 1) * stride + p;
            let top_left = bottom_left + 1;
            indices.extend_from_slice(&[top_left, bottom_left, bottom_right, top_left, bottom_right, top_right]);
        }
    }

    Tube {
        mesh: Submesh::new(positions, normals, texcoords, indices),
        ends: (angles[0], angles[angles.len() - 1]),
        loop_len: poloidal as usize,
        last_loop: (angles.len() - 1) * stride as usize,
        full: range.is_full(),
    }
}

/// Lengthens `range` by `padding` along the main ring at each end.
fn padded_range(range: AngularRange, padding: f32, mean_radius: f32) -> AngularRange {
    if mean_radius > EPSILON_TOLERANCE {
        range.expanded(padding / mean_radius)
    } else {
        range
    }
}

// =============================================================================
// GENERATORS
// =============================================================================

/// Open tube over `range` of the main ring.
///
/// # Example
///
/// ```rust
/// use shape_mesh::primitives::torus::generate_toric_surface;
/// use shape_mesh::{math::AngularRange, TorusSubdivision};
///
/// let ring = generate_toric_surface(2.0, 0.5, AngularRange::FULL, TorusSubdivision::both(12, 8));
/// assert_eq!(ring.triangle_count(), 12 * 8 * 2);
/// ```
pub fn generate_toric_surface(
    mean_radius: f32,
    tube_radius: f32,
    range: AngularRange,
    subdivision: TorusSubdivision,
) -> Submesh {
    let mean_radius = sanitize_non_negative("mean_radius", mean_radius);
    let tube_radius = sanitize_non_negative("tube_radius", tube_radius);
    tube(mean_radius, tube_radius, sanitize_range(range), subdivision).mesh
}

/// Solid torus over `range`, with flat caps at both ends of a partial arc.
///
/// `padding` thickens the tube by `padding` and lengthens a partial arc by
/// `padding` at each end (measured along the main ring). An arc reaching a
/// full turn becomes a seamless ring without caps.
pub fn generate_torus(
    mean_radius: f32,
    tube_radius: f32,
    padding: f32,
    range: AngularRange,
    subdivision: TorusSubdivision,
) -> Submesh {
    let mean_radius = sanitize_non_negative("mean_radius", mean_radius);
    let tube_radius = sanitize_non_negative("tube_radius", tube_radius);
    let padding = sanitize_padding(padding);
    let range = padded_range(sanitize_range(range), padding, mean_radius);
    let tube = tube(mean_radius, (tube_radius + padding).max(0.0), range, subdivision);
    if tube.full {
        return tube.mesh;
    }

    let (begin, end) = tube.ends;
    let begin_cap = closed_fan(mean_radius * radial_direction(begin), tube.begin_loop(), -tangent_direction(begin));
    let end_cap = closed_fan(mean_radius * radial_direction(end), tube.end_loop(), tangent_direction(end));
    tube.mesh.with_texcoords_in(AtlasRegion::BODY) + begin_cap + end_cap
}

/// Closed double-walled shell around a toric surface.
///
/// A non-negative `padding` builds tubes of radius `tube_radius ± padding`;
/// a partial arc is lengthened by `padding` at each end and closed by
/// annular caps. A negative padding first shrinks the tube by `|padding|`
/// and shortens the arc likewise, then builds a shell of half-thickness
/// `|padding| / 2` around it.
pub fn generate_volumetric_toric_surface(
    mean_radius: f32,
    tube_radius: f32,
    padding: f32,
    range: AngularRange,
    subdivision: TorusSubdivision,
) -> Submesh {
    let mean_radius = sanitize_non_negative("mean_radius", mean_radius);
    let tube_radius = sanitize_non_negative("tube_radius", tube_radius);
    let padding = sanitize_padding(padding);
    let range = sanitize_range(range);

    if padding < 0.0 {
        let inset = -padding;
        return generate_volumetric_toric_surface(
            mean_radius,
            (tube_radius - inset).max(0.0),
            0.5 * inset,
            padded_range(range, -inset, mean_radius),
            subdivision,
        );
    }

    let range = padded_range(range, padding, mean_radius);
    let outer = tube(mean_radius, tube_radius + padding, range, subdivision);
    let inner = tube(mean_radius, (tube_radius - padding).max(0.0), range, subdivision);

    let mut mesh = outer.mesh.clone().with_texcoords_in(AtlasRegion::OUTER_WALL)
        + inner.mesh.inverted().with_texcoords_in(AtlasRegion::INNER_WALL);
    if !outer.full {
        let (begin, end) = outer.ends;
        mesh += closed_strip(inner.begin_loop(), outer.begin_loop(), -tangent_direction(begin));
        mesh += closed_strip(inner.end_loop(), outer.end_loop(), tangent_direction(end));
    }
    mesh
}
