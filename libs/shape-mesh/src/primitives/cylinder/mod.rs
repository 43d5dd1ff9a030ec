//! # Cylinder Primitive
//!
//! Cylinders stand on the Y axis, centered on the origin: the top ring is at
//! `+length / 2` and the bottom ring at `-length / 2`. Every generator takes
//! an [`AngularRange`] so a cylinder may cover only part of a turn.

use config::constants::EPSILON_TOLERANCE;

use super::builder::{band, disk, ProfilePoint, Sweep};
use crate::math::AngularRange;
use crate::params::{sanitize_non_negative, sanitize_padding, sanitize_range};
use crate::subdivision::CylinderSubdivision;
use crate::submesh::{AtlasRegion, Submesh};

/// Angle swept by `padding` along a circle of `radius`.
fn arc_padding(padding: f32, radius: f32) -> f32 {
    if radius > EPSILON_TOLERANCE {
        padding / radius
    } else {
        0.0
    }
}

/// Open lateral surface of a cylinder.
///
/// Normals point away from the axis; texcoords run `(1 - angle ratio,
/// lateral ratio)` from the top ring down.
pub fn generate_cylindrical_surface(
    radius: f32,
    length: f32,
    range: AngularRange,
    subdivision: CylinderSubdivision,
) -> Submesh {
    let radius = sanitize_non_negative("radius", radius);
    let half = sanitize_non_negative("length", length) * 0.5;
    let sweep = Sweep::new(sanitize_range(range), subdivision.radial, subdivision.lateral);
    band(
        ProfilePoint::new(radius, half),
        ProfilePoint::new(radius, -half),
        &sweep.angles,
        sweep.lateral,
    )
}

/// Solid cylinder: lateral surface, top and bottom disks, and flat faces at
/// the angular ends of a partial range.
///
/// `padding` grows the radius by `padding`, each end by `padding`, and a
/// partial range by the matching arc at both ends.
///
/// # Example
///
/// ```rust
/// use shape_mesh::primitives::cylinder::generate_cylinder;
/// use shape_mesh::{math::AngularRange, CylinderSubdivision};
///
/// let mesh = generate_cylinder(1.0, 2.0, 0.0, AngularRange::FULL, CylinderSubdivision::both(4, 1));
/// assert_eq!(mesh.indices().len(), 48);
/// ```
pub fn generate_cylinder(
    radius: f32,
    length: f32,
    padding: f32,
    range: AngularRange,
    subdivision: CylinderSubdivision,
) -> Submesh {
    let radius = sanitize_non_negative("radius", radius);
    let length = sanitize_non_negative("length", length);
    let padding = sanitize_padding(padding);

    let range = sanitize_range(range).expanded(arc_padding(padding, radius));
    let sweep = Sweep::new(range, subdivision.radial, subdivision.lateral);
    let radius = (radius + padding).max(0.0);
    let half = (0.5 * length + padding).max(0.0);

    let top = ProfilePoint::new(radius, half);
    let bottom = ProfilePoint::new(radius, -half);
    let body = band(top, bottom, &sweep.angles, sweep.lateral).with_texcoords_in(AtlasRegion::BODY);
    let top_cover = disk(radius, half, &sweep.angles, true).with_texcoords_in(AtlasRegion::TOP_COVER);
    let bottom_cover = disk(radius, -half, &sweep.angles, false).with_texcoords_in(AtlasRegion::BOTTOM_COVER);
    let ends = sweep.end_caps(&[ProfilePoint::new(0.0, half), top, bottom, ProfilePoint::new(0.0, -half)]);

    body + top_cover + bottom_cover + ends
}

/// Closed double-walled shell around a cylindrical surface.
///
/// A non-negative `padding` puts the walls at `radius ± padding`, joined by
/// annular covers `padding` beyond each end. A negative padding first moves
/// the surface `|padding|` inwards (ends included) and then builds a shell
/// of half-thickness `|padding| / 2` around it, so the result lies strictly
/// inside the nominal surface.
pub fn generate_volumetric_cylindrical_surface(
    radius: f32,
    length: f32,
    padding: f32,
    range: AngularRange,
    subdivision: CylinderSubdivision,
) -> Submesh {
    let radius = sanitize_non_negative("radius", radius);
    let length = sanitize_non_negative("length", length);
    let padding = sanitize_padding(padding);
    let range = sanitize_range(range);

    if padding < 0.0 {
        let inset = -padding;
        return generate_volumetric_cylindrical_surface(
            (radius - inset).max(0.0),
            (length - 2.0 * inset).max(0.0),
            0.5 * inset,
            range.expanded(-arc_padding(inset, radius)),
            subdivision,
        );
    }

    let sweep = Sweep::new(
        range.expanded(arc_padding(padding, radius)),
        subdivision.radial,
        subdivision.lateral,
    );
    let outer = radius + padding;
    let inner = (radius - padding).max(0.0);
    let half = 0.5 * length + padding;

    let outer_top = ProfilePoint::new(outer, half);
    let outer_bottom = ProfilePoint::new(outer, -half);
    let inner_top = ProfilePoint::new(inner, half);
    let inner_bottom = ProfilePoint::new(inner, -half);

    let outer_wall = band(outer_top, outer_bottom, &sweep.angles, sweep.lateral)
        .with_texcoords_in(AtlasRegion::OUTER_WALL);
    let inner_wall = band(inner_top, inner_bottom, &sweep.angles, sweep.lateral)
        .inverted()
        .with_texcoords_in(AtlasRegion::INNER_WALL);
    let top_cover = band(inner_top, outer_top, &sweep.angles, 1).with_texcoords_in(AtlasRegion::TOP_COVER);
    let bottom_cover =
        band(outer_bottom, inner_bottom, &sweep.angles, 1).with_texcoords_in(AtlasRegion::BOTTOM_COVER);
    let ends = sweep.end_caps(&[inner_top, outer_top, outer_bottom, inner_bottom]);

    outer_wall + inner_wall + top_cover + bottom_cover + ends
}
