//! # Cone Primitive
//!
//! Truncated cones on the Y axis, centered like cylinders. The top ring is
//! never wider than the bottom ring; a zero top radius gives a true cone
//! whose top ring collapses onto the apex.
//!
//! Padding and shelling are delegated to [`ConeProfile`].

mod profile;

pub use profile::ConeProfile;

use config::constants::EPSILON_TOLERANCE;

use super::builder::{band, disk, ProfilePoint, Sweep};
use crate::math::AngularRange;
use crate::params::{sanitize_cone_radii, sanitize_non_negative, sanitize_padding, sanitize_range};
use crate::subdivision::ConeSubdivision;
use crate::submesh::{AtlasRegion, Submesh};

/// Validated nominal profile.
fn nominal_profile(top_radius: f32, bottom_radius: f32, length: f32) -> ConeProfile {
    let (top_radius, bottom_radius) = sanitize_cone_radii(top_radius, bottom_radius);
    let length = sanitize_non_negative("length", length);
    ConeProfile::centered(top_radius, bottom_radius, length)
}

/// Angle swept by `padding` along the mean circle of `profile`.
fn arc_padding(padding: f32, profile: &ConeProfile) -> f32 {
    let mean_radius = 0.5 * (profile.top_radius + profile.bottom_radius);
    if mean_radius > EPSILON_TOLERANCE {
        padding / mean_radius
    } else {
        0.0
    }
}

/// Open slanted surface of a cone.
///
/// Normals are tilted by the slope so sloped sides light correctly.
///
/// # Example
///
/// ```rust
/// use shape_mesh::primitives::cone::generate_conical_surface;
/// use shape_mesh::{math::AngularRange, ConeSubdivision};
///
/// let mesh = generate_conical_surface(0.0, 1.0, 2.0, AngularRange::FULL, ConeSubdivision::both(8, 1));
/// let apex = mesh.positions()[0];
/// assert_eq!(apex, glam::Vec3::new(0.0, 1.0, 0.0));
/// ```
pub fn generate_conical_surface(
    top_radius: f32,
    bottom_radius: f32,
    length: f32,
    range: AngularRange,
    subdivision: ConeSubdivision,
) -> Submesh {
    let profile = nominal_profile(top_radius, bottom_radius, length);
    let sweep = Sweep::new(sanitize_range(range), subdivision.radial, subdivision.lateral);
    band(profile.top(), profile.bottom(), &sweep.angles, sweep.lateral)
}

/// Solid cone: slanted side, bottom disk, top disk unless the top is an
/// apex, and flat faces at the angular ends of a partial range.
///
/// `padding` offsets every face by `padding` along its normal.
pub fn generate_cone(
    top_radius: f32,
    bottom_radius: f32,
    length: f32,
    padding: f32,
    range: AngularRange,
    subdivision: ConeSubdivision,
) -> Submesh {
    let nominal = nominal_profile(top_radius, bottom_radius, length);
    let padding = sanitize_padding(padding);
    let range = sanitize_range(range).expanded(arc_padding(padding, &nominal));
    let sweep = Sweep::new(range, subdivision.radial, subdivision.lateral);
    let profile = nominal.offset(padding);

    let top = profile.top();
    let bottom = profile.bottom();
    let mut mesh = band(top, bottom, &sweep.angles, sweep.lateral).with_texcoords_in(AtlasRegion::BODY);
    if !profile.is_apex() {
        mesh += disk(top.radius, top.height, &sweep.angles, true).with_texcoords_in(AtlasRegion::TOP_COVER);
    }
    mesh += disk(bottom.radius, bottom.height, &sweep.angles, false).with_texcoords_in(AtlasRegion::BOTTOM_COVER);
    mesh += sweep.end_caps(&[
        ProfilePoint::new(0.0, top.height),
        top,
        bottom,
        ProfilePoint::new(0.0, bottom.height),
    ]);
    mesh
}

/// Closed double-walled shell around a conical surface.
///
/// A non-negative `padding` builds walls `padding` away from the side on
/// either hand, extended `padding` past both rings and joined by covers. A
/// negative padding first moves the side `|padding|` inwards with both rings
/// pulled in by `|padding|`, then builds a shell of half-thickness
/// `|padding| / 2` around it.
pub fn generate_volumetric_conical_surface(
    top_radius: f32,
    bottom_radius: f32,
    length: f32,
    padding: f32,
    range: AngularRange,
    subdivision: ConeSubdivision,
) -> Submesh {
    let nominal = nominal_profile(top_radius, bottom_radius, length);
    let padding = sanitize_padding(padding);
    let range = sanitize_range(range);

    let (profile, thickness, range) = if padding < 0.0 {
        let inset = -padding;
        let profile = nominal.inset(inset);
        let range = range.expanded(-arc_padding(inset, &nominal));
        (profile, 0.5 * inset, range.expanded(arc_padding(0.5 * inset, &profile)))
    } else {
        (nominal, padding, range.expanded(arc_padding(padding, &nominal)))
    };
    let sweep = Sweep::new(range, subdivision.radial, subdivision.lateral);
    conical_shell(&profile, thickness, &sweep)
}

fn conical_shell(profile: &ConeProfile, thickness: f32, sweep: &Sweep) -> Submesh {
    let (outer, inner) = profile.shell(thickness);

    let mut mesh = band(outer.top(), outer.bottom(), &sweep.angles, sweep.lateral)
        .with_texcoords_in(AtlasRegion::OUTER_WALL);
    mesh += band(inner.top(), inner.bottom(), &sweep.angles, sweep.lateral)
        .inverted()
        .with_texcoords_in(AtlasRegion::INNER_WALL);
    if !(outer.is_apex() && inner.is_apex()) {
        mesh += band(inner.top(), outer.top(), &sweep.angles, 1).with_texcoords_in(AtlasRegion::TOP_COVER);
    }
    mesh += band(outer.bottom(), inner.bottom(), &sweep.angles, 1).with_texcoords_in(AtlasRegion::BOTTOM_COVER);
    mesh += sweep.end_caps(&[inner.top(), outer.top(), outer.bottom(), inner.bottom()]);
    mesh
}
