//! # Plane Primitive
//!
//! Flat rectangles and the thin boxes standing in for them when a plane must
//! look solid or be outlined.
//!
//! Width runs along X, height along Y, thickness along Z. Everything is
//! centered on the origin and the flat surface faces +Z.

use glam::{Vec2, Vec3};

use crate::params::{sanitize_non_negative, sanitize_padding};
use crate::submesh::{AtlasRegion, Submesh};

/// A box face: outward normal plus the two in-plane axes with `u × v = n`.
struct Face {
    normal: Vec3,
    u: Vec3,
    v: Vec3,
    /// Cell of the 3×2 cube atlas (column, row).
    cell: (u32, u32),
}

static FACES: [Face; 6] = [
    Face { normal: Vec3::Z, u: Vec3::X, v: Vec3::Y, cell: (0, 0) },
    Face { normal: Vec3::Y, u: Vec3::X, v: Vec3::NEG_Z, cell: (1, 0) },
    Face { normal: Vec3::X, u: Vec3::NEG_Z, v: Vec3::Y, cell: (2, 0) },
    Face { normal: Vec3::NEG_Z, u: Vec3::NEG_X, v: Vec3::Y, cell: (0, 1) },
    Face { normal: Vec3::NEG_Y, u: Vec3::X, v: Vec3::Z, cell: (1, 1) },
    Face { normal: Vec3::NEG_X, u: Vec3::Z, v: Vec3::Y, cell: (2, 1) },
];

/// Rectangle centered at `center` spanning `±u` and `±v`.
///
/// Texcoords cover the unit square with (0, 0) at `center - u - v`.
fn quad(center: Vec3, u: Vec3, v: Vec3, normal: Vec3) -> Submesh {
    let positions = vec![center - u - v, center + u - v, center + u + v, center - u + v];
    let texcoords = vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0), Vec2::new(0.0, 1.0)];
    Submesh::new(positions, vec![normal; 4], texcoords, vec![0, 1, 2, 0, 2, 3])
}

fn box_faces(width: f32, height: f32, depth: f32) -> impl Iterator<Item = (&'static Face, Submesh)> {
    let half = Vec3::new(
        sanitize_non_negative("width", width),
        sanitize_non_negative("height", height),
        sanitize_non_negative("depth", depth),
    ) * 0.5;
    FACES.iter().map(move |face| {
        let extent = |axis: Vec3| axis * half.dot(axis.abs());
        let mesh = quad(extent(face.normal), extent(face.u), extent(face.v), face.normal);
        (face, mesh)
    })
}

// =============================================================================
// GENERATORS
// =============================================================================

/// Flat rectangle facing +Z.
///
/// # Example
///
/// ```rust
/// use shape_mesh::primitives::plane::generate_plane_surface;
///
/// let quad = generate_plane_surface(2.0, 1.0);
/// assert_eq!(quad.triangle_count(), 2);
/// ```
pub fn generate_plane_surface(width: f32, height: f32) -> Submesh {
    let half_width = sanitize_non_negative("width", width) * 0.5;
    let half_height = sanitize_non_negative("height", height) * 0.5;
    quad(Vec3::ZERO, Vec3::X * half_width, Vec3::Y * half_height, Vec3::Z)
}

/// Axis-aligned box with four vertices per face and per-face texcoords.
pub fn generate_plane_box(width: f32, height: f32, depth: f32) -> Submesh {
    box_faces(width, height, depth).map(|(_, mesh)| mesh).sum()
}

/// Box whose faces share one texture laid out as a 3×2 atlas:
/// front, top, right on the first row; back, bottom, left on the second.
pub fn generate_cube(width: f32, height: f32, depth: f32) -> Submesh {
    let cell_size = Vec2::new(1.0 / 3.0, 0.5);
    box_faces(width, height, depth)
        .map(|(face, mesh)| {
            let origin = Vec2::new(face.cell.0 as f32, face.cell.1 as f32) * cell_size;
            mesh.with_texcoords_in(AtlasRegion::new(origin, cell_size))
        })
        .sum()
}

/// Solid slab of `thickness` grown by `padding` on every side.
pub fn generate_plane_volume(width: f32, height: f32, thickness: f32, padding: f32) -> Submesh {
    let padding = sanitize_padding(padding);
    let grow = |name, extent| (sanitize_non_negative(name, extent) + 2.0 * padding).max(0.0);
    generate_plane_box(grow("width", width), grow("height", height), grow("thickness", thickness))
}

/// Closed thin box around a flat rectangle.
///
/// A non-negative `padding` gives a slab `2 * padding` thick whose outline
/// extends `padding` past every edge. A negative padding gives a slab
/// `|padding|` thick pulled `|padding|` inside every edge.
pub fn generate_volumetric_plane(width: f32, height: f32, padding: f32) -> Submesh {
    let width = sanitize_non_negative("width", width);
    let height = sanitize_non_negative("height", height);
    let padding = sanitize_padding(padding);
    if padding >= 0.0 {
        generate_plane_box(width + 2.0 * padding, height + 2.0 * padding, 2.0 * padding)
    } else {
        let inset = -padding;
        generate_plane_box(
            (width - 2.0 * inset).max(0.0),
            (height - 2.0 * inset).max(0.0),
            inset,
        )
    }
}
