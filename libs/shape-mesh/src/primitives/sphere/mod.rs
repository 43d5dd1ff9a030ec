//! # Sphere Primitive
//!
//! Two tessellations of the sphere centered on the origin:
//!
//! - a latitude/longitude grid with texcoords `(azimuth / 2π, polar / π)`
//! - an octahedron whose faces are split recursively, the new vertices
//!   pushed onto the sphere
//!
//! Normals always equal the normalized position.

use std::collections::HashMap;
use std::f32::consts::{PI, TAU};

use config::constants::{MAX_OCTAHEDRON_LEVEL, MIN_RADIAL_SUBDIVISION, MIN_SPHERE_POLAR_SUBDIVISION};
use glam::{Vec2, Vec3};

use crate::params::{sanitize_non_negative, sanitize_padding, sanitize_subdivision};
use crate::subdivision::{SphereSubdivision, SphericalGrid};
use crate::submesh::Submesh;

/// Generates a sphere of `radius + padding`.
///
/// # Example
///
/// ```rust
/// use shape_mesh::primitives::sphere::generate_sphere;
/// use shape_mesh::{SphereSubdivision, SphericalGrid};
///
/// let sphere = generate_sphere(1.0, 0.0, SphereSubdivision::SphericalCoordinates(SphericalGrid::both(4, 8)));
/// // two pole rows of single triangles plus two rows of quads
/// assert_eq!(sphere.triangle_count(), 8 * (2 * 4 - 2));
/// ```
pub fn generate_sphere(radius: f32, padding: f32, subdivision: SphereSubdivision) -> Submesh {
    let radius = sanitize_non_negative("radius", radius);
    let radius = (radius + sanitize_padding(padding)).max(0.0);
    match subdivision {
        SphereSubdivision::SphericalCoordinates(grid) => spherical_grid(radius, grid),
        SphereSubdivision::RecursiveSubdivision { level } => {
            let level = sanitize_subdivision("level", level, 1).min(MAX_OCTAHEDRON_LEVEL);
            octahedron_expansion(radius, level)
        }
    }
}

// =============================================================================
// SPHERICAL COORDINATES
// =============================================================================

fn spherical_grid(radius: f32, grid: SphericalGrid) -> Submesh {
    let polar = sanitize_subdivision("polar", grid.polar, MIN_SPHERE_POLAR_SUBDIVISION);
    let azimuthal = sanitize_subdivision("azimuthal", grid.azimuthal, MIN_RADIAL_SUBDIVISION);
    let stride = azimuthal + 1;
    let vertex_count = ((polar + 1) * stride) as usize;

    let mut positions = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);
    let mut texcoords = Vec::with_capacity(vertex_count);

    for i in 0..=polar {
        let theta_ratio = i as f32 / polar as f32;
        let (sin_theta, cos_theta) = (PI * theta_ratio).sin_cos();
        for j in 0..=azimuthal {
            let phi_ratio = j as f32 / azimuthal as f32;
            let (sin_phi, cos_phi) = (TAU * phi_ratio).sin_cos();
            let normal = Vec3::new(sin_theta * cos_phi, cos_theta, sin_theta * sin_phi);
            positions.push(radius * normal);
            normals.push(normal);
            texcoords.push(Vec2::new(phi_ratio, theta_ratio));
        }
    }

    // The first and last rows touch a pole, where one triangle of each
    // quad collapses.
    let mut indices = Vec::with_capacity((azimuthal * (2 * polar - 2) * 3) as usize);
    for i in 0..polar {
        for j in 0..azimuthal {
            let i0 = i * stride + j + 1;
            let i1 = (i + 1) * stride + j + 1;
            let i2 = (i + 1) * stride + j;
            let i3 = i * stride + j;
            if i != polar - 1 {
                indices.extend_from_slice(&[i0, i1, i2]);
            }
            if i != 0 {
                indices.extend_from_slice(&[i0, i2, i3]);
            }
        }
    }

    Submesh::new(positions, normals, texcoords, indices)
}

// =============================================================================
// OCTAHEDRON EXPANSION
// =============================================================================

const OCTAHEDRON_VERTICES: [Vec3; 6] = [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z];

const OCTAHEDRON_TRIANGLES: [[u32; 3]; 8] = [
    [2, 0, 5],
    [0, 3, 5],
    [2, 5, 1],
    [5, 3, 1],
    [2, 1, 4],
    [1, 3, 4],
    [2, 4, 0],
    [4, 3, 0],
];

/// Unit-sphere vertices shared between neighboring triangles through an
/// edge-midpoint cache.
struct UnitSphere {
    directions: Vec<Vec3>,
    midpoints: HashMap<(u32, u32), u32>,
}

impl UnitSphere {
    fn midpoint(&mut self, a: u32, b: u32) -> u32 {
        let key = (a.min(b), a.max(b));
        if let Some(&index) = self.midpoints.get(&key) {
            return index;
        }
        let direction = (self.directions[a as usize] + self.directions[b as usize]).normalize();
        let index = self.directions.len() as u32;
        self.directions.push(direction);
        self.midpoints.insert(key, index);
        index
    }

    fn split(&mut self, [i0, i1, i2]: [u32; 3]) -> [[u32; 3]; 4] {
        let i01 = self.midpoint(i0, i1);
        let i12 = self.midpoint(i1, i2);
        let i20 = self.midpoint(i2, i0);
        [[i0, i01, i20], [i01, i1, i12], [i01, i12, i20], [i20, i12, i2]]
    }
}

/// Texcoord of a unit direction: longitude across, latitude down.
fn direction_texcoord(direction: Vec3) -> Vec2 {
    let u = direction.z.atan2(direction.x).rem_euclid(TAU) / TAU;
    let v = direction.y.clamp(-1.0, 1.0).acos() / PI;
    Vec2::new(u, v)
}

fn octahedron_expansion(radius: f32, level: u32) -> Submesh {
    let mut sphere = UnitSphere {
        directions: OCTAHEDRON_VERTICES.to_vec(),
        midpoints: HashMap::new(),
    };
    let mut triangles = OCTAHEDRON_TRIANGLES.to_vec();
    for _ in 1..level {
        triangles = triangles
            .into_iter()
            .flat_map(|triangle| sphere.split(triangle))
            .collect();
    }

    let positions = sphere.directions.iter().map(|d| radius * *d).collect();
    let texcoords = sphere.directions.iter().map(|d| direction_texcoord(*d)).collect();
    let indices = triangles.into_iter().flatten().collect();
    Submesh::new(positions, sphere.directions, texcoords, indices)
}
