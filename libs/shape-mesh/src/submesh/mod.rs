//! # Submesh
//!
//! The renderer-agnostic triangle mesh fragment produced by every generator.
//!
//! A [`Submesh`] is a value: operations return new meshes instead of mutating
//! in place, so fragments can be combined freely with `+`.

mod transform;

pub use transform::AtlasRegion;

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};

// =============================================================================
// WINDING
// =============================================================================

/// Vertex order of front-facing triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Winding {
    /// Front faces are counter-clockwise when viewed against their normal.
    #[default]
    CounterClockwise,
    /// Front faces are clockwise when viewed against their normal.
    Clockwise,
}

impl Winding {
    /// The opposite winding.
    pub fn reversed(self) -> Self {
        match self {
            Winding::CounterClockwise => Winding::Clockwise,
            Winding::Clockwise => Winding::CounterClockwise,
        }
    }
}

// =============================================================================
// SUBMESH
// =============================================================================

/// Indexed triangle mesh fragment.
///
/// Every vertex carries a position, a normal and a texture coordinate; the
/// index buffer holds one triple per triangle.
///
/// # Example
///
/// ```rust
/// use shape_mesh::Submesh;
/// use glam::Vec3;
///
/// let triangle = Submesh::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![], vec![], vec![0, 1, 2]);
/// let pair = triangle.clone() + triangle;
/// assert_eq!(pair.indices(), &[0, 1, 2, 3, 4, 5]);
/// assert_eq!(pair.normals().len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Submesh {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    texcoords: Vec<Vec2>,
    indices: Vec<u32>,
    winding: Winding,
}

impl Submesh {
    /// Creates a counter-clockwise submesh.
    ///
    /// Empty `normals` or `texcoords` are replaced by zero vectors, one per
    /// position.
    pub fn new(positions: Vec<Vec3>, normals: Vec<Vec3>, texcoords: Vec<Vec2>, indices: Vec<u32>) -> Self {
        let normals = if normals.is_empty() {
            vec![Vec3::ZERO; positions.len()]
        } else {
            normals
        };
        let texcoords = if texcoords.is_empty() {
            vec![Vec2::ZERO; positions.len()]
        } else {
            texcoords
        };
        Self {
            positions,
            normals,
            texcoords,
            indices,
            winding: Winding::CounterClockwise,
        }
    }

    /// Creates an empty submesh.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Same mesh tagged with `winding`.
    pub fn with_winding(mut self, winding: Winding) -> Self {
        self.winding = winding;
        self
    }

    /// Vertex positions.
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Vertex normals, one per position.
    #[inline]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Texture coordinates, one per position.
    #[inline]
    pub fn texcoords(&self) -> &[Vec2] {
        &self.texcoords
    }

    /// Flat triangle index buffer.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Winding tag.
    #[inline]
    pub fn winding(&self) -> Winding {
        self.winding
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterates over whole triangles.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|triangle| [triangle[0], triangle[1], triangle[2]])
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners, or `None` for a mesh without vertices.
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        Some(
            self.positions[1..]
                .iter()
                .fold((first, first), |(min, max), p| (min.min(*p), max.max(*p))),
        )
    }

    /// Checks the structural invariants.
    ///
    /// # Errors
    ///
    /// - [`MeshError::AttributeMismatch`] when attribute arrays differ in length
    /// - [`MeshError::IncompleteTriangle`] when the index count is not a multiple of 3
    /// - [`MeshError::IndexOutOfRange`] for the first index past the vertex count
    pub fn validate(&self) -> MeshResult<()> {
        let vertex_count = self.positions.len();
        if self.normals.len() != vertex_count || self.texcoords.len() != vertex_count {
            return Err(MeshError::AttributeMismatch {
                positions: vertex_count,
                normals: self.normals.len(),
                texcoords: self.texcoords.len(),
            });
        }
        if self.indices.len() % 3 != 0 {
            return Err(MeshError::IncompleteTriangle {
                index_count: self.indices.len(),
            });
        }
        match self.indices.iter().find(|&&index| index as usize >= vertex_count) {
            Some(&index) => Err(MeshError::IndexOutOfRange { index, vertex_count }),
            None => Ok(()),
        }
    }

    /// Flips every normal and reverses every triangle.
    ///
    /// The result is seen from the inside: back faces become front faces.
    /// Applying it twice gives back the original mesh.
    pub fn inverted(&self) -> Self {
        let mut mesh = self.reversed();
        for normal in &mut mesh.normals {
            *normal = -*normal;
        }
        mesh
    }

    /// Reverses the vertex order of every triangle (`[a, b, c]` becomes
    /// `[a, c, b]`) and toggles the winding tag. Normals are kept.
    pub fn reversed(&self) -> Self {
        let mut indices = self.indices.clone();
        for triangle in indices.chunks_exact_mut(3) {
            triangle.swap(1, 2);
        }
        Self {
            positions: self.positions.clone(),
            normals: self.normals.clone(),
            texcoords: self.texcoords.clone(),
            indices,
            winding: self.winding.reversed(),
        }
    }

    pub(crate) fn map_positions(mut self, f: impl Fn(Vec3) -> Vec3) -> Self {
        for position in &mut self.positions {
            *position = f(*position);
        }
        self
    }

    pub(crate) fn map_normals(mut self, f: impl Fn(Vec3) -> Vec3) -> Self {
        for normal in &mut self.normals {
            *normal = f(*normal);
        }
        self
    }

    pub(crate) fn map_texcoords(mut self, f: impl Fn(Vec2) -> Vec2) -> Self {
        for texcoord in &mut self.texcoords {
            *texcoord = f(*texcoord);
        }
        self
    }
}

// =============================================================================
// CONCATENATION
// =============================================================================

impl AddAssign<&Submesh> for Submesh {
    /// Appends `rhs`, offsetting its indices by the current vertex count.
    ///
    /// An empty left-hand side adopts the winding of `rhs`.
    fn add_assign(&mut self, rhs: &Submesh) {
        if self.positions.is_empty() && self.indices.is_empty() {
            self.winding = rhs.winding;
        }
        let offset = self.positions.len() as u32;
        self.positions.extend_from_slice(&rhs.positions);
        self.normals.extend_from_slice(&rhs.normals);
        self.texcoords.extend_from_slice(&rhs.texcoords);
        self.indices.extend(rhs.indices.iter().map(|index| index + offset));
    }
}

impl AddAssign for Submesh {
    fn add_assign(&mut self, rhs: Submesh) {
        *self += &rhs;
    }
}

impl Add for Submesh {
    type Output = Submesh;

    fn add(mut self, rhs: Submesh) -> Submesh {
        self += &rhs;
        self
    }
}

impl Add<&Submesh> for Submesh {
    type Output = Submesh;

    fn add(mut self, rhs: &Submesh) -> Submesh {
        self += rhs;
        self
    }
}

impl Sum for Submesh {
    fn sum<I: Iterator<Item = Submesh>>(iter: I) -> Self {
        iter.fold(Submesh::empty(), |accumulated, part| accumulated + part)
    }
}
