//! # Render Conversion
//!
//! Turns validated submeshes into interleaved GPU-ready buffers and pairs
//! each representation slot with the material it is drawn with.
//!
//! Materials are plain configuration passed into [`Representations::to_buffers`];
//! nothing here holds global state.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::assembly::{Representations, ShapeKind};
use crate::error::{MeshError, MeshResult};
use crate::submesh::{Submesh, Winding};

// =============================================================================
// MESH BUFFER
// =============================================================================

/// Interleaved vertex with position, normal and UV.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}

/// GPU-ready copy of a [`Submesh`].
///
/// # Example
///
/// ```rust
/// use shape_mesh::render::MeshBuffer;
/// use shape_mesh::Submesh;
/// use glam::Vec3;
///
/// let triangle = Submesh::new(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![], vec![], vec![0, 1, 2]);
/// let buffer = MeshBuffer::from_submesh("triangle", &triangle).unwrap();
/// assert_eq!(buffer.triangle_count(), 1);
/// assert!(!buffer.has_normals());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffer {
    name: String,
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
    winding: Winding,
    has_normals: bool,
    has_texcoords: bool,
}

impl MeshBuffer {
    /// Validates and interleaves `submesh`.
    ///
    /// Normals or texcoords that are zero for every vertex are reported as
    /// absent, so the renderer can derive its own.
    pub fn from_submesh(name: impl Into<String>, submesh: &Submesh) -> MeshResult<Self> {
        submesh.validate()?;
        if u32::try_from(submesh.vertex_count()).is_err() {
            return Err(MeshError::conversion(format!(
                "{} vertices do not fit 32-bit indices",
                submesh.vertex_count()
            )));
        }

        let vertices: Vec<Vertex> = submesh
            .positions()
            .iter()
            .zip(submesh.normals())
            .zip(submesh.texcoords())
            .map(|((&position, &normal), &uv)| Vertex { position, normal, uv })
            .collect();
        let has_normals = submesh.normals().iter().any(|n| *n != Vec3::ZERO);
        let has_texcoords = submesh.texcoords().iter().any(|uv| *uv != Vec2::ZERO);

        let name = name.into();
        log::trace!(
            "converted `{name}`: {} vertices, {} triangles",
            vertices.len(),
            submesh.triangle_count()
        );
        Ok(Self {
            name,
            vertices,
            indices: submesh.indices().to_vec(),
            winding: submesh.winding(),
            has_normals,
            has_texcoords,
        })
    }

    /// Slot or debug name of the buffer.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Interleaved vertices.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Triangle indices, three per face.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Front-face winding the renderer must cull against.
    #[inline]
    pub fn winding(&self) -> Winding {
        self.winding
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the buffer has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns true if any vertex has a non-zero normal.
    #[inline]
    pub fn has_normals(&self) -> bool {
        self.has_normals
    }

    /// Returns true if any vertex has a non-zero texture coordinate.
    #[inline]
    pub fn has_texcoords(&self) -> bool {
        self.has_texcoords
    }

    /// Vertex data as bytes.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as bytes.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

// =============================================================================
// MATERIALS
// =============================================================================

/// Representation slot of a displayed shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RenderSlot {
    Occlusion,
    Wireframe,
    Surface,
    Outline,
}

impl RenderSlot {
    /// Every slot in drawing order.
    pub const ALL: [RenderSlot; 4] = [
        RenderSlot::Occlusion,
        RenderSlot::Wireframe,
        RenderSlot::Surface,
        RenderSlot::Outline,
    ];

    /// Lowercase slot name.
    pub fn name(self) -> &'static str {
        match self {
            RenderSlot::Occlusion => "occlusion",
            RenderSlot::Wireframe => "wireframe",
            RenderSlot::Surface => "surface",
            RenderSlot::Outline => "outline",
        }
    }
}

/// How triangles are rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FillMode {
    /// Writes depth only.
    DepthOnly,
    /// Draws triangle edges.
    Lines,
    /// Fills triangles.
    Solid,
}

/// Unlit material of one slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotMaterial {
    /// Linear RGBA color.
    pub color: Vec4,
    pub fill: FillMode,
}

impl SlotMaterial {
    pub const fn new(color: Vec4, fill: FillMode) -> Self {
        Self { color, fill }
    }
}

/// Materials of all four slots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialSet {
    pub occlusion: SlotMaterial,
    pub wireframe: SlotMaterial,
    pub surface: SlotMaterial,
    pub outline: SlotMaterial,
}

const SURFACE_ALPHA: f32 = 0.2;
const BLACK: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);

impl MaterialSet {
    /// Black wireframe and outline, depth-only occlusion and a translucent
    /// fill whose hue identifies `kind`.
    pub fn for_kind(kind: ShapeKind) -> Self {
        let (r, g, b) = match kind {
            ShapeKind::Plane => (1.0, 0.0, 0.0),
            ShapeKind::Sphere => (0.0, 1.0, 0.0),
            ShapeKind::Cylinder => (0.5, 0.0, 0.5),
            ShapeKind::Cone => (0.0, 1.0, 1.0),
            ShapeKind::Torus => (1.0, 1.0, 0.0),
        };
        Self {
            occlusion: SlotMaterial::new(Vec4::ZERO, FillMode::DepthOnly),
            wireframe: SlotMaterial::new(BLACK, FillMode::Lines),
            surface: SlotMaterial::new(Vec4::new(r, g, b, SURFACE_ALPHA), FillMode::Solid),
            outline: SlotMaterial::new(BLACK, FillMode::Solid),
        }
    }

    /// Material of `slot`.
    pub fn get(&self, slot: RenderSlot) -> SlotMaterial {
        match slot {
            RenderSlot::Occlusion => self.occlusion,
            RenderSlot::Wireframe => self.wireframe,
            RenderSlot::Surface => self.surface,
            RenderSlot::Outline => self.outline,
        }
    }
}

// =============================================================================
// REPRESENTATIONS
// =============================================================================

impl Representations {
    /// Geometry of `slot`.
    pub fn get(&self, slot: RenderSlot) -> &Submesh {
        match slot {
            RenderSlot::Occlusion => &self.occlusion,
            RenderSlot::Wireframe => &self.wireframe,
            RenderSlot::Surface => &self.surface,
            RenderSlot::Outline => &self.outline,
        }
    }

    /// Converts every slot, pairing each buffer with its material.
    ///
    /// Fails on the first slot whose geometry is rejected.
    pub fn to_buffers(&self, materials: &MaterialSet) -> MeshResult<Vec<(RenderSlot, MeshBuffer, SlotMaterial)>> {
        RenderSlot::ALL
            .into_iter()
            .map(|slot| {
                let buffer = MeshBuffer::from_submesh(slot.name(), self.get(slot))?;
                Ok((slot, buffer, materials.get(slot)))
            })
            .collect()
    }
}
