//! Parameter values describing each kind of shape.
//!
//! Intrinsics are plain values: comparing two of them tells whether the
//! generated geometry is still current.

use std::fmt;

use config::constants::PLANE_VOLUME_THICKNESS;
use serde::{Deserialize, Serialize};

use crate::math::AngularRange;
use crate::primitives::{
    generate_cone, generate_conical_surface, generate_cylinder, generate_cylindrical_surface, generate_plane_surface,
    generate_plane_volume, generate_sphere, generate_toric_surface, generate_torus,
    generate_volumetric_conical_surface, generate_volumetric_cylindrical_surface, generate_volumetric_plane,
    generate_volumetric_toric_surface,
};
use crate::subdivision::{ConeSubdivision, CylinderSubdivision, SphereSubdivision, TorusSubdivision};
use crate::submesh::Submesh;

// =============================================================================
// SHAPE VARIANTS
// =============================================================================

/// Solid or thin rendition of a plane, cylinder or cone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BodyShape {
    /// Closed solid.
    #[default]
    Volume,
    /// Open thin shell.
    Surface,
}

/// Solid or thin rendition of a torus.
///
/// A partial arc reaching a full turn renders as the full ring.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum TorusShape {
    /// Full solid ring.
    #[default]
    Volume,
    /// Solid arc of the ring, capped at both ends.
    PartialVolume(AngularRange),
    /// Open tube over an arc of the ring.
    PartialSurface(AngularRange),
}

impl TorusShape {
    /// Arc of the main ring covered by the shape.
    pub fn range(&self) -> AngularRange {
        match self {
            TorusShape::Volume => AngularRange::FULL,
            TorusShape::PartialVolume(range) | TorusShape::PartialSurface(range) => *range,
        }
    }
}

// =============================================================================
// PER-SHAPE INTRINSICS
// =============================================================================

/// Rectangle of `width` × `height` in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneIntrinsics {
    pub width: f32,
    pub height: f32,
    /// Outline halo width; the configured default when `None`.
    pub outline_width: Option<f32>,
    pub shape: BodyShape,
}

impl Default for PlaneIntrinsics {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            outline_width: None,
            shape: BodyShape::Volume,
        }
    }
}

impl PlaneIntrinsics {
    fn generate(&self, padding: f32) -> Submesh {
        match self.shape {
            BodyShape::Volume => generate_plane_volume(self.width, self.height, PLANE_VOLUME_THICKNESS, padding),
            BodyShape::Surface if padding == 0.0 => generate_plane_surface(self.width, self.height),
            BodyShape::Surface => generate_volumetric_plane(self.width, self.height, padding),
        }
    }
}

/// Sphere centered on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereIntrinsics {
    pub radius: f32,
    pub outline_width: Option<f32>,
    pub subdivision: SphereSubdivision,
}

impl Default for SphereIntrinsics {
    fn default() -> Self {
        Self {
            radius: 1.0,
            outline_width: None,
            subdivision: SphereSubdivision::default(),
        }
    }
}

/// Cylinder on the Y axis, optionally covering only `range` around it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderIntrinsics {
    pub radius: f32,
    pub length: f32,
    pub outline_width: Option<f32>,
    pub shape: BodyShape,
    pub range: AngularRange,
    pub subdivision: CylinderSubdivision,
}

impl Default for CylinderIntrinsics {
    fn default() -> Self {
        Self {
            radius: 1.0,
            length: 1.0,
            outline_width: None,
            shape: BodyShape::Volume,
            range: AngularRange::FULL,
            subdivision: CylinderSubdivision::default(),
        }
    }
}

impl CylinderIntrinsics {
    fn generate(&self, padding: f32) -> Submesh {
        let Self {
            radius,
            length,
            range,
            subdivision,
            ..
        } = *self;
        match self.shape {
            BodyShape::Volume => generate_cylinder(radius, length, padding, range, subdivision),
            BodyShape::Surface if padding == 0.0 => generate_cylindrical_surface(radius, length, range, subdivision),
            BodyShape::Surface => generate_volumetric_cylindrical_surface(radius, length, padding, range, subdivision),
        }
    }
}

/// Truncated cone on the Y axis; a zero top radius gives a true cone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConeIntrinsics {
    pub top_radius: f32,
    pub bottom_radius: f32,
    pub length: f32,
    pub outline_width: Option<f32>,
    pub shape: BodyShape,
    pub range: AngularRange,
    pub subdivision: ConeSubdivision,
}

impl Default for ConeIntrinsics {
    fn default() -> Self {
        Self {
            top_radius: 0.0,
            bottom_radius: 1.0,
            length: 1.0,
            outline_width: None,
            shape: BodyShape::Volume,
            range: AngularRange::FULL,
            subdivision: ConeSubdivision::default(),
        }
    }
}

impl ConeIntrinsics {
    fn generate(&self, padding: f32) -> Submesh {
        let Self {
            top_radius: top,
            bottom_radius: bottom,
            length,
            range,
            subdivision,
            ..
        } = *self;
        match self.shape {
            BodyShape::Volume => generate_cone(top, bottom, length, padding, range, subdivision),
            BodyShape::Surface if padding == 0.0 => generate_conical_surface(top, bottom, length, range, subdivision),
            BodyShape::Surface => generate_volumetric_conical_surface(top, bottom, length, padding, range, subdivision),
        }
    }
}

/// Torus around the Y axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorusIntrinsics {
    pub mean_radius: f32,
    pub tube_radius: f32,
    pub outline_width: Option<f32>,
    pub shape: TorusShape,
    pub subdivision: TorusSubdivision,
}

impl Default for TorusIntrinsics {
    fn default() -> Self {
        Self {
            mean_radius: 1.0,
            tube_radius: 0.25,
            outline_width: None,
            shape: TorusShape::Volume,
            subdivision: TorusSubdivision::default(),
        }
    }
}

impl TorusIntrinsics {
    fn generate(&self, padding: f32) -> Submesh {
        let Self {
            mean_radius,
            tube_radius,
            subdivision,
            ..
        } = *self;
        match self.shape {
            TorusShape::Volume | TorusShape::PartialVolume(_) => {
                generate_torus(mean_radius, tube_radius, padding, self.shape.range(), subdivision)
            }
            TorusShape::PartialSurface(range) if padding == 0.0 => {
                generate_toric_surface(mean_radius, tube_radius, range, subdivision)
            }
            TorusShape::PartialSurface(range) => {
                generate_volumetric_toric_surface(mean_radius, tube_radius, padding, range, subdivision)
            }
        }
    }
}

// =============================================================================
// SHAPE INTRINSICS
// =============================================================================

/// Kind of a [`ShapeIntrinsics`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Plane,
    Sphere,
    Cylinder,
    Cone,
    Torus,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Plane => "plane",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Cone => "cone",
            ShapeKind::Torus => "torus",
        };
        f.write_str(name)
    }
}

/// Parameters of any supported shape.
///
/// # Example
///
/// ```rust
/// use shape_mesh::assembly::{CylinderIntrinsics, ShapeIntrinsics, ShapeKind};
///
/// let shape = ShapeIntrinsics::Cylinder(CylinderIntrinsics::default());
/// assert_eq!(shape.kind(), ShapeKind::Cylinder);
/// assert!(!shape.generate(0.0).is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeIntrinsics {
    Plane(PlaneIntrinsics),
    Sphere(SphereIntrinsics),
    Cylinder(CylinderIntrinsics),
    Cone(ConeIntrinsics),
    Torus(TorusIntrinsics),
}

impl ShapeIntrinsics {
    /// Kind of shape described.
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeIntrinsics::Plane(_) => ShapeKind::Plane,
            ShapeIntrinsics::Sphere(_) => ShapeKind::Sphere,
            ShapeIntrinsics::Cylinder(_) => ShapeKind::Cylinder,
            ShapeIntrinsics::Cone(_) => ShapeKind::Cone,
            ShapeIntrinsics::Torus(_) => ShapeKind::Torus,
        }
    }

    /// Outline halo width requested by the shape, if any.
    pub fn outline_width(&self) -> Option<f32> {
        match self {
            ShapeIntrinsics::Plane(plane) => plane.outline_width,
            ShapeIntrinsics::Sphere(sphere) => sphere.outline_width,
            ShapeIntrinsics::Cylinder(cylinder) => cylinder.outline_width,
            ShapeIntrinsics::Cone(cone) => cone.outline_width,
            ShapeIntrinsics::Torus(torus) => torus.outline_width,
        }
    }

    /// Same shape with its outline width replaced.
    pub fn with_outline_width(mut self, width: Option<f32>) -> Self {
        match &mut self {
            ShapeIntrinsics::Plane(plane) => plane.outline_width = width,
            ShapeIntrinsics::Sphere(sphere) => sphere.outline_width = width,
            ShapeIntrinsics::Cylinder(cylinder) => cylinder.outline_width = width,
            ShapeIntrinsics::Cone(cone) => cone.outline_width = width,
            ShapeIntrinsics::Torus(torus) => torus.outline_width = width,
        }
        self
    }

    /// Generates the shape offset by `padding` along its normals.
    ///
    /// Volume shapes grow or shrink as solids. Surface shapes give the open
    /// surface at zero padding and a closed thin shell otherwise.
    pub fn generate(&self, padding: f32) -> Submesh {
        match self {
            ShapeIntrinsics::Plane(plane) => plane.generate(padding),
            ShapeIntrinsics::Sphere(sphere) => generate_sphere(sphere.radius, padding, sphere.subdivision),
            ShapeIntrinsics::Cylinder(cylinder) => cylinder.generate(padding),
            ShapeIntrinsics::Cone(cone) => cone.generate(padding),
            ShapeIntrinsics::Torus(torus) => torus.generate(padding),
        }
    }
}

impl From<PlaneIntrinsics> for ShapeIntrinsics {
    fn from(value: PlaneIntrinsics) -> Self {
        ShapeIntrinsics::Plane(value)
    }
}

impl From<SphereIntrinsics> for ShapeIntrinsics {
    fn from(value: SphereIntrinsics) -> Self {
        ShapeIntrinsics::Sphere(value)
    }
}

impl From<CylinderIntrinsics> for ShapeIntrinsics {
    fn from(value: CylinderIntrinsics) -> Self {
        ShapeIntrinsics::Cylinder(value)
    }
}

impl From<ConeIntrinsics> for ShapeIntrinsics {
    fn from(value: ConeIntrinsics) -> Self {
        ShapeIntrinsics::Cone(value)
    }
}

impl From<TorusIntrinsics> for ShapeIntrinsics {
    fn from(value: TorusIntrinsics) -> Self {
        ShapeIntrinsics::Torus(value)
    }
}
