//! # Subdivision Descriptors
//!
//! Small value types sizing the tessellation of each primitive. Counts below
//! the per-axis minimum are rejected by the generators (see
//! [`crate::params`]), not by the descriptors themselves.

use config::constants::{
    DEFAULT_CONE_LATERAL_SUBDIVISION, DEFAULT_CYLINDER_LATERAL_SUBDIVISION, DEFAULT_OCTAHEDRON_LEVEL,
    DEFAULT_POLOIDAL_SUBDIVISION, DEFAULT_RADIAL_SUBDIVISION, DEFAULT_SPHERE_AZIMUTHAL_SUBDIVISION,
    DEFAULT_SPHERE_POLAR_SUBDIVISION, DEFAULT_TOROIDAL_SUBDIVISION,
};
use serde::{Deserialize, Serialize};

// =============================================================================
// CYLINDER / CONE
// =============================================================================

/// Radial (around the axis) and lateral (along the axis) segment counts of
/// a cylinder.
///
/// # Example
///
/// ```rust
/// use shape_mesh::CylinderSubdivision;
///
/// let subdivision = CylinderSubdivision::radial(12);
/// assert_eq!(subdivision.radial, 12);
/// assert_eq!(subdivision.lateral, CylinderSubdivision::default().lateral);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CylinderSubdivision {
    /// Segments around the axis.
    pub radial: u32,
    /// Segments along the axis.
    pub lateral: u32,
}

impl Default for CylinderSubdivision {
    fn default() -> Self {
        Self::both(DEFAULT_RADIAL_SUBDIVISION, DEFAULT_CYLINDER_LATERAL_SUBDIVISION)
    }
}

impl CylinderSubdivision {
    /// Both counts.
    pub const fn both(radial: u32, lateral: u32) -> Self {
        Self { radial, lateral }
    }

    /// Radial count with the default lateral count.
    pub const fn radial(radial: u32) -> Self {
        Self::both(radial, DEFAULT_CYLINDER_LATERAL_SUBDIVISION)
    }

    /// Lateral count with the default radial count.
    pub const fn lateral(lateral: u32) -> Self {
        Self::both(DEFAULT_RADIAL_SUBDIVISION, lateral)
    }
}

/// Radial and lateral segment counts of a cone.
///
/// Cones default to fewer lateral rings than cylinders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConeSubdivision {
    /// Segments around the axis.
    pub radial: u32,
    /// Segments along the slanted side.
    pub lateral: u32,
}

impl Default for ConeSubdivision {
    fn default() -> Self {
        Self::both(DEFAULT_RADIAL_SUBDIVISION, DEFAULT_CONE_LATERAL_SUBDIVISION)
    }
}

impl ConeSubdivision {
    /// Both counts.
    pub const fn both(radial: u32, lateral: u32) -> Self {
        Self { radial, lateral }
    }

    /// Radial count with the default lateral count.
    pub const fn radial(radial: u32) -> Self {
        Self::both(radial, DEFAULT_CONE_LATERAL_SUBDIVISION)
    }

    /// Lateral count with the default radial count.
    pub const fn lateral(lateral: u32) -> Self {
        Self::both(DEFAULT_RADIAL_SUBDIVISION, lateral)
    }
}

impl From<ConeSubdivision> for CylinderSubdivision {
    fn from(subdivision: ConeSubdivision) -> Self {
        Self::both(subdivision.radial, subdivision.lateral)
    }
}

// =============================================================================
// TORUS
// =============================================================================

/// Toroidal (around the main ring) and poloidal (around the tube) segment
/// counts of a torus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TorusSubdivision {
    /// Segments around the main ring for a full turn.
    pub toroidal: u32,
    /// Segments around the tube.
    pub poloidal: u32,
}

impl Default for TorusSubdivision {
    fn default() -> Self {
        Self::both(DEFAULT_TOROIDAL_SUBDIVISION, DEFAULT_POLOIDAL_SUBDIVISION)
    }
}

impl TorusSubdivision {
    /// Both counts.
    pub const fn both(toroidal: u32, poloidal: u32) -> Self {
        Self { toroidal, poloidal }
    }

    /// Toroidal count with the default poloidal count.
    pub const fn toroidal(toroidal: u32) -> Self {
        Self::both(toroidal, DEFAULT_POLOIDAL_SUBDIVISION)
    }

    /// Poloidal count with the default toroidal count.
    pub const fn poloidal(poloidal: u32) -> Self {
        Self::both(DEFAULT_TOROIDAL_SUBDIVISION, poloidal)
    }
}

// =============================================================================
// SPHERE
// =============================================================================

/// Ring counts of a spherical-coordinate sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SphericalGrid {
    /// Rings from pole to pole.
    pub polar: u32,
    /// Segments around the Y axis.
    pub azimuthal: u32,
}

impl Default for SphericalGrid {
    fn default() -> Self {
        Self::both(DEFAULT_SPHERE_POLAR_SUBDIVISION, DEFAULT_SPHERE_AZIMUTHAL_SUBDIVISION)
    }
}

impl SphericalGrid {
    /// Both counts.
    pub const fn both(polar: u32, azimuthal: u32) -> Self {
        Self { polar, azimuthal }
    }

    /// Polar count with the default azimuthal count.
    pub const fn polar(polar: u32) -> Self {
        Self::both(polar, DEFAULT_SPHERE_AZIMUTHAL_SUBDIVISION)
    }

    /// Azimuthal count with the default polar count.
    pub const fn azimuthal(azimuthal: u32) -> Self {
        Self::both(DEFAULT_SPHERE_POLAR_SUBDIVISION, azimuthal)
    }
}

/// Tessellation strategy of a sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SphereSubdivision {
    /// Latitude/longitude grid.
    SphericalCoordinates(SphericalGrid),
    /// Octahedron whose faces are split in four `level - 1` times.
    RecursiveSubdivision {
        /// Recursion level, 1 being the bare octahedron.
        level: u32,
    },
}

impl Default for SphereSubdivision {
    fn default() -> Self {
        Self::SphericalCoordinates(SphericalGrid::default())
    }
}

impl SphereSubdivision {
    /// Octahedron expansion at the default level.
    pub const fn recursive() -> Self {
        Self::RecursiveSubdivision {
            level: DEFAULT_OCTAHEDRON_LEVEL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_constructors_keep_other_default() {
        assert_eq!(CylinderSubdivision::radial(4), CylinderSubdivision::both(4, 3));
        assert_eq!(CylinderSubdivision::lateral(5), CylinderSubdivision::both(36, 5));
        assert_eq!(ConeSubdivision::radial(4), ConeSubdivision::both(4, 2));
        assert_eq!(TorusSubdivision::poloidal(8), TorusSubdivision::both(36, 8));
        assert_eq!(SphericalGrid::azimuthal(12), SphericalGrid::both(18, 12));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ConeSubdivision::default().lateral, 2);
        assert_eq!(CylinderSubdivision::default().lateral, 3);
        assert_eq!(
            SphereSubdivision::default(),
            SphereSubdivision::SphericalCoordinates(SphericalGrid::both(18, 36))
        );
        assert_eq!(
            SphereSubdivision::recursive(),
            SphereSubdivision::RecursiveSubdivision { level: 4 }
        );
    }

    #[test]
    fn test_cone_converts_to_cylinder() {
        let cylinder: CylinderSubdivision = ConeSubdivision::both(7, 9).into();
        assert_eq!(cylinder, CylinderSubdivision::both(7, 9));
    }
}
