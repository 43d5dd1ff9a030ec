//! Centralized configuration values shared by the shape mesh kernel.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Subdivision**: Default and minimum tessellation densities per shape
//! - **Padding**: Outline and occlusion offsets used by mesh assembly

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used by geometry kernels.
///
/// Mesh data is single precision, so this is far looser than a double
/// precision epsilon would be.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-3);
/// ```
pub const EPSILON_TOLERANCE: f32 = 1.0e-5;

/// Mean-direction length below which projected ring points are considered
/// to cover the full turn.
///
/// # Examples
/// ```
/// use config::constants::FULL_RING_SPREAD;
/// assert!(FULL_RING_SPREAD > 0.0 && FULL_RING_SPREAD < 1.0);
/// ```
pub const FULL_RING_SPREAD: f32 = 0.1;

/// Degrees in one full turn.
pub const FULL_TURN_DEGREES: f32 = 360.0;

// =============================================================================
// SUBDIVISION CONSTANTS
// =============================================================================

/// Smallest number of radial segments that still encloses an area.
///
/// # Examples
/// ```
/// use config::constants::MIN_RADIAL_SUBDIVISION;
/// assert_eq!(MIN_RADIAL_SUBDIVISION, 3);
/// ```
pub const MIN_RADIAL_SUBDIVISION: u32 = 3;

/// Smallest number of lateral (along-axis) segments.
pub const MIN_LATERAL_SUBDIVISION: u32 = 1;

/// Default radial segment count for cylinders and cones.
pub const DEFAULT_RADIAL_SUBDIVISION: u32 = 36;

/// Smallest number of polar rings of the spherical-coordinate sphere.
pub const MIN_SPHERE_POLAR_SUBDIVISION: u32 = 2;

/// Default lateral segment count for cylinders.
pub const DEFAULT_CYLINDER_LATERAL_SUBDIVISION: u32 = 3;

/// Default lateral segment count for cones.
pub const DEFAULT_CONE_LATERAL_SUBDIVISION: u32 = 2;

/// Default toroidal (around the main ring) segment count.
pub const DEFAULT_TOROIDAL_SUBDIVISION: u32 = 36;

/// Default poloidal (around the tube) segment count.
pub const DEFAULT_POLOIDAL_SUBDIVISION: u32 = 36;

/// Default polar ring count of the spherical-coordinate sphere.
pub const DEFAULT_SPHERE_POLAR_SUBDIVISION: u32 = 18;

/// Default azimuthal segment count of the spherical-coordinate sphere.
pub const DEFAULT_SPHERE_AZIMUTHAL_SUBDIVISION: u32 = 36;

/// Default recursion level of the octahedron-expansion sphere.
///
/// Level 1 is the bare octahedron; each further level splits every
/// triangle into four.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_OCTAHEDRON_LEVEL;
/// let triangles = 8 * 4u32.pow(DEFAULT_OCTAHEDRON_LEVEL - 1);
/// assert_eq!(triangles, 512);
/// ```
pub const DEFAULT_OCTAHEDRON_LEVEL: u32 = 4;

/// Deepest octahedron recursion accepted (2^19 triangles).
pub const MAX_OCTAHEDRON_LEVEL: u32 = 9;

/// Minimum segment count of a partial arc.
pub const PARTIAL_ARC_MIN_SEGMENTS: u32 = 1;

// =============================================================================
// PADDING CONSTANTS
// =============================================================================

/// Default outline halo width in scene units (meters).
pub const DEFAULT_OUTLINE_WIDTH: f32 = 0.005;

/// Default inset of the depth-only occlusion shell in scene units.
pub const DEFAULT_OCCLUSION_INSET: f32 = 0.0001;

/// Thickness of the slab used to render a plane as a volume.
pub const PLANE_VOLUME_THICKNESS: f32 = 0.002;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Computes the number of segments covering a fraction of a full turn.
///
/// Keeps the triangle density of a partial arc consistent with the full
/// shape: `round(full_count * fraction)`, never below
/// [`PARTIAL_ARC_MIN_SEGMENTS`]. Fractions at or above one use `full_count`.
///
/// # Examples
/// ```
/// use config::constants::partial_segments;
///
/// assert_eq!(partial_segments(36, 0.25), 9);
/// assert_eq!(partial_segments(36, 0.001), 1);
/// assert_eq!(partial_segments(36, 1.0), 36);
/// ```
pub fn partial_segments(full_count: u32, fraction: f32) -> u32 {
    if fraction >= 1.0 {
        return full_count.max(PARTIAL_ARC_MIN_SEGMENTS);
    }
    let segments = (full_count as f32 * fraction.max(0.0)).round() as u32;
    segments.max(PARTIAL_ARC_MIN_SEGMENTS)
}

/// Checks if two values are approximately equal within [`EPSILON_TOLERANCE`].
///
/// # Examples
/// ```
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-7));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON_TOLERANCE
}

/// Checks if a value is approximately zero within [`EPSILON_TOLERANCE`].
#[inline]
pub fn approx_zero(value: f32) -> bool {
    value.abs() < EPSILON_TOLERANCE
}

// =============================================================================
// GLOBAL CONFIGURATION
// =============================================================================

/// Immutable snapshot of configuration settings handed to mesh assembly.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.outline_width > config.occlusion_inset);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Default outline halo width for shapes that do not specify one.
    pub outline_width: f32,
    /// Inset applied to the depth-only occlusion shell.
    pub occlusion_inset: f32,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(0.01, 0.0002).expect("valid config");
    /// assert_eq!(cfg.outline_width, 0.01);
    /// ```
    pub fn new(outline_width: f32, occlusion_inset: f32) -> Result<Self, ConfigError> {
        if !(outline_width >= 0.0) {
            return Err(ConfigError::InvalidOutlineWidth(outline_width));
        }
        if !(occlusion_inset >= 0.0) {
            return Err(ConfigError::InvalidOcclusionInset(occlusion_inset));
        }
        Ok(Self {
            outline_width,
            occlusion_inset,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            outline_width: DEFAULT_OUTLINE_WIDTH,
            occlusion_inset: DEFAULT_OCCLUSION_INSET,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the outline width is negative or NaN.
    InvalidOutlineWidth(f32),
    /// Raised when the occlusion inset is negative or NaN.
    InvalidOcclusionInset(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidOutlineWidth(value) => {
                write!(f, "outline_width must be >= 0: {value}")
            }
            ConfigError::InvalidOcclusionInset(value) => {
                write!(f, "occlusion_inset must be >= 0: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
