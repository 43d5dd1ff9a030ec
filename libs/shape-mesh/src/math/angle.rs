//! Angle value types used for partial arcs.

use std::f32::consts::TAU;
use std::ops::{Add, Mul, Neg, Sub};

use config::constants::{partial_segments, EPSILON_TOLERANCE, FULL_RING_SPREAD, FULL_TURN_DEGREES};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::{signed_angle, ANGLE_REFERENCE};

/// A planar angle stored in radians.
///
/// # Examples
/// ```
/// use shape_mesh::math::Angle;
///
/// let angle = Angle::from_degrees(450.0).normalized();
/// assert!((angle.degrees() - 90.0).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Angle {
    radians: f32,
}

impl Angle {
    /// Zero angle.
    pub const ZERO: Self = Self { radians: 0.0 };

    /// One full turn.
    pub const FULL: Self = Self { radians: TAU };

    /// Creates an angle from radians.
    pub const fn from_radians(radians: f32) -> Self {
        Self { radians }
    }

    /// Creates an angle from degrees.
    pub fn from_degrees(degrees: f32) -> Self {
        Self {
            radians: degrees.to_radians(),
        }
    }

    /// Value in radians.
    #[inline]
    pub fn radians(self) -> f32 {
        self.radians
    }

    /// Value in degrees.
    #[inline]
    pub fn degrees(self) -> f32 {
        self.radians.to_degrees()
    }

    /// Same direction wrapped into `[0°, 360°)`.
    pub fn normalized(self) -> Self {
        let degrees = self.degrees().rem_euclid(FULL_TURN_DEGREES);
        // rem_euclid may round up to exactly 360 for tiny negative inputs
        if degrees >= FULL_TURN_DEGREES {
            Self::ZERO
        } else {
            Self::from_degrees(degrees)
        }
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_radians(self.radians + rhs.radians)
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_radians(self.radians - rhs.radians)
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_radians(-self.radians)
    }
}

impl Mul<f32> for Angle {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::from_radians(self.radians * rhs)
    }
}

/// A contiguous angular sub-range: `extent` radians starting at `begin`.
///
/// Used for the tube arc of a partial torus and the radial coverage of
/// partial cylinders and cones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngularRange {
    /// Start of the range.
    pub begin: Angle,
    /// Signed length of the range, within `[0, 2π]` when valid.
    pub extent: Angle,
}

impl Default for AngularRange {
    fn default() -> Self {
        Self::FULL
    }
}

impl AngularRange {
    /// The whole turn starting at zero.
    pub const FULL: Self = Self {
        begin: Angle::ZERO,
        extent: Angle::FULL,
    };

    /// Creates a range from its start and extent.
    pub fn new(begin: Angle, extent: Angle) -> Self {
        Self { begin, extent }
    }

    /// End of the range.
    #[inline]
    pub fn end(&self) -> Angle {
        self.begin + self.extent
    }

    /// Whether the range closes on itself.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.extent.radians() >= TAU - EPSILON_TOLERANCE
    }

    /// Share of a full turn covered, in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        (self.extent.radians() / TAU).clamp(0.0, 1.0)
    }

    /// Grows the range by `delta` radians at both ends (shrinks when
    /// negative). Full ranges have no ends and are returned unchanged;
    /// a range grown past a full turn becomes full.
    pub fn expanded(&self, delta: f32) -> Self {
        if self.is_full() {
            return *self;
        }
        let extent = (self.extent.radians() + 2.0 * delta).clamp(0.0, TAU);
        Self {
            begin: Angle::from_radians(self.begin.radians() - delta),
            extent: Angle::from_radians(extent),
        }
    }

    /// Number of segments that keeps the density of `full_count` segments
    /// per full turn.
    ///
    /// # Examples
    /// ```
    /// use shape_mesh::math::{Angle, AngularRange};
    ///
    /// let half = AngularRange::new(Angle::ZERO, Angle::from_degrees(180.0));
    /// assert_eq!(half.segment_count(36), 18);
    /// assert_eq!(AngularRange::FULL.segment_count(36), 36);
    /// ```
    pub fn segment_count(&self, full_count: u32) -> u32 {
        if self.is_full() {
            full_count
        } else {
            partial_segments(full_count, self.fraction())
        }
    }

    /// Estimates the arc of a ring occupied by `points`.
    ///
    /// Points are projected onto the XZ plane around the Y axis. When the
    /// projected directions spread all around the ring the full range is
    /// returned; otherwise the range spans the extreme signed angles
    /// measured around the mean direction.
    pub fn from_ring_points(points: &[Vec3]) -> Self {
        let projected: Vec<Vec3> = points
            .iter()
            .map(|point| Vec3::new(point.x, 0.0, point.z).normalize_or_zero())
            .filter(|direction| *direction != Vec3::ZERO)
            .collect();
        if projected.is_empty() {
            return Self::FULL;
        }

        let mean = projected.iter().copied().sum::<Vec3>() / projected.len() as f32;
        if mean.length() < FULL_RING_SPREAD {
            return Self::FULL;
        }
        let mean = mean.normalize();
        let base = signed_angle(Vec3::X, mean, ANGLE_REFERENCE);

        let (min, max) = projected
            .iter()
            .map(|direction| signed_angle(mean, *direction, ANGLE_REFERENCE))
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), angle| {
                (lo.min(angle), hi.max(angle))
            });

        Self {
            begin: Angle::from_radians(base + min),
            extent: Angle::from_radians(max - min),
        }
    }
}
