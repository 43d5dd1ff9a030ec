//! Meridian profile of a (truncated) cone and its offsets.
//!
//! The side of a cone is the segment from the bottom corner `(rb, hb)` to
//! the top corner `(rt, ht)` in the (radius, height) half-plane. With the
//! slope `k = (rb - rt) / (ht - hb)`, `c = 1 / √(1 + k²)` and `s = k·c`:
//!
//! - `n = (c, s)` is the outward side normal
//! - `d = (-s, c)` runs along the side towards the top
//!
//! Offsetting, shelling and apex clamping all go through [`ConeProfile`],
//! so a padded cone whose top ring would pass through the axis is turned
//! into a true cone whose apex sits where the side line meets the axis.

use config::constants::EPSILON_TOLERANCE;
use glam::Vec2;

use crate::primitives::builder::ProfilePoint;

/// Top and bottom corners of a cone side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeProfile {
    /// Radius of the top ring; zero for an apex.
    pub top_radius: f32,
    /// Radius of the bottom ring.
    pub bottom_radius: f32,
    /// Height of the top ring.
    pub top_height: f32,
    /// Height of the bottom ring.
    pub bottom_height: f32,
}

impl ConeProfile {
    /// Cone of `length` centered on the origin.
    pub fn centered(top_radius: f32, bottom_radius: f32, length: f32) -> Self {
        Self {
            top_radius,
            bottom_radius,
            top_height: 0.5 * length,
            bottom_height: -0.5 * length,
        }
    }

    /// Top corner.
    #[inline]
    pub fn top(&self) -> ProfilePoint {
        ProfilePoint::new(self.top_radius, self.top_height)
    }

    /// Bottom corner.
    #[inline]
    pub fn bottom(&self) -> ProfilePoint {
        ProfilePoint::new(self.bottom_radius, self.bottom_height)
    }

    /// Distance between the two rings along the axis.
    #[inline]
    pub fn length(&self) -> f32 {
        self.top_height - self.bottom_height
    }

    /// Radius lost per unit of height; zero for a flat profile.
    pub fn slope(&self) -> f32 {
        let length = self.length();
        if length.abs() > EPSILON_TOLERANCE {
            (self.bottom_radius - self.top_radius) / length
        } else {
            0.0
        }
    }

    /// Outward unit normal `(c, s)` of the side.
    pub fn side_normal(&self) -> Vec2 {
        let c = 1.0 / (1.0 + self.slope().powi(2)).sqrt();
        Vec2::new(c, self.slope() * c)
    }

    /// Unit direction `(-s, c)` of the side, bottom to top.
    pub fn side_direction(&self) -> Vec2 {
        let n = self.side_normal();
        Vec2::new(-n.y, n.x)
    }

    /// Whether the top ring has collapsed onto the axis.
    #[inline]
    pub fn is_apex(&self) -> bool {
        self.top_radius <= EPSILON_TOLERANCE
    }

    /// Moves a top corner that crossed the axis back along the side line to
    /// the axis.
    ///
    /// A profile turned inside out (bottom radius negative or top below
    /// bottom) collapses onto the axis at its mid height.
    pub fn clamp_apex(self) -> Self {
        if self.bottom_radius <= 0.0 || self.length() < 0.0 {
            let middle = 0.5 * (self.top_height + self.bottom_height);
            return Self {
                top_radius: 0.0,
                bottom_radius: 0.0,
                top_height: middle,
                bottom_height: middle,
            };
        }
        if self.top_radius >= 0.0 {
            return self;
        }
        let (rt, rb) = (self.top_radius, self.bottom_radius);
        let apex_height = (rb * self.top_height - rt * self.bottom_height) / (rb - rt);
        Self {
            top_radius: 0.0,
            top_height: apex_height,
            ..self
        }
    }

    /// Solid grown by `padding` along every face normal: the side moves by
    /// `padding` along `n`, the top up and the bottom down by `padding`.
    ///
    /// An apex stays an apex, at the point where the moved side meets the
    /// axis.
    pub fn offset(&self, padding: f32) -> Self {
        let Vec2 { x: c, y: s } = self.side_normal();
        let bottom_height = self.bottom_height - padding;
        let bottom_radius = self.bottom_radius + padding * (1.0 + s) / c;

        let (top_radius, top_height) = if self.is_apex() && s > EPSILON_TOLERANCE {
            (0.0, self.bottom_height + (padding + c * self.bottom_radius) / s)
        } else {
            (self.top_radius + padding * (1.0 - s) / c, self.top_height + padding)
        };

        Self {
            top_radius,
            bottom_radius,
            top_height,
            bottom_height,
        }
        .clamp_apex()
    }

    /// Outer and inner walls of a shell of half-thickness `padding` around
    /// the side, each extended by `padding` past both rings.
    ///
    /// Returns `(outer, inner)`.
    pub fn shell(&self, padding: f32) -> (Self, Self) {
        let n = self.side_normal() * padding;
        let d = self.side_direction() * padding;
        let top = Vec2::new(self.top_radius, self.top_height);
        let bottom = Vec2::new(self.bottom_radius, self.bottom_height);
        let outer = Self::from_corners(top + n + d, bottom + n - d);
        let inner = Self::from_corners(top - n + d, bottom - n - d);
        (outer.clamp_apex(), inner.clamp_apex())
    }

    /// Side moved `inset` inwards along `n`, both rings pulled towards each
    /// other along the side.
    ///
    /// The rings move by `inset · (c + 2s) / c`, which is `inset` for a
    /// cylinder and leaves room for a [`shell`](Self::shell) of
    /// half-thickness `inset / 2` between the nominal ring planes.
    pub fn inset(&self, inset: f32) -> Self {
        let normal = self.side_normal();
        let pull = inset * (normal.x + 2.0 * normal.y) / normal.x;
        let n = normal * inset;
        let d = self.side_direction() * pull;
        let top = Vec2::new(self.top_radius, self.top_height);
        let bottom = Vec2::new(self.bottom_radius, self.bottom_height);
        Self::from_corners(top - n - d, bottom - n + d).clamp_apex()
    }

    fn from_corners(top: Vec2, bottom: Vec2) -> Self {
        Self {
            top_radius: top.x,
            bottom_radius: bottom.x,
            top_height: top.y,
            bottom_height: bottom.y,
        }
    }
}
