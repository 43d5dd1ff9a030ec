//! # Parameter Policy
//!
//! Geometric inputs outside their domain are caller bugs.
//!
//! - `check_*` functions are pure and report the violation
//! - `sanitize_*` functions panic on a violation in debug builds; release
//!   builds log a warning and continue with the nearest valid value
//!
//! Generators only ever call the `sanitize_*` side, so they never fail.

use std::f32::consts::TAU;

use config::constants::EPSILON_TOLERANCE;

use crate::error::{MeshError, MeshResult};
use crate::math::{Angle, AngularRange};

// =============================================================================
// CHECKS
// =============================================================================

/// Accepts finite values `>= 0`.
pub fn check_non_negative(name: &'static str, value: f32) -> MeshResult<f32> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(MeshError::invalid_parameter(name, value, "must be finite and >= 0"))
    }
}

/// Accepts any finite value.
pub fn check_finite(name: &'static str, value: f32) -> MeshResult<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(MeshError::invalid_parameter(name, value, "must be finite"))
    }
}

/// Accepts subdivision counts `>= minimum`.
pub fn check_subdivision(name: &'static str, value: u32, minimum: u32) -> MeshResult<u32> {
    if value >= minimum {
        Ok(value)
    } else {
        Err(MeshError::invalid_parameter(name, value as f32, "below minimum subdivision"))
    }
}

/// Accepts finite ranges whose extent lies in `[0, 2π]`.
pub fn check_range(range: AngularRange) -> MeshResult<AngularRange> {
    let begin = range.begin.radians();
    let extent = range.extent.radians();
    if !begin.is_finite() {
        return Err(MeshError::invalid_parameter("begin", begin, "must be finite"));
    }
    if !(0.0..=TAU + EPSILON_TOLERANCE).contains(&extent) {
        return Err(MeshError::invalid_parameter("extent", extent, "must lie in [0, 2π]"));
    }
    Ok(range)
}

// =============================================================================
// SANITIZERS
// =============================================================================

fn fail_fast<T>(error: MeshError, fallback: T) -> T {
    if cfg!(debug_assertions) {
        panic!("{error}");
    }
    log::warn!("{error}; continuing with the nearest valid value");
    fallback
}

/// Non-negative length or radius. NaN becomes 0, negatives clamp to 0.
pub fn sanitize_non_negative(name: &'static str, value: f32) -> f32 {
    check_non_negative(name, value).unwrap_or_else(|error| {
        let fallback = if value.is_nan() { 0.0 } else { value.clamp(0.0, f32::MAX) };
        fail_fast(error, fallback)
    })
}

/// Signed padding. Non-finite values become 0.
pub fn sanitize_padding(value: f32) -> f32 {
    check_finite("padding", value).unwrap_or_else(|error| fail_fast(error, 0.0))
}

/// Subdivision count raised to `minimum`.
pub fn sanitize_subdivision(name: &'static str, value: u32, minimum: u32) -> u32 {
    check_subdivision(name, value, minimum).unwrap_or_else(|error| fail_fast(error, minimum))
}

/// Angular range with its extent clamped into `[0, 2π]`.
///
/// A non-finite begin resets to zero; a NaN extent becomes the full turn.
pub fn sanitize_range(range: AngularRange) -> AngularRange {
    check_range(range).unwrap_or_else(|error| {
        let begin = if range.begin.radians().is_finite() {
            range.begin
        } else {
            Angle::ZERO
        };
        let extent = range.extent.radians();
        let extent = if extent.is_nan() { TAU } else { extent.clamp(0.0, TAU) };
        fail_fast(error, AngularRange::new(begin, Angle::from_radians(extent)))
    })
}

/// Cone radii: both non-negative and the top never wider than the bottom.
///
/// Returns `(top_radius, bottom_radius)`.
pub fn sanitize_cone_radii(top_radius: f32, bottom_radius: f32) -> (f32, f32) {
    let top_radius = sanitize_non_negative("top_radius", top_radius);
    let bottom_radius = sanitize_non_negative("bottom_radius", bottom_radius);
    if top_radius > bottom_radius + EPSILON_TOLERANCE {
        let error = MeshError::invalid_parameter("top_radius", top_radius, "must not exceed bottom_radius");
        return fail_fast(error, (bottom_radius, bottom_radius));
    }
    (top_radius.min(bottom_radius), bottom_radius)
}

// =============================================================================
// TESTS
// =============================================================================
