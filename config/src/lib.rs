//! # Config Crate
//!
//! Centralized configuration constants for the shape mesh kernel.
//! Every tessellation default, minimum subdivision count, and tolerance used
//! by the generators is defined here so that the kernel and its callers agree
//! on one set of numbers.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON_TOLERANCE, MIN_RADIAL_SUBDIVISION, GlobalConfig};
//!
//! let value: f32 = 1e-7;
//! assert!(value.abs() < EPSILON_TOLERANCE);
//!
//! let requested = 2;
//! assert_eq!(requested.max(MIN_RADIAL_SUBDIVISION), 3);
//!
//! let cfg = GlobalConfig::default();
//! assert!(cfg.occlusion_inset < cfg.outline_width);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Renderer-Agnostic**: No platform or GPU specific values
//! - **Explicit**: Configuration is passed by value, never read from globals

pub mod constants;

#[cfg(test)]
mod tests;
