//! # Shape Mesh
//!
//! Procedural tessellation of analytic primitives into indexed triangle
//! meshes for real-time rendering.
//!
//! ## Architecture
//!
//! ```text
//! intrinsics → primitives (Submesh fragments) → assembly (four slots) → render (GPU buffers)
//! ```
//!
//! - **math**: angles, angular ranges and transform helpers
//! - **submesh**: the mesh fragment value and its algebra (`+`, inversion, transforms)
//! - **primitives**: plane, sphere, cylinder, cone and torus generators
//! - **assembly**: occlusion / wireframe / surface / outline representations
//! - **render**: interleaved buffers and slot materials
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::GlobalConfig;
//! use shape_mesh::assembly::{assemble, ConeIntrinsics, ShapeIntrinsics};
//! use shape_mesh::render::MaterialSet;
//!
//! let cone: ShapeIntrinsics = ConeIntrinsics::default().into();
//! let slots = assemble(&cone, &GlobalConfig::default());
//! let buffers = slots.to_buffers(&MaterialSet::for_kind(cone.kind())).unwrap();
//! assert_eq!(buffers.len(), 4);
//! ```

pub mod assembly;
pub mod error;
pub mod math;
pub mod params;
pub mod primitives;
pub mod render;
pub mod subdivision;
pub mod submesh;

pub use error::{MeshError, MeshResult};
pub use subdivision::{ConeSubdivision, CylinderSubdivision, SphereSubdivision, SphericalGrid, TorusSubdivision};
pub use submesh::{AtlasRegion, Submesh, Winding};
