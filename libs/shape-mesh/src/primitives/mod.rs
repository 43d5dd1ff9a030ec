//! # Primitive Generators
//!
//! One generator family per analytic shape. Each family offers up to three
//! variants:
//!
//! - **volume**: closed solid (body plus caps)
//! - **surface**: open, infinitely thin shell
//! - **volumetric surface**: closed thin-walled shell around a surface, used
//!   for the occlusion and outline representations
//!
//! Generators are pure functions of their parameters. Numeric inputs go
//! through [`crate::params`], so invalid values panic in debug builds and
//! are clamped in release builds.
//!
//! ## Example
//!
//! ```rust
//! use shape_mesh::primitives::generate_cylinder;
//! use shape_mesh::{math::AngularRange, CylinderSubdivision};
//!
//! let mesh = generate_cylinder(1.0, 2.0, 0.0, AngularRange::FULL, CylinderSubdivision::both(4, 1));
//! assert_eq!(mesh.triangle_count(), 16);
//! ```

pub mod builder;
pub mod cone;
pub mod cylinder;
pub mod plane;
pub mod sphere;
pub mod torus;

pub use cone::{generate_cone, generate_conical_surface, generate_volumetric_conical_surface, ConeProfile};
pub use cylinder::{generate_cylinder, generate_cylindrical_surface, generate_volumetric_cylindrical_surface};
pub use plane::{
    generate_cube, generate_plane_box, generate_plane_surface, generate_plane_volume, generate_volumetric_plane,
};
pub use sphere::generate_sphere;
pub use torus::{generate_toric_surface, generate_torus, generate_volumetric_toric_surface};
