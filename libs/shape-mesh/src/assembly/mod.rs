//! # Mesh Assembly
//!
//! Builds the four representations a displayed shape keeps up to date:
//!
//! | Slot      | Geometry                                   |
//! |-----------|--------------------------------------------|
//! | occlusion | inset by the configured occlusion inset     |
//! | wireframe | nominal                                    |
//! | surface   | nominal                                    |
//! | outline   | outset by the outline width, inside out    |
//!
//! Updates are pure: [`ShapeIntrinsics::updated`] returns the new value and
//! the class of [`Change`], and [`ShapeModel`] regenerates only what the
//! change requires.
//!
//! ## Example
//!
//! ```rust
//! use config::constants::GlobalConfig;
//! use shape_mesh::assembly::{Change, ShapeModel, SphereIntrinsics};
//!
//! let mut model = ShapeModel::new(SphereIntrinsics::default().into(), GlobalConfig::default());
//! let change = model.update(|shape| *shape = shape.with_outline_width(Some(0.02)));
//! assert_eq!(change, Change::OutlineOnly);
//! ```

mod intrinsics;

pub use intrinsics::{
    BodyShape, ConeIntrinsics, CylinderIntrinsics, PlaneIntrinsics, ShapeIntrinsics, ShapeKind, SphereIntrinsics,
    TorusIntrinsics, TorusShape,
};

use config::constants::GlobalConfig;

use crate::submesh::Submesh;

// =============================================================================
// REPRESENTATIONS
// =============================================================================

/// Geometry of every render slot of one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Representations {
    /// Depth-only shell slightly inside the shape.
    pub occlusion: Submesh,
    /// Nominal geometry drawn as lines.
    pub wireframe: Submesh,
    /// Nominal geometry drawn as a translucent fill.
    pub surface: Submesh,
    /// Inside-out shell slightly outside the shape.
    pub outline: Submesh,
}

/// Generates all representations of `intrinsics`.
pub fn assemble(intrinsics: &ShapeIntrinsics, config: &GlobalConfig) -> Representations {
    let body = intrinsics.generate(0.0);
    Representations {
        occlusion: intrinsics.generate(-config.occlusion_inset),
        wireframe: body.clone(),
        surface: body,
        outline: outline_shell(intrinsics, config),
    }
}

fn outline_shell(intrinsics: &ShapeIntrinsics, config: &GlobalConfig) -> Submesh {
    let width = intrinsics.outline_width().unwrap_or(config.outline_width);
    intrinsics.generate(width).inverted()
}

// =============================================================================
// CHANGE TRACKING
// =============================================================================

/// What an update changed about a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Change {
    /// Nothing; no geometry needs regenerating.
    Unchanged,
    /// Only the outline width; the outline slot needs regenerating.
    OutlineOnly,
    /// Anything else; every slot needs regenerating.
    Geometry,
}

impl Change {
    /// Classifies the difference from `old` to `new`.
    pub fn between(old: &ShapeIntrinsics, new: &ShapeIntrinsics) -> Self {
        if old == new {
            Change::Unchanged
        } else if old.with_outline_width(None) == new.with_outline_width(None) {
            Change::OutlineOnly
        } else {
            Change::Geometry
        }
    }
}

impl ShapeIntrinsics {
    /// Copy of `self` edited by `edit`, with the class of the edit.
    pub fn updated(&self, edit: impl FnOnce(&mut ShapeIntrinsics)) -> (ShapeIntrinsics, Change) {
        let mut next = *self;
        edit(&mut next);
        let change = Change::between(self, &next);
        (next, change)
    }
}

// =============================================================================
// SHAPE MODEL
// =============================================================================

/// A shape together with its current representations.
#[derive(Debug, Clone)]
pub struct ShapeModel {
    intrinsics: ShapeIntrinsics,
    config: GlobalConfig,
    representations: Representations,
}

impl ShapeModel {
    /// Creates a model and generates its representations.
    pub fn new(intrinsics: ShapeIntrinsics, config: GlobalConfig) -> Self {
        let representations = assemble(&intrinsics, &config);
        Self {
            intrinsics,
            config,
            representations,
        }
    }

    /// Current shape parameters.
    #[inline]
    pub fn intrinsics(&self) -> &ShapeIntrinsics {
        &self.intrinsics
    }

    /// Configuration the representations were generated with.
    #[inline]
    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// Geometry of all four slots.
    #[inline]
    pub fn representations(&self) -> &Representations {
        &self.representations
    }

    /// Edits the intrinsics and regenerates the affected slots.
    pub fn update(&mut self, edit: impl FnOnce(&mut ShapeIntrinsics)) -> Change {
        let (next, change) = self.intrinsics.updated(edit);
        self.apply(next, change);
        change
    }

    /// Replaces the intrinsics and regenerates the affected slots.
    pub fn replace(&mut self, intrinsics: ShapeIntrinsics) -> Change {
        let change = Change::between(&self.intrinsics, &intrinsics);
        self.apply(intrinsics, change);
        change
    }

    fn apply(&mut self, intrinsics: ShapeIntrinsics, change: Change) {
        self.intrinsics = intrinsics;
        match change {
            Change::Unchanged => return,
            Change::OutlineOnly => {
                self.representations.outline = outline_shell(&self.intrinsics, &self.config);
            }
            Change::Geometry => {
                self.representations = assemble(&self.intrinsics, &self.config);
            }
        }
        log::debug!("regenerated {} ({:?})", self.intrinsics.kind(), change);
    }
}

#[cfg(test)]
mod tests;
