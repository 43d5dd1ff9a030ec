//! # Mesh Errors
//!
//! Error types for parameter validation and render-buffer conversion.
//!
//! ## Error Policy
//!
//! - Generators never return errors: invalid parameters fail fast in debug
//!   builds and are clamped in release builds (see [`crate::params`])
//! - Conversion into render buffers validates the submesh and reports
//!   every violated invariant explicitly

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while validating parameters or mesh data.
///
/// ## Example
///
/// ```rust
/// use shape_mesh::{MeshError, Submesh};
/// use glam::Vec3;
///
/// let submesh = Submesh::new(vec![Vec3::ZERO], vec![], vec![], vec![0, 0, 1]);
/// match submesh.validate() {
///     Err(MeshError::IndexOutOfRange { index, .. }) => assert_eq!(index, 1),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    /// A geometric parameter is outside its domain.
    #[error("Invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name as it appears in the generator signature
        name: &'static str,
        /// Offending value
        value: f32,
        /// Human readable constraint
        reason: &'static str,
    },

    /// Per-vertex attribute arrays disagree in length.
    #[error("Attribute length mismatch: positions={positions}, normals={normals}, texcoords={texcoords}")]
    AttributeMismatch {
        /// Number of positions
        positions: usize,
        /// Number of normals
        normals: usize,
        /// Number of texture coordinates
        texcoords: usize,
    },

    /// The index buffer does not describe whole triangles.
    #[error("Index count {index_count} is not a multiple of 3")]
    IncompleteTriangle {
        /// Length of the index buffer
        index_count: usize,
    },

    /// A triangle references a vertex that does not exist.
    #[error("Index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        /// Offending index
        index: u32,
        /// Number of vertices in the submesh
        vertex_count: usize,
    },

    /// The renderer-side conversion rejected the data.
    #[error("Conversion failed: {message}")]
    Conversion {
        /// Description of the rejection
        message: String,
    },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, value: f32, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    /// Creates a conversion error.
    pub fn conversion(message: impl Into<String>) -> Self {
        Self::Conversion {
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let err = MeshError::invalid_parameter("radius", -1.0, "must be >= 0");
        assert!(err.to_string().contains("radius"));
        assert!(err.to_string().contains("must be >= 0"));

        let err = MeshError::IndexOutOfRange {
            index: 9,
            vertex_count: 4,
        };
        assert!(err.to_string().contains('9'));
    }

    /// Test error types are Send + Sync so meshes can be built off-thread.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
