//! # Mesh Errors
//!
//! Error types for mesh generation operations.

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Builder or faulting argument outside its domain
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Triangle references a vertex that does not exist
    #[error("Invalid topology: {message}")]
    InvalidTopology { message: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// Too many triangles
    #[error("Too many triangles: {count} (max: {max})")]
    TooManyTriangles { count: usize, max: usize },

    /// Index does not fit the requested index buffer width
    #[error("Index {index} exceeds index buffer limit {max}")]
    IndexOverflow { index: u32, max: u32 },

    /// Rejected generation config
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }
}
