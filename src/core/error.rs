//! Engine error types
//!
//! Only construction can fail. A valid grid never fails to step, and solver
//! non-convergence is an accepted approximation, not an error.

use thiserror::Error;

/// Result alias for fallible engine operations
pub type SimResult<T> = Result<T, SimError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Grid too small to hold a solid border ring around at least one fluid cell
    #[error("invalid grid dimensions {num_x}x{num_y} (each side needs at least 3 cells)")]
    InvalidDimensions { num_x: u32, num_y: u32 },

    #[error("invalid cell size {0} (must be finite and > 0)")]
    InvalidCellSize(f32),

    #[error("invalid timestep {0} (must be finite and > 0)")]
    InvalidTimestep(f32),

    #[error("solver iterations must be at least 1")]
    InvalidIterations,

    /// Raw field id from JS that names no field
    #[error("unknown grid field id {0}")]
    UnknownField(u8),

    #[error("config parse error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Config(err.to_string())
    }
}
