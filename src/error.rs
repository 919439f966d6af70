//! Error types for the grid index.

use thiserror::Error;

/// Grid index errors.
///
/// Only construction can fail. Once a [`SpatialGrid`](crate::SpatialGrid) exists,
/// every operation on it is total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GridError {
    /// A construction argument is out of range (e.g. a non-positive resolution).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
