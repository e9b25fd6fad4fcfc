//! Error types for grid editing and search requests.

use thiserror::Error;

use crate::common::Position;

/// Which endpoint an edit collided with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimension must be positive, got size {size} with cell size {cell_size}")]
    InvalidDimension { size: usize, cell_size: usize },

    #[error("position {position} is outside a {size}x{size} grid")]
    OutOfBounds { position: Position, size: usize },

    #[error("position {position} already holds the {occupied:?} endpoint")]
    Conflict { position: Position, occupied: Endpoint },

    #[error("invalid search request: {0}")]
    InvalidRequest(String),
}

pub type Result<T> = std::result::Result<T, GridError>;
