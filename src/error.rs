//! Error types for the pathfinding engine.

use crate::grid::Cell;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The search exhausted the reachable component without meeting its destination.
    #[error("no path from {origin} to {destination}")]
    NoPathFound { origin: Cell, destination: Cell },

    /// `next_step` was asked about a cell the last search did not record.
    #[error("no direction recorded for {cell}")]
    NoPathRecorded { cell: Cell },

    #[error("cell {cell} is outside the {width}x{height} grid")]
    OutOfBounds {
        cell: Cell,
        width: usize,
        height: usize,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PathError>;
