//! Error types for mesh construction and stepping.

use core::fmt;

/// Errors that can occur while building or stepping a mesh.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// Mesh needs at least one row and one column.
    InvalidDimension { rows: usize, cols: usize },
    /// Cell index lies outside the mesh.
    CellOutOfBounds { row: usize, col: usize, rows: usize, cols: usize },
    /// Point handle lies outside the arena.
    PointOutOfBounds { index: usize, count: usize },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidDimension { rows, cols } => {
                write!(f, "mesh must have at least 1x1 cells, got {}x{}", rows, cols)
            }
            PhysicsError::CellOutOfBounds { row, col, rows, cols } => {
                write!(f, "cell ({}, {}) out of bounds for {}x{} mesh", row, col, rows, cols)
            }
            PhysicsError::PointOutOfBounds { index, count } => {
                write!(f, "point index {} out of bounds (count: {})", index, count)
            }
        }
    }
}
