//! Error types for maze engine operations

use std::fmt;

/// Main error type for all maze engine operations
///
/// Every failure is reported synchronously as part of the call's result and
/// none is fatal: a caller recovers by correcting the edit or requesting a
/// fresh grid. There are no internal retries — the operations are
/// deterministic, so a retry without changed input reproduces the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    /// Coordinate lies outside the grid extents
    OutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        column: usize,
        /// Grid height in rows
        rows: usize,
        /// Grid width in columns
        columns: usize,
    },

    /// Requested dimensions cannot hold a valid maze
    InvalidDimensions {
        /// Requested width in columns
        columns: usize,
        /// Requested height in rows
        rows: usize,
        /// Explanation of why the dimensions are invalid
        reason: &'static str,
    },

    /// Grid handed to the solver contains no goal cell
    ///
    /// Occurs when an edit painted over the goal; only the goal anchors the
    /// traversal, so there is nothing to analyze.
    NoGoal,

    /// Grid handed to the solver contains more than one goal cell
    AmbiguousGoal {
        /// First goal encountered in row-major order
        first: (usize, usize),
        /// Second goal encountered in row-major order
        second: (usize, usize),
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                row,
                column,
                rows,
                columns,
            } => {
                write!(
                    f,
                    "Coordinate ({row}, {column}) is out of bounds for a {rows}x{columns} grid"
                )
            }
            Self::InvalidDimensions {
                columns,
                rows,
                reason,
            } => {
                write!(f, "Invalid dimensions {columns}x{rows}: {reason}")
            }
            Self::NoGoal => {
                write!(f, "Grid contains no goal cell")
            }
            Self::AmbiguousGoal { first, second } => {
                write!(
                    f,
                    "Grid contains more than one goal cell (first at {first:?}, next at {second:?})"
                )
            }
        }
    }
}

impl std::error::Error for MazeError {}

/// Convenience type alias for maze engine results
pub type Result<T> = std::result::Result<T, MazeError>;
