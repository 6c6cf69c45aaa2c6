//! Bounds-checked cell matrix shared by the generator, solver, and callers

use ndarray::Array2;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{MazeError, Result};
use crate::spatial::cell::CellKind;

/// Rectangular maze layout: a `rows × columns` matrix of [`CellKind`]
///
/// Construction initializes every cell to [`CellKind::Empty`]. All access is
/// bounds-checked; out-of-range coordinates surface
/// [`MazeError::OutOfBounds`] instead of wrapping or clamping. The grid never
/// resizes in place — a new size means a new `Grid`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<CellKind>,
}

impl Grid {
    /// Create an all-empty grid
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidDimensions`] when either extent is zero
    /// or exceeds [`MAX_GRID_DIMENSION`].
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(MazeError::InvalidDimensions {
                columns,
                rows,
                reason: "both extents must be at least one cell",
            });
        }

        if rows > MAX_GRID_DIMENSION || columns > MAX_GRID_DIMENSION {
            return Err(MazeError::InvalidDimensions {
                columns,
                rows,
                reason: "extent exceeds the maximum grid dimension",
            });
        }

        Ok(Self {
            cells: Array2::from_elem((rows, columns), CellKind::Empty),
        })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid extents as `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.columns())
    }

    /// Whether `(row, column)` lies inside the grid
    pub fn contains(&self, row: usize, column: usize) -> bool {
        row < self.rows() && column < self.columns()
    }

    /// Read the cell at `(row, column)`
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] outside `[0, rows) × [0, columns)`.
    pub fn get(&self, row: usize, column: usize) -> Result<CellKind> {
        self.cells
            .get((row, column))
            .copied()
            .ok_or_else(|| self.out_of_bounds(row, column))
    }

    /// Overwrite the cell at `(row, column)`
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] outside `[0, rows) × [0, columns)`.
    pub fn set(&mut self, row: usize, column: usize, kind: CellKind) -> Result<()> {
        let (rows, columns) = self.shape();
        match self.cells.get_mut((row, column)) {
            Some(cell) => {
                *cell = kind;
                Ok(())
            }
            None => Err(MazeError::OutOfBounds {
                row,
                column,
                rows,
                columns,
            }),
        }
    }

    /// Row-major iterator over the positions holding `kind`
    pub fn find(&self, kind: CellKind) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .indexed_iter()
            .filter(move |&(_, &cell)| cell == kind)
            .map(|(position, _)| position)
    }

    /// Read-only view of the underlying cell matrix
    pub const fn cells(&self) -> &Array2<CellKind> {
        &self.cells
    }

    fn out_of_bounds(&self, row: usize, column: usize) -> MazeError {
        let (rows, columns) = self.shape();
        MazeError::OutOfBounds {
            row,
            column,
            rows,
            columns,
        }
    }
}
