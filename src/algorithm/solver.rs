//! Flow field analysis: all-cells-to-goal shortest path directions

use std::collections::VecDeque;

use ndarray::Array2;

use crate::io::error::{MazeError, Result};
use crate::spatial::{CellKind, Direction, Grid};

/// Sentinel distance for cells the traversal never reached
const UNREACHED: u32 = u32::MAX;

/// Compute the goal-directed flow field for a grid snapshot
///
/// A single breadth-first traversal seeded at the goal cell, expanding
/// through the four orthogonal neighbors in [`Direction::SCAN_ORDER`].
/// Walls block expansion; empty, actor, and goal cells are passable. The
/// first discovery of a cell wins, so equal-length routes resolve the same
/// way on every call and repeated analysis of an unmodified grid yields an
/// identical field.
///
/// The actor marker is cosmetic here: zero or several actors are tolerated,
/// only the goal anchors the traversal. The function is stateless — it
/// borrows the grid read-only and the result holds no reference to it, so
/// the caller may keep editing and re-analyze whenever it needs fresh
/// results.
///
/// # Errors
///
/// Returns [`MazeError::NoGoal`] when the grid holds no goal cell and
/// [`MazeError::AmbiguousGoal`] when it holds more than one.
pub fn analyze(grid: &Grid) -> Result<Analysis> {
    let goal = locate_goal(grid)?;
    let (rows, columns) = grid.shape();

    let mut directions = Array2::from_elem((rows, columns), Direction::None);
    let mut distances = Array2::from_elem((rows, columns), UNREACHED);

    if let Some(distance) = distances.get_mut(goal) {
        *distance = 0;
    }

    let mut queue = VecDeque::new();
    queue.push_back(goal);

    while let Some((row, column)) = queue.pop_front() {
        let Some(&current_distance) = distances.get((row, column)) else {
            continue;
        };
        let next_distance = current_distance + 1;

        for direction in Direction::SCAN_ORDER {
            let Some(neighbor) = direction.step(row, column, rows, columns) else {
                continue;
            };
            if !grid.get(neighbor.0, neighbor.1)?.is_passable() {
                continue;
            }

            let Some(distance) = distances.get_mut(neighbor) else {
                continue;
            };
            if *distance != UNREACHED {
                continue;
            }
            *distance = next_distance;

            if let Some(slot) = directions.get_mut(neighbor) {
                *slot = direction.opposite();
            }
            queue.push_back(neighbor);
        }
    }

    Ok(Analysis {
        directions,
        distances,
        goal,
    })
}

/// Find the single goal cell, rejecting grids mid-edit
fn locate_goal(grid: &Grid) -> Result<(usize, usize)> {
    let mut goals = grid.find(CellKind::Goal);
    let first = goals.next().ok_or(MazeError::NoGoal)?;

    match goals.next() {
        Some(second) => Err(MazeError::AmbiguousGoal { first, second }),
        None => Ok(first),
    }
}

/// Per-call analysis result: the direction field plus path queries
///
/// Produced fresh by [`analyze`]; logically derived data with the lifetime
/// of one analysis call, never cached across grid edits by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Analysis {
    directions: Array2<Direction>,
    distances: Array2<u32>,
    goal: (usize, usize),
}

impl Analysis {
    /// Direction toward the goal from `(row, column)`
    ///
    /// [`Direction::None`] for the goal cell itself, for walls, and for
    /// cells with no route to the goal.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] outside the analyzed extents.
    pub fn direction_at(&self, row: usize, column: usize) -> Result<Direction> {
        self.directions
            .get((row, column))
            .copied()
            .ok_or_else(|| self.out_of_bounds(row, column))
    }

    /// Ordered path from `(row, column)` to the goal
    ///
    /// Follows the direction field one step at a time, collecting each
    /// visited coordinate including the final goal and excluding the start.
    /// Empty when the start is the goal itself or has no route to it.
    /// Distances strictly decrease along the field, so the walk terminates.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] outside the analyzed extents.
    pub fn path_from(&self, row: usize, column: usize) -> Result<Vec<(usize, usize)>> {
        let (rows, columns) = self.shape();
        let mut path = Vec::new();
        let mut current = (row, column);
        let mut direction = self.direction_at(row, column)?;

        while direction != Direction::None {
            let Some(next) = direction.step(current.0, current.1, rows, columns) else {
                break;
            };
            path.push(next);
            if next == self.goal {
                break;
            }
            current = next;
            direction = self.direction_at(current.0, current.1)?;
        }

        Ok(path)
    }

    /// Breadth-first distance from `(row, column)` to the goal
    ///
    /// Zero at the goal itself, `None` when the cell has no route to it.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::OutOfBounds`] outside the analyzed extents.
    pub fn distance_at(&self, row: usize, column: usize) -> Result<Option<u32>> {
        self.distances
            .get((row, column))
            .map(|&distance| (distance != UNREACHED).then_some(distance))
            .ok_or_else(|| self.out_of_bounds(row, column))
    }

    /// Read-only view of the whole direction field
    pub const fn directions(&self) -> &Array2<Direction> {
        &self.directions
    }

    /// Position of the goal cell the field flows toward
    pub const fn goal(&self) -> (usize, usize) {
        self.goal
    }

    /// Analyzed extents as `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.directions.nrows(), self.directions.ncols())
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
