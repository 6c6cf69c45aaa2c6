//! Maze construction by randomized depth-first carving

use bitvec::bitvec;
use bitvec::vec::BitVec;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::io::error::{MazeError, Result};
use crate::spatial::{CellKind, Direction, Grid};

/// Seeded maze generator
///
/// Owns its random source so that a given seed and set of dimensions always
/// reproduce the same maze.
#[derive(Debug)]
pub struct Generator {
    rng: StdRng,
}

impl Generator {
    /// Create a generator with a fixed seed for reproducible mazes
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from the operating system
    ///
    /// # Panics
    ///
    /// Panics if the operating system's randomness source fails.
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Generate a maze of the requested extents
    ///
    /// Carves a spanning corridor tree so the empty cells form a single
    /// connected component, then marks the carve origin with
    /// [`CellKind::Actor`] and the deepest carved cell with
    /// [`CellKind::Goal`]. Every empty cell has a route to the goal.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidDimensions`] when either extent is zero
    /// or above the maximum grid dimension, or when the grid holds fewer
    /// than two cells and so cannot place distinct goal and actor markers.
    pub fn generate(&mut self, columns: usize, rows: usize) -> Result<Grid> {
        let mut grid = Grid::new(rows, columns)?;

        if rows * columns < 2 {
            return Err(MazeError::InvalidDimensions {
                columns,
                rows,
                reason: "a maze needs at least two cells to hold a goal and an actor",
            });
        }

        for row in 0..rows {
            for column in 0..columns {
                grid.set(row, column, CellKind::Wall)?;
            }
        }

        let (origin, deepest) = self.carve(&mut grid)?;

        grid.set(origin.0, origin.1, CellKind::Actor)?;

        if deepest == origin {
            // Single-room lattice: open one neighboring wall for the goal.
            let goal =
                Self::adjacent_cell(&grid, origin).ok_or(MazeError::InvalidDimensions {
                    columns,
                    rows,
                    reason: "no cell available next to the actor for the goal",
                })?;
            grid.set(goal.0, goal.1, CellKind::Goal)?;
        } else {
            grid.set(deepest.0, deepest.1, CellKind::Goal)?;
        }

        Ok(grid)
    }

    /// Depth-first carve over the even-coordinate room lattice
    ///
    /// Rooms sit two cells apart; opening a room also opens the wall cell
    /// between it and its predecessor, which keeps the carved set a tree.
    /// Returns the carve origin and the cell reached at maximum depth.
    fn carve(&mut self, grid: &mut Grid) -> Result<((usize, usize), (usize, usize))> {
        let (rows, columns) = grid.shape();
        let origin = (0, 0);

        let mut visited: BitVec = bitvec![0; rows * columns];
        visited.set(0, true);
        grid.set(origin.0, origin.1, CellKind::Empty)?;

        let mut stack = vec![origin];
        let mut deepest = origin;
        let mut max_depth = stack.len();

        while let Some(&current) = stack.last() {
            let candidates = Self::carve_candidates(current, rows, columns, &visited);

            if candidates.is_empty() {
                stack.pop();
                continue;
            }

            let pick = self.rng.random_range(0..candidates.len());
            let Some(&(wall, room)) = candidates.get(pick) else {
                continue;
            };

            grid.set(wall.0, wall.1, CellKind::Empty)?;
            grid.set(room.0, room.1, CellKind::Empty)?;
            visited.set(room.0 * columns + room.1, true);

            stack.push(room);
            if stack.len() > max_depth {
                max_depth = stack.len();
                deepest = room;
            }
        }

        Ok((origin, deepest))
    }

    /// Unvisited rooms two cells from `current`, paired with the wall
    /// cell between
    ///
    /// Candidates are gathered in [`Direction::SCAN_ORDER`] so the same
    /// seed always sees the same choice set.
    fn carve_candidates(
        current: (usize, usize),
        rows: usize,
        columns: usize,
        visited: &BitVec,
    ) -> Vec<((usize, usize), (usize, usize))> {
        let mut candidates = Vec::with_capacity(4);

        for direction in Direction::SCAN_ORDER {
            let Some(wall) = direction.step(current.0, current.1, rows, columns) else {
                continue;
            };
            let Some(room) = direction.step(wall.0, wall.1, rows, columns) else {
                continue;
            };

            if visited.get(room.0 * columns + room.1).as_deref() == Some(&false) {
                candidates.push((wall, room));
            }
        }

        candidates
    }

    /// First in-bounds orthogonal neighbor of `cell` in scan order
    fn adjacent_cell(grid: &Grid, cell: (usize, usize)) -> Option<(usize, usize)> {
        let (rows, columns) = grid.shape();
        Direction::SCAN_ORDER
            .iter()
            .find_map(|direction| direction.step(cell.0, cell.1, rows, columns))
    }
}
