//! Movement directions and the fixed neighbor scan order

/// One step of movement on the grid, or the absence of one
///
/// `None` marks the goal cell itself and cells with no route to the goal,
/// so a direction field is total over its grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward row zero
    Up,
    /// Toward the last row
    Down,
    /// Toward column zero
    Left,
    /// Toward the last column
    Right,
    /// No movement: the goal itself, a wall, or an unreachable cell
    None,
}

impl Direction {
    /// Fixed neighbor visitation order applied by every traversal
    ///
    /// Equal-length routes tie-break by this order, so identical grids
    /// always yield identical fields.
    pub const SCAN_ORDER: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The reverse movement
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::None => Self::None,
        }
    }

    /// Apply one step from `(row, column)` within a `rows × columns` grid
    ///
    /// Returns `None` when the step would leave the grid, and always for
    /// [`Direction::None`].
    pub const fn step(
        self,
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    ) -> Option<(usize, usize)> {
        match self {
            Self::Up => match row.checked_sub(1) {
                Some(above) => Some((above, column)),
                None => None,
            },
            Self::Down => {
                if row + 1 < rows {
                    Some((row + 1, column))
                } else {
                    None
                }
            }
            Self::Left => match column.checked_sub(1) {
                Some(before) => Some((row, before)),
                None => None,
            },
            Self::Right => {
                if column + 1 < columns {
                    Some((row, column + 1))
                } else {
                    None
                }
            }
            Self::None => None,
        }
    }

    /// Arrow glyph for overlay rendering (space for [`Direction::None`])
    pub const fn glyph(self) -> char {
        match self {
            Self::Up => '^',
            Self::Down => 'v',
            Self::Left => '<',
            Self::Right => '>',
            Self::None => ' ',
        }
    }
}
