//! Cell classification for maze grids

/// Category of a single grid cell
///
/// A closed enumeration so that wall, goal, and actor tests are
/// type-distinguished and match exhaustively.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Open floor, passable and paintable
    #[default]
    Empty,
    /// Impassable wall
    Wall,
    /// The single target cell that paths lead to
    Goal,
    /// Marker for the maze's current position of interest
    Actor,
}

impl CellKind {
    /// Whether a traversal may enter this cell
    ///
    /// Only walls block movement; the goal and actor markers sit on floor.
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }

    /// Single-character glyph used by the text renderer
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Wall => '#',
            Self::Goal => 'G',
            Self::Actor => '@',
        }
    }
}
