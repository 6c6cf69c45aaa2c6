//! Plain-text rendering of grids and direction overlays

use crate::algorithm::solver::Analysis;
use crate::spatial::{CellKind, Direction, Grid};

/// Render a grid as one glyph per cell, rows separated by newlines
pub fn render_grid(grid: &Grid) -> String {
    render_cells(grid, |_, kind| kind.glyph())
}

/// Render a grid with the flow field overlaid on its empty cells
///
/// Reachable empty cells show their arrow glyph; unreachable empties and
/// every other kind keep their cell glyph.
pub fn render_with_directions(grid: &Grid, analysis: &Analysis) -> String {
    render_cells(grid, |position, kind| {
        if kind == CellKind::Empty {
            analysis
                .directions()
                .get(position)
                .map_or(kind.glyph(), |&direction| match direction {
                    Direction::None => kind.glyph(),
                    arrow => arrow.glyph(),
                })
        } else {
            kind.glyph()
        }
    })
}

fn render_cells(
    grid: &Grid,
    mut glyph: impl FnMut((usize, usize), CellKind) -> char,
) -> String {
    let (rows, columns) = grid.shape();
    let mut rendered = String::with_capacity(rows * (columns + 1));

    for ((row, column), &kind) in grid.cells().indexed_iter() {
        rendered.push(glyph((row, column), kind));
        if column + 1 == columns {
            rendered.push('\n');
        }
    }

    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::analyze;

    fn corridor() -> Grid {
        let mut grid = match Grid::new(1, 3) {
            Ok(grid) => grid,
            Err(error) => unreachable!("valid dimensions rejected: {error}"),
        };
        if grid.set(0, 0, CellKind::Actor).is_err() || grid.set(0, 2, CellKind::Goal).is_err() {
            unreachable!("cells lie inside the grid");
        }
        grid
    }

    #[test]
    fn test_render_grid_uses_cell_glyphs() {
        assert_eq!(render_grid(&corridor()), "@.G\n");
    }

    #[test]
    fn test_render_with_directions_overlays_arrows() {
        let grid = corridor();
        let analysis = match analyze(&grid) {
            Ok(analysis) => analysis,
            Err(error) => unreachable!("corridor grid is valid: {error}"),
        };

        assert_eq!(render_with_directions(&grid, &analysis), "@>G\n");
    }
}
