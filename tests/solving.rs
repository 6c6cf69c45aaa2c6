//! Validates flow field analysis: directions, paths, tie-breaking, and the
//! solver's handling of grids mid-edit

use mazefield::MazeError;
use mazefield::algorithm::{Analysis, analyze};
use mazefield::spatial::{CellKind, Direction, Grid};

/// Build a grid from glyph rows: `#` wall, `G` goal, `@` actor, else empty
fn grid_from_rows(rows: &[&str]) -> Grid {
    let height = rows.len();
    let width = rows.first().map_or(0, |row| row.len());

    let mut grid = match Grid::new(height, width) {
        Ok(grid) => grid,
        Err(error) => unreachable!("fixture dimensions rejected: {error}"),
    };

    for (row, line) in rows.iter().enumerate() {
        for (column, glyph) in line.chars().enumerate() {
            let kind = match glyph {
                '#' => CellKind::Wall,
                'G' => CellKind::Goal,
                '@' => CellKind::Actor,
                _ => CellKind::Empty,
            };
            if grid.set(row, column, kind).is_err() {
                unreachable!("fixture cell ({row}, {column}) lies outside the grid");
            }
        }
    }

    grid
}

fn analyzed(rows: &[&str]) -> Analysis {
    match analyze(&grid_from_rows(rows)) {
        Ok(analysis) => analysis,
        Err(error) => unreachable!("fixture failed analysis: {error}"),
    }
}

#[test]
fn test_two_cell_boundary_scenario() {
    let analysis = analyzed(&["@G"]);

    assert_eq!(analysis.direction_at(0, 0).ok(), Some(Direction::Right));
    assert_eq!(analysis.path_from(0, 0).ok(), Some(vec![(0, 1)]));
}

#[test]
fn test_goal_cell_has_no_direction_and_empty_path() {
    let analysis = analyzed(&["@G"]);

    assert_eq!(analysis.goal(), (0, 1));
    assert_eq!(analysis.direction_at(0, 1).ok(), Some(Direction::None));
    assert_eq!(analysis.path_from(0, 1).ok(), Some(vec![]));
    assert_eq!(analysis.distance_at(0, 1).ok(), Some(Some(0)));
}

#[test]
fn test_walled_off_cells_are_unreachable() {
    let analysis = analyzed(&[
        "G#.",
        "##.",
        "...",
    ]);

    for (row, column) in [(0, 2), (1, 2), (2, 0), (2, 1), (2, 2)] {
        assert_eq!(
            analysis.direction_at(row, column).ok(),
            Some(Direction::None),
            "cell ({row}, {column}) should be unreachable"
        );
        assert_eq!(analysis.path_from(row, column).ok(), Some(vec![]));
        assert_eq!(analysis.distance_at(row, column).ok(), Some(None));
    }
}

#[test]
fn test_walls_never_point_anywhere() {
    let analysis = analyzed(&[
        "G#.",
        "...",
    ]);

    assert_eq!(analysis.direction_at(0, 1).ok(), Some(Direction::None));
    assert_eq!(analysis.path_from(0, 1).ok(), Some(vec![]));
}

#[test]
fn test_paths_step_orthogonally_to_the_goal() {
    let grid = grid_from_rows(&[
        "@.#G",
        ".#..",
        "....",
    ]);
    let analysis = match analyze(&grid) {
        Ok(analysis) => analysis,
        Err(error) => unreachable!("fixture failed analysis: {error}"),
    };

    let (rows, columns) = grid.shape();
    for row in 0..rows {
        for column in 0..columns {
            if grid.get(row, column).ok() == Some(CellKind::Wall) {
                continue;
            }
            if (row, column) == analysis.goal() {
                continue;
            }

            let path = analysis.path_from(row, column).unwrap_or_default();
            assert_eq!(
                path.last().copied(),
                Some(analysis.goal()),
                "path from ({row}, {column}) must end at the goal"
            );

            let mut previous = (row, column);
            for &(next_row, next_column) in &path {
                let stride = previous.0.abs_diff(next_row) + previous.1.abs_diff(next_column);
                assert_eq!(stride, 1, "non-orthogonal step in path");
                previous = (next_row, next_column);
            }

            let expected_length = analysis.distance_at(row, column).ok().flatten();
            assert_eq!(expected_length, Some(path.len() as u32));
        }
    }
}

#[test]
fn test_repeated_analysis_is_identical() {
    let grid = grid_from_rows(&[
        "..#..",
        ".#G#.",
        ".....",
    ]);

    let first = match analyze(&grid) {
        Ok(analysis) => analysis,
        Err(error) => unreachable!("fixture failed analysis: {error}"),
    };
    let second = match analyze(&grid) {
        Ok(analysis) => analysis,
        Err(error) => unreachable!("fixture failed analysis: {error}"),
    };

    assert_eq!(first, second);
    assert_eq!(first.directions(), second.directions());
}

#[test]
fn test_equal_routes_tie_break_in_scan_order() {
    let analysis = analyzed(&[
        "G.",
        "..",
    ]);

    // (1, 1) is two steps away both through (1, 0) and through (0, 1); the
    // goal expands Down before Right, so (1, 0) is discovered first and
    // (1, 1) points Left toward it.
    assert_eq!(analysis.direction_at(1, 1).ok(), Some(Direction::Left));
    assert_eq!(analysis.direction_at(1, 0).ok(), Some(Direction::Up));
    assert_eq!(analysis.direction_at(0, 1).ok(), Some(Direction::Left));
    assert_eq!(
        analysis.path_from(1, 1).ok(),
        Some(vec![(1, 0), (0, 0)])
    );
}

#[test]
fn test_missing_goal_is_rejected() {
    let grid = grid_from_rows(&["@.."]);

    assert_eq!(analyze(&grid).err(), Some(MazeError::NoGoal));
}

#[test]
fn test_duplicate_goal_is_rejected() {
    let grid = grid_from_rows(&["G.G"]);

    match analyze(&grid) {
        Err(MazeError::AmbiguousGoal { first, second }) => {
            assert_eq!(first, (0, 0));
            assert_eq!(second, (0, 2));
        }
        other => unreachable!("expected AmbiguousGoal, got {other:?}"),
    }
}

#[test]
fn test_actor_markers_are_cosmetic_to_the_solver() {
    // No actor at all
    let without = grid_from_rows(&["G.."]);
    assert!(analyze(&without).is_ok());

    // Several actors, all treated as passable floor
    let crowded = analyzed(&["G@@"]);
    assert_eq!(crowded.direction_at(0, 2).ok(), Some(Direction::Left));
    assert_eq!(
        crowded.path_from(0, 2).ok(),
        Some(vec![(0, 1), (0, 0)])
    );
}

#[test]
fn test_queries_past_extents_are_out_of_bounds() {
    let analysis = analyzed(&["@G"]);

    assert!(matches!(
        analysis.direction_at(1, 0),
        Err(MazeError::OutOfBounds { .. })
    ));
    assert!(matches!(
        analysis.path_from(0, 2),
        Err(MazeError::OutOfBounds { .. })
    ));
    assert!(matches!(
        analysis.distance_at(2, 2),
        Err(MazeError::OutOfBounds { .. })
    ));
}

#[test]
fn test_analysis_reports_the_grid_shape() {
    let analysis = analyzed(&[
        "G..",
        "...",
    ]);

    assert_eq!(analysis.shape(), (2, 3));
}
