//! Command-line surface for generating and inspecting mazes

use clap::Parser;

use crate::algorithm::{Generator, analyze};
use crate::io::configuration::{DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_SEED};
use crate::io::error::Result;
use crate::io::render::{render_grid, render_with_directions};
use crate::spatial::CellKind;

#[derive(Parser)]
#[command(name = "mazefield")]
#[command(
    author,
    version,
    about = "Generate solvable mazes and their goal-directed flow fields"
)]
/// Command-line arguments for the maze inspection tool
pub struct Cli {
    /// Maze width in columns
    #[arg(short, long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: usize,

    /// Maze height in rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Overlay flow field arrows on the empty cells
    #[arg(short, long)]
    pub arrows: bool,

    /// Print the actor's path to the goal as coordinates
    #[arg(short, long)]
    pub path: bool,
}

/// Generate a maze per the CLI arguments and print the requested views
///
/// # Errors
///
/// Returns an error if generation fails for the requested dimensions.
// Printing is this surface's entire purpose
#[allow(clippy::print_stdout)]
pub fn run(cli: &Cli) -> Result<()> {
    let mut generator = Generator::from_seed(cli.seed);
    let grid = generator.generate(cli.columns, cli.rows)?;

    if !cli.arrows && !cli.path {
        print!("{}", render_grid(&grid));
        return Ok(());
    }

    let analysis = analyze(&grid)?;

    if cli.arrows {
        print!("{}", render_with_directions(&grid, &analysis));
    } else {
        print!("{}", render_grid(&grid));
    }

    if cli.path {
        if let Some((row, column)) = grid.find(CellKind::Actor).next() {
            let path = analysis.path_from(row, column)?;
            println!("path: {path:?}");
        }
    }

    Ok(())
}
