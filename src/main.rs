//! CLI entry point for maze generation and flow field inspection

use clap::Parser;
use mazefield::io::cli::{Cli, run};

fn main() -> mazefield::Result<()> {
    let cli = Cli::parse();
    run(&cli)
}
