//! CLI entry point for the tile puzzle solver

use clap::Parser;
use tilefit::io::cli::{Cli, PuzzleRunner};

fn main() -> tilefit::Result<()> {
    let cli = Cli::parse();
    let runner = PuzzleRunner::new(cli);
    runner.run()
}
