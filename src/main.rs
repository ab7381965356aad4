//! CLI entry point for dual-solution puzzle generation

use clap::Parser;
use dualtile::io::cli::{Cli, PuzzleProcessor};

fn main() -> dualtile::Result<()> {
    let cli = Cli::parse();
    let mut processor = PuzzleProcessor::new(cli);
    processor.process().map(|_| ())
}
