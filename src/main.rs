//! CLI entry point for the needlepoint chart conversion tool

use clap::Parser;
use stitchgrid::io::cli::{Cli, FileProcessor};

fn main() -> stitchgrid::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
