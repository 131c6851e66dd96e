//! CLI entry point for snapping block layouts onto their grid

use clap::Parser;
use gridsnap::io::cli::{Cli, FileProcessor};

fn main() -> gridsnap::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let mut processor = FileProcessor::new(cli);
    processor.process()?;
    Ok(())
}
