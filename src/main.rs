//! CLI entry point for the kolam design tool

use clap::Parser;
use kolam::io::cli::{Cli, DesignRunner};
use kolam::io::logging::init_tracing;

fn main() -> kolam::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet)?;
    let mut runner = DesignRunner::new(cli);
    runner.process()
}
