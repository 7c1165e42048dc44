//! Earth Mover's Distance Binary
//!
//! Computes the EMD between two histograms, or between two raw sample
//! collections, with inputs given as JSON arrays.
//!
//! Commands: distance, samples
mod command;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = command::Cli::parse();
    emd::core::log(cli.verbose);
    cli.command.run()
}
