use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod dataset;

#[cfg(test)]
mod tests;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
