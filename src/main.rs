//! tagconf: inspect sectioned config files from the command line
//!
//! Loads a config file with the library, resolving override tags from flags,
//! the environment or a settings file, and prints the result.

use anyhow::Result;

mod cli;
mod config;

fn main() -> Result<()> {
    cli::run()
}
