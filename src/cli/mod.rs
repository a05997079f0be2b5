//! Command-line interface for tagconf
//!
//! Provides `show`, `get` and `check` subcommands over a single config file.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{load_settings, OutputFormat};

mod check;
mod get;
mod show;
mod utils;

/// Load sectioned config files with typed values and override tags
#[derive(Parser)]
#[command(name = "tagconf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file (defaults to ./tagconf.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_name = "FORMAT")]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every section and key of the resolved document
    Show(show::ShowArgs),

    /// Print a single value addressed as SECTION.KEY
    Get(get::GetArgs),

    /// Validate a config file and summarize it
    Check(check::CheckArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let work_dir = std::env::current_dir().context("Failed to read working directory")?;
    let settings = load_settings(&work_dir, cli.settings.as_deref())?;
    tracing::debug!(?settings, "settings resolved");

    match cli.command {
        Commands::Show(args) => show::run(args, settings, cli.format),
        Commands::Get(args) => get::run(args, settings, cli.format),
        Commands::Check(args) => check::run(args, settings, cli.format),
    }
}
