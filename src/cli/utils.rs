//! Shared CLI utilities.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::settings::split_tags;
use crate::config::Settings;
use tagconf::Document;

/// Arguments every subcommand takes to locate and resolve a document.
#[derive(Args)]
pub struct DocumentArgs {
    /// Config file to load
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Active override tags (comma-separated); replaces configured overrides
    #[arg(short = 'o', long = "override", value_name = "TAGS")]
    pub overrides: Option<String>,
}

/// Parse a comma-separated string into a `Vec<String>`, trimming whitespace and
/// discarding empty segments.  Returns `None` when `value` is `None`.
pub fn parse_csv(value: &Option<String>) -> Option<Vec<String>> {
    value.as_deref().map(split_tags)
}

/// Load the document named by `args` using the effective override tags.
pub fn load_document(args: &DocumentArgs, settings: &Settings) -> Result<Document> {
    tracing::debug!(file = %args.file.display(), overrides = ?settings.overrides, "loading");
    tagconf::load(&args.file, &settings.overrides)
        .with_context(|| format!("Failed to load config: {}", args.file.display()))
}
