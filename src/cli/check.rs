//! Check command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use super::utils::{load_document, parse_csv, DocumentArgs};
use crate::config::{OutputFormat, Settings};
use tagconf::Document;

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub doc: DocumentArgs,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct CheckSummary {
    pub sections: usize,
    pub keys: usize,
}

impl CheckSummary {
    pub fn of(document: &Document) -> Self {
        Self { sections: document.len(), keys: document.key_count() }
    }
}

pub fn run(args: CheckArgs, settings: Settings, format: Option<OutputFormat>) -> Result<()> {
    let settings = settings.with_cli(parse_csv(&args.doc.overrides), format);
    let document = load_document(&args.doc, &settings)?;

    println!("{}", render_summary(&CheckSummary::of(&document), settings.format)?);
    Ok(())
}

pub fn render_summary(summary: &CheckSummary, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => format!("OK: {} sections, {} keys", summary.sections, summary.keys),
        OutputFormat::Json => serde_json::to_string(summary)?,
    })
}
