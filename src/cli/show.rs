//! Show command implementation

use anyhow::Result;
use clap::Args;

use super::utils::{load_document, parse_csv, DocumentArgs};
use crate::config::{OutputFormat, Settings};
use tagconf::Document;

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub doc: DocumentArgs,
}

pub fn run(args: ShowArgs, settings: Settings, format: Option<OutputFormat>) -> Result<()> {
    let settings = settings.with_cli(parse_csv(&args.doc.overrides), format);
    let document = load_document(&args.doc, &settings)?;

    match settings.format {
        OutputFormat::Text => print!("{}", render_text(&document)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&document)?),
    }
    Ok(())
}

/// One `[section]` block per section, entries as `key = value (type)`.
pub fn render_text(document: &Document) -> String {
    let mut out = String::new();
    for (idx, section) in document.sections().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        out.push_str(&format!("[{}]\n", section.name()));
        for (key, value) in section.iter() {
            out.push_str(&format!("{} = {} ({})\n", key, value, value.type_name()));
        }
    }
    out
}
