//! Get command implementation

use anyhow::Result;
use clap::Args;

use super::utils::{load_document, parse_csv, DocumentArgs};
use crate::config::{OutputFormat, Settings};
use tagconf::Value;

#[derive(Args)]
pub struct GetArgs {
    #[command(flatten)]
    pub doc: DocumentArgs,

    /// Value to print, as SECTION.KEY
    #[arg(value_name = "SECTION.KEY")]
    pub path: String,
}

pub fn run(args: GetArgs, settings: Settings, format: Option<OutputFormat>) -> Result<()> {
    let settings = settings.with_cli(parse_csv(&args.doc.overrides), format);
    let document = load_document(&args.doc, &settings)?;

    let Some(value) = document.lookup(&args.path) else {
        anyhow::bail!("No value for {}", args.path);
    };
    println!("{}", render_value(value, settings.format)?);
    Ok(())
}

pub fn render_value(value: &Value, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => value.to_string(),
        OutputFormat::Json => serde_json::to_string(value)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_value_formats() {
        let value = Value::List(vec![Value::from("a"), Value::Integer(1)]);
        assert_eq!(render_value(&value, OutputFormat::Text).unwrap(), "a, 1");
        assert_eq!(render_value(&value, OutputFormat::Json).unwrap(), r#"["a",1]"#);
    }
}
