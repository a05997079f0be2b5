//! Loading documents from files, readers and strings

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

use crate::document::Document;
use crate::error::{ConfigError, Result};
use crate::parse::Parser;

/// Load a config file, resolving entries tagged with any of `overrides`.
///
/// The file is streamed line by line. Each call keeps its own parse state, so
/// loads may run concurrently.
///
/// ```no_run
/// let doc = tagconf::load("settings.conf", ["production"])?;
/// let path = doc.lookup("common.path");
/// # Ok::<(), tagconf::ConfigError>(())
/// ```
pub fn load<P, I>(path: P, overrides: I) -> Result<Document>
where
    P: AsRef<Path>,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let path = path.as_ref();
    if path.as_os_str().is_empty() || !path.is_file() {
        return Err(ConfigError::InvalidFilePath { path: path.display().to_string() });
    }

    tracing::debug!(path = %path.display(), "loading config");
    let file = File::open(path)?;
    load_reader(BufReader::new(file), overrides)
}

/// Load from any buffered reader.
pub fn load_reader<R, I>(reader: R, overrides: I) -> Result<Document>
where
    R: BufRead,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Parser::new(overrides).parse_reader(reader)
}

/// Load from in-memory text.
pub fn load_str<I>(text: &str, overrides: I) -> Result<Document>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    load_reader(Cursor::new(text), overrides)
}
