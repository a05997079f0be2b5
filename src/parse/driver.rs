//! Streaming parser driver
//!
//! Reads one line at a time and threads it through comment stripping,
//! classification, decomposition, coercion and override resolution.

use std::io::BufRead;

use crate::document::{Document, DocumentBuilder};
use crate::error::{ConfigError, Result};
use crate::parse::assignment::decompose;
use crate::parse::coerce::coerce;
use crate::parse::comment::strip_comment;
use crate::parse::line::{classify, LineKind};
use crate::parse::state::{ParseState, Resolution};

/// Owns everything a single load mutates.
pub struct Parser {
    state: ParseState,
    builder: DocumentBuilder,
    line_number: usize,
}

impl Parser {
    pub fn new<I>(overrides: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self { state: ParseState::new(overrides), builder: DocumentBuilder::new(), line_number: 0 }
    }

    /// Consume every line of `reader` and return the finished document.
    pub fn parse_reader<R: BufRead>(mut self, reader: R) -> Result<Document> {
        for line in reader.lines() {
            self.feed_line(&line?)?;
        }
        Ok(self.finish())
    }

    /// Process one raw line of input.
    pub fn feed_line(&mut self, raw: &str) -> Result<()> {
        self.line_number += 1;
        let cleaned = strip_comment(raw.trim());
        tracing::trace!(line = self.line_number, content = %cleaned, "config line");

        match classify(&cleaned)? {
            LineKind::Blank => Ok(()),
            LineKind::Section(name) => self.open_section(name),
            LineKind::KeyValue(line) => self.assign(line),
            LineKind::Malformed(line) => Err(ConfigError::MalformedLine { line: line.to_string() }),
        }
    }

    pub fn finish(self) -> Document {
        self.builder.finish()
    }

    fn open_section(&mut self, name: &str) -> Result<()> {
        self.builder.add_section(name)?;
        self.state.enter_section(name);
        tracing::debug!(line = self.line_number, section = name, "section declared");
        Ok(())
    }

    fn assign(&mut self, line: &str) -> Result<()> {
        let section = self
            .state
            .current_section()
            .ok_or(ConfigError::KeyValueOutsideSection)?
            .to_string();
        let assignment = decompose(line)?;

        match self.state.resolve(&section, assignment.key, assignment.tag) {
            Resolution::Apply => {
                self.builder.set(&section, assignment.key, coerce(assignment.value));
            }
            Resolution::ApplyOverride => {
                tracing::debug!(
                    line = self.line_number,
                    section = %section,
                    key = assignment.key,
                    tag = assignment.tag.unwrap_or_default(),
                    "override applied"
                );
                self.builder.set(&section, assignment.key, coerce(assignment.value));
            }
            Resolution::Discard => {
                tracing::trace!(
                    line = self.line_number,
                    section = %section,
                    key = assignment.key,
                    "assignment discarded"
                );
            }
        }
        Ok(())
    }
}
