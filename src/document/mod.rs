//! Loaded config documents
//!
//! A [`Document`] maps section names to [`Section`]s, each of which maps keys to
//! typed [`Value`]s. Both keep insertion order. Documents are only assembled by
//! the parser and are read-only once a load returns.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

use crate::error::{ConfigError, Result};

pub mod value;

pub use value::Value;

/// A named group of key/value entries.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    name: String,
    entries: IndexMap<String, Value>,
}

impl Section {
    fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), entries: IndexMap::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a key. Undefined keys yield `None` rather than an error.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in the order their keys were first assigned.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

/// The result of a successful load.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document {
    sections: IndexMap<String, Section>,
}

impl Document {
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Sections in declaration order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Look up `key` in `section`.
    pub fn get(&self, section: &str, key: &str) -> Option<&Value> {
        self.section(section)?.get(key)
    }

    /// Dotted lookup: `"database.host"` reads key `host` of section `database`.
    ///
    /// Splits at the first `.`, so keys may themselves contain dots. A path with
    /// no `.` never matches.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let (section, key) = path.split_once('.')?;
        self.get(section, key)
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of keys across all sections.
    pub fn key_count(&self) -> usize {
        self.sections.values().map(Section::len).sum()
    }
}

/// Incrementally assembles a [`Document`] during a single parse.
#[derive(Debug, Default)]
pub(crate) struct DocumentBuilder {
    sections: IndexMap<String, Section>,
}

impl DocumentBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Register an empty section. Redeclaring a name is an error, never a merge.
    pub(crate) fn add_section(&mut self, name: &str) -> Result<()> {
        if self.sections.contains_key(name) {
            return Err(ConfigError::DuplicateSection { name: name.to_string() });
        }
        self.sections.insert(name.to_string(), Section::new(name));
        Ok(())
    }

    /// Store `value` under `key`, replacing any earlier value.
    ///
    /// The section must already be registered; the driver guarantees it.
    pub(crate) fn set(&mut self, section: &str, key: &str, value: Value) {
        if let Some(target) = self.sections.get_mut(section) {
            target.entries.insert(key.to_string(), value);
        }
    }

    pub(crate) fn finish(self) -> Document {
        Document { sections: self.sections }
    }
}
