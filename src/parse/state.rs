//! Per-load parse state and override resolution
//!
//! A [`ParseState`] is created for each load and dropped when it ends. It is
//! never shared between loads.

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// An override tag identifier, compared case-sensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverrideTag(String);

impl OverrideTag {
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self(tag.as_ref().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for OverrideTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for OverrideTag {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OverrideTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What to do with a freshly parsed assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Plain assignment on a key no override has claimed
    Apply,
    /// Active override; replaces whatever is stored and locks the key
    ApplyOverride,
    /// Inactive override, or plain assignment to a locked key
    Discard,
}

/// Mutable bookkeeping threaded through one load.
#[derive(Debug)]
pub struct ParseState {
    active: HashSet<OverrideTag>,
    current_section: Option<String>,
    /// section -> keys already set by a matching override
    satisfied: HashMap<String, HashSet<String>>,
}

impl ParseState {
    pub fn new<I>(overrides: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self {
            active: overrides.into_iter().map(OverrideTag::new).collect(),
            current_section: None,
            satisfied: HashMap::new(),
        }
    }

    pub fn current_section(&self) -> Option<&str> {
        self.current_section.as_deref()
    }

    pub fn enter_section(&mut self, name: &str) {
        self.current_section = Some(name.to_string());
    }

    pub fn is_active(&self, tag: &str) -> bool {
        self.active.contains(tag)
    }

    /// Decide the fate of an assignment and record any override that fires.
    ///
    /// A matching override always wins and blocks later plain assignments to
    /// the same key; a later matching override still replaces it.
    pub fn resolve(&mut self, section: &str, key: &str, tag: Option<&str>) -> Resolution {
        match tag {
            None if self.is_satisfied(section, key) => Resolution::Discard,
            None => Resolution::Apply,
            Some(tag) if self.is_active(tag) => {
                self.satisfied.entry(section.to_string()).or_default().insert(key.to_string());
                Resolution::ApplyOverride
            }
            Some(_) => Resolution::Discard,
        }
    }

    fn is_satisfied(&self, section: &str, key: &str) -> bool {
        self.satisfied.get(section).is_some_and(|keys| keys.contains(key))
    }
}
