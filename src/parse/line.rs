//! Line classification
//!
//! Rules are tried in a fixed order: blank, section header, assignment. A line
//! matching none of them is malformed.

use crate::error::{ConfigError, Result};

pub const ASSIGNMENT_OPERATOR: char = '=';

/// What a cleaned line turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Blank,
    /// `[name]`, carrying the bracketed name
    Section(&'a str),
    /// Contains `=`; decomposed later
    KeyValue(&'a str),
    Malformed(&'a str),
}

/// Classify a comment-stripped, trimmed line.
///
/// A bracketed name containing whitespace is rejected here even though the
/// line is otherwise a well-formed header.
pub fn classify(line: &str) -> Result<LineKind<'_>> {
    if line.is_empty() {
        return Ok(LineKind::Blank);
    }

    if let Some(name) = section_name(line) {
        if name.chars().any(char::is_whitespace) {
            return Err(ConfigError::WhitespaceInSectionName { name: name.to_string() });
        }
        return Ok(LineKind::Section(name));
    }

    if line.contains(ASSIGNMENT_OPERATOR) {
        return Ok(LineKind::KeyValue(line));
    }

    Ok(LineKind::Malformed(line))
}

/// Extract `name` from a line that is exactly `[name]`.
fn section_name(line: &str) -> Option<&str> {
    let name = line.strip_prefix('[')?.strip_suffix(']')?;
    if name.is_empty() || name.contains([']', '\n', '\r']) {
        return None;
    }
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank() {
        assert_eq!(classify("").unwrap(), LineKind::Blank);
    }

    #[test]
    fn test_section_header() {
        assert_eq!(classify("[common]").unwrap(), LineKind::Section("common"));
        assert_eq!(classify("[ftp.mirror-2]").unwrap(), LineKind::Section("ftp.mirror-2"));
    }

    #[test]
    fn test_section_with_whitespace_fails() {
        let err = classify("[my section]").unwrap_err();
        assert_eq!(err.to_string(), "Section name may not contain whitespace: my section");

        let err = classify("[\tname]").unwrap_err();
        assert!(matches!(err, ConfigError::WhitespaceInSectionName { .. }));
    }

    #[test]
    fn test_header_takes_precedence_over_assignment() {
        assert_eq!(classify("[a=b]").unwrap(), LineKind::Section("a=b"));
    }

    #[test]
    fn test_brackets_must_span_whole_line() {
        assert_eq!(classify("[a] = 1").unwrap(), LineKind::KeyValue("[a] = 1"));
        assert_eq!(classify("[a]b]").unwrap(), LineKind::Malformed("[a]b]"));
        assert_eq!(classify("[]").unwrap(), LineKind::Malformed("[]"));
        assert_eq!(classify("[open").unwrap(), LineKind::Malformed("[open"));
    }

    #[test]
    fn test_key_value() {
        assert_eq!(classify("size = 1").unwrap(), LineKind::KeyValue("size = 1"));
        assert_eq!(classify("=oops").unwrap(), LineKind::KeyValue("=oops"));
    }

    #[test]
    fn test_malformed() {
        assert_eq!(
            classify("this is not a config line").unwrap(),
            LineKind::Malformed("this is not a config line")
        );
    }
}
