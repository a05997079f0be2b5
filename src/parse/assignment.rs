//! Key-value decomposition
//!
//! Splits `key[<tag>] = value` into its parts. Values are left raw; coercion
//! happens separately.

use crate::error::{ConfigError, Result};
use crate::parse::line::ASSIGNMENT_OPERATOR;

const TAG_OPEN: char = '<';
const TAG_CLOSE: char = '>';

/// The parts of one assignment line, borrowed from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment<'a> {
    pub key: &'a str,
    pub value: &'a str,
    pub tag: Option<&'a str>,
}

/// Decompose an assignment line, splitting at the first `=`.
///
/// Errors carry the full original line.
pub fn decompose(line: &str) -> Result<Assignment<'_>> {
    let invalid = || ConfigError::InvalidKey { line: line.to_string() };

    let (left, right) = line.split_once(ASSIGNMENT_OPERATOR).ok_or_else(invalid)?;
    let left = left.trim();
    let value = right.trim();

    let (key, tag) = match left.find(TAG_OPEN) {
        Some(open) => {
            let inner = left[open + TAG_OPEN.len_utf8()..]
                .strip_suffix(TAG_CLOSE)
                .ok_or_else(invalid)?;
            (left[..open].trim(), Some(inner.trim()))
        }
        None if left.ends_with(TAG_CLOSE) => return Err(invalid()),
        None => (left, None),
    };

    if key.is_empty() || tag.is_some_and(str::is_empty) {
        return Err(invalid());
    }

    Ok(Assignment { key, value, tag })
}
