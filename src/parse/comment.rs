//! Quote-aware comment stripping

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

pub const COMMENT_DELIMITER: char = ';';

/// Single- or double-quoted literal, shortest match, no escapes.
static QUOTED_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"'.*?'|".*?""#).expect("valid regex"));

/// Remove a trailing `;` comment from an already trimmed line.
///
/// Quoted literals are masked with spaces before searching, so a `;` inside
/// `'...'` or `"..."` is kept. The cut is applied to the original line.
pub fn strip_comment(line: &str) -> Cow<'_, str> {
    if !line.contains(COMMENT_DELIMITER) {
        return Cow::Borrowed(line);
    }

    // Masking preserves byte offsets, so positions map back onto `line`.
    let masked =
        QUOTED_LITERAL.replace_all(line, |caps: &regex::Captures| " ".repeat(caps[0].len()));

    match masked.find(COMMENT_DELIMITER) {
        None => Cow::Borrowed(line),
        Some(0) => Cow::Borrowed(""),
        Some(pos) => Cow::Borrowed(line[..pos].trim_end()),
    }
}
