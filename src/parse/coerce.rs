//! Type coercion for raw values
//!
//! Checks run in order and the first match wins: quoted string, boolean
//! literal, number, comma-separated list, plain string. Coercion is pure.

use crate::document::Value;

pub const LIST_DELIMITER: char = ',';

const TRUE_LITERALS: [&str; 3] = ["1", "true", "yes"];
const FALSE_LITERALS: [&str; 3] = ["0", "false", "no"];

/// Coerce a trimmed raw value.
pub fn coerce(raw: &str) -> Value {
    if let Some(inner) = unquote(raw) {
        return Value::String(inner.to_string());
    }

    if let Some(flag) = parse_boolean(raw) {
        return Value::Boolean(flag);
    }

    if let Some(number) = parse_number(raw) {
        return number;
    }

    if raw.contains(LIST_DELIMITER) {
        return Value::List(raw.split(LIST_DELIMITER).map(|part| coerce(part.trim())).collect());
    }

    Value::String(raw.to_string())
}

/// Interior of a value wrapped in matching single or double quotes.
fn unquote(raw: &str) -> Option<&str> {
    ['\'', '"']
        .into_iter()
        .find_map(|quote| raw.strip_prefix(quote)?.strip_suffix(quote))
}

fn parse_boolean(raw: &str) -> Option<bool> {
    if TRUE_LITERALS.iter().any(|lit| raw.eq_ignore_ascii_case(lit)) {
        Some(true)
    } else if FALSE_LITERALS.iter().any(|lit| raw.eq_ignore_ascii_case(lit)) {
        Some(false)
    } else {
        None
    }
}

/// Parse a real number, narrowing integral values to `Integer`.
///
/// Only plain decimal notation counts: `inf`, `nan` and friends are strings.
fn parse_number(raw: &str) -> Option<Value> {
    let looks_numeric = raw.bytes().any(|b| b.is_ascii_digit())
        && raw
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !looks_numeric {
        return None;
    }

    if let Ok(int) = raw.parse::<i64>() {
        return Some(Value::Integer(int));
    }

    let float = raw.parse::<f64>().ok().filter(|f| f.is_finite())?;
    if float.fract() == 0.0 && float >= i64::MIN as f64 && float < i64::MAX as f64 {
        Some(Value::Integer(float as i64))
    } else {
        Some(Value::Float(float))
    }
}
