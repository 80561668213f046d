// Loose value coercions used by the field rules.
//
// Request bodies arrive from form-style clients that send numbers as strings
// ("18", "5 stars"), so the rules accept a leading numeric prefix the same
// way `parseFloat` / `parseInt` do in a browser.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static FLOAT_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?").expect("valid float regex")
});

/// Missing, `null`, `false`, `0` and `""` count as "not provided"
pub fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::Number(n)) => n.as_f64().map_or(false, |f| f == 0.0),
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Length in UTF-16 code units, which is what browser clients count
pub fn text_length(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Leading decimal number of `s`, ignoring leading whitespace and any trailing junk
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    if unsigned.starts_with("Infinity") {
        return Some(if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let m = FLOAT_PREFIX.find(s)?;
    m.as_str().parse::<f64>().ok()
}

/// Leading base-10 integer of `s`; "0x20" reads as 0
pub fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end].parse::<i64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Numeric reading of a JSON value, `parseFloat` style
pub fn float_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_float_prefix(s),
        _ => None,
    }
}

/// Integer reading of a JSON value, `parseInt` style
pub fn int_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < 1e21)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => parse_int_prefix(s),
        _ => None,
    }
}

/// Finite number with no fractional part
pub fn is_integral(f: f64) -> bool {
    f.is_finite() && f.fract() == 0.0
}
