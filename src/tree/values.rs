//! Lenient conversions of label text.
//!
//! Each conversion reads the longest numeric prefix after optional leading
//! whitespace and falls back to zero when there is none.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref INTEGER_PREFIX: Regex = Regex::new(r"^[ \t\n\r\x0B\x0C]*([+-]?[0-9]+)").unwrap();
    static ref FLOAT_PREFIX: Regex = Regex::new(
        r"^[ \t\n\r\x0B\x0C]*([+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)"
    )
    .unwrap();
}

/// Integer value of the leading digits of `text`, saturating at the `i32` range.
pub fn integer_prefix(text: &str) -> i32 {
    let digits = match INTEGER_PREFIX.captures(text).and_then(|captures| captures.get(1)) {
        Some(digits) => digits.as_str(),
        None => return 0,
    };

    match digits.parse::<i32>() {
        Ok(value) => value,
        Err(_) if digits.starts_with('-') => i32::MIN,
        Err(_) => i32::MAX,
    }
}

/// Floating point value of the leading decimal number of `text`.
pub fn float_prefix(text: &str) -> f64 {
    FLOAT_PREFIX
        .captures(text)
        .and_then(|captures| captures.get(1))
        .and_then(|number| number.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

pub fn boolean(text: &str) -> bool {
    text == "true"
}
