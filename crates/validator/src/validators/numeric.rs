//! Numeric grammar and range validators
//!
//! The grammar accepted by [`parse_number`] is locale-free:
//!
//! ```text
//! ws* [+-]? ( digits ( "." digits* )? | "." digits ) ( [eE] [+-]? digits )? ws*
//! ```
//!
//! where `ws` is one of space, `\t`, `\n`, `\r`, `\x0B`, `\x0C`. Hex, octal,
//! binary, `inf` and `nan` spellings are rejected.

use crate::foundation::{Validate, ValidationError};

const fn is_numeric_ws(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

/// Counts consecutive ASCII digits starting at `pos`.
fn digit_run(bytes: &[u8], pos: usize) -> usize {
    bytes[pos..].iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Returns `true` when `input` matches the numeric grammar.
pub fn is_numeric(input: &str) -> bool {
    let bytes = input.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() && is_numeric_ws(bytes[pos]) {
        pos += 1;
    }

    if pos < bytes.len() && matches!(bytes[pos], b'+' | b'-') {
        pos += 1;
    }

    let integer = digit_run(bytes, pos);
    pos += integer;

    let mut fraction = 0;
    if pos < bytes.len() && bytes[pos] == b'.' {
        pos += 1;
        fraction = digit_run(bytes, pos);
        pos += fraction;
    }

    // "." and "" alone are not numbers
    if integer == 0 && fraction == 0 {
        return false;
    }

    if pos < bytes.len() && matches!(bytes[pos], b'e' | b'E') {
        pos += 1;
        if pos < bytes.len() && matches!(bytes[pos], b'+' | b'-') {
            pos += 1;
        }
        let exponent = digit_run(bytes, pos);
        if exponent == 0 {
            return false;
        }
        pos += exponent;
    }

    while pos < bytes.len() && is_numeric_ws(bytes[pos]) {
        pos += 1;
    }

    pos == bytes.len()
}

/// Parses `input` as a number when it matches the numeric grammar.
///
/// ```
/// use tollgate_validator::validators::parse_number;
///
/// assert_eq!(parse_number(" 42 "), Some(42.0));
/// assert_eq!(parse_number("-1.5e3"), Some(-1500.0));
/// assert_eq!(parse_number(".5"), Some(0.5));
/// assert_eq!(parse_number("0x1A"), None);
/// assert_eq!(parse_number("inf"), None);
/// ```
pub fn parse_number(input: &str) -> Option<f64> {
    if !is_numeric(input) {
        return None;
    }
    input
        .trim_matches(|c: char| c.is_ascii() && is_numeric_ws(c as u8))
        .parse::<f64>()
        .ok()
}

// ============================================================================
// NUMERIC STRING
// ============================================================================

crate::validator! {
    /// Validates that a string is a number per the numeric grammar.
    pub Numeric for str;
    rule(input) { is_numeric(input) }
    error(input) { ValidationError::invalid_format("numeric") }
    fn numeric();
}

// ============================================================================
// RANGE
// ============================================================================

crate::validator! {
    /// Validates that a number is at least a minimum.
    #[derive(Copy, PartialEq)]
    pub Min { min: f64 } for f64;
    rule(self, input) { *input >= self.min }
    error(self, input) {
        ValidationError::new("min", format!("Value must be at least {}", self.min))
            .with_param("min", self.min.to_string())
            .with_param("actual", input.to_string())
    }
    fn min(min: f64);
}

crate::validator! {
    /// Validates that a number does not exceed a maximum.
    #[derive(Copy, PartialEq)]
    pub Max { max: f64 } for f64;
    rule(self, input) { *input <= self.max }
    error(self, input) {
        ValidationError::new("max", format!("Value must be at most {}", self.max))
            .with_param("max", self.max.to_string())
            .with_param("actual", input.to_string())
    }
    fn max(max: f64);
}

crate::validator! {
    /// Validates that a number is within an inclusive range.
    ///
    /// Equivalent to [`Min`] and [`Max`] both passing; an inverted range
    /// (`min > max`) accepts nothing.
    #[derive(Copy, PartialEq)]
    pub InRange { min: f64, max: f64 } for f64;
    rule(self, input) { Min::new(self.min).is_valid(input) && Max::new(self.max).is_valid(input) }
    error(self, input) { ValidationError::out_of_range(self.min, self.max, *input) }
    fn in_range(min: f64, max: f64);
}
