//! Date format validator
//!
//! Formats are written with the single-letter date tokens web templates
//! commonly use (`d-m-Y`, `Y-m-d H:i:s`) and translated to strftime for
//! chrono.
//!
//! | token | meaning | strftime |
//! |---|---|---|
//! | `d` / `j` | day, padded / unpadded | `%d` / `%-d` |
//! | `m` / `n` | month, padded / unpadded | `%m` / `%-m` |
//! | `Y` / `y` | four / two digit year | `%Y` / `%y` |
//! | `H` / `G` | 24h hour, padded / unpadded | `%H` / `%-H` |
//! | `h` / `g` | 12h hour, padded / unpadded | `%I` / `%-I` |
//! | `i` / `s` | minutes / seconds | `%M` / `%S` |
//! | `D` / `l` | weekday, short / full | `%a` / `%A` |
//! | `M` / `F` | month name, short / full | `%b` / `%B` |
//! | `A` / `a` | meridiem, upper / lower | `%p` / `%P` |
//!
//! `\` makes the next character literal. Any other character is literal.

use std::fmt::{Display, Write as _};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::foundation::ValidationError;
use crate::validators::presence::BLANK_CHARS;

/// Translates a token format into a chrono strftime string.
///
/// ```
/// use tollgate_validator::validators::to_strftime;
///
/// assert_eq!(to_strftime("d-m-Y"), "%d-%m-%Y");
/// assert_eq!(to_strftime("Y-m-d H:i:s"), "%Y-%m-%d %H:%M:%S");
/// ```
pub fn to_strftime(format: &str) -> String {
    let mut out = String::with_capacity(format.len() * 2);
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        let spec = match c {
            'd' => "%d",
            'j' => "%-d",
            'm' => "%m",
            'n' => "%-m",
            'Y' => "%Y",
            'y' => "%y",
            'H' => "%H",
            'G' => "%-H",
            'h' => "%I",
            'g' => "%-I",
            'i' => "%M",
            's' => "%S",
            'D' => "%a",
            'l' => "%A",
            'M' => "%b",
            'F' => "%B",
            'A' => "%p",
            'a' => "%P",
            '\\' => {
                if let Some(literal) = chars.next() {
                    push_literal(&mut out, literal);
                }
                continue;
            }
            other => {
                push_literal(&mut out, other);
                continue;
            }
        };
        out.push_str(spec);
    }

    out
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

/// Writes `formatted` and compares it to `expected`. A format item the
/// parsed type cannot render counts as a mismatch.
fn renders_as(formatted: impl Display, expected: &str) -> bool {
    let mut out = String::new();
    write!(out, "{formatted}").is_ok() && out == expected
}

/// A value is a date in `strftime` iff it parses and renders back to itself.
fn matches_format(input: &str, strftime: &str) -> bool {
    let input = input.trim_matches(BLANK_CHARS);
    if input.is_empty() {
        return false;
    }

    if let Ok(datetime) = NaiveDateTime::parse_from_str(input, strftime) {
        return renders_as(datetime.format(strftime), input);
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, strftime) {
        return renders_as(date.format(strftime), input);
    }
    if let Ok(time) = NaiveTime::parse_from_str(input, strftime) {
        return renders_as(time.format(strftime), input);
    }
    false
}

crate::validator! {
    /// Validates that a string is a date written exactly in a token format.
    ///
    /// ```
    /// use tollgate_validator::validators::date_format;
    /// use tollgate_validator::foundation::Validate;
    ///
    /// let validator = date_format("d-m-Y");
    /// assert!(validator.validate("15-08-2024").is_ok());
    /// assert!(validator.validate("31-02-2024").is_err());
    /// assert!(validator.validate("2024-08-15").is_err());
    /// ```
    #[derive(PartialEq, Eq)]
    pub DateFormat { format: String, strftime: String } for str;
    rule(self, input) { matches_format(input, &self.strftime) }
    error(self, input) {
        ValidationError::invalid_format("date").with_param("format", self.format.clone())
    }
    new(format: &str) {
        Self {
            format: format.to_owned(),
            strftime: to_strftime(format),
        }
    }
    fn date_format(format: &str);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn translates_tokens_and_literals() {
        assert_eq!(to_strftime("j/n/y"), "%-d/%-m/%y");
        assert_eq!(to_strftime("D, d M Y"), "%a, %d %b %Y");
        assert_eq!(to_strftime("g:i A"), "%-I:%M %p");
        assert_eq!(to_strftime("\\d d"), "d %d");
        assert_eq!(to_strftime("d%"), "%d%%");
        assert_eq!(to_strftime("Y \\at H"), "%Y at %H");
    }

    #[test]
    fn default_format() {
        let validator = date_format("d-m-Y");
        assert!(validator.validate("01-01-2000").is_ok());
        assert!(validator.validate("  29-02-2024 ").is_ok());
        assert!(validator.validate("29-02-2023").is_err());
        assert!(validator.validate("1-1-2000").is_err());
        assert!(validator.validate("").is_err());
        assert!(validator.validate("yesterday").is_err());
    }

    #[test]
    fn unpadded_tokens() {
        let validator = date_format("j.n.Y");
        assert!(validator.validate("5.3.2024").is_ok());
        assert!(validator.validate("05.03.2024").is_err());
    }

    #[test]
    fn datetime_and_time_formats() {
        assert!(date_format("Y-m-d H:i:s").validate("2024-08-15 13:45:00").is_ok());
        assert!(date_format("Y-m-d H:i:s").validate("2024-08-15 25:45:00").is_err());
        assert!(date_format("H:i").validate("13:45").is_ok());
        assert!(date_format("H:i").validate("13:60").is_err());
    }

    #[test]
    fn weekday_must_agree_with_date() {
        let validator = date_format("D, d M Y");
        assert!(validator.validate("Thu, 15 Aug 2024").is_ok());
        assert!(validator.validate("Fri, 15 Aug 2024").is_err());
    }

    #[test]
    fn error_names_the_format() {
        let err = date_format("Y-m-d").validate("nope").unwrap_err();
        assert_eq!(err.param("format"), Some("Y-m-d"));
    }
}
