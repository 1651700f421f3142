//! String content validators
//!
//! Format checks for email addresses, URLs and caller-supplied patterns.

use std::sync::LazyLock;

use crate::foundation::ValidationError;

// Local part: dot-separated atoms. Domain: dot-separated DNS labels ending in
// an alphabetic TLD of at least two letters.
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,63}$",
    )
    .unwrap()
});

/// Schemes that are valid without an authority component.
const HOSTLESS_SCHEMES: &[&str] = &["mailto", "news", "file"];

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates email address format.
    ///
    /// ```
    /// use tollgate_validator::validators::email;
    /// use tollgate_validator::foundation::Validate;
    ///
    /// assert!(email().validate("a@b.com").is_ok());
    /// assert!(email().validate("user@localhost").is_err());
    /// ```
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("email") }
    fn email();
}

// ============================================================================
// URL VALIDATOR
// ============================================================================

fn is_absolute_url(input: &str) -> bool {
    // the parser silently strips or percent-encodes whitespace and control chars
    if input.is_empty() || input.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }

    match url::Url::parse(input) {
        Ok(parsed) => {
            parsed.host_str().is_some_and(|host| !host.is_empty())
                || HOSTLESS_SCHEMES.contains(&parsed.scheme())
        }
        Err(_) => false,
    }
}

crate::validator! {
    /// Validates that a string is an absolute URL.
    ///
    /// A scheme is always required. A host is required unless the scheme is
    /// `mailto`, `news` or `file`.
    pub Url for str;
    rule(input) { is_absolute_url(input) }
    error(input) { ValidationError::invalid_format("url") }
    fn url();
}

// ============================================================================
// REGEX VALIDATOR
// ============================================================================

/// Converts a delimited pattern (`/body/flags`, `#body#i`) into the regex
/// crate's syntax. Patterns without a recognised delimiter are returned as-is.
///
/// Supported flags: `i`, `m`, `s`, `x`, `U` become inline flags. `u` and `D`
/// are accepted and ignored: matching is always Unicode-aware and `$` without
/// `m` already anchors at the very end of the text.
fn translate_delimited(pattern: &str) -> Result<String, PatternError> {
    let Some(delimiter) = pattern.chars().next() else {
        return Ok(String::new());
    };

    if delimiter.is_alphanumeric() || delimiter.is_whitespace() || delimiter == '\\' {
        return Ok(pattern.to_owned());
    }
    if !matches!(delimiter, '/' | '#' | '~' | '!' | '@' | '%' | '|' | '+') {
        return Ok(pattern.to_owned());
    }

    let rest = &pattern[delimiter.len_utf8()..];
    let Some(end) = rest.rfind(delimiter) else {
        return Ok(pattern.to_owned());
    };

    let (body, flags) = (&rest[..end], &rest[end + delimiter.len_utf8()..]);
    let mut inline = String::new();
    for flag in flags.chars() {
        match flag {
            'i' | 'm' | 's' | 'x' | 'U' => inline.push(flag),
            'u' | 'D' => {}
            other => return Err(PatternError::UnsupportedFlag { flag: other }),
        }
    }

    if inline.is_empty() {
        Ok(body.to_owned())
    } else {
        Ok(format!("(?{inline}){body}"))
    }
}

/// Failure to build a [`MatchesRegex`].
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// The pattern used a modifier after its closing delimiter that has no
    /// regex equivalent.
    #[error("unsupported pattern modifier '{flag}'")]
    UnsupportedFlag {
        /// The offending modifier.
        flag: char,
    },

    /// The pattern body does not compile.
    #[error(transparent)]
    Regex(#[from] regex::Error),
}

crate::validator! {
    /// Validates that a string matches a regular expression.
    ///
    /// ```
    /// use tollgate_validator::validators::matches_regex;
    /// use tollgate_validator::foundation::Validate;
    ///
    /// let plain = matches_regex(r"^\d{3}-\d{4}$").unwrap();
    /// assert!(plain.validate("555-1234").is_ok());
    ///
    /// let delimited = matches_regex("/^hello$/i").unwrap();
    /// assert!(delimited.validate("HELLO").is_ok());
    /// ```
    pub MatchesRegex { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::invalid_format("regex")
            .with_param("pattern", self.pattern.as_str().to_string())
    }
    new(pattern: &str) -> PatternError {
        let translated = translate_delimited(pattern)?;
        Ok(Self {
            pattern: regex::Regex::new(&translated)?,
        })
    }
    fn matches_regex(pattern: &str) -> PatternError;
}

// ============================================================================
// TESTS
// ============================================================================
