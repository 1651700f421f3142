//! Presence validator

use serde_json::Value;

use crate::foundation::ValidationError;

/// Characters stripped before deciding whether a string is blank.
pub(crate) const BLANK_CHARS: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Returns `true` when `input` is empty after trimming [`BLANK_CHARS`].
pub fn is_blank(input: &str) -> bool {
    input.trim_matches(BLANK_CHARS).is_empty()
}

crate::validator! {
    /// Validates that a value is present.
    ///
    /// Null and blank strings fail. Every other value passes, including
    /// `false`, `0` and empty arrays: presence is not truthiness.
    ///
    /// ```
    /// use serde_json::{json, Value};
    /// use tollgate_validator::validators::required;
    /// use tollgate_validator::foundation::Validate;
    ///
    /// assert!(required().validate(&json!("alice")).is_ok());
    /// assert!(required().validate(&json!(0)).is_ok());
    /// assert!(required().validate(&json!(" \t")).is_err());
    /// assert!(required().validate(&Value::Null).is_err());
    /// ```
    pub Required for Value;
    rule(input) {
        match input {
            Value::Null => false,
            Value::String(s) => !is_blank(s),
            _ => true,
        }
    }
    error(input) { ValidationError::new("required", "This field is required") }
    fn required();
}
