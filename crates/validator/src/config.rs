//! Engine configuration

use serde::{Deserialize, Serialize};

/// Default format for date rules and `is_valid_date`.
pub const DEFAULT_DATE_FORMAT: &str = "d-m-Y";

/// How `min`, `max` and `between` measure the length of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    /// Unicode scalar values: `"héllo"` has length 5.
    #[default]
    Chars,
    /// UTF-8 bytes: `"héllo"` has length 6.
    Bytes,
}

impl LengthUnit {
    /// Measures `text` in this unit.
    ///
    /// ```
    /// use tollgate_validator::config::LengthUnit;
    ///
    /// assert_eq!(LengthUnit::Chars.measure("héllo"), 5);
    /// assert_eq!(LengthUnit::Bytes.measure("héllo"), 6);
    /// ```
    pub fn measure(self, text: &str) -> usize {
        match self {
            Self::Chars => text.chars().count(),
            Self::Bytes => text.len(),
        }
    }
}

/// Settings shared by every rule a [`Validator`](crate::Validator) runs.
///
/// Missing keys fall back to their defaults when deserialized, so a host
/// config file only needs to name what it changes:
///
/// ```
/// use tollgate_validator::config::{LengthUnit, ValidatorConfig};
///
/// let config = ValidatorConfig::from_json_str(r#"{ "length_unit": "bytes" }"#).unwrap();
/// assert_eq!(config.length_unit, LengthUnit::Bytes);
/// assert_eq!(config.date_format, "d-m-Y");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Unit for the length rules.
    pub length_unit: LengthUnit,

    /// Token format used when a date check is given no explicit format.
    pub date_format: String,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            length_unit: LengthUnit::default(),
            date_format: DEFAULT_DATE_FORMAT.to_owned(),
        }
    }
}

impl ValidatorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Sets the length unit.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_length_unit(mut self, unit: LengthUnit) -> Self {
        self.length_unit = unit;
        self
    }

    /// Sets the default date format.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }
}
