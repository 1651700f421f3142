//! Rule spec strings
//!
//! A rule is applied by spec: a bare name (`"required"`) or a name with a
//! comma-separated parameter list (`"between_num:18,65"`).

use std::fmt;
use std::str::FromStr;

use crate::error::{RuleError, SpecParseReason};

/// A parsed rule spec.
///
/// ```
/// use tollgate_validator::RuleSpec;
///
/// let spec = RuleSpec::parse("between_num:18,65").unwrap();
/// assert_eq!(spec.name(), "between_num");
/// assert_eq!(spec.params(), ["18", "65"]);
/// assert_eq!(spec.to_string(), "between_num:18,65");
///
/// let spec = RuleSpec::new("in").with_param("red").with_param("blue");
/// assert_eq!(spec.to_string(), "in:red,blue");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleSpec {
    name: String,
    params: Vec<String>,
    raw_params: Option<String>,
}

impl RuleSpec {
    /// Creates a spec with no parameters. The name is not checked.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            raw_params: None,
        }
    }

    /// Appends a parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        let param = param.into();
        match &mut self.raw_params {
            Some(raw) => {
                raw.push(',');
                raw.push_str(&param);
            }
            None => self.raw_params = Some(param.clone()),
        }
        self.params.push(param);
        self
    }

    /// Parses `"name"` or `"name:p1,p2,..."`.
    ///
    /// The name ends at the first `:`. Parameters split on every `,` and
    /// empty segments are kept, so `"in:a,,b"` has three parameters.
    ///
    /// # Errors
    ///
    /// [`RuleError::SpecParse`] when the spec is blank, the name is empty or
    /// contains characters other than ASCII letters, digits and `_`, or a
    /// `:` is not followed by anything.
    pub fn parse(spec: &str) -> Result<Self, RuleError> {
        let fail = |reason| RuleError::SpecParse {
            spec: spec.to_owned(),
            reason,
        };

        if spec.trim().is_empty() {
            return Err(fail(SpecParseReason::Empty));
        }

        let (name, raw) = match spec.split_once(':') {
            Some((name, raw)) => (name, Some(raw)),
            None => (spec, None),
        };

        if name.is_empty() {
            return Err(fail(SpecParseReason::EmptyName));
        }
        if !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
            return Err(fail(SpecParseReason::InvalidName));
        }

        let params = match raw {
            Some("") => return Err(fail(SpecParseReason::EmptyParameters)),
            Some(raw) => raw.split(',').map(str::to_owned).collect(),
            None => Vec::new(),
        };

        Ok(Self {
            name: name.to_owned(),
            params,
            raw_params: raw.map(str::to_owned),
        })
    }

    /// The rule name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameters in order.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Everything after the first `:`, unsplit.
    pub fn raw_params(&self) -> Option<&str> {
        self.raw_params.as_deref()
    }
}

impl fmt::Display for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some(raw) = &self.raw_params {
            write!(f, ":{raw}")?;
        }
        Ok(())
    }
}

impl FromStr for RuleSpec {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
