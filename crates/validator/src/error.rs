//! Errors raised to the caller
//!
//! A rule that evaluates to `false` is not an error: it is recorded in the
//! [`FailureLog`](crate::FailureLog). These types cover the cases where a
//! rule cannot be evaluated at all.

use std::fmt;

/// Why a rule application could not run.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RuleError {
    /// No rule is registered under this name.
    #[error("unknown validation rule '{name}'")]
    UnknownRule {
        /// The name that was looked up.
        name: String,
    },

    /// The rule spec string is malformed.
    #[error("invalid rule spec '{spec}': {reason}")]
    SpecParse {
        /// The offending spec string.
        spec: String,
        /// What is wrong with it.
        reason: SpecParseReason,
    },

    /// A required positional parameter was not given.
    #[error("rule '{rule}' is missing parameter #{}", .index + 1)]
    MissingParameter {
        /// The rule being applied.
        rule: String,
        /// Zero-based position of the missing parameter.
        index: usize,
    },

    /// A parameter could not be interpreted.
    #[error("rule '{rule}' expects {expected}, got '{param}'")]
    InvalidParameter {
        /// The rule being applied.
        rule: String,
        /// The parameter text.
        param: String,
        /// What the parameter should have been.
        expected: &'static str,
    },

    /// A pattern parameter does not compile.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The pattern text.
        pattern: String,
        /// The compile error.
        #[source]
        source: crate::validators::PatternError,
    },
}

/// What makes a rule spec string malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecParseReason {
    /// The spec is empty or whitespace.
    Empty,
    /// Nothing precedes the `:`.
    EmptyName,
    /// The name contains something other than ASCII letters, digits or `_`.
    InvalidName,
    /// A `:` is present but no parameter text follows it.
    EmptyParameters,
}

impl fmt::Display for SpecParseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Empty => "spec is empty",
            Self::EmptyName => "rule name is empty",
            Self::InvalidName => "rule names may only contain ASCII letters, digits and '_'",
            Self::EmptyParameters => "':' must be followed by parameters",
        })
    }
}

/// Why a value could not become a [`Record`](crate::Record).
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// Records are built from JSON objects only.
    #[error("record input must be a JSON object, got {found}")]
    NotAnObject {
        /// JSON type name of the input.
        found: &'static str,
    },
}
