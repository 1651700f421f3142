//! The validation engine
//!
//! A [`Validator`] owns one [`Record`] and accumulates results as rules are
//! applied to its fields:
//!
//! - field rules (`apply_rule`, `apply_rules`) record every failure in the
//!   [`FailureLog`] under the field name
//! - fluent predicates (`is_true`, `is_equal`, ...) only fold into the
//!   overall [`ValidationState`]
//!
//! The state starts as [`ValidationState::Passing`] and becomes
//! [`ValidationState::Failed`] on the first failure. It never goes back.
//!
//! ```
//! use serde_json::json;
//! use tollgate_validator::{Record, Validator};
//!
//! let record = Record::from_json(json!({ "age": 15, "email": "a@b.com" })).unwrap();
//! let mut validator = Validator::new(record);
//!
//! assert!(validator.apply_rule("email", "email").unwrap());
//! assert!(!validator.apply_rule("age", "between_num:18,65").unwrap());
//!
//! assert!(validator.failed());
//! assert_eq!(validator.failures().get("age"), Some(&["between_num".to_owned()][..]));
//! ```

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::config::ValidatorConfig;
use crate::error::RuleError;
use crate::foundation::{Validate, ValidationError};
use crate::record::Record;
use crate::registry::{Rule, RuleContext, RuleRegistry};
use crate::spec::RuleSpec;
use crate::validators::{date_format, falsy, is_false, is_true, loose_equals, one_of, truthy};

// ==================== ValidationState ====================

/// Overall outcome of a validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationState {
    /// No check has failed yet.
    #[default]
    Passing,
    /// At least one check failed. Absorbing.
    Failed,
}

impl ValidationState {
    /// Folds one check outcome into the state.
    ///
    /// ```
    /// use tollgate_validator::ValidationState;
    ///
    /// let state = ValidationState::Passing.fold(false).fold(true);
    /// assert_eq!(state, ValidationState::Failed);
    /// ```
    #[must_use]
    pub const fn fold(self, ok: bool) -> Self {
        match (self, ok) {
            (Self::Passing, true) => Self::Passing,
            _ => Self::Failed,
        }
    }

    /// Returns `true` for [`ValidationState::Passing`].
    pub const fn is_passing(self) -> bool {
        matches!(self, Self::Passing)
    }
}

// ==================== FailureLog ====================

/// Failed rule names per field, in the order they failed.
///
/// Serializes as a JSON object:
///
/// ```
/// use tollgate_validator::FailureLog;
///
/// let mut log = FailureLog::default();
/// log.record("age", "between_num");
/// log.record("age", "numeric");
/// assert_eq!(
///     serde_json::to_string(&log).unwrap(),
///     r#"{"age":["between_num","numeric"]}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FailureLog(IndexMap<String, Vec<String>>);

impl FailureLog {
    /// Appends a failed rule for `field`.
    pub fn record(&mut self, field: &str, rule: &str) {
        self.0
            .entry(field.to_owned())
            .or_default()
            .push(rule.to_owned());
    }

    /// Failed rules for `field`, in order.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Returns `true` if any rule failed for `field`.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Returns `true` if nothing has failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one failure.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates fields in first-failure order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Returns the underlying map.
    pub fn into_inner(self) -> IndexMap<String, Vec<String>> {
        self.0
    }
}

// ==================== Validator ====================

/// Applies rules to the fields of one record.
///
/// Single use: create one per submitted form, apply rules, read the
/// outcome. Rule resolution goes through a [`RuleRegistry`], by default
/// the [global](RuleRegistry::global) one.
#[derive(Debug)]
pub struct Validator {
    record: Record,
    registry: RuleRegistry,
    config: ValidatorConfig,
    failures: FailureLog,
    state: ValidationState,
}

impl Validator {
    /// Creates a validator over `record` using the global registry and the
    /// default configuration.
    pub fn new(record: Record) -> Self {
        Self {
            record,
            registry: RuleRegistry::global().clone(),
            config: ValidatorConfig::default(),
            failures: FailureLog::default(),
            state: ValidationState::Passing,
        }
    }

    /// Creates a validator over request input with `overrides` applied on
    /// top.
    pub fn from_input(input: Record, overrides: Record) -> Self {
        Self::new(input.merged(overrides))
    }

    /// Uses `registry` instead of the global one.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_registry(mut self, registry: RuleRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Uses `config` instead of the default.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Registers a `(field, value, params) -> bool` rule in the global
    /// registry, replacing any rule with the same name.
    ///
    /// ```
    /// use serde_json::json;
    /// use tollgate_validator::{Record, Validator};
    ///
    /// Validator::register_rule("doc_even", |_field, value, _params| {
    ///     value.as_i64().is_some_and(|n| n % 2 == 0)
    /// });
    ///
    /// let mut validator = Validator::new([("n", json!(4))].into_iter().collect());
    /// assert!(validator.apply_rule("n", "doc_even").unwrap());
    /// ```
    pub fn register_rule<F>(name: impl Into<String>, f: F)
    where
        F: Fn(&str, &Value, &[String]) -> bool + Send + Sync + 'static,
    {
        RuleRegistry::global().register_fn(name, f);
    }

    // ==================== Field rules ====================

    /// Applies one rule spec (`"required"`, `"between_num:18,65"`) to `field`.
    ///
    /// A missing field fails whatever the rule. Failures are recorded and
    /// returned as `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Malformed specs, unknown rules and bad rule parameters are returned
    /// as [`RuleError`] and leave the validator unchanged.
    pub fn apply_rule(&mut self, field: &str, spec: &str) -> Result<bool, RuleError> {
        let spec = RuleSpec::parse(spec)?;
        self.apply(field, &spec)
    }

    /// Applies an already parsed spec to `field`.
    ///
    /// # Errors
    ///
    /// As [`apply_rule`](Self::apply_rule).
    pub fn apply(&mut self, field: &str, spec: &RuleSpec) -> Result<bool, RuleError> {
        let rule = self.registry.resolve(spec.name())?;
        self.run(field, spec, rule.as_ref())
    }

    /// Applies a sequence of rule specs to `field`, in order.
    ///
    /// Returns `true` only if every rule passed. Every spec is parsed and
    /// resolved before the first rule runs.
    ///
    /// ```
    /// use serde_json::json;
    /// use tollgate_validator::{Record, Validator};
    ///
    /// let mut validator = Validator::new([("name", json!("al"))].into_iter().collect());
    /// assert!(!validator.apply_rules("name", ["required", "min:3", "max:20"]).unwrap());
    /// assert_eq!(validator.failures().get("name"), Some(&["min".to_owned()][..]));
    /// ```
    ///
    /// # Errors
    ///
    /// Parse and lookup errors are returned before anything runs. A
    /// parameter error from a later rule is returned after earlier rules
    /// have been recorded.
    pub fn apply_rules<I>(&mut self, field: &str, specs: I) -> Result<bool, RuleError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let resolved = specs
            .into_iter()
            .map(|spec| {
                let spec = RuleSpec::parse(spec.as_ref())?;
                let rule = self.registry.resolve(spec.name())?;
                Ok((spec, rule))
            })
            .collect::<Result<Vec<_>, RuleError>>()?;

        let mut all_passed = true;
        for (spec, rule) in &resolved {
            all_passed &= self.run(field, spec, rule.as_ref())?;
        }
        Ok(all_passed)
    }

    fn run(&mut self, field: &str, spec: &RuleSpec, rule: &dyn Rule) -> Result<bool, RuleError> {
        let Some(value) = self.record.get(field) else {
            self.record_failure(field, spec.name(), true);
            return Ok(false);
        };

        let ctx = RuleContext {
            rule: spec.name(),
            field,
            value,
            params: spec.params(),
            raw_params: spec.raw_params(),
            record: &self.record,
            config: &self.config,
        };
        let passed = rule.check(&ctx)?;
        tracing::trace!(field, rule = spec.name(), passed, "applied rule");

        if !passed {
            self.record_failure(field, spec.name(), false);
        }
        Ok(passed)
    }

    fn record_failure(&mut self, field: &str, rule: &str, missing: bool) {
        tracing::debug!(field, rule, missing, "validation failed");
        self.failures.record(field, rule);
        self.fold(false);
    }

    fn fold(&mut self, ok: bool) -> bool {
        let next = self.state.fold(ok);
        if self.state.is_passing() && !next.is_passing() {
            tracing::debug!("validation state changed to failed");
        }
        self.state = next;
        ok
    }

    // ==================== Fluent predicates ====================

    fn field_or_null(&self, field: &str) -> &Value {
        self.record.get(field).unwrap_or(&Value::Null)
    }

    fn field_failure<V>(&self, field: &str, validator: &V) -> Option<ValidationError>
    where
        V: Validate<Input = Value>,
    {
        validator
            .validate(self.field_or_null(field))
            .err()
            .map(|error| error.with_field(field.to_owned()))
    }

    fn check<V>(&mut self, field: &str, validator: &V) -> bool
    where
        V: Validate<Input = Value>,
    {
        let failure = self.field_failure(field, validator);
        if let Some(error) = &failure {
            tracing::trace!(check = validator.name(), %error, "fluent check failed");
        }
        self.fold(failure.is_none())
    }

    /// `field` is exactly `true`.
    pub fn is_true(&mut self, field: &str) -> bool {
        self.check(field, &is_true())
    }

    /// `field` is exactly `false`.
    pub fn is_false(&mut self, field: &str) -> bool {
        self.check(field, &is_false())
    }

    /// `field` is truthy.
    pub fn is_positive(&mut self, field: &str) -> bool {
        self.check(field, &truthy())
    }

    /// `field` is falsy. A missing field is falsy.
    pub fn is_negative(&mut self, field: &str) -> bool {
        self.check(field, &falsy())
    }

    /// `field` loosely equals `item`.
    pub fn is_equal(&mut self, field: &str, item: impl Into<Value>) -> bool {
        self.check(field, &loose_equals(item.into()))
    }

    /// `field` does not loosely equal `item`.
    pub fn is_not_equal(&mut self, field: &str, item: impl Into<Value>) -> bool {
        let ok = loose_equals(item.into()).validate(self.field_or_null(field)).is_err();
        self.fold(ok)
    }

    /// `field` loosely equals one of `items`.
    pub fn is_in_array<I>(&mut self, field: &str, items: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.check(field, &one_of(items.into_iter().map(Into::into).collect()))
    }

    /// `field` loosely equals none of `items`.
    pub fn is_not_in_array<I>(&mut self, field: &str, items: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let allowed = one_of(items.into_iter().map(Into::into).collect());
        let ok = allowed.validate(self.field_or_null(field)).is_err();
        self.fold(ok)
    }

    /// `field` is a date in the configured default format.
    pub fn is_valid_date(&mut self, field: &str) -> bool {
        let format = self.config.date_format.clone();
        self.is_valid_date_as(field, &format)
    }

    /// `field` is a date in `format`.
    ///
    /// ```
    /// use serde_json::json;
    /// use tollgate_validator::Validator;
    ///
    /// let mut validator = Validator::new([("born", json!("1990-04-01"))].into_iter().collect());
    /// assert!(validator.is_valid_date_as("born", "Y-m-d"));
    /// assert!(!validator.is_valid_date("born"));
    /// assert!(validator.failures().is_empty());
    /// ```
    pub fn is_valid_date_as(&mut self, field: &str, format: &str) -> bool {
        let validator = date_format(format);
        let ok = crate::coerce::as_text(self.field_or_null(field))
            .is_some_and(|text| validator.is_valid(&text));
        self.fold(ok)
    }

    // ==================== Queries ====================

    /// Returns `true` while nothing has failed.
    pub const fn passed(&self) -> bool {
        self.state.is_passing()
    }

    /// Returns `true` once anything has failed.
    pub const fn failed(&self) -> bool {
        !self.passed()
    }

    /// The overall state.
    pub const fn state(&self) -> ValidationState {
        self.state
    }

    /// Failed field rules so far.
    pub const fn failures(&self) -> &FailureLog {
        &self.failures
    }

    /// Consumes the validator, returning its failure log.
    pub fn into_failures(self) -> FailureLog {
        self.failures
    }

    /// The record under validation.
    pub const fn data(&self) -> &Record {
        &self.record
    }

    /// The value of one field.
    pub fn value(&self, field: &str) -> Option<&Value> {
        self.record.get(field)
    }

    /// The configuration in use.
    pub const fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// The registry rules are resolved from.
    pub const fn registry(&self) -> &RuleRegistry {
        &self.registry
    }
}
