//! Named rules and the registry that resolves them
//!
//! A [`Rule`] is looked up by name from a [`RuleRegistry`] and run against
//! one field through a [`RuleContext`]. Registries are shared handles:
//! cloning one shares the underlying map, so a rule registered through any
//! clone is visible to every validator holding that registry.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use serde_json::Value;

use crate::coerce;
use crate::config::ValidatorConfig;
use crate::error::RuleError;
use crate::record::Record;
use crate::validators::parse_number;

// ==================== Rule ====================

/// A named check applied to one field of a record.
///
/// Returning `Ok(false)` records a validation failure. Returning an error
/// means the rule could not be evaluated (typically a bad parameter) and
/// aborts the application without touching the validation state.
///
/// Any `Fn(&RuleContext<'_>) -> Result<bool, RuleError>` is a rule. For the
/// simpler `(field, value, params) -> bool` form use [`FnRule`].
pub trait Rule: Send + Sync {
    /// Evaluates the rule.
    fn check(&self, ctx: &RuleContext<'_>) -> Result<bool, RuleError>;
}

impl<F> Rule for F
where
    F: Fn(&RuleContext<'_>) -> Result<bool, RuleError> + Send + Sync,
{
    fn check(&self, ctx: &RuleContext<'_>) -> Result<bool, RuleError> {
        self(ctx)
    }
}

/// Adapts a `(field, value, params) -> bool` closure into a [`Rule`].
///
/// ```
/// use serde_json::json;
/// use tollgate_validator::{FnRule, Record, RuleRegistry, Validator};
///
/// let registry = RuleRegistry::new();
/// registry.register(
///     "even",
///     FnRule::new(|_field, value, _params| value.as_i64().is_some_and(|n| n % 2 == 0)),
/// );
///
/// let record: Record = [("n", json!(4))].into_iter().collect();
/// let mut validator = Validator::new(record).with_registry(registry);
/// assert!(validator.apply_rule("n", "even").unwrap());
/// ```
pub struct FnRule<F>(F);

impl<F> FnRule<F>
where
    F: Fn(&str, &Value, &[String]) -> bool + Send + Sync,
{
    /// Wraps `f`.
    pub const fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Rule for FnRule<F>
where
    F: Fn(&str, &Value, &[String]) -> bool + Send + Sync,
{
    fn check(&self, ctx: &RuleContext<'_>) -> Result<bool, RuleError> {
        Ok((self.0)(ctx.field, ctx.value, ctx.params))
    }
}

impl<F> fmt::Debug for FnRule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule").finish_non_exhaustive()
    }
}

// ==================== RuleContext ====================

/// Everything a rule sees while it runs.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Name the rule was applied under.
    pub rule: &'a str,
    /// The field being validated.
    pub field: &'a str,
    /// The field's value.
    pub value: &'a Value,
    /// Comma-separated parameters from the spec.
    pub params: &'a [String],
    /// Parameter text after the first `:`, unsplit.
    pub raw_params: Option<&'a str>,
    /// The whole record, for rules comparing against other fields.
    pub record: &'a Record,
    /// Engine configuration.
    pub config: &'a ValidatorConfig,
}

impl<'a> RuleContext<'a> {
    /// Returns parameter `index`.
    ///
    /// # Errors
    ///
    /// [`RuleError::MissingParameter`] when there are not enough parameters.
    pub fn param(&self, index: usize) -> Result<&'a str, RuleError> {
        self.params
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| RuleError::MissingParameter {
                rule: self.rule.to_owned(),
                index,
            })
    }

    /// Returns parameter `index` parsed as a number.
    ///
    /// # Errors
    ///
    /// [`RuleError::MissingParameter`] or, when the text is not numeric,
    /// [`RuleError::InvalidParameter`].
    pub fn number_param(&self, index: usize) -> Result<f64, RuleError> {
        let param = self.param(index)?;
        parse_number(param).ok_or_else(|| RuleError::InvalidParameter {
            rule: self.rule.to_owned(),
            param: param.to_owned(),
            expected: "a number",
        })
    }

    /// Returns the unsplit parameter text.
    ///
    /// # Errors
    ///
    /// [`RuleError::MissingParameter`] when the spec had no parameters.
    pub fn raw_param(&self) -> Result<&'a str, RuleError> {
        self.raw_params.ok_or_else(|| RuleError::MissingParameter {
            rule: self.rule.to_owned(),
            index: 0,
        })
    }

    /// Text form of the value, see [`coerce::as_text`].
    pub fn text(&self) -> Option<Cow<'a, str>> {
        coerce::as_text(self.value)
    }

    /// Numeric form of the value, see [`coerce::as_number`].
    pub fn number(&self) -> Option<f64> {
        coerce::as_number(self.value)
    }
}

// ==================== RuleRegistry ====================

static GLOBAL: LazyLock<RuleRegistry> = LazyLock::new(RuleRegistry::with_builtins);

/// Thread-safe name to rule mapping.
///
/// Lookups take a read lock, registration a write lock. The lock is
/// released before a resolved rule runs.
///
/// ```
/// use tollgate_validator::RuleRegistry;
///
/// let registry = RuleRegistry::with_builtins();
/// assert!(registry.contains("between_num"));
/// assert!(registry.resolve("shiny").is_err());
///
/// let empty = RuleRegistry::new();
/// assert!(empty.is_empty());
/// ```
#[derive(Clone, Default)]
pub struct RuleRegistry {
    rules: Arc<RwLock<HashMap<String, Arc<dyn Rule>>>>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in rule.
    #[must_use]
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        crate::rules::register_builtins(&registry);
        registry
    }

    /// The process-wide registry, populated with the built-ins on first use.
    ///
    /// Validators created with [`Validator::new`](crate::Validator::new)
    /// share it.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Registers `rule` under `name`, replacing any rule already there.
    pub fn register(&self, name: impl Into<String>, rule: impl Rule + 'static) {
        self.register_shared(name, Arc::new(rule));
    }

    /// Registers an already shared rule.
    pub fn register_shared(&self, name: impl Into<String>, rule: Arc<dyn Rule>) {
        let name = name.into();
        let replaced = self.rules.write().insert(name.clone(), rule).is_some();
        tracing::debug!(rule = %name, replaced, "registered validation rule");
    }

    /// Registers a `(field, value, params) -> bool` closure.
    pub fn register_fn<F>(&self, name: impl Into<String>, f: F)
    where
        F: Fn(&str, &Value, &[String]) -> bool + Send + Sync + 'static,
    {
        self.register(name, FnRule::new(f));
    }

    /// Looks up a rule.
    ///
    /// # Errors
    ///
    /// [`RuleError::UnknownRule`] when nothing is registered under `name`.
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Rule>, RuleError> {
        self.rules
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| RuleError::UnknownRule {
                name: name.to_owned(),
            })
    }

    /// Returns `true` if a rule is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.rules.read().contains_key(name)
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.read().len()
    }

    /// Returns `true` if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.read().is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.rules.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.names())
            .finish()
    }
}
