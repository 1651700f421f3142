//! # tollgate-validator
//!
//! Rule-based validation of submitted form input.
//!
//! ## Quick Start
//!
//! ```
//! use serde_json::json;
//! use tollgate_validator::prelude::*;
//!
//! let record = Record::from_json(json!({
//!     "name": "alice",
//!     "age": 15,
//!     "email": "alice@example.com",
//! }))
//! .unwrap();
//!
//! let mut validator = Validator::new(record);
//! validator.apply_rules("name", ["required", "between:3,20"]).unwrap();
//! validator.apply_rule("email", "email").unwrap();
//! validator.apply_rule("age", "between_num:18,65").unwrap();
//!
//! assert!(validator.failed());
//! assert_eq!(validator.failures().get("age"), Some(&["between_num".to_owned()][..]));
//! ```
//!
//! ## Layers
//!
//! - [`Validator`] applies rule specs to the fields of a [`Record`] and
//!   collects a [`FailureLog`]
//! - [`RuleRegistry`] maps rule names to [`Rule`]s; the built-ins live in
//!   [`rules`]
//! - typed checks in [`validators`] implement
//!   [`Validate`](foundation::Validate); rules coerce record values and
//!   delegate to them
//!
//! ## Custom Rules
//!
//! ```
//! use serde_json::json;
//! use tollgate_validator::{RuleRegistry, Validator};
//!
//! let registry = RuleRegistry::with_builtins();
//! registry.register_fn("even", |_field, value, _params| {
//!     value.as_i64().is_some_and(|n| n % 2 == 0)
//! });
//!
//! let mut validator = Validator::new([("n", json!(3))].into_iter().collect())
//!     .with_registry(registry);
//! assert!(!validator.apply_rule("n", "even").unwrap());
//! ```

pub mod coerce;
pub mod config;
pub mod engine;
pub mod error;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod record;
pub mod registry;
pub mod rules;
pub mod spec;
pub mod validators;

pub use config::{LengthUnit, ValidatorConfig};
pub use engine::{FailureLog, ValidationState, Validator};
pub use error::{RecordError, RuleError, SpecParseReason};
pub use record::Record;
pub use registry::{FnRule, Rule, RuleContext, RuleRegistry};
pub use spec::RuleSpec;
