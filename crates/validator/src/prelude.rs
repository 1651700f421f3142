//! Prelude module for convenient imports.
//!
//! ```
//! use tollgate_validator::prelude::*;
//!
//! let mut validator = Validator::new(Record::new());
//! assert!(!validator.apply_rule("name", "required").unwrap());
//! ```

// ============================================================================
// ENGINE
// ============================================================================

pub use crate::config::{LengthUnit, ValidatorConfig};
pub use crate::engine::{FailureLog, ValidationState, Validator};
pub use crate::error::{RecordError, RuleError};
pub use crate::record::Record;
pub use crate::registry::{FnRule, Rule, RuleContext, RuleRegistry};
pub use crate::spec::RuleSpec;

// ============================================================================
// TYPED CHECKS
// ============================================================================

pub use crate::foundation::{Validate, ValidationError};

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;
