//! Boolean, truthiness and equality validators over record values
//!
//! These back the fluent predicates on the engine (`is_true`, `is_equal`,
//! `is_in_array`, ...) and the `in` rule.

use serde_json::Value;

use crate::coerce::{is_truthy, loose_eq};
use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a value is exactly `true`.
    pub IsTrue for Value;
    rule(input) { *input == Value::Bool(true) }
    error(input) { ValidationError::new("is_true", "Value must be true") }
    fn is_true();
}

crate::validator! {
    /// Validates that a value is exactly `false`.
    pub IsFalse for Value;
    rule(input) { *input == Value::Bool(false) }
    error(input) { ValidationError::new("is_false", "Value must be false") }
    fn is_false();
}

crate::validator! {
    /// Validates that a value is truthy.
    pub Truthy for Value;
    rule(input) { is_truthy(input) }
    error(input) { ValidationError::new("truthy", "Value must be truthy") }
    fn truthy();
}

crate::validator! {
    /// Validates that a value is falsy.
    pub Falsy for Value;
    rule(input) { !is_truthy(input) }
    error(input) { ValidationError::new("falsy", "Value must be falsy") }
    fn falsy();
}

crate::validator! {
    /// Validates that a value loosely equals an expected value.
    #[derive(PartialEq)]
    pub LooseEq { expected: Value } for Value;
    rule(self, input) { loose_eq(input, &self.expected) }
    error(self, input) {
        ValidationError::new("equal", "Value does not match the expected value")
            .with_param("expected", self.expected.to_string())
            .with_param("actual", input.to_string())
    }
    fn loose_equals(expected: Value);
}

crate::validator! {
    /// Validates that a value loosely equals one of a set of values.
    ///
    /// ```
    /// use serde_json::json;
    /// use tollgate_validator::validators::one_of;
    /// use tollgate_validator::foundation::Validate;
    ///
    /// let sizes = one_of(vec![json!("s"), json!("m"), json!("l")]);
    /// assert!(sizes.validate(&json!("m")).is_ok());
    /// assert!(sizes.validate(&json!("xl")).is_err());
    /// ```
    #[derive(PartialEq)]
    pub OneOf { allowed: Vec<Value> } for Value;
    rule(self, input) { self.allowed.iter().any(|candidate| loose_eq(input, candidate)) }
    error(self, input) {
        ValidationError::new("one_of", "Value is not one of the allowed values")
            .with_param("allowed", Value::Array(self.allowed.clone()).to_string())
    }
    fn one_of(allowed: Vec<Value>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use serde_json::json;

    #[test]
    fn strict_booleans() {
        assert!(is_true().validate(&json!(true)).is_ok());
        assert!(is_true().validate(&json!(1)).is_err());
        assert!(is_true().validate(&json!("true")).is_err());
        assert!(is_false().validate(&json!(false)).is_ok());
        assert!(is_false().validate(&json!(0)).is_err());
        assert!(is_false().validate(&Value::Null).is_err());
    }

    #[test]
    fn truthy_and_falsy() {
        assert!(truthy().validate(&json!("on")).is_ok());
        assert!(truthy().validate(&json!("0")).is_err());
        assert!(falsy().validate(&Value::Null).is_ok());
        assert!(falsy().validate(&json!([1])).is_err());
    }

    #[test]
    fn loose_equality_validator() {
        let validator = loose_equals(json!(10));
        assert!(validator.validate(&json!("10")).is_ok());
        assert!(validator.validate(&json!(10.0)).is_ok());

        let err = validator.validate(&json!("11")).unwrap_err();
        assert_eq!(err.param("expected"), Some("10"));
        assert_eq!(err.param("actual"), Some("\"11\""));
    }

    #[test]
    fn one_of_uses_loose_equality() {
        let validator = one_of(vec![json!("1"), json!("2")]);
        assert!(validator.validate(&json!(2)).is_ok());
        assert!(validator.validate(&json!("3")).is_err());
        assert!(one_of(Vec::new()).validate(&json!("x")).is_err());
    }
}
