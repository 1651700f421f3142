//! Scalar coercions over record values
//!
//! Form input arrives loosely typed: a number may be `15` or `"15"`, a
//! checkbox may be `true`, `"1"` or `"on"`. Rules never match on
//! [`Value`] variants directly; they go through these helpers so that every
//! rule agrees on what "the text of a value" or "a truthy value" means.

use std::borrow::Cow;

use serde_json::Value;

use crate::validators::parse_number;

/// Returns the text form of a scalar value.
///
/// | value | text |
/// |---|---|
/// | string | itself |
/// | number | JSON rendering (`15`, `1.5`) |
/// | `true` | `"1"` |
/// | `false`, null | `""` |
/// | array, object | none |
pub fn as_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(true) => Some(Cow::Borrowed("1")),
        Value::Bool(false) | Value::Null => Some(Cow::Borrowed("")),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Returns the numeric form of a value: JSON numbers, and strings that
/// match the numeric grammar. Booleans and null are not numeric.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

/// Truthiness of a value.
///
/// Falsy: null, `false`, `0`, `0.0`, `""`, `"0"`, empty array, empty object.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Loose equality between two values.
///
/// - a boolean on either side compares truthiness
/// - null against a scalar compares truthiness (`null == ""`, `null == 0`)
/// - two numeric operands (numbers or numeric strings) compare as numbers
/// - anything else compares structurally
pub fn loose_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Bool(_), _) | (_, Value::Bool(_)) => is_truthy(left) == is_truthy(right),
        (Value::Null, Value::Null) => true,
        (Value::Null, other) | (other, Value::Null) => match other {
            Value::Array(_) | Value::Object(_) => !is_truthy(other),
            Value::String(s) => s.is_empty(),
            _ => !is_truthy(other),
        },
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| loose_eq(x, y))
        }
        _ => match (as_number(left), as_number(right)) {
            (Some(a), Some(b)) => a == b,
            _ => left == right,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_form_of_scalars() {
        assert_eq!(as_text(&json!("abc")).as_deref(), Some("abc"));
        assert_eq!(as_text(&json!(15)).as_deref(), Some("15"));
        assert_eq!(as_text(&json!(1.5)).as_deref(), Some("1.5"));
        assert_eq!(as_text(&json!(true)).as_deref(), Some("1"));
        assert_eq!(as_text(&json!(false)).as_deref(), Some(""));
        assert_eq!(as_text(&Value::Null).as_deref(), Some(""));
        assert_eq!(as_text(&json!([1, 2])), None);
        assert_eq!(as_text(&json!({"a": 1})), None);
    }

    #[test]
    fn numeric_form() {
        assert_eq!(as_number(&json!(15)), Some(15.0));
        assert_eq!(as_number(&json!("15")), Some(15.0));
        assert_eq!(as_number(&json!(" -2.5 ")), Some(-2.5));
        assert_eq!(as_number(&json!("15abc")), None);
        assert_eq!(as_number(&json!(true)), None);
        assert_eq!(as_number(&Value::Null), None);
    }

    #[test]
    fn truthiness() {
        for falsy in [
            Value::Null,
            json!(false),
            json!(0),
            json!(0.0),
            json!(""),
            json!("0"),
            json!([]),
            json!({}),
        ] {
            assert!(!is_truthy(&falsy), "{falsy} should be falsy");
        }
        for truthy in [json!(true), json!(1), json!(-1), json!("a"), json!("0.0"), json!(" "), json!([0])] {
            assert!(is_truthy(&truthy), "{truthy} should be truthy");
        }
    }

    #[test]
    fn loose_equality_numbers_and_strings() {
        assert!(loose_eq(&json!(1), &json!("1")));
        assert!(loose_eq(&json!("1"), &json!("01")));
        assert!(loose_eq(&json!("1e1"), &json!(10)));
        assert!(loose_eq(&json!("abc"), &json!("abc")));
        assert!(!loose_eq(&json!("abc"), &json!("ABC")));
        assert!(!loose_eq(&json!("abc"), &json!(0)));
    }

    #[test]
    fn loose_equality_bool_and_null() {
        assert!(loose_eq(&json!(true), &json!("yes")));
        assert!(loose_eq(&json!(false), &json!(0)));
        assert!(loose_eq(&Value::Null, &json!("")));
        assert!(loose_eq(&Value::Null, &json!(0)));
        assert!(loose_eq(&Value::Null, &json!([])));
        assert!(!loose_eq(&Value::Null, &json!("0")));
        assert!(!loose_eq(&Value::Null, &json!("a")));
    }

    #[test]
    fn loose_equality_arrays() {
        assert!(loose_eq(&json!([1, "2"]), &json!(["1", 2])));
        assert!(!loose_eq(&json!([1]), &json!([1, 2])));
    }
}
