//! Rule registry behaviour: sharing, overwriting and concurrent access.

use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tollgate_validator::prelude::*;

fn record(n: i64) -> Record {
    [("n", json!(n))].into_iter().collect()
}

#[test]
fn global_registry_has_builtins() {
    let global = RuleRegistry::global();
    for name in ["required", "between_num", "regex", "date"] {
        assert!(global.contains(name), "{name}");
    }
}

#[test]
fn global_registration_is_visible_to_new_validators() {
    Validator::register_rule("registry_test_positive", |_, value, _| {
        value.as_f64().is_some_and(|n| n > 0.0)
    });

    assert!(RuleRegistry::global().contains("registry_test_positive"));
    let mut validator = Validator::new(record(1));
    assert!(validator.apply_rule("n", "registry_test_positive").unwrap());
}

#[test]
fn explicit_registries_are_isolated() {
    let left = RuleRegistry::with_builtins();
    let right = RuleRegistry::with_builtins();
    left.register_fn("only_left", |_, _, _| true);

    let mut validator = Validator::new(record(1)).with_registry(right);
    assert!(matches!(
        validator.apply_rule("n", "only_left"),
        Err(RuleError::UnknownRule { .. })
    ));
    assert!(!RuleRegistry::global().contains("only_left"));
}

#[test]
fn custom_rule_can_shadow_builtin() {
    let registry = RuleRegistry::with_builtins();
    registry.register_fn("required", |_, value, _| !value.is_null());

    let record: Record = [("blank", json!(""))].into_iter().collect();
    let mut validator = Validator::new(record).with_registry(registry);
    assert!(validator.apply_rule("blank", "required").unwrap());
}

fn greater_than_field(ctx: &RuleContext<'_>) -> Result<bool, RuleError> {
    let other = ctx.param(0)?;
    let threshold = ctx.record.get(other).and_then(Value::as_f64);
    Ok(matches!((ctx.number(), threshold), (Some(v), Some(t)) if v > t))
}

#[test]
fn context_rule_reads_params_and_record() {
    let registry = RuleRegistry::with_builtins();
    registry.register("greater_than_field", greater_than_field);

    let record: Record = [("min", json!(10)), ("max", json!(20))].into_iter().collect();
    let mut validator = Validator::new(record).with_registry(registry);
    assert!(validator.apply_rule("max", "greater_than_field:min").unwrap());
    assert!(!validator.apply_rule("min", "greater_than_field:max").unwrap());
    assert!(matches!(
        validator.apply_rule("min", "greater_than_field"),
        Err(RuleError::MissingParameter { index: 0, .. })
    ));
    assert_eq!(
        validator.failures().get("min"),
        Some(&["greater_than_field".to_owned()][..])
    );
}

#[test]
fn rule_receives_field_value_and_params() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let registry = RuleRegistry::new();
    registry.register_fn("spy", move |field, value, params| {
        sink.lock().unwrap().push(format!("{field}={value} {params:?}"));
        true
    });

    let mut validator = Validator::new(record(7)).with_registry(registry);
    validator.apply_rule("n", "spy:a,,b").unwrap();
    assert_eq!(*seen.lock().unwrap(), vec![r#"n=7 ["a", "", "b"]"#.to_owned()]);
}

#[test]
fn concurrent_registration_and_lookup() {
    let registry = RuleRegistry::with_builtins();
    let builtins = registry.len();
    let passes = AtomicUsize::new(0);

    std::thread::scope(|scope| {
        for t in 0..4 {
            let registry = registry.clone();
            let passes = &passes;
            scope.spawn(move || {
                for i in 0..25 {
                    registry.register_fn(format!("rule_{t}_{i}"), |_, _, _| true);
                    let mut validator = Validator::new(record(i)).with_registry(registry.clone());
                    if validator.apply_rules("n", ["required", "numeric"]).unwrap() {
                        passes.fetch_add(1, Ordering::Relaxed);
                    }
                }
            });
        }
    });

    assert_eq!(registry.len(), builtins + 100);
    assert_eq!(passes.load(Ordering::Relaxed), 100);
    assert!(registry.contains("rule_3_24"));
}
