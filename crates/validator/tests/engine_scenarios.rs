//! End-to-end scenarios for the validation engine.

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use tollgate_validator::prelude::*;

fn record(value: Value) -> Record {
    Record::from_json(value).unwrap()
}

fn isolated(value: Value) -> Validator {
    Validator::new(record(value)).with_registry(RuleRegistry::with_builtins())
}

fn log(entries: &[(&str, &[&str])]) -> FailureLog {
    let mut log = FailureLog::default();
    for (field, rules) in entries {
        for rule in *rules {
            log.record(field, rule);
        }
    }
    log
}

// ============================================================================
// BASIC SCENARIOS
// ============================================================================

#[test]
fn underage_fails_between_num() {
    let mut validator = isolated(json!({ "age": 15 }));

    assert!(!validator.apply_rule("age", "between_num:18,65").unwrap());
    assert_eq!(validator.failures(), &log(&[("age", &["between_num"])]));
    assert!(!validator.passed());
}

#[test]
fn valid_email_passes() {
    let mut validator = isolated(json!({ "email": "a@b.com" }));

    assert!(validator.apply_rule("email", "email").unwrap());
    assert!(validator.failures().is_empty());
    assert!(validator.passed());
}

#[test]
fn required_on_empty_record_is_a_recorded_failure() {
    let mut validator = isolated(json!({}));

    let outcome = validator.apply_rule("name", "required");
    assert!(matches!(outcome, Ok(false)));
    assert_eq!(validator.failures(), &log(&[("name", &["required"])]));
}

#[test]
fn custom_even_rule() {
    let registry = RuleRegistry::with_builtins();
    registry.register_fn("even", |_, value, _| {
        value.as_i64().is_some_and(|n| n % 2 == 0)
    });

    let mut four = Validator::new(record(json!({ "n": 4 }))).with_registry(registry.clone());
    assert!(four.apply_rule("n", "even").unwrap());
    assert!(four.passed());

    let mut three = Validator::new(record(json!({ "n": 3 }))).with_registry(registry);
    assert!(!three.apply_rule("n", "even").unwrap());
    assert_eq!(three.failures(), &log(&[("n", &["even"])]));
}

#[test]
fn custom_rule_through_global_registry() {
    Validator::register_rule("scenario_multiple_of", |_, value, params| {
        let divisor = params.first().and_then(|p| p.parse::<i64>().ok()).unwrap_or(1);
        value.as_i64().is_some_and(|n| n % divisor == 0)
    });

    let mut validator = Validator::new(record(json!({ "n": 9 })));
    assert!(validator.apply_rule("n", "scenario_multiple_of:3").unwrap());
    assert!(!validator.apply_rule("n", "scenario_multiple_of:2").unwrap());
}

// ============================================================================
// SIGNUP FORM
// ============================================================================

#[test]
fn signup_form_collects_failures_per_field() {
    let mut validator = isolated(json!({
        "username": "al",
        "email": "al@example",
        "password": "hunter22",
        "password_confirm": "hunter2",
        "age": "17",
        "country": "fr",
        "homepage": "https://al.example.org",
    }));

    let specs: &[(&str, &[&str])] = &[
        ("username", &["required", "between:3,16", "regex:/^[a-z0-9_]+$/i"]),
        ("email", &["required", "email"]),
        ("password", &["required", "min:8"]),
        ("password_confirm", &["match:password"]),
        ("age", &["numeric", "min_num:18"]),
        ("country", &["in:de,fr,it"]),
        ("homepage", &["url"]),
        ("phone", &["required"]),
    ];
    for (field, rules) in specs {
        validator.apply_rules(field, rules.iter().copied()).unwrap();
    }

    assert_eq!(
        validator.failures(),
        &log(&[
            ("username", &["between"]),
            ("email", &["email"]),
            ("password_confirm", &["match"]),
            ("age", &["min_num"]),
            ("phone", &["required"]),
        ])
    );
    assert_eq!(
        serde_json::to_value(validator.failures()).unwrap(),
        json!({
            "username": ["between"],
            "email": ["email"],
            "password_confirm": ["match"],
            "age": ["min_num"],
            "phone": ["required"],
        })
    );
}

// ============================================================================
// RULE TABLE
// ============================================================================

#[rstest]
#[case::required_text(json!("x"), "required", true)]
#[case::required_blank(json!(" \t"), "required", false)]
#[case::required_null(Value::Null, "required", false)]
#[case::numeric_string(json!("3.14"), "numeric", true)]
#[case::numeric_exponent(json!("1e5"), "numeric", true)]
#[case::numeric_hex(json!("0x1A"), "numeric", false)]
#[case::min_num_equal(json!(10), "min_num:10", true)]
#[case::max_num_over(json!(10.5), "max_num:10", false)]
#[case::between_num_lower(json!(18), "between_num:18,65", true)]
#[case::between_num_upper(json!(65), "between_num:18,65", true)]
#[case::between_num_text(json!("n/a"), "between_num:18,65", false)]
#[case::min_length(json!("abcd"), "min:4", true)]
#[case::max_length(json!("abcde"), "max:4", false)]
#[case::between_length_of_number(json!(123), "between:1,3", true)]
#[case::in_set(json!("fr"), "in:de,fr,it", true)]
#[case::in_set_numeric(json!(1), "in:1,2", true)]
#[case::not_in_set(json!("es"), "in:de,fr,it", false)]
#[case::email_valid(json!("first.last+tag@sub.example.co"), "email", true)]
#[case::email_no_tld(json!("user@localhost"), "email", false)]
#[case::ipv4(json!("127.0.0.1"), "ip", true)]
#[case::ipv6(json!("2001:db8::1"), "ip:v6", true)]
#[case::ip_out_of_range(json!("256.1.1.1"), "ip", false)]
#[case::url_https(json!("https://example.com"), "url", true)]
#[case::url_mailto(json!("mailto:a@b.com"), "url", true)]
#[case::url_relative(json!("/path"), "url", false)]
#[case::url_inner_tab(json!("http://exa\tmple.com"), "url", false)]
#[case::url_inner_newline(json!("http://exa\nmple.com"), "url", false)]
#[case::url_inner_space(json!("http://example.com/a b"), "url", false)]
#[case::regex_plain(json!("AB-12"), r"regex:^[A-Z]{2}-\d{2}$", true)]
#[case::regex_case_insensitive(json!("ab-12"), r"regex:/^[A-Z]{2}-\d{2}$/i", true)]
#[case::date_default(json!("31-12-1999"), "date", true)]
#[case::date_invalid_day(json!("31-11-1999"), "date", false)]
#[case::date_custom(json!("1999/12/31"), "date:Y/m/d", true)]
fn rule_table(#[case] value: Value, #[case] spec: &str, #[case] expected: bool) {
    let mut validator = isolated(json!({ "f": value }));
    assert_eq!(validator.apply_rule("f", spec).unwrap(), expected, "{spec}");
    assert_eq!(validator.passed(), expected);
}

// ============================================================================
// ERRORS
// ============================================================================

#[rstest]
#[case::unknown("sparkly")]
#[case::empty("")]
#[case::bad_name("min-num:3")]
#[case::dangling_colon("min:")]
#[case::missing_param("between_num:18")]
#[case::non_numeric_param("min_num:eighteen")]
#[case::bad_pattern("regex:[")]
#[case::bad_ip_family("ip:v7")]
fn errors_leave_state_untouched(#[case] spec: &str) {
    let mut validator = isolated(json!({ "f": "value" }));
    assert!(validator.apply_rule("f", spec).is_err(), "{spec}");
    assert!(validator.passed());
    assert!(validator.failures().is_empty());
}

#[test]
fn unknown_rule_wins_over_missing_field() {
    let mut validator = isolated(json!({}));
    let err = validator.apply_rule("absent", "sparkly").unwrap_err();
    assert_eq!(err.to_string(), "unknown validation rule 'sparkly'");
    assert!(validator.passed());
}

#[test]
fn parameter_error_after_recorded_failures() {
    let mut validator = isolated(json!({ "f": "" }));
    let err = validator
        .apply_rules("f", ["required", "min_num:oops"])
        .unwrap_err();
    assert!(matches!(err, RuleError::InvalidParameter { .. }));
    assert_eq!(validator.failures(), &log(&[("f", &["required"])]));
    assert!(validator.failed());
}

// ============================================================================
// FLUENT PREDICATES
// ============================================================================

#[test]
fn fluent_checks_fold_into_state_only() {
    let mut validator = isolated(json!({
        "terms": true,
        "newsletter": "0",
        "plan": "pro",
        "born": "01-02-1990",
    }));

    assert!(validator.is_true("terms"));
    assert!(validator.is_negative("newsletter"));
    assert!(validator.is_in_array("plan", ["free", "pro"]));
    assert!(validator.is_not_equal("plan", "enterprise"));
    assert!(validator.is_valid_date("born"));
    assert!(validator.passed());

    assert!(!validator.is_positive("newsletter"));
    assert!(validator.failed());
    assert!(!validator.is_false("missing"));
    assert!(validator.failures().is_empty());
}

#[test]
fn data_is_exposed_unchanged() {
    let input = record(json!({ "name": "alice" }));
    let validator = Validator::from_input(input.clone(), Record::new());
    assert_eq!(validator.data(), &input);
    assert_eq!(validator.value("name"), Some(&json!("alice")));
    assert_eq!(validator.value("nope"), None);
}

#[test]
fn byte_length_configuration() {
    let config = ValidatorConfig::from_json_str(r#"{ "length_unit": "bytes" }"#).unwrap();
    let mut validator = isolated(json!({ "city": "Zürich" })).with_config(config);
    assert!(!validator.apply_rule("city", "max:6").unwrap());

    let mut validator = isolated(json!({ "city": "Zürich" }));
    assert!(validator.apply_rule("city", "max:6").unwrap());
}
