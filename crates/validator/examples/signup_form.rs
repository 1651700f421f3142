//! Validates a signup form and prints the failures as JSON.
//!
//! Run with `RUST_LOG=tollgate_validator=debug` to see rule events.

use serde_json::json;
use tollgate_validator::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let submitted = Record::from_json(json!({
        "username": "al",
        "email": "al@example.com",
        "password": "hunter22",
        "password_confirm": "hunter2",
        "age": "17",
        "terms": true,
    }))?;
    let overrides: Record = [("source", json!("web"))].into_iter().collect();

    let mut validator = Validator::from_input(submitted, overrides);

    // Site-specific rule, available to every validator in the process.
    Validator::register_rule("not_reserved", |_, value, _| {
        !matches!(value.as_str(), Some("admin" | "root"))
    });

    validator.apply_rules("username", ["required", "between:3,16", "not_reserved"])?;
    validator.apply_rules("email", ["required", "email"])?;
    validator.apply_rules("password", ["required", "min:8"])?;
    validator.apply_rule("password_confirm", "match:password")?;
    validator.apply_rules("age", ["numeric", "min_num:18"])?;
    validator.is_true("terms");

    if validator.passed() {
        println!("signup accepted");
    } else {
        println!("signup rejected:");
        println!("{}", serde_json::to_string_pretty(validator.failures())?);
    }

    Ok(())
}
