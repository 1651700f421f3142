//! Built-in rules
//!
//! | rule | params | passes when |
//! |---|---|---|
//! | `required` | | value is not null and not a blank string |
//! | `numeric` | | value is a number or a numeric string |
//! | `min_num` | `min` | value is numeric and `>= min` |
//! | `max_num` | `max` | value is numeric and `<= max` |
//! | `between_num` | `min,max` | both of the above |
//! | `min` | `min` | text length `>= min` |
//! | `max` | `max` | text length `<= max` |
//! | `between` | `min,max` | both of the above |
//! | `in` | `v1,v2,...` | value loosely equals one of the params |
//! | `match` | `field` | value strictly equals the other field's value |
//! | `email` | | text is an email address |
//! | `ip` | `[v4\|v6]` | text is an IP address literal |
//! | `url` | | text is an absolute URL |
//! | `regex` | `pattern` | text matches the pattern |
//! | `date` | `[format]` | text is a date in the format |
//!
//! Text length is measured in the configured
//! [`LengthUnit`](crate::config::LengthUnit). Arrays and objects have no
//! text form and fail every text rule.

use serde_json::Value;

use crate::error::RuleError;
use crate::foundation::Validate;
use crate::registry::{RuleContext, RuleRegistry};
use crate::validators::{
    IpVersion, date_format, email, in_range, ip_address, matches_regex, max, min, numeric, one_of,
    required as required_value, url,
};

/// Adds every built-in rule to `registry`.
pub fn register_builtins(registry: &RuleRegistry) {
    registry.register("required", required);
    registry.register("numeric", is_numeric);
    registry.register("min_num", min_num);
    registry.register("max_num", max_num);
    registry.register("between_num", between_num);
    registry.register("min", min_len);
    registry.register("max", max_len);
    registry.register("between", between_len);
    registry.register("in", in_set);
    registry.register("match", matches_field);
    registry.register("email", is_email);
    registry.register("ip", is_ip);
    registry.register("url", is_url);
    registry.register("regex", matches_pattern);
    registry.register("date", is_date);
}

type RuleResult = Result<bool, RuleError>;

// ==================== Presence & numbers ====================

fn required(ctx: &RuleContext<'_>) -> RuleResult {
    Ok(required_value().is_valid(ctx.value))
}

fn is_numeric(ctx: &RuleContext<'_>) -> RuleResult {
    Ok(match ctx.value {
        Value::Number(_) => true,
        Value::String(s) => numeric().is_valid(s),
        _ => false,
    })
}

fn min_num(ctx: &RuleContext<'_>) -> RuleResult {
    let threshold = ctx.number_param(0)?;
    Ok(ctx.number().is_some_and(|n| min(threshold).is_valid(&n)))
}

fn max_num(ctx: &RuleContext<'_>) -> RuleResult {
    let threshold = ctx.number_param(0)?;
    Ok(ctx.number().is_some_and(|n| max(threshold).is_valid(&n)))
}

fn between_num(ctx: &RuleContext<'_>) -> RuleResult {
    let (lo, hi) = (ctx.number_param(0)?, ctx.number_param(1)?);
    Ok(ctx.number().is_some_and(|n| in_range(lo, hi).is_valid(&n)))
}

// ==================== Length ====================

fn text_length(ctx: &RuleContext<'_>) -> Option<f64> {
    ctx.text().map(|text| ctx.config.length_unit.measure(&text) as f64)
}

fn min_len(ctx: &RuleContext<'_>) -> RuleResult {
    let threshold = ctx.number_param(0)?;
    Ok(text_length(ctx).is_some_and(|len| min(threshold).is_valid(&len)))
}

fn max_len(ctx: &RuleContext<'_>) -> RuleResult {
    let threshold = ctx.number_param(0)?;
    Ok(text_length(ctx).is_some_and(|len| max(threshold).is_valid(&len)))
}

fn between_len(ctx: &RuleContext<'_>) -> RuleResult {
    let (lo, hi) = (ctx.number_param(0)?, ctx.number_param(1)?);
    Ok(text_length(ctx).is_some_and(|len| in_range(lo, hi).is_valid(&len)))
}

// ==================== Sets & other fields ====================

fn in_set(ctx: &RuleContext<'_>) -> RuleResult {
    ctx.param(0)?;
    if ctx.text().is_none() {
        return Ok(false);
    }
    let allowed = ctx.params.iter().cloned().map(Value::String).collect();
    Ok(one_of(allowed).is_valid(ctx.value))
}

fn matches_field(ctx: &RuleContext<'_>) -> RuleResult {
    let other = ctx.param(0)?;
    let expected = ctx.record.get(other).unwrap_or(&Value::Null);
    Ok(ctx.value == expected)
}

// ==================== Formats ====================

fn is_email(ctx: &RuleContext<'_>) -> RuleResult {
    Ok(ctx.text().is_some_and(|text| email().is_valid(&text)))
}

fn is_ip(ctx: &RuleContext<'_>) -> RuleResult {
    let version = match ctx.params.first().map(String::as_str) {
        None => IpVersion::Any,
        Some(param) if param.eq_ignore_ascii_case("v4") => IpVersion::V4,
        Some(param) if param.eq_ignore_ascii_case("v6") => IpVersion::V6,
        Some(param) => {
            return Err(RuleError::InvalidParameter {
                rule: ctx.rule.to_owned(),
                param: param.to_owned(),
                expected: "'v4' or 'v6'",
            });
        }
    };
    Ok(ctx.text().is_some_and(|text| ip_address(version).is_valid(&text)))
}

fn is_url(ctx: &RuleContext<'_>) -> RuleResult {
    Ok(ctx.text().is_some_and(|text| url().is_valid(&text)))
}

fn matches_pattern(ctx: &RuleContext<'_>) -> RuleResult {
    let pattern = ctx.raw_param()?;
    let validator = matches_regex(pattern).map_err(|source| RuleError::InvalidPattern {
        pattern: pattern.to_owned(),
        source,
    })?;
    Ok(ctx.text().is_some_and(|text| validator.is_valid(&text)))
}

fn is_date(ctx: &RuleContext<'_>) -> RuleResult {
    let format = ctx.raw_params.unwrap_or(&ctx.config.date_format);
    Ok(ctx.text().is_some_and(|text| date_format(format).is_valid(&text)))
}
