//! Built-in typed validators
//!
//! Each validator checks one concrete Rust type. The built-in rules in
//! [`crate::rules`] coerce record values and delegate here.
//!
//! # Categories
//!
//! - **Presence**: [`Required`]
//! - **Numeric**: [`Numeric`], [`Min`], [`Max`], [`InRange`]
//! - **Content**: [`Email`], [`Url`], [`MatchesRegex`]
//! - **Network**: [`IpAddress`]
//! - **Date**: [`DateFormat`]
//! - **Logical**: [`IsTrue`], [`IsFalse`], [`Truthy`], [`Falsy`], [`LooseEq`], [`OneOf`]
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use tollgate_validator::foundation::Validate;
//! use tollgate_validator::validators::{email, in_range, one_of};
//!
//! assert!(email().validate("a@b.com").is_ok());
//! assert!(in_range(18.0, 65.0).validate(&15.0).is_err());
//! assert!(one_of(vec![json!("red"), json!("blue")]).validate(&json!("red")).is_ok());
//! ```

pub mod content;
pub mod date;
pub mod logical;
pub mod network;
pub mod numeric;
pub mod presence;

pub use content::{Email, MatchesRegex, PatternError, Url, email, matches_regex, url};
pub use date::{DateFormat, date_format, to_strftime};
pub use logical::{
    Falsy, IsFalse, IsTrue, LooseEq, OneOf, Truthy, falsy, is_false, is_true, loose_equals, one_of,
    truthy,
};
pub use network::{IpAddress, IpVersion, ip_address};
pub use numeric::{InRange, Max, Min, Numeric, in_range, is_numeric, max, min, numeric, parse_number};
pub use presence::{Required, is_blank, required};
