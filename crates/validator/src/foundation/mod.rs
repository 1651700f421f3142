//! Typed validation building blocks
//!
//! - **Trait**: [`Validate`], a check over one typed input
//! - **Error**: [`ValidationError`], the structured reason a check failed
//!
//! Rules work on loosely typed record values; validators work on concrete
//! Rust types (`str`, `f64`, `serde_json::Value`). Keeping the two apart
//! lets every check be unit-tested without a record or a registry.
//!
//! ```
//! use tollgate_validator::foundation::Validate;
//! use tollgate_validator::validators::in_range;
//!
//! let adult = in_range(18.0, 65.0);
//! assert!(adult.validate(&30.0).is_ok());
//! assert!(adult.validate(&15.0).is_err());
//! ```

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::Validate;
