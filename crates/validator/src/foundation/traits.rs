//! The typed validation trait
//!
//! Built-in rules convert a record value into the input type of a
//! [`Validate`] implementation and delegate the actual check to it.

use crate::foundation::ValidationError;

/// A check over one typed input.
///
/// # Examples
///
/// ```
/// use tollgate_validator::foundation::{Validate, ValidationError};
///
/// struct Even;
///
/// impl Validate for Even {
///     type Input = i64;
///
///     fn validate(&self, input: &i64) -> Result<(), ValidationError> {
///         if input % 2 == 0 {
///             Ok(())
///         } else {
///             Err(ValidationError::new("even", "Value must be even"))
///         }
///     }
/// }
///
/// assert!(Even.is_valid(&4));
/// assert!(!Even.is_valid(&3));
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// `?Sized` so that `str` can be validated directly.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns `true` when [`validate`](Self::validate) succeeds.
    ///
    /// The failure is emitted as a `trace` event before being discarded.
    fn is_valid(&self, input: &Self::Input) -> bool {
        match self.validate(input) {
            Ok(()) => true,
            Err(error) => {
                tracing::trace!(validator = self.name(), %error, "check failed");
                false
            }
        }
    }

    /// Name used in log events.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
