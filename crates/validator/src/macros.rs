//! Macro for declaring typed validators with minimal boilerplate.
//!
//! [`validator!`] expands to a struct, its [`Validate`](crate::foundation::Validate)
//! implementation, a constructor and a factory function.
//!
//! ```rust,ignore
//! validator! {
//!     /// Validates that a value is at least a minimum.
//!     #[derive(Copy, PartialEq)]
//!     pub Min { min: f64 } for f64;
//!     rule(self, input) { *input >= self.min }
//!     error(self, input) { ValidationError::new("min", "too small") }
//!     fn min(min: f64);
//! }
//! ```

/// Declares a validator: struct, `Validate` impl, `new`, and a factory fn.
///
/// `#[derive(Debug, Clone)]` is always applied. Unit validators also derive
/// `Copy, PartialEq, Eq, Hash`.
///
/// # Variants
///
/// **Unit validator** (no fields):
/// ```rust,ignore
/// validator! {
///     pub Numeric for str;
///     rule(input) { is_numeric(input) }
///     error(input) { ValidationError::invalid_format("numeric") }
///     fn numeric();
/// }
/// ```
///
/// **Struct with fields** (`new` takes every field in order):
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq)]
///     pub InRange { min: f64, max: f64 } for f64;
///     rule(self, input) { *input >= self.min && *input <= self.max }
///     error(self, input) { ValidationError::out_of_range(self.min, self.max, *input) }
///     fn in_range(min: f64, max: f64);
/// }
/// ```
///
/// **Fallible constructor** (the type after `->` is the error type):
/// ```rust,ignore
/// validator! {
///     pub MatchesRegex { pattern: regex::Regex } for str;
///     rule(self, input) { self.pattern.is_match(input) }
///     error(self, input) { ValidationError::invalid_format("regex") }
///     new(pattern: &str) -> regex::Error { Ok(Self { pattern: regex::Regex::new(pattern)? }) }
///     fn matches_regex(pattern: &str) -> regex::Error;
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Internal: Validate impl shared by the struct variants ────────────
    (@impl $name:ident, $input:ty, $self_:ident, $inp:ident, $rule:block, $self2:ident, $einp:ident, $err:block) => {
        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }

            fn name(&self) -> &'static str {
                stringify!($name)
            }
        }
    };

    // ── Unit validator + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }

            fn name(&self) -> &'static str {
                stringify!($name)
            }
        }

        #[must_use]
        $vis const fn $factory() -> $name {
            $name
        }
    };

    // ── Struct with fields + fallible new + fallible factory ─────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $fety:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            /// Creates the validator, failing when the arguments are invalid.
            pub fn new($($narg: $naty),*) -> Result<Self, $ety> $new_body
        }

        $crate::validator!(@impl $name, $input, $self_, $inp, $rule, $self2, $einp, $err);

        $vis fn $factory($($farg: $faty),*) -> Result<$name, $fety> {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::validator!(@impl $name, $input, $self_, $inp, $rule, $self2, $einp, $err);

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),+ $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
            new($($field: $fty),+) { Self { $($field),+ } }
            fn $factory($($farg: $faty),+);
        }
    };
}
