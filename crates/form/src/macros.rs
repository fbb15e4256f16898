//! Macros for declaring synchronous validators with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`validator!`]: create a complete validator (unit struct + `Validate`
//!   impl + factory fn)
//!
//! # Examples
//!
//! ```rust,ignore
//! use nebula_form::validator;
//! use nebula_form::options::BaseOptions;
//!
//! validator! {
//!     /// Rejects blank text.
//!     pub NotBlank => "notBlank";
//!     options(opts: BaseOptions);
//!     rule(value) { !value.to_string().trim().is_empty() }
//!     message { "must not be blank".to_owned() }
//!     fn not_blank();
//! }
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a complete synchronous validator: a unit struct carrying its
/// registry name, a `Validate` implementation, and a factory function.
///
/// `#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]` is always
/// applied.
///
/// - `options(ident: Type)` binds the typed option record (any
///   [`FromOptions`](crate::options::FromOptions) type) for use in `rule` and
///   `message`.
/// - `rule(value) { .. }` returns `true` when the value is valid.
/// - `message { .. }` builds the default message. A non-empty `message`
///   override in the options replaces it.
#[macro_export]
macro_rules! validator {
    // ── Unit validator + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident => $key:literal;
        options($opts:ident: $oty:ty);
        rule($value:ident) $rule:block
        message $msg:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name => $key;
            options($opts: $oty);
            rule($value) $rule
            message $msg
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator, no factory ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident => $key:literal;
        options($opts:ident: $oty:ty);
        rule($value:ident) $rule:block
        message $msg:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $name {
            /// Name the validator is registered under.
            pub const NAME: &'static str = $key;
        }

        impl $crate::handler::Validate for $name {
            #[allow(unused_variables)]
            fn validate(
                &self,
                $value: &$crate::value::Value,
                options: &$crate::options::ValidatorOptions,
            ) -> $crate::handler::Verdict {
                let $opts = <$oty as $crate::options::FromOptions>::from_options(options);
                let $opts: &$oty = &$opts;
                if $rule {
                    $crate::handler::Verdict::Valid
                } else {
                    $crate::handler::Verdict::Message(
                        $crate::options::FromOptions::base($opts).resolve(|| $msg),
                    )
                }
            }
        }
    };
}
