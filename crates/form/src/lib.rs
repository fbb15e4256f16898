//! # nebula-form
//!
//! Rule-driven form validation for Nebula front ends and workflow inputs.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nebula_form::prelude::*;
//!
//! let rules = RuleSet::from_json(serde_json::json!({
//!     "email": { "isEmpty": {}, "email": {} },
//!     "pass":  { "password": { "min": 8 } }
//! }))?;
//! let model = Model::new().with("email", "bad").with("pass", "abc12345");
//!
//! let validator = Validator::new(model, Some(rules));
//! let errors = validator.validate(None).await;
//! assert_eq!(errors.get("email").map(<[_]>::len), Some(1));
//! ```
//!
//! ## Building Blocks
//!
//! - [`value`]: the dynamic [`Value`](value::Value) model and the form
//!   [`Model`](value::Model)
//! - [`predicates`]: emptiness, text pattern and class checks
//! - [`validators`]: built-in `isEmpty`, `email`, `password`, `equal` and
//!   `image`
//! - [`engine`]: the [`Validator`](engine::Validator) engine
//! - [`collaborators`]: host capabilities (diagnostics, image decoding, ...)
//!
//! ## Creating Validators
//!
//! Register any closure `Fn(&Value, &ValidatorOptions) -> Verdict` or an
//! [`AsyncValidate`](handler::AsyncValidate) implementation with
//! [`Validator::set_validator_handler`](engine::Validator::set_validator_handler),
//! or declare a reusable one with [`validator!`].

pub mod collaborators;
pub mod engine;
pub mod error;
pub mod field_errors;
pub mod handler;
mod macros;
pub mod options;
pub mod predicates;
pub mod prelude;
pub mod registry;
pub mod rules;
pub mod validators;
pub mod value;
