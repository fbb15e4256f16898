//! Prelude module for convenient imports.
//!
//! `use nebula_form::prelude::*;` brings in the engine, the value model, the
//! option records and the built-in validators.

// ============================================================================
// ENGINE
// ============================================================================

pub use crate::engine::Validator;
pub use crate::field_errors::FieldErrors;
pub use crate::registry::Registry;
pub use crate::rules::{FieldRules, RuleSet};

// ============================================================================
// VALUES & OPTIONS
// ============================================================================

pub use crate::options::{
    BaseOptions, CustomOptions, EqualOptions, FromOptions, ImageOptions, PasswordOptions,
    TypeFilter, ValidatorOptions,
};
pub use crate::value::{Blob, FunctionRef, Model, Object, Value};

// ============================================================================
// HANDLERS & VALIDATORS
// ============================================================================

pub use crate::handler::{AsyncValidate, Handler, Validate, Verdict};
pub use crate::predicates::{
    TextPattern, is_class, is_dark_mode, is_empty, is_text_excludes, is_text_includes,
};
pub use crate::validators::{
    Email, Equal, ImageValidator, NotEmpty, Password, email, equal, not_empty, password,
};

// ============================================================================
// COLLABORATORS
// ============================================================================

pub use crate::collaborators::{
    AppearanceQuery, BlobEncoder, Collaborators, DiagnosticSink, ImageDecoder, SizeLimit,
    SizeParser,
};
pub use crate::error::{CollaboratorError, SizeParseError};
