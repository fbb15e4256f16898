//! The validation engine.
//!
//! A [`Validator`] binds a [`Model`] to a [`RuleSet`], owns its own validator
//! table and remembers the outcome of the most recent run.
//!
//! ```rust,ignore
//! use nebula_form::prelude::*;
//!
//! let model = Model::new().with("email", "bad").with("pass", "abc123");
//! let rules = RuleSet::new()
//!     .field("email", FieldRules::new().rule("email", ValidatorOptions::email()))
//!     .field("pass", FieldRules::new().rule("password", ValidatorOptions::password()));
//!
//! let validator = Validator::new(model, Some(rules));
//! let errors = validator.validate(None).await;
//!
//! assert_eq!(errors.get("pass"), None);
//! assert!(validator.is_valid(Some("email"))); // true means "has errors"
//! ```

use std::sync::Arc;

use parking_lot::RwLock;

use crate::collaborators::{Collaborators, DiagnosticSink};
use crate::field_errors::FieldErrors;
use crate::handler::Handler;
use crate::registry::Registry;
use crate::rules::{FieldRules, RuleSet};
use crate::value::{Model, Value};

/// Validates a model against per-field rules.
///
/// All methods take `&self`. Two overlapping [`validate`](Self::validate)
/// calls share the stored errors: each field holds whatever the last call to
/// finish that field wrote. Use one engine per concurrent caller when that
/// matters.
pub struct Validator {
    model: Model,
    rules: Option<RuleSet>,
    registry: RwLock<Registry>,
    errors: RwLock<FieldErrors>,
    sink: Arc<dyn DiagnosticSink>,
}

impl Validator {
    /// Creates an engine with the built-in validators and default
    /// collaborators.
    pub fn new(model: impl Into<Model>, rules: Option<RuleSet>) -> Self {
        Self::with_collaborators(model, rules, Collaborators::default())
    }

    pub fn with_collaborators(
        model: impl Into<Model>,
        rules: Option<RuleSet>,
        collaborators: Collaborators,
    ) -> Self {
        Self {
            model: model.into(),
            rules,
            registry: RwLock::new(Registry::with_builtins(&collaborators)),
            errors: RwLock::new(FieldErrors::new()),
            sink: collaborators.sink,
        }
    }

    #[must_use]
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Rules captured at construction.
    #[must_use]
    pub fn rules(&self) -> Option<&RuleSet> {
        self.rules.as_ref()
    }

    /// Validates every model field that has rules.
    ///
    /// `rules` overrides the rules captured at construction. Fields are
    /// visited in model order; model fields without rules and rule entries
    /// without a model field are ignored. Each field maps to `None` when it
    /// passed, otherwise to its messages.
    ///
    /// The stored errors are cleared when the call starts and each field is
    /// stored as soon as it completes. A missing rule set or an empty model is
    /// reported to the diagnostic sink and yields an empty result.
    pub async fn validate(&self, rules: Option<&RuleSet>) -> FieldErrors {
        let Some(rules) = rules.or(self.rules.as_ref()) else {
            self.sink.warn("no rule set to validate against");
            self.errors.write().clear();
            return FieldErrors::new();
        };
        if self.model.is_empty() {
            self.sink.warn("validating an empty model");
        }

        self.errors.write().clear();
        let mut result = FieldErrors::new();
        for (field, value) in self.model.iter() {
            let Some(field_rules) = rules.get(field) else {
                continue;
            };
            let messages = self.validate_field(value, Some(field_rules)).await;
            tracing::debug!(
                field = %field,
                errors = messages.as_ref().map_or(0, Vec::len),
                "field validated"
            );
            self.errors.write().insert(field.as_str(), messages.clone());
            result.insert(field.as_str(), messages);
        }
        result
    }

    /// Runs the validators of one field in declaration order and collects
    /// their non-empty messages.
    ///
    /// Returns `None` when nothing failed. Unknown validator names are
    /// reported and skipped. Handlers are looked up as each one is reached,
    /// so a handler registered mid-run applies to the validators not yet
    /// started.
    pub async fn validate_field(
        &self,
        value: &Value,
        field_rules: Option<&FieldRules>,
    ) -> Option<Vec<String>> {
        let Some(field_rules) = field_rules else {
            self.sink.warn("no rules given for field");
            return None;
        };

        let mut messages = Vec::new();
        for (name, options) in field_rules.iter() {
            let handler = self.registry.read().get(name).cloned();
            let Some(handler) = handler else {
                self.sink
                    .warn(&format!("unknown validator `{name}`; skipping"));
                continue;
            };
            let verdict = handler.run(value, options).await;
            messages.extend(verdict.into_messages().into_iter().filter(|m| !m.is_empty()));
        }

        (!messages.is_empty()).then_some(messages)
    }

    /// Registers or replaces the validator called `name`.
    pub fn set_validator_handler(&self, name: impl Into<String>, handler: impl Into<Handler>) {
        self.registry.write().register(name, handler);
    }

    #[must_use]
    pub fn has_validator(&self, name: &str) -> bool {
        self.registry.read().contains(name)
    }

    /// Registered validator names in registration order.
    #[must_use]
    pub fn validator_names(&self) -> Vec<String> {
        self.registry.read().names().map(str::to_owned).collect()
    }

    /// Stored messages, field order first.
    #[must_use]
    pub fn errors_to_array(&self) -> Vec<String> {
        self.errors.read().to_array()
    }

    /// A copy of the stored errors. Changing it does not affect the engine.
    #[must_use]
    pub fn get_errors(&self) -> FieldErrors {
        self.errors.read().clone()
    }

    /// **Returns `true` when there ARE errors.**
    ///
    /// With a field name: whether that field currently has messages. Without
    /// one: whether any field does. Read the result as "is invalid".
    #[must_use]
    pub fn is_valid(&self, field: Option<&str>) -> bool {
        let errors = self.errors.read();
        match field {
            Some(field) => errors.get(field).is_some_and(|m| !m.is_empty()),
            None => !errors.to_array().is_empty(),
        }
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("model", &self.model)
            .field("rules", &self.rules)
            .field("registry", &*self.registry.read())
            .field("errors", &*self.errors.read())
            .finish_non_exhaustive()
    }
}
