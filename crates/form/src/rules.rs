//! Rule sets: which validators run on which field.
//!
//! Rules are usually loaded from JSON:
//!
//! ```json
//! {
//!   "email":  { "isEmpty": {}, "email": { "message": "Check the address" } },
//!   "pass":   { "password": { "min": 8 } },
//!   "avatar": { "image": { "maxWidth": 512, "size": "1MB", "type": "image/png" } }
//! }
//! ```
//!
//! Field order and validator order are preserved.

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use crate::options::ValidatorOptions;

/// Validator name -> options for one field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldRules(IndexMap<String, ValidatorOptions>);

impl FieldRules {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule, builder style. A repeated name replaces the earlier
    /// options but keeps its first position.
    #[must_use]
    pub fn rule(mut self, validator: impl Into<String>, options: impl Into<ValidatorOptions>) -> Self {
        self.0.insert(validator.into(), options.into());
        self
    }

    pub fn insert(&mut self, validator: impl Into<String>, options: impl Into<ValidatorOptions>) {
        self.0.insert(validator.into(), options.into());
    }

    #[must_use]
    pub fn get(&self, validator: &str) -> Option<&ValidatorOptions> {
        self.0.get(validator)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidatorOptions)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for FieldRules {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, serde_json::Value>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(name, options)| {
                ValidatorOptions::from_json(&name, options)
                    .map(|options| (name.clone(), options))
                    .map_err(|e| D::Error::custom(format!("options of `{name}`: {e}")))
            })
            .collect::<Result<IndexMap<_, _>, _>>()
            .map(Self)
    }
}

/// Field name -> rules for that field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct RuleSet(IndexMap<String, FieldRules>);

impl RuleSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the rules of a field, builder style.
    #[must_use]
    pub fn field(mut self, field: impl Into<String>, rules: FieldRules) -> Self {
        self.0.insert(field.into(), rules);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, rules: FieldRules) {
        self.0.insert(field.into(), rules);
    }

    /// Parses a rule set from a JSON value.
    pub fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldRules> {
        self.0.get(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldRules)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
