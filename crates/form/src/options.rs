//! Typed option payloads for validators.
//!
//! Each built-in validator has its own option record. [`ValidatorOptions`]
//! is the tagged union the engine passes around; the tag is chosen by the
//! validator name a rule is declared under, so `"password": { "min": 8 }`
//! becomes [`ValidatorOptions::Password`] and an unknown name becomes
//! [`ValidatorOptions::Custom`] with the raw JSON kept for the custom
//! handler.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::collaborators::SizeLimit;
use crate::validators::names;
use crate::value::Value;

// ============================================================================
// BASE OPTIONS
// ============================================================================

/// Message overrides every option record carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BaseOptions {
    /// Replaces the default message of the validator.
    pub message: Option<String>,
    /// Per-check overrides for validators running several checks
    /// (`minWidth`, `size`, `type`, ...).
    pub message_option: IndexMap<String, String>,
}

impl BaseOptions {
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_check_message(mut self, check: impl Into<String>, message: impl Into<String>) -> Self {
        self.message_option.insert(check.into(), message.into());
        self
    }

    /// Resolves the message for a single-check validator.
    ///
    /// An empty override counts as absent.
    pub fn resolve(&self, default: impl FnOnce() -> String) -> String {
        match self.message.as_deref() {
            Some(message) if !message.is_empty() => message.to_owned(),
            _ => default(),
        }
    }

    /// Resolves the message for one check of a multi-check validator:
    /// the per-check override, then the general override, then the default.
    pub fn resolve_check(&self, check: &str, default: impl FnOnce() -> String) -> String {
        match self.message_option.get(check) {
            Some(message) if !message.is_empty() => message.clone(),
            _ => self.resolve(default),
        }
    }
}

// ============================================================================
// PER-VALIDATOR OPTIONS
// ============================================================================

/// Options of the `password` validator.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PasswordOptions {
    #[serde(flatten)]
    pub base: BaseOptions,
    pub min: usize,
    pub max: usize,
}

impl PasswordOptions {
    pub const DEFAULT_MIN: usize = 6;
    pub const DEFAULT_MAX: usize = 30;

    #[must_use]
    pub fn new(min: usize, max: usize) -> Self {
        Self {
            base: BaseOptions::default(),
            min,
            max,
        }
    }
}

impl Default for PasswordOptions {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN, Self::DEFAULT_MAX)
    }
}

/// Options of the `equal` validator.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EqualOptions {
    #[serde(flatten)]
    pub base: BaseOptions,
    /// The value the field must equal.
    pub equal: Value,
}

impl EqualOptions {
    #[must_use]
    pub fn new(equal: impl Into<Value>) -> Self {
        Self {
            base: BaseOptions::default(),
            equal: equal.into(),
        }
    }
}

/// Allowed MIME types: one comma-separated string or a list.
///
/// Each entry is a pattern, so `"image/"` admits every image type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TypeFilter {
    One(String),
    Many(Vec<String>),
}

impl TypeFilter {
    /// The individual patterns, trimmed, blanks dropped.
    #[must_use]
    pub fn patterns(&self) -> Vec<&str> {
        let raw: Vec<&str> = match self {
            Self::One(s) => s.split(',').collect(),
            Self::Many(items) => items.iter().map(String::as_str).collect(),
        };
        raw.into_iter()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}

impl From<&str> for TypeFilter {
    fn from(types: &str) -> Self {
        Self::One(types.to_owned())
    }
}

impl From<Vec<&str>> for TypeFilter {
    fn from(types: Vec<&str>) -> Self {
        Self::Many(types.into_iter().map(str::to_owned).collect())
    }
}

/// Options of the `image` validator. Unset checks are skipped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImageOptions {
    #[serde(flatten)]
    pub base: BaseOptions,
    pub min_width: Option<u32>,
    pub max_width: Option<u32>,
    pub min_height: Option<u32>,
    pub max_height: Option<u32>,
    /// Upper bound on the blob size.
    pub size: Option<SizeLimit>,
    /// Allowed MIME type patterns.
    #[serde(rename = "type")]
    pub mime_type: Option<TypeFilter>,
}

impl ImageOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn min_width(mut self, px: u32) -> Self {
        self.min_width = Some(px);
        self
    }

    #[must_use]
    pub fn max_width(mut self, px: u32) -> Self {
        self.max_width = Some(px);
        self
    }

    #[must_use]
    pub fn min_height(mut self, px: u32) -> Self {
        self.min_height = Some(px);
        self
    }

    #[must_use]
    pub fn max_height(mut self, px: u32) -> Self {
        self.max_height = Some(px);
        self
    }

    #[must_use]
    pub fn size(mut self, limit: impl Into<SizeLimit>) -> Self {
        self.size = Some(limit.into());
        self
    }

    #[must_use]
    pub fn mime_type(mut self, types: impl Into<TypeFilter>) -> Self {
        self.mime_type = Some(types.into());
        self
    }

    #[must_use]
    pub fn with_base(mut self, base: BaseOptions) -> Self {
        self.base = base;
        self
    }

    /// Whether any width or height bound is set.
    #[must_use]
    pub fn has_dimension_bounds(&self) -> bool {
        self.min_width.is_some()
            || self.max_width.is_some()
            || self.min_height.is_some()
            || self.max_height.is_some()
    }
}

/// Options of a handler registered at runtime. The raw payload is kept as
/// JSON; message overrides are lifted into `base` when present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomOptions {
    pub base: BaseOptions,
    pub raw: serde_json::Value,
}

impl CustomOptions {
    #[must_use]
    pub fn new(raw: serde_json::Value) -> Self {
        let base = BaseOptions::deserialize(&raw).unwrap_or_default();
        Self { base, raw }
    }

    /// Looks up a key of an object payload.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&serde_json::Value> {
        self.raw.get(key)
    }
}

// ============================================================================
// TAGGED UNION
// ============================================================================

/// Option payload of one rule, tagged by validator.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidatorOptions {
    IsEmpty(BaseOptions),
    Email(BaseOptions),
    Password(PasswordOptions),
    Equal(EqualOptions),
    Image(ImageOptions),
    Custom(CustomOptions),
}

impl ValidatorOptions {
    /// Default options of the `isEmpty` validator.
    #[must_use]
    pub fn is_empty() -> Self {
        Self::IsEmpty(BaseOptions::default())
    }

    /// Default options of the `email` validator.
    #[must_use]
    pub fn email() -> Self {
        Self::Email(BaseOptions::default())
    }

    /// Default options of the `password` validator.
    #[must_use]
    pub fn password() -> Self {
        Self::Password(PasswordOptions::default())
    }

    #[must_use]
    pub fn equal(value: impl Into<Value>) -> Self {
        Self::Equal(EqualOptions::new(value))
    }

    #[must_use]
    pub fn custom(raw: serde_json::Value) -> Self {
        Self::Custom(CustomOptions::new(raw))
    }

    /// Builds the payload for a rule declared under `name`.
    ///
    /// `null` and `true` stand for "no options".
    pub fn from_json(name: &str, raw: serde_json::Value) -> Result<Self, serde_json::Error> {
        let raw = match raw {
            serde_json::Value::Null | serde_json::Value::Bool(true) => {
                serde_json::Value::Object(serde_json::Map::new())
            }
            other => other,
        };
        Ok(match name {
            names::IS_EMPTY => Self::IsEmpty(serde_json::from_value(raw)?),
            names::EMAIL => Self::Email(serde_json::from_value(raw)?),
            names::PASSWORD => Self::Password(serde_json::from_value(raw)?),
            names::EQUAL => Self::Equal(serde_json::from_value(raw)?),
            names::IMAGE => Self::Image(serde_json::from_value(raw)?),
            _ => Self::Custom(CustomOptions::new(raw)),
        })
    }

    /// Name of the variant, matching the built-in validator names.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::IsEmpty(_) => names::IS_EMPTY,
            Self::Email(_) => names::EMAIL,
            Self::Password(_) => names::PASSWORD,
            Self::Equal(_) => names::EQUAL,
            Self::Image(_) => names::IMAGE,
            Self::Custom(_) => "custom",
        }
    }

    /// Message overrides, whatever the variant.
    #[must_use]
    pub fn base(&self) -> &BaseOptions {
        match self {
            Self::IsEmpty(base) | Self::Email(base) => base,
            Self::Password(o) => &o.base,
            Self::Equal(o) => &o.base,
            Self::Image(o) => &o.base,
            Self::Custom(o) => &o.base,
        }
    }
}

impl From<PasswordOptions> for ValidatorOptions {
    fn from(options: PasswordOptions) -> Self {
        Self::Password(options)
    }
}

impl From<EqualOptions> for ValidatorOptions {
    fn from(options: EqualOptions) -> Self {
        Self::Equal(options)
    }
}

impl From<ImageOptions> for ValidatorOptions {
    fn from(options: ImageOptions) -> Self {
        Self::Image(options)
    }
}

impl From<CustomOptions> for ValidatorOptions {
    fn from(options: CustomOptions) -> Self {
        Self::Custom(options)
    }
}

// ============================================================================
// EXTRACTION
// ============================================================================

/// Borrows a typed record out of [`ValidatorOptions`].
///
/// A payload of another variant yields the defaults of the requested record
/// with the message overrides carried over.
pub trait FromOptions: Clone {
    fn from_options(options: &ValidatorOptions) -> Cow<'_, Self>;

    fn base(&self) -> &BaseOptions;
}

impl FromOptions for BaseOptions {
    fn from_options(options: &ValidatorOptions) -> Cow<'_, Self> {
        Cow::Borrowed(options.base())
    }

    fn base(&self) -> &BaseOptions {
        self
    }
}

impl FromOptions for PasswordOptions {
    fn from_options(options: &ValidatorOptions) -> Cow<'_, Self> {
        match options {
            ValidatorOptions::Password(o) => Cow::Borrowed(o),
            other => Cow::Owned(Self {
                base: other.base().clone(),
                ..Self::default()
            }),
        }
    }

    fn base(&self) -> &BaseOptions {
        &self.base
    }
}

impl FromOptions for EqualOptions {
    fn from_options(options: &ValidatorOptions) -> Cow<'_, Self> {
        match options {
            ValidatorOptions::Equal(o) => Cow::Borrowed(o),
            other => Cow::Owned(Self {
                base: other.base().clone(),
                ..Self::default()
            }),
        }
    }

    fn base(&self) -> &BaseOptions {
        &self.base
    }
}

impl FromOptions for ImageOptions {
    fn from_options(options: &ValidatorOptions) -> Cow<'_, Self> {
        match options {
            ValidatorOptions::Image(o) => Cow::Borrowed(o),
            other => Cow::Owned(Self::new().with_base(other.base().clone())),
        }
    }

    fn base(&self) -> &BaseOptions {
        &self.base
    }
}
