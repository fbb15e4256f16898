//! Validator traits and the handler type the registry stores.
//!
//! A validator takes a value and its option payload and returns a
//! [`Verdict`]. Synchronous validators implement [`Validate`] (closures do so
//! automatically); validators that need to suspend, such as the image
//! validator, implement [`AsyncValidate`]. [`Handler`] erases the difference
//! so the engine can run both the same way.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::options::ValidatorOptions;
use crate::value::Value;

// ============================================================================
// VERDICT
// ============================================================================

/// Outcome of one validator run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Verdict {
    #[default]
    Valid,
    Message(String),
    Messages(Vec<String>),
}

impl Verdict {
    /// `Valid` for an empty list, `Messages` otherwise.
    #[must_use]
    pub fn from_messages(messages: Vec<String>) -> Self {
        if messages.is_empty() {
            Self::Valid
        } else {
            Self::Messages(messages)
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Flattens into a list; `Valid` yields an empty list.
    #[must_use]
    pub fn into_messages(self) -> Vec<String> {
        match self {
            Self::Valid => Vec::new(),
            Self::Message(message) => vec![message],
            Self::Messages(messages) => messages,
        }
    }
}

impl From<String> for Verdict {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<&str> for Verdict {
    fn from(message: &str) -> Self {
        Self::Message(message.to_owned())
    }
}

impl From<Option<String>> for Verdict {
    fn from(message: Option<String>) -> Self {
        message.map_or(Self::Valid, Self::Message)
    }
}

impl From<Vec<String>> for Verdict {
    fn from(messages: Vec<String>) -> Self {
        Self::from_messages(messages)
    }
}

// ============================================================================
// TRAITS
// ============================================================================

/// A synchronous validator.
pub trait Validate: Send + Sync {
    fn validate(&self, value: &Value, options: &ValidatorOptions) -> Verdict;
}

impl<F> Validate for F
where
    F: Fn(&Value, &ValidatorOptions) -> Verdict + Send + Sync,
{
    fn validate(&self, value: &Value, options: &ValidatorOptions) -> Verdict {
        self(value, options)
    }
}

/// A validator that may suspend before producing its verdict.
#[async_trait]
pub trait AsyncValidate: Send + Sync {
    async fn validate(&self, value: &Value, options: &ValidatorOptions) -> Verdict;
}

// ============================================================================
// HANDLER
// ============================================================================

/// A registered validator, synchronous or asynchronous.
#[derive(Clone)]
pub enum Handler {
    Sync(Arc<dyn Validate>),
    Async(Arc<dyn AsyncValidate>),
}

impl Handler {
    pub fn sync(validator: impl Validate + 'static) -> Self {
        Self::Sync(Arc::new(validator))
    }

    pub fn from_async(validator: impl AsyncValidate + 'static) -> Self {
        Self::Async(Arc::new(validator))
    }

    #[must_use]
    pub fn is_async(&self) -> bool {
        matches!(self, Self::Async(_))
    }

    /// Runs the validator, awaiting it when asynchronous.
    pub async fn run(&self, value: &Value, options: &ValidatorOptions) -> Verdict {
        match self {
            Self::Sync(validator) => validator.validate(value, options),
            Self::Async(validator) => validator.validate(value, options).await,
        }
    }
}

impl From<Arc<dyn Validate>> for Handler {
    fn from(validator: Arc<dyn Validate>) -> Self {
        Self::Sync(validator)
    }
}

impl From<Arc<dyn AsyncValidate>> for Handler {
    fn from(validator: Arc<dyn AsyncValidate>) -> Self {
        Self::Async(validator)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sync(_) => f.write_str("Handler::Sync"),
            Self::Async(_) => f.write_str("Handler::Async"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Slow;

    #[async_trait]
    impl AsyncValidate for Slow {
        async fn validate(&self, value: &Value, _options: &ValidatorOptions) -> Verdict {
            tokio::task::yield_now().await;
            if value.is_truthy() {
                Verdict::Valid
            } else {
                "falsy".into()
            }
        }
    }

    #[test]
    fn test_verdict_flattening() {
        assert!(Verdict::Valid.into_messages().is_empty());
        assert_eq!(Verdict::from("a").into_messages(), ["a"]);
        assert_eq!(
            Verdict::from(vec!["a".to_owned(), "b".to_owned()]).into_messages(),
            ["a", "b"]
        );
        assert_eq!(Verdict::from(Vec::new()), Verdict::Valid);
        assert_eq!(Verdict::from(None), Verdict::Valid);
    }

    #[tokio::test]
    async fn test_sync_closure_handler() {
        let handler = Handler::sync(|value: &Value, _: &ValidatorOptions| {
            Verdict::from((!value.is_truthy()).then(|| "required".to_owned()))
        });
        let opts = ValidatorOptions::custom(serde_json::Value::Null);

        assert!(!handler.is_async());
        assert_eq!(handler.run(&Value::from(1), &opts).await, Verdict::Valid);
        assert_eq!(
            handler.run(&Value::Null, &opts).await,
            Verdict::Message("required".into())
        );
    }

    #[tokio::test]
    async fn test_async_handler() {
        let handler = Handler::from_async(Slow);
        let opts = ValidatorOptions::custom(serde_json::Value::Null);

        assert!(handler.is_async());
        assert_eq!(handler.run(&Value::from("x"), &opts).await, Verdict::Valid);
        assert_eq!(
            handler.run(&Value::from(""), &opts).await,
            Verdict::Message("falsy".into())
        );
    }
}
