//! Name -> validator table.
//!
//! Each engine owns one registry; there is no process-wide table. Registering
//! a name that already exists replaces the previous handler.

use indexmap::IndexMap;

use crate::collaborators::Collaborators;
use crate::handler::Handler;
use crate::validators::{self, ImageValidator, names};

#[derive(Debug, Clone, Default)]
pub struct Registry {
    handlers: IndexMap<String, Handler>,
}

impl Registry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry seeded with `isEmpty`, `email`, `password`, `equal` and
    /// `image`.
    #[must_use]
    pub fn with_builtins(collaborators: &Collaborators) -> Self {
        let mut registry = Self::new();
        registry.register(names::IS_EMPTY, Handler::sync(validators::not_empty()));
        registry.register(names::EMAIL, Handler::sync(validators::email()));
        registry.register(names::PASSWORD, Handler::sync(validators::password()));
        registry.register(names::EQUAL, Handler::sync(validators::equal()));
        registry.register(
            names::IMAGE,
            Handler::from_async(ImageValidator::new(collaborators)),
        );
        registry
    }

    /// Registers `handler` under `name`, returning the handler it replaced.
    pub fn register(&mut self, name: impl Into<String>, handler: impl Into<Handler>) -> Option<Handler> {
        let name = name.into();
        tracing::debug!(validator = %name, "registering validator");
        self.handlers.insert(name, handler.into())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Handler> {
        self.handlers.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
