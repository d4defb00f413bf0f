//! Explicit name → value registries
//!
//! Evaluation functions and feature extractors are chosen by name on the
//! command line and in configuration files. A [`Registry`] is populated once
//! at startup and resolves those names to statically typed values.

use std::collections::BTreeMap;

use crate::{Error, Result};

/// String-keyed registry of values of one kind.
#[derive(Clone)]
pub struct Registry<T> {
    kind: &'static str,
    entries: BTreeMap<String, T>,
}

impl<T> Registry<T> {
    /// Create an empty registry; `kind` names the entries in error messages.
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            entries: BTreeMap::new(),
        }
    }

    /// Register `value` under `name`, returning the entry it replaced.
    pub fn register(&mut self, name: impl Into<String>, value: T) -> Option<T> {
        self.entries.insert(name.into(), value)
    }

    /// Builder-style [`Registry::register`].
    pub fn with(mut self, name: impl Into<String>, value: T) -> Self {
        self.register(name, value);
        self
    }

    /// Look up `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEntry`] listing the registered names.
    pub fn resolve(&self, name: &str) -> Result<&T> {
        self.entries.get(name).ok_or_else(|| Error::UnknownEntry {
            kind: self.kind.to_string(),
            name: name.to_string(),
            available: self.names().collect::<Vec<_>>().join(", "),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> std::fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("kind", &self.kind)
            .field("names", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
