//! The key→binding registry
//!
//! One context is owned by exactly one application. All mutation funnels
//! through [`Context::add`]; lookups run by key or by tag; resolution
//! flows through the bindings themselves and is memoized there.

use std::any::type_name;
use std::sync::Arc;

use bindery_domain::{ContextView, Error, Result, Value};
use dashmap::DashMap;
use regex::Regex;
use tracing::{debug, warn};

use crate::binding::Binding;

/// Registry of bindings for one application.
#[derive(Default)]
pub struct Context {
    bindings: DashMap<String, Arc<Binding>>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a binding, taking ownership.
    ///
    /// Adding is idempotent with respect to keys: registering a second
    /// binding under an existing key replaces the first (last write
    /// wins). The replacement is logged, never silent.
    pub fn add(&self, binding: Binding) -> Arc<Binding> {
        self.add_shared(Arc::new(binding))
    }

    /// Register a pre-built shared binding verbatim, preserving the key
    /// and tags it already carries.
    pub fn add_shared(&self, binding: Arc<Binding>) -> Arc<Binding> {
        let key = binding.key().to_string();
        if self.bindings.insert(key, Arc::clone(&binding)).is_some() {
            warn!(key = %binding.key(), "replaced existing binding");
        } else {
            debug!(key = %binding.key(), "registered binding");
        }
        binding
    }

    /// Whether a binding exists under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.bindings.contains_key(key)
    }

    /// The binding registered under `key`.
    pub fn get_binding(&self, key: &str) -> Result<Arc<Binding>> {
        self.bindings
            .get(key)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| Error::BindingNotFound {
                key: key.to_string(),
            })
    }

    /// Every binding carrying exactly `tag`.
    pub fn find_by_tag(&self, tag: &str) -> Vec<Arc<Binding>> {
        self.bindings
            .iter()
            .filter(|entry| entry.value().has_tag(tag))
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    /// Every binding with at least one tag matching `pattern`.
    pub fn find_by_tag_matching(&self, pattern: &Regex) -> Vec<Arc<Binding>> {
        self.bindings
            .iter()
            .filter(|entry| entry.value().tags().iter().any(|tag| pattern.is_match(tag)))
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    /// Resolve the value bound under `key`.
    pub fn get_value(&self, key: &str) -> Result<Value> {
        let binding = self.get_binding(key)?;
        binding.resolve(self)
    }

    /// Resolve the value bound under `key` and downcast it to `T`.
    pub fn get<T: Send + Sync + 'static>(&self, key: &str) -> Result<Arc<T>> {
        let value = self.get_value(key)?;
        value.downcast::<T>().map_err(|_| Error::TypeMismatch {
            key: key.to_string(),
            expected: type_name::<T>(),
        })
    }

    /// Every registered key.
    pub fn keys(&self) -> Vec<String> {
        self.bindings.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the context holds no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl ContextView for Context {
    fn get_value(&self, key: &str) -> Result<Value> {
        Self::get_value(self, key)
    }

    fn contains(&self, key: &str) -> bool {
        Self::contains(self, key)
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("binding_count", &self.bindings.len())
            .finish()
    }
}
