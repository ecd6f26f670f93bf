//! Binding construction and resolution
//!
//! A binding associates a key with a resolution strategy and a set of
//! tags. Construction is fluent and consuming; the binding is inert until
//! it is registered with a context and resolved through it.

use std::any::Any;
use std::collections::BTreeSet;
use std::sync::{Arc, OnceLock};

use bindery_domain::{ClassRef, ContextView, Error, ProviderRef, Result, ServerRef, Value};
use serde::Serialize;
use tracing::debug;

/// Factory for computed values.
pub type DynamicFactory = Box<dyn Fn(&dyn ContextView) -> Result<Value> + Send + Sync>;

/// How a binding produces its value when resolved.
pub enum BindingSource {
    /// A fixed value supplied at bind time.
    Constant(Value),
    /// Deferred construction of a plain class.
    Class(ClassRef),
    /// Construction of a provider whose `value()` supplies the result.
    Provider(ProviderRef),
    /// Construction of a server, held resolvable for lifecycle orchestration.
    Server(ServerRef),
    /// A computed value.
    Dynamic(DynamicFactory),
    /// No source attached yet; resolving is an error.
    Unbound,
}

impl BindingSource {
    fn kind(&self) -> &'static str {
        match self {
            Self::Constant(_) => "constant",
            Self::Class(_) => "class",
            Self::Provider(_) => "provider",
            Self::Server(_) => "server",
            Self::Dynamic(_) => "dynamic",
            Self::Unbound => "unbound",
        }
    }
}

/// A key→resolution-strategy association held by an application's registry.
///
/// The resolved value is memoized: the first successful resolution wins
/// and every later get observes the same instance, so a started server
/// and the server returned by a later lookup are one object.
pub struct Binding {
    key: String,
    tags: BTreeSet<String>,
    source: BindingSource,
    resolved: OnceLock<Value>,
}

impl Binding {
    /// Start a binding for `key`. The result has no value source until
    /// one of the `to*` methods attaches one.
    pub fn bind(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            tags: BTreeSet::new(),
            source: BindingSource::Unbound,
            resolved: OnceLock::new(),
        }
    }

    /// Bind to a constant value.
    pub fn to(mut self, value: impl Any + Send + Sync) -> Self {
        self.source = BindingSource::Constant(Arc::new(value));
        self
    }

    /// Bind to an already type-erased shared value.
    pub fn to_value(mut self, value: Value) -> Self {
        self.source = BindingSource::Constant(value);
        self
    }

    /// Bind to a class, constructed when the binding first resolves.
    pub fn to_class(mut self, class: ClassRef) -> Self {
        self.source = BindingSource::Class(class);
        self
    }

    /// Bind to a provider; resolution constructs the provider and returns
    /// exactly what its `value()` returns.
    pub fn to_provider(mut self, provider: ProviderRef) -> Self {
        self.source = BindingSource::Provider(provider);
        self
    }

    /// Bind to a server; the resolved value holds the live server.
    pub fn to_server(mut self, server: ServerRef) -> Self {
        self.source = BindingSource::Server(server);
        self
    }

    /// Bind to a computed value.
    pub fn to_dynamic(
        mut self,
        factory: impl Fn(&dyn ContextView) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        self.source = BindingSource::Dynamic(Box::new(factory));
        self
    }

    /// Add a categorical tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        let _ = self.tags.insert(tag.into());
        self
    }

    /// Add several tags at once.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// The binding key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The binding's tag set.
    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Whether the binding carries `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// The class reference this binding constructs, for introspection.
    /// `None` for non-class sources.
    pub fn value_constructor(&self) -> Option<ClassRef> {
        match &self.source {
            BindingSource::Class(class) => Some(*class),
            _ => None,
        }
    }

    /// The source this binding resolves through.
    pub fn source(&self) -> &BindingSource {
        &self.source
    }

    /// Whether the binding has already resolved to a value.
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    /// Resolve the bound value, constructing it on first use.
    ///
    /// Malformed contents surface here, not at registration: an unbound
    /// binding or a failing factory is a resolution-time error.
    pub fn resolve(&self, ctx: &dyn ContextView) -> Result<Value> {
        if let Some(value) = self.resolved.get() {
            return Ok(value.clone());
        }

        let value = match &self.source {
            BindingSource::Constant(value) => value.clone(),
            BindingSource::Class(class) => (class.construct)(ctx)?,
            BindingSource::Provider(provider) => {
                let instance = (provider.construct)(ctx)?;
                instance.value()?
            }
            BindingSource::Server(server) => {
                let instance = (server.construct)(ctx)?;
                Arc::new(instance) as Value
            }
            BindingSource::Dynamic(factory) => factory(ctx)?,
            BindingSource::Unbound => {
                return Err(Error::Unbound {
                    key: self.key.clone(),
                });
            }
        };

        debug!(key = %self.key, source = self.source.kind(), "resolved binding");
        Ok(self.resolved.get_or_init(|| value).clone())
    }

    /// Snapshot of the binding for diagnostics.
    pub fn info(&self) -> BindingInfo {
        BindingInfo {
            key: self.key.clone(),
            tags: self.tags.iter().cloned().collect(),
            source: self.source.kind(),
            value_constructor: self.value_constructor().map(|class| class.name),
            resolved: self.is_resolved(),
        }
    }
}

impl std::fmt::Debug for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("key", &self.key)
            .field("tags", &self.tags)
            .field("source", &self.source.kind())
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

/// Serializable snapshot of a binding's registration state.
#[derive(Debug, Clone, Serialize)]
pub struct BindingInfo {
    /// Binding key
    pub key: String,
    /// Tags, sorted
    pub tags: Vec<String>,
    /// Source kind ("constant", "class", "provider", "server", "dynamic", "unbound")
    pub source: &'static str,
    /// Short name of the constructed class, when the source is a class
    pub value_constructor: Option<&'static str>,
    /// Whether a value has been memoized
    pub resolved: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use bindery_domain::Injectable;

    struct Widget;

    impl Injectable for Widget {
        fn construct(_ctx: &dyn ContextView) -> Result<Self> {
            Ok(Self)
        }
    }

    #[test]
    fn builder_accumulates_key_and_tags() {
        let binding = Binding::bind("widgets.main")
            .to_class(ClassRef::of::<Widget>())
            .tag("widget")
            .with_tags(["ui", "singleton"]);

        assert_eq!(binding.key(), "widgets.main");
        assert!(binding.has_tag("widget"));
        assert!(binding.has_tag("ui"));
        assert!(binding.has_tag("singleton"));
        assert!(!binding.has_tag("server"));
    }

    #[test]
    fn unbound_binding_fails_to_resolve() {
        let ctx = Context::new();
        let binding = Binding::bind("nothing");

        let err = binding.resolve(&ctx).unwrap_err();
        assert!(matches!(err, Error::Unbound { key } if key == "nothing"));
    }

    #[test]
    fn constant_resolution_is_memoized() {
        let ctx = Context::new();
        let binding = Binding::bind("greeting").to("hello".to_string());

        let first = binding.resolve(&ctx).unwrap();
        let second = binding.resolve(&ctx).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.downcast_ref::<String>().unwrap(), "hello");
    }

    #[test]
    fn value_constructor_exposed_for_class_bindings() {
        let binding = Binding::bind("my-widget").to_class(ClassRef::of::<Widget>());
        assert_eq!(binding.value_constructor().map(|c| c.name), Some("Widget"));

        let constant = Binding::bind("plain").to(1_u8);
        assert!(constant.value_constructor().is_none());
    }

    #[test]
    fn info_snapshots_registration_state() {
        let binding = Binding::bind("my-widget")
            .to_class(ClassRef::of::<Widget>())
            .tag("widget");

        let info = binding.info();
        assert_eq!(info.key, "my-widget");
        assert_eq!(info.tags, vec!["widget".to_string()]);
        assert_eq!(info.source, "class");
        assert_eq!(info.value_constructor, Some("Widget"));
        assert!(!info.resolved);
        assert!(matches!(binding.source(), BindingSource::Class(_)));
    }
}
