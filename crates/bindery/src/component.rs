//! Component descriptors and the mount engine
//!
//! A descriptor bundles the artifacts one installable unit contributes:
//! controllers, named providers and classes, named servers, and raw
//! bindings. The descriptor is pure data; mounting translates it into
//! registered bindings with deterministic keys and tags, in an order
//! that lets later artifacts depend on earlier ones within the same
//! call.

use std::any::Any;
use std::sync::Arc;

use bindery_context::Binding;
use bindery_domain::{ClassRef, ProviderRef, ServerRef};
use serde_json::Value as JsonValue;
use tracing::debug;

use crate::application::Application;

/// A named extension payload carried by a descriptor.
///
/// Extensions are the explicit form of "other properties": the mount
/// protocol carries and ignores them, so contributions aimed at other
/// consumers are preserved rather than silently dropped.
#[derive(Debug, Clone)]
pub struct ExtensionEntry {
    /// Extension point name.
    pub name: String,
    /// Opaque payload for whichever collaborator consumes the extension.
    pub value: JsonValue,
}

/// Declarative bundle of artifacts contributed by one component.
///
/// Every field is independently omittable; `Default` is the empty
/// descriptor. Mapping fields are ordered name/reference pairs -
/// registration preserves declaration order.
#[derive(Default)]
pub struct ComponentSpec {
    /// Controller classes, bound under the controller convention.
    pub controllers: Vec<ClassRef>,
    /// Named providers, bound under the mapping key and resolved via `value()`.
    pub providers: Vec<(String, ProviderRef)>,
    /// Named plain classes, bound under the mapping key by direct construction.
    pub classes: Vec<(String, ClassRef)>,
    /// Named servers, bound under the server convention.
    pub servers: Vec<(String, ServerRef)>,
    /// Pre-built bindings, registered verbatim with their own keys and tags.
    pub bindings: Vec<Arc<Binding>>,
    /// Extension payloads, ignored by mounting.
    pub extras: Vec<ExtensionEntry>,
}

impl ComponentSpec {
    /// The empty descriptor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a controller.
    pub fn with_controller(mut self, controller: ClassRef) -> Self {
        self.controllers.push(controller);
        self
    }

    /// Declare a named provider.
    pub fn with_provider(mut self, name: impl Into<String>, provider: ProviderRef) -> Self {
        self.providers.push((name.into(), provider));
        self
    }

    /// Declare a named plain class.
    pub fn with_class(mut self, name: impl Into<String>, class: ClassRef) -> Self {
        self.classes.push((name.into(), class));
        self
    }

    /// Declare a named server.
    pub fn with_server(mut self, name: impl Into<String>, server: ServerRef) -> Self {
        self.servers.push((name.into(), server));
        self
    }

    /// Attach a pre-built binding.
    pub fn with_binding(mut self, binding: Binding) -> Self {
        self.bindings.push(Arc::new(binding));
        self
    }

    /// Attach a pre-built shared binding.
    pub fn with_shared_binding(mut self, binding: Arc<Binding>) -> Self {
        self.bindings.push(binding);
        self
    }

    /// Attach an extension payload.
    pub fn with_extra(mut self, name: impl Into<String>, value: JsonValue) -> Self {
        self.extras.push(ExtensionEntry {
            name: name.into(),
            value,
        });
        self
    }

    /// Whether the descriptor declares nothing at all.
    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
            && self.providers.is_empty()
            && self.classes.is_empty()
            && self.servers.is_empty()
            && self.bindings.is_empty()
            && self.extras.is_empty()
    }
}

impl std::fmt::Debug for ComponentSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentSpec")
            .field("controllers", &self.controllers.len())
            .field("providers", &self.providers.len())
            .field("classes", &self.classes.len())
            .field("servers", &self.servers.len())
            .field("bindings", &self.bindings.len())
            .field("extras", &self.extras.len())
            .finish()
    }
}

/// An installable unit of artifacts.
///
/// A component contributes artifacts two ways, merged at mount time:
/// a descriptor registered for its type in the metadata registry, and
/// the instance's own [`spec`](Component::spec). Either layer may be
/// empty.
pub trait Component: Any + Send + Sync {
    /// The artifacts this instance contributes explicitly.
    fn spec(&self) -> ComponentSpec {
        ComponentSpec::default()
    }
}

/// Mount a component instance into an application.
///
/// The metadata layer registers first, then the instance's own fields,
/// so with the registry's last-write-wins policy the instance's explicit
/// contributions take precedence on key collision. The instance is
/// borrowed immutably and never modified.
pub fn mount_component(app: &Application, instance: &dyn Component) {
    let as_any: &dyn Any = instance;
    if let Some(decorated) = app.metadata_store().component_spec(as_any.type_id()) {
        debug!("mounting metadata-registered descriptor");
        mount_spec(app, decorated);
    }
    mount_spec(app, instance.spec());
}

/// Mount a bare descriptor into an application.
///
/// The entry point for descriptors that are plain data rather than typed
/// component instances; no metadata lookup happens here. Registration
/// order is fixed: classes, providers, raw bindings, controllers,
/// servers - later categories may depend on artifacts registered by
/// earlier ones in the same call.
pub fn mount_spec(app: &Application, spec: ComponentSpec) {
    let ComponentSpec {
        controllers,
        providers,
        classes,
        servers,
        bindings,
        extras,
    } = spec;

    for (key, class) in classes {
        app.add(Binding::bind(key).to_class(class));
    }

    for (key, provider) in providers {
        app.add(Binding::bind(key).to_provider(provider));
    }

    for binding in bindings {
        app.add_shared(binding);
    }

    for controller in controllers {
        app.controller(controller, None);
    }

    for (name, server) in servers {
        app.server(server, Some(&name));
    }

    if !extras.is_empty() {
        debug!(count = extras.len(), "descriptor extensions carried, not mounted");
    }
}
