//! Application facade
//!
//! The entry point exposed to users. An application owns one binding
//! context exclusively; components, controllers, and servers register
//! through it under the key/tag conventions, and `start`/`stop` drive
//! every binding tagged `server` through its lifecycle as a group.
//!
//! ```text
//! user code ──► Application ──► mount engine ──► Context (bindings)
//!                   │
//!                   └──► start()/stop() ──► every `server`-tagged binding
//! ```

use std::sync::Arc;

use bindery_context::{Binding, Context};
use bindery_domain::{ClassRef, Error, Injectable, Result, Server, ServerRef, Value, short_type_name};
use dashmap::DashMap;
use serde::Serialize;
use tracing::{debug, error, info};

use crate::component::{Component, ComponentSpec, mount_component, mount_spec};
use crate::keys;
use crate::registry::{MetadataStore, RegistryMetadataStore};

/// Lifecycle phase of a tracked server.
///
/// Unregistered servers are simply absent from the phase map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerPhase {
    /// Bound in the context, not yet started.
    Registered,
    /// `start` succeeded.
    Listening,
    /// `stop` succeeded.
    Stopped,
}

#[derive(Clone, Copy)]
enum Transition {
    Start,
    Stop,
}

impl Transition {
    fn operation(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
        }
    }

    fn target_phase(self) -> ServerPhase {
        match self {
            Self::Start => ServerPhase::Listening,
            Self::Stop => ServerPhase::Stopped,
        }
    }
}

/// An application accumulating bindings from mounted components.
///
/// Process-scoped: created once, accumulates bindings via repeated
/// mount/bind calls, torn down via [`stop`](Application::stop). All
/// context mutation funnels through this facade and its owned registry;
/// there is no ambient global container.
pub struct Application {
    context: Context,
    metadata: Arc<dyn MetadataStore>,
    phases: DashMap<String, ServerPhase>,
}

impl Application {
    /// Create an application backed by the default component metadata
    /// registry.
    pub fn new() -> Self {
        Self::with_metadata_store(Arc::new(RegistryMetadataStore))
    }

    /// Create an application with a substitute metadata store.
    pub fn with_metadata_store(metadata: Arc<dyn MetadataStore>) -> Self {
        Self {
            context: Context::new(),
            metadata,
            phases: DashMap::new(),
        }
    }

    /// The application's binding context.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// The metadata store consulted when components mount.
    pub fn metadata_store(&self) -> &dyn MetadataStore {
        self.metadata.as_ref()
    }

    /// Register a binding, preserving its own key and tags.
    pub fn add(&self, binding: Binding) -> Arc<Binding> {
        self.context.add(binding)
    }

    /// Register a pre-built shared binding verbatim.
    pub fn add_shared(&self, binding: Arc<Binding>) -> Arc<Binding> {
        self.context.add_shared(binding)
    }

    /// Whether a binding exists under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.context.contains(key)
    }

    /// The binding registered under `key`.
    pub fn get_binding(&self, key: &str) -> Result<Arc<Binding>> {
        self.context.get_binding(key)
    }

    /// Resolve the value bound under `key`.
    pub fn get_value(&self, key: &str) -> Result<Value> {
        self.context.get_value(key)
    }

    /// Resolve the value bound under `key`, downcast to `T`.
    pub fn get<T: Send + Sync + 'static>(&self, key: &str) -> Result<Arc<T>> {
        self.context.get(key)
    }

    /// Register a controller under `controllers.<name>`, tagged
    /// `controller`. The class name is the default name.
    pub fn controller(&self, controller: ClassRef, name: Option<&str>) -> Arc<Binding> {
        let name = name.unwrap_or(controller.name);
        let key = keys::namespaced(keys::CONTROLLERS_PREFIX, name);
        debug!(key = %key, "registering controller");
        self.context
            .add(Binding::bind(key).to_class(controller).tag(keys::CONTROLLER_TAG))
    }

    /// Mount a component instance.
    ///
    /// Binds the instance under `components.<name>` tagged `component`,
    /// then mounts its metadata-registered descriptor (if any) followed
    /// by its own declared fields.
    pub fn component<C: Component>(&self, instance: C, name: Option<&str>) -> Arc<Binding> {
        let name = name.unwrap_or_else(|| short_type_name::<C>());
        let key = keys::namespaced(keys::COMPONENTS_PREFIX, name);
        info!(key = %key, "mounting component");

        let instance = Arc::new(instance);
        let value: Value = Arc::clone(&instance) as Value;
        let binding = self
            .context
            .add(Binding::bind(key).to_value(value).tag(keys::COMPONENT_TAG));

        mount_component(self, instance.as_ref());
        binding
    }

    /// Construct a component of type `C` through the context, then mount
    /// it.
    ///
    /// The instantiating form of [`component`](Application::component):
    /// the component is built with dependencies injected from the
    /// already-registered bindings, so its descriptor may carry values it
    /// pulled during construction.
    pub fn component_of<C: Component + Injectable>(
        &self,
        name: Option<&str>,
    ) -> Result<Arc<Binding>> {
        let instance = C::construct(&self.context)?;
        Ok(self.component(instance, name))
    }

    /// Mount a bare descriptor, skipping metadata lookup.
    pub fn mount_spec(&self, spec: ComponentSpec) {
        mount_spec(self, spec);
    }

    /// Register a server under `servers.<name>`, tagged `server`. The
    /// class name is the default name.
    pub fn server(&self, server: ServerRef, name: Option<&str>) -> Arc<Binding> {
        let name = name.unwrap_or(server.name).to_string();
        let key = keys::namespaced(keys::SERVERS_PREFIX, &name);
        info!(server = %name, key = %key, "registering server");

        let binding = self
            .context
            .add(Binding::bind(key).to_server(server).tag(keys::SERVER_TAG));
        let _ = self.phases.insert(name, ServerPhase::Registered);
        binding
    }

    /// Register several servers under their class names.
    pub fn servers(&self, servers: impl IntoIterator<Item = ServerRef>) -> Vec<Arc<Binding>> {
        servers.into_iter().map(|server| self.server(server, None)).collect()
    }

    /// Resolve the server registered under `name`.
    ///
    /// For servers registered under their class name, `ServerRef::name`
    /// is the lookup name.
    pub fn get_server(&self, name: &str) -> Result<Arc<dyn Server>> {
        let key = keys::namespaced(keys::SERVERS_PREFIX, name);
        if !self.context.contains(&key) {
            return Err(Error::ServerNotFound {
                name: name.to_string(),
            });
        }
        self.resolve_server(&key)
    }

    /// The tracked lifecycle phase of the server registered under `name`.
    pub fn server_phase(&self, name: &str) -> Option<ServerPhase> {
        self.phases.get(name).map(|entry| *entry.value())
    }

    /// Start every binding tagged `server`.
    ///
    /// Servers are independent services: each one is resolved and
    /// started regardless of its siblings' outcomes, and failures are
    /// surfaced together as one aggregate error attributable per server
    /// name. Starting with zero registered servers is a no-op.
    pub async fn start(&self) -> Result<()> {
        self.transition(Transition::Start).await
    }

    /// Stop every binding tagged `server`, symmetrically to
    /// [`start`](Application::start).
    pub async fn stop(&self) -> Result<()> {
        self.transition(Transition::Stop).await
    }

    fn resolve_server(&self, key: &str) -> Result<Arc<dyn Server>> {
        let value = self.context.get_value(key)?;
        value
            .downcast_ref::<Arc<dyn Server>>()
            .cloned()
            .ok_or_else(|| Error::TypeMismatch {
                key: key.to_string(),
                expected: "server",
            })
    }

    async fn transition(&self, transition: Transition) -> Result<()> {
        let operation = transition.operation();
        // Tag lookup only: bindings under server-like keys without the
        // tag are never candidates.
        let bindings = self.context.find_by_tag(keys::SERVER_TAG);
        info!(operation, count = bindings.len(), "transitioning servers");

        let mut failures: Vec<(String, Error)> = Vec::new();
        for binding in bindings {
            let key = binding.key().to_string();
            let name = keys::local_name(keys::SERVERS_PREFIX, &key)
                .unwrap_or(key.as_str())
                .to_string();

            let server = match self.resolve_server(&key) {
                Ok(server) => server,
                Err(cause) => {
                    error!(server = %name, error = %cause, "failed to resolve server");
                    failures.push((name, cause));
                    continue;
                }
            };

            let outcome = match transition {
                Transition::Start => server.start().await,
                Transition::Stop => server.stop().await,
            };

            match outcome {
                Ok(()) => {
                    let _ = self.phases.insert(name.clone(), transition.target_phase());
                    info!(server = %name, operation, "server transitioned");
                }
                Err(cause) => {
                    error!(server = %name, operation, error = %cause, "server transition failed");
                    failures.push((name, cause));
                }
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(Error::Lifecycle {
                operation,
                failures,
            })
        }
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Application")
            .field("binding_count", &self.context.len())
            .field("tracked_servers", &self.phases.len())
            .finish()
    }
}
