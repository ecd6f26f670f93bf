//! # bindery
//!
//! Component mounting core for an application framework: declarative
//! components - bundles of controllers, providers, classes, servers,
//! and raw bindings - are declared once and mechanically registered
//! into a running application's context with deterministic keys and
//! tags.
//!
//! ## Quick start
//!
//! ```
//! use bindery::{Application, ClassRef, ComponentSpec, Component};
//! use bindery_domain::{ContextView, Injectable, Result};
//!
//! struct Greeter;
//!
//! impl Injectable for Greeter {
//!     fn construct(_ctx: &dyn ContextView) -> Result<Self> {
//!         Ok(Self)
//!     }
//! }
//!
//! struct GreeterComponent;
//!
//! impl Component for GreeterComponent {
//!     fn spec(&self) -> ComponentSpec {
//!         ComponentSpec::new().with_class("greeter", ClassRef::of::<Greeter>())
//!     }
//! }
//!
//! let app = Application::new();
//! app.component(GreeterComponent, None);
//! assert!(app.contains("greeter"));
//! assert!(app.contains("components.GreeterComponent"));
//! ```
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Application`] | Owns one binding context; mounts components; drives servers |
//! | [`ComponentSpec`] | Declarative descriptor of a component's artifacts |
//! | [`Component`] | An installable unit contributing a descriptor |
//! | [`Binding`] | A key→resolution-strategy association with tags |
//! | [`Context`] | The key→binding registry |

/// The application facade and server lifecycle
pub mod application;
/// Component descriptors and the mount engine
pub mod component;
/// Key and tag conventions
pub mod keys;
/// Component metadata registry
pub mod registry;

pub use application::{Application, ServerPhase};
pub use component::{Component, ComponentSpec, ExtensionEntry, mount_component, mount_spec};
pub use registry::{
    COMPONENT_METADATA, ComponentMetadataEntry, MetadataStore, RegistryMetadataStore,
    registered_components,
};

// Re-export the registry and domain surface for convenience
pub use bindery_context::{Binding, BindingInfo, BindingSource, Context};
pub use bindery_domain::{
    ClassRef, ContextView, Error, Injectable, Provider, ProviderRef, Result, Server, ServerRef,
    Value, short_type_name,
};
