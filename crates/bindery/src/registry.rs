//! Component metadata registry
//!
//! The out-of-band association between a component type and a descriptor,
//! declared at the type's definition site. Entries register themselves
//! via `#[linkme::distributed_slice]` and are discovered when the type
//! is mounted, replacing runtime reflection with explicit registration.
//!
//! ## Registering a descriptor for a type
//!
//! ```ignore
//! use std::any::TypeId;
//! use bindery::{COMPONENT_METADATA, ComponentMetadataEntry, ComponentSpec};
//!
//! struct AuthComponent;
//!
//! #[linkme::distributed_slice(COMPONENT_METADATA)]
//! static AUTH_METADATA: ComponentMetadataEntry = ComponentMetadataEntry {
//!     type_name: "AuthComponent",
//!     type_id: || TypeId::of::<AuthComponent>(),
//!     spec: || ComponentSpec::new().with_class("auth-service", ClassRef::of::<AuthService>()),
//! };
//! ```

use std::any::TypeId;

use crate::component::ComponentSpec;

/// Metadata lookup capability consumed by the mount engine.
///
/// The default implementation scans the distributed slice; tests and
/// embedders may substitute their own store on the application.
pub trait MetadataStore: Send + Sync {
    /// The descriptor registered for `component`, if any.
    fn component_spec(&self, component: TypeId) -> Option<ComponentSpec>;
}

/// Registry entry associating a component type with its descriptor.
///
/// Both fields are plain function pointers so entries can live in
/// statics; the descriptor is rebuilt on every lookup, keeping the
/// registry free of shared mutable state.
pub struct ComponentMetadataEntry {
    /// Short type name, for diagnostics.
    pub type_name: &'static str,
    /// Identity of the component type.
    pub type_id: fn() -> TypeId,
    /// Builds the descriptor attached to the type.
    pub spec: fn() -> ComponentSpec,
}

// Auto-collection via linkme distributed slices - components submit entries at compile time
#[linkme::distributed_slice]
pub static COMPONENT_METADATA: [ComponentMetadataEntry] = [..];

/// Default metadata store backed by the distributed slice.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegistryMetadataStore;

impl MetadataStore for RegistryMetadataStore {
    fn component_spec(&self, component: TypeId) -> Option<ComponentSpec> {
        COMPONENT_METADATA
            .iter()
            .find(|entry| (entry.type_id)() == component)
            .map(|entry| (entry.spec)())
    }
}

/// Names of every component type with registered metadata.
pub fn registered_components() -> Vec<&'static str> {
    COMPONENT_METADATA.iter().map(|entry| entry.type_name).collect()
}
