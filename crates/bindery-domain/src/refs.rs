//! Named artifact references
//!
//! The declarative layer never holds live artifacts; it holds references:
//! a short name (used for default binding keys) paired with a factory
//! function the registry invokes at resolution time. Each reference is a
//! plain `Copy` value, so descriptors stay pure data.

use std::sync::Arc;

use crate::error::Result;
use crate::ports::{ContextView, Injectable, Provider, Server};
use crate::value::{Value, short_type_name};

/// Factory signature for plain class artifacts.
pub type ValueFactory = fn(&dyn ContextView) -> Result<Value>;

/// Reference to a plain class artifact, bound by direct construction.
#[derive(Clone, Copy, Debug)]
pub struct ClassRef {
    /// Short type name, used for default binding keys.
    pub name: &'static str,
    /// Factory invoked when the binding resolves.
    pub construct: ValueFactory,
}

impl ClassRef {
    /// Reference a constructible type, deriving the name from the type.
    pub fn of<T: Injectable>() -> Self {
        Self {
            name: short_type_name::<T>(),
            construct: |ctx| T::construct(ctx).map(|instance| Arc::new(instance) as Value),
        }
    }
}

/// Reference to a provider class, resolved via its `value()` capability.
#[derive(Clone, Copy, Debug)]
pub struct ProviderRef {
    /// Short type name of the provider.
    pub name: &'static str,
    /// Factory that constructs the provider itself.
    pub construct: fn(&dyn ContextView) -> Result<Arc<dyn Provider>>,
}

impl ProviderRef {
    /// Reference a constructible provider type.
    pub fn of<P: Injectable + Provider>() -> Self {
        Self {
            name: short_type_name::<P>(),
            construct: |ctx| P::construct(ctx).map(|provider| Arc::new(provider) as Arc<dyn Provider>),
        }
    }
}

/// Reference to a server class, kept resolvable for lifecycle orchestration.
#[derive(Clone, Copy, Debug)]
pub struct ServerRef {
    /// Short type name, used as the default server name.
    pub name: &'static str,
    /// Factory that constructs the server.
    pub construct: fn(&dyn ContextView) -> Result<Arc<dyn Server>>,
}

impl ServerRef {
    /// Reference a constructible server type.
    pub fn of<S: Injectable + Server>() -> Self {
        Self {
            name: short_type_name::<S>(),
            construct: |ctx| S::construct(ctx).map(|server| Arc::new(server) as Arc<dyn Server>),
        }
    }
}
