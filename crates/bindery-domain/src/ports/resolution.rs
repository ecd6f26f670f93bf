//! Resolution seams
//!
//! Factories run at resolution time, not at registration time. These two
//! traits are what a factory sees of the registry: a read-only view for
//! pulling dependencies, and the constructible-type seam that keeps
//! constructor injection outside the mount protocol.

use crate::error::Result;
use crate::value::Value;

/// Read-only view of the owning registry, handed to factories when a
/// binding resolves.
pub trait ContextView: Send + Sync {
    /// Resolve the value bound under `key`.
    fn get_value(&self, key: &str) -> Result<Value>;

    /// Whether a binding exists under `key`.
    fn contains(&self, key: &str) -> bool;
}

/// A type the registry can construct.
///
/// Construction may pull already-registered dependencies from the
/// context view; how a concrete type wires its dependencies is its own
/// business.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use bindery_domain::{ContextView, Injectable, Result};
///
/// struct Repository {
///     connection_string: Arc<String>,
/// }
///
/// impl Injectable for Repository {
///     fn construct(ctx: &dyn ContextView) -> Result<Self> {
///         let value = ctx.get_value("config.connection")?;
///         let connection_string = value
///             .downcast::<String>()
///             .map_err(|_| bindery_domain::Error::TypeMismatch {
///                 key: "config.connection".to_string(),
///                 expected: "String",
///             })?;
///         Ok(Self { connection_string })
///     }
/// }
/// ```
pub trait Injectable: Send + Sync + Sized + 'static {
    /// Build an instance, injecting dependencies from the context.
    fn construct(ctx: &dyn ContextView) -> Result<Self>;
}
