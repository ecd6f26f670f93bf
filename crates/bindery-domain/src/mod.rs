//! Domain layer for bindery
//!
//! Pure contracts for the component binding system: the error taxonomy,
//! the type-erased bound value, artifact references, and the ports that
//! the registry and the mount engine depend on. No I/O and no runtime
//! live here.

/// Error types shared across the workspace
pub mod error;
/// Port traits (provider, server, resolution seams)
pub mod ports;
/// Named artifact references with factory functions
pub mod refs;
/// Type-erased bound values
pub mod value;

pub use error::{Error, Result};
pub use ports::{ContextView, Injectable, Provider, Server};
pub use refs::{ClassRef, ProviderRef, ServerRef, ValueFactory};
pub use value::{Value, short_type_name};
