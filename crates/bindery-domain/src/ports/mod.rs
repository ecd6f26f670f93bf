//! Port traits for the binding system
//!
//! Seams between the declarative component layer and the things it binds:
//! providers compute values on demand, servers carry an observable
//! lifecycle, and the resolution ports let factories pull dependencies
//! from the owning registry without depending on its concrete type.
//!
//! | Port | Description |
//! |------|-------------|
//! | `Provider` | Computes a bound value via `value()` |
//! | `Server` | Start/stop lifecycle with observable listening state |
//! | `ContextView` | Resolution-time view of the owning registry |
//! | `Injectable` | A type the registry can construct |

/// Provider port
pub mod provider;
/// Resolution seams handed to factories
pub mod resolution;
/// Server lifecycle port
pub mod server;

pub use provider::Provider;
pub use resolution::{ContextView, Injectable};
pub use server::Server;
