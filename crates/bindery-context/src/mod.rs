//! Binding registry for bindery
//!
//! A context holds key→binding associations for exactly one application.
//! Bindings are built fluently (`Binding::bind("key").to_class(..).tag(..)`),
//! registered through [`Context::add`], looked up by key or by tag, and
//! resolved lazily with memoization: the first successful resolution is
//! the value every later get observes.

/// Binding construction and resolution
pub mod binding;
/// The key→binding registry
pub mod context;

pub use binding::{Binding, BindingInfo, BindingSource};
pub use context::Context;
