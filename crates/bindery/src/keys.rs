//! Key and tag conventions
//!
//! Deterministic binding keys and tags for every artifact category.
//! Controllers, components, and servers live under namespaced keys
//! (`<prefix>.<name>`); class and provider artifacts use their mapping
//! key verbatim; raw bindings are never renamed.

/// Key namespace for controller bindings.
pub const CONTROLLERS_PREFIX: &str = "controllers";

/// Key namespace for component bindings.
pub const COMPONENTS_PREFIX: &str = "components";

/// Key namespace for server bindings.
pub const SERVERS_PREFIX: &str = "servers";

/// Tag applied to every controller binding.
pub const CONTROLLER_TAG: &str = "controller";

/// Tag applied to every component binding.
pub const COMPONENT_TAG: &str = "component";

/// Tag applied to every server binding. Lifecycle orchestration trusts
/// this tag only, never key shape.
pub const SERVER_TAG: &str = "server";

/// Build the namespaced key `<prefix>.<name>`.
pub fn namespaced(prefix: &str, name: &str) -> String {
    format!("{prefix}.{name}")
}

/// The local name of a namespaced key, if `key` lives under `prefix`.
pub fn local_name<'a>(prefix: &str, key: &'a str) -> Option<&'a str> {
    key.strip_prefix(prefix)?.strip_prefix('.')
}
