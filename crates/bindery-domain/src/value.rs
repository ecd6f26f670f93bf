//! Type-erased bound values

use std::any::Any;
use std::sync::Arc;

/// A value held by the registry.
///
/// Bindings resolve to type-erased shared values; typed access happens by
/// downcast at the registry surface.
pub type Value = Arc<dyn Any + Send + Sync>;

/// Short name of a type: the final path segment with generic arguments
/// stripped.
///
/// Used as the default artifact name when a caller does not supply one,
/// e.g. `controllers.MyController` for `my_app::MyController`.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
