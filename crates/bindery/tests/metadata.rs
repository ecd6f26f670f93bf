//! Component metadata registry tests
//!
//! A component type can carry a descriptor registered out-of-band at its
//! definition site. Mounting an instance merges that layer with the
//! instance's own fields: union of keys, instance wins on collision.

mod common;

use std::any::TypeId;

use bindery::{
    Application, Binding, COMPONENT_METADATA, ClassRef, Component, ComponentMetadataEntry,
    ComponentSpec, registered_components,
};
use common::MyClass;

/// Component whose type carries registered metadata and whose instance
/// declares its own artifacts on top.
struct DecoratedComponent;

impl Component for DecoratedComponent {
    fn spec(&self) -> ComponentSpec {
        ComponentSpec::new()
            .with_class("from-instance", ClassRef::of::<MyClass>())
            .with_binding(Binding::bind("shared-key").to("instance".to_string()))
    }
}

#[linkme::distributed_slice(COMPONENT_METADATA)]
static DECORATED_COMPONENT_METADATA: ComponentMetadataEntry = ComponentMetadataEntry {
    type_name: "DecoratedComponent",
    type_id: || TypeId::of::<DecoratedComponent>(),
    spec: || {
        ComponentSpec::new()
            .with_class("from-metadata", ClassRef::of::<MyClass>())
            .with_binding(Binding::bind("shared-key").to("metadata".to_string()))
    },
};

/// Component with no registered metadata; lookup is skipped, not an error.
struct PlainComponent;

impl Component for PlainComponent {
    fn spec(&self) -> ComponentSpec {
        ComponentSpec::new().with_class("plain", ClassRef::of::<MyClass>())
    }
}

#[test]
fn metadata_and_instance_artifacts_are_united() {
    let app = Application::new();
    app.component(DecoratedComponent, None);

    assert!(app.contains("from-metadata"));
    assert!(app.contains("from-instance"));
    assert!(app.contains("components.DecoratedComponent"));
}

#[test]
fn instance_artifacts_win_on_key_collision() {
    let app = Application::new();
    app.component(DecoratedComponent, None);

    // Metadata mounts first; the instance layer overwrites on collision.
    assert_eq!(*app.get::<String>("shared-key").unwrap(), "instance");
}

#[test]
fn components_without_metadata_mount_their_own_fields_only() {
    let app = Application::new();
    app.component(PlainComponent, None);

    assert!(app.contains("plain"));
    assert!(!app.contains("from-metadata"));
}

#[test]
fn registry_lists_registered_component_types() {
    assert!(registered_components().contains(&"DecoratedComponent"));
}
