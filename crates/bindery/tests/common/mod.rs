//! Shared fixtures for the facade integration tests
//!
//! Artifact types modeled on a typical application: a controller, a
//! plain class, a provider returning a constant, servers flipping an
//! observable listening flag, and components bundling them.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use bindery::{
    Binding, ClassRef, Component, ComponentSpec, ContextView, Error, Injectable, Provider,
    ProviderRef, Result, Server, ServerRef, Value,
};

pub struct MyController;

impl Injectable for MyController {
    fn construct(_ctx: &dyn ContextView) -> Result<Self> {
        Ok(Self)
    }
}

pub struct MyClass;

impl Injectable for MyClass {
    fn construct(_ctx: &dyn ContextView) -> Result<Self> {
        Ok(Self)
    }
}

/// Provider returning a constant string, resolution must observe the
/// exact value.
pub struct MyProvider;

impl Injectable for MyProvider {
    fn construct(_ctx: &dyn ContextView) -> Result<Self> {
        Ok(Self)
    }
}

impl Provider for MyProvider {
    fn value(&self) -> Result<Value> {
        Ok(Arc::new("my-str".to_string()))
    }
}

/// A class whose factory always fails; mounting it must succeed,
/// resolving it must not.
#[derive(Debug)]
pub struct BrokenClass;

impl Injectable for BrokenClass {
    fn construct(_ctx: &dyn ContextView) -> Result<Self> {
        Err(Error::Construction {
            name: "BrokenClass".to_string(),
            message: "missing dependency".to_string(),
        })
    }
}

pub struct FakeServer {
    listening: AtomicBool,
}

impl Injectable for FakeServer {
    fn construct(_ctx: &dyn ContextView) -> Result<Self> {
        Ok(Self {
            listening: AtomicBool::new(false),
        })
    }
}

#[async_trait]
impl Server for FakeServer {
    fn listening(&self) -> bool {
        self.listening.load(Ordering::SeqCst)
    }

    async fn start(&self) -> Result<()> {
        self.listening.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn stop(&self) -> Result<()> {
        self.listening.store(false, Ordering::SeqCst);
        Ok(())
    }
}

/// A server whose `start` always fails.
pub struct FlakyServer;

impl Injectable for FlakyServer {
    fn construct(_ctx: &dyn ContextView) -> Result<Self> {
        Ok(Self)
    }
}

#[async_trait]
impl Server for FlakyServer {
    fn listening(&self) -> bool {
        false
    }

    async fn start(&self) -> Result<()> {
        Err(Error::Message("address already in use".to_string()))
    }

    async fn stop(&self) -> Result<()> {
        Ok(())
    }
}

/// Component declaring one artifact of every explicit category.
pub struct MyComponent;

impl Component for MyComponent {
    fn spec(&self) -> ComponentSpec {
        ComponentSpec::new()
            .with_controller(ClassRef::of::<MyController>())
            .with_binding(Binding::bind("foo").to("bar".to_string()))
            .with_class("my-class", ClassRef::of::<MyClass>())
            .with_provider("my-provider", ProviderRef::of::<MyProvider>())
    }
}

/// Component contributing two servers backed by the same class.
pub struct FakeComponent;

impl Component for FakeComponent {
    fn spec(&self) -> ComponentSpec {
        ComponentSpec::new()
            .with_server("FakeServer", ServerRef::of::<FakeServer>())
            .with_server("FakeServer2", ServerRef::of::<FakeServer>())
    }
}
