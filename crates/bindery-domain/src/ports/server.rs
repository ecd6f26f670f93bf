//! Server lifecycle port

use async_trait::async_trait;

use crate::error::Result;

/// A long-running artifact with an observable lifecycle.
///
/// Servers are registered by name, resolved through the registry, and
/// driven as a group by the application facade. Whether a repeated
/// `start` is idempotent is each implementation's own contract.
#[async_trait]
pub trait Server: Send + Sync {
    /// Whether the server is currently accepting work.
    fn listening(&self) -> bool;

    /// Bring the server up. Completes once the server is listening or
    /// has failed to come up.
    async fn start(&self) -> Result<()>;

    /// Tear the server down.
    async fn stop(&self) -> Result<()>;
}
