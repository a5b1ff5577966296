//! Native bridge surface injected by the hosting application.

use async_trait::async_trait;
use serde_json::{Map, Value};

/// Opaque payload exchanged with the host in both directions.
///
/// The host defines the shape; the adapter only ever inspects the status
/// field and otherwise passes the mapping through untouched.
pub type HostResponse = Map<String, Value>;

/// Callback fired for every event delivered on a subscribed handler.
pub type EventListener = Box<dyn Fn(HostResponse) + Send + Sync>;

/// The host-injected bridge object.
///
/// Appears on the page only after the host finishes initializing; presence
/// is observed through [`HostEnvironment::bridge`](crate::HostEnvironment::bridge).
///
/// # Callback discipline
///
/// The host calls the invocation callback exactly once per call. A host that
/// calls back more than once is out of contract; implementations resolve on
/// the first callback and the behavior for later ones is undefined. A host
/// that never calls back leaves the invocation pending indefinitely — the
/// adapter imposes no timeout.
#[async_trait]
pub trait NativeBridge: Send + Sync {
    /// Performs a capability invocation and resolves with the host's
    /// response once the host calls back.
    async fn invoke(&self, handler: &str, params: HostResponse) -> HostResponse;

    /// Installs `listener` for every future event delivered under `handler`.
    ///
    /// Resolves once the subscription is in place, independent of whether
    /// any event is ever delivered.
    async fn subscribe(&self, handler: &str, listener: EventListener);
}
