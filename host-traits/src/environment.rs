//! Ambient page state controlled by the hosting application.

use crate::bridge::NativeBridge;
use async_trait::async_trait;
use std::sync::Arc;

/// The page environment as the host presents it.
///
/// Everything here is live state: the bridge object materializes at some
/// point after page load, the URL changes with in-page navigation, and the
/// runtime marker distinguishes the host's mini-program mode from its
/// ordinary in-app browser. Implementations read the current value on every
/// call rather than caching.
#[async_trait]
pub trait HostEnvironment: Send + Sync {
    /// The bridge object, if the host has injected it yet.
    fn bridge(&self) -> Option<Arc<dyn NativeBridge>>;

    /// Resolves once the host fires its one-time bridge-readiness signal.
    ///
    /// Never errors and never times out; a host that is never ready leaves
    /// the caller suspended until the page navigates away.
    async fn bridge_ready(&self);

    /// The browser identification (user-agent) string.
    fn identification(&self) -> String;

    /// The page's current URL, fragment included.
    fn current_url(&self) -> String;

    /// Host-injected marker naming the runtime mode, when present.
    ///
    /// The host sets this to `"miniprogram"` when the page runs inside its
    /// mini-program runtime instead of the ordinary in-app browser.
    fn runtime_marker(&self) -> Option<String>;
}
