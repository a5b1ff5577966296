use host_traits::CredentialProvider;
use std::sync::Arc;

/// Adapter lifecycle state.
///
/// `Unconfigured → Configuring` on the first `configure()` call;
/// `Configuring → Ready` only once credentials are captured, the bridge is
/// available and the host has granted the capability pre-check. Any failure
/// on the way returns the adapter to `Unconfigured` with no credentials
/// retained, and `configure()` may be retried fresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterState {
    Unconfigured,
    Configuring,
    Ready,
}

/// Capability names requested during the authorization handshake.
///
/// Used only by the pre-check; the host answers with the subset it grants.
#[derive(Debug, Clone, Default)]
pub struct CapabilityRequest {
    /// Handler names to pre-authorize for invocation.
    pub invokable: Vec<String>,
    /// UI open-tag names to pre-authorize for rendering.
    pub taggable: Vec<String>,
}

impl CapabilityRequest {
    pub fn new(
        invokable: impl IntoIterator<Item = impl Into<String>>,
        taggable: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            invokable: invokable.into_iter().map(Into::into).collect(),
            taggable: taggable.into_iter().map(Into::into).collect(),
        }
    }
}

/// Construction options for [`WebViewBridge`](crate::WebViewBridge).
#[derive(Clone, Default)]
pub struct BridgeOptions {
    /// Signature service used by `configure()`. Leaving this unset is legal
    /// at construction; `configure()` then fails with
    /// `MissingCredentialProvider`.
    pub credential_provider: Option<Arc<dyn CredentialProvider>>,
    /// Capabilities to request during the handshake.
    pub capabilities: CapabilityRequest,
    /// Emits per-invocation wire traces when set.
    pub debug: bool,
}
