use host_traits::CredentialError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    /// `configure()` was called on an adapter built without a credential
    /// provider.
    #[error("no credential provider configured")]
    MissingCredentialProvider,

    /// The credential provider failed; its error surfaces as-is.
    #[error(transparent)]
    Credential(#[from] CredentialError),

    /// The host has not injected the native bridge yet.
    #[error("native bridge is not initialized")]
    BridgeNotInitialized,

    /// No credentials have been captured; `configure()` has not completed
    /// its credential step.
    #[error("bridge is not configured")]
    BridgeNotConfigured,

    /// The host reported a failure status; the message is the host's raw
    /// reason string (e.g. `cancel`, `permission denied`).
    #[error("{0}")]
    NativeInvocation(String),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
