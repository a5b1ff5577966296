//! # Host Environment Traits
//!
//! Contract between the bridge adapter and the hosting WebView environment.
//!
//! ## Overview
//!
//! The adapter never touches the page's globals directly. Everything the host
//! injects into the page — the native bridge object, the one-time readiness
//! signal, the browser identification string, the current URL, the runtime
//! marker — is reached through the traits in this crate. Concrete
//! implementations bind these to the actual page globals; tests substitute
//! deterministic doubles.
//!
//! ## Traits
//!
//! - [`NativeBridge`](bridge::NativeBridge) - Capability invocation and event
//!   subscription on the host-injected bridge object
//! - [`HostEnvironment`](environment::HostEnvironment) - Bridge presence,
//!   readiness signal, identification string, URL, runtime marker
//! - [`CredentialProvider`](credentials::CredentialProvider) - Signature
//!   service producing [`Credentials`](credentials::Credentials) for a URL
//!
//! ## Thread Safety
//!
//! All traits require `Send + Sync` so implementations can be shared across
//! async tasks behind an `Arc`.

pub mod bridge;
pub mod credentials;
pub mod environment;

pub use bridge::{EventListener, HostResponse, NativeBridge};
pub use credentials::{CredentialError, CredentialProvider, Credentials};
pub use environment::HostEnvironment;
