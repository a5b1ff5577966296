//! # WebView Host-Bridge Core
//!
//! Promise-style adapter over the callback-based native bridge that mobile
//! in-app browsers inject into hosted pages.
//!
//! ## Overview
//!
//! The host application injects a bridge object into the page some time
//! after load, and refuses every privileged capability call until the page
//! proves — through a time-limited signature handshake — that it is
//! entitled to them. This crate owns that lifecycle:
//!
//! - wait for the bridge to appear (one-time readiness signal),
//! - fetch signed [`Credentials`](host_traits::Credentials) for the
//!   authorization URL,
//! - run the capability pre-check as the final gate to `Ready`,
//! - expose [`invoke`](WebViewBridge::invoke) / [`on`](WebViewBridge::on)
//!   primitives that refuse to run before their preconditions hold,
//! - normalize the host's two legacy status-field spellings into one.
//!
//! The page environment is reached exclusively through the `host-traits`
//! ports, so tests substitute deterministic doubles for the host globals.
//!
//! ## Non-goals
//!
//! No retry or backoff, no configuration persistence across page loads, no
//! timeouts on host callbacks: a host that never answers leaves the future
//! pending, which is accepted behavior for a page-scoped adapter.

pub mod adapter;
pub mod env;
pub mod error;
pub mod normalize;
pub mod types;

pub use adapter::WebViewBridge;
pub use error::{BridgeError, Result};
pub use types::{AdapterState, BridgeOptions, CapabilityRequest};
