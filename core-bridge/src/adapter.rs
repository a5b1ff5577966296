//! # WebView Bridge Adapter
//!
//! Async facade over the host-injected, callback-based native bridge.
//!
//! ## Overview
//!
//! The [`WebViewBridge`] owns the adapter lifecycle: it waits for the host
//! to inject its bridge object, performs the signature handshake through a
//! caller-supplied [`CredentialProvider`], requests capability grants, and
//! only then lets general invocations through. Host responses arrive under
//! two incompatible status spellings; both paths normalize them through the
//! [`normalize`](crate::normalize) module before anything is inspected.
//!
//! ## Lifecycle
//!
//! `Unconfigured` → `configure()` → `Configuring` → credentials captured →
//! bridge available → capability pre-check granted → `Ready`. Any failure
//! drops captured credentials and returns to `Unconfigured`; `configure()`
//! may then be retried.
//!
//! Invocation is gated on captured credentials rather than on the full
//! `Ready` state, so the capability pre-check issued inside `configure()`
//! itself travels the same guarded path as every other invocation.

use crate::env;
use crate::error::{BridgeError, Result};
use crate::normalize::{normalize_status, reason_is_success, status_reason};
use crate::types::{AdapterState, BridgeOptions};
use host_traits::{Credentials, EventListener, HostEnvironment, HostResponse};
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

/// Handler carrying the capability pre-check during the handshake.
const PRE_VERIFY_HANDLER: &str = "preVerifyJSAPI";
/// Pre-check parameter naming the invokable capabilities.
const VERIFY_API_LIST_KEY: &str = "verifyJsApiList";
/// Pre-check parameter naming the UI open tags.
const VERIFY_TAG_LIST_KEY: &str = "verifyOpenTagList";
/// Signature scheme the host expects on authorized invocations.
const SIGNATURE_TYPE: &str = "sha1";

/// Async adapter over the host's native bridge.
///
/// One instance per page load. All shared state lives behind async locks so
/// the adapter can be driven from an `Arc` across tasks, though the
/// intended use is a single logical session.
///
/// # Examples
///
/// ```no_run
/// use core_bridge::{BridgeOptions, CapabilityRequest, WebViewBridge};
/// use host_traits::{CredentialError, CredentialProvider, Credentials};
/// use std::sync::Arc;
/// # use async_trait::async_trait;
/// # use host_traits::{EventListener, HostEnvironment, HostResponse, NativeBridge};
/// # struct PageHost;
/// # #[async_trait]
/// # impl HostEnvironment for PageHost {
/// #     fn bridge(&self) -> Option<Arc<dyn NativeBridge>> { None }
/// #     async fn bridge_ready(&self) {}
/// #     fn identification(&self) -> String { String::new() }
/// #     fn current_url(&self) -> String { String::new() }
/// #     fn runtime_marker(&self) -> Option<String> { None }
/// # }
/// # struct SignatureService;
/// # #[async_trait]
/// # impl CredentialProvider for SignatureService {
/// #     async fn credentials_for(&self, _url: &str) -> Result<Credentials, CredentialError> {
/// #         Err(CredentialError::new("unreachable"))
/// #     }
/// # }
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let host = Arc::new(PageHost);
/// let bridge = WebViewBridge::new(
///     host,
///     BridgeOptions {
///         credential_provider: Some(Arc::new(SignatureService)),
///         capabilities: CapabilityRequest::new(["scanQRCode"], ["wx-open-launch-app"]),
///         debug: false,
///     },
/// );
///
/// bridge.configure().await?;
/// let outcome = bridge.invoke("scanQRCode", Default::default()).await?;
/// # let _ = outcome;
/// # Ok(())
/// # }
/// ```
pub struct WebViewBridge {
    host: Arc<dyn HostEnvironment>,
    options: BridgeOptions,
    /// URL of the document as originally loaded, fragment stripped, frozen
    /// before any in-page navigation.
    landed_url: String,
    state: RwLock<AdapterState>,
    credentials: RwLock<Option<Credentials>>,
}

impl WebViewBridge {
    /// Creates an adapter bound to `host`.
    ///
    /// Captures the landed URL immediately; everything else is deferred to
    /// [`configure`](Self::configure).
    pub fn new(host: Arc<dyn HostEnvironment>, options: BridgeOptions) -> Self {
        let landed_url = strip_fragment(&host.current_url());
        Self {
            host,
            options,
            landed_url,
            state: RwLock::new(AdapterState::Unconfigured),
            credentials: RwLock::new(None),
        }
    }

    /// Resolves once the native bridge is available.
    ///
    /// Immediate when the bridge is already present; otherwise suspends on
    /// the host's one-time readiness signal. Never errors, never times out.
    pub async fn wait_for_bridge(&self) {
        if self.host.bridge().is_some() {
            return;
        }
        self.host.bridge_ready().await;
    }

    /// Performs the authorization handshake.
    ///
    /// Strictly in order: fetch credentials for the authorization URL, wait
    /// for the bridge, then issue the capability pre-check as the last
    /// native call. Success transitions to [`AdapterState::Ready`]; any
    /// failure drops captured credentials, returns the adapter to
    /// [`AdapterState::Unconfigured`] and propagates the error.
    ///
    /// # Errors
    ///
    /// - [`BridgeError::MissingCredentialProvider`] - no provider was supplied
    /// - [`BridgeError::Credential`] - the provider failed, surfaced verbatim
    /// - [`BridgeError::NativeInvocation`] - the host refused the pre-check
    #[instrument(skip(self))]
    pub async fn configure(&self) -> Result<()> {
        let provider = self
            .options
            .credential_provider
            .clone()
            .ok_or(BridgeError::MissingCredentialProvider)?;

        *self.state.write().await = AdapterState::Configuring;

        let url = self.authorization_url();
        info!(%url, "requesting credentials");
        let credentials = match provider.credentials_for(&url).await {
            Ok(credentials) => credentials,
            Err(err) => {
                self.reset().await;
                return Err(err.into());
            }
        };
        *self.credentials.write().await = Some(credentials);

        self.wait_for_bridge().await;

        // The pre-check is the last native call of the handshake, so
        // capability grants are current before general invocations open up.
        let mut params = HostResponse::new();
        params.insert(
            VERIFY_API_LIST_KEY.to_string(),
            string_array(&self.options.capabilities.invokable),
        );
        params.insert(
            VERIFY_TAG_LIST_KEY.to_string(),
            string_array(&self.options.capabilities.taggable),
        );
        if let Err(err) = self.invoke(PRE_VERIFY_HANDLER, params).await {
            self.reset().await;
            return Err(err);
        }

        *self.state.write().await = AdapterState::Ready;
        info!("bridge configured");
        Ok(())
    }

    /// Performs an authorized capability invocation.
    ///
    /// Caller params are merged with the authorization fields derived from
    /// the captured credentials (authorization fields win on collision) and
    /// handed to the native bridge, which calls back exactly once.
    ///
    /// Resolves with `Ok(None)` when the host reports no status at all
    /// (nothing to report), `Ok(Some(response))` for an `ok`/`confirm`
    /// status, and fails with [`BridgeError::NativeInvocation`] carrying the
    /// host's raw reason for anything else.
    ///
    /// # Errors
    ///
    /// - [`BridgeError::BridgeNotInitialized`] - the bridge is absent;
    ///   checked before anything else, the native layer is never reached
    /// - [`BridgeError::BridgeNotConfigured`] - no credentials captured yet
    /// - [`BridgeError::NativeInvocation`] - the host reported a failure
    #[instrument(skip(self, params))]
    pub async fn invoke(&self, handler: &str, params: HostResponse) -> Result<Option<HostResponse>> {
        let bridge = self.host.bridge().ok_or(BridgeError::BridgeNotInitialized)?;
        let credentials = self
            .credentials
            .read()
            .await
            .clone()
            .ok_or(BridgeError::BridgeNotConfigured)?;

        let mut merged = params;
        merged.insert(
            "appId".to_string(),
            Value::String(credentials.app_id.clone()),
        );
        merged.insert("verifyAppId".to_string(), Value::String(credentials.app_id));
        merged.insert(
            "verifySignType".to_string(),
            Value::String(SIGNATURE_TYPE.to_string()),
        );
        merged.insert(
            "verifyTimestamp".to_string(),
            Value::String(credentials.timestamp.to_string()),
        );
        merged.insert(
            "verifyNonceStr".to_string(),
            Value::String(credentials.nonce_str),
        );
        merged.insert(
            "verifySignature".to_string(),
            Value::String(credentials.signature),
        );

        if self.options.debug {
            debug!(handler, "invoke begin");
        }

        let response = bridge.invoke(handler, merged).await;

        if self.options.debug {
            debug!(handler, response = %serde_json::Value::Object(response.clone()), "invoke end");
        }

        let response = normalize_status(response);
        match status_reason(&response) {
            None => Ok(None),
            Some(reason) if reason_is_success(reason) => Ok(Some(response)),
            Some(reason) => Err(BridgeError::NativeInvocation(reason.to_string())),
        }
    }

    /// Subscribes `listener` to every future event delivered under
    /// `handler`.
    ///
    /// Listening is unprivileged: no credentials are required, only a
    /// present bridge. Each delivered event is status-normalized before it
    /// reaches `listener`. The registration itself completes exactly once,
    /// regardless of how many events fire afterwards, and cannot fail past
    /// the initialization guard.
    ///
    /// # Errors
    ///
    /// - [`BridgeError::BridgeNotInitialized`] - the bridge is absent
    pub async fn on(
        &self,
        handler: &str,
        listener: impl Fn(HostResponse) + Send + Sync + 'static,
    ) -> Result<()> {
        let bridge = self.host.bridge().ok_or(BridgeError::BridgeNotInitialized)?;

        if self.options.debug {
            debug!(handler, "listener registered");
        }

        let debug_enabled = self.options.debug;
        let handler_name = handler.to_string();
        let wrapped: EventListener = Box::new(move |response| {
            let response = normalize_status(response);
            if debug_enabled {
                debug!(
                    handler = %handler_name,
                    response = %serde_json::Value::Object(response.clone()),
                    "event delivered"
                );
            }
            listener(response);
        });
        bridge.subscribe(handler, wrapped).await;
        Ok(())
    }

    /// The captured credentials, if the handshake has armed them.
    pub async fn credentials(&self) -> Option<Credentials> {
        self.credentials.read().await.clone()
    }

    /// Current lifecycle state.
    pub async fn state(&self) -> AdapterState {
        *self.state.read().await
    }

    /// Whether the handshake has fully completed.
    pub async fn is_ready(&self) -> bool {
        self.state().await == AdapterState::Ready
    }

    /// URL of the document as originally loaded, fragment stripped.
    pub fn landed_url(&self) -> &str {
        &self.landed_url
    }

    /// The URL `configure()` would authorize right now.
    ///
    /// The host's iOS integration signs against the originally loaded
    /// document URL, because fragment navigation changes the visible URL
    /// without a real page load; every other platform (and the developer
    /// simulator) re-authorizes against the live URL.
    pub fn authorization_url(&self) -> String {
        if self.is_ios() && !self.is_devtools() {
            self.landed_url.clone()
        } else {
            strip_fragment(&self.host.current_url())
        }
    }

    /// Running on an iOS device.
    pub fn is_ios(&self) -> bool {
        env::is_ios(&self.host.identification())
    }

    /// Running on an Android device.
    pub fn is_android(&self) -> bool {
        env::is_android(&self.host.identification())
    }

    /// Running inside the host application, in either runtime mode.
    pub fn is_host_app(&self) -> bool {
        env::is_host_app(&self.host.identification())
    }

    /// Running in the host's ordinary in-app browser.
    pub fn is_host_browser(&self) -> bool {
        env::is_host_browser(
            &self.host.identification(),
            self.host.runtime_marker().as_deref(),
        )
    }

    /// Running inside the host's mini-program runtime.
    pub fn is_mini_program(&self) -> bool {
        env::is_mini_program(
            &self.host.identification(),
            self.host.runtime_marker().as_deref(),
        )
    }

    /// Running inside the host's developer simulator.
    pub fn is_devtools(&self) -> bool {
        env::is_devtools(&self.host.identification())
    }

    /// Drops captured credentials and returns to `Unconfigured`.
    async fn reset(&self) {
        *self.credentials.write().await = None;
        *self.state.write().await = AdapterState::Unconfigured;
    }
}

fn strip_fragment(url: &str) -> String {
    match url.split_once('#') {
        Some((base, _)) => base.to_string(),
        None => url.to_string(),
    }
}

fn string_array(items: &[String]) -> Value {
    Value::Array(items.iter().cloned().map(Value::String).collect())
}
