//! Signed authorization credentials and the service that produces them.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Signed authorization tuple proving the page may call privileged
/// capabilities for a specific URL within a validity window.
///
/// Produced once per configuration cycle by a [`CredentialProvider`] and
/// held by the adapter for the rest of the page session. The serialized
/// form uses the host's wire spelling (`appId`, `nonceStr`).
///
/// # Examples
///
/// ```
/// use host_traits::Credentials;
///
/// let credentials = Credentials {
///     app_id: "wx9c3a11d2f8e70b52".to_string(),
///     timestamp: 1_700_000_000,
///     nonce_str: "fZ3kQ8pX".to_string(),
///     signature: "0f9de62fce790f9a083d5c99e95740ceb90c27ed".to_string(),
/// };
/// assert_eq!(credentials.timestamp, 1_700_000_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// Application identity registered with the host.
    pub app_id: String,
    /// Signing time, unix seconds.
    pub timestamp: i64,
    /// Single-use random string bound into the signature.
    pub nonce_str: String,
    /// Signature over the URL, timestamp and nonce.
    pub signature: String,
}

/// Failure reported by a [`CredentialProvider`].
///
/// Surfaced to the adapter's caller verbatim, never wrapped in extra text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CredentialError {
    message: String,
}

impl CredentialError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Signature service mapping an authorization URL to [`Credentials`].
///
/// The only extension point for obtaining signed authorization; typically
/// backed by an application server that holds the signing secret.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Produces credentials valid for `url`.
    async fn credentials_for(&self, url: &str) -> Result<Credentials, CredentialError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_serialize_with_host_spelling() {
        let credentials = Credentials {
            app_id: "wx9c3a11d2f8e70b52".to_string(),
            timestamp: 1_700_000_000,
            nonce_str: "fZ3kQ8pX".to_string(),
            signature: "0f9de62f".to_string(),
        };

        let value = serde_json::to_value(&credentials).unwrap();
        assert_eq!(value["appId"], "wx9c3a11d2f8e70b52");
        assert_eq!(value["nonceStr"], "fZ3kQ8pX");
        assert_eq!(value["timestamp"], 1_700_000_000);
    }

    #[test]
    fn credential_error_displays_raw_message() {
        let err = CredentialError::new("signature service unavailable");
        assert_eq!(err.to_string(), "signature service unavailable");
        assert_eq!(err.message(), "signature service unavailable");
    }
}
