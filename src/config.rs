//! Client configuration.
//!
//! A [`ClientConfig`] can come from a bare access token or from a settings
//! mapping such as a JSON or TOML file. Fields missing from the mapping take
//! their defaults.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default page size injected as `count` when a call does not set one.
pub const DEFAULT_LIMIT: u32 = 10;

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

/// Host, port and path prefix of the Instagram API.
pub const DEFAULT_BASE_URL: &str = "https://api.instagram.com:443/v1/";

/// Settings shared by every call made through one client.
///
/// # Examples
///
/// ```
/// use instagram_client::ClientConfig;
/// use std::time::Duration;
///
/// // From a bare token
/// let config = ClientConfig::from("my-access-token");
/// assert_eq!(config.limit, 10);
///
/// // From a settings mapping
/// let config: ClientConfig = serde_json::from_str(
///     r#"{ "access_token": "my-access-token", "timeout": 2000 }"#,
/// ).unwrap();
/// assert_eq!(config.timeout(), Duration::from_secs(2));
/// assert_eq!(config.limit, 10);
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Token sent as `access_token` on every call.
    pub access_token: Option<String>,

    /// Page size sent as `count` when a call does not set one.
    pub limit: u32,

    /// Request timeout in milliseconds.
    #[serde(rename = "timeout")]
    pub timeout_ms: u64,
}

impl ClientConfig {
    /// Creates a configuration with the given token and default settings.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
            ..Default::default()
        }
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Returns the configured token.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            limit: DEFAULT_LIMIT,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl From<&str> for ClientConfig {
    fn from(access_token: &str) -> Self {
        Self::new(access_token)
    }
}

impl From<String> for ClientConfig {
    fn from(access_token: String) -> Self {
        Self::new(access_token)
    }
}

// Keep the token out of logs.
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .field("limit", &self.limit)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert!(config.access_token().is_none());
        assert_eq!(config.limit, 10);
        assert_eq!(config.timeout(), Duration::from_millis(15_000));
    }

    #[test]
    fn test_from_bare_token() {
        let config = ClientConfig::from("abc.123");
        assert_eq!(config.access_token(), Some("abc.123"));
        assert_eq!(config.limit, DEFAULT_LIMIT);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_from_mapping() {
        let config: ClientConfig = serde_json::from_value(serde_json::json!({
            "access_token": "abc.123",
            "limit": 33,
            "timeout": 500,
        }))
        .unwrap();

        assert_eq!(config.access_token(), Some("abc.123"));
        assert_eq!(config.limit, 33);
        assert_eq!(config.timeout(), Duration::from_millis(500));
    }

    #[test]
    fn test_mapping_without_token() {
        let config: ClientConfig = serde_json::from_str(r#"{ "limit": 5 }"#).unwrap();
        assert!(config.access_token.is_none());
        assert_eq!(config.limit, 5);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_debug_redacts_token() {
        let rendered = format!("{:?}", ClientConfig::from("super-secret"));
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
