//! Session configuration for the Squarespace Commerce client.
//!
//! A [`CommerceConfig`] carries everything an API operation needs besides
//! its own arguments: the credential, the HTTP transport, the user agent,
//! an optional idempotency key and an optional base URL override.
//!
//! # Overview
//!
//! - [`CommerceConfig`]: The configuration passed by reference to every operation
//! - [`CommerceConfigBuilder`]: A builder for constructing [`CommerceConfig`] instances
//! - [`ApiKey`] and [`AccessToken`]: Credential newtypes with masked debug output
//! - [`IdempotencyKey`]: Token for the `Idempotency-Key` header
//! - [`ApiVersion`]: The Commerce API version to target
//!
//! # Example
//!
//! ```rust
//! use squarespace_commerce::{ApiKey, CommerceConfig, IdempotencyKey};
//!
//! let mut config = CommerceConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .user_agent("my-app/1.0")
//!     .build()
//!     .unwrap();
//!
//! // Callers may swap the idempotency key between calls.
//! config.set_idempotency_key(Some(IdempotencyKey::generate()));
//! assert!(config.idempotency_key().is_some());
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, ApiKey, IdempotencyKey};
pub use version::ApiVersion;

use crate::error::ConfigError;

/// User agent sent when the caller does not configure one.
pub const DEFAULT_USER_AGENT: &str = "squarespace-commerce/default-client";

/// Returns `user_agent`, or [`DEFAULT_USER_AGENT`] when it is empty.
///
/// # Example
///
/// ```rust
/// use squarespace_commerce::config::{resolve_user_agent, DEFAULT_USER_AGENT};
///
/// assert_eq!(resolve_user_agent(""), DEFAULT_USER_AGENT);
/// assert_eq!(resolve_user_agent("my-app/2.0"), "my-app/2.0");
/// ```
#[must_use]
pub fn resolve_user_agent(user_agent: &str) -> &str {
    if user_agent.is_empty() {
        DEFAULT_USER_AGENT
    } else {
        user_agent
    }
}

/// Configuration shared by every Commerce API operation.
///
/// The library only reads from the configuration. Callers may mutate it
/// between calls (for example to rotate the idempotency key), but must not
/// mutate it while a call that borrowed it is in flight.
///
/// # Thread Safety
///
/// `CommerceConfig` is `Clone`, `Send`, and `Sync`. Cloning is cheap because
/// the underlying `reqwest::Client` is reference counted.
///
/// # Example
///
/// ```rust
/// use squarespace_commerce::{AccessToken, CommerceConfig};
///
/// let config = CommerceConfig::builder()
///     .access_token(AccessToken::new("oauth-token").unwrap())
///     .base_url("http://127.0.0.1:8080")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url(), Some("http://127.0.0.1:8080"));
/// ```
#[derive(Clone, Debug)]
pub struct CommerceConfig {
    api_key: Option<ApiKey>,
    access_token: Option<AccessToken>,
    http_client: reqwest::Client,
    user_agent: String,
    idempotency_key: Option<IdempotencyKey>,
    base_url: Option<String>,
    api_version: ApiVersion,
}

impl CommerceConfig {
    /// Creates a new builder for constructing a `CommerceConfig`.
    #[must_use]
    pub fn builder() -> CommerceConfigBuilder {
        CommerceConfigBuilder::new()
    }

    /// Returns the API key, if configured.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Returns the OAuth access token, if configured.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the value sent as the bearer token.
    ///
    /// The OAuth access token takes precedence over the API key.
    #[must_use]
    pub fn bearer_token(&self) -> &str {
        self.access_token
            .as_ref()
            .map(AsRef::as_ref)
            .or_else(|| self.api_key.as_ref().map(AsRef::as_ref))
            .unwrap_or_default()
    }

    /// Returns the injected HTTP transport.
    #[must_use]
    pub const fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Returns the user agent sent with every request.
    ///
    /// Never empty: an unset user agent resolves to [`DEFAULT_USER_AGENT`].
    #[must_use]
    pub fn user_agent(&self) -> &str {
        resolve_user_agent(&self.user_agent)
    }

    /// Returns the idempotency key, if configured.
    #[must_use]
    pub const fn idempotency_key(&self) -> Option<&IdempotencyKey> {
        self.idempotency_key.as_ref()
    }

    /// Returns the base URL override, if configured.
    ///
    /// An empty override counts as unset.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref().filter(|url| !url.is_empty())
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Replaces the idempotency key used by subsequent calls.
    pub fn set_idempotency_key(&mut self, key: Option<IdempotencyKey>) {
        self.idempotency_key = key;
    }

    /// Stops sending an idempotency key.
    pub fn clear_idempotency_key(&mut self) {
        self.idempotency_key = None;
    }

    /// Replaces the user agent used by subsequent calls.
    ///
    /// An empty string restores [`DEFAULT_USER_AGENT`].
    pub fn set_user_agent(&mut self, user_agent: impl Into<String>) {
        self.user_agent = user_agent.into();
    }

    /// Replaces the base URL override used by subsequent calls.
    pub fn set_base_url(&mut self, base_url: Option<String>) {
        self.base_url = base_url;
    }
}

// Verify CommerceConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CommerceConfig>();
};

/// Builder for constructing [`CommerceConfig`] instances.
///
/// At least one credential, either an API key or an OAuth access token, is
/// required. All other fields have defaults.
///
/// # Defaults
///
/// - `http_client`: A `reqwest::Client` using rustls, with no timeout
/// - `user_agent`: [`DEFAULT_USER_AGENT`]
/// - `idempotency_key`: `None`
/// - `base_url`: `None` (requests go to `https://api.squarespace.com`)
/// - `api_version`: [`ApiVersion::latest()`]
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use squarespace_commerce::{ApiKey, ApiVersion, CommerceConfig, IdempotencyKey};
///
/// let transport = reqwest::Client::builder()
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
///
/// let config = CommerceConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .http_client(transport)
///     .user_agent("inventory-sync/0.3")
///     .idempotency_key(IdempotencyKey::new("sync-2024-06-01").unwrap())
///     .api_version(ApiVersion::V1_0)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct CommerceConfigBuilder {
    api_key: Option<ApiKey>,
    access_token: Option<AccessToken>,
    http_client: Option<reqwest::Client>,
    user_agent: Option<String>,
    idempotency_key: Option<IdempotencyKey>,
    base_url: Option<String>,
    api_version: Option<ApiVersion>,
}

impl CommerceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key.
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the OAuth access token.
    ///
    /// Required for webhook subscription operations.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the HTTP transport.
    ///
    /// Use this to share a connection pool, configure timeouts, or route
    /// requests through a proxy.
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Sets the user agent. An empty value falls back to [`DEFAULT_USER_AGENT`].
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the idempotency key attached to order and inventory mutations.
    #[must_use]
    pub fn idempotency_key(mut self, key: IdempotencyKey) -> Self {
        self.idempotency_key = Some(key);
        self
    }

    /// Overrides the `https://api.squarespace.com` base URL.
    ///
    /// The value is not validated; a malformed URL surfaces as a transport
    /// error on the first call.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Builds the [`CommerceConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] if neither an API key nor an
    /// access token is set, and [`ConfigError::HttpClientBuild`] if the
    /// default transport cannot be created.
    pub fn build(self) -> Result<CommerceConfig, ConfigError> {
        if self.api_key.is_none() && self.access_token.is_none() {
            return Err(ConfigError::MissingCredential);
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .use_rustls_tls()
                .build()
                .map_err(|e| ConfigError::HttpClientBuild {
                    reason: e.to_string(),
                })?,
        };

        Ok(CommerceConfig {
            api_key: self.api_key,
            access_token: self.access_token,
            http_client,
            user_agent: self.user_agent.unwrap_or_default(),
            idempotency_key: self.idempotency_key,
            base_url: self.base_url,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_key_config() -> CommerceConfig {
        CommerceConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_a_credential() {
        let result = CommerceConfigBuilder::new().build();
        assert!(matches!(result, Err(ConfigError::MissingCredential)));
    }

    #[test]
    fn test_builder_accepts_access_token_only() {
        let config = CommerceConfig::builder()
            .access_token(AccessToken::new("token").unwrap())
            .build()
            .unwrap();

        assert!(config.api_key().is_none());
        assert_eq!(config.bearer_token(), "token");
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = api_key_config();

        assert_eq!(config.api_version(), &ApiVersion::latest());
        assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
        assert!(config.idempotency_key().is_none());
        assert!(config.base_url().is_none());
        assert!(config.access_token().is_none());
    }

    #[test]
    fn test_access_token_takes_precedence_as_bearer() {
        let config = CommerceConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.bearer_token(), "token");
    }

    #[test]
    fn test_empty_user_agent_resolves_to_default() {
        let config = CommerceConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .user_agent("")
            .build()
            .unwrap();

        assert_eq!(config.user_agent(), DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_custom_user_agent_is_passed_through() {
        let config = CommerceConfig::builder()
            .api_key(ApiKey::new("key").unwrap())
            .user_agent("my-app/1.0")
            .build()
            .unwrap();

        assert_eq!(config.user_agent(), "my-app/1.0");
    }

    #[test]
    fn test_config_can_be_mutated_between_calls() {
        let mut config = api_key_config();

        config.set_idempotency_key(Some(IdempotencyKey::new("first").unwrap()));
        assert_eq!(config.idempotency_key().unwrap().as_ref(), "first");

        config.set_idempotency_key(None);
        assert!(config.idempotency_key().is_none());

        config.set_user_agent("other/2.0");
        assert_eq!(config.user_agent(), "other/2.0");

        config.set_base_url(Some("http://localhost:9000".to_string()));
        assert_eq!(config.base_url(), Some("http://localhost:9000"));
    }

    #[test]
    fn test_config_debug_does_not_leak_credentials() {
        let config = CommerceConfig::builder()
            .api_key(ApiKey::new("very-secret-key").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("CommerceConfig"));
        assert!(!debug_str.contains("very-secret-key"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CommerceConfig>();
    }
}
