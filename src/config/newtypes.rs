//! Validated newtype wrappers for credentials and request tokens.
//!
//! Each wrapper rejects empty values on construction. Secrets mask their
//! contents in `Debug` output so they do not end up in logs.

use crate::error::ConfigError;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::fmt;

/// Length of keys produced by [`IdempotencyKey::generate`].
const GENERATED_KEY_LEN: usize = 32;

/// A validated Squarespace API key.
///
/// API keys are created in the Squarespace Developer API Keys panel and are
/// sent as a bearer token.
///
/// # Security
///
/// The `Debug` implementation prints `ApiKey(*****)` instead of the key.
///
/// # Example
///
/// ```rust
/// use squarespace_commerce::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated OAuth access token.
///
/// Webhook subscription endpoints only accept OAuth tokens, so operations in
/// [`crate::rest::resources::webhooks`] require one.
///
/// # Example
///
/// ```rust
/// use squarespace_commerce::AccessToken;
///
/// let token = AccessToken::new("oauth-token").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A token sent in the `Idempotency-Key` header.
///
/// The remote service uses it to deduplicate retried order and inventory
/// mutations. This crate never retries on its own; the key is passed through.
///
/// # Example
///
/// ```rust
/// use squarespace_commerce::IdempotencyKey;
///
/// let key = IdempotencyKey::new("order-42").unwrap();
/// assert_eq!(key.to_string(), "order-42");
///
/// let generated = IdempotencyKey::generate();
/// assert_eq!(generated.as_ref().len(), 32);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IdempotencyKey(String);

impl IdempotencyKey {
    /// Creates an idempotency key from a caller-supplied value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyIdempotencyKey`] if the value is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyIdempotencyKey);
        }
        Ok(Self(key))
    }

    /// Generates a random alphanumeric key.
    #[must_use]
    pub fn generate() -> Self {
        let key: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(GENERATED_KEY_LEN)
            .map(char::from)
            .collect();
        Self(key)
    }
}

impl AsRef<str> for IdempotencyKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdempotencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
