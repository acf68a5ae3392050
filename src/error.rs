//! Error types for configuring the Squarespace Commerce client.
//!
//! This module contains the errors raised while building a
//! [`CommerceConfig`](crate::CommerceConfig) or validating credential values.
//! Errors from API operations live in [`crate::rest::CommerceError`].
//!
//! # Example
//!
//! ```rust
//! use squarespace_commerce::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// Every constructor of a configuration value returns `Result<T, ConfigError>`
/// so that invalid settings are rejected before any request is built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid Squarespace API key.")]
    EmptyApiKey,

    /// OAuth access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Squarespace OAuth access token.")]
    EmptyAccessToken,

    /// Idempotency key cannot be empty.
    #[error("Idempotency key cannot be empty.")]
    EmptyIdempotencyKey,

    /// Neither an API key nor an access token was configured.
    #[error("Missing credential: either an API key or an OAuth access token must be set before building the configuration.")]
    MissingCredential,

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'MAJOR.MINOR' (e.g., '1.0').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// The default HTTP transport could not be created.
    #[error("Failed to create HTTP client: {reason}")]
    HttpClientBuild {
        /// The reason reported by the transport.
        reason: String,
    },
}
