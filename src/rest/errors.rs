//! Error types for Commerce API operations.
//!
//! Every operation returns [`CommerceError`]. Failures fall into four groups:
//!
//! - **Local preconditions**: [`CommerceError::InvalidInput`],
//!   [`CommerceError::InvalidQuery`] and [`CommerceError::Serialize`] are
//!   raised before any request is sent
//! - **Transport**: [`CommerceError::Http`] wraps connection, timeout and
//!   file errors with the name of the failing action
//! - **Remote**: [`CommerceError::Api`] and [`CommerceError::UndecodableErrorBody`]
//!   are built by [`parse_error_response`] from a non-success response
//! - **Decoding**: [`CommerceError::Deserialize`] for malformed success bodies
//!
//! None of these are retried or logged away; every one reaches the caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use squarespace_commerce::rest::CommerceError;
//! use squarespace_commerce::rest::resources::products;
//!
//! match products::retrieve_specific_products(&config, &ids).await {
//!     Ok(response) => println!("{} products", response.products.len()),
//!     Err(CommerceError::Api { status: 404, .. }) => println!("not found"),
//!     Err(CommerceError::Api { error, .. }) if error.error_type == "INVALID_REQUEST_ERROR" => {
//!         println!("rejected: {}", error.message);
//!     }
//!     Err(e) => println!("{e}"),
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clients::HttpError;
use crate::rest::params::QueryParamsError;

/// The error body returned by the Commerce API.
///
/// Displays as `type: {type}[, subtype: {subtype}], message: {message}[, detail: {detail}]`,
/// omitting the optional segments when they are empty.
///
/// # Example
///
/// ```rust
/// use squarespace_commerce::rest::ApiError;
///
/// let error: ApiError = serde_json::from_str(
///     r#"{"type":"INVALID_REQUEST_ERROR","message":"Invalid cursor"}"#,
/// ).unwrap();
/// assert_eq!(error.to_string(), "type: INVALID_REQUEST_ERROR, message: Invalid cursor");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiError {
    /// Machine-readable error category, e.g. `INVALID_REQUEST_ERROR`.
    #[serde(rename = "type")]
    pub error_type: String,
    /// Finer-grained category, often empty.
    pub subtype: String,
    /// Human-readable description.
    pub message: String,
    /// Additional context, often empty.
    pub detail: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "type: {}", self.error_type)?;
        if !self.subtype.is_empty() {
            write!(f, ", subtype: {}", self.subtype)?;
        }
        write!(f, ", message: {}", self.message)?;
        if !self.detail.is_empty() {
            write!(f, ", detail: {}", self.detail)?;
        }
        Ok(())
    }
}

/// Error type for Commerce API operations.
#[derive(Debug, Error)]
pub enum CommerceError {
    /// A required argument was missing or out of range.
    #[error("{message}")]
    InvalidInput {
        /// What was wrong with the input.
        message: &'static str,
    },

    /// The query parameters failed validation.
    #[error("invalid query parameters: {0}")]
    InvalidQuery(#[from] QueryParamsError),

    /// The request body could not be serialized.
    #[error("failed to marshal request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The request could not be completed.
    #[error("failed to {action}: {source}")]
    Http {
        /// The action being performed, e.g. `create product`.
        action: &'static str,
        /// The underlying transport error.
        #[source]
        source: HttpError,
    },

    /// The API answered with an unexpected status and a structured error body.
    #[error("{endpoint} url: {url}: status: {status}, {error}")]
    Api {
        /// The operation name, e.g. `CreateProduct`.
        endpoint: String,
        /// The request URL, including the query string.
        url: String,
        /// The HTTP status code.
        status: u16,
        /// The decoded error body.
        error: ApiError,
    },

    /// The API answered with an unexpected status and an unreadable body.
    ///
    /// The body is not echoed.
    #[error("{endpoint}: error unmarshalling response body: status: {status}")]
    UndecodableErrorBody {
        /// The operation name.
        endpoint: String,
        /// The HTTP status code.
        status: u16,
    },

    /// A success body could not be decoded into the expected type.
    #[error("failed to unmarshal response body: {0}")]
    Deserialize(#[source] serde_json::Error),
}

impl CommerceError {
    /// Returns the HTTP status code for errors built from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::UndecodableErrorBody { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the decoded API error body, if there was one.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api { error, .. } => Some(error),
            _ => None,
        }
    }

    pub(crate) const fn invalid_input(message: &'static str) -> Self {
        Self::InvalidInput { message }
    }
}

/// Converts a non-success response into a [`CommerceError`].
///
/// If `body` decodes as an [`ApiError`] the result is [`CommerceError::Api`],
/// displayed as
/// `{endpoint} url: {url}: status: {status}, type: {type}[, subtype: {subtype}], message: {message}[, detail: {detail}]`.
/// Otherwise it is [`CommerceError::UndecodableErrorBody`], which carries only
/// the endpoint and status.
///
/// # Example
///
/// ```rust
/// use squarespace_commerce::rest::parse_error_response;
///
/// let error = parse_error_response(
///     "CreateProduct",
///     "https://api.squarespace.com/1.0/commerce/products",
///     br#"{"type":"INVALID_REQUEST_ERROR","subtype":"INVALID_ARGUMENT","message":"Bad name","detail":"name too long"}"#,
///     400,
/// );
/// assert_eq!(
///     error.to_string(),
///     "CreateProduct url: https://api.squarespace.com/1.0/commerce/products: status: 400, \
///      type: INVALID_REQUEST_ERROR, subtype: INVALID_ARGUMENT, message: Bad name, detail: name too long"
/// );
/// ```
#[must_use]
pub fn parse_error_response(endpoint: &str, url: &str, body: &[u8], status: u16) -> CommerceError {
    match serde_json::from_slice::<ApiError>(body) {
        Ok(error) => CommerceError::Api {
            endpoint: endpoint.to_string(),
            url: url.to_string(),
            status,
            error,
        },
        Err(_) => CommerceError::UndecodableErrorBody {
            endpoint: endpoint.to_string(),
            status,
        },
    }
}
