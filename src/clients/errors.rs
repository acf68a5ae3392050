//! Transport-level error types.
//!
//! These errors describe failures that happen before a usable HTTP response
//! exists: invalid requests, network failures, unreadable bodies and upload
//! files that cannot be opened. Non-success responses are not errors at this
//! layer; they are turned into [`CommerceError`](crate::rest::CommerceError)
//! by the operation that issued the request.
//!
//! # Example
//!
//! ```rust,ignore
//! use squarespace_commerce::clients::{HttpClient, HttpError};
//!
//! match client.request(request).await {
//!     Ok(response) => println!("status {}", response.code),
//!     Err(HttpError::Network(e)) => println!("network error: {e}"),
//!     Err(HttpError::Io { path, source }) => println!("{}: {source}", path.display()),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a request fails validation before it is sent.
///
/// # Example
///
/// ```rust
/// use squarespace_commerce::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::UnexpectedBody {
///     method: "get".to_string(),
/// };
/// assert_eq!(error.to_string(), "Cannot send a body with get.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A GET or DELETE request was given a body.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that does not accept a body.
        method: String,
    },

    /// The request URL was empty.
    #[error("Cannot send a request without a URL.")]
    MissingUrl,
}

/// Unified error type for transport failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Connection, DNS, TLS or timeout failure while sending.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The response arrived but its body could not be read.
    #[error("failed to read response body: {0}")]
    ReadBody(#[source] reqwest::Error),

    /// A local file for a multipart upload could not be read.
    #[error("failed to open file {}: {source}", path.display())]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_error_messages() {
        let error = InvalidHttpRequestError::UnexpectedBody {
            method: "delete".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot send a body with delete.");
        assert_eq!(
            InvalidHttpRequestError::MissingUrl.to_string(),
            "Cannot send a request without a URL."
        );
    }

    #[test]
    fn test_invalid_request_converts_into_http_error() {
        let error: HttpError = InvalidHttpRequestError::MissingUrl.into();
        assert!(matches!(error, HttpError::InvalidRequest(_)));
    }

    #[test]
    fn test_io_error_names_the_file() {
        let error = HttpError::Io {
            path: PathBuf::from("/tmp/missing.png"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let message = error.to_string();
        assert!(message.contains("/tmp/missing.png"));
        assert!(message.contains("not found"));
    }

    #[test]
    fn test_http_error_implements_std_error() {
        let error: HttpError = InvalidHttpRequestError::MissingUrl.into();
        let _: &dyn std::error::Error = &error;
    }
}
