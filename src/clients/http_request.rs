//! HTTP request types.
//!
//! This module provides the [`HttpRequest`] type and its builder. A request
//! carries an absolute URL, so it is independent of how the URL was built.

use std::fmt;
use std::path::PathBuf;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Commerce APIs.
///
/// Squarespace uses POST for both creation and updates, so there is no PUT.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating, updating and acting on resources.
    Post,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` if requests with this method may carry a body.
    #[must_use]
    pub const fn allows_body(&self) -> bool {
        matches!(self, Self::Post)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// A request body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestBody {
    /// Pre-serialized JSON bytes.
    Json(Vec<u8>),
    /// A local file streamed as a single multipart form field.
    File {
        /// The form field name.
        field: String,
        /// The file to stream.
        path: PathBuf,
    },
}

/// An HTTP request to be sent through [`HttpClient`](crate::clients::HttpClient).
///
/// # Example
///
/// ```rust
/// use squarespace_commerce::clients::{HttpMethod, HttpRequest};
///
/// let request = HttpRequest::builder(HttpMethod::Get, "https://api.squarespace.com/1.0/commerce/orders")
///     .query_param("cursor", "abc")
///     .build()
///     .unwrap();
///
/// assert_eq!(request.query, vec![("cursor".to_string(), "abc".to_string())]);
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute URL, without query string.
    pub url: String,
    /// The request body, if any.
    pub body: Option<RequestBody>,
    /// Query parameters in insertion order.
    pub query: Vec<(String, String)>,
    /// Whether the configured idempotency key should be attached.
    pub idempotent: bool,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the URL is empty or a GET or
    /// DELETE request carries a body.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.url.is_empty() {
            return Err(InvalidHttpRequestError::MissingUrl);
        }

        if self.body.is_some() && !self.http_method.allows_body() {
            return Err(InvalidHttpRequestError::UnexpectedBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    url: String,
    body: Option<RequestBody>,
    query: Vec<(String, String)>,
    idempotent: bool,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            http_method: method,
            url: url.into(),
            body: None,
            query: Vec::new(),
            idempotent: false,
        }
    }

    /// Sets a pre-serialized JSON body.
    #[must_use]
    pub fn json_body(mut self, bytes: Vec<u8>) -> Self {
        self.body = Some(RequestBody::Json(bytes));
        self
    }

    /// Streams `path` as the multipart form field `field`.
    #[must_use]
    pub fn file_body(mut self, field: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.body = Some(RequestBody::File {
            field: field.into(),
            path: path.into(),
        });
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Marks the request as one that carries the configured idempotency key.
    #[must_use]
    pub const fn idempotent(mut self, idempotent: bool) -> Self {
        self.idempotent = idempotent;
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            url: self.url,
            body: self.body,
            query: self.query,
            idempotent: self.idempotent,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://api.squarespace.com/1.0/commerce/products";

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_post_without_body_is_allowed() {
        let request = HttpRequest::builder(HttpMethod::Post, URL).build().unwrap();
        assert!(request.body.is_none());
    }

    #[test]
    fn test_get_with_body_is_rejected() {
        let result = HttpRequest::builder(HttpMethod::Get, URL)
            .json_body(b"{}".to_vec())
            .build();

        assert!(matches!(
            result,
            Err(InvalidHttpRequestError::UnexpectedBody { method }) if method == "get"
        ));
    }

    #[test]
    fn test_empty_url_is_rejected() {
        let result = HttpRequest::builder(HttpMethod::Get, "").build();
        assert!(matches!(result, Err(InvalidHttpRequestError::MissingUrl)));
    }

    #[test]
    fn test_query_params_keep_insertion_order() {
        let request = HttpRequest::builder(HttpMethod::Get, URL)
            .query_param("modifiedAfter", "2024-01-01T00:00:00Z")
            .query_param("modifiedBefore", "2024-02-01T00:00:00Z")
            .build()
            .unwrap();

        assert_eq!(request.query[0].0, "modifiedAfter");
        assert_eq!(request.query[1].0, "modifiedBefore");
    }

    #[test]
    fn test_file_body_keeps_field_and_path() {
        let request = HttpRequest::builder(HttpMethod::Post, URL)
            .file_body("file", "/tmp/image.png")
            .idempotent(true)
            .build()
            .unwrap();

        assert_eq!(
            request.body,
            Some(RequestBody::File {
                field: "file".to_string(),
                path: PathBuf::from("/tmp/image.png"),
            })
        );
        assert!(request.idempotent);
    }
}
