//! HTTP response types.
//!
//! The body is buffered in full before an [`HttpResponse`] is returned, so
//! decoding never touches the network.

/// A buffered response from the Commerce API.
///
/// # Example
///
/// ```rust
/// use squarespace_commerce::clients::HttpResponse;
///
/// let response = HttpResponse::new(
///     204,
///     "https://api.squarespace.com/1.0/commerce/products/p1".to_string(),
///     Vec::new(),
/// );
/// assert_eq!(response.code, 204);
/// assert!(response.body.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The final request URL, including the query string.
    pub url: String,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(code: u16, url: String, body: Vec<u8>) -> Self {
        Self { code, url, body }
    }
}
