//! HTTP client for Squarespace Commerce API communication.
//!
//! This module provides the [`HttpClient`] type, which attaches the standard
//! headers to a request, sends it through the configured transport and
//! buffers the response.

use std::collections::HashMap;
use std::path::Path;

use reqwest::multipart::{Form, Part};

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest, RequestBody};
use crate::clients::http_response::HttpResponse;
use crate::config::CommerceConfig;

/// HTTP client for making requests to the Commerce API.
///
/// The client handles:
/// - Default headers: bearer authorization, User-Agent and Accept
/// - The `Idempotency-Key` header on requests marked idempotent
/// - JSON and streamed multipart bodies
/// - Buffering the response body
///
/// It performs exactly one round trip per call and never retries.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use squarespace_commerce::{ApiKey, CommerceConfig};
/// use squarespace_commerce::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = CommerceConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
/// let request = HttpRequest::builder(HttpMethod::Get, "https://api.squarespace.com/1.0/commerce/orders")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The injected reqwest transport.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Value for the `Idempotency-Key` header, if configured.
    idempotency_key: Option<String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the session configuration.
    #[must_use]
    pub fn new(config: &CommerceConfig) -> Self {
        let mut default_headers = HashMap::new();
        default_headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", config.bearer_token()),
        );
        default_headers.insert("User-Agent".to_string(), config.user_agent().to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            client: config.http_client().clone(),
            default_headers,
            idempotency_key: config.idempotency_key().map(ToString::to_string),
        }
    }

    /// Sends an HTTP request.
    ///
    /// Any status code is returned as a response; interpreting it is up to
    /// the caller.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - An upload file cannot be opened (`Io`)
    /// - The request cannot be sent (`Network`)
    /// - The response body cannot be read (`ReadBody`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
            HttpMethod::Delete => self.client.delete(&request.url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if request.idempotent {
            if let Some(key) = &self.idempotency_key {
                req_builder = req_builder.header("Idempotency-Key", key);
            }
        }

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        // reqwest sets the multipart content type, boundary included
        match request.body {
            Some(RequestBody::Json(bytes)) => {
                req_builder = req_builder
                    .header("Content-Type", "application/json")
                    .body(bytes);
            }
            Some(RequestBody::File { field, path }) => {
                req_builder = req_builder.multipart(Self::file_form(field, &path).await?);
            }
            None => {}
        }

        let built = req_builder.build().map_err(HttpError::Network)?;
        let url = built.url().to_string();

        tracing::debug!(method = %request.http_method, url = %url, "Sending request");

        let res = self.client.execute(built).await.map_err(HttpError::Network)?;

        let code = res.status().as_u16();
        let body = res.bytes().await.map_err(HttpError::ReadBody)?.to_vec();

        tracing::debug!(status = code, url = %url, bytes = body.len(), "Received response");

        Ok(HttpResponse::new(code, url, body))
    }

    async fn file_form(field: String, path: &Path) -> Result<Form, HttpError> {
        let io_error = |source| HttpError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = tokio::fs::File::open(path).await.map_err(io_error)?;
        let length = file.metadata().await.map_err(io_error)?.len();

        let file_name = path
            .file_name()
            .map_or_else(|| "upload".to_string(), |n| n.to_string_lossy().into_owned());
        let mime = mime_guess::from_path(path).first_or_octet_stream();

        let part = Part::stream_with_length(reqwest::Body::from(file), length)
            .file_name(file_name)
            .mime_str(mime.as_ref())
            .map_err(HttpError::Network)?;

        Ok(Form::new().part(field, part))
    }
}
