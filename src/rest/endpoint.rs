//! Generic execution of a typed Commerce API operation.
//!
//! Each public operation is an [`Endpoint`] constant plus a few lines that
//! check its arguments and fill in a [`Call`]. The call then runs the shared
//! sequence: build the URL, serialize the body, send through
//! [`HttpClient`], compare the status against the endpoint's single success
//! code, and either decode the body or hand it to [`parse_error_response`].
//!
//! # Example
//!
//! ```rust,ignore
//! use squarespace_commerce::clients::HttpMethod;
//! use squarespace_commerce::rest::Endpoint;
//!
//! const RETRIEVE_SPECIFIC_ORDER: Endpoint = Endpoint::new(
//!     "RetrieveSpecificOrder",
//!     "retrieve order",
//!     HttpMethod::Get,
//!     "commerce/orders/{orderId}",
//!     200,
//! );
//!
//! let order: Order = RETRIEVE_SPECIFIC_ORDER
//!     .call(&config)
//!     .path_param("orderId", order_id)
//!     .fetch()
//!     .await?;
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, RequestBody,
};
use crate::config::CommerceConfig;
use crate::rest::errors::{parse_error_response, CommerceError};
use crate::rest::path::{build_base_url, build_path};

/// Maximum number of IDs accepted by the bulk retrieval endpoints.
pub const MAX_IDS_PER_REQUEST: usize = 50;

/// A fixed description of one remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Operation name used in error messages, e.g. `CreateProduct`.
    pub name: &'static str,
    /// Lowercase action used when wrapping transport errors, e.g. `create product`.
    pub action: &'static str,
    /// The HTTP method.
    pub http_method: HttpMethod,
    /// Path template relative to the version segment, with `{name}` placeholders.
    pub template: &'static str,
    /// The only status code treated as success.
    pub success: u16,
    /// Whether the configured idempotency key is attached.
    pub idempotent: bool,
}

impl Endpoint {
    /// Creates a new `Endpoint`.
    #[must_use]
    pub const fn new(
        name: &'static str,
        action: &'static str,
        http_method: HttpMethod,
        template: &'static str,
        success: u16,
    ) -> Self {
        Self {
            name,
            action,
            http_method,
            template,
            success,
            idempotent: false,
        }
    }

    /// Marks the endpoint as accepting an `Idempotency-Key` header.
    #[must_use]
    pub const fn idempotent(mut self) -> Self {
        self.idempotent = true;
        self
    }

    /// Starts a call of this endpoint with `config`.
    #[must_use]
    pub fn call(self, config: &CommerceConfig) -> Call<'_> {
        Call {
            config,
            endpoint: self,
            path_params: HashMap::new(),
            query: Vec::new(),
            body: None,
        }
    }
}

/// A single pending invocation of an [`Endpoint`].
#[derive(Debug)]
pub struct Call<'a> {
    config: &'a CommerceConfig,
    endpoint: Endpoint,
    path_params: HashMap<&'static str, String>,
    query: Vec<(String, String)>,
    body: Option<RequestBody>,
}

impl<'a> Call<'a> {
    /// Fills a path placeholder, percent-encoding the value.
    #[must_use]
    pub fn path_param(mut self, name: &'static str, value: &str) -> Self {
        self.path_params
            .insert(name, urlencoding::encode(value).into_owned());
        self
    }

    /// Fills a path placeholder with a comma-joined list of IDs.
    ///
    /// Each ID is percent-encoded; the separating commas are not.
    #[must_use]
    pub fn path_list<S: AsRef<str>>(mut self, name: &'static str, ids: &[S]) -> Self {
        let joined = ids
            .iter()
            .map(|id| urlencoding::encode(id.as_ref()).into_owned())
            .collect::<Vec<_>>()
            .join(",");
        self.path_params.insert(name, joined);
        self
    }

    /// Adds a query parameter when `value` is present.
    #[must_use]
    pub fn query_param(mut self, name: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.query.push((name.to_string(), value.to_string()));
        }
        self
    }

    /// Serializes `body` as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`CommerceError::Serialize`] if serialization fails.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, CommerceError> {
        let bytes = serde_json::to_vec(body).map_err(CommerceError::Serialize)?;
        self.body = Some(RequestBody::Json(bytes));
        Ok(self)
    }

    /// Streams the file at `path` as the multipart field `field`.
    #[must_use]
    pub fn file(mut self, field: &str, path: impl Into<PathBuf>) -> Self {
        self.body = Some(RequestBody::File {
            field: field.to_string(),
            path: path.into(),
        });
        self
    }

    /// Returns the URL this call will be sent to, without the query string.
    #[must_use]
    pub fn url(&self) -> String {
        let path = build_path(self.endpoint.template, &self.path_params);
        build_base_url(self.config, self.config.api_version().as_str(), &path)
    }

    /// Sends the call and decodes the success body as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`CommerceError`] on transport failure, on any status other
    /// than the endpoint's success code, or if the body cannot be decoded.
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<T, CommerceError> {
        let response = self.send().await?;
        serde_json::from_slice(&response.body).map_err(CommerceError::Deserialize)
    }

    /// Sends the call and returns only the status code.
    ///
    /// Used by operations whose success response has no body.
    ///
    /// # Errors
    ///
    /// Returns [`CommerceError`] on transport failure or on any status other
    /// than the endpoint's success code.
    pub async fn status(self) -> Result<u16, CommerceError> {
        let response = self.send().await?;
        Ok(response.code)
    }

    async fn send(self) -> Result<HttpResponse, CommerceError> {
        let endpoint = self.endpoint;
        let url = self.url();

        let mut builder = HttpRequest::builder(endpoint.http_method, url)
            .idempotent(endpoint.idempotent);
        for (name, value) in self.query {
            builder = builder.query_param(name, value);
        }
        match self.body {
            Some(RequestBody::Json(bytes)) => builder = builder.json_body(bytes),
            Some(RequestBody::File { field, path }) => builder = builder.file_body(field, path),
            None => {}
        }

        let http_error = |source: HttpError| CommerceError::Http {
            action: endpoint.action,
            source,
        };

        let request = builder.build().map_err(|e| http_error(e.into()))?;

        tracing::debug!(endpoint = endpoint.name, "Calling Commerce API");

        let response = HttpClient::new(self.config)
            .request(request)
            .await
            .map_err(http_error)?;

        if response.code != endpoint.success {
            tracing::warn!(
                endpoint = endpoint.name,
                status = response.code,
                expected = endpoint.success,
                "Unexpected status from Commerce API"
            );
            return Err(parse_error_response(
                endpoint.name,
                &response.url,
                &response.body,
                response.code,
            ));
        }

        Ok(response)
    }
}

/// Checks a bulk ID list against the per-request bounds.
pub(crate) fn check_id_list<S: AsRef<str>>(
    ids: &[S],
    empty: &'static str,
    too_many: &'static str,
) -> Result<(), CommerceError> {
    if ids.is_empty() {
        return Err(CommerceError::invalid_input(empty));
    }
    if ids.len() > MAX_IDS_PER_REQUEST {
        return Err(CommerceError::invalid_input(too_many));
    }
    Ok(())
}

/// Checks that a single required ID is non-empty.
pub(crate) fn require_id(id: &str, message: &'static str) -> Result<(), CommerceError> {
    if id.is_empty() {
        return Err(CommerceError::invalid_input(message));
    }
    Ok(())
}
