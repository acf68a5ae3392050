//! HTTP client types for Squarespace Commerce API communication.
//!
//! This module is the transport layer underneath every API operation. It
//! assembles headers, sends a single request through the injected
//! `reqwest::Client` and hands back a fully buffered response.
//!
//! # Overview
//!
//! - [`HttpClient`]: Sends requests with the configured credential and user agent
//! - [`HttpRequest`]: A request to be sent, built with [`HttpRequestBuilder`]
//! - [`HttpResponse`]: A buffered response
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, DELETE)
//! - [`RequestBody`]: JSON and multipart bodies
//! - [`HttpError`]: Transport failures
//!
//! # Retries and Timeouts
//!
//! There are none. A failed request is returned to the caller immediately.
//! Bound a call with `tokio::time::timeout`, or configure a timeout on the
//! `reqwest::Client` passed to
//! [`CommerceConfigBuilder::http_client`](crate::CommerceConfigBuilder::http_client).

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::HttpClient;
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, RequestBody};
pub use http_response::HttpResponse;
