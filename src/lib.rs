//! # Squarespace Commerce API Rust Client
//!
//! A typed async client for the Squarespace Commerce REST APIs: products,
//! orders, inventory, profiles, transactions and webhook subscriptions.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`CommerceConfig`] and [`CommerceConfigBuilder`]
//! - Credential newtypes with masked debug output
//! - One `async fn` per remote operation under [`rest::resources`]
//! - Local validation of IDs and list query parameters before any request is sent
//! - Structured errors that keep the API's error type, subtype, message and detail
//!
//! Operations never retry. Dropping the returned future cancels the request.
//!
//! ## Quick Start
//!
//! ```rust
//! use squarespace_commerce::{ApiKey, CommerceConfig};
//!
//! let config = CommerceConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .user_agent("my-store-sync/1.0")
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Calling an Operation
//!
//! ```rust,ignore
//! use squarespace_commerce::rest::resources::inventory;
//!
//! let stock = inventory::retrieve_specific_inventory(&config, &["variant-1", "variant-2"]).await?;
//! for item in &stock.inventory {
//!     println!("{}: {}", item.sku, item.quantity);
//! }
//! ```
//!
//! ## Idempotent Writes
//!
//! Order imports and stock adjustments send the configured idempotency key:
//!
//! ```rust,ignore
//! use squarespace_commerce::IdempotencyKey;
//! use squarespace_commerce::rest::resources::inventory::{self, AdjustStockQuantitiesRequest, QuantityOperation};
//!
//! config.set_idempotency_key(Some(IdempotencyKey::generate()));
//! inventory::adjust_stock_quantities(&config, &AdjustStockQuantitiesRequest {
//!     decrement_operations: vec![QuantityOperation::new("variant-1", 1)],
//!     ..Default::default()
//! }).await?;
//! ```
//!
//! ## Webhooks
//!
//! Webhook subscriptions are managed by OAuth applications, so configure an
//! access token. It is preferred over an API key when both are set:
//!
//! ```rust
//! use squarespace_commerce::{AccessToken, CommerceConfig};
//!
//! let config = CommerceConfig::builder()
//!     .access_token(AccessToken::new("oauth-access-token").unwrap())
//!     .build()
//!     .unwrap();
//! assert_eq!(config.bearer_token(), "oauth-access-token");
//! ```
//!
//! ## Testing Against a Mock Server
//!
//! [`CommerceConfigBuilder::base_url`] replaces the production host, so every
//! operation can be pointed at a local server.

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{
    AccessToken, ApiKey, ApiVersion, CommerceConfig, CommerceConfigBuilder, IdempotencyKey,
};
pub use error::ConfigError;
pub use rest::{ApiError, CommerceError, QueryParams};

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError,
};
