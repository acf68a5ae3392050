//! Typed operations, grouped by Commerce API area.
//!
//! Each module exposes free `async fn`s that take the shared
//! [`CommerceConfig`](crate::CommerceConfig) plus the operation's arguments,
//! together with the request and response records they exchange.
//!
//! | Module | Path prefix |
//! |---|---|
//! | [`products`] | `commerce/products`, `commerce/store_pages` |
//! | [`orders`] | `commerce/orders` |
//! | [`inventory`] | `commerce/inventory` |
//! | [`profiles`] | `profiles` |
//! | [`transactions`] | `commerce/transactions` |
//! | [`webhooks`] | `webhook_subscriptions` |
//!
//! Records shared between areas are in [`common`].

pub mod common;
pub mod inventory;
pub mod orders;
pub mod products;
pub mod profiles;
pub mod transactions;
pub mod webhooks;
