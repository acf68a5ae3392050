//! Commerce REST API operations and their shared pipeline.
//!
//! Every remote operation goes through the same steps:
//!
//! - **URL construction**: [`build_base_url`] joins the base URL, the API
//!   version and the endpoint path; [`build_path`] fills `{name}` placeholders
//! - **Query validation**: [`QueryParams::validate`] enforces the cursor and
//!   modification-window rules before a list request is sent
//! - **Execution**: an [`Endpoint`] constant is turned into a [`Call`], which
//!   attaches headers and body, sends it through
//!   [`HttpClient`](crate::clients::HttpClient), and checks the one success status
//! - **Error parsing**: [`parse_error_response`] turns any other status into a
//!   [`CommerceError`]
//!
//! The operations themselves live in [`resources`], one module per API area.
//!
//! # Example
//!
//! ```rust,ignore
//! use squarespace_commerce::rest::{QueryParams, ProductType};
//! use squarespace_commerce::rest::resources::products;
//!
//! let params = QueryParams::default().with_product_types(&[ProductType::Physical]);
//! let mut page = products::retrieve_all_products(&config, &params).await?;
//!
//! while let Some(cursor) = page.pagination.next_page_cursor.clone() {
//!     page = products::retrieve_all_products(&config, &QueryParams::from_cursor(cursor)).await?;
//! }
//! ```

mod endpoint;
mod errors;
mod params;
mod path;

pub mod resources;

pub use endpoint::{Call, Endpoint, MAX_IDS_PER_REQUEST};
pub use errors::{parse_error_response, ApiError, CommerceError};
pub use params::{ProductType, QueryParams, QueryParamsError};
pub use path::{build_base_url, build_path, PRODUCTION_BASE_URL};
