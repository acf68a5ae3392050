//! URL construction for Commerce API requests.
//!
//! Every request URL has the shape `{base}/{version}/{path}`, where `base` is
//! either the production host or the override configured with
//! [`CommerceConfigBuilder::base_url`](crate::CommerceConfigBuilder::base_url).
//!
//! # Example
//!
//! ```rust
//! use squarespace_commerce::rest::{build_base_url, build_path};
//! use squarespace_commerce::{ApiKey, CommerceConfig};
//! use std::collections::HashMap;
//!
//! let config = CommerceConfig::builder()
//!     .api_key(ApiKey::new("key").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let mut ids = HashMap::new();
//! ids.insert("productId", "p1");
//! ids.insert("variantId", "v9");
//!
//! let path = build_path("commerce/products/{productId}/variants/{variantId}", &ids);
//! assert_eq!(
//!     build_base_url(&config, "1.0", &path),
//!     "https://api.squarespace.com/1.0/commerce/products/p1/variants/v9"
//! );
//! ```

use std::collections::HashMap;
use std::fmt::Display;

use crate::config::CommerceConfig;

/// Production host of the Squarespace APIs.
pub const PRODUCTION_BASE_URL: &str = "https://api.squarespace.com";

/// Builds the full request URL for `path` under API `version`.
///
/// With a base URL override the result is `{override}/{version}/{path}`,
/// otherwise `https://api.squarespace.com/{version}/{path}`. Neither the
/// override nor the segments are validated: empty segments keep their
/// surrounding slashes.
///
/// # Example
///
/// ```rust
/// use squarespace_commerce::rest::build_base_url;
/// use squarespace_commerce::{ApiKey, CommerceConfig};
///
/// let config = CommerceConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .base_url("http://127.0.0.1:4010")
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     build_base_url(&config, "1.0", "commerce/inventory"),
///     "http://127.0.0.1:4010/1.0/commerce/inventory"
/// );
/// assert_eq!(
///     build_base_url(&config, "", "commerce/inventory"),
///     "http://127.0.0.1:4010//commerce/inventory"
/// );
/// ```
#[must_use]
pub fn build_base_url(config: &CommerceConfig, version: &str, path: &str) -> String {
    let base = config.base_url().unwrap_or(PRODUCTION_BASE_URL);
    format!("{base}/{version}/{path}")
}

/// Builds a path from a template by interpolating parameters.
///
/// Replaces `{name}` placeholders in the template with values from the
/// provided map. Placeholders without a value are left untouched.
///
/// # Example
///
/// ```rust
/// use squarespace_commerce::rest::build_path;
/// use std::collections::HashMap;
///
/// let mut ids = HashMap::new();
/// ids.insert("id", "sub-1");
///
/// let path = build_path("webhook_subscriptions/{id}/actions/rotateSecret", &ids);
/// assert_eq!(path, "webhook_subscriptions/sub-1/actions/rotateSecret");
/// ```
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn build_path<V: Display>(template: &str, ids: &HashMap<&str, V>) -> String {
    let mut result = template.to_string();

    for (key, value) in ids {
        let placeholder = format!("{{{key}}}");
        result = result.replace(&placeholder, &value.to_string());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiKey;

    fn config(base_url: Option<&str>) -> CommerceConfig {
        let mut builder = CommerceConfig::builder().api_key(ApiKey::new("key").unwrap());
        if let Some(base_url) = base_url {
            builder = builder.base_url(base_url);
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_base_url_uses_override() {
        let config = config(Some("http://localhost:8080"));
        assert_eq!(
            build_base_url(&config, "1.0", "commerce/inventory"),
            "http://localhost:8080/1.0/commerce/inventory"
        );
    }

    #[test]
    fn test_base_url_defaults_to_production_host() {
        let config = config(None);
        assert_eq!(
            build_base_url(&config, "1.0", "commerce/inventory"),
            "https://api.squarespace.com/1.0/commerce/inventory"
        );
    }

    #[test]
    fn test_empty_base_url_uses_production_host() {
        let built_empty = config(Some(""));
        assert_eq!(
            build_base_url(&built_empty, "1.0", "commerce/inventory"),
            "https://api.squarespace.com/1.0/commerce/inventory"
        );

        let mut cleared = config(Some("http://localhost:8080"));
        cleared.set_base_url(Some(String::new()));
        assert_eq!(cleared.base_url(), None);
        assert_eq!(
            build_base_url(&cleared, "1.0", "profiles"),
            "https://api.squarespace.com/1.0/profiles"
        );
    }

    #[test]
    fn test_empty_version_keeps_double_slash() {
        let config = config(Some("http://localhost:8080"));
        assert_eq!(
            build_base_url(&config, "", "commerce/inventory"),
            "http://localhost:8080//commerce/inventory"
        );
    }

    #[test]
    fn test_empty_path_keeps_trailing_slash() {
        let config = config(None);
        assert_eq!(
            build_base_url(&config, "1.0", ""),
            "https://api.squarespace.com/1.0/"
        );
    }

    #[test]
    fn test_override_is_not_validated() {
        let config = config(Some("not a url"));
        assert_eq!(build_base_url(&config, "1.0", "profiles"), "not a url/1.0/profiles");
    }

    #[test]
    fn test_path_template_interpolation_multiple_ids() {
        let mut ids = HashMap::new();
        ids.insert("productId", "p1");
        ids.insert("imageId", "i2");

        let result = build_path("commerce/products/{productId}/images/{imageId}/order", &ids);
        assert_eq!(result, "commerce/products/p1/images/i2/order");
    }

    #[test]
    fn test_path_template_leaves_unknown_placeholders() {
        let ids: HashMap<&str, &str> = HashMap::new();
        assert_eq!(build_path("commerce/orders/{orderId}", &ids), "commerce/orders/{orderId}");
    }
}
