//! Records shared by several resource areas.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A monetary amount.
///
/// Values are decimal strings, e.g. `"19.95"`, to avoid floating point loss.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amount {
    /// ISO 4217 currency code.
    pub currency: String,
    /// Decimal value.
    pub value: String,
}

impl Amount {
    /// Creates an amount.
    #[must_use]
    pub fn new(currency: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            value: value.into(),
        }
    }
}

/// Cursor pagination block returned by list endpoints.
///
/// Pass `next_page_cursor` to
/// [`QueryParams::from_cursor`](crate::rest::QueryParams::from_cursor) to
/// fetch the following page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    /// Whether another page exists.
    pub has_next_page: bool,
    /// Cursor for the next page.
    pub next_page_cursor: Option<String>,
    /// Full URL of the next page.
    pub next_page_url: Option<String>,
}

/// A postal address.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    /// Recipient's first name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Recipient's last name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// First street line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    /// Second street line, e.g. an apartment or suite.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    /// City or locality.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State, province or region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// ISO 3166-1 alpha-2 country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// Postal or ZIP code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A field that can be absent, explicitly `null`, or set.
///
/// `Option` cannot tell "leave unchanged" from "clear", but some endpoints
/// give the two different meanings. Pair with
/// `#[serde(default, skip_serializing_if = "Nullable::is_absent")]`.
///
/// # Example
///
/// ```rust
/// use serde::Serialize;
/// use squarespace_commerce::rest::resources::common::Nullable;
///
/// #[derive(Serialize)]
/// struct Patch {
///     #[serde(skip_serializing_if = "Nullable::is_absent")]
///     field: Nullable<String>,
/// }
///
/// let absent = Patch { field: Nullable::Absent };
/// let null = Patch { field: Nullable::Null };
/// let set = Patch { field: Nullable::Value("x".to_string()) };
///
/// assert_eq!(serde_json::to_string(&absent).unwrap(), "{}");
/// assert_eq!(serde_json::to_string(&null).unwrap(), r#"{"field":null}"#);
/// assert_eq!(serde_json::to_string(&set).unwrap(), r#"{"field":"x"}"#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Nullable<T> {
    /// The field is omitted.
    Absent,
    /// The field is sent as `null`.
    Null,
    /// The field is sent with a value.
    Value(T),
}

impl<T> Nullable<T> {
    /// Returns `true` if the field is omitted.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns the value, if set.
    #[must_use]
    pub const fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(value) => value.serialize(serializer),
            Self::Absent | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Holder {
        #[serde(default, skip_serializing_if = "Nullable::is_absent")]
        value: Nullable<String>,
    }

    #[test]
    fn test_nullable_deserializes_three_states() {
        let absent: Holder = serde_json::from_value(json!({})).unwrap();
        let null: Holder = serde_json::from_value(json!({"value": null})).unwrap();
        let set: Holder = serde_json::from_value(json!({"value": "x"})).unwrap();

        assert_eq!(absent.value, Nullable::Absent);
        assert_eq!(null.value, Nullable::Null);
        assert_eq!(set.value.as_value().map(String::as_str), Some("x"));
    }

    #[test]
    fn test_nullable_from_option() {
        assert_eq!(Nullable::from(None::<String>), Nullable::Null);
        assert_eq!(Nullable::from(Some(1)), Nullable::Value(1));
    }

    #[test]
    fn test_pagination_tolerates_missing_fields() {
        let pagination: Pagination = serde_json::from_value(json!({"hasNextPage": false})).unwrap();
        assert!(!pagination.has_next_page);
        assert!(pagination.next_page_cursor.is_none());

        let pagination: Pagination = serde_json::from_value(json!({
            "hasNextPage": true,
            "nextPageCursor": "b00b",
            "nextPageUrl": "https://api.squarespace.com/1.0/commerce/orders?cursor=b00b"
        }))
        .unwrap();
        assert_eq!(pagination.next_page_cursor.as_deref(), Some("b00b"));
    }

    #[test]
    fn test_address_skips_unset_fields() {
        let address = Address {
            city: Some("Portland".to_string()),
            ..Address::default()
        };
        assert_eq!(
            serde_json::to_value(&address).unwrap(),
            json!({"city": "Portland"})
        );
    }
}
