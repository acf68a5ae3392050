//! Query parameters for list operations.
//!
//! [`QueryParams`] is the flat set of optional filters accepted by the
//! Commerce list endpoints. [`QueryParams::validate`] enforces the rules the
//! remote API places on combining them, so invalid combinations fail before
//! a request is sent.
//!
//! # Rules
//!
//! 1. A cursor cannot be combined with any other parameter; it already
//!    encodes the filters of the listing it came from.
//! 2. `modifiedAfter` and `modifiedBefore` are given together or not at all.
//! 3. Both must be RFC 3339 date-times, e.g. `2024-05-01T00:00:00Z`.
//! 4. `type` is a comma-separated list of `PHYSICAL` and `DIGITAL`, without
//!    duplicates.
//!
//! Empty strings count as unset.
//!
//! # Example
//!
//! ```rust
//! use squarespace_commerce::rest::{QueryParams, QueryParamsError};
//!
//! let params = QueryParams::modified_between("2024-01-01T00:00:00Z", "2024-02-01T00:00:00Z");
//! assert!(params.validate().is_ok());
//!
//! let params = QueryParams {
//!     cursor: Some("abc".to_string()),
//!     status: Some("PENDING".to_string()),
//!     ..QueryParams::default()
//! };
//! assert!(matches!(params.validate(), Err(QueryParamsError::CursorWithOtherParams)));
//! ```

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use thiserror::Error;

/// Errors raised by [`QueryParams::validate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryParamsError {
    /// A cursor was combined with another parameter.
    #[error("cannot use cursor alongside other query parameters")]
    CursorWithOtherParams,

    /// Only one bound of the modification range was given.
    #[error("modifiedAfter and modifiedBefore must both be specified together or not at all")]
    UnpairedModifiedRange,

    /// A modification bound is not an RFC 3339 date-time.
    #[error("{field} is not a valid ISO 8601 UTC date-time string: {reason}")]
    InvalidTimestamp {
        /// The offending parameter, `modifiedAfter` or `modifiedBefore`.
        field: &'static str,
        /// The rejected value.
        value: String,
        /// Why parsing failed.
        reason: String,
    },

    /// The type filter contains an unknown product type.
    #[error("invalid type: type must be either 'PHYSICAL' or 'DIGITAL' (or both comma-separated), got: {value}")]
    InvalidType {
        /// The full type filter as given.
        value: String,
    },

    /// The type filter lists a product type more than once.
    #[error("invalid type: duplicate types found in: {value}")]
    DuplicateType {
        /// The full type filter as given.
        value: String,
    },
}

/// Product types accepted by the `type` filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProductType {
    /// A physical product that ships.
    Physical,
    /// A downloadable product.
    Digital,
}

impl ProductType {
    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Physical => "PHYSICAL",
            Self::Digital => "DIGITAL",
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PHYSICAL" => Ok(Self::Physical),
            "DIGITAL" => Ok(Self::Digital),
            _ => Err(()),
        }
    }
}

/// Optional filters for list operations.
///
/// Each list operation forwards only the parameters its endpoint accepts:
///
/// | Operation | Parameters |
/// |---|---|
/// | products | `cursor`, `modifiedAfter`, `modifiedBefore`, `type` |
/// | orders | `cursor`, `modifiedAfter`, `modifiedBefore`, `fulfillmentStatus` (from `status`) |
/// | profiles | `cursor`, `filter`, `sortDirection`, `sortField` |
/// | transactions | `cursor`, `modifiedAfter`, `modifiedBefore` |
///
/// Any other field is left off the request, but every field is still checked
/// by [`QueryParams::validate`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    /// Pagination cursor from a previous response.
    pub cursor: Option<String>,
    /// Free-text filter, e.g. `isCustomer,true` for profiles.
    pub filter: Option<String>,
    /// Lower bound of the modification window (RFC 3339).
    pub modified_after: Option<String>,
    /// Upper bound of the modification window (RFC 3339).
    pub modified_before: Option<String>,
    /// `ASC` or `DESC`.
    pub sort_direction: Option<String>,
    /// Field to sort by, e.g. `createdOn`.
    pub sort_field: Option<String>,
    /// Status filter; sent as `fulfillmentStatus` for orders.
    pub status: Option<String>,
    /// Comma-separated product types.
    pub product_type: Option<String>,
}

impl QueryParams {
    /// Parameters that continue a previous listing.
    #[must_use]
    pub fn from_cursor(cursor: impl Into<String>) -> Self {
        Self {
            cursor: Some(cursor.into()),
            ..Self::default()
        }
    }

    /// Parameters that restrict a listing to a modification window.
    #[must_use]
    pub fn modified_between(after: impl Into<String>, before: impl Into<String>) -> Self {
        Self {
            modified_after: Some(after.into()),
            modified_before: Some(before.into()),
            ..Self::default()
        }
    }

    /// Sets the product type filter from typed values.
    #[must_use]
    pub fn with_product_types(mut self, types: &[ProductType]) -> Self {
        let joined = types
            .iter()
            .map(ProductType::as_str)
            .collect::<Vec<_>>()
            .join(",");
        self.product_type = Some(joined);
        self
    }

    /// Returns the cursor, if set and non-empty.
    #[must_use]
    pub fn cursor(&self) -> Option<&str> {
        non_empty(&self.cursor)
    }

    /// Returns the free-text filter, if set and non-empty.
    #[must_use]
    pub fn filter(&self) -> Option<&str> {
        non_empty(&self.filter)
    }

    /// Returns the modification lower bound, if set and non-empty.
    #[must_use]
    pub fn modified_after(&self) -> Option<&str> {
        non_empty(&self.modified_after)
    }

    /// Returns the modification upper bound, if set and non-empty.
    #[must_use]
    pub fn modified_before(&self) -> Option<&str> {
        non_empty(&self.modified_before)
    }

    /// Returns the sort direction, if set and non-empty.
    #[must_use]
    pub fn sort_direction(&self) -> Option<&str> {
        non_empty(&self.sort_direction)
    }

    /// Returns the sort field, if set and non-empty.
    #[must_use]
    pub fn sort_field(&self) -> Option<&str> {
        non_empty(&self.sort_field)
    }

    /// Returns the status filter, if set and non-empty.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        non_empty(&self.status)
    }

    /// Returns the product type filter, if set and non-empty.
    #[must_use]
    pub fn product_type(&self) -> Option<&str> {
        non_empty(&self.product_type)
    }

    /// Checks the parameters against the combination rules.
    ///
    /// # Errors
    ///
    /// Returns the first [`QueryParamsError`] found, checking cursor
    /// exclusivity, then range pairing, then timestamps, then the type filter.
    pub fn validate(&self) -> Result<(), QueryParamsError> {
        if self.cursor().is_some() {
            let others = [
                self.filter(),
                self.modified_after(),
                self.modified_before(),
                self.sort_direction(),
                self.sort_field(),
                self.status(),
                self.product_type(),
            ];
            if others.iter().any(Option::is_some) {
                return Err(QueryParamsError::CursorWithOtherParams);
            }
            return Ok(());
        }

        let after = self.modified_after();
        let before = self.modified_before();
        if after.is_some() != before.is_some() {
            return Err(QueryParamsError::UnpairedModifiedRange);
        }

        for (field, value) in [("modifiedAfter", after), ("modifiedBefore", before)] {
            if let Some(value) = value {
                DateTime::parse_from_rfc3339(value).map_err(|e| {
                    QueryParamsError::InvalidTimestamp {
                        field,
                        value: value.to_string(),
                        reason: e.to_string(),
                    }
                })?;
            }
        }

        if let Some(types) = self.product_type() {
            validate_product_types(types)?;
        }

        Ok(())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn validate_product_types(value: &str) -> Result<(), QueryParamsError> {
    let entries: Vec<&str> = value.split(',').map(str::trim).collect();

    let mut seen = HashSet::new();
    for entry in &entries {
        let product_type: ProductType =
            entry
                .parse()
                .map_err(|()| QueryParamsError::InvalidType {
                    value: value.to_string(),
                })?;
        seen.insert(product_type);
    }

    if seen.len() != entries.len() {
        return Err(QueryParamsError::DuplicateType {
            value: value.to_string(),
        });
    }

    Ok(())
}
