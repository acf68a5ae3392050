//! Inventory API.
//!
//! Stock is tracked per product variant. [`adjust_stock_quantities`] applies
//! a batch of increments, decrements and absolute settings in one call and
//! sends the configured idempotency key.

use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::config::CommerceConfig;
use crate::rest::endpoint::{check_id_list, Endpoint};
use crate::rest::errors::CommerceError;
use crate::rest::resources::common::Pagination;

/// Stock record of one variant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventoryItem {
    /// The variant this stock record belongs to.
    pub variant_id: String,
    /// The variant's SKU.
    pub sku: String,
    /// Product name and variant attributes, e.g. `Shirt [M, Blue]`.
    pub descriptor: String,
    /// Whether stock is untracked. `quantity` is meaningless when set.
    pub is_unlimited: bool,
    /// Units in stock.
    pub quantity: i64,
}

/// Response of [`retrieve_all_inventory`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RetrieveAllInventoryResponse {
    /// Stock records on this page.
    pub inventory: Vec<InventoryItem>,
    /// Cursor for the next page.
    pub pagination: Pagination,
}

/// Response of [`retrieve_specific_inventory`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RetrieveSpecificInventoryResponse {
    /// Stock records for the requested variants.
    pub inventory: Vec<InventoryItem>,
}

/// A relative or absolute quantity for one variant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityOperation {
    /// The variant to adjust.
    pub variant_id: String,
    /// Units to add, remove or set, depending on the list it is in.
    pub quantity: i64,
}

impl QuantityOperation {
    /// Creates an operation.
    #[must_use]
    pub fn new(variant_id: impl Into<String>, quantity: i64) -> Self {
        Self {
            variant_id: variant_id.into(),
            quantity,
        }
    }
}

/// Body of [`adjust_stock_quantities`].
///
/// Empty operation lists are omitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustStockQuantitiesRequest {
    /// Adds `quantity` units to each variant.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub increment_operations: Vec<QuantityOperation>,
    /// Removes `quantity` units from each variant.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub decrement_operations: Vec<QuantityOperation>,
    /// Sets each variant's stock to exactly `quantity`, making it finite.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub set_finite_operations: Vec<QuantityOperation>,
    /// Variant IDs to mark as unlimited.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub set_unlimited_operations: Vec<String>,
}

const RETRIEVE_ALL_INVENTORY: Endpoint = Endpoint::new(
    "RetrieveAllInventory",
    "retrieve all inventory",
    HttpMethod::Get,
    "commerce/inventory",
    200,
);
const RETRIEVE_SPECIFIC_INVENTORY: Endpoint = Endpoint::new(
    "RetrieveSpecificInventory",
    "retrieve specific inventory",
    HttpMethod::Get,
    "commerce/inventory/{inventoryIds}",
    200,
);
const ADJUST_STOCK_QUANTITIES: Endpoint = Endpoint::new(
    "AdjustStockQuantities",
    "adjust stock quantities",
    HttpMethod::Post,
    "commerce/inventory/adjustments",
    204,
)
.idempotent();

/// Lists stock records for all variants.
///
/// # Errors
///
/// Returns [`CommerceError`] unless the API answers `200 OK`.
pub async fn retrieve_all_inventory(
    config: &CommerceConfig,
    cursor: Option<&str>,
) -> Result<RetrieveAllInventoryResponse, CommerceError> {
    RETRIEVE_ALL_INVENTORY
        .call(config)
        .query_param("cursor", cursor.filter(|c| !c.is_empty()))
        .fetch()
        .await
}

/// Retrieves stock records for up to 50 variants.
///
/// # Errors
///
/// Returns [`CommerceError::InvalidInput`] if `inventory_ids` is empty or has
/// more than 50 entries, and [`CommerceError`] unless the API answers `200 OK`.
pub async fn retrieve_specific_inventory<S: AsRef<str>>(
    config: &CommerceConfig,
    inventory_ids: &[S],
) -> Result<RetrieveSpecificInventoryResponse, CommerceError> {
    check_id_list(
        inventory_ids,
        "no inventory IDs provided",
        "cannot retrieve more than 50 inventory IDs",
    )?;
    RETRIEVE_SPECIFIC_INVENTORY
        .call(config)
        .path_list("inventoryIds", inventory_ids)
        .fetch()
        .await
}

/// Applies a batch of stock adjustments.
///
/// # Errors
///
/// Returns [`CommerceError`] unless the API answers `204 No Content`.
pub async fn adjust_stock_quantities(
    config: &CommerceConfig,
    request: &AdjustStockQuantitiesRequest,
) -> Result<u16, CommerceError> {
    ADJUST_STOCK_QUANTITIES
        .call(config)
        .json(request)?
        .status()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_adjust_request_omits_empty_lists() {
        let request = AdjustStockQuantitiesRequest {
            increment_operations: vec![QuantityOperation::new("v1", 3)],
            set_unlimited_operations: vec!["v2".to_string()],
            ..AdjustStockQuantitiesRequest::default()
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "incrementOperations": [{"variantId": "v1", "quantity": 3}],
                "setUnlimitedOperations": ["v2"]
            })
        );
    }

    #[test]
    fn test_adjust_endpoint_is_idempotent() {
        assert!(ADJUST_STOCK_QUANTITIES.idempotent);
        assert!(!RETRIEVE_ALL_INVENTORY.idempotent);
    }

    #[test]
    fn test_inventory_item_deserializes() {
        let response: RetrieveSpecificInventoryResponse = serde_json::from_value(json!({
            "inventory": [{"variantId": "v1", "sku": "S1", "descriptor": "Shirt [M]",
                           "isUnlimited": false, "quantity": 7}]
        }))
        .unwrap();
        assert_eq!(response.inventory[0].quantity, 7);
    }
}
