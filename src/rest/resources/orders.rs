//! Orders API.
//!
//! Orders can be imported from another channel with [`create_order`], marked
//! as shipped with [`fulfill_order`], and listed or fetched individually.
//!
//! [`create_order`] sends the configured
//! [`IdempotencyKey`](crate::IdempotencyKey) so a repeated import with the
//! same key is not applied twice by the remote service.
//!
//! # Example
//!
//! ```rust,ignore
//! use squarespace_commerce::rest::QueryParams;
//! use squarespace_commerce::rest::resources::orders;
//!
//! let params = QueryParams {
//!     status: Some("PENDING".to_string()),
//!     ..QueryParams::default()
//! };
//! let page = orders::retrieve_all_orders(&config, &params).await?;
//! for order in &page.result {
//!     println!("{} {}", order.order_number, order.grand_total.value);
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::config::CommerceConfig;
use crate::rest::endpoint::{require_id, Endpoint};
use crate::rest::errors::CommerceError;
use crate::rest::params::QueryParams;
use crate::rest::resources::common::{Address, Amount, Pagination};

const ORDER_ID_REQUIRED: &str = "orderID is required";

/// An order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    /// The unique identifier of the order.
    pub id: String,
    /// The merchant-facing order number.
    pub order_number: String,
    /// ISO 8601 creation time.
    pub created_on: String,
    /// ISO 8601 time of the last change.
    pub modified_on: String,
    /// Where the order was placed, e.g. `web` or an external channel name.
    pub channel: String,
    /// Whether the order was placed in test mode.
    pub testmode: bool,
    /// Email address of the customer.
    pub customer_email: String,
    /// Billing address, if collected.
    pub billing_address: Option<Address>,
    /// Shipping address, if the order ships.
    pub shipping_address: Option<Address>,
    /// `PENDING`, `FULFILLED` or `CANCELED`.
    pub fulfillment_status: String,
    /// Items purchased.
    pub line_items: Vec<OrderLineItem>,
    /// Sum of line items before shipping, discounts and tax.
    pub subtotal: Amount,
    /// Total shipping charged.
    pub shipping_total: Amount,
    /// Total discounts applied.
    pub discount_total: Amount,
    /// Total tax charged.
    pub tax_total: Amount,
    /// Total refunded so far.
    pub refunded_total: Amount,
    /// Amount charged to the customer.
    pub grand_total: Amount,
    /// Shipments recorded against the order.
    pub fulfillments: Vec<Fulfillment>,
    /// Whether prices include tax: `EXCLUSIVE` or `INCLUSIVE`.
    pub price_tax_interpretation: Option<String>,
}

/// A line of an order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderLineItem {
    /// The unique identifier of the line item.
    pub id: String,
    /// The purchased variant, if the item came from the catalog.
    pub variant_id: Option<String>,
    /// SKU at time of purchase.
    pub sku: Option<String>,
    /// The purchased product, if the item came from the catalog.
    pub product_id: Option<String>,
    /// Product name at time of purchase.
    pub product_name: Option<String>,
    /// Units purchased.
    pub quantity: u32,
    /// Price paid per unit.
    pub unit_price_paid: Amount,
    /// Item kind, e.g. `PHYSICAL_PRODUCT` or `DIGITAL`.
    pub line_item_type: String,
}

/// A shipment recorded against an order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Fulfillment {
    /// ISO 8601 time the shipment left.
    pub ship_date: String,
    /// Shipping carrier, e.g. `USPS`.
    pub carrier_name: String,
    /// Carrier service level.
    pub service: String,
    /// Carrier tracking number.
    pub tracking_number: String,
    /// Link to the carrier's tracking page.
    pub tracking_url: Option<String>,
}

/// Body of [`create_order`].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Name of the channel the order came from.
    pub channel_name: String,
    /// The order's ID on that channel.
    pub external_order_reference: String,
    /// Email address of the customer.
    pub customer_email: String,
    /// Billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    /// Shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    /// Items to record on the order.
    pub line_items: Vec<CreateOrderLineItem>,
    /// `EXCLUSIVE` or `INCLUSIVE`.
    pub price_tax_interpretation: String,
    /// Sum of line items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<Amount>,
    /// Shipping charged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_total: Option<Amount>,
    /// Discounts applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_total: Option<Amount>,
    /// Tax charged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_total: Option<Amount>,
    /// Amount charged to the customer.
    pub grand_total: Amount,
    /// Initial status, `PENDING` or `FULFILLED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<String>,
    /// Whether the customer is emailed about the fulfillment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopper_fulfillment_notification_behavior: Option<String>,
    /// ISO 8601 UTC timestamp of the original order.
    pub created_on: String,
}

/// A line of a [`CreateOrderRequest`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderLineItem {
    /// `PHYSICAL_PRODUCT` or `CUSTOM`.
    pub line_item_type: String,
    /// Catalog variant, for items sold from the store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,
    /// Display name, for items without a variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    /// Units purchased.
    pub quantity: u32,
    /// Price paid per unit.
    pub unit_price_paid: Amount,
}

/// Body of [`fulfill_order`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillOrderRequest {
    /// Whether the customer is emailed about the shipment.
    pub should_send_notification: bool,
    /// Shipments to record.
    pub shipments: Vec<Shipment>,
}

/// A shipment in a [`FulfillOrderRequest`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    /// ISO 8601 time the shipment left.
    pub ship_date: String,
    /// Shipping carrier.
    pub carrier_name: String,
    /// Carrier service level.
    pub service: String,
    /// Carrier tracking number.
    pub tracking_number: String,
    /// Link to the carrier's tracking page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_url: Option<String>,
}

/// Response of [`retrieve_all_orders`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RetrieveAllOrdersResponse {
    /// Orders on this page.
    pub result: Vec<Order>,
    /// Cursor for the next page.
    pub pagination: Pagination,
}

const CREATE_ORDER: Endpoint = Endpoint::new(
    "CreateOrder",
    "create order",
    HttpMethod::Post,
    "commerce/orders",
    201,
)
.idempotent();
const FULFILL_ORDER: Endpoint = Endpoint::new(
    "FulfillOrder",
    "fulfill order",
    HttpMethod::Post,
    "commerce/orders/{orderId}/fulfillments",
    204,
);
const RETRIEVE_ALL_ORDERS: Endpoint = Endpoint::new(
    "RetrieveAllOrders",
    "retrieve all orders",
    HttpMethod::Get,
    "commerce/orders",
    200,
);
const RETRIEVE_SPECIFIC_ORDER: Endpoint = Endpoint::new(
    "RetrieveSpecificOrder",
    "retrieve order",
    HttpMethod::Get,
    "commerce/orders/{orderId}",
    200,
);

/// Imports an order.
///
/// # Errors
///
/// Returns [`CommerceError`] unless the API answers `201 Created`.
pub async fn create_order(
    config: &CommerceConfig,
    request: &CreateOrderRequest,
) -> Result<Order, CommerceError> {
    CREATE_ORDER.call(config).json(request)?.fetch().await
}

/// Records shipments for an order.
///
/// # Errors
///
/// Returns [`CommerceError::InvalidInput`] if `order_id` is empty, and
/// [`CommerceError`] unless the API answers `204 No Content`.
pub async fn fulfill_order(
    config: &CommerceConfig,
    order_id: &str,
    request: &FulfillOrderRequest,
) -> Result<u16, CommerceError> {
    require_id(order_id, ORDER_ID_REQUIRED)?;
    FULFILL_ORDER
        .call(config)
        .path_param("orderId", order_id)
        .json(request)?
        .status()
        .await
}

/// Lists orders.
///
/// Forwards `cursor`, `modifiedAfter` and `modifiedBefore`; `status` is sent
/// as `fulfillmentStatus`. `product_type`, `filter`, `sort_direction` and
/// `sort_field` are not sent. They still take part in validation, so a cursor
/// combined with any of them is rejected.
///
/// # Errors
///
/// Returns [`CommerceError::InvalidQuery`] if `params` fails validation, and
/// [`CommerceError`] unless the API answers `200 OK`.
pub async fn retrieve_all_orders(
    config: &CommerceConfig,
    params: &QueryParams,
) -> Result<RetrieveAllOrdersResponse, CommerceError> {
    params.validate()?;
    RETRIEVE_ALL_ORDERS
        .call(config)
        .query_param("cursor", params.cursor())
        .query_param("modifiedAfter", params.modified_after())
        .query_param("modifiedBefore", params.modified_before())
        .query_param("fulfillmentStatus", params.status())
        .fetch()
        .await
}

/// Fetches a single order.
///
/// # Errors
///
/// Returns [`CommerceError::InvalidInput`] if `order_id` is empty, and
/// [`CommerceError`] unless the API answers `200 OK`.
pub async fn retrieve_specific_order(
    config: &CommerceConfig,
    order_id: &str,
) -> Result<Order, CommerceError> {
    require_id(order_id, ORDER_ID_REQUIRED)?;
    RETRIEVE_SPECIFIC_ORDER
        .call(config)
        .path_param("orderId", order_id)
        .fetch()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_order_endpoint_is_idempotent() {
        assert!(CREATE_ORDER.idempotent);
        assert!(!FULFILL_ORDER.idempotent);
    }

    #[test]
    fn test_order_deserializes_with_missing_fields() {
        let order: Order = serde_json::from_value(json!({
            "id": "o1",
            "orderNumber": "1001",
            "fulfillmentStatus": "PENDING",
            "grandTotal": {"currency": "USD", "value": "12.00"},
            "lineItems": [{"id": "l1", "quantity": 2, "lineItemType": "PHYSICAL_PRODUCT",
                           "unitPricePaid": {"currency": "USD", "value": "6.00"}}]
        }))
        .unwrap();

        assert_eq!(order.order_number, "1001");
        assert_eq!(order.line_items[0].quantity, 2);
        assert!(order.fulfillments.is_empty());
        assert!(order.shipping_address.is_none());
    }

    #[test]
    fn test_fulfill_request_shape() {
        let request = FulfillOrderRequest {
            should_send_notification: true,
            shipments: vec![Shipment {
                ship_date: "2024-03-01T12:00:00Z".to_string(),
                carrier_name: "USPS".to_string(),
                service: "Priority".to_string(),
                tracking_number: "9400".to_string(),
                tracking_url: None,
            }],
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "shouldSendNotification": true,
                "shipments": [{
                    "shipDate": "2024-03-01T12:00:00Z",
                    "carrierName": "USPS",
                    "service": "Priority",
                    "trackingNumber": "9400"
                }]
            })
        );
    }
}
