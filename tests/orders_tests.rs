//! Integration tests for the Orders API operations.

use serde_json::json;
use squarespace_commerce::rest::resources::common::Amount;
use squarespace_commerce::rest::resources::orders::{
    self, CreateOrderLineItem, CreateOrderRequest, FulfillOrderRequest, Shipment,
};
use squarespace_commerce::rest::QueryParams;
use squarespace_commerce::{ApiKey, CommerceConfig, CommerceError, IdempotencyKey};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> CommerceConfig {
    CommerceConfig::builder()
        .api_key(ApiKey::new("test-api-key").unwrap())
        .base_url(server.uri())
        .build()
        .unwrap()
}

fn create_request() -> CreateOrderRequest {
    CreateOrderRequest {
        channel_name: "Marketplace".to_string(),
        external_order_reference: "MP-100".to_string(),
        customer_email: "buyer@example.com".to_string(),
        line_items: vec![CreateOrderLineItem {
            line_item_type: "PHYSICAL_PRODUCT".to_string(),
            variant_id: Some("v1".to_string()),
            product_name: None,
            quantity: 2,
            unit_price_paid: Amount::new("USD", "5.00"),
        }],
        price_tax_interpretation: "EXCLUSIVE".to_string(),
        grand_total: Amount::new("USD", "10.00"),
        created_on: "2024-03-01T12:00:00Z".to_string(),
        ..CreateOrderRequest::default()
    }
}

// ============================================================================
// Create and Fulfill
// ============================================================================

#[tokio::test]
async fn test_create_order_sends_idempotency_key() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/1.0/commerce/orders"))
        .and(header("Idempotency-Key", "order-import-100"))
        .and(body_partial_json(json!({
            "channelName": "Marketplace",
            "externalOrderReference": "MP-100",
            "lineItems": [{"lineItemType": "PHYSICAL_PRODUCT", "variantId": "v1", "quantity": 2,
                           "unitPricePaid": {"currency": "USD", "value": "5.00"}}]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "o1",
            "orderNumber": "1001",
            "channel": "Marketplace",
            "fulfillmentStatus": "PENDING",
            "grandTotal": {"currency": "USD", "value": "10.00"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = CommerceConfig::builder()
        .api_key(ApiKey::new("test-api-key").unwrap())
        .idempotency_key(IdempotencyKey::new("order-import-100").unwrap())
        .base_url(server.uri())
        .build()
        .unwrap();

    let order = orders::create_order(&config, &create_request()).await.unwrap();
    assert_eq!(order.id, "o1");
    assert_eq!(order.channel, "Marketplace");
}

#[tokio::test]
async fn test_create_order_conflict() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/1.0/commerce/orders"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "type": "CONFLICT",
            "message": "Idempotency key reused with different body"
        })))
        .mount(&server)
        .await;

    let error = orders::create_order(&config_for(&server), &create_request())
        .await
        .unwrap_err();
    assert_eq!(error.status(), Some(409));
    assert!(error.to_string().starts_with("CreateOrder url: "));
}

#[tokio::test]
async fn test_fulfill_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/1.0/commerce/orders/o1/fulfillments"))
        .and(body_partial_json(json!({
            "shouldSendNotification": true,
            "shipments": [{"carrierName": "UPS", "trackingNumber": "1Z"}]
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let request = FulfillOrderRequest {
        should_send_notification: true,
        shipments: vec![Shipment {
            ship_date: "2024-03-02T09:00:00Z".to_string(),
            carrier_name: "UPS".to_string(),
            service: "Ground".to_string(),
            tracking_number: "1Z".to_string(),
            tracking_url: None,
        }],
    };

    let status = orders::fulfill_order(&config_for(&server), "o1", &request)
        .await
        .unwrap();
    assert_eq!(status, 204);
}

#[tokio::test]
async fn test_fulfill_order_requires_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let error = orders::fulfill_order(&config_for(&server), "", &FulfillOrderRequest::default())
        .await
        .unwrap_err();
    assert_eq!(error.to_string(), "orderID is required");
}

// ============================================================================
// Retrieval
// ============================================================================

#[tokio::test]
async fn test_retrieve_all_orders_sends_status_as_fulfillment_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1.0/commerce/orders"))
        .and(query_param("fulfillmentStatus", "PENDING"))
        .and(query_param("modifiedAfter", "2024-01-01T00:00:00Z"))
        .and(query_param("modifiedBefore", "2024-02-01T00:00:00Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [{"id": "o1", "orderNumber": "1001"}],
            "pagination": {"hasNextPage": false}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = QueryParams {
        status: Some("PENDING".to_string()),
        ..QueryParams::modified_between("2024-01-01T00:00:00Z", "2024-02-01T00:00:00Z")
    };

    let page = orders::retrieve_all_orders(&config_for(&server), &params)
        .await
        .unwrap();
    assert_eq!(page.result[0].order_number, "1001");
}

#[tokio::test]
async fn test_retrieve_all_orders_leaves_off_unsupported_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1.0/commerce/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [],
            "pagination": {"hasNextPage": false}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = QueryParams {
        product_type: Some("PHYSICAL".to_string()),
        filter: Some("isCustomer,true".to_string()),
        sort_direction: Some("ASC".to_string()),
        sort_field: Some("createdOn".to_string()),
        ..QueryParams::modified_between("2024-01-01T00:00:00Z", "2024-02-01T00:00:00Z")
    };

    orders::retrieve_all_orders(&config_for(&server), &params)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let keys: Vec<String> = requests[0]
        .url
        .query_pairs()
        .map(|(key, _)| key.into_owned())
        .collect();
    assert_eq!(keys, vec!["modifiedAfter", "modifiedBefore"]);
}

#[tokio::test]
async fn test_retrieve_all_orders_rejects_unpaired_range() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let params = QueryParams {
        modified_after: Some("2024-01-01T00:00:00Z".to_string()),
        ..QueryParams::default()
    };
    let error = orders::retrieve_all_orders(&config_for(&server), &params)
        .await
        .unwrap_err();

    assert!(matches!(error, CommerceError::InvalidQuery(_)));
    assert_eq!(
        error.to_string(),
        "invalid query parameters: modifiedAfter and modifiedBefore must both be specified together or not at all"
    );
}

#[tokio::test]
async fn test_retrieve_all_orders_rejects_bad_timestamp() {
    let server = MockServer::start().await;

    let params = QueryParams::modified_between("yesterday", "2024-02-01T00:00:00Z");
    let error = orders::retrieve_all_orders(&config_for(&server), &params)
        .await
        .unwrap_err();

    assert!(error
        .to_string()
        .contains("modifiedAfter is not a valid ISO 8601 UTC date-time string"));
}

#[tokio::test]
async fn test_retrieve_specific_order_escapes_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1.0/commerce/orders/o%201"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "o 1"})))
        .expect(1)
        .mount(&server)
        .await;

    let order = orders::retrieve_specific_order(&config_for(&server), "o 1")
        .await
        .unwrap();
    assert_eq!(order.id, "o 1");
}
