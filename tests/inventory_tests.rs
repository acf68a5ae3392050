//! Integration tests for the Inventory API operations.

use serde_json::json;
use squarespace_commerce::rest::resources::inventory::{
    self, AdjustStockQuantitiesRequest, QuantityOperation,
};
use squarespace_commerce::{ApiKey, CommerceConfig, IdempotencyKey};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> CommerceConfig {
    CommerceConfig::builder()
        .api_key(ApiKey::new("test-api-key").unwrap())
        .base_url(server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_retrieve_all_inventory_pages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1.0/commerce/inventory"))
        .and(query_param("cursor", "next-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "inventory": [{"variantId": "v2", "sku": "S2", "descriptor": "Mug",
                           "isUnlimited": true, "quantity": 0}],
            "pagination": {"hasNextPage": false}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = inventory::retrieve_all_inventory(&config_for(&server), Some("next-1"))
        .await
        .unwrap();

    assert!(page.inventory[0].is_unlimited);
    assert!(!page.pagination.has_next_page);
}

#[tokio::test]
async fn test_retrieve_specific_inventory() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1.0/commerce/inventory/v1,v2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "inventory": [
                {"variantId": "v1", "sku": "S1", "quantity": 4},
                {"variantId": "v2", "sku": "S2", "quantity": 9}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = inventory::retrieve_specific_inventory(&config_for(&server), &["v1", "v2"])
        .await
        .unwrap();
    assert_eq!(response.inventory[1].quantity, 9);
}

#[tokio::test]
async fn test_retrieve_specific_inventory_bounds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = config_for(&server);
    let error = inventory::retrieve_specific_inventory::<String>(&config, &[])
        .await
        .unwrap_err();
    assert_eq!(error.to_string(), "no inventory IDs provided");

    let ids: Vec<String> = (0..51).map(|i| format!("v{i}")).collect();
    let error = inventory::retrieve_specific_inventory(&config, &ids)
        .await
        .unwrap_err();
    assert_eq!(error.to_string(), "cannot retrieve more than 50 inventory IDs");
}

#[tokio::test]
async fn test_adjust_stock_quantities() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/1.0/commerce/inventory/adjustments"))
        .and(header("Idempotency-Key", "adjust-7"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "decrementOperations": [{"variantId": "v1", "quantity": 2}],
            "setFiniteOperations": [{"variantId": "v2", "quantity": 10}]
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = config_for(&server);
    config.set_idempotency_key(Some(IdempotencyKey::new("adjust-7").unwrap()));

    let request = AdjustStockQuantitiesRequest {
        decrement_operations: vec![QuantityOperation::new("v1", 2)],
        set_finite_operations: vec![QuantityOperation::new("v2", 10)],
        ..AdjustStockQuantitiesRequest::default()
    };

    let status = inventory::adjust_stock_quantities(&config, &request)
        .await
        .unwrap();
    assert_eq!(status, 204);
}

#[tokio::test]
async fn test_adjust_stock_quantities_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/1.0/commerce/inventory/adjustments"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "type": "INVALID_REQUEST_ERROR",
            "subtype": "INSUFFICIENT_STOCK",
            "message": "Cannot decrement below zero"
        })))
        .mount(&server)
        .await;

    let error = inventory::adjust_stock_quantities(
        &config_for(&server),
        &AdjustStockQuantitiesRequest {
            decrement_operations: vec![QuantityOperation::new("v1", 100)],
            ..AdjustStockQuantitiesRequest::default()
        },
    )
    .await
    .unwrap_err();

    let message = error.to_string();
    assert!(message.contains(", subtype: INSUFFICIENT_STOCK, message: Cannot decrement below zero"));
    assert!(!message.contains("detail"));
}
