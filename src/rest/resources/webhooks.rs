//! Webhook Subscriptions API.
//!
//! Subscriptions belong to OAuth applications. Requests carry the same bearer
//! token as every other area, so an API-key-only config is sent as-is and the
//! API's `401` comes back as [`CommerceError::Api`].
//!
//! # Example
//!
//! ```rust,ignore
//! use squarespace_commerce::rest::resources::webhooks::{self, CreateWebhookSubscriptionRequest};
//!
//! let subscription = webhooks::create_webhook_subscription(
//!     &config,
//!     &CreateWebhookSubscriptionRequest {
//!         endpoint_url: "https://example.com/hooks".to_string(),
//!         topics: vec!["order.create".to_string()],
//!     },
//! )
//! .await?;
//!
//! // Store the secret to verify notification signatures.
//! println!("{}", subscription.secret);
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::config::CommerceConfig;
use crate::rest::endpoint::{require_id, Endpoint};
use crate::rest::errors::CommerceError;

const SUBSCRIPTION_ID_REQUIRED: &str = "subscriptionID cannot be empty";

/// A webhook subscription.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WebhookSubscription {
    /// The unique identifier of the subscription.
    pub id: String,
    /// HTTPS URL notifications are delivered to.
    pub endpoint_url: String,
    /// Subscribed topics, e.g. `order.create` or `extension.uninstall`.
    pub topics: Vec<String>,
    /// Shared secret for signing notifications.
    pub secret: String,
    /// ISO 8601 creation time.
    pub created_on: String,
    /// ISO 8601 time of the last change.
    pub updated_on: String,
}

/// Body of [`create_webhook_subscription`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWebhookSubscriptionRequest {
    /// HTTPS URL to deliver notifications to.
    pub endpoint_url: String,
    /// Topics to subscribe to, e.g. `order.create`. Must not be empty.
    pub topics: Vec<String>,
}

/// Body of [`update_webhook_subscription`]. Unset fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWebhookSubscriptionRequest {
    /// New delivery URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
    /// Replaces the topic list. `Some(vec![])` is rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
}

/// Body of [`send_test_notification`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SendTestNotificationRequest {
    /// Topic of the sample notification.
    pub topic: String,
}

/// Response of [`retrieve_all_webhook_subscriptions`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RetrieveAllWebhookSubscriptionsResponse {
    /// The application's subscriptions.
    pub webhook_subscriptions: Vec<WebhookSubscription>,
}

/// Response of [`send_test_notification`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTestNotificationResponse {
    /// Status code returned by the subscriber's endpoint.
    pub status_code: u16,
}

/// Response of [`rotate_subscription_secret`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RotateSubscriptionSecretResponse {
    /// The new signing secret.
    pub secret: String,
}

const CREATE_WEBHOOK_SUBSCRIPTION: Endpoint = Endpoint::new(
    "CreateWebhookSubscription",
    "create webhook subscription",
    HttpMethod::Post,
    "webhook_subscriptions",
    201,
);
const UPDATE_WEBHOOK_SUBSCRIPTION: Endpoint = Endpoint::new(
    "UpdateWebhookSubscription",
    "update webhook subscription",
    HttpMethod::Post,
    "webhook_subscriptions/{subscriptionId}",
    200,
);
const RETRIEVE_ALL_WEBHOOK_SUBSCRIPTIONS: Endpoint = Endpoint::new(
    "RetrieveAllWebhookSubscriptions",
    "retrieve webhook subscriptions",
    HttpMethod::Get,
    "webhook_subscriptions",
    200,
);
const RETRIEVE_SPECIFIC_WEBHOOK_SUBSCRIPTION: Endpoint = Endpoint::new(
    "RetrieveSpecificWebhookSubscription",
    "retrieve webhook subscription",
    HttpMethod::Get,
    "webhook_subscriptions/{subscriptionId}",
    200,
);
const DELETE_WEBHOOK_SUBSCRIPTION: Endpoint = Endpoint::new(
    "DeleteWebhookSubscription",
    "delete webhook subscription",
    HttpMethod::Delete,
    "webhook_subscriptions/{subscriptionId}",
    204,
);
const SEND_TEST_NOTIFICATION: Endpoint = Endpoint::new(
    "SendTestNotification",
    "send test notification",
    HttpMethod::Post,
    "webhook_subscriptions/{subscriptionId}/actions/sendTestNotification",
    200,
);
const ROTATE_SUBSCRIPTION_SECRET: Endpoint = Endpoint::new(
    "RotateSubscriptionSecret",
    "rotate subscription secret",
    HttpMethod::Post,
    "webhook_subscriptions/{subscriptionId}/actions/rotateSecret",
    200,
);

/// Subscribes an endpoint to a set of topics.
///
/// # Errors
///
/// Returns [`CommerceError::InvalidInput`] with no topics, and
/// [`CommerceError`] unless the API answers `201 Created`.
pub async fn create_webhook_subscription(
    config: &CommerceConfig,
    request: &CreateWebhookSubscriptionRequest,
) -> Result<WebhookSubscription, CommerceError> {
    if request.topics.is_empty() {
        return Err(CommerceError::invalid_input("topics cannot be empty"));
    }
    CREATE_WEBHOOK_SUBSCRIPTION
        .call(config)
        .json(request)?
        .fetch()
        .await
}

/// Changes a subscription's endpoint or topics.
///
/// # Errors
///
/// Returns [`CommerceError::InvalidInput`] with an empty `subscription_id` or
/// with `topics: Some(vec![])`, and [`CommerceError`] unless the API answers `200 OK`.
pub async fn update_webhook_subscription(
    config: &CommerceConfig,
    subscription_id: &str,
    request: &UpdateWebhookSubscriptionRequest,
) -> Result<WebhookSubscription, CommerceError> {
    require_id(subscription_id, SUBSCRIPTION_ID_REQUIRED)?;
    if request.topics.as_ref().is_some_and(Vec::is_empty) {
        return Err(CommerceError::invalid_input("topics cannot be an empty array"));
    }
    UPDATE_WEBHOOK_SUBSCRIPTION
        .call(config)
        .path_param("subscriptionId", subscription_id)
        .json(request)?
        .fetch()
        .await
}

/// Lists the application's subscriptions.
///
/// # Errors
///
/// Returns [`CommerceError`] unless the API answers `200 OK`.
pub async fn retrieve_all_webhook_subscriptions(
    config: &CommerceConfig,
) -> Result<RetrieveAllWebhookSubscriptionsResponse, CommerceError> {
    RETRIEVE_ALL_WEBHOOK_SUBSCRIPTIONS.call(config).fetch().await
}

/// Fetches a single subscription.
///
/// # Errors
///
/// Returns [`CommerceError::InvalidInput`] with an empty `subscription_id`,
/// and [`CommerceError`] unless the API answers `200 OK`.
pub async fn retrieve_specific_webhook_subscription(
    config: &CommerceConfig,
    subscription_id: &str,
) -> Result<WebhookSubscription, CommerceError> {
    require_id(subscription_id, SUBSCRIPTION_ID_REQUIRED)?;
    RETRIEVE_SPECIFIC_WEBHOOK_SUBSCRIPTION
        .call(config)
        .path_param("subscriptionId", subscription_id)
        .fetch()
        .await
}

/// Deletes a subscription.
///
/// # Errors
///
/// Returns [`CommerceError::InvalidInput`] with an empty `subscription_id`,
/// and [`CommerceError`] unless the API answers `204 No Content`.
pub async fn delete_webhook_subscription(
    config: &CommerceConfig,
    subscription_id: &str,
) -> Result<u16, CommerceError> {
    require_id(subscription_id, SUBSCRIPTION_ID_REQUIRED)?;
    DELETE_WEBHOOK_SUBSCRIPTION
        .call(config)
        .path_param("subscriptionId", subscription_id)
        .status()
        .await
}

/// Asks the API to deliver a sample notification for `topic`.
///
/// # Errors
///
/// Returns [`CommerceError::InvalidInput`] with an empty `subscription_id` or
/// an empty topic, and [`CommerceError`] unless the API answers `200 OK`.
pub async fn send_test_notification(
    config: &CommerceConfig,
    subscription_id: &str,
    request: &SendTestNotificationRequest,
) -> Result<SendTestNotificationResponse, CommerceError> {
    require_id(subscription_id, SUBSCRIPTION_ID_REQUIRED)?;
    if request.topic.is_empty() {
        return Err(CommerceError::invalid_input("topic is required"));
    }
    SEND_TEST_NOTIFICATION
        .call(config)
        .path_param("subscriptionId", subscription_id)
        .json(request)?
        .fetch()
        .await
}

/// Replaces a subscription's signing secret.
///
/// # Errors
///
/// Returns [`CommerceError::InvalidInput`] with an empty `subscription_id`,
/// and [`CommerceError`] unless the API answers `200 OK`.
pub async fn rotate_subscription_secret(
    config: &CommerceConfig,
    subscription_id: &str,
) -> Result<RotateSubscriptionSecretResponse, CommerceError> {
    require_id(subscription_id, SUBSCRIPTION_ID_REQUIRED)?;
    ROTATE_SUBSCRIPTION_SECRET
        .call(config)
        .path_param("subscriptionId", subscription_id)
        .fetch()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_request_omits_unset_fields() {
        let request = UpdateWebhookSubscriptionRequest {
            topics: Some(vec!["order.update".to_string()]),
            ..UpdateWebhookSubscriptionRequest::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"topics": ["order.update"]})
        );
    }

    #[test]
    fn test_subscription_list_deserializes() {
        let response: RetrieveAllWebhookSubscriptionsResponse = serde_json::from_value(json!({
            "webhookSubscriptions": [{
                "id": "w1",
                "endpointUrl": "https://example.com/hooks",
                "topics": ["order.create"],
                "secret": "s3cr3t",
                "createdOn": "2024-03-01T12:00:00Z",
                "updatedOn": "2024-03-01T12:00:00Z"
            }]
        }))
        .unwrap();
        assert_eq!(response.webhook_subscriptions[0].topics, vec!["order.create"]);
    }
}
